use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::Index;

use crate::hash::DEFAULT_CAPACITY;
use crate::hash::dict::{IntoIter, IntoKeys, IntoValues, Iter, IterMut, Keys, Values, ValuesMut};
use crate::hash::table::{ChainTable, LoadFactor};
use crate::traits::Collection;
use crate::util::error::NotFound;
use crate::util::result::ResultExtension;

/// An unordered dictionary over a [`ChainTable`](crate::hash::table::ChainTable), associating
/// each key with exactly one value.
///
/// Inserting against a held key replaces its value in place, so a key's position in its chain
/// never moves once placed. Like [`HashSet`](crate::hash::HashSet), dictionaries grow at half
/// occupancy.
///
/// # Examples
/// ```
/// # use basic_collections::hash::HashDict;
/// let mut ages = HashDict::new();
/// assert_eq!(ages.insert("ant", 6), None);
/// assert_eq!(ages.insert("ant", 7), Some(6));
/// assert_eq!(ages.get(&"ant"), Some(&7));
/// ```
///
/// # Time Complexity
/// | Operation | Average | Worst Case |
/// |---|---|---|
/// | [`insert`](HashDict::insert) | `O(1)` | `O(n)` |
/// | [`get`](HashDict::get) | `O(1)` | `O(n)` |
/// | [`pop`](HashDict::pop) | `O(1)` | `O(n)` |
pub struct HashDict<K: Hash + Eq, V, B: BuildHasher = RandomState> {
    table: ChainTable<K, V, B>,
}

impl<K: Hash + Eq, V> HashDict<K, V> {
    /// Creates an empty dictionary with the default number of buckets.
    pub fn new() -> HashDict<K, V> {
        Self::with_cap(DEFAULT_CAPACITY)
    }

    /// Creates an empty dictionary with at least one bucket, however few are requested.
    pub fn with_cap(cap: usize) -> HashDict<K, V> {
        Self::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> HashDict<K, V, B> {
    /// Creates an empty dictionary which hashes with the provided hasher.
    pub fn with_hasher(hasher: B) -> HashDict<K, V, B> {
        Self::with_cap_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates an empty dictionary with the provided bucket count and hasher.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashDict<K, V, B> {
        HashDict {
            table: ChainTable::with_cap_and_hasher(cap, hasher, LoadFactor::KEYED),
        }
    }

    /// Returns the number of keys in the dictionary.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the dictionary holds no keys.
    pub const fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Returns the dictionary's current bucket count.
    pub const fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Returns the dictionary's current occupancy as a fraction of its bucket count.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Associates the provided key with the provided value, returning the value it replaces if
    /// the key was already held. Only a fresh key occupies a new chain link.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(held) = self.table.find_value_mut(&key) {
            return Some(std::mem::replace(held, value));
        }
        self.table.prepend(key, value);
        None
    }

    /// Returns a reference to the value held against the provided key, if any.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).map(|entry| &entry.1)
    }

    /// Returns a mutable reference to the value held against the provided key, if any.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find_value_mut(key)
    }

    /// Returns references to the held key equal to the provided one and its value, if any.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).map(|entry| (&entry.0, &entry.1))
    }

    /// Returns true if the dictionary holds the provided key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(key).is_some()
    }

    /// Removes the provided key and returns the value held against it.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the key is not held.
    pub fn pop<Q>(&mut self, key: &Q) -> Result<V, NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(key).map(|(_, value)| value).ok_or(NotFound)
    }

    /// Removes the provided key and returns it along with the value held against it.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the key is not held.
    pub fn pop_entry<Q>(&mut self, key: &Q) -> Result<(K, V), NotFound>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(key).ok_or(NotFound)
    }

    /// Drops every entry in the dictionary, keeping the buckets.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over references to every entry, in bucket order.
    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter(self.table.iter())
    }

    /// Returns an iterator over every entry, borrowing the values mutably. Keys stay shared so
    /// they cannot be edited out of their buckets.
    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut(self.table.iter_mut())
    }

    /// Returns an iterator over references to every key, in bucket order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over references to every value, in bucket order.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns an iterator over mutable references to every value, in bucket order.
    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        ValuesMut(self.iter_mut())
    }

    /// Consumes the dictionary, producing every key in bucket order.
    pub fn into_keys(self) -> IntoKeys<K, V> {
        IntoKeys(self.into_iter())
    }

    /// Consumes the dictionary, producing every value in bucket order.
    pub fn into_values(self) -> IntoValues<K, V> {
        IntoValues(self.into_iter())
    }
}

impl<K: Hash + Eq, V> Default for HashDict<K, V> {
    fn default() -> HashDict<K, V> {
        HashDict::new()
    }
}

impl<K: Hash + Eq + Clone, V: Clone, B: BuildHasher + Clone> Clone for HashDict<K, V, B> {
    fn clone(&self) -> HashDict<K, V, B> {
        HashDict {
            table: self.table.clone(),
        }
    }
}

impl<K: Hash + Eq, V: PartialEq, B: BuildHasher> PartialEq for HashDict<K, V, B> {
    /// Dictionaries are equal when every key is held by both against equal values.
    fn eq(&self, other: &HashDict<K, V, B>) -> bool {
        self.len() == other.len()
            && self.iter().all(|(key, value)| other.get(key) == Some(value))
    }
}

impl<K: Hash + Eq, V: Eq, B: BuildHasher> Eq for HashDict<K, V, B> {}

impl<K: Hash + Eq, V, B: BuildHasher> Extend<(K, V)> for HashDict<K, V, B> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for HashDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> HashDict<K, V> {
        let mut dict = HashDict::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V, B, Q> Index<&Q> for HashDict<K, V, B>
where
    K: Hash + Eq + Borrow<Q>,
    Q: Hash + Eq + ?Sized,
    B: BuildHasher,
{
    type Output = V;

    /// Returns a reference to the value held against the provided key.
    ///
    /// # Panics
    /// Panics with [`NotFound`] if the key is not held.
    fn index(&self, key: &Q) -> &V {
        self.get(key).ok_or(NotFound).throw()
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a HashDict<K, V, B> {
    type Item = &'a (K, V);

    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, K: Hash + Eq, V, B: BuildHasher> IntoIterator for &'a mut HashDict<K, V, B> {
    type Item = (&'a K, &'a mut V);

    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> IntoIterator for HashDict<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    /// Consumes the dictionary, producing every entry in bucket order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.table.into_iter())
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> Collection<(K, V)> for HashDict<K, V, B> {
    type Iter<'a> = Iter<'a, K, V> where Self: 'a, (K, V): 'a;

    fn len(&self) -> usize {
        HashDict::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashDict::iter(self)
    }

    /// Membership is keyed: the entry's value plays no part.
    fn contains(&self, entry: &(K, V)) -> bool {
        self.contains_key(&entry.0)
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Debug for HashDict<K, V, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashDict")
            .field("buckets", &self.table)
            .finish()
    }
}

impl<K: Hash + Eq + Debug, V: Debug, B: BuildHasher> Display for HashDict<K, V, B> {
    /// Renders the entries as `key: value` pairs, in bucket order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_map()
            .entries(self.iter().map(|entry| (&entry.0, &entry.1)))
            .finish()
    }
}
