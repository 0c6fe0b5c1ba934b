use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use crate::hash::DEFAULT_CAPACITY;
use crate::hash::set::{IntoIter, Iter};
use crate::hash::table::{ChainTable, LoadFactor};
use crate::traits::{Collection, Set};
use crate::util::error::NotFound;

/// An unordered set over a [`ChainTable`](crate::hash::table::ChainTable): each item is held at
/// most once.
///
/// Uniqueness is decided above the table, by a membership probe ahead of every insertion; the
/// table itself would happily chain duplicates. Sets grow at half occupancy, earlier than
/// [`HashBag`](crate::hash::HashBag), keeping the expected chain length below one.
///
/// # Examples
/// ```
/// # use basic_collections::hash::HashSet;
/// let mut set = HashSet::new();
/// assert!(set.add("ant"));
/// assert!(!set.add("ant"), "An item can only be held once.");
/// assert!(set.contains(&"ant"));
/// ```
///
/// # Time Complexity
/// | Operation | Average | Worst Case |
/// |---|---|---|
/// | [`add`](HashSet::add) | `O(1)` | `O(n)` |
/// | [`remove`](HashSet::remove) | `O(1)` | `O(n)` |
/// | [`contains`](HashSet::contains) | `O(1)` | `O(n)` |
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    table: ChainTable<T, (), B>,
}

impl<T: Hash + Eq> HashSet<T> {
    /// Creates an empty set with the default number of buckets.
    pub fn new() -> HashSet<T> {
        Self::with_cap(DEFAULT_CAPACITY)
    }

    /// Creates an empty set with at least one bucket, however few are requested.
    pub fn with_cap(cap: usize) -> HashSet<T> {
        Self::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates an empty set which hashes with the provided hasher.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        Self::with_cap_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates an empty set with the provided bucket count and hasher.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            table: ChainTable::with_cap_and_hasher(cap, hasher, LoadFactor::KEYED),
        }
    }

    /// Returns the number of items in the set.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the set holds no items.
    pub const fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Returns the set's current bucket count.
    pub const fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Returns the set's current occupancy as a fraction of its bucket count.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Adds the provided value to the set, returning true if it was absent. A refused duplicate
    /// leaves the set untouched and drops the value.
    pub fn add(&mut self, item: T) -> bool {
        if self.contains(&item) {
            return false;
        }
        self.table.prepend(item, ());
        true
    }

    /// Removes the item equal to the provided value and returns it.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if no equal item is held.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, NotFound>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.remove(item).map(|(item, ())| item).ok_or(NotFound)
    }

    /// Returns true if the set holds an item equal to the provided value.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(item).is_some()
    }

    /// Returns a reference to the held item equal to the provided value, if any.
    pub fn find<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(item).map(|(item, ())| item)
    }

    /// Drops every item in the set, keeping the buckets.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over references to every item, in bucket order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.table.iter())
    }
}

impl<T: Hash + Eq> Default for HashSet<T> {
    fn default() -> HashSet<T> {
        HashSet::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> HashSet<T, B> {
        HashSet {
            table: self.table.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    /// Sets are equal when they hold the same items, wherever the two tables have chained them.
    fn eq(&self, other: &HashSet<T, B>) -> bool {
        self.len() == other.len() && self.iter().all(|item| other.contains(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> HashSet<T> {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashSet<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashSet<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the set, producing every item in bucket order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.table.into_iter())
    }
}

impl<T: Hash + Eq, B: BuildHasher> Collection<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("buckets", &self.table)
            .finish()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Display for HashSet<T, B> {
    /// Renders the items in bucket order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.iter()).finish()
    }
}
