use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::iter::FusedIterator;
use std::mem;
use std::ops::Index;

use crate::binary_tree::search_tree::{BinarySearchTree, Inorder, IntoInorder};
use crate::traits::Collection;
use crate::util::error::NotFound;
use crate::util::result::ResultExtension;

/// A key-value pair ordered by its key alone, so that a dictionary can hold entries in a search
/// tree without the values participating in the search order.
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
}

impl<K, V> Entry<K, V> {
    pub(crate) const fn new(key: K, value: V) -> Entry<K, V> {
        Entry { key, value }
    }

    /// Returns a reference to the entry's key.
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns a reference to the entry's value.
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the entry into its key and value.
    pub fn into_pair(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K: PartialEq, V> PartialEq for Entry<K, V> {
    fn eq(&self, other: &Entry<K, V>) -> bool {
        self.key == other.key
    }
}

impl<K: Eq, V> Eq for Entry<K, V> {}

impl<K: PartialOrd, V> PartialOrd for Entry<K, V> {
    fn partial_cmp(&self, other: &Entry<K, V>) -> Option<Ordering> {
        self.key.partial_cmp(&other.key)
    }
}

impl<K: Ord, V> Ord for Entry<K, V> {
    fn cmp(&self, other: &Entry<K, V>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    fn from((key, value): (K, V)) -> Entry<K, V> {
        Entry::new(key, value)
    }
}

/// A sorted dictionary over a [`BinarySearchTree`] of [`Entry`] items: each key is held at most
/// once and iteration always produces ascending key order.
///
/// Keys never change once held; [`insert`](TreeSortedDict::insert) overwrites the value of an
/// existing entry in place rather than re-adding it.
///
/// # Examples
/// ```
/// # use basic_collections::binary_tree::TreeSortedDict;
/// let mut dict = TreeSortedDict::new();
/// dict.insert("b", 2);
/// dict.insert("a", 1);
/// assert_eq!(dict.insert("b", 20), Some(2));
/// assert_eq!(dict.get(&"b"), Some(&20));
/// assert_eq!(dict.keys().collect::<Vec<_>>(), [&"a", &"b"]);
/// ```
pub struct TreeSortedDict<K, V> {
    tree: BinarySearchTree<Entry<K, V>>,
}

impl<K, V> TreeSortedDict<K, V> {
    /// Creates a new, empty dictionary.
    pub const fn new() -> TreeSortedDict<K, V> {
        TreeSortedDict {
            tree: BinarySearchTree::new(),
        }
    }

    /// Returns the number of entries in the dictionary.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the dictionary holds no entries.
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns the height in edges of the underlying tree: [`None`] when empty.
    pub fn height(&self) -> Option<usize> {
        self.tree.height()
    }

    /// Returns true if the underlying tree's height is within the heuristic bound for its size.
    pub fn is_balanced(&self) -> bool {
        self.tree.is_balanced()
    }

    /// Rebuilds the underlying tree at minimal height.
    pub fn rebalance(&mut self) {
        self.tree.rebalance();
    }

    /// Drops every entry in the dictionary.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over references to every entry in ascending key order.
    pub fn iter(&self) -> Inorder<'_, Entry<K, V>> {
        self.tree.inorder()
    }

    /// Returns an iterator over references to every key in ascending order.
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys(self.iter())
    }

    /// Returns an iterator over references to every value, in ascending order of their keys.
    pub fn values(&self) -> Values<'_, K, V> {
        Values(self.iter())
    }

    /// Returns the entry with the smallest key.
    pub fn first(&self) -> Option<(&K, &V)> {
        self.tree.first().map(|entry| (&entry.key, &entry.value))
    }

    /// Returns the entry with the largest key.
    pub fn last(&self) -> Option<(&K, &V)> {
        self.tree.last().map(|entry| (&entry.key, &entry.value))
    }
}

impl<K: Ord, V> TreeSortedDict<K, V> {
    /// Adds an entry to the dictionary, returning the previous value if the key was already
    /// held. Overwriting never moves the entry: the held key keeps its node.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(entry) = self.tree.find_by_mut(&|entry: &Entry<K, V>| key.cmp(&entry.key)) {
            return Some(mem::replace(&mut entry.value, value));
        }
        self.tree.add(Entry::new(key, value));
        None
    }

    /// Returns a reference to the value held against the provided key.
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .find_by(&|entry: &Entry<K, V>| key.cmp(entry.key.borrow()))
            .map(Entry::value)
    }

    /// Returns a mutable reference to the value held against the provided key. Keys themselves
    /// are never handed out mutably.
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .find_by_mut(&|entry: &Entry<K, V>| key.cmp(entry.key.borrow()))
            .map(|entry| &mut entry.value)
    }

    /// Returns references to the held key and value for the provided key.
    pub fn get_entry<Q>(&self, key: &Q) -> Option<(&K, &V)>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .find_by(&|entry: &Entry<K, V>| key.cmp(entry.key.borrow()))
            .map(|entry| (&entry.key, &entry.value))
    }

    /// Returns true if the dictionary holds an entry for the provided key.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the entry for the provided key and returns its value.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the key is not held.
    pub fn pop<Q>(&mut self, key: &Q) -> Result<V, NotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.pop_entry(key).map(|(_, value)| value)
    }

    /// Removes the entry for the provided key and returns both the held key and the value.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the key is not held.
    pub fn pop_entry<Q>(&mut self, key: &Q) -> Result<(K, V), NotFound>
    where
        K: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree
            .remove_by(&|entry: &Entry<K, V>| key.cmp(entry.key.borrow()))
            .map(Entry::into_pair)
            .ok_or(NotFound)
    }
}

impl<K, V> Default for TreeSortedDict<K, V> {
    fn default() -> TreeSortedDict<K, V> {
        TreeSortedDict::new()
    }
}

impl<K: Clone, V: Clone> Clone for TreeSortedDict<K, V> {
    fn clone(&self) -> TreeSortedDict<K, V> {
        TreeSortedDict {
            tree: self.tree.clone(),
        }
    }
}

impl<K: Ord, V: PartialEq> PartialEq for TreeSortedDict<K, V> {
    /// Dictionaries are equal when they hold the same keys against equal values. The underlying
    /// trees compare entries by key alone, so values are checked here.
    fn eq(&self, other: &TreeSortedDict<K, V>) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .zip(other.iter())
                .all(|(a, b)| a.key == b.key && a.value == b.value)
    }
}

impl<K: Ord, V: Eq> Eq for TreeSortedDict<K, V> {}

impl<K: Ord, V> Extend<(K, V)> for TreeSortedDict<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeSortedDict<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> TreeSortedDict<K, V> {
        let mut dict = TreeSortedDict::new();
        dict.extend(iter);
        dict
    }
}

impl<K, V, Q> Index<&Q> for TreeSortedDict<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    /// Returns a reference to the value held against the provided key.
    ///
    /// # Panics
    /// Panics if the key is not held.
    fn index(&self, key: &Q) -> &V {
        self.get(key).ok_or(NotFound).throw()
    }
}

impl<'a, K, V> IntoIterator for &'a TreeSortedDict<K, V> {
    type Item = &'a Entry<K, V>;

    type IntoIter = Inorder<'a, Entry<K, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> IntoIterator for TreeSortedDict<K, V> {
    type Item = Entry<K, V>;

    type IntoIter = IntoInorder<Entry<K, V>>;

    /// Consumes the dictionary, producing every entry in ascending key order.
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_inorder()
    }
}

impl<K: Ord, V> Collection<Entry<K, V>> for TreeSortedDict<K, V> {
    type Iter<'a> = Inorder<'a, Entry<K, V>> where Self: 'a, Entry<K, V>: 'a;

    fn len(&self) -> usize {
        TreeSortedDict::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        TreeSortedDict::iter(self)
    }

    fn contains(&self, entry: &Entry<K, V>) -> bool {
        self.contains_key(&entry.key)
    }
}

impl<K: Debug, V: Debug> Debug for TreeSortedDict<K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSortedDict")
            .field("tree", &self.tree)
            .finish()
    }
}

impl<K: Debug, V: Debug> Display for TreeSortedDict<K, V> {
    /// Renders the entries in ascending key order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|entry| (&entry.key, &entry.value)))
            .finish()
    }
}

/// A borrowed iterator over a dictionary's keys in ascending order.
pub struct Keys<'a, K, V>(Inorder<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// A borrowed iterator over a dictionary's values in ascending order of their keys.
pub struct Values<'a, K, V>(Inorder<'a, Entry<K, V>>);

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Entry::value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}
