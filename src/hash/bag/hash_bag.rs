use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use crate::hash::DEFAULT_CAPACITY;
use crate::hash::bag::{IntoIter, Iter};
use crate::hash::table::{ChainTable, LoadFactor};
use crate::traits::Collection;
use crate::util::error::NotFound;

/// An unordered multiset over a [`ChainTable`](crate::hash::table::ChainTable): duplicates
/// accumulate, chained in the same bucket.
///
/// Bags run their tables at up to four entries for every five buckets before growing, denser
/// than the keyed hash containers; duplicates lengthen a chain wherever they land, so growing
/// earlier buys less here.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the bag.
/// - `c`: The number of buckets.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)` amortised |
/// | `remove` | `O(n / c)` expected |
/// | `contains` / `count` | `O(n / c)` expected |
///
/// # Examples
/// ```
/// # use basic_collections::hash::HashBag;
/// let mut bag = HashBag::new();
/// bag.add("ant");
/// bag.add("bee");
/// bag.add("ant");
/// assert_eq!(bag.count(&"ant"), 2);
/// assert_eq!(bag.len(), 3);
/// ```
pub struct HashBag<T: Hash + Eq, B: BuildHasher = RandomState> {
    table: ChainTable<T, (), B>,
}

impl<T: Hash + Eq> HashBag<T> {
    /// Creates an empty bag with the default number of buckets.
    pub fn new() -> HashBag<T> {
        Self::with_cap(DEFAULT_CAPACITY)
    }

    /// Creates an empty bag with at least one bucket, however many are requested.
    pub fn with_cap(cap: usize) -> HashBag<T> {
        Self::with_cap_and_hasher(cap, RandomState::new())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashBag<T, B> {
    /// Creates an empty bag which hashes with the provided hasher.
    pub fn with_hasher(hasher: B) -> HashBag<T, B> {
        Self::with_cap_and_hasher(DEFAULT_CAPACITY, hasher)
    }

    /// Creates an empty bag with the provided bucket count and hasher.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashBag<T, B> {
        HashBag {
            table: ChainTable::with_cap_and_hasher(cap, hasher, LoadFactor::BAG),
        }
    }

    /// Returns the number of items in the bag, counting every duplicate.
    pub const fn len(&self) -> usize {
        self.table.len()
    }

    /// Returns true if the bag holds no items.
    pub const fn is_empty(&self) -> bool {
        self.table.len() == 0
    }

    /// Returns the bag's current bucket count.
    pub const fn cap(&self) -> usize {
        self.table.cap()
    }

    /// Returns the bag's current occupancy as a fraction of its bucket count.
    pub fn load_factor(&self) -> f64 {
        self.table.load_factor()
    }

    /// Adds the provided value to the bag. Duplicates accumulate rather than replace, each
    /// addition chaining in front of its equals.
    pub fn add(&mut self, item: T) {
        self.table.prepend(item, ());
    }

    /// Removes one item equal to the provided value and returns it: the most recently added of
    /// its duplicates.
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

    /// Returns true if the bag holds at least one item equal to the provided value.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.find(item).is_some()
    }

    /// Returns the number of items equal to the provided value, walking only their bucket.
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.table.count_matches(item)
    }

    /// Drops every item in the bag, keeping the buckets.
    pub fn clear(&mut self) {
        self.table.clear();
    }

    /// Returns an iterator over references to every item, in bucket order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(self.table.iter())
    }
}

impl<T: Hash + Eq> Default for HashBag<T> {
    fn default() -> HashBag<T> {
        HashBag::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashBag<T, B> {
    fn clone(&self) -> HashBag<T, B> {
        HashBag {
            table: self.table.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashBag<T, B> {
    /// Bags are equal when they hold the same items with the same multiplicities, wherever the
    /// two tables have chained them.
    fn eq(&self, other: &HashBag<T, B>) -> bool {
        self.len() == other.len() && self.iter().all(|item| self.count(item) == other.count(item))
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashBag<T, B> {}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashBag<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Hash + Eq> FromIterator<T> for HashBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> HashBag<T> {
        let mut bag = HashBag::new();
        bag.extend(iter);
        bag
    }
}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a HashBag<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for HashBag<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the bag, producing every item in bucket order.
    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.table.into_iter())
    }
}

impl<T: Hash + Eq, B: BuildHasher> Collection<T> for HashBag<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashBag::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashBag::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashBag::contains(self, item)
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for HashBag<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashBag")
            .field("buckets", &self.table)
            .finish()
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Display for HashBag<T, B> {
    /// Renders the items in bucket order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "#")?;
        f.debug_set().entries(self.iter()).finish()
    }
}
