use std::borrow::Borrow;
use std::fmt::{self, Debug, Formatter};
use std::hash::{BuildHasher, Hash};
use std::{cmp, mem};

use crate::contiguous::Array;
use crate::hash::table::{IntoIter, Iter, IterMut};

/// Number of buckets a growth step multiplies the table by.
const GROWTH_FACTOR: usize = 2;

/// The occupancy a table tolerates before an insertion grows it, as the fraction `num / den`.
///
/// Thresholds are compared by integer cross-multiplication, so the boundary itself is exact: a
/// table is overloaded once `len * den > cap * num`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LoadFactor {
    pub num: usize,
    pub den: usize,
}

impl LoadFactor {
    /// Bags run their tables at up to four entries for every five buckets.
    pub const BAG: LoadFactor = LoadFactor { num: 4, den: 5 };
    /// Sets and dictionaries grow at half occupancy.
    pub const KEYED: LoadFactor = LoadFactor { num: 1, den: 2 };
}

/// A bucket's overload chain: empty, or a link to its most recently added entry.
pub(crate) type Chain<K, V> = Option<Box<ChainNode<K, V>>>;

#[derive(Clone)]
pub(crate) struct ChainNode<K, V> {
    pub entry: (K, V),
    pub next: Chain<K, V>,
}

/// The engine shared by the hash containers: an array of buckets, each an owned singly linked
/// chain of entries, with colliding entries prepended so a bucket always leads with its most
/// recent addition.
///
/// The table never refuses an entry and never inspects values; the containers above it decide
/// uniqueness and replacement. What it does police is its own occupancy: any insertion tipping
/// `len / cap` over the configured [`LoadFactor`] doubles the bucket count and relinks every
/// node into its new bucket, repeating until the load is back under the threshold.
#[derive(Clone)]
pub(crate) struct ChainTable<K, V, B> {
    buckets: Array<Chain<K, V>>,
    len: usize,
    hasher: B,
    load_factor: LoadFactor,
}

impl<K, V, B> ChainTable<K, V, B> {
    pub fn with_cap_and_hasher(cap: usize, hasher: B, load_factor: LoadFactor) -> ChainTable<K, V, B> {
        ChainTable {
            // A table always holds at least one bucket, keeping the index math defined.
            buckets: Array::repeat_default(cmp::max(cap, 1)),
            len: 0,
            hasher,
            load_factor,
        }
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn cap(&self) -> usize {
        self.buckets.size()
    }

    /// Returns the table's current occupancy as a fraction of its bucket count. Chains make
    /// values above one possible.
    pub fn load_factor(&self) -> f64 {
        self.len as f64 / self.cap() as f64
    }

    const fn is_overloaded(&self) -> bool {
        self.len * self.load_factor.den > self.cap() * self.load_factor.num
    }

    /// Drops every entry, keeping the buckets at their current count.
    pub fn clear(&mut self) {
        for chain in self.buckets.iter_mut() {
            // Unlink one node at a time; dropping a chain whole would recurse per link.
            let mut current = chain.take();
            while let Some(mut node) = current {
                current = node.next.take();
            }
        }
        self.len = 0;
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        Iter {
            buckets: self.buckets.iter(),
            node: None,
            remaining: self.len,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        IterMut {
            buckets: self.buckets.iter_mut(),
            node: None,
            remaining: self.len,
        }
    }
}

impl<K: Hash + Eq, V, B: BuildHasher> ChainTable<K, V, B> {
    /// Maps a key to its bucket. The hash is reduced by remainder, so every bucket is reachable
    /// at any capacity.
    fn index_of<Q>(&self, key: &Q) -> usize
    where
        Q: Hash + ?Sized,
    {
        (self.hasher.hash_one(key) % self.cap() as u64) as usize
    }

    /// Links a new entry in at the front of its bucket's chain, then grows the table as many
    /// times as it takes to get back under the load factor.
    ///
    /// The caller decides whether the key may coexist with an equal one already held; the table
    /// itself accepts anything.
    pub fn prepend(&mut self, key: K, value: V) {
        let index = self.index_of(&key);
        let next = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(ChainNode {
            entry: (key, value),
            next,
        }));
        self.len += 1;

        while self.is_overloaded() {
            self.grow();
        }
    }

    /// Doubles the bucket count and relinks every node into the bucket its key now maps to.
    /// Nodes move by pointer; entries are never copied or rehashed into new allocations.
    ///
    /// Relinking prepends, so each new chain ends up ordered by how late its nodes were reached
    /// here, not by original insertion.
    fn grow(&mut self) {
        let new_cap = self.cap() * GROWTH_FACTOR;
        let old_buckets = mem::replace(&mut self.buckets, Array::repeat_default(new_cap));

        for mut chain in old_buckets {
            while let Some(mut node) = chain {
                chain = node.next.take();
                let index = self.index_of(&node.entry.0);
                node.next = self.buckets[index].take();
                self.buckets[index] = Some(node);
            }
        }
    }

    /// Returns the first entry in the key's chain whose key matches, which with prepending is
    /// the most recently added match.
    pub fn find<Q>(&self, key: &Q) -> Option<&(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut current = self.buckets[self.index_of(key)].as_deref();
        while let Some(node) = current {
            if node.entry.0.borrow() == key {
                return Some(&node.entry);
            }
            current = node.next.as_deref();
        }
        None
    }

    /// Returns a mutable reference to the value of the most recently added match. Keys are
    /// never handed out mutably; a changed key would strand its node in a stale bucket.
    pub fn find_value_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key);
        let mut current = self.buckets[index].as_deref_mut();
        while let Some(node) = current {
            if node.entry.0.borrow() == key {
                return Some(&mut node.entry.1);
            }
            current = node.next.as_deref_mut();
        }
        None
    }

    /// Unlinks the most recently added entry matching the key and returns it.
    ///
    /// The walk re-reads the links it is about to splice in this same pass, so nothing is
    /// altered until the match is certain and a miss leaves the table untouched.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.index_of(key);
        let mut slot = &mut self.buckets[index];

        while slot.as_ref().is_some_and(|node| node.entry.0.borrow() != key) {
            // UNWRAP: The loop condition just matched this slot as occupied.
            slot = &mut slot.as_mut().unwrap().next;
        }

        let mut node = slot.take()?;
        *slot = node.next.take();
        self.len -= 1;
        Some(node.entry)
    }

    /// Returns how many entries in the key's chain match it.
    pub fn count_matches<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut count = 0;
        let mut current = self.buckets[self.index_of(key)].as_deref();
        while let Some(node) = current {
            if node.entry.0.borrow() == key {
                count += 1;
            }
            current = node.next.as_deref();
        }
        count
    }
}

impl<K, V, B> Drop for ChainTable<K, V, B> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<K, V, B> IntoIterator for ChainTable<K, V, B> {
    type Item = (K, V);

    type IntoIter = IntoIter<K, V>;

    fn into_iter(mut self) -> Self::IntoIter {
        let remaining = self.len;
        self.len = 0;
        // The bucket array moves into the iterator, leaving the table's Drop an empty one.
        let buckets = mem::take(&mut self.buckets);

        IntoIter {
            buckets: buckets.into_iter(),
            chain: None,
            remaining,
        }
    }
}

impl<K: Debug, V: Debug, B> Debug for ChainTable<K, V, B> {
    /// Renders every bucket in slot order: `-` for an empty bucket, otherwise the chain front to
    /// back as `(key: value) -> ...`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.buckets.iter().map(ChainDebug))
            .finish()
    }
}

struct ChainDebug<'a, K, V>(&'a Chain<K, V>);

impl<K: Debug, V: Debug> Debug for ChainDebug<'_, K, V> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut current = self.0.as_deref();
        if current.is_none() {
            return write!(f, "-");
        }
        while let Some(node) = current {
            write!(f, "({:?}: {:?})", node.entry.0, node.entry.1)?;
            current = node.next.as_deref();
            if current.is_some() {
                write!(f, " -> ")?;
            }
        }
        Ok(())
    }
}
