use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use crate::binary_tree::search_tree::{BinarySearchTree, Inorder, IntoInorder};
use crate::traits::{Collection, Set};
use crate::util::error::NotFound;

/// A sorted set over a [`BinarySearchTree`]: each item is held at most once and iteration always
/// produces ascending order.
///
/// Uniqueness is decided above the tree, by a membership probe ahead of every insertion; the
/// tree itself would happily hold duplicates.
///
/// # Examples
/// ```
/// # use basic_collections::binary_tree::TreeSortedSet;
/// let mut set = TreeSortedSet::new();
/// assert!(set.add(2));
/// assert!(set.add(1));
/// assert!(!set.add(2), "An item can only be held once.");
/// assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2]);
/// ```
pub struct TreeSortedSet<T> {
    tree: BinarySearchTree<T>,
}

impl<T> TreeSortedSet<T> {
    /// Creates a new, empty set.
    pub const fn new() -> TreeSortedSet<T> {
        TreeSortedSet {
            tree: BinarySearchTree::new(),
        }
    }

    /// Returns the number of items in the set.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the set holds no items.
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

    /// Drops every item in the set.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over references to every item in ascending order.
    pub fn iter(&self) -> Inorder<'_, T> {
        self.tree.inorder()
    }

    /// Returns a reference to the smallest item in the set.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns a reference to the largest item in the set.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Removes and returns the smallest item in the set.
    pub fn take_first(&mut self) -> Option<T> {
        self.tree.take_first()
    }

    /// Removes and returns the largest item in the set.
    pub fn take_last(&mut self) -> Option<T> {
        self.tree.take_last()
    }
}

impl<T: Ord> TreeSortedSet<T> {
    /// Adds the provided value to the set, returning true if it was absent. A refused duplicate
    /// leaves the set untouched and drops the value.
    pub fn add(&mut self, item: T) -> bool {
        if self.tree.contains(&item) {
            return false;
        }
        self.tree.add(item);
        true
    }

    /// Removes the item equal to the provided value and returns it.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if no equal item is held.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, NotFound>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.remove(item)
    }

    /// Returns true if the set holds an item equal to the provided value.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(item)
    }

    /// Returns a reference to the held item equal to the provided value, if any.
    pub fn find<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.find(item)
    }
}

impl<T> Default for TreeSortedSet<T> {
    fn default() -> TreeSortedSet<T> {
        TreeSortedSet::new()
    }
}

impl<T: Clone> Clone for TreeSortedSet<T> {
    fn clone(&self) -> TreeSortedSet<T> {
        TreeSortedSet {
            tree: self.tree.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for TreeSortedSet<T> {
    /// Sets are equal when they hold the same items, regardless of the shapes of their trees.
    fn eq(&self, other: &TreeSortedSet<T>) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq> Eq for TreeSortedSet<T> {}

impl<T: Ord> Extend<T> for TreeSortedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for TreeSortedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> TreeSortedSet<T> {
        let mut set = TreeSortedSet::new();
        set.extend(iter);
        set
    }
}

impl<'a, T> IntoIterator for &'a TreeSortedSet<T> {
    type Item = &'a T;

    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for TreeSortedSet<T> {
    type Item = T;

    type IntoIter = IntoInorder<T>;

    /// Consumes the set, producing every item in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_inorder()
    }
}

impl<T: Ord> Collection<T> for TreeSortedSet<T> {
    type Iter<'a> = Inorder<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        TreeSortedSet::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        TreeSortedSet::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        TreeSortedSet::contains(self, item)
    }
}

impl<T: Ord> Set<T> for TreeSortedSet<T> {}

impl<T: Debug> Debug for TreeSortedSet<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSortedSet")
            .field("tree", &self.tree)
            .finish()
    }
}

impl<T: Debug> Display for TreeSortedSet<T> {
    /// Renders the items in ascending order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
