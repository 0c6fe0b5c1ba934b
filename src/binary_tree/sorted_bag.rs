use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use crate::binary_tree::search_tree::{BinarySearchTree, Inorder, IntoInorder};
use crate::traits::Collection;
use crate::util::error::NotFound;

/// A sorted multiset over a [`BinarySearchTree`]: duplicates accumulate and iteration always
/// produces ascending order.
///
/// The bag inherits the tree's shape behaviour, including degradation under sorted insertion;
/// [`is_balanced`](TreeSortedBag::is_balanced) and [`rebalance`](TreeSortedBag::rebalance) are
/// exposed for callers that care about the resulting lookup cost.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the bag.
/// - `h`: The height of the underlying tree.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` | `O(h)` |
/// | `count` | `O(n)` |
///
/// # Examples
/// ```
/// # use basic_collections::binary_tree::TreeSortedBag;
/// let mut bag = TreeSortedBag::new();
/// bag.add(2);
/// bag.add(1);
/// bag.add(2);
/// assert_eq!(bag.count(&2), 2);
/// assert_eq!(bag.iter().collect::<Vec<_>>(), [&1, &2, &2]);
/// ```
pub struct TreeSortedBag<T> {
    tree: BinarySearchTree<T>,
}

impl<T> TreeSortedBag<T> {
    /// Creates a new, empty bag.
    pub const fn new() -> TreeSortedBag<T> {
        TreeSortedBag {
            tree: BinarySearchTree::new(),
        }
    }

    /// Returns the number of items in the bag, counting every duplicate.
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns true if the bag holds no items.
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

    /// Drops every item in the bag.
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Returns an iterator over references to every item in ascending order.
    pub fn iter(&self) -> Inorder<'_, T> {
        self.tree.inorder()
    }

    /// Returns a reference to the smallest item in the bag.
    pub fn first(&self) -> Option<&T> {
        self.tree.first()
    }

    /// Returns a reference to the largest item in the bag.
    pub fn last(&self) -> Option<&T> {
        self.tree.last()
    }

    /// Removes and returns the smallest item in the bag.
    pub fn take_first(&mut self) -> Option<T> {
        self.tree.take_first()
    }

    /// Removes and returns the largest item in the bag.
    pub fn take_last(&mut self) -> Option<T> {
        self.tree.take_last()
    }
}

impl<T: Ord> TreeSortedBag<T> {
    /// Adds the provided value to the bag. Duplicates accumulate rather than replace.
    pub fn add(&mut self, item: T) {
        self.tree.add(item);
    }

    /// Removes one item equal to the provided value and returns it.
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

    /// Returns true if the bag holds at least one item equal to the provided value.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.contains(item)
    }

    /// Returns the number of items equal to the provided value.
    pub fn count<Q>(&self, item: &Q) -> usize
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.tree.range_find(item, item).len()
    }
}

impl<T> Default for TreeSortedBag<T> {
    fn default() -> TreeSortedBag<T> {
        TreeSortedBag::new()
    }
}

impl<T: Clone> Clone for TreeSortedBag<T> {
    fn clone(&self) -> TreeSortedBag<T> {
        TreeSortedBag {
            tree: self.tree.clone(),
        }
    }
}

impl<T: PartialEq> PartialEq for TreeSortedBag<T> {
    /// Bags are equal when they hold the same items with the same multiplicities, regardless of
    /// the shapes of their trees.
    fn eq(&self, other: &TreeSortedBag<T>) -> bool {
        self.tree == other.tree
    }
}

impl<T: Eq> Eq for TreeSortedBag<T> {}

impl<T: Ord> Extend<T> for TreeSortedBag<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.tree.extend(iter);
    }
}

impl<T: Ord> FromIterator<T> for TreeSortedBag<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> TreeSortedBag<T> {
        TreeSortedBag {
            tree: iter.into_iter().collect(),
        }
    }
}

impl<'a, T> IntoIterator for &'a TreeSortedBag<T> {
    type Item = &'a T;

    type IntoIter = Inorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> IntoIterator for TreeSortedBag<T> {
    type Item = T;

    type IntoIter = IntoInorder<T>;

    /// Consumes the bag, producing every item in ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.tree.into_inorder()
    }
}

impl<T: Ord> Collection<T> for TreeSortedBag<T> {
    type Iter<'a> = Inorder<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        TreeSortedBag::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        TreeSortedBag::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        TreeSortedBag::contains(self, item)
    }
}

impl<T: Debug> Debug for TreeSortedBag<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeSortedBag")
            .field("tree", &self.tree)
            .finish()
    }
}

impl<T: Debug> Display for TreeSortedBag<T> {
    /// Renders the items in ascending order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
