use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem;

use crate::binary_tree::search_tree::{
    Branch, Inorder, IntoInorder, Levelorder, Node, Postorder, Preorder,
};
use crate::contiguous::Vector;
use crate::stack::ArrayStack;
use crate::traits::Collection;
use crate::util::error::NotFound;
use crate::util::option::OptionExtension;

/// Multiplier applied to the log of the size in the balance heuristic.
const BALANCE_FACTOR: f64 = 2.0;
/// Offset subtracted from the scaled log in the balance heuristic.
const BALANCE_OFFSET: f64 = 1.0;

/// An unbalanced binary search tree with owned child links.
///
/// Items are kept in sorted order by comparison-routed descent from the root: anything less than
/// a node sits somewhere in its left subtree, anything greater or equal somewhere in its right.
/// Duplicates are permitted and land after the copies already held; the sorted containers in
/// [`binary_tree`](crate::binary_tree) build uniqueness and entry policies on top of this type.
///
/// No operation rebalances automatically, so a pathological insertion order (sorted input being
/// the classic case) degrades the tree into a chain. [`is_balanced`] flags that state and
/// [`rebalance`] rebuilds the tree at minimal height.
///
/// [`is_balanced`]: BinarySearchTree::is_balanced
/// [`rebalance`]: BinarySearchTree::rebalance
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the tree.
/// - `h`: The height of the tree: `O(log n)` while balanced, `O(n)` once degenerate.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(h)` |
/// | `remove` | `O(h)` |
/// | `contains` / `find` | `O(h)` |
/// | `predecessor` / `successor` | `O(h)` |
/// | `height` / `is_balanced` | `O(n)` |
/// | `rebalance` | `O(n)` |
///
/// # Examples
/// ```
/// # use basic_collections::binary_tree::BinarySearchTree;
/// let mut tree = BinarySearchTree::new();
/// tree.add(50);
/// tree.add(30);
/// tree.add(70);
/// assert!(tree.contains(&30));
/// assert_eq!(tree.remove(&30), Ok(30));
/// assert!(!tree.contains(&30));
/// ```
pub struct BinarySearchTree<T> {
    root: Branch<T>,
    size: usize,
}

impl<T> BinarySearchTree<T> {
    /// Creates a new, empty tree. Nodes are allocated individually as items are added.
    pub const fn new() -> BinarySearchTree<T> {
        BinarySearchTree {
            root: Branch(None),
            size: 0,
        }
    }

    /// Returns the number of items in the tree.
    pub const fn len(&self) -> usize {
        self.size
    }

    /// Returns true if the tree holds no items.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the height of the tree in edges: [`None`] when empty and `Some(0)` for a single
    /// item.
    pub fn height(&self) -> Option<usize> {
        self.root.height()
    }

    /// Returns true if the tree's height is within a heuristic bound of the minimum possible for
    /// its size.
    ///
    /// The check flags grossly degenerate shapes (long chains), not strict balance: a tree that
    /// passes may still be a couple of levels taller than a freshly [`rebalance`]d one.
    ///
    /// [`rebalance`]: BinarySearchTree::rebalance
    pub fn is_balanced(&self) -> bool {
        match self.height() {
            Some(height) => {
                (height as f64) < BALANCE_FACTOR * ((self.size + 1) as f64).log2() - BALANCE_OFFSET
            },
            None => true,
        }
    }

    /// Rebuilds the tree at minimal height, preserving sorted order. Costs `O(n)` and touches
    /// every node, so call it once the shape has degraded rather than after every mutation.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::binary_tree::BinarySearchTree;
    /// let mut tree: BinarySearchTree<_> = (1..=7).collect();
    /// assert_eq!(tree.height(), Some(6));
    /// tree.rebalance();
    /// assert_eq!(tree.height(), Some(2));
    /// ```
    pub fn rebalance(&mut self) {
        let mut items = Vector::with_cap(self.size);
        let mut stack = ArrayStack::new();
        let mut current = mem::take(&mut self.root.0);

        // Drain in-order: run down each left spine, then step through the stacked nodes.
        while current.is_some() || !stack.is_empty() {
            while let Some(mut node) = current {
                current = mem::take(&mut node.left.0);
                stack.push(node);
            }
            if let Some(mut node) = stack.pop() {
                current = mem::take(&mut node.right.0);
                items.push(node.into_data());
            }
        }

        let len = items.len();
        let mut items = items.into_iter();
        self.root = Self::build_balanced(&mut items, len);
    }

    /// Builds a subtree of minimal height from the next `len` items of an iterator yielding them
    /// in ascending order, taking the middle of each span as its root.
    fn build_balanced<I>(items: &mut I, len: usize) -> Branch<T>
    where
        I: Iterator<Item = T>,
    {
        if len == 0 {
            return Branch(None);
        }

        let left = Self::build_balanced(items, len / 2);
        // SAFETY: The caller supplies an iterator holding at least `len` items.
        let data = unsafe { items.next().unreachable() };
        let right = Self::build_balanced(items, len - len / 2 - 1);

        Branch(Some(Box::new(Node { data, left, right })))
    }

    /// Drops every item in the tree.
    pub fn clear(&mut self) {
        self.root = Branch(None);
        self.size = 0;
    }

    /// Returns an iterator over references to every item in the default pre-order. See
    /// [`preorder`](BinarySearchTree::preorder).
    pub fn iter(&self) -> Preorder<'_, T> {
        self.preorder()
    }

    /// Returns an iterator over references to every item, visiting each node before its
    /// subtrees, left subtree ahead of right.
    pub fn preorder(&self) -> Preorder<'_, T> {
        Preorder::new(&self.root, self.size)
    }

    /// Returns an iterator over references to every item in ascending order, visiting each node
    /// between its subtrees.
    pub fn inorder(&self) -> Inorder<'_, T> {
        Inorder::new(&self.root, self.size)
    }

    /// Returns an iterator over references to every item, visiting each node after both of its
    /// subtrees.
    pub fn postorder(&self) -> Postorder<'_, T> {
        Postorder::new(&self.root, self.size)
    }

    /// Returns an iterator over references to every item, visiting nodes top-down one depth at a
    /// time, left to right within each level.
    pub fn levelorder(&self) -> Levelorder<'_, T> {
        Levelorder::new(&self.root, self.size)
    }

    /// Consumes the tree, producing every item in ascending order.
    pub fn into_inorder(self) -> IntoInorder<T> {
        let size = self.size;
        IntoInorder::new(self.into_root(), size)
    }

    /// Returns a reference to the smallest item in the tree (the leftmost node).
    pub fn first(&self) -> Option<&T> {
        let mut current = self.root.0.as_deref()?;
        while let Some(left) = current.left.0.as_deref() {
            current = left;
        }
        Some(&current.data)
    }

    /// Returns a reference to the largest item in the tree (the rightmost node).
    pub fn last(&self) -> Option<&T> {
        let mut current = self.root.0.as_deref()?;
        while let Some(right) = current.right.0.as_deref() {
            current = right;
        }
        Some(&current.data)
    }

    /// Removes and returns the smallest item in the tree.
    pub fn take_first(&mut self) -> Option<T> {
        let node = self.root.take_leftmost()?;
        self.size -= 1;
        Some(node.into_data())
    }

    /// Removes and returns the largest item in the tree.
    pub fn take_last(&mut self) -> Option<T> {
        let node = self.root.take_rightmost()?;
        self.size -= 1;
        Some(node.into_data())
    }

    pub(crate) fn into_root(self) -> Branch<T> {
        self.root
    }

    // The keyed containers reuse the descent with their own comparators, searching entries by
    // key without having to build a whole entry for the probe.

    pub(crate) fn find_by<F>(&self, compare: &F) -> Option<&T>
    where
        F: Fn(&T) -> Ordering,
    {
        self.root.find_by(compare)
    }

    pub(crate) fn find_by_mut<F>(&mut self, compare: &F) -> Option<&mut T>
    where
        F: Fn(&T) -> Ordering,
    {
        self.root.find_by_mut(compare)
    }

    pub(crate) fn remove_by<F>(&mut self, compare: &F) -> Option<T>
    where
        F: Fn(&T) -> Ordering,
    {
        let removed = self.root.remove_by(compare);
        if removed.is_some() {
            self.size -= 1;
        }
        removed
    }
}

impl<T: Ord> BinarySearchTree<T> {
    /// Returns true if the tree holds an item equal to the provided value, by ordered descent
    /// from the root.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find(item).is_some()
    }

    /// Returns a reference to an item equal to the provided value, if one is held. With
    /// duplicates present, which copy is found depends on the tree's shape.
    pub fn find<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.find_by(&|data: &T| item.cmp(data.borrow()))
    }

    /// Adds the provided value to the tree, keeping sorted order. Duplicates accumulate rather
    /// than replace.
    pub fn add(&mut self, item: T) {
        self.root.add(item);
        self.size += 1;
    }

    /// Removes one item equal to the provided value and returns it.
    ///
    /// Absence is detected by the descent itself, so a failed removal has not touched the
    /// structure at all.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if no equal item is held.
    pub fn remove<Q>(&mut self, item: &Q) -> Result<T, NotFound>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.remove_by(&|data: &T| item.cmp(data.borrow())).ok_or(NotFound)
    }

    /// Removes one item equal to `old`, then adds `new` at its own sorted position, returning
    /// the removed item. The two positions are unrelated: this is a remove-and-add, not an
    /// in-place update.
    ///
    /// # Errors
    /// Fails with [`NotFound`], without adding `new`, if no item equals `old`.
    pub fn replace<Q>(&mut self, old: &Q, new: T) -> Result<T, NotFound>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let removed = self.remove(old)?;
        self.add(new);
        Ok(removed)
    }

    /// Returns the largest item strictly less than the provided value, if one is held. Items
    /// equal to the probe never count as its predecessor.
    pub fn predecessor<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut current = self.root.0.as_deref();
        while let Some(node) = current {
            match item.cmp(node.data.borrow()) {
                // Everything left of this node is even smaller, so it only needs revisiting if
                // the right subtree holds nothing below the probe.
                Ordering::Greater => {
                    best = Some(&node.data);
                    current = node.right.0.as_deref();
                },
                Ordering::Less | Ordering::Equal => current = node.left.0.as_deref(),
            }
        }
        best
    }

    /// Returns the smallest item strictly greater than the provided value, if one is held.
    pub fn successor<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        let mut best = None;
        let mut current = self.root.0.as_deref();
        while let Some(node) = current {
            match item.cmp(node.data.borrow()) {
                Ordering::Less => {
                    best = Some(&node.data);
                    current = node.left.0.as_deref();
                },
                Ordering::Equal | Ordering::Greater => current = node.right.0.as_deref(),
            }
        }
        best
    }

    /// Returns references to every item between `lower` and `upper` inclusive, in ascending
    /// order.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::binary_tree::BinarySearchTree;
    /// let tree: BinarySearchTree<_> = [50, 30, 70, 20, 40, 60, 80].into_iter().collect();
    /// assert_eq!(&*tree.range_find(&25, &65), &[&30, &40, &50, &60]);
    /// ```
    pub fn range_find<Q>(&self, lower: &Q, upper: &Q) -> Vector<&T>
    where
        T: Borrow<Q>,
        Q: Ord + ?Sized,
    {
        self.inorder()
            .skip_while(|data| lower.cmp((*data).borrow()).is_gt())
            .take_while(|data| upper.cmp((*data).borrow()).is_ge())
            .collect()
    }

    /// Walks the whole tree asserting that every node sits within the bounds its ancestors
    /// impose, and that the node count matches the recorded size.
    #[cfg(test)]
    pub(crate) fn verify_search_order(&self) {
        fn walk<T: Ord>(branch: &Branch<T>, lower: Option<&T>, upper: Option<&T>) -> usize {
            match branch.0.as_deref() {
                Some(node) => {
                    assert!(
                        lower.is_none_or(|bound| &node.data >= bound),
                        "node should not be less than the bound inherited from its ancestors"
                    );
                    assert!(
                        upper.is_none_or(|bound| &node.data < bound),
                        "node should be strictly less than the bound inherited from its ancestors"
                    );
                    // Duplicates land after their equals, so the lower bound is inclusive and
                    // the upper bound strict.
                    1 + walk(&node.left, lower, Some(&node.data))
                        + walk(&node.right, Some(&node.data), upper)
                },
                None => 0,
            }
        }

        assert_eq!(
            walk(&self.root, None, None),
            self.size,
            "recorded size should match the number of reachable nodes"
        );
    }
}

impl<T> Default for BinarySearchTree<T> {
    fn default() -> BinarySearchTree<T> {
        BinarySearchTree::new()
    }
}

impl<T: Clone> Clone for BinarySearchTree<T> {
    fn clone(&self) -> BinarySearchTree<T> {
        BinarySearchTree {
            root: self.root.clone(),
            size: self.size,
        }
    }
}

impl<T: PartialEq> PartialEq for BinarySearchTree<T> {
    /// Trees are equal when they hold the same items in the same sorted order, regardless of
    /// their internal shapes.
    fn eq(&self, other: &BinarySearchTree<T>) -> bool {
        self.size == other.size && self.inorder().eq(other.inorder())
    }
}

impl<T: Eq> Eq for BinarySearchTree<T> {}

impl<T: Ord> Extend<T> for BinarySearchTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for BinarySearchTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> BinarySearchTree<T> {
        let mut tree = BinarySearchTree::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Collection<T> for BinarySearchTree<T> {
    type Iter<'a> = Preorder<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        BinarySearchTree::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        BinarySearchTree::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        BinarySearchTree::contains(self, item)
    }
}

impl<T: Debug> Debug for BinarySearchTree<T> {
    /// Renders the tree on its side: the root at the left margin, left subtrees above their node
    /// and right subtrees below, with `-` marking empty branches.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(&self.root, f)
    }
}

impl<T: Debug> Display for BinarySearchTree<T> {
    /// Renders in the default pre-order, the order [`iter`](BinarySearchTree::iter) produces.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
