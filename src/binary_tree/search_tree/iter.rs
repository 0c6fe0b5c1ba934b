use std::iter::FusedIterator;
use std::mem;

use super::{BinarySearchTree, Branch, Node};
use crate::queue::LinkedQueue;
use crate::stack::ArrayStack;

// Every traversal here is iterative, driving an explicit stack or queue instead of the call
// stack, so a degenerate tree (one long chain) can't overflow during iteration no matter how
// many items it holds.

/// A borrowed iterator producing each node before either of its subtrees, the left subtree ahead
/// of the right. This is the tree's default iteration order.
pub struct Preorder<'a, T> {
    stack: ArrayStack<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Preorder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, size: usize) -> Preorder<'a, T> {
        let mut stack = ArrayStack::new();
        if let Some(node) = root.0.as_deref() {
            stack.push(node);
        }

        Preorder {
            stack,
            remaining: size,
        }
    }
}

impl<'a, T> Iterator for Preorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;

        // The right subtree is pushed first so that the left one is produced first.
        if let Some(right) = node.right.0.as_deref() {
            self.stack.push(right);
        }
        if let Some(left) = node.left.0.as_deref() {
            self.stack.push(left);
        }

        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Preorder<'_, T> {}

impl<T> FusedIterator for Preorder<'_, T> {}

/// A borrowed iterator producing each node between its subtrees, which for a search tree is
/// ascending sorted order.
pub struct Inorder<'a, T> {
    stack: ArrayStack<&'a Node<T>>,
    current: Option<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Inorder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, size: usize) -> Inorder<'a, T> {
        Inorder {
            stack: ArrayStack::new(),
            current: root.0.as_deref(),
            remaining: size,
        }
    }
}

impl<'a, T> Iterator for Inorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        // Stack the spine down to the smallest unvisited node, then step off it.
        while let Some(node) = self.current {
            self.stack.push(node);
            self.current = node.left.0.as_deref();
        }

        let node = self.stack.pop()?;
        self.current = node.right.0.as_deref();
        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Inorder<'_, T> {}

impl<T> FusedIterator for Inorder<'_, T> {}

/// A borrowed iterator producing each node after both of its subtrees, the left subtree ahead of
/// the right.
pub struct Postorder<'a, T> {
    stack: ArrayStack<Visit<'a, T>>,
    remaining: usize,
}

/// A step of the postorder walk: a node is descended into once and emitted when it comes back up.
enum Visit<'a, T> {
    Descend(&'a Node<T>),
    Emit(&'a Node<T>),
}

impl<'a, T> Postorder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, size: usize) -> Postorder<'a, T> {
        let mut stack = ArrayStack::new();
        if let Some(node) = root.0.as_deref() {
            stack.push(Visit::Descend(node));
        }

        Postorder {
            stack,
            remaining: size,
        }
    }
}

impl<'a, T> Iterator for Postorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(step) = self.stack.pop() {
            match step {
                Visit::Descend(node) => {
                    // Emitting below both children makes the pop order left, right, node.
                    self.stack.push(Visit::Emit(node));
                    if let Some(right) = node.right.0.as_deref() {
                        self.stack.push(Visit::Descend(right));
                    }
                    if let Some(left) = node.left.0.as_deref() {
                        self.stack.push(Visit::Descend(left));
                    }
                },
                Visit::Emit(node) => {
                    self.remaining -= 1;
                    return Some(&node.data);
                },
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Postorder<'_, T> {}

impl<T> FusedIterator for Postorder<'_, T> {}

/// A borrowed iterator producing the nodes top-down one depth at a time, left to right within
/// each level.
pub struct Levelorder<'a, T> {
    queue: LinkedQueue<&'a Node<T>>,
    remaining: usize,
}

impl<'a, T> Levelorder<'a, T> {
    pub(crate) fn new(root: &'a Branch<T>, size: usize) -> Levelorder<'a, T> {
        let mut queue = LinkedQueue::new();
        if let Some(node) = root.0.as_deref() {
            queue.add(node);
        }

        Levelorder {
            queue,
            remaining: size,
        }
    }
}

impl<'a, T> Iterator for Levelorder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.queue.pop()?;

        if let Some(left) = node.left.0.as_deref() {
            self.queue.add(left);
        }
        if let Some(right) = node.right.0.as_deref() {
            self.queue.add(right);
        }

        self.remaining -= 1;
        Some(&node.data)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Levelorder<'_, T> {}

impl<T> FusedIterator for Levelorder<'_, T> {}

impl<'a, T> IntoIterator for &'a BinarySearchTree<T> {
    type Item = &'a T;

    type IntoIter = Preorder<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.preorder()
    }
}

impl<T> IntoIterator for BinarySearchTree<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Consumes the tree, producing every item in the default pre-order.
    fn into_iter(self) -> Self::IntoIter {
        let remaining = self.len();
        let mut stack = ArrayStack::new();
        if let Some(root) = self.into_root().0 {
            stack.push(root);
        }

        IntoIter {
            stack,
            remaining,
        }
    }
}

/// An owned pre-order iterator. Detached nodes wait on an explicit stack, so dropping the
/// iterator part-way through drops the rest of the tree without recursing.
pub struct IntoIter<T> {
    stack: ArrayStack<Box<Node<T>>>,
    remaining: usize,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut node = self.stack.pop()?;

        if let Some(right) = mem::take(&mut node.right.0) {
            self.stack.push(right);
        }
        if let Some(left) = mem::take(&mut node.left.0) {
            self.stack.push(left);
        }

        self.remaining -= 1;
        Some(node.into_data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// An owned in-order iterator, produced by [`BinarySearchTree::into_inorder`]. The sorted
/// containers use it to drain their trees in ascending order.
pub struct IntoInorder<T> {
    stack: ArrayStack<Box<Node<T>>>,
    current: Option<Box<Node<T>>>,
    remaining: usize,
}

impl<T> IntoInorder<T> {
    pub(crate) fn new(root: Branch<T>, size: usize) -> IntoInorder<T> {
        IntoInorder {
            stack: ArrayStack::new(),
            current: root.0,
            remaining: size,
        }
    }
}

impl<T> Iterator for IntoInorder<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(mut node) = self.current.take() {
            self.current = mem::take(&mut node.left.0);
            self.stack.push(node);
        }

        let mut node = self.stack.pop()?;
        self.current = mem::take(&mut node.right.0);
        self.remaining -= 1;
        Some(node.into_data())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for IntoInorder<T> {}

impl<T> FusedIterator for IntoInorder<T> {}
