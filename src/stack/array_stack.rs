use std::fmt::{self, Debug, Display, Formatter};
use std::iter::Rev;
use std::slice;

use crate::contiguous::vector::IntoIter;
use crate::contiguous::Vector;
use crate::traits::Collection;

/// The capacity an [`ArrayStack`] starts with, so that the first handful of pushes never
/// reallocate.
pub const DEFAULT_CAPACITY: usize = 10;

/// A last-in first-out container over contiguous storage. The top of the stack is the end of the
/// backing [`Vector`], so pushes and pops never move the items below.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)`* |
/// | `pop` | `O(1)`* |
/// | `peek` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized; pushes and pops which adjust the capacity take `O(n)`.
///
/// # Examples
/// ```
/// # use basic_collections::stack::ArrayStack;
/// let mut stack = ArrayStack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ArrayStack<T> {
    items: Vector<T>,
}

impl<T> ArrayStack<T> {
    /// Creates a new stack with [`DEFAULT_CAPACITY`].
    pub fn new() -> ArrayStack<T> {
        Self::with_cap(DEFAULT_CAPACITY)
    }

    /// Creates a new stack with capacity exactly equal to the provided value.
    pub fn with_cap(cap: usize) -> ArrayStack<T> {
        ArrayStack {
            items: Vector::with_cap(cap),
        }
    }

    /// Returns the number of items on the stack.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the stack holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places the provided value on top of the stack.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Takes the value on top of the stack, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    /// Returns a reference to the value on top of the stack, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Drops every item, keeping the current capacity for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator producing the stack's items top-first, in the order [`pop`] would.
    ///
    /// [`pop`]: ArrayStack::pop
    pub fn iter(&self) -> Rev<slice::Iter<'_, T>> {
        self.items.as_ref().iter().rev()
    }
}

impl<T> Default for ArrayStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for ArrayStack<T> {
    type Item = T;

    type IntoIter = Rev<IntoIter<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter().rev()
    }
}

impl<T> FromIterator<T> for ArrayStack<T> {
    /// Pushes every produced value in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayStack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ArrayStack<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        self.items.extend(iter);
    }
}

impl<T: PartialEq> Collection<T> for ArrayStack<T> {
    type Iter<'a> = Rev<slice::Iter<'a, T>> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        ArrayStack::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        self.items.as_ref().contains(item)
    }
}

impl<T: Debug> Debug for ArrayStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayStack")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Debug> Display for ArrayStack<T> {
    /// Renders top-first, in the order [`pop`](ArrayStack::pop) would produce the items.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
