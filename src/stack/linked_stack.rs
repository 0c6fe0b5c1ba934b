use std::fmt::{self, Debug, Display, Formatter};

use crate::linked::list::{IntoIter, Iter};
use crate::linked::LinkedList;
use crate::traits::Collection;

/// A last-in first-out container over linked nodes. The top of the stack is the front of the
/// backing [`LinkedList`], so every operation other than `contains` touches a single node.
///
/// Unlike [`ArrayStack`](crate::stack::ArrayStack), pushed items are never moved, at the price of
/// one allocation per item.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the stack.
///
/// | Method | Complexity |
/// |-|-|
/// | `push` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// # Examples
/// ```
/// # use basic_collections::stack::LinkedStack;
/// let mut stack = LinkedStack::new();
/// stack.push(1);
/// stack.push(2);
/// assert_eq!(stack.peek(), Some(&2));
/// assert_eq!(stack.pop(), Some(2));
/// assert_eq!(stack.pop(), Some(1));
/// assert_eq!(stack.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedStack<T> {
    items: LinkedList<T>,
}

impl<T> LinkedStack<T> {
    /// Creates a new, empty stack. No allocation occurs until the first push.
    pub const fn new() -> LinkedStack<T> {
        LinkedStack {
            items: LinkedList::new(),
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
        self.items.push_front(value);
    }

    /// Takes the value on top of the stack, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the value on top of the stack, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator producing the stack's items top-first, in the order [`pop`] would.
    ///
    /// [`pop`]: LinkedStack::pop
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for LinkedStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for LinkedStack<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for LinkedStack<T> {
    /// Pushes every produced value in order, so the last one ends up on top.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = LinkedStack::new();
        stack.extend(iter);
        stack
    }
}

impl<T> Extend<T> for LinkedStack<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: PartialEq> Collection<T> for LinkedStack<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedStack::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Debug> Debug for LinkedStack<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedStack")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Debug> Display for LinkedStack<T> {
    /// Renders top-first, in the order [`pop`](LinkedStack::pop) would produce the items.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
