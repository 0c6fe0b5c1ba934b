use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};

use crate::linked::list::{IntoIter, Iter};
use crate::linked::LinkedList;
use crate::traits::Collection;
use crate::util::error::NotFound;

/// A first-in first-out container over linked nodes. Values are added at the back of the backing
/// [`LinkedList`] and taken from the front, so the longest-waiting value is always the next one
/// out.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the queue.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(1)` |
/// | `pop` | `O(1)` |
/// | `peek` | `O(1)` |
/// | `remove` | `O(n)` |
/// | `contains` | `O(n)` |
///
/// # Examples
/// ```
/// # use basic_collections::queue::LinkedQueue;
/// let mut queue = LinkedQueue::new();
/// queue.add("first");
/// queue.add("second");
/// assert_eq!(queue.peek(), Some(&"first"));
/// assert_eq!(queue.pop(), Some("first"));
/// assert_eq!(queue.pop(), Some("second"));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct LinkedQueue<T> {
    items: LinkedList<T>,
}

impl<T> LinkedQueue<T> {
    /// Creates a new, empty queue. No allocation occurs until the first add.
    pub const fn new() -> LinkedQueue<T> {
        LinkedQueue {
            items: LinkedList::new(),
        }
    }

    /// Returns the number of items in the queue.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the queue holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Places the provided value at the back of the queue.
    pub fn add(&mut self, value: T) {
        self.items.push_back(value);
    }

    /// Takes the value at the front of the queue, if there is one.
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    /// Returns a reference to the value at the front of the queue, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.front()
    }

    /// Removes the first item equal to the provided value, wherever it sits in the queue.
    ///
    /// # Errors
    /// Returns [`NotFound`] if no item matches, leaving the queue untouched.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::queue::LinkedQueue;
    /// # use basic_collections::error::NotFound;
    /// let mut queue: LinkedQueue<String> = ["a", "b", "c"].map(String::from).into_iter().collect();
    /// assert_eq!(queue.remove("b"), Ok("b".to_string()));
    /// assert_eq!(queue.remove("b"), Err(NotFound));
    /// assert_eq!(queue.len(), 2);
    /// ```
    pub fn remove<Q>(&mut self, value: &Q) -> Result<T, NotFound>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        self.items.remove_item(value)
    }

    /// Drops every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator producing the queue's items front-first, in the order [`pop`] would.
    ///
    /// [`pop`]: LinkedQueue::pop
    pub fn iter(&self) -> Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for LinkedQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> IntoIterator for LinkedQueue<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for LinkedQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = LinkedQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> Extend<T> for LinkedQueue<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T: PartialEq> Collection<T> for LinkedQueue<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedQueue::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        self.items.contains(item)
    }
}

impl<T: Debug> Debug for LinkedQueue<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedQueue")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Debug> Display for LinkedQueue<T> {
    /// Renders front-first, using the backing list's arrow notation to show the direction values
    /// flow.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.items, f)
    }
}
