use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem;
use std::ops::{Index, IndexMut};

use super::{Cursor, CursorPosition, CursorState, Iter, IterMut, Length, Node, NodePtr, ONE};
use crate::contiguous::Vector;
use crate::traits::Collection;
use crate::util::error::{IndexOutOfBounds, NotFound};
use crate::util::result::ResultExtension;

/// A list with links in both directions. See also: [`Cursor`] for positional iteration with
/// mutation at the current position.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the LinkedList.
/// - `i`: The index of the item in question.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `front` | `O(1)` |
/// | `back` | `O(1)` |
/// | `push_front` | `O(1)` |
/// | `push_back` | `O(1)` |
/// | `pop_front` | `O(1)` |
/// | `pop_back` | `O(1)` |
/// | `get` | `O(min(i, n-i))` |
/// | `insert` | `O(min(i, n-i))` |
/// | `remove` | `O(min(i, n-i))` |
/// | `replace` | `O(min(i, n-i))` |
/// | `append` | `O(1)` |
/// | `contains` | `O(n)` |
///
/// As a general note, modern computer architecture isn't kind to linked lists, because all `O(i)`
/// and `O(n)` operations consist primarily of cache misses. [`Vector`] should be preferred for
/// most applications unless the `O(1)` end operations or the [`Cursor`] type are being heavily
/// utilized.
pub struct LinkedList<T> {
    pub(crate) state: ListState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum ListState<T> {
    #[default]
    Empty,
    Full(ListContents<T>),
}

use ListState::*;

pub(crate) struct ListContents<T> {
    pub len: Length,
    pub head: NodePtr<T>,
    pub tail: NodePtr<T>,
}

// SAFETY: LinkedList owns its nodes exclusively, so it is safe to send or share whenever the
// element type allows it.
unsafe impl<T: Send> Send for LinkedList<T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for LinkedList<T> {}

impl<T> LinkedList<T> {
    /// Creates a new, empty LinkedList.
    ///
    /// ```rust
    /// # use basic_collections::linked::LinkedList;
    /// let mut list: LinkedList<u32> = LinkedList::new();
    /// list.push_back(1);
    /// list.push_front(0);
    /// assert_eq!(list.len(), 2);
    /// assert_eq!(list.front(), Some(&0));
    /// ```
    pub const fn new() -> LinkedList<T> {
        LinkedList {
            state: Empty,
            _phantom: PhantomData,
        }
    }

    pub const fn len(&self) -> usize {
        match self.state {
            Empty => 0,
            Full(ListContents { len, .. }) => len.get(),
        }
    }

    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub const fn front(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { head, .. }) => Some(head.value()),
        }
    }

    pub const fn front_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut head, .. }) => Some(head.value_mut()),
        }
    }

    pub const fn back(&self) -> Option<&T> {
        match self.state {
            Empty => None,
            Full(ListContents { tail, .. }) => Some(tail.value()),
        }
    }

    pub const fn back_mut(&mut self) -> Option<&mut T> {
        match self.state {
            Empty => None,
            Full(ListContents { mut tail, .. }) => Some(tail.value_mut()),
        }
    }

    pub fn push_front(&mut self, value: T) {
        let new_node = NodePtr::from_node(
            Node {
                value,
                prev: None,
                next: None,
            }
        );

        match &mut self.state {
            Empty => {
                self.state = Full(ListContents {
                    len: ONE,
                    head: new_node,
                    tail: new_node,
                });
            },
            Full(ListContents { len, head, .. }) => {
                *head.prev_mut() = Some(new_node);
                *new_node.next_mut() = Some(*head);
                *head = new_node;
                // UNWRAP: Every node occupies memory, so len is bounded well below usize::MAX.
                *len = len.checked_add(1).unwrap();
            },
        }
    }

    pub fn push_back(&mut self, value: T) {
        let new_node = NodePtr::from_node(
            Node {
                value,
                prev: None,
                next: None,
            }
        );

        match &mut self.state {
            Empty => {
                self.state = Full(ListContents {
                    len: ONE,
                    head: new_node,
                    tail: new_node,
                });
            },
            Full(ListContents { len, tail, .. }) => {
                *tail.next_mut() = Some(new_node);
                *new_node.prev_mut() = Some(*tail);
                *tail = new_node;
                // UNWRAP: Every node occupies memory, so len is bounded well below usize::MAX.
                *len = len.checked_add(1).unwrap();
            },
        }
    }

    pub fn pop_front(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, head, .. }) => {
                let node = head.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // UNWRAP: The previous length was greater than 1, so the first element
                        // is followed by at least one more.
                        let new_head = node.next.unwrap();
                        *head = new_head;
                        *new_head.prev_mut() = None;
                        *len = new_len;
                    },
                    None => {
                        self.state = Empty;
                    },
                }

                Some(node.value)
            },
        }
    }

    pub fn pop_back(&mut self) -> Option<T> {
        match &mut self.state {
            Empty => None,
            Full(ListContents { len, tail, .. }) => {
                let node = tail.take_node();

                match len.checked_sub(1) {
                    Some(new_len) => {
                        // UNWRAP: The previous length was greater than 1, so the last element
                        // is preceded by at least one more.
                        let new_tail = node.prev.unwrap();
                        *tail = new_tail;
                        *new_tail.next_mut() = None;
                        *len = new_len;
                    },
                    None => {
                        self.state = Empty;
                    },
                }

                Some(node.value)
            },
        }
    }

    /// Returns a reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_get`](LinkedList::try_get).
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value())
    }

    /// Returns a mutable reference to the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_get_mut`](LinkedList::try_get_mut).
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        Ok(self.checked_seek(index)?.value_mut())
    }

    /// Inserts `value` at `index`, shifting everything after it one position towards the back.
    /// `index` may equal the length, in which case this is equivalent to
    /// [`push_back`](LinkedList::push_back).
    ///
    /// # Panics
    /// Panics if `index` is greater than the length. See [`try_insert`](LinkedList::try_insert).
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        let len = self.len();
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        if index == 0 {
            self.push_front(value);
            return Ok(());
        }
        if index == len {
            self.push_back(value);
            return Ok(());
        }

        match &mut self.state {
            Full(contents) => {
                let prev_node = contents.seek(index - 1);

                let node = NodePtr::from_node(Node {
                    value,
                    prev: Some(prev_node),
                    next: *prev_node.next(),
                });

                // UNWRAP: 0 < index < len for this branch, so the node before the given index
                // has a successor.
                *prev_node.next().unwrap().prev_mut() = Some(node);
                *prev_node.next_mut() = Some(node);

                // UNWRAP: Every node occupies memory, so len is bounded well below usize::MAX.
                contents.len = contents.len.checked_add(1).unwrap();
                Ok(())
            },
            Empty => unreachable!(),
        }
    }

    /// Removes and returns the value at `index`.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_remove`](LinkedList::try_remove).
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        let len = self.len();
        if index >= len {
            return Err(IndexOutOfBounds { index, len });
        }
        if index == 0 {
            // UNWRAP: index is in bounds, so the list is nonempty.
            return Ok(self.pop_front().unwrap());
        }
        if index == len - 1 {
            // UNWRAP: As above.
            return Ok(self.pop_back().unwrap());
        }

        match &mut self.state {
            Full(contents) => {
                let node = contents.seek(index).take_node();

                // UNWRAP: 0 < index < len - 1 for this branch, so both neighbours exist.
                *node.prev.unwrap().next_mut() = node.next;
                *node.next.unwrap().prev_mut() = node.prev;
                // UNWRAP: The list held at least 3 items for this branch.
                contents.len = contents.len.checked_sub(1).unwrap();

                Ok(node.value)
            },
            Empty => unreachable!(),
        }
    }

    /// Replaces the value at `index`, returning the previous one.
    ///
    /// # Panics
    /// Panics if `index` is out of bounds. See [`try_replace`](LinkedList::try_replace).
    pub fn replace(&mut self, index: usize, new_value: T) -> T {
        self.try_replace(index, new_value).throw()
    }

    pub fn try_replace(&mut self, index: usize, new_value: T) -> Result<T, IndexOutOfBounds> {
        Ok(mem::replace(self.checked_seek(index)?.value_mut(), new_value))
    }

    /// Removes the first item equal to `item`, scanning from the front.
    pub fn remove_item<Q>(&mut self, item: &Q) -> Result<T, NotFound>
    where
        T: Borrow<Q>,
        Q: PartialEq + ?Sized,
    {
        match self.iter().position(|other| other.borrow() == item) {
            Some(index) => Ok(self.remove(index)),
            None => Err(NotFound),
        }
    }

    /// Moves all items from `other` to the back of this list in O(1).
    pub fn append(&mut self, mut other: LinkedList<T>) {
        let other_state = mem::take(&mut other.state);
        match &mut self.state {
            Empty => self.state = other_state,
            Full(contents) => match other_state {
                Empty => {},
                Full(other_contents) => {
                    *contents.tail.next_mut() = Some(other_contents.head);
                    *other_contents.head.prev_mut() = Some(contents.tail);
                    contents.tail = other_contents.tail;

                    // UNWRAP: Every node occupies memory, so the combined length is bounded well
                    // below usize::MAX.
                    contents.len = contents.len.checked_add(
                        other_contents.len.get()
                    ).unwrap();
                },
            },
        }
    }

    pub fn contains(&self, item: &T) -> bool
    where
        T: PartialEq,
    {
        self.iter().any(|other| other == item)
    }

    /// Drops every item, leaving the list empty.
    pub fn clear(&mut self) {
        if let Full(ListContents { head, .. }) = mem::take(&mut self.state) {
            let mut curr = Some(head);
            while let Some(ptr) = curr {
                let node = ptr.take_node();
                curr = node.next;
            }
        }
    }

    /// Converts the list into a [`Cursor`] positioned before the first item. The list can be
    /// recovered with [`Cursor::into_list`].
    pub fn cursor(mut self) -> Cursor<T> {
        Cursor {
            state: match mem::take(&mut self.state) {
                Empty => CursorState::Empty,
                Full(contents) => CursorState::Full {
                    pos: CursorPosition::Node(contents.head),
                    last: None,
                    list: contents,
                },
            },
            _phantom: PhantomData,
        }
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        self.into_iter()
    }

    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }
}

impl<T> LinkedList<T> {
    pub(crate) fn checked_seek(&self, index: usize) -> Result<NodePtr<T>, IndexOutOfBounds> {
        match &self.state {
            Empty => Err(IndexOutOfBounds { index, len: 0 }),
            Full(contents) if index >= contents.len.get() => Err(IndexOutOfBounds {
                index,
                len: contents.len.get(),
            }),
            Full(contents) => Ok(contents.seek(index)),
        }
    }

    #[cfg(test)]
    pub(crate) fn verify_double_links(&self) {
        match self.state {
            Empty => {},
            Full(ListContents { head, tail, .. }) => {
                let mut curr = head;
                while let Some(next) = curr.next() {
                    assert!(next.prev().unwrap() == curr);
                    curr = *next;
                }
                assert!(tail == curr);
            },
        }
    }
}

impl<T> ListContents<T> {
    /// Walks to the node at `index` from whichever end is closer. The index must be in bounds.
    pub(crate) fn seek(&self, index: usize) -> NodePtr<T> {
        if index < self.len.get() / 2 {
            self.seek_fwd(index)
        } else {
            self.seek_bwd(index)
        }
    }

    fn seek_fwd(&self, index: usize) -> NodePtr<T> {
        let mut curr = self.head;
        for _ in 0..index {
            // UNWRAP: The caller guarantees index is in bounds.
            curr = curr.next().unwrap();
        }
        curr
    }

    fn seek_bwd(&self, index: usize) -> NodePtr<T> {
        let mut curr = self.tail;
        // UNWRAP: The caller guarantees index is in bounds, so it is less than len.
        let upper = self.len.checked_sub(index).unwrap().get();
        for _ in 1..upper {
            // UNWRAP: As above.
            curr = curr.prev().unwrap();
        }
        curr
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for LinkedList<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for LinkedList<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: PartialEq> Collection<T> for LinkedList<T> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        LinkedList::len(self)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        LinkedList::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        LinkedList::contains(self, item)
    }
}

impl<T> Index<usize> for LinkedList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        self.get(index)
    }
}

impl<T> IndexMut<usize> for LinkedList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        self.get_mut(index)
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        for item in iter.into_iter() {
            list.push_back(item);
        }
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter.into_iter() {
            self.push_back(item);
        }
    }
}

impl<T: Debug> Debug for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Debug> Display for LinkedList<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})",
            self.iter()
                .map(|i| format!("{i:?}"))
                .collect::<Vector<String>>()
                .join(") -> (")
        )
    }
}
