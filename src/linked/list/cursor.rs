use std::marker::PhantomData;
use std::mem;

use super::{LinkedList, ListContents, ListState, Node, NodePtr, ONE};
use crate::util::error::UndefinedPosition;
use crate::util::option::OptionExtension;

/// A positional iterator over an owned [`LinkedList`].
///
/// The cursor sits between items: [`next`](Cursor::next) and [`prev`](Cursor::prev) deliver the
/// item on either side and remember it as the current position, which
/// [`replace`](Cursor::replace) and [`remove`](Cursor::remove) then operate on. Until a delivery
/// establishes that position (and again after a removal or insertion clears it), both mutating
/// methods fail with [`UndefinedPosition`].
///
/// ```rust
/// # use basic_collections::linked::LinkedList;
/// let list: LinkedList<u32> = (1..=3).collect();
/// let mut cursor = list.cursor();
/// assert_eq!(cursor.next(), Some(&1));
/// assert_eq!(cursor.remove(), Ok(1));
/// assert_eq!(cursor.next(), Some(&2));
/// assert_eq!(cursor.replace(20), Ok(2));
/// let list = cursor.into_list();
/// assert_eq!(list, [20, 3].into_iter().collect());
/// ```
pub struct Cursor<T> {
    pub(crate) state: CursorState<T>,
    pub(crate) _phantom: PhantomData<T>,
}

#[derive(Default)]
pub(crate) enum CursorState<T> {
    #[default]
    Empty,
    Full {
        list: ListContents<T>,
        /// The node an upcoming call to `next` would deliver.
        pos: CursorPosition<T>,
        /// The node delivered by the most recent `next`/`prev`, if any mutation may still target
        /// it.
        last: Option<NodePtr<T>>,
    },
}

use CursorState::*;

pub(crate) enum CursorPosition<T> {
    Node(NodePtr<T>),
    End,
}

use CursorPosition::*;

impl<T> Clone for CursorPosition<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for CursorPosition<T> {}

// SAFETY: The cursor owns its nodes exclusively, exactly like the list it was built from.
unsafe impl<T: Send> Send for Cursor<T> {}
// SAFETY: As above.
unsafe impl<T: Sync> Sync for Cursor<T> {}

impl<T> Cursor<T> {
    /// Converts the cursor back into the underlying list.
    pub fn into_list(mut self) -> LinkedList<T> {
        LinkedList {
            state: match mem::take(&mut self.state) {
                Empty => ListState::Empty,
                Full { list, .. } => ListState::Full(list),
            },
            _phantom: PhantomData,
        }
    }

    pub const fn has_next(&self) -> bool {
        matches!(self.state, Full { pos: Node(_), .. })
    }

    pub fn has_prev(&self) -> bool {
        match &self.state {
            Empty => false,
            Full { pos, .. } => match pos {
                Node(ptr) => ptr.prev().is_some(),
                End => true,
            },
        }
    }

    /// Delivers the next item and advances past it, establishing the position that `replace` and
    /// `remove` operate on. Returns [`None`] at the back of the list.
    pub fn next(&mut self) -> Option<&T> {
        match &mut self.state {
            Empty => None,
            Full { pos, last, .. } => match pos {
                Node(ptr) => {
                    let current = *ptr;
                    *last = Some(current);
                    *pos = match current.next() {
                        Some(next) => Node(*next),
                        None => End,
                    };
                    Some(current.value())
                },
                End => None,
            },
        }
    }

    /// Delivers the previous item and steps back before it, establishing the position that
    /// `replace` and `remove` operate on. Returns [`None`] at the front of the list.
    pub fn prev(&mut self) -> Option<&T> {
        match &mut self.state {
            Empty => None,
            Full { list, pos, last } => {
                let target = match pos {
                    Node(ptr) => match ptr.prev() {
                        Some(prev) => *prev,
                        None => return None,
                    },
                    End => list.tail,
                };
                *last = Some(target);
                *pos = Node(target);
                Some(target.value())
            },
        }
    }

    /// Returns the item delivered by the most recent `next`/`prev`, without moving the cursor.
    pub const fn read(&self) -> Option<&T> {
        match &self.state {
            Empty => None,
            Full { last, .. } => match last {
                Some(ptr) => Some(ptr.value()),
                None => None,
            },
        }
    }

    /// Swaps the most recently delivered item for `new_value`, returning the old one.
    pub fn replace(&mut self, new_value: T) -> Result<T, UndefinedPosition> {
        match &mut self.state {
            Empty => Err(UndefinedPosition),
            Full { last, .. } => match last {
                Some(ptr) => Ok(mem::replace(ptr.value_mut(), new_value)),
                None => Err(UndefinedPosition),
            },
        }
    }

    /// Unlinks and returns the most recently delivered item. The position becomes undefined
    /// again until the next delivery.
    pub fn remove(&mut self) -> Result<T, UndefinedPosition> {
        match mem::take(&mut self.state) {
            Empty => Err(UndefinedPosition),
            Full { mut list, mut pos, last } => match last {
                None => {
                    self.state = Full { list, pos, last: None };
                    Err(UndefinedPosition)
                },
                Some(ptr) => {
                    // When the upcoming position is the node being removed (after a prev), step
                    // it past the node first.
                    if let Node(pos_ptr) = pos
                        && pos_ptr == ptr
                    {
                        pos = match ptr.next() {
                            Some(next) => Node(*next),
                            None => End,
                        };
                    }

                    let node = ptr.take_node();
                    match (node.prev, node.next) {
                        (None, None) => {
                            self.state = Empty;
                            return Ok(node.value);
                        },
                        (Some(prev), None) => {
                            *prev.next_mut() = None;
                            list.tail = prev;
                        },
                        (None, Some(next)) => {
                            *next.prev_mut() = None;
                            list.head = next;
                        },
                        (Some(prev), Some(next)) => {
                            *prev.next_mut() = Some(next);
                            *next.prev_mut() = Some(prev);
                        },
                    }

                    // SAFETY: The remaining arms all had a neighbouring node, so the list held
                    // at least two.
                    list.len = unsafe { list.len.checked_sub(1).unreachable() };
                    self.state = Full { list, pos, last: None };
                    Ok(node.value)
                },
            },
        }
    }

    /// Inserts `value` before the upcoming position: an immediately following `prev` delivers
    /// the new item, while `next` is unaffected. The mutation position becomes undefined.
    pub fn insert(&mut self, value: T) {
        match mem::take(&mut self.state) {
            Empty => {
                let node = NodePtr::from_node(Node {
                    value,
                    prev: None,
                    next: None,
                });
                self.state = Full {
                    list: ListContents {
                        len: ONE,
                        head: node,
                        tail: node,
                    },
                    pos: End,
                    last: None,
                };
            },
            Full { mut list, pos, .. } => {
                let (prev, next) = match pos {
                    Node(ptr) => (*ptr.prev(), Some(ptr)),
                    End => (Some(list.tail), None),
                };

                let node = NodePtr::from_node(Node { value, prev, next });
                match prev {
                    Some(prev) => *prev.next_mut() = Some(node),
                    None => list.head = node,
                }
                match next {
                    Some(next) => *next.prev_mut() = Some(node),
                    None => list.tail = node,
                }

                // UNWRAP: Every node occupies memory, so len is bounded well below usize::MAX.
                list.len = list.len.checked_add(1).unwrap();
                self.state = Full { list, pos, last: None };
            },
        }
    }

    /// Moves the cursor before the first item.
    pub fn seek_front(&mut self) {
        if let Full { list, pos, last } = &mut self.state {
            *pos = Node(list.head);
            *last = None;
        }
    }

    /// Moves the cursor after the last item.
    pub fn seek_back(&mut self) {
        if let Full { pos, last, .. } = &mut self.state {
            *pos = End;
            *last = None;
        }
    }
}

impl<T> Drop for Cursor<T> {
    fn drop(&mut self) {
        if let Full { list, .. } = mem::take(&mut self.state) {
            drop(LinkedList {
                state: ListState::Full(list),
                _phantom: PhantomData,
            });
        }
    }
}
