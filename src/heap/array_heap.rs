use std::fmt::{self, Debug, Display, Formatter};
use std::slice;

use crate::contiguous::vector::IntoIter;
use crate::contiguous::Vector;
use crate::traits::Collection;

/// A binary min-heap over contiguous storage. The item at index `i` is no greater than the items
/// at `2i + 1` and `2i + 2`, making the smallest item of the whole collection the first one.
///
/// Iteration with [`iter`](ArrayHeap::iter) or [`IntoIterator`] visits the backing storage in
/// heap layout order, which is only partially sorted. Use [`into_sorted_vector`] or repeated
/// [`pop`] calls for the items in ascending order.
///
/// [`into_sorted_vector`]: ArrayHeap::into_sorted_vector
/// [`pop`]: ArrayHeap::pop
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the heap.
///
/// | Method | Complexity |
/// |-|-|
/// | `add` | `O(log n)` |
/// | `pop` | `O(log n)` |
/// | `peek` | `O(1)` |
/// | `contains` | `O(n)` |
/// | `into_sorted_vector` | `O(n log n)` |
///
/// # Examples
/// ```
/// # use basic_collections::heap::ArrayHeap;
/// let mut heap = ArrayHeap::new();
/// heap.add(3);
/// heap.add(1);
/// heap.add(2);
/// assert_eq!(heap.peek(), Some(&1));
/// assert_eq!(heap.pop(), Some(1));
/// assert_eq!(heap.pop(), Some(2));
/// assert_eq!(heap.pop(), Some(3));
/// assert_eq!(heap.pop(), None);
/// ```
#[derive(Clone)]
pub struct ArrayHeap<T> {
    items: Vector<T>,
}

impl<T: Ord> ArrayHeap<T> {
    /// Creates a new, empty heap. Memory will be allocated when the first item is added.
    pub fn new() -> ArrayHeap<T> {
        ArrayHeap {
            items: Vector::new(),
        }
    }

    /// Creates a new heap with capacity exactly equal to the provided value.
    pub fn with_cap(cap: usize) -> ArrayHeap<T> {
        ArrayHeap {
            items: Vector::with_cap(cap),
        }
    }

    /// Returns the number of items in the heap.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the heap holds no items.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Adds the provided value to the heap, keeping the smallest item on top.
    pub fn add(&mut self, value: T) {
        self.items.push(value);
        self.sift_up(self.items.len() - 1);
    }

    /// Takes the smallest item in the heap, if there is one. Ties between equal items are broken
    /// arbitrarily.
    pub fn pop(&mut self) -> Option<T> {
        if self.items.is_empty() {
            return None;
        }

        // Swap the last leaf into the root's place, then let it sink back to its depth.
        let last = self.items.len() - 1;
        self.items.swap(0, last);
        let value = self.items.pop();
        self.sift_down(0);

        value
    }

    /// Returns a reference to the smallest item in the heap, without removing it.
    pub fn peek(&self) -> Option<&T> {
        self.items.first()
    }

    /// Drops every item, keeping the current capacity for reuse.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns an iterator over the backing storage, in heap layout order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.as_ref().iter()
    }

    /// Drains the heap into a [`Vector`] holding every item in ascending order.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::heap::ArrayHeap;
    /// let heap: ArrayHeap<_> = [3, 1, 2].into_iter().collect();
    /// assert_eq!(&*heap.into_sorted_vector(), &[1, 2, 3]);
    /// ```
    pub fn into_sorted_vector(mut self) -> Vector<T> {
        let mut sorted = Vector::with_cap(self.len());

        while let Some(value) = self.pop() {
            // SAFETY: Capacity was reserved for every item in the heap.
            unsafe { sorted.push_unchecked(value); }
        }

        sorted
    }
}

impl<T: Ord> ArrayHeap<T> {
    /// Bubbles the item at `index` towards the root until its parent is no greater.
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;

            if self.items[index] < self.items[parent] {
                self.items.swap(index, parent);
                index = parent;
            } else {
                break;
            }
        }
    }

    /// Sinks the item at `index` towards the leaves, swapping with its smaller child until both
    /// children are no smaller.
    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = left + 1;
            let mut smallest = index;

            if left < self.items.len() && self.items[left] < self.items[smallest] {
                smallest = left;
            }
            if right < self.items.len() && self.items[right] < self.items[smallest] {
                smallest = right;
            }

            if smallest == index {
                break;
            }

            self.items.swap(index, smallest);
            index = smallest;
        }
    }
}

impl<T: Ord> Default for ArrayHeap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<Vector<T>> for ArrayHeap<T> {
    /// Reorders the Vector's items into heap layout in place, in `O(n)`.
    fn from(items: Vector<T>) -> Self {
        let mut heap = ArrayHeap { items };

        // Leaves already satisfy the heap property, so start sinking at the last parent.
        for index in (0..heap.items.len() / 2).rev() {
            heap.sift_down(index);
        }

        heap
    }
}

impl<T: Ord> FromIterator<T> for ArrayHeap<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        ArrayHeap::from(iter.into_iter().collect::<Vector<T>>())
    }
}

impl<T: Ord> Extend<T> for ArrayHeap<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter {
            self.add(item);
        }
    }
}

impl<T> IntoIterator for ArrayHeap<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    /// Produces the items in heap layout order, not ascending order.
    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T: Ord> Collection<T> for ArrayHeap<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        ArrayHeap::iter(self)
    }

    fn contains(&self, item: &T) -> bool {
        self.items.as_ref().contains(item)
    }
}

impl<T: Debug> Debug for ArrayHeap<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArrayHeap")
            .field("items", &self.items)
            .finish()
    }
}

impl<T: Debug> Display for ArrayHeap<T> {
    /// Renders the items in heap layout order. Only the first is guaranteed to be the minimum.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.as_ref().iter()).finish()
    }
}
