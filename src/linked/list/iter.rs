use std::iter::FusedIterator;
use std::marker::PhantomData;

use super::{Link, LinkedList, ListContents, ListState};

use ListState::*;

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            list: self,
        }
    }
}

/// An owned iterator over a list. Popping the held list from either end covers both directions
/// without any node juggling, and dropping the iterator part-way through drops the rest.
pub struct IntoIter<T> {
    pub(crate) list: LinkedList<T>,
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.pop_front()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T> IntoIterator for &'a mut LinkedList<T> {
    type Item = &'a mut T;

    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back) = match &self.state {
            Empty => (None, None),
            Full(ListContents { head, tail, .. }) => (Some(*head), Some(*tail)),
        };

        IterMut {
            front,
            back,
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A mutable borrowing iterator over a list.
///
/// The two ends close in on each other; `remaining` is what keeps them from crossing once the
/// span between them is spent.
pub struct IterMut<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _phantom: PhantomData<&'a mut T>,
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // UNWRAP: remaining is nonzero, so the unconsumed span still has a front node.
        let ptr = self.front.unwrap();
        self.front = *ptr.next();
        self.remaining -= 1;
        // SAFETY: The iterator holds a unique borrow of the list and visits every node exactly
        // once, so handing out disjoint mutable item references is sound.
        Some(unsafe { &mut (*ptr.as_ptr()).value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // UNWRAP: remaining is nonzero, so the unconsumed span still has a back node.
        let ptr = self.back.unwrap();
        self.back = *ptr.prev();
        self.remaining -= 1;
        // SAFETY: As in next.
        Some(unsafe { &mut (*ptr.as_ptr()).value })
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}

impl<T> FusedIterator for IterMut<'_, T> {}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        let (front, back) = match &self.state {
            Empty => (None, None),
            Full(ListContents { head, tail, .. }) => (Some(*head), Some(*tail)),
        };

        Iter {
            front,
            back,
            remaining: self.len(),
            _phantom: PhantomData,
        }
    }
}

/// A borrowing iterator over a list.
pub struct Iter<'a, T> {
    front: Link<T>,
    back: Link<T>,
    remaining: usize,
    _phantom: PhantomData<&'a T>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // UNWRAP: remaining is nonzero, so the unconsumed span still has a front node.
        let ptr = self.front.unwrap();
        self.front = *ptr.next();
        self.remaining -= 1;
        // SAFETY: The iterator borrows the list for 'a, so the node outlives the returned
        // reference.
        Some(unsafe { &(*ptr.as_ptr()).value })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        // UNWRAP: remaining is nonzero, so the unconsumed span still has a back node.
        let ptr = self.back.unwrap();
        self.back = *ptr.prev();
        self.remaining -= 1;
        // SAFETY: As in next.
        Some(unsafe { &(*ptr.as_ptr()).value })
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}
