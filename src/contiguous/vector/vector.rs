use std::borrow::{Borrow, BorrowMut};
use std::cmp;
use std::fmt::{self, Debug, Display, Formatter};
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::slice;

use crate::contiguous::Array;
use crate::traits::Collection;
use crate::util::error::{CapacityOverflow, IndexOutOfBounds};
use crate::util::result::ResultExtension;

const MIN_CAP: usize = 2;
const MAX_CAP: usize = isize::MAX as usize;

const GROWTH_FACTOR: usize = 2;

/// A variable size contiguous collection, based on [`Array<T>`].
///
/// Pushing into a full Vector doubles its capacity, and removal hands memory back by halving the
/// capacity once three quarters of it sits unused.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Vector.
/// - `i`: The index of the item in question.
/// - `m`: The number of items in the second Vector.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `len` | `O(1)` |
/// | `push` | `O(1)`*, `O(n)` |
/// | `push_unchecked` | `O(1)` |
/// | `pop` | `O(1)`*, `O(n)` |
/// | `insert` | `O(n-i)` |
/// | `remove` | `O(n-i)` |
/// | `replace` | `O(1)` |
/// | `reserve` | `O(n)`**, `O(1)` |
/// | `shrink_to_fit` | `O(n)` |
/// | `append` | `O(n+m)` |
/// | `contains` | `O(n)` |
///
/// \* Amortized; pushes and pops which adjust the capacity take `O(n)`.
///
/// \** If the Vector has capacity exactly equal to the requested total already, `reserve` is
/// `O(1)`.
pub struct Vector<T> {
    pub(crate) arr: Array<MaybeUninit<T>>,
    pub(crate) len: usize,
}

impl<T> Vector<T> {
    /// Returns the length of the Vector.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let vec: Vector<u8> = (1..=3).collect();
    /// assert_eq!(vec.len(), 3);
    /// ```
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns the current capacity of the Vector. Unlike [`Vec`], the capacity is guaranteed to be
    /// exactly the value provided to any of the various capacity manipulation functions.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub const fn cap(&self) -> usize {
        self.arr.size()
    }

    /// Returns true if the Vector contains no elements.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::new();
    /// assert!(vec.is_empty());
    /// vec.push(1);
    /// assert!(!vec.is_empty())
    /// ```
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Creates a new Vector with length and capacity 0. Memory will be allocated when the capacity
    /// changes.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let vec: Vector<u8> = Vector::new();
    /// assert_eq!(vec.len(), 0);
    /// assert_eq!(vec.cap(), 0);
    /// ```
    pub fn new() -> Vector<T> {
        Vector {
            arr: Array::new(),
            len: 0,
        }
    }

    /// Creates a new Vector with capacity exactly equal to the provided value, allowing values to
    /// be added without reallocation.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<u8> = Vector::with_cap(5);
    /// assert_eq!(vec.cap(), 5);
    /// vec.extend([1_u8, 2, 3, 4, 5]);
    /// assert_eq!(vec.cap(), 5);
    /// ```
    pub fn with_cap(cap: usize) -> Vector<T> {
        Vector {
            arr: Array::new_uninit(cap),
            len: 0,
        }
    }

    /// Push the provided value onto the end of the Vector, increasing the capacity if required.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec = Vector::<u8>::new();
    /// for i in 0..=5 {
    ///     vec.push(i);
    /// }
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.cap() {
            self.grow();
        }
        // SAFETY: The capacity has just been adjusted to support the addition of the new item.
        unsafe { self.push_unchecked(value) }
    }

    /// Push the provided value onto the end of the Vector, assuming that there is enough capacity
    /// to do so.
    ///
    /// # Safety
    /// It is up to the caller to ensure that the Vector has enough capacity to add the provided
    /// value, using methods like [`reserve`](Vector::reserve) or [`with_cap`](Vector::with_cap) to
    /// do so. Using this method on a Vector without enough capacity is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::{Array, Vector};
    /// let arr = Array::from([1_u8, 2, 3]);
    /// let mut vec = Vector::with_cap(arr.size());
    /// for i in arr.into_iter() {
    ///     // SAFETY: We know that vec has enough capacity to store all elements in arr.
    ///     unsafe { vec.push_unchecked(i); }
    /// }
    /// assert_eq!(&*vec, &[1, 2, 3]);
    /// ```
    pub unsafe fn push_unchecked(&mut self, value: T) {
        // SAFETY: It is up to the caller to ensure that the Vector has enough capacity for this
        // push, leading to the pointer write being in bounds of the allocation.
        unsafe { self.arr.ptr.add(self.len).write(MaybeUninit::new(value)); }
        self.len += 1;
    }

    /// Pops the last value off the end of the Vector, returning an owned value if the Vector has
    /// length greater than 0. The capacity is halved whenever three quarters of it would be left
    /// unused.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..5).collect();
    /// for i in (0..vec.len()).rev() {
    ///     assert_eq!(vec.pop(), Some(i));
    /// }
    /// assert_eq!(vec.pop(), None);
    /// ```
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            // Decrement len before getting.
            self.len -= 1;

            // SAFETY: len has just been decremented and is within the capacity of the Vector.
            // size_of::<T>() * self.len can't overflow isize::MAX, and all values < len are
            // initialized.
            // We are making a bitwise copy of the value on the heap and then treating the version
            // on the heap as uninitialized, which is as close as we can get to actually moving the
            // value off of the heap.
            let value = unsafe {
                self.arr.ptr.add(self.len).read().assume_init()
            };

            self.shrink();
            Some(value)
        }
    }

    /// Returns a reference to the value at the provided index.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get(&self, index: usize) -> &T {
        self.try_get(index).throw()
    }

    /// Returns a reference to the value at the provided index, or an error if the index is out of
    /// bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.try_get(2), Ok(&2));
    /// assert!(vec.try_get(3).is_err());
    /// ```
    pub fn try_get(&self, index: usize) -> Result<&T, IndexOutOfBounds> {
        self.as_ref().get(index).ok_or(IndexOutOfBounds {
            index,
            len: self.len,
        })
    }

    /// Returns a mutable reference to the value at the provided index.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.try_get_mut(index).throw()
    }

    /// Returns a mutable reference to the value at the provided index, or an error if the index is
    /// out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, IndexOutOfBounds> {
        let len = self.len;
        self.as_mut().get_mut(index).ok_or(IndexOutOfBounds { index, len })
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary.
    /// Providing an index equal to the length appends the value.
    ///
    /// # Panics
    /// Panics if the provided index is greater than the length.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.insert(1, 100);
    /// vec.insert(1, 200);
    /// vec.insert(5, 300);
    /// assert_eq!(&*vec, &[0, 200, 100, 1, 2, 300]);
    /// ```
    pub fn insert(&mut self, index: usize, value: T) {
        self.try_insert(index, value).throw()
    }

    /// Inserts the provided value at the given index, growing and moving items as necessary, or
    /// returns an error if the index is greater than the length.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index > len`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), IndexOutOfBounds> {
        if index > self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        if self.len == self.cap() {
            self.grow();
        }

        let mut prev = MaybeUninit::new(value);
        for i in index..=self.len {
            prev = mem::replace(&mut self.arr[i], prev);
        }

        self.len += 1;
        Ok(())
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<_> = "Hello world!".chars().collect();
    /// assert_eq!(vec.remove(1), 'e');
    /// assert_eq!(vec.remove(4), ' ');
    /// assert_eq!(vec, "Hlloworld!".chars().collect());
    /// ```
    pub fn remove(&mut self, index: usize) -> T {
        self.try_remove(index).throw()
    }

    /// Removes the element at the provided index, moving all following values to fill in the gap,
    /// or returns an error if the index is out of bounds. The capacity is halved whenever three
    /// quarters of it would be left unused.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    pub fn try_remove(&mut self, index: usize) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let mut next = MaybeUninit::uninit();
        // Iterate backwards to index.
        for i in (index..self.len).rev() {
            next = mem::replace(&mut self.arr[i], next);
        }

        self.len -= 1;
        self.shrink();

        // SAFETY: next contains the value which was previously located at index, which we've
        // already checked to be less than len and therefore initialized.
        Ok(unsafe { next.assume_init() })
    }

    /// Replaces the value at the provided index, returning the old value.
    ///
    /// # Panics
    /// Panics if the provided index is out of bounds.
    pub fn replace(&mut self, index: usize, value: T) -> T {
        self.try_replace(index, value).throw()
    }

    /// Replaces the value at the provided index, returning the old value, or an error if the index
    /// is out of bounds.
    ///
    /// # Errors
    /// Returns [`IndexOutOfBounds`] if `index >= len`.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// assert_eq!(vec.try_replace(1, 10), Ok(1));
    /// assert_eq!(&*vec, &[0, 10, 2]);
    /// assert!(vec.try_replace(3, 30).is_err());
    /// ```
    pub fn try_replace(&mut self, index: usize, value: T) -> Result<T, IndexOutOfBounds> {
        if index >= self.len {
            return Err(IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        // SAFETY: index < len, so the slot holds an initialized value.
        Ok(unsafe {
            mem::replace(&mut self.arr[index], MaybeUninit::new(value)).assume_init()
        })
    }

    /// Adjusts the capacity to hold exactly `extra` items beyond the current length.
    ///
    /// # Panics
    /// Panics if the new capacity overflows [`usize`] or the memory layout size exceeds
    /// [`isize::MAX`].
    pub fn reserve(&mut self, extra: usize) {
        let new_cap = self.len.checked_add(extra).ok_or(CapacityOverflow).throw();

        self.realloc_with_cap(new_cap);
    }

    /// Reduces the capacity to exactly the current length.
    pub fn shrink_to_fit(&mut self) {
        self.realloc_with_cap(self.len);
    }

    /// Moves every item out of `other` and onto the end of self, leaving capacity for exactly the
    /// combined length.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Vector;
    /// let mut vec: Vector<_> = (0..3).collect();
    /// vec.append((3..6).collect());
    /// assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    /// ```
    pub fn append(&mut self, other: Vector<T>) {
        self.reserve(other.len());
        for item in other {
            // SAFETY: Capacity was reserved for every appended item.
            unsafe { self.push_unchecked(item); }
        }
    }

    /// Drops every item, keeping the current capacity for reuse.
    pub fn clear(&mut self) {
        for i in 0..self.len {
            // SAFETY: All values below len are initialized and dropped exactly once, because len
            // is reset immediately after.
            unsafe { self.arr[i].assume_init_drop(); }
        }
        self.len = 0;
    }
}

impl<T> Vector<T> {
    pub(crate) fn realloc_with_cap(&mut self, new_cap: usize) {
        self.arr.realloc(new_cap);
    }

    pub(crate) fn grow(&mut self) {
        // The capacity in bytes is below isize::MAX, so doubling the count can't overflow usize.
        let mut new_cap = cmp::max(self.cap() * GROWTH_FACTOR, MIN_CAP);

        if size_of::<T>() > 0 {
            let max_cap = MAX_CAP / size_of::<T>();

            // If we would grow past the maximum capacity, instead use the maximum if it represents
            // growth.
            if new_cap > max_cap && max_cap > self.cap() {
                new_cap = max_cap;
            }
        }

        self.realloc_with_cap(new_cap);
    }

    /// Halves the capacity if at most a quarter of it is in use, leaving the rest to the
    /// allocator.
    pub(crate) fn shrink(&mut self) {
        if self.cap() > MIN_CAP && self.len <= self.cap() / 4 {
            self.realloc_with_cap(cmp::max(self.cap() / 2, MIN_CAP));
        }
    }
}

impl<T> Extend<T> for Vector<T> {
    fn extend<A: IntoIterator<Item = T>>(&mut self, iter: A) {
        for item in iter.into_iter() {
            self.push(item);
        }
    }
}

impl<T> FromIterator<T> for Vector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let iter = value.into_iter();
        let mut vec = Vector::with_cap(iter.size_hint().0);

        for item in iter {
            vec.push(item);
        }

        vec
    }
}

impl<T> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Vector<T> {
    fn drop(&mut self) {
        // Call drop on all initialized values in place.
        for i in 0..self.len {
            // SAFETY: All values below len are initialized and are only ever dropped here, as the
            // whole Vector is being dropped.
            unsafe { self.arr[i].assume_init_drop(); }
        }

        // We don't need to handle the Array, because it contains only MaybeUninit values, which
        // do nothing when dropped. We know that everything important has already been dropped.
    }
}

impl<T> Deref for Vector<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: All values below len are initialized, so reinterpreting *mut MaybeUninit<T> as
        // *mut T is sound for a slice of that length.
        unsafe {
            slice::from_raw_parts(
                self.arr.ptr.as_ptr().cast(),
                self.len
            )
        }
    }
}

impl<T> DerefMut for Vector<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: All values below len are initialized, so reinterpreting *mut MaybeUninit<T> as
        // *mut T is sound for a slice of that length.
        unsafe {
            slice::from_raw_parts_mut(
                self.arr.ptr.as_ptr().cast(),
                self.len
            )
        }
    }
}

impl<T> AsRef<[T]> for Vector<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Vector<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Vector<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Vector<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Vectors, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Vector<T> {}
// SAFETY: Vector's safe API obeys all rules of the borrow checker, so no interior mutability
// occurs. This means that Vector<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Vector<T> {}

impl<T: Clone> Clone for Vector<T> {
    fn clone(&self) -> Self {
        let mut vec = Self::with_cap(self.cap());

        for value in self.as_ref() {
            vec.push(value.clone());
        }

        vec
    }
}

impl<T> From<Vector<T>> for Array<T> {
    fn from(mut value: Vector<T>) -> Self {
        // Dealloc all uninit values > len.
        value.shrink_to_fit();

        // SAFETY: A Vector contains len initialized values with the same layout and alignment as an
        // Array.
        let arr = unsafe { mem::transmute_copy(&value.arr) };
        mem::forget(value);
        arr
    }
}

impl<T> From<Array<T>> for Vector<T> {
    fn from(value: Array<T>) -> Self {
        let len = value.size();
        Vector {
            arr: value.forget_init(),
            len,
        }
    }
}

impl<T: PartialEq> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Vector<T> {}

impl<T: PartialEq> Collection<T> for Vector<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.len
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.as_ref().iter()
    }

    fn contains(&self, item: &T) -> bool {
        self.as_ref().contains(item)
    }
}

impl<T: Debug> Debug for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vector")
            .field("contents", &self.as_ref())
            .field("len", &self.len)
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Debug> Display for Vector<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "!")?;
        f.debug_list().entries(self.as_ref().iter()).finish()
    }
}
