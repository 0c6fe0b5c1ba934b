use std::alloc::{self, Layout};
use std::borrow::{Borrow, BorrowMut};
use std::fmt::{self, Debug, Display, Formatter};
use std::marker::PhantomData;
use std::mem::{self, MaybeUninit};
use std::ops::{Deref, DerefMut};
use std::ptr::{self, NonNull};
use std::slice;

use crate::contiguous::Vector;
use crate::traits::Collection;
use crate::util::error::CapacityOverflow;
use crate::util::result::ResultExtension;

const MAX_SIZE: usize = isize::MAX as usize;

/// An implementation of an array that is sized at runtime. Similar to a [`Box<[T]>`](Box<T>).
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Array.
///
/// | Method | Complexity |
/// |-|-|
/// | `get` | `O(1)` |
/// | `size` | `O(1)` |
/// | `contains` | `O(n)` |
pub struct Array<T> {
    pub(crate) ptr: NonNull<T>,
    pub(crate) size: usize,
    pub(crate) _phantom: PhantomData<T>,
}

impl<T> Array<T> {
    /// Returns the size of the Array.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(arr.size(), 3);
    /// ```
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Creates a new Array with size 0.
    ///
    /// This method isn't very helpful in most cases because the size remains zero after
    /// initialization. See [`Array::new_uninit`] or [`Array::from`] for preferred methods of
    /// initialization.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// let arr: Array<u8> = Array::new();
    /// assert_eq!(arr.size(), 0);
    /// assert_eq!(&*arr, &[]);
    /// ```
    pub fn new() -> Array<T> {
        // SAFETY: There are no values, so they are all initialized.
        unsafe { Self::new_uninit(0).assume_init() }
    }

    /// Creates a new Array of [`MaybeUninit<T>`] with the provided `size`. All values are
    /// uninitialized.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let arr: Array<MaybeUninit<u8>> = Array::new_uninit(5);
    /// assert_eq!(arr.size(), 5);
    /// ```
    pub fn new_uninit(size: usize) -> Array<MaybeUninit<T>> {
        let layout = Array::<MaybeUninit<T>>::make_layout(size);
        let ptr = Array::<MaybeUninit<T>>::make_ptr(layout);

        Array {
            ptr,
            size,
            _phantom: PhantomData,
        }
    }

    /// Interprets self as an `Array<MaybeUninit<T>>`. Although it may not seem very useful by
    /// itself, this method acts as a counterpart to [`Array::assume_init`] and allows
    /// [`Array::realloc`] to be called on a previously initialized Array.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::from([1_u8, 2, 3]);
    /// let mut new_arr = arr.forget_init();
    ///
    /// new_arr.realloc(4);
    /// new_arr[3] = MaybeUninit::new(4);
    ///
    /// // SAFETY: All values in new_arr are now initialized.
    /// arr = unsafe { new_arr.assume_init() };
    ///
    /// assert_eq!(&*arr, &[1, 2, 3, 4]);
    /// ```
    pub fn forget_init(self) -> Array<MaybeUninit<T>> {
        // SAFETY: Array<T> has the same layout as Array<MaybeUninit<T>>.
        unsafe { mem::transmute::<Array<T>, Array<MaybeUninit<T>>>(self) }
    }
}

impl<T> Array<T> {
    /// A helper function to create a [`Layout`] for use during allocation, containing `size` number
    /// of elements of type `T`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    pub(crate) fn make_layout(size: usize) -> Layout {
        Layout::array::<T>(size).map_err(|_| CapacityOverflow).throw()
    }

    /// A helper function to create a [`NonNull`] for the provided [`Layout`]. Returns a dangling
    /// pointer for a zero-sized layout.
    ///
    /// # Errors
    /// In the event of an allocation error, this method calls [`alloc::handle_alloc_error`] as
    /// recommended, to avoid new allocations rather than panicking.
    pub(crate) fn make_ptr(layout: Layout) -> NonNull<T> {
        if layout.size() == 0 {
            NonNull::dangling()
        } else {
            NonNull::new(
                // SAFETY: Zero-sized layouts have been guarded against.
                unsafe { alloc::alloc(layout).cast() }
            ).unwrap_or_else(|| alloc::handle_alloc_error(layout))
        }
    }
}

impl<T: Clone> Array<T> {
    /// Creates a new `Array<T>` with `count` clones of `item`.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// let arr = Array::repeat_item(5, 3);
    /// assert_eq!(arr.size(), 3);
    /// assert_eq!(&*arr, &[5, 5, 5]);
    /// ```
    pub fn repeat_item(item: T, count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(item.clone()))
            }
        }

        // SAFETY: All values are initialized with a clone of item.
        unsafe { arr.assume_init() }
    }
}

impl<T: Default> Array<T> {
    /// Creates a new `Array<T>` by repeating the default value of `T` `count` times.
    ///
    /// # Panics
    /// Panics if memory layout size exceeds [`isize::MAX`].
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// let arr: Array<u8> = Array::repeat_default(3);
    /// assert_eq!(&*arr, &[0, 0, 0]);
    /// ```
    pub fn repeat_default(count: usize) -> Array<T> {
        let arr = Self::new_uninit(count);

        for i in 0..count {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe {
                arr.ptr.add(i).write(MaybeUninit::new(T::default()))
            }
        }

        // SAFETY: All values are initialized with the default value for T.
        unsafe { arr.assume_init() }
    }
}

impl<T, const N: usize> From<[T; N]> for Array<T> {
    /// Creates an Array by moving the values out of a fixed-size array.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// let arr = Array::from([1, 2, 3]);
    /// assert_eq!(&*arr, &[1, 2, 3]);
    /// ```
    fn from(value: [T; N]) -> Self {
        let arr = Self::new_uninit(N);

        for (index, item) in value.into_iter().enumerate() {
            // SAFETY: size > isize::MAX / size_of::<T>() is already guarded against and all
            // possible values are within the allocated range of the Array.
            unsafe {
                arr.ptr.add(index).write(MaybeUninit::new(item))
            }
        }

        // SAFETY: All N values are initialized.
        unsafe { arr.assume_init() }
    }
}

impl<T> FromIterator<T> for Array<T> {
    /// Creates an Array holding every value produced by the iterator. The values are staged
    /// through a [`Vector`] because the final size isn't known up front.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Array::from(iter.into_iter().collect::<Vector<T>>())
    }
}

impl<T> Array<MaybeUninit<T>> {
    /// Converts a `Array<MaybeUninit<T>>` to `MaybeUninit<Array<T>>`.
    pub fn transpose(self) -> MaybeUninit<Array<T>> {
        // SAFETY: Array<MaybeUninit<T>> has the same layout as MaybeUninit<Array<T>>.
        unsafe { mem::transmute(self) }
    }

    /// Assume that all values of an `Array<MaybeUninit<T>>` are initialized.
    ///
    /// # Safety
    /// It is up to the caller to guarantee that the Array is properly initialized. Failing to do so
    /// is undefined behavior.
    ///
    /// # Examples
    /// ```
    /// # use basic_collections::contiguous::Array;
    /// # use std::mem::MaybeUninit;
    /// let mut arr = Array::new_uninit(5);
    /// for i in 0..5 {
    ///     arr[i] = MaybeUninit::new(i);
    /// }
    /// assert_eq!(&*unsafe { arr.assume_init() }, &[0, 1, 2, 3, 4]);
    /// ```
    pub unsafe fn assume_init(self) -> Array<T> {
        // SAFETY: There are no safety guarantees here, responsibility is passed to the caller.
        unsafe { self.transpose().assume_init() }
    }

    /// Reallocate the Array to have size equal to new_size, with new locations uninitialized.
    /// Several checks are performed first to ensure that an allocation is actually required.
    ///
    /// # Panics
    /// Panics if the memory layout of the new allocation would have a size that exceeds
    /// [`isize::MAX`]. (`new_size * size_of::<T>() > isize::MAX`)
    pub fn realloc(&mut self, new_size: usize) {
        let new_ptr = match (self.size, new_size) {
            (_, _) if size_of::<T>() == 0 => {
                // Zero-sized types are never actually allocated, so the dangling pointer can be
                // kept as is. Only the recorded size needs to change.
                self.ptr
            },
            (old, new) if old == new => {
                // The sizes are equal, there is no need to reallocate.
                return;
            },
            (0, _) => {
                // If the Array previously had a size of zero, we need a new allocation.
                let layout = Array::<MaybeUninit<T>>::make_layout(new_size);

                // SAFETY: Layout will have non-zero size because both 0 size and zero-sized
                // types are guarded against.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::alloc(layout).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(layout)
                )
            },
            (_, 0) => {
                // If the new size is zero, we just need a dangling pointer.
                NonNull::dangling()
            },
            (_, _) => {
                // Otherwise, use realloc to handle moving or in-place size changing.
                let layout = Array::<MaybeUninit<T>>::make_layout(self.size);

                if new_size.checked_mul(size_of::<T>()).is_none_or(|bytes| bytes > MAX_SIZE) {
                    Err(CapacityOverflow).throw()
                }

                // SAFETY: The same layout and allocator are used for the allocation, and the new
                // layout size is > 0 and <= isize::MAX.
                let raw_ptr: *mut MaybeUninit<T> = unsafe {
                    alloc::realloc(
                        self.ptr.as_ptr().cast(),
                        layout,
                        new_size * size_of::<T>()
                    ).cast()
                };

                NonNull::new(raw_ptr).unwrap_or_else(
                    || alloc::handle_alloc_error(layout)
                )
            },
        };

        self.ptr = new_ptr;
        self.size = new_size;
    }
}

impl<T> Default for Array<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Array<T> {
    fn drop(&mut self) {
        let layout = Array::<T>::make_layout(self.size);

        for i in 0..self.size {
            // SAFETY: The pointer is nonnull, as well as properly aligned, initialized and
            // ready to drop. count > isize::MAX / size_of::<T>() is already guarded against and
            // all possible values are within the allocated range of the Array.
            unsafe {
                ptr::drop_in_place(self.ptr.add(i).as_ptr());
            }
        }

        if layout.size() != 0 {
            // SAFETY: ptr is always allocated in the global allocator and layout is the same as
            // when allocated. Zero-sized layouts aren't allocated and are guarded against
            // deallocation.
            unsafe {
                alloc::dealloc(self.ptr.as_ptr().cast(), layout)
            }
        }
    }
}

impl<T> Deref for Array<T> {
    type Target = [T];

    fn deref(&self) -> &Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents mutation throughout 'a.
        unsafe {
            slice::from_raw_parts(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> DerefMut for Array<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        // SAFETY: The held data uses Layout::array(size) and is therefore valid and properly
        // aligned for (size * mem::size_of::<T>()) bytes. Data is properly initialized and has a
        // length no greater than isize::MAX. Array's safe API doesn't provide access to raw
        // pointers, so the borrow checker prevents access throughout 'a.
        unsafe {
            slice::from_raw_parts_mut(self.ptr.as_ptr(), self.size)
        }
    }
}

impl<T> AsRef<[T]> for Array<T> {
    fn as_ref(&self) -> &[T] {
        self.deref()
    }
}

impl<T> AsMut<[T]> for Array<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.deref_mut()
    }
}

impl<T> Borrow<[T]> for Array<T> {
    fn borrow(&self) -> &[T] {
        self.as_ref()
    }
}

impl<T> BorrowMut<[T]> for Array<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut()
    }
}

// SAFETY: Arrays, when used safely rely on unique pointers and are therefore safe for Send when T:
// Send.
unsafe impl<T: Send> Send for Array<T> {}
// SAFETY: Array's safe API obeys all rules of the borrow checker, so no interior mutability occurs.
// This means that Array<T> can safely implement Sync when T: Sync.
unsafe impl<T: Sync> Sync for Array<T> {}

impl<T: Clone> Clone for Array<T> {
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Array<T> {
    fn eq(&self, other: &Self) -> bool {
        **self == **other
    }
}

impl<T: Eq> Eq for Array<T> {}

impl<T: PartialEq> Collection<T> for Array<T> {
    type Iter<'a> = slice::Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        self.size
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        self.as_ref().iter()
    }

    fn contains(&self, item: &T) -> bool {
        self.as_ref().contains(item)
    }
}

impl<T: Debug> Debug for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Array")
            .field("contents", &self.as_ref())
            .field("size", &self.size)
            .finish()
    }
}

impl<T: Debug> Display for Array<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_ref().iter()).finish()
    }
}
