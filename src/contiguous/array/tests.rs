#![cfg(test)]

use std::iter;
use std::mem::MaybeUninit;

use super::*;
use crate::traits::Collection;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::panic::assert_panics;

#[test]
fn test_init() {
    let arr: Array<u8> = Array::new();
    assert_eq!(arr.size(), 0);
    assert_eq!(&*arr, &[], "A new Array should deref to an empty slice.");

    let arr = Array::from([1, 2, 3]);
    assert_eq!(arr.size(), 3);
    assert_eq!(&*arr, &[1, 2, 3]);

    let arr: Array<u8> = Array::repeat_default(4);
    assert_eq!(&*arr, &[0, 0, 0, 0]);

    let arr = Array::repeat_item(7, 3);
    assert_eq!(&*arr, &[7, 7, 7]);

    let arr: Array<u32> = (0..5).collect();
    assert_eq!(&*arr, &[0, 1, 2, 3, 4], "Collected iter should be equal.");
}

#[test]
fn test_uninit_realloc() {
    let mut arr: Array<MaybeUninit<usize>> = Array::new_uninit(3);
    for i in 0..3 {
        arr[i] = MaybeUninit::new(i);
    }
    // SAFETY: All 3 values have just been written.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2]);

    let mut arr = arr.forget_init();
    arr.realloc(5);
    assert_eq!(arr.size(), 5);
    arr[3] = MaybeUninit::new(3);
    arr[4] = MaybeUninit::new(4);
    // SAFETY: The two new slots have just been written, the rest carried over.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    let mut arr = arr.forget_init();
    arr.realloc(2);
    assert_eq!(arr.size(), 2, "Shrinking should keep the leading values.");
    // SAFETY: Both remaining slots were initialized before the realloc.
    let arr = unsafe { arr.assume_init() };
    assert_eq!(&*arr, &[0, 1]);

    let mut arr = arr.forget_init();
    arr.realloc(0);
    assert_eq!(arr.size(), 0);
}

#[test]
fn test_slice_access() {
    let mut arr = Array::from([3, 1, 2]);
    assert_eq!(arr[0], 3);
    assert_eq!(arr.first(), Some(&3));
    assert_eq!(arr.last(), Some(&2));

    arr.sort();
    assert_eq!(&*arr, &[1, 2, 3], "Sorting applies through the slice view.");

    arr[0] = 0;
    for item in arr.iter_mut() {
        *item += 10;
    }
    assert_eq!(&*arr, &[10, 12, 13]);

    assert_panics!({
        let arr = Array::from([1, 2, 3]);
        arr[3]
    });
}

#[test]
fn test_clone_equality() {
    let arr: Array<u32> = (0..5).collect();
    let clone = arr.clone();

    assert_eq!(arr, clone, "A clone should be equal to the original.");
    assert_ne!(arr, (0..4).collect());
    assert_ne!(arr, (1..6).collect());
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let arr: Array<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(arr);
    assert_eq!(
        counter.take(),
        10,
        "Dropping the Array should drop every item."
    );
}

#[test]
fn test_into_iter() {
    let arr: Array<u32> = (0..5).collect();
    let mut iter = arr.into_iter();

    assert_eq!(iter.len(), 5);
    assert_eq!(iter.next(), Some(0));
    assert_eq!(iter.next_back(), Some(4));
    assert_eq!(iter.next(), Some(1));
    assert_eq!(iter.len(), 2);
    assert_eq!(iter.next(), Some(2));
    assert_eq!(iter.next_back(), Some(3));
    assert_eq!(iter.next(), None, "Both ends should meet in the middle.");
    assert_eq!(iter.next_back(), None);

    let counter = CountedDrop::new(0);
    let arr: Array<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut iter = arr.into_iter();
    iter.next();
    iter.next_back();
    drop(iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed iterator should drop the remaining items."
    );
}

#[test]
fn test_zero_sized_types() {
    let arr: Array<ZeroSizedType> = Array::repeat_default(5);
    assert_eq!(arr.size(), 5);
    assert_eq!(arr[4], ZeroSizedType);
    assert_eq!(
        arr.into_iter().count(),
        5,
        "Zero-sized values should still be counted."
    );

    let arr: Array<ZeroSizedType> = Array::new();
    assert_eq!(arr.into_iter().count(), 0);
}

#[test]
fn test_collection() {
    let arr: Array<u32> = [1, 2, 2, 3].into_iter().collect();

    assert_eq!(Collection::len(&arr), 4);
    assert!(!arr.is_empty());
    assert!(Collection::contains(&arr, &3));
    assert!(!Collection::contains(&arr, &4));
    assert_eq!(arr.count(&2), 2);
    assert_eq!(
        Collection::iter(&arr).copied().collect::<Vec<_>>(),
        [1, 2, 2, 3]
    );

    let empty: Array<u32> = Array::new();
    assert!(empty.is_empty());
}

#[test]
fn test_format() {
    let arr = Array::from([1, 2, 3]);
    assert_eq!(format!("{arr}"), "[1, 2, 3]");
    assert_eq!(format!("{arr:?}"), "Array { contents: [1, 2, 3], size: 3 }");
}
