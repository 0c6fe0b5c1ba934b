#![cfg(test)]

use std::iter;

use super::*;
use crate::contiguous::Array;
use crate::traits::Collection;
use crate::util::alloc::{CountedDrop, ZeroSizedType};
use crate::util::error::IndexOutOfBounds;
use crate::util::panic::assert_panics;

#[test]
fn test_push_pop() {
    let mut vec = Vector::new();
    assert_eq!(vec.cap(), 0);

    vec.push(1);
    assert_eq!(vec.cap(), 2, "The first push should allocate the minimum capacity.");
    vec.push(2);
    vec.push(3);
    assert_eq!(vec.cap(), 4, "A full Vector should double its capacity.");
    vec.push(4);
    vec.push(5);
    assert_eq!(vec.cap(), 8);
    assert_eq!(vec.len(), 5);

    assert_eq!(vec.pop(), Some(5));
    assert_eq!(vec.pop(), Some(4));
    assert_eq!(vec.pop(), Some(3));
    assert_eq!(
        vec.cap(),
        4,
        "Dropping to a quarter occupancy should halve the capacity."
    );
    assert_eq!(vec.pop(), Some(2));
    assert_eq!(vec.cap(), 2);
    assert_eq!(vec.pop(), Some(1));
    assert_eq!(vec.pop(), None);
    assert_eq!(vec.cap(), 2, "The capacity should never shrink below the minimum.");
}

#[test]
fn test_with_cap_exact() {
    let mut vec: Vector<u8> = Vector::with_cap(5);
    assert_eq!(vec.cap(), 5);

    vec.extend([1, 2, 3, 4, 5]);
    assert_eq!(vec.cap(), 5, "No reallocation should occur within the capacity.");

    vec.push(6);
    assert_eq!(vec.cap(), 10);

    vec.reserve(4);
    assert_eq!(vec.cap(), 10, "reserve asks for an exact capacity.");
    vec.reserve(0);
    assert_eq!(vec.cap(), 6);
    vec.shrink_to_fit();
    assert_eq!(vec.cap(), 6);
    assert_eq!(&*vec, &[1, 2, 3, 4, 5, 6]);
}

#[test]
fn test_indexed_operations() {
    let mut vec: Vector<u32> = (0..5).collect();

    assert_eq!(vec.get(0), &0);
    assert_eq!(*vec.get_mut(4), 4);
    assert_eq!(vec[2], 2);
    assert_eq!(
        vec.try_get(5),
        Err(IndexOutOfBounds { index: 5, len: 5 }),
        "Out of bounds access should report the index and length."
    );

    vec.insert(0, 10);
    vec.insert(6, 20);
    vec.insert(3, 30);
    assert_eq!(&*vec, &[10, 0, 1, 30, 2, 3, 4, 20]);
    assert_eq!(
        vec.try_insert(100, 0),
        Err(IndexOutOfBounds { index: 100, len: 8 })
    );

    assert_eq!(vec.remove(0), 10);
    assert_eq!(vec.remove(6), 20);
    assert_eq!(vec.remove(2), 30);
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
    assert_eq!(
        vec.try_remove(5),
        Err(IndexOutOfBounds { index: 5, len: 5 })
    );

    assert_eq!(vec.replace(2, 200), 2);
    assert_eq!(vec[2], 200);
    vec[2] = 2;
    assert_eq!(
        vec.try_replace(5, 0),
        Err(IndexOutOfBounds { index: 5, len: 5 })
    );

    assert_panics!({
        let vec: Vector<u32> = (0..5).collect();
        *vec.get(5)
    });
    assert_panics!({
        let mut vec: Vector<u32> = (0..5).collect();
        vec.remove(17)
    });
}

#[test]
fn test_append() {
    let mut vec: Vector<u32> = (0..3).collect();
    vec.append((3..6).collect());
    assert_eq!(&*vec, &[0, 1, 2, 3, 4, 5]);
    assert_eq!(vec.cap(), 6, "Appending reserves exactly the combined length.");

    vec.append(Vector::new());
    assert_eq!(vec.len(), 6);

    let mut empty: Vector<u32> = Vector::new();
    empty.append(vec);
    assert_eq!(&*empty, &[0, 1, 2, 3, 4, 5]);
}

#[test]
fn test_clear() {
    let counter = CountedDrop::new(0);
    let mut vec: Vector<CountedDrop> =
        iter::repeat_with(|| counter.clone()).take(4).collect();
    let cap = vec.cap();

    vec.clear();
    assert_eq!(counter.take(), 4, "Clearing should drop every item.");
    assert!(vec.is_empty());
    assert_eq!(vec.cap(), cap, "Clearing should keep the capacity for reuse.");

    vec.push(counter.clone());
    assert_eq!(vec.len(), 1);
}

#[test]
fn test_drop() {
    let counter = CountedDrop::new(0);
    let vec: Vector<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();
    drop(vec);
    assert_eq!(counter.take(), 10, "Dropping the Vector should drop every item.");
}

#[test]
fn test_iterators() {
    let mut vec: Vector<u32> = (0..5).collect();

    for item in vec.iter_mut() {
        *item *= 2;
    }
    assert_eq!(&*vec, &[0, 2, 4, 6, 8]);

    let mut into_iter = vec.into_iter();
    assert_eq!(into_iter.size_hint(), (5, Some(5)));
    assert_eq!(into_iter.next(), Some(0));
    assert_eq!(into_iter.next_back(), Some(8));

    let counter = CountedDrop::new(0);
    let vec: Vector<CountedDrop> = iter::repeat_with(|| counter.clone()).take(10).collect();
    let mut into_iter = vec.into_iter();
    into_iter.next();
    drop(into_iter);
    assert_eq!(
        counter.take(),
        10,
        "Dropping a partially consumed owned iterator should drop the remaining items."
    );
}

#[test]
fn test_conversions() {
    let vec: Vector<u32> = (0..5).collect();
    let arr = Array::from(vec);
    assert_eq!(&*arr, &[0, 1, 2, 3, 4]);

    let vec = Vector::from(arr);
    assert_eq!(vec.len(), 5);
    assert_eq!(
        vec.cap(),
        5,
        "A Vector built from an Array should start with capacity equal to its size."
    );
    assert_eq!(&*vec, &[0, 1, 2, 3, 4]);
}

#[test]
fn test_zero_sized_types() {
    let mut vec = Vector::new();
    for _ in 0..100 {
        vec.push(ZeroSizedType);
    }
    assert_eq!(vec.len(), 100);
    assert_eq!(vec.pop(), Some(ZeroSizedType));
    assert_eq!(vec.len(), 99);
    assert_eq!(
        vec.into_iter().count(),
        99,
        "Zero-sized values should still be counted."
    );
}

#[test]
fn test_clone_equality() {
    let vec: Vector<u32> = (0..5).collect();
    let clone = vec.clone();

    assert_eq!(vec, clone, "A clone should be equal to the original.");
    assert_eq!(clone.cap(), vec.cap());
    assert_ne!(vec, (0..4).collect());
    assert_ne!(vec, (1..6).collect());
}

#[test]
fn test_collection() {
    let vec: Vector<u32> = [1, 2, 2, 3].into_iter().collect();

    assert_eq!(Collection::len(&vec), 4);
    assert!(Collection::contains(&vec, &3));
    assert!(!Collection::contains(&vec, &4));
    assert_eq!(vec.count(&2), 2);
    assert_eq!(
        Collection::iter(&vec).copied().collect::<Vec<_>>(),
        [1, 2, 2, 3]
    );
}

#[test]
fn test_format() {
    let vec: Vector<u32> = (1..4).collect();
    assert_eq!(format!("{vec}"), "![1, 2, 3]");
    assert_eq!(
        format!("{vec:?}"),
        "Vector { contents: [1, 2, 3], len: 3, cap: 3 }"
    );
}
