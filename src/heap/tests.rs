#![cfg(test)]

use super::*;
use crate::contiguous::Vector;
use crate::traits::Collection;

#[test]
fn test_ascending_pops() {
    let mut heap = ArrayHeap::new();
    assert_eq!(heap.pop(), None);
    assert_eq!(heap.peek(), None);

    for value in [5, 3, 8, 1, 9, 2, 7, 4, 6] {
        heap.add(value);
    }
    assert_eq!(heap.len(), 9);
    assert_eq!(heap.peek(), Some(&1));

    let mut previous = 0;
    while let Some(value) = heap.pop() {
        assert!(previous < value, "Pops should produce ascending values.");
        previous = value;
    }
    assert_eq!(previous, 9, "Every added value should be popped.");
}

#[test]
fn test_duplicates() {
    let mut heap: ArrayHeap<u32> = [2, 1, 2, 1, 3].into_iter().collect();

    assert_eq!(heap.count(&1), 2);
    assert_eq!(heap.count(&2), 2);

    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(2));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), None);
}

#[test]
fn test_interleaved() {
    let mut heap = ArrayHeap::new();
    heap.add(5);
    heap.add(1);
    assert_eq!(heap.pop(), Some(1));

    heap.add(3);
    heap.add(7);
    assert_eq!(heap.peek(), Some(&3));
    assert_eq!(heap.pop(), Some(3));
    assert_eq!(heap.pop(), Some(5));

    heap.add(2);
    assert_eq!(heap.pop(), Some(2), "A new smallest value should surface immediately.");
    assert_eq!(heap.pop(), Some(7));
    assert!(heap.is_empty());
}

#[test]
fn test_heapify() {
    let vec: Vector<u32> = [9, 4, 7, 1, 8, 2].into_iter().collect();
    let heap = ArrayHeap::from(vec);

    assert_eq!(heap.peek(), Some(&1), "Heapifying should raise the smallest value.");
    assert_eq!(&*heap.into_sorted_vector(), &[1, 2, 4, 7, 8, 9]);
}

#[test]
fn test_into_sorted_vector() {
    let heap: ArrayHeap<u32> = (1..=20).rev().collect();
    let sorted = heap.into_sorted_vector();
    assert_eq!(sorted.len(), 20);
    assert!(sorted.is_sorted(), "Draining should produce ascending order.");
}

#[test]
fn test_shuffled_inserts_drain_sorted() {
    use rand::seq::SliceRandom;

    let mut values: Vec<u32> = (0..500).collect();
    values.shuffle(&mut rand::thread_rng());

    let heap: ArrayHeap<u32> = values.iter().copied().collect();
    assert_eq!(heap.peek(), Some(&0));
    assert_eq!(&*heap.into_sorted_vector(), &*(0..500).collect::<Vec<u32>>());
}

#[test]
fn test_string_values() {
    let mut heap = ArrayHeap::new();
    for word in ["pear", "apple", "orange", "banana"] {
        heap.add(word.to_string());
    }

    assert_eq!(heap.pop(), Some("apple".to_string()));
    assert_eq!(heap.pop(), Some("banana".to_string()));
    assert_eq!(heap.pop(), Some("orange".to_string()));
    assert_eq!(heap.pop(), Some("pear".to_string()));
}

#[test]
fn test_format() {
    let mut heap = ArrayHeap::new();
    heap.add(3);
    heap.add(1);
    heap.add(2);

    assert_eq!(format!("{heap}"), "[1, 3, 2]", "Display renders heap layout order.");
    assert_eq!(
        format!("{heap:?}"),
        "ArrayHeap { items: Vector { contents: [1, 3, 2], len: 3, cap: 4 } }"
    );
}

#[test]
fn test_collection() {
    let heap: ArrayHeap<u32> = [4, 2, 6].into_iter().collect();

    assert_eq!(Collection::len(&heap), 3);
    assert!(heap.contains(&6));
    assert!(!heap.contains(&5));
    assert_eq!(
        heap.iter().count(),
        3,
        "Borrowed iteration covers the whole heap, in layout order."
    );

    let mut values = heap.into_iter().collect::<Vec<_>>();
    values.sort();
    assert_eq!(values, [2, 4, 6]);
}
