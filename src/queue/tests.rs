#![cfg(test)]

use super::*;
use crate::traits::Collection;
use crate::util::error::NotFound;

#[test]
fn test_fifo_order() {
    let mut queue = LinkedQueue::new();
    assert!(queue.is_empty());
    assert_eq!(queue.pop(), None);
    assert_eq!(queue.peek(), None);

    queue.add(1);
    queue.add(2);
    queue.add(3);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.peek(), Some(&1), "The oldest item should be next out.");
    assert_eq!(queue.len(), 3, "Peeking should not remove the item.");

    assert_eq!(queue.pop(), Some(1));
    queue.add(4);
    assert_eq!(queue.pop(), Some(2));
    assert_eq!(queue.pop(), Some(3));
    assert_eq!(queue.pop(), Some(4));
    assert_eq!(queue.pop(), None);
}

#[test]
fn test_remove() {
    let mut queue: LinkedQueue<u32> = [1, 2, 3, 2].into_iter().collect();

    assert_eq!(queue.remove(&2), Ok(2));
    assert_eq!(
        queue.iter().copied().collect::<Vec<_>>(),
        [1, 3, 2],
        "Only the first matching item should be removed."
    );
    assert_eq!(queue.remove(&7), Err(NotFound));
    assert_eq!(queue.len(), 3, "A failed removal should change nothing.");

    assert_eq!(queue.pop(), Some(1), "The queue order should survive a removal.");
}

#[test]
fn test_iteration() {
    let queue: LinkedQueue<u32> = (1..=3).collect();

    assert_eq!(
        queue.iter().copied().collect::<Vec<_>>(),
        [1, 2, 3],
        "Iteration should be front-first."
    );
    assert_eq!(queue.into_iter().collect::<Vec<_>>(), [1, 2, 3]);
}

#[test]
fn test_collection() {
    let queue: LinkedQueue<u32> = [1, 2, 2, 3].into_iter().collect();

    assert_eq!(Collection::len(&queue), 4);
    assert!(queue.contains(&3));
    assert!(!queue.contains(&4));
    assert_eq!(queue.count(&2), 2);
}

#[test]
fn test_clear_equality_format() {
    let mut queue: LinkedQueue<u32> = (1..=3).collect();
    assert_eq!(queue, queue.clone());
    assert_ne!(queue, (2..=4).collect());
    assert_eq!(format!("{queue}"), "(1) -> (2) -> (3)");

    queue.clear();
    assert!(queue.is_empty());
    queue.add(1);
    assert_eq!(queue.len(), 1, "A cleared queue should be usable again.");
}
