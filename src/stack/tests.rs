#![cfg(test)]

use super::*;
use crate::traits::Collection;
use crate::util::alloc::CountedDrop;

#[test]
fn test_array_stack() {
    let mut stack = ArrayStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);

    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3));
    assert_eq!(stack.len(), 3, "Peeking should not remove the item.");

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_linked_stack() {
    let mut stack = LinkedStack::new();
    assert!(stack.is_empty());
    assert_eq!(stack.pop(), None);
    assert_eq!(stack.peek(), None);

    stack.push(1);
    stack.push(2);
    stack.push(3);
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.peek(), Some(&3));

    assert_eq!(stack.pop(), Some(3));
    assert_eq!(stack.pop(), Some(2));
    assert_eq!(stack.pop(), Some(1));
    assert_eq!(stack.pop(), None);
}

#[test]
fn test_iteration_order() {
    let array_stack: ArrayStack<u32> = (1..=3).collect();
    let linked_stack: LinkedStack<u32> = (1..=3).collect();

    assert_eq!(
        array_stack.iter().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "Iteration should be top-first."
    );
    assert_eq!(
        linked_stack.iter().copied().collect::<Vec<_>>(),
        [3, 2, 1],
        "Both stacks should iterate in the same order."
    );
    assert_eq!(
        array_stack.into_iter().collect::<Vec<_>>(),
        linked_stack.into_iter().collect::<Vec<_>>()
    );
}

#[test]
fn test_clear_and_reuse() {
    let counter = CountedDrop::new(0);
    let mut stack = ArrayStack::new();
    for _ in 0..5 {
        stack.push(counter.clone());
    }

    stack.clear();
    assert_eq!(counter.take(), 5, "Clearing should drop every item.");
    assert!(stack.is_empty());

    stack.push(counter.clone());
    assert_eq!(stack.len(), 1, "A cleared stack should be usable again.");
}

#[test]
fn test_collection() {
    let stack: ArrayStack<u32> = [1, 2, 2, 3].into_iter().collect();
    assert_eq!(Collection::len(&stack), 4);
    assert!(stack.contains(&3));
    assert!(!stack.contains(&4));
    assert_eq!(stack.count(&2), 2);

    let stack: LinkedStack<u32> = [1, 2, 2, 3].into_iter().collect();
    assert_eq!(Collection::len(&stack), 4);
    assert!(stack.contains(&3));
    assert!(!stack.contains(&4));
    assert_eq!(stack.count(&2), 2);
}

#[test]
fn test_equality_and_clone() {
    let stack: ArrayStack<u32> = (1..=3).collect();
    assert_eq!(stack, stack.clone());
    assert_ne!(stack, (1..=2).collect());

    let stack: LinkedStack<u32> = (1..=3).collect();
    assert_eq!(stack, stack.clone());
    assert_ne!(stack, (2..=4).collect());
}

#[test]
fn test_format() {
    let stack: ArrayStack<u32> = (1..=3).collect();
    assert_eq!(format!("{stack}"), "[3, 2, 1]", "Display renders in pop order.");

    let stack: LinkedStack<u32> = (1..=3).collect();
    assert_eq!(format!("{stack}"), "[3, 2, 1]");
}
