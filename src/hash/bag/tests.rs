#![cfg(test)]

use super::*;
use crate::hash::DEFAULT_CAPACITY;
use crate::traits::Collection;
use crate::util::error::NotFound;
use crate::util::hash::BadHasherBuilder;

/// A bag whose bucket for a u64 key is just `key % cap`.
fn scripted(cap: usize) -> HashBag<u64, BadHasherBuilder> {
    HashBag::with_cap_and_hasher(cap, BadHasherBuilder)
}

#[test]
fn test_add_and_count() {
    let mut bag = HashBag::new();
    bag.add("ant");
    bag.add("bee");
    bag.add("ant");

    assert_eq!(bag.len(), 3);
    assert_eq!(bag.count(&"ant"), 2);
    assert_eq!(bag.count(&"bee"), 1);
    assert_eq!(bag.count(&"cow"), 0);
    assert!(bag.contains(&"ant"));
    assert!(!bag.contains(&"cow"));
    assert!(!bag.is_empty());
}

#[test]
fn test_remove_one_occurrence() {
    let mut bag: HashBag<u32> = [7, 7, 7].into_iter().collect();

    assert_eq!(bag.remove(&7), Ok(7));
    assert_eq!(bag.count(&7), 2, "Removal should take a single occurrence.");
    assert_eq!(bag.remove(&8), Err(NotFound));
    assert_eq!(bag.len(), 2, "A failed removal should not change the length.");
}

#[test]
fn test_borrowed_queries() {
    let mut bag: HashBag<String> = ["ant", "bee"].into_iter().map(String::from).collect();

    assert!(bag.contains("ant"));
    assert_eq!(bag.count("bee"), 1);
    assert_eq!(bag.remove("ant"), Ok("ant".to_string()));
    assert_eq!(bag.remove("cow"), Err(NotFound));
}

#[test]
fn test_default_shape() {
    let bag: HashBag<u32> = HashBag::new();
    assert_eq!(bag.cap(), DEFAULT_CAPACITY);
    assert_eq!(bag.len(), 0);

    assert_eq!(HashBag::<u32>::with_cap(0).cap(), 1, "Zero clamps to a single bucket.");
}

#[test]
fn test_growth_threshold() {
    let mut bag = scripted(5);
    for item in 0..4 {
        bag.add(item);
    }
    assert_eq!(bag.cap(), 5, "Four fifths occupancy sits exactly on the threshold.");
    assert!(bag.load_factor() <= 0.8);

    bag.add(4);
    assert_eq!(bag.cap(), 10, "Tipping past the threshold should double the buckets.");
    assert!(bag.load_factor() <= 0.8);
    assert!((0..5).all(|item| bag.contains(&item)), "Growth should keep every item.");
}

#[test]
fn test_bucket_order_iteration() {
    let mut bag = scripted(4);
    bag.add(1);
    bag.add(5);
    bag.add(2);

    assert_eq!(
        bag.iter().collect::<Vec<_>>(),
        [&5, &1, &2],
        "Iteration should walk buckets in slot order, chains most recent first."
    );
    assert_eq!(bag.iter().len(), 3);

    assert_eq!(bag.into_iter().collect::<Vec<_>>(), [5, 1, 2]);
}

#[test]
fn test_clear() {
    let mut bag = scripted(4);
    for item in [1, 5, 9] {
        bag.add(item);
    }
    let cap = bag.cap();

    bag.clear();
    assert!(bag.is_empty());
    assert_eq!(bag.cap(), cap, "Clearing should keep the buckets.");
    assert_eq!(bag.count(&1), 0);

    bag.add(1);
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_multiset_equality() {
    let bag: HashBag<u32> = [1, 2, 2].into_iter().collect();
    let reordered: HashBag<u32> = [2, 1, 2].into_iter().collect();
    let fewer: HashBag<u32> = [1, 2].into_iter().collect();
    let rebalanced: HashBag<u32> = [1, 1, 2].into_iter().collect();

    assert_eq!(bag, reordered, "Insertion order should not affect equality.");
    assert_ne!(bag, fewer);
    assert_ne!(bag, rebalanced, "Multiplicities should affect equality.");
}

#[test]
fn test_equality_across_capacities() {
    let small: HashBag<u64, _> = {
        let mut bag = scripted(2);
        bag.extend([1, 2, 3]);
        bag
    };
    let large: HashBag<u64, _> = {
        let mut bag = scripted(64);
        bag.extend([3, 2, 1]);
        bag
    };

    assert_eq!(small, large, "Bucket counts should not affect equality.");
}

#[test]
fn test_clone_is_independent() {
    let bag: HashBag<u32> = [1, 2].into_iter().collect();
    let mut copy = bag.clone();
    copy.add(3);

    assert_eq!(bag.len(), 2);
    assert_eq!(copy.len(), 3);
    assert!(!bag.contains(&3));
}

#[test]
fn test_collection() {
    let bag: HashBag<u32> = [4, 2, 4].into_iter().collect();

    assert_eq!(Collection::len(&bag), 3);
    assert!(Collection::contains(&bag, &2));
    assert!(!Collection::contains(&bag, &5));
    assert_eq!(Collection::iter(&bag).count(), 3);
}

#[test]
fn test_format() {
    let mut bag = scripted(4);
    bag.add(1);
    bag.add(5);

    assert_eq!(format!("{bag}"), "#{5, 1}");
    assert_eq!(
        format!("{bag:?}"),
        "HashBag { buckets: [-, (5: ()) -> (1: ()), -, -] }"
    );
}
