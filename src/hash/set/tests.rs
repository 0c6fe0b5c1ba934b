#![cfg(test)]

use super::*;
use crate::contiguous::Vector;
use crate::traits::{Collection, Set};
use crate::util::error::NotFound;
use crate::util::hash::{BadHasherBuilder, ManualHash};

/// Hashes a u64 key to itself, so each key lands in bucket `key % cap`.
fn scripted(cap: usize) -> HashSet<u64, BadHasherBuilder> {
    HashSet::with_cap_and_hasher(cap, BadHasherBuilder)
}

#[test]
fn test_add_and_contains() {
    let mut set = HashSet::new();

    assert!(set.is_empty());
    assert!(set.add("ant"));
    assert!(set.add("bee"));
    assert!(
        !set.add("ant"),
        "Adding an item the set already holds should be refused."
    );

    assert_eq!(set.len(), 2);
    assert!(set.contains(&"ant"));
    assert!(!set.contains(&"cicada"));
    assert_eq!(set.find(&"bee"), Some(&"bee"));
    assert_eq!(set.find(&"cicada"), None);
}

#[test]
fn test_remove() {
    let mut set = HashSet::from_iter(["ant", "bee"]);

    assert_eq!(set.remove(&"ant"), Ok("ant"));
    assert_eq!(
        set.remove(&"ant"),
        Err(NotFound),
        "A removed item should not be removable again."
    );
    assert_eq!(set.len(), 1);
}

#[test]
fn test_borrowed_queries() {
    let mut set = HashSet::new();
    set.add(String::from("ant"));

    assert!(set.contains("ant"));
    assert_eq!(set.find("ant"), Some(&String::from("ant")));
    assert_eq!(set.remove("ant"), Ok(String::from("ant")));
}

#[test]
fn test_default_shape() {
    let set = HashSet::<u64>::new();
    assert_eq!(set.cap(), 29);
    assert_eq!(set.load_factor(), 0.0);

    assert_eq!(
        HashSet::<u64>::with_cap(0).cap(),
        1,
        "A set should always have at least one bucket."
    );
}

#[test]
fn test_growth_threshold() {
    let mut set = scripted(4);

    set.add(0);
    set.add(1);
    assert_eq!(set.cap(), 4, "Half occupancy should be tolerated.");

    set.add(2);
    assert_eq!(set.cap(), 8, "Exceeding half occupancy should double the buckets.");

    set.add(3);
    assert_eq!(set.cap(), 8);

    set.add(4);
    assert_eq!(set.cap(), 16);

    assert!(
        set.load_factor() <= 0.5,
        "The load factor should never settle above a half."
    );
}

#[test]
fn test_extend_refuses_duplicates() {
    let mut set = scripted(16);
    set.extend([1, 2, 2, 3, 1]);

    assert_eq!(set.len(), 3);
    assert_eq!(*set.iter().collect::<Vector<_>>(), [&1, &2, &3]);
}

#[test]
fn test_collision_chains() {
    let mut set = HashSet::with_cap_and_hasher(6, BadHasherBuilder);
    set.add(ManualHash::new(5, "zero"));
    set.add(ManualHash::new(5, "one"));
    set.add(ManualHash::new(1, "two"));

    assert_eq!(set.remove(&ManualHash::new(5, "zero")).map(ManualHash::value), Ok("zero"));

    assert_eq!(
        *set.into_iter().map(ManualHash::value).collect::<Vector<_>>(),
        ["two", "one"],
        "Removal from a chain should not lose the items collided with."
    );
}

#[test]
fn test_bucket_order_iteration() {
    let mut set = scripted(8);
    set.add(1);
    set.add(9);
    set.add(2);

    // 1 and 9 share bucket one and the later arrival heads the chain.
    assert_eq!(*set.iter().collect::<Vector<_>>(), [&9, &1, &2]);
    assert_eq!(*set.into_iter().collect::<Vector<_>>(), [9, 1, 2]);
}

#[test]
fn test_set_algebra() {
    let mut a = scripted(16);
    a.extend([1, 2, 3, 4]);
    let mut b = scripted(16);
    b.extend([3, 4, 5, 6]);

    assert_eq!(*a.difference(&b).collect::<Vector<_>>(), [&1, &2]);
    assert_eq!(
        *a.symmetric_difference(&b).collect::<Vector<_>>(),
        [&1, &2, &5, &6]
    );
    assert_eq!(*a.intersection(&b).collect::<Vector<_>>(), [&3, &4]);
    assert_eq!(
        *a.union(&b).collect::<Vector<_>>(),
        [&1, &2, &3, &4, &5, &6],
        "A union should produce each shared item only once."
    );

    let mut inner = scripted(16);
    inner.extend([3, 4]);
    assert!(inner.is_subset(&a));
    assert!(a.is_superset(&inner));
    assert!(!a.is_subset(&inner));

    assert_eq!(*a.into_intersection(b).collect::<Vector<_>>(), [3, 4]);
}

#[test]
fn test_equality_across_capacities() {
    let mut tiny = scripted(2);
    tiny.extend([1, 2, 3]);
    let mut wide = scripted(64);
    wide.extend([3, 1, 2]);

    assert_eq!(
        tiny, wide,
        "Sets holding the same items should be equal whatever their bucket layouts."
    );

    wide.add(4);
    assert_ne!(tiny, wide);
}

#[test]
fn test_clone_is_independent() {
    let mut set = scripted(8);
    set.extend([1, 2]);
    let clone = set.clone();

    set.remove(&1).unwrap();

    assert_eq!(set.len(), 1);
    assert_eq!(clone.len(), 2);
    assert!(clone.contains(&1));
}

#[test]
fn test_clear() {
    let mut set = scripted(4);
    set.extend([0, 1, 2]);
    set.clear();

    assert!(set.is_empty());
    assert_eq!(set.cap(), 8, "Clearing should keep the grown buckets.");
    assert!(!set.contains(&1));
}

#[test]
fn test_collection() {
    let mut set = scripted(16);
    set.extend([1, 2, 3]);

    assert_eq!(Collection::len(&set), 3);
    assert!(Collection::contains(&set, &2));
    assert_eq!(set.count(&2), 1);
    assert_eq!(set.iter().len(), 3);
}

#[test]
fn test_format() {
    let mut set = scripted(4);
    set.add(5);
    set.add(2);

    assert_eq!(format!("{set}"), "#{5, 2}");
    assert_eq!(
        format!("{set:?}"),
        "HashSet { buckets: [-, (5: ()), (2: ()), -] }"
    );

    assert_eq!(format!("{}", HashSet::<u64>::new()), "#{}");
}
