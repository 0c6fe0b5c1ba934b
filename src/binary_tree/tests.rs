#![cfg(test)]

use super::*;
use crate::traits::{Collection, Set};
use crate::util::error::NotFound;
use crate::util::panic::assert_panics;

#[test]
fn test_bag_accumulates_duplicates() {
    let mut bag = TreeSortedBag::new();
    for value in [3, 1, 3, 2, 3] {
        bag.add(value);
    }

    assert_eq!(bag.len(), 5);
    assert_eq!(bag.count(&3), 3);
    assert_eq!(bag.count(&4), 0);
    assert_eq!(bag.iter().collect::<Vec<_>>(), [&1, &2, &3, &3, &3]);

    assert_eq!(bag.remove(&3), Ok(3));
    assert_eq!(bag.count(&3), 2, "Removal should take a single occurrence.");
    assert_eq!(bag.remove(&4), Err(NotFound));
    assert_eq!(bag.len(), 4);
}

#[test]
fn test_bag_ends() {
    let mut bag: TreeSortedBag<u32> = [5, 1, 9, 1].into_iter().collect();

    assert_eq!(bag.first(), Some(&1));
    assert_eq!(bag.last(), Some(&9));
    assert_eq!(bag.take_first(), Some(1));
    assert_eq!(bag.take_first(), Some(1), "Duplicates should drain one at a time.");
    assert_eq!(bag.take_last(), Some(9));
    assert_eq!(bag.len(), 1);
}

#[test]
fn test_bag_rebalance() {
    let mut bag: TreeSortedBag<u32> = (1..=31).collect();

    assert!(!bag.is_balanced(), "Sorted insertion should degrade the bag's tree.");
    bag.rebalance();
    assert!(bag.is_balanced());
    assert_eq!(bag.height(), Some(4));
    assert!(bag.iter().is_sorted(), "Rebalancing should preserve the sorted order.");
}

#[test]
fn test_bag_equality_and_clone() {
    let bag: TreeSortedBag<u32> = [2, 1, 2].into_iter().collect();
    let reordered: TreeSortedBag<u32> = [1, 2, 2].into_iter().collect();
    let fewer: TreeSortedBag<u32> = [1, 2].into_iter().collect();

    assert_eq!(bag, reordered, "Insertion order should not affect equality.");
    assert_ne!(bag, fewer, "Multiplicities should affect equality.");

    let mut copy = bag.clone();
    copy.clear();
    assert!(copy.is_empty());
    assert_eq!(bag.len(), 3);
}

#[test]
fn test_bag_collection_and_format() {
    let bag: TreeSortedBag<u32> = [2, 1, 2].into_iter().collect();

    assert_eq!(Collection::len(&bag), 3);
    assert!(Collection::contains(&bag, &2));
    assert_eq!(format!("{bag}"), "[1, 2, 2]");
    assert_eq!(bag.into_iter().collect::<Vec<_>>(), [1, 2, 2]);
}

#[test]
fn test_set_refuses_duplicates() {
    let mut set = TreeSortedSet::new();

    assert!(set.add(2));
    assert!(set.add(1));
    assert!(!set.add(2), "A held item should be refused.");
    assert_eq!(set.len(), 2);
    assert_eq!(set.iter().collect::<Vec<_>>(), [&1, &2]);

    assert_eq!(set.remove(&2), Ok(2));
    assert!(set.add(2), "A removed item should be accepted again.");
    assert_eq!(set.remove(&7), Err(NotFound));
}

#[test]
fn test_set_find() {
    let set: TreeSortedSet<String> = ["ant", "bee"].into_iter().map(String::from).collect();

    assert!(set.contains("bee"));
    assert_eq!(set.find("ant"), Some(&"ant".to_string()));
    assert_eq!(set.find("cow"), None);
}

#[test]
fn test_set_algebra() {
    let left: TreeSortedSet<u32> = [1, 2, 3, 4].into_iter().collect();
    let right: TreeSortedSet<u32> = [3, 4, 5].into_iter().collect();

    assert_eq!(left.difference(&right).collect::<Vec<_>>(), [&1, &2]);
    assert_eq!(left.intersection(&right).collect::<Vec<_>>(), [&3, &4]);
    assert_eq!(
        left.union(&right).collect::<Vec<_>>(),
        [&1, &2, &3, &4, &5],
        "A union should produce each item exactly once."
    );
    assert_eq!(
        left.symmetric_difference(&right).collect::<Vec<_>>(),
        [&1, &2, &5]
    );

    let subset: TreeSortedSet<u32> = [2, 3].into_iter().collect();
    assert!(subset.is_subset(&left));
    assert!(left.is_superset(&subset));
    assert!(!subset.is_superset(&left));

    assert_eq!(
        left.into_intersection(right).collect::<Vec<_>>(),
        [3, 4],
        "The owned intersection should produce items by value."
    );
}

#[test]
fn test_set_rebalance_keeps_membership() {
    let mut set: TreeSortedSet<u32> = (0..50).collect();
    set.rebalance();

    assert!(set.is_balanced());
    assert_eq!(set.len(), 50);
    assert!((0..50).all(|value| set.contains(&value)));
}

#[test]
fn test_dict_insert_and_get() {
    let mut dict = TreeSortedDict::new();

    assert_eq!(dict.insert("b", 2), None);
    assert_eq!(dict.insert("a", 1), None);
    assert_eq!(dict.insert("c", 3), None);
    assert_eq!(dict.len(), 3);

    assert_eq!(dict.get(&"a"), Some(&1));
    assert_eq!(dict.get(&"d"), None);
    assert_eq!(dict.get_entry(&"c"), Some((&"c", &3)));
    assert!(dict.contains_key(&"b"));

    assert_eq!(
        dict.insert("b", 20),
        Some(2),
        "Overwriting should return the previous value."
    );
    assert_eq!(dict.len(), 3, "Overwriting should not grow the dictionary.");
    assert_eq!(dict.get(&"b"), Some(&20));
}

#[test]
fn test_dict_get_mut() {
    let mut dict: TreeSortedDict<&str, u32> = [("a", 1), ("b", 2)].into_iter().collect();

    *dict.get_mut(&"a").unwrap() += 10;
    assert_eq!(dict.get(&"a"), Some(&11));
    assert_eq!(dict.get_mut(&"c"), None);
}

#[test]
fn test_dict_pop() {
    let mut dict: TreeSortedDict<&str, u32> = [("a", 1), ("b", 2)].into_iter().collect();

    assert_eq!(dict.pop(&"a"), Ok(1));
    assert_eq!(dict.pop(&"a"), Err(NotFound));
    assert_eq!(dict.pop_entry(&"b"), Ok(("b", 2)));
    assert!(dict.is_empty());
}

#[test]
fn test_dict_sorted_iteration() {
    let dict: TreeSortedDict<u32, &str> = [(3, "c"), (1, "a"), (2, "b")].into_iter().collect();

    assert_eq!(dict.keys().collect::<Vec<_>>(), [&1, &2, &3]);
    assert_eq!(dict.values().collect::<Vec<_>>(), [&"a", &"b", &"c"]);
    assert_eq!(
        dict.iter().map(|entry| (*entry.key(), *entry.value())).collect::<Vec<_>>(),
        [(1, "a"), (2, "b"), (3, "c")]
    );
    assert_eq!(dict.first(), Some((&1, &"a")));
    assert_eq!(dict.last(), Some((&3, &"c")));

    assert_eq!(
        dict.into_iter().map(Entry::into_pair).collect::<Vec<_>>(),
        [(1, "a"), (2, "b"), (3, "c")],
        "Owned iteration should drain in ascending key order."
    );
}

#[test]
fn test_dict_index() {
    let dict: TreeSortedDict<&str, u32> = [("a", 1)].into_iter().collect();

    assert_eq!(dict["a"], 1);
    assert_panics!({
        let _ = dict["b"];
    });
}

#[test]
fn test_dict_equality_checks_values() {
    let dict: TreeSortedDict<&str, u32> = [("a", 1), ("b", 2)].into_iter().collect();
    let same: TreeSortedDict<&str, u32> = [("b", 2), ("a", 1)].into_iter().collect();
    let different: TreeSortedDict<&str, u32> = [("a", 1), ("b", 3)].into_iter().collect();

    assert_eq!(dict, same);
    assert_ne!(
        dict, different,
        "Equal keys against different values should not compare equal."
    );
}

#[test]
fn test_dict_rebalance() {
    let mut dict: TreeSortedDict<u32, u32> = (0..31).map(|key| (key, key * 2)).collect();

    assert!(!dict.is_balanced());
    dict.rebalance();
    assert!(dict.is_balanced());
    assert_eq!(dict.height(), Some(4));
    assert_eq!(dict.get(&17), Some(&34), "Rebalancing should preserve every entry.");
}

#[test]
fn test_dict_format() {
    let dict: TreeSortedDict<&str, u32> = [("b", 2), ("a", 1)].into_iter().collect();
    assert_eq!(format!("{dict}"), "{\"a\": 1, \"b\": 2}");
}
