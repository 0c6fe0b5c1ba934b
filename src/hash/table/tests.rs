#![cfg(test)]

use super::*;
use crate::util::alloc::CountedDrop;
use crate::util::hash::{BadHasherBuilder, ManualHash};

// BadHasherBuilder hashes a u64 key to itself, so a key's bucket is just `key % cap` and every
// layout in here is scriptable.

fn scripted<V>(cap: usize, load_factor: LoadFactor) -> ChainTable<u64, V, BadHasherBuilder> {
    ChainTable::with_cap_and_hasher(cap, BadHasherBuilder, load_factor)
}

fn keys_in_bucket_order(table: &ChainTable<u64, (), BadHasherBuilder>) -> Vec<u64> {
    table.iter().map(|(key, _)| *key).collect()
}

#[test]
fn test_prepend_and_find() {
    let mut table = scripted(8, LoadFactor::KEYED);
    table.prepend(1, "one");
    table.prepend(2, "two");

    assert_eq!(table.len(), 2);
    assert_eq!(table.find(&1), Some(&(1, "one")));
    assert_eq!(table.find(&2), Some(&(2, "two")));
    assert_eq!(table.find(&3), None);
    assert_eq!(table.count_matches(&1), 1);
    assert_eq!(table.count_matches(&3), 0);
}

#[test]
fn test_chain_prepends_most_recent_first() {
    let mut table: ChainTable<ManualHash<&str>, (), BadHasherBuilder> =
        ChainTable::with_cap_and_hasher(8, BadHasherBuilder, LoadFactor::BAG);
    table.prepend(ManualHash::new(3, "a"), ());
    table.prepend(ManualHash::new(3, "b"), ());
    table.prepend(ManualHash::new(3, "c"), ());

    let keys: Vec<_> = table.iter().map(|(key, _)| key).collect();
    assert_eq!(
        keys,
        [
            &ManualHash::new(3, "c"),
            &ManualHash::new(3, "b"),
            &ManualHash::new(3, "a"),
        ],
        "A bucket's chain should lead with its most recent addition."
    );
}

#[test]
fn test_duplicate_keys_stack() {
    let mut table = scripted(8, LoadFactor::BAG);
    table.prepend(5, "first");
    table.prepend(5, "second");

    assert_eq!(table.count_matches(&5), 2);
    assert_eq!(
        table.find(&5),
        Some(&(5, "second")),
        "A lookup should land on the most recent duplicate."
    );

    assert_eq!(table.remove(&5), Some((5, "second")));
    assert_eq!(table.find(&5), Some(&(5, "first")));
    assert_eq!(table.len(), 1);
}

#[test]
fn test_remove_at_every_chain_position() {
    // All three keys collide in bucket 1 at this capacity.
    let mut table = scripted(8, LoadFactor::BAG);
    table.prepend(1, ());
    table.prepend(9, ());
    table.prepend(17, ());

    assert_eq!(table.remove(&9), Some((9, ())), "A mid-chain node should splice out.");
    assert_eq!(table.len(), 2);
    assert_eq!(table.remove(&17), Some((17, ())), "The chain head should splice out.");
    assert_eq!(table.remove(&1), Some((1, ())), "The chain tail should splice out.");
    assert_eq!(table.len(), 0);

    assert_eq!(table.remove(&1), None);
    assert_eq!(table.len(), 0, "A failed removal should not change the length.");
}

#[test]
fn test_keyed_growth_threshold() {
    let mut table = scripted(4, LoadFactor::KEYED);
    table.prepend(0, ());
    table.prepend(1, ());
    assert_eq!(table.cap(), 4, "Half occupancy sits exactly on the threshold.");

    table.prepend(2, ());
    assert_eq!(table.cap(), 8, "Tipping past half occupancy should double the buckets.");
    assert_eq!(table.len(), 3);
}

#[test]
fn test_bag_growth_threshold() {
    let mut table = scripted(5, LoadFactor::BAG);
    for key in 0..4 {
        table.prepend(key, ());
    }
    assert_eq!(table.cap(), 5, "Four fifths occupancy sits exactly on the threshold.");

    table.prepend(4, ());
    assert_eq!(table.cap(), 10);
}

#[test]
fn test_growth_repeats_from_tiny_capacities() {
    // Zero clamps to a single bucket, which the load factor then doubles away from
    // immediately.
    let mut table = scripted(0, LoadFactor::KEYED);
    assert_eq!(table.cap(), 1);

    for key in 0..5 {
        table.prepend(key, ());
    }

    assert_eq!(table.cap(), 16);
    assert_eq!(table.len(), 5);
    assert!((0..5).all(|key| table.find(&key).is_some()));
}

#[test]
fn test_growth_relinks_colliding_keys() {
    let mut table = scripted(4, LoadFactor::KEYED);
    table.prepend(1, ());
    table.prepend(5, ());
    assert_eq!(
        keys_in_bucket_order(&table),
        [5, 1],
        "1 and 5 should share a bucket at four buckets."
    );

    table.prepend(2, ());
    assert_eq!(table.cap(), 8);
    assert_eq!(
        keys_in_bucket_order(&table),
        [1, 2, 5],
        "Doubling should relink each key to its own bucket."
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_load_factor_value() {
    let mut table = scripted(4, LoadFactor::BAG);
    assert_eq!(table.load_factor(), 0.0);

    for key in 0..3 {
        table.prepend(key, ());
    }
    assert_eq!(table.load_factor(), 0.75);
}

#[test]
fn test_find_value_mut() {
    let mut table = scripted(8, LoadFactor::KEYED);
    table.prepend(1, 10);
    table.prepend(2, 20);

    *table.find_value_mut(&1).unwrap() += 5;
    assert_eq!(table.find(&1), Some(&(1, 15)));
    assert_eq!(table.find_value_mut(&3), None);
}

#[test]
fn test_iter_mut() {
    let mut table = scripted(8, LoadFactor::KEYED);
    table.prepend(1, 10);
    table.prepend(2, 20);

    for entry in table.iter_mut() {
        entry.1 += 1;
    }

    assert_eq!(table.find(&1), Some(&(1, 11)));
    assert_eq!(table.find(&2), Some(&(2, 21)));
}

#[test]
fn test_iteration_counts() {
    let mut table = scripted(8, LoadFactor::KEYED);
    assert_eq!(table.iter().next(), None);

    table.prepend(1, ());
    table.prepend(9, ());
    table.prepend(4, ());

    assert_eq!(table.iter().len(), 3);
    let mut iter = table.iter();
    iter.next();
    assert_eq!(iter.len(), 2, "Iterator length should track consumption.");

    assert_eq!(table.into_iter().count(), 3);
}

#[test]
fn test_clear_keeps_capacity() {
    let counter = CountedDrop::new(0);
    let mut table = scripted(4, LoadFactor::KEYED);
    for key in 0..3 {
        table.prepend(key, counter.clone());
    }
    let grown_cap = table.cap();

    table.clear();
    assert_eq!(*counter.borrow(), 3, "Clearing should drop every held value.");
    assert_eq!(table.len(), 0);
    assert_eq!(table.cap(), grown_cap);
    assert_eq!(table.find(&0), None);

    table.prepend(7, counter.clone());
    assert_eq!(table.len(), 1, "A cleared table should accept new entries.");
}

#[test]
fn test_drop_releases_entries() {
    let counter = CountedDrop::new(0);
    {
        let mut table = scripted(8, LoadFactor::BAG);
        for key in 0..5 {
            table.prepend(key, counter.clone());
        }
    }
    assert_eq!(*counter.borrow(), 5, "Dropping the table should drop every held value.");
}

#[test]
fn test_into_iter_drops_unconsumed_entries() {
    let counter = CountedDrop::new(0);
    let mut table = scripted(8, LoadFactor::BAG);
    for key in 0..6 {
        table.prepend(key, counter.clone());
    }

    let mut iter = table.into_iter();
    iter.next();
    iter.next();
    drop(iter);

    assert_eq!(
        *counter.borrow(),
        6,
        "A part-consumed owned iterator should drop the remaining entries."
    );
}

#[test]
fn test_clone_is_independent() {
    let mut table = scripted(8, LoadFactor::KEYED);
    table.prepend(1, 10);
    table.prepend(9, 90);

    let mut copy = table.clone();
    copy.prepend(2, 20);
    *copy.find_value_mut(&1).unwrap() = 0;

    assert_eq!(table.len(), 2);
    assert_eq!(table.find(&1), Some(&(1, 10)));
    assert_eq!(table.find(&2), None);
    assert_eq!(copy.len(), 3);
}

#[test]
fn test_debug_render() {
    let mut table = scripted(4, LoadFactor::BAG);
    table.prepend(1, 'a');
    table.prepend(5, 'b');

    assert_eq!(
        format!("{table:?}"),
        "[-, (5: 'b') -> (1: 'a'), -, -]",
        "Buckets should render in slot order with chains front to back."
    );
}
