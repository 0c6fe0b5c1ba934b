//! Randomised equivalence tests pitting each container against a known-good model over long
//! operation sequences.

use proptest::prelude::*;
use std::collections::HashMap as StdHashMap;

use crate::binary_tree::BinarySearchTree;
use crate::hash::{HashBag, HashDict};
use crate::heap::ArrayHeap;

#[derive(Clone, Debug)]
enum TreeOp {
    Add(u16),
    Remove(u16),
    Contains(u16),
    Rebalance,
}

// Values are drawn from a narrow range so that sequences revisit them, exercising duplicates
// and removals of items that exist.
fn tree_ops() -> impl Strategy<Value = Vec<TreeOp>> {
    let value = 0u16..64;
    let op = prop_oneof![
        8 => value.clone().prop_map(TreeOp::Add),
        4 => value.clone().prop_map(TreeOp::Remove),
        3 => value.prop_map(TreeOp::Contains),
        1 => Just(TreeOp::Rebalance),
    ];
    prop::collection::vec(op, 0..=400)
}

#[derive(Clone, Debug)]
enum DictOp {
    Insert(u8, u32),
    Pop(u8),
    Get(u8),
}

fn dict_ops() -> impl Strategy<Value = Vec<DictOp>> {
    let op = prop_oneof![
        8 => (any::<u8>(), any::<u32>()).prop_map(|(key, value)| DictOp::Insert(key, value)),
        4 => any::<u8>().prop_map(DictOp::Pop),
        3 => any::<u8>().prop_map(DictOp::Get),
    ];
    prop::collection::vec(op, 0..=400)
}

#[derive(Clone, Debug)]
enum BagOp {
    Add(u8),
    Remove(u8),
    Count(u8),
}

fn bag_ops() -> impl Strategy<Value = Vec<BagOp>> {
    let item = 0u8..32;
    let op = prop_oneof![
        8 => item.clone().prop_map(BagOp::Add),
        5 => item.clone().prop_map(BagOp::Remove),
        3 => item.prop_map(BagOp::Count),
    ];
    prop::collection::vec(op, 0..=400)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    #[test]
    fn prop_tree_matches_sorted_model(ops in tree_ops()) {
        let mut tree = BinarySearchTree::new();
        let mut model: Vec<u16> = Vec::new();

        for op in ops {
            match op {
                TreeOp::Add(value) => {
                    let index = model.binary_search(&value).unwrap_or_else(|index| index);
                    model.insert(index, value);
                    tree.add(value);
                }
                TreeOp::Remove(value) => {
                    let found = model.binary_search(&value);
                    if let Ok(index) = found {
                        model.remove(index);
                    }
                    prop_assert_eq!(tree.remove(&value).is_ok(), found.is_ok());
                }
                TreeOp::Contains(value) => {
                    prop_assert_eq!(tree.contains(&value), model.binary_search(&value).is_ok());
                }
                TreeOp::Rebalance => {
                    tree.rebalance();
                }
            }
            prop_assert_eq!(tree.len(), model.len());
        }

        tree.verify_search_order();
        let inorder: Vec<u16> = tree.inorder().copied().collect();
        prop_assert_eq!(inorder, model);
    }

    #[test]
    fn prop_rebalance_holds_contents_at_minimal_height(
        values in prop::collection::vec(any::<u16>(), 0..=300)
    ) {
        let mut tree: BinarySearchTree<u16> = values.iter().copied().collect();
        tree.rebalance();
        tree.verify_search_order();

        prop_assert!(tree.is_balanced());
        if !values.is_empty() {
            let minimal = (values.len() as f64 + 1.0).log2().ceil() as usize - 1;
            prop_assert_eq!(tree.height(), Some(minimal));
        }

        let mut expected = values;
        expected.sort_unstable();
        let inorder: Vec<u16> = tree.inorder().copied().collect();
        prop_assert_eq!(inorder, expected);
    }

    #[test]
    fn prop_dict_matches_std_map(ops in dict_ops()) {
        let mut dict = HashDict::with_cap(1);
        let mut model: StdHashMap<u8, u32> = StdHashMap::new();

        for op in ops {
            match op {
                DictOp::Insert(key, value) => {
                    prop_assert_eq!(dict.insert(key, value), model.insert(key, value));
                }
                DictOp::Pop(key) => {
                    prop_assert_eq!(dict.pop(&key).ok(), model.remove(&key));
                }
                DictOp::Get(key) => {
                    prop_assert_eq!(dict.get(&key), model.get(&key));
                }
            }
            prop_assert_eq!(dict.len(), model.len());
            prop_assert!(
                dict.len() * 2 <= dict.cap(),
                "load factor {} settled above a half", dict.load_factor()
            );
        }

        for (key, value) in model.iter() {
            prop_assert_eq!(dict.get(key), Some(value));
        }
    }

    #[test]
    fn prop_bag_counts_match_model(ops in bag_ops()) {
        let mut bag = HashBag::with_cap(1);
        let mut model: StdHashMap<u8, usize> = StdHashMap::new();

        for op in ops {
            match op {
                BagOp::Add(item) => {
                    bag.add(item);
                    *model.entry(item).or_insert(0) += 1;
                }
                BagOp::Remove(item) => {
                    let held = model.get(&item).copied().unwrap_or(0) > 0;
                    prop_assert_eq!(bag.remove(&item).is_ok(), held);
                    if held {
                        let count = model.get_mut(&item).unwrap();
                        *count -= 1;
                        if *count == 0 {
                            model.remove(&item);
                        }
                    }
                }
                BagOp::Count(item) => {
                    prop_assert_eq!(bag.count(&item), model.get(&item).copied().unwrap_or(0));
                }
            }
            prop_assert_eq!(bag.len(), model.values().sum::<usize>());
            prop_assert!(
                bag.len() * 5 <= bag.cap() * 4,
                "load factor {} settled above four fifths", bag.load_factor()
            );
        }

        for (item, count) in model.iter() {
            prop_assert_eq!(bag.count(item), *count);
        }
    }

    #[test]
    fn prop_heap_drains_ascending(values in prop::collection::vec(any::<u32>(), 0..=300)) {
        let mut heap = ArrayHeap::new();
        for value in values.iter().copied() {
            heap.add(value);
        }
        prop_assert_eq!(heap.peek(), values.iter().min());

        let mut expected = values;
        expected.sort_unstable();
        let drained = heap.into_sorted_vector();
        prop_assert_eq!(&drained[..], &expected[..]);
    }
}
