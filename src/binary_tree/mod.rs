//! Ordered collections built over a linked binary search tree.
//!
//! [`BinarySearchTree`] is the load-bearing structure: an unbalanced tree of owned nodes with
//! the four classic traversals, explicit [`rebalance`](BinarySearchTree::rebalance) and a
//! heuristic balance check. [`TreeSortedBag`], [`TreeSortedSet`] and [`TreeSortedDict`] layer
//! multiset, uniqueness and key-value policies over it without the tree knowing which policy is
//! in play.

#![warn(missing_docs)]

mod sorted_bag;
mod sorted_dict;
mod sorted_set;
mod tests;

pub mod search_tree;

#[doc(inline)]
pub use search_tree::BinarySearchTree;
pub use sorted_bag::*;
pub use sorted_dict::*;
pub use sorted_set::*;
