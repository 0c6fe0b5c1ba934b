//! A family of basic collections built from scratch: contiguous primitives, linked lists,
//! stacks, queues, a heap, a binary search tree, chained hash tables and a directed graph, tied
//! together by one small protocol.
//!
//! # Purpose
//! This crate is a project that I'm working on as a learning experience, with no expectation
//! that it sees production use. Writing these data structures myself helps me to understand and
//! appreciate them properly: not just what a search tree or a hash table does, but every edge
//! case its operations have to survive, and what each one actually costs.
//!
//! # Method
//! Each structure is written from my own understanding rather than ported from anywhere,
//! although I'm not restricting myself from looking things up or referring to existing crates,
//! especially their APIs. [`std`] is the obvious inspiration for naming and idiom, but nothing
//! here is built on its containers: [`Vector`](contiguous::Vector) manages its own allocation,
//! everything else sits on [`Vector`], [`Array`](contiguous::Array) or its own nodes, and
//! [`Vec`] appears nowhere outside of tests.
//!
//! The higher-level containers deliberately share engines. The tree-backed bag, set and
//! dictionary are thin adapters over one [`BinarySearchTree`](binary_tree::BinarySearchTree);
//! [`HashBag`](hash::HashBag), [`HashSet`](hash::HashSet) and [`HashDict`](hash::HashDict) are
//! thin adapters over one chained table; [`DirectedGraph`](graph::DirectedGraph) then consumes
//! the dictionary, the stacks, the queue and the heap. If the engines are right, the whole
//! family is right, which keeps the interesting invariants in two places instead of eight.
//!
//! # Error Handling
//! Fallibility here is strongly typed and static: small structs (often ZSTs) implementing
//! [`Error`](std::error::Error), composed into enums where an operation has more than one
//! failure mode. Operations whose failure is ordinary, like removing an absent item or popping
//! a missing key, return [`Result`]s. Operations whose failure is a caller bug, like indexing
//! out of bounds, panic by throwing the same typed error, because nobody wants to handle a
//! [`Result`] on every subscript.
//!
//! # Dependencies
//! Only [`std`], plus some derive macros (`derive_more`) that remove the need for some very
//! repetitive error plumbing. The randomised tests lean on `proptest` and `rand`; nothing
//! outside of tests does.

// TODO: document the linked and trait modules, then turn this on crate-wide.
// #![warn(missing_docs)]
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod binary_tree;
pub mod contiguous;
pub mod graph;
pub mod hash;
pub mod heap;
pub mod linked;
pub mod queue;
pub mod stack;
pub mod traits;

pub(crate) mod util;

pub use util::error;

#[cfg(test)]
mod proptests;
