//! The search tree itself and its traversal iterators. [`BinarySearchTree`] is also re-exported
//! from the parent module, which is the usual import path.

mod binary_search_tree;
mod iter;
mod node;

pub use binary_search_tree::*;
pub use iter::*;
pub(crate) use node::*;
