//! A module containing [`HashSet`] and its iterators.
//!
//! There is no mutable iterator over the items of a set because mutating an item in place could
//! change its hash and strand it in the wrong bucket.
//!
//! [`HashSet`] is also re-exported under the parent module.

mod hash_set;
mod iter;
mod tests;

pub use hash_set::*;
pub use iter::*;
