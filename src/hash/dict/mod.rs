//! A module containing [`HashDict`] and its iterators.
//!
//! Entries are iterated in bucket order, which follows the hasher rather than insertion. Mutable
//! iteration borrows keys shared and values mutable, as a key edited in place could no longer be
//! found in its bucket.
//!
//! [`HashDict`] is also re-exported under the parent module.

mod hash_dict;
mod iter;

pub use hash_dict::*;
pub use iter::*;
