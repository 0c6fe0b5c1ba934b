//! Hashed containers: a [`HashBag`], [`HashSet`] and [`HashDict`] sharing one chained table.
//!
//! Every container in this family stores its items in an [`Array`](crate::contiguous::Array) of
//! singly linked bucket chains, growing by doubling whenever occupancy passes the container's
//! load factor. Bags tolerate four items per five buckets; keyed containers grow at half
//! occupancy. Iteration follows bucket order, which is an artifact of the hasher and never
//! guaranteed.

#![warn(missing_docs)]

pub mod bag;
pub mod dict;
pub mod set;

pub(crate) mod table;

#[doc(inline)]
pub use bag::HashBag;
#[doc(inline)]
pub use dict::HashDict;
#[doc(inline)]
pub use set::HashSet;

/// The number of buckets a hashed container starts with unless told otherwise. Prime, so that
/// patterned hashes still spread across the buckets.
pub const DEFAULT_CAPACITY: usize = 29;
