//! The bucket-and-chain engine shared by the hash containers. Nothing here is public: the
//! containers wrap [`ChainTable`] and re-export its iterators behind their own types.

mod chain_table;
mod iter;
mod tests;

pub(crate) use chain_table::*;
pub(crate) use iter::*;
