//! Priority containers. [`ArrayHeap`] is a binary min-heap laid out implicitly in contiguous
//! storage, so the smallest item is always one comparison away.
#![warn(missing_docs)]

mod array_heap;
mod tests;

pub use array_heap::*;
