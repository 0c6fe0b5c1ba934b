//! Contiguous collection types: [`Array`] for runtime-sized fixed allocations and [`Vector`] for
//! allocations that grow and shrink as items come and go.
#![warn(missing_docs)]

pub mod array;
pub mod vector;

#[doc(inline)]
pub use array::Array;
#[doc(inline)]
pub use vector::Vector;
