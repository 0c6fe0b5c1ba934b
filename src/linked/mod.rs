//! Linked collection types: [`LinkedList`] and its accompanying [`Cursor`] for positional
//! iteration and mutation.

pub mod list;

#[doc(inline)]
pub use list::{Cursor, LinkedList};
