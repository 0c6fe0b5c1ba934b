//! Last-in first-out containers: [`ArrayStack`] over contiguous storage and [`LinkedStack`] over
//! linked nodes.
//!
//! Both types share the same protocol and iteration order (top of the stack first), so the choice
//! between them is purely about storage behavior. [`ArrayStack`] keeps its items in one
//! allocation and is almost always the better pick; [`LinkedStack`] never moves an item once
//! pushed.
#![warn(missing_docs)]

mod array_stack;
mod linked_stack;
mod tests;

pub use array_stack::*;
pub use linked_stack::*;
