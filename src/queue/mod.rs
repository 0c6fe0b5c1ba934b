//! First-in first-out containers. [`LinkedQueue`] is the only implementation, since a doubly
//! linked list gives constant-time operations at both ends without the wasted slots a circular
//! buffer juggles.
#![warn(missing_docs)]

mod linked_queue;
mod tests;

pub use linked_queue::*;
