//! Behaviour shared across the collection family: the [`Collection`] protocol implemented by
//! every container and the [`Set`] algebra implemented by the uniqueness-enforcing ones.

pub mod collection;
pub mod set;

#[doc(inline)]
pub use collection::Collection;
#[doc(inline)]
pub use set::Set;
