//! A module containing [`Vector`] and associated types.
//!
//! Owned iteration reuses [`IntoIter`](super::array::IntoIter) from the array module, after
//! shedding any spare capacity. [`Iter`](std::slice::Iter) and [`IterMut`](std::slice::IterMut)
//! from [`std::slice`] are used for borrowed iteration.
//!
//! [`Vector`] is also re-exported under the parent module.

mod iter;
mod tests;
mod vector;

pub use iter::*;
pub use vector::*;
