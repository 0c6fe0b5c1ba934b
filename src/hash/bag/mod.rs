mod hash_bag;
mod iter;
mod tests;

pub use hash_bag::*;
pub use iter::*;
