use super::Vector;
use crate::contiguous::Array;

#[doc(inline)]
pub use crate::contiguous::array::IntoIter;

impl<T> IntoIterator for Vector<T> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        // Shed the spare capacity so that the iterator only has initialized values to manage.
        Array::from(self).into_iter()
    }
}
