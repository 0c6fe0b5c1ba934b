/// The protocol shared by every container in this crate: sizing, membership and borrowed
/// iteration, with owned iteration supplied by the [`IntoIterator`] supertrait.
///
/// `contains` is a required method rather than a provided scan so that each container can answer
/// it with its own mechanism (hash probe, ordered descent, or linear walk) under its own bounds.
pub trait Collection<T>: IntoIterator<Item = T> + Sized {
    type Iter<'a>: Iterator<Item = &'a T> where Self: 'a, T: 'a;

    /// Returns the number of items in the collection.
    fn len(&self) -> usize;

    /// Returns an iterator over all items in the collection, as references.
    fn iter<'a>(&'a self) -> Self::Iter<'a>;

    /// Returns true if the collection holds an item equal to `item`.
    fn contains(&self, item: &T) -> bool;

    /// Returns true if the collection holds no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of items equal to `item`.
    fn count(&self, item: &T) -> usize
    where
        T: PartialEq,
    {
        self.iter().filter(|other| *other == item).count()
    }
}
