use std::iter::{Chain, FusedIterator};
use std::marker::PhantomData;

use crate::traits::Collection;

/// A [`Collection`] whose items are unique, extended with lazy set algebra.
///
/// The algebra adaptors never allocate: they filter one set's iterator through membership tests
/// against the other.
pub trait Set<T>: Collection<T> {
    /// Creates an owned iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn into_difference(self, other: Self) -> IntoDifference<Self, T> {
        IntoDifference {
            inner: self.into_iter(),
            other,
            _phantom: PhantomData,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`. (`self \
    /// other`)
    fn difference<'a>(&'a self, other: &'a Self) -> Difference<'a, Self, T> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    fn symmetric_difference<'a>(&'a self, other: &'a Self) -> SymmetricDifference<'a, Self, T> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates an owned iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    fn into_intersection(self, other: Self) -> IntoIntersection<Self, T> {
        IntoIntersection {
            inner: self.into_iter(),
            other,
            _phantom: PhantomData,
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`. (`self ∩
    /// other`)
    fn intersection<'a>(&'a self, other: &'a Self) -> Intersection<'a, Self, T> {
        Intersection {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`. (`self ∪
    /// other`)
    fn union<'a>(&'a self, other: &'a Self) -> Union<'a, Self, T> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains all elements of `self`. (`self ⊆ other`)
    fn is_subset(&self, other: &Self) -> bool {
        other.is_superset(self)
    }

    /// Returns true if `self` contains all elements of `other`. (`self ⊇ other`)
    fn is_superset(&self, other: &Self) -> bool {
        for item in other.iter() {
            if !self.contains(item) {
                return false;
            }
        }
        true
    }
}

pub struct IntoDifference<S: Set<T>, T> {
    pub(crate) inner: S::IntoIter,
    pub(crate) other: S,
    // We need the type parameter T for Set, despite not directly owning any T.
    pub(crate) _phantom: PhantomData<T>,
}

impl<S: Set<T>, T> Iterator for IntoDifference<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoDifference<S, T> {}

pub struct Difference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Difference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Difference<'a, S, T> {}

pub struct SymmetricDifference<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<Difference<'a, S, T>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for SymmetricDifference<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for SymmetricDifference<'a, S, T> {}

pub struct IntoIntersection<S: Set<T>, T> {
    pub(crate) inner: S::IntoIter,
    pub(crate) other: S,
    // We need the type parameter T for Set, despite not directly owning any T.
    pub(crate) _phantom: PhantomData<T>,
}

impl<S: Set<T>, T> Iterator for IntoIntersection<S, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<S: Set<T>, T> FusedIterator for IntoIntersection<S, T> {}

pub struct Intersection<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: S::Iter<'a>,
    pub(crate) other: &'a S,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Intersection<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = &next
            && !self.other.contains(item)
        {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Intersection<'a, S, T> {}

pub struct Union<'a, S: Set<T>, T: 'a> {
    pub(crate) inner: Chain<S::Iter<'a>, Difference<'a, S, T>>,
}

impl<'a, S: Set<T>, T: 'a> Iterator for Union<'a, S, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, S: Set<T>, T: 'a> FusedIterator for Union<'a, S, T> {}
