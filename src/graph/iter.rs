use std::iter::FusedIterator;
use std::slice;

use crate::graph::directed_graph::{Edge, Vertex};
use crate::hash::dict;

/// A borrowing iterator over a [`DirectedGraph`](crate::graph::DirectedGraph)'s vertex labels,
/// in bucket order.
pub struct Labels<'a, L, W>(pub(crate) dict::Keys<'a, L, Vertex<L, W>>);

impl<'a, L, W> Iterator for Labels<'a, L, W> {
    type Item = &'a L;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<L, W> ExactSizeIterator for Labels<'_, L, W> {}

impl<L, W> FusedIterator for Labels<'_, L, W> {}

/// A borrowing iterator over one vertex's out-edges, as label and weight pairs in the order the
/// edges were added.
pub struct Neighbors<'a, L, W>(pub(crate) slice::Iter<'a, Edge<L, W>>);

impl<'a, L, W> Iterator for Neighbors<'a, L, W> {
    type Item = (&'a L, &'a W);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|edge| (&edge.to, &edge.weight))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<L, W> ExactSizeIterator for Neighbors<'_, L, W> {}

impl<L, W> FusedIterator for Neighbors<'_, L, W> {}
