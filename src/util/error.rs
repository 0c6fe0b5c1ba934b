//! The error types produced by fallible collection operations.
//!
//! Every failure is detected before any mutation is applied, so an operation that returns an
//! error leaves its collection exactly as it found it. The types are zero-sized wherever the
//! failure needs no context, and implement [`Error`] for use with any reporting machinery.

use std::error::Error;
use std::fmt::{self, Display, Formatter};

use derive_more::{Display, Error, From, IsVariant};

/// The target of a removal or keyed lookup was absent from the collection.
///
/// Always detected before any mutation is applied, so a failed removal leaves
/// the collection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotFound;

impl Display for NotFound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Item not found in the collection!")
    }
}

impl Error for NotFound {}

/// An index-based operation was given a position outside `[0, len)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    pub index: usize,
    pub len: usize,
}

impl Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Index {} out of bounds for collection with {} elements!", self.index, self.len)
    }
}

impl Error for IndexOutOfBounds {}

/// The requested capacity overflowed the maximum allocation size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityOverflow;

impl Display for CapacityOverflow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Capacity overflow!")
    }
}

impl Error for CapacityOverflow {}

/// A cursor mutation was attempted before any call to `next` or `prev`
/// established a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UndefinedPosition;

impl Display for UndefinedPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "The cursor's position is undefined!")
    }
}

impl Error for UndefinedPosition {}

/// An edge already connects the given vertices in the given direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DuplicateEdge;

impl Display for DuplicateEdge {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "An edge already connects the given vertices!")
    }
}

impl Error for DuplicateEdge {}

/// Failure modes for inserting an edge into a graph: either endpoint may be
/// missing, or the edge may already exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From, IsVariant)]
pub enum EdgeError {
    /// One of the edge's endpoints is not a vertex of the graph.
    NotFound(NotFound),
    /// The graph already holds this edge.
    DuplicateEdge(DuplicateEdge),
}
