//! A directed, weighted graph over the crate's own containers.
//!
//! [`DirectedGraph`] keeps its adjacency records in a [`HashDict`](crate::hash::HashDict) keyed
//! by vertex label, and its algorithms lean on the rest of the crate: depth-first search drives
//! a [`LinkedStack`](crate::stack::LinkedStack), breadth-first search and the topological sort
//! drive a [`LinkedQueue`](crate::queue::LinkedQueue), and the cheapest-route search drives an
//! [`ArrayHeap`](crate::heap::ArrayHeap).

mod directed_graph;
mod iter;

pub use directed_graph::*;
pub use iter::*;
