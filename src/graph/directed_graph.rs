use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;
use std::ops::{Add, Index};

use crate::contiguous::Vector;
use crate::graph::{Labels, Neighbors};
use crate::hash::{HashDict, HashSet};
use crate::heap::ArrayHeap;
use crate::queue::LinkedQueue;
use crate::stack::LinkedStack;
use crate::util::error::{DuplicateEdge, EdgeError, NotFound};

/// A vertex's adjacency record: the out-edges it owns, in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Vertex<L, W> {
    pub(crate) edges: Vector<Edge<L, W>>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Edge<L, W> {
    pub(crate) to: L,
    pub(crate) weight: W,
}

/// A directed, weighted graph of labelled vertices, stored as adjacency records in a
/// [`HashDict`].
///
/// Vertices are addressed by label alone, so labels must hash and compare; they are cloned into
/// any edge that targets them. Edges run one way and carry a weight, with at most one edge per
/// ordered pair of vertices.
///
/// Traversals borrow the graph rather than marking it, tracking visited labels in a
/// [`HashSet`] local to the call.
///
/// # Examples
/// ```
/// # use basic_collections::graph::DirectedGraph;
/// let mut graph = DirectedGraph::new();
/// graph.add_vertex("home");
/// graph.add_vertex("work");
/// graph.add_edge(&"home", &"work", 30).unwrap();
///
/// assert_eq!(graph.edge_weight(&"home", &"work"), Some(&30));
/// assert!(!graph.contains_edge(&"work", &"home"), "Edges only run one way.");
/// ```
pub struct DirectedGraph<L: Hash + Eq + Clone, W> {
    vertices: HashDict<L, Vertex<L, W>>,
}

impl<L: Hash + Eq + Clone, W> DirectedGraph<L, W> {
    /// Creates an empty graph.
    pub fn new() -> DirectedGraph<L, W> {
        DirectedGraph {
            vertices: HashDict::new(),
        }
    }

    /// Creates an empty graph with room for the provided number of vertices.
    pub fn with_cap(cap: usize) -> DirectedGraph<L, W> {
        DirectedGraph {
            vertices: HashDict::with_cap(cap),
        }
    }

    /// Returns the number of vertices in the graph.
    pub const fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the graph holds no vertices.
    pub const fn is_empty(&self) -> bool {
        self.vertices.len() == 0
    }

    /// Returns the number of edges in the graph, counting each direction separately.
    pub fn edge_count(&self) -> usize {
        self.vertices.values().map(|vertex| vertex.edges.len()).sum()
    }

    /// Adds a vertex with the provided label and no edges, returning true if the label was
    /// absent. A refused duplicate leaves the graph untouched and drops the label.
    pub fn add_vertex(&mut self, label: L) -> bool {
        if self.vertices.contains_key(&label) {
            return false;
        }
        self.vertices.insert(label, Vertex { edges: Vector::new() });
        true
    }

    /// Returns true if the graph holds a vertex with the provided label.
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices.contains_key(label)
    }

    /// Adds an edge from one labelled vertex to another, carrying the provided weight.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if either endpoint is missing, or [`DuplicateEdge`] if an edge
    /// already runs between the two in this direction. The graph is never changed by a failed
    /// insertion.
    pub fn add_edge(&mut self, from: &L, to: &L, weight: W) -> Result<(), EdgeError> {
        if !self.vertices.contains_key(to) {
            return Err(NotFound.into());
        }
        let vertex = self.vertices.get_mut(from).ok_or(NotFound)?;
        if vertex.edges.iter().any(|edge| &edge.to == to) {
            return Err(DuplicateEdge.into());
        }
        vertex.edges.push(Edge {
            to: to.clone(),
            weight,
        });
        Ok(())
    }

    /// Returns true if an edge runs from the first labelled vertex to the second.
    pub fn contains_edge<Q>(&self, from: &Q, to: &Q) -> bool
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.edge_weight(from, to).is_some()
    }

    /// Returns a reference to the weight carried by the edge from the first labelled vertex to
    /// the second, if it exists.
    pub fn edge_weight<Q>(&self, from: &Q, to: &Q) -> Option<&W>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.vertices.get(from)?.edges.iter().find_map(|edge| {
            (edge.to.borrow() == to).then_some(&edge.weight)
        })
    }

    /// Removes the edge from the first labelled vertex to the second and returns its weight.
    /// Neither vertex is removed.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if no such edge exists.
    pub fn remove_edge<Q>(&mut self, from: &Q, to: &Q) -> Result<W, NotFound>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let vertex = self.vertices.get_mut(from).ok_or(NotFound)?;
        let index = vertex
            .edges
            .iter()
            .position(|edge| edge.to.borrow() == to)
            .ok_or(NotFound)?;
        Ok(vertex.edges.remove(index).weight)
    }

    /// Returns an iterator over the labels and weights of the provided vertex's out-edges, in
    /// the order they were added.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the vertex is missing.
    pub fn neighbors<Q>(&self, label: &Q) -> Result<Neighbors<'_, L, W>, NotFound>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let vertex = self.vertices.get(label).ok_or(NotFound)?;
        Ok(Neighbors(vertex.edges.iter()))
    }

    /// Returns an iterator over every vertex label, in bucket order.
    pub fn labels(&self) -> Labels<'_, L, W> {
        Labels(self.vertices.keys())
    }

    /// Walks the graph depth-first from the provided start, producing each reachable vertex's
    /// label once. Among a vertex's out-edges, the earliest-added is explored first.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the start vertex is missing.
    pub fn depth_first<Q>(&self, start: &Q) -> Result<Vector<&L>, NotFound>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (start, _) = self.vertices.get_entry(start).ok_or(NotFound)?;
        let mut visited = HashSet::with_cap(self.len() * 2);
        let mut order = Vector::with_cap(self.len());
        let mut pending = LinkedStack::new();
        pending.push(start);

        // A label may sit in the stack several times; only its first pop visits it.
        while let Some(label) = pending.pop() {
            if !visited.add(label) {
                continue;
            }
            order.push(label);
            // UNWRAP: Only labels of held vertices are ever pushed.
            for edge in self.vertices.get::<L>(label).unwrap().edges.iter().rev() {
                pending.push(&edge.to);
            }
        }
        Ok(order)
    }

    /// Walks the graph breadth-first from the provided start, producing each reachable vertex's
    /// label once, nearest first.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the start vertex is missing.
    pub fn breadth_first<Q>(&self, start: &Q) -> Result<Vector<&L>, NotFound>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let (start, _) = self.vertices.get_entry(start).ok_or(NotFound)?;
        let mut visited = HashSet::with_cap(self.len() * 2);
        let mut order = Vector::with_cap(self.len());
        let mut pending = LinkedQueue::new();
        visited.add(start);
        pending.add(start);

        while let Some(label) = pending.pop() {
            order.push(label);
            // UNWRAP: Only labels of held vertices are ever enqueued.
            for edge in self.vertices.get::<L>(label).unwrap().edges.iter() {
                if visited.add(&edge.to) {
                    pending.add(&edge.to);
                }
            }
        }
        Ok(order)
    }

    /// Orders the vertices so that every edge points forwards, or returns `None` if a cycle
    /// makes that impossible. Vertices with no ordering between them appear in no particular
    /// order.
    pub fn topological_sort(&self) -> Option<Vector<&L>> {
        let mut in_degrees: HashDict<&L, usize> = HashDict::with_cap(self.len() * 2);
        for (label, _) in self.vertices.iter() {
            in_degrees.insert(label, 0);
        }
        for (_, vertex) in self.vertices.iter() {
            // UNWRAP: Every edge points at a held vertex.
            for edge in vertex.edges.iter() {
                *in_degrees.get_mut(&&edge.to).unwrap() += 1;
            }
        }

        let mut ready = LinkedQueue::new();
        for (label, degree) in in_degrees.iter() {
            if *degree == 0 {
                ready.add(*label);
            }
        }

        let mut order = Vector::with_cap(self.len());
        while let Some(label) = ready.pop() {
            order.push(label);
            // UNWRAP: Only labels of held vertices are ever enqueued.
            for edge in self.vertices.get(label).unwrap().edges.iter() {
                // UNWRAP: Every edge points at a held vertex.
                let degree = in_degrees.get_mut(&&edge.to).unwrap();
                *degree -= 1;
                if *degree == 0 {
                    ready.add(&edge.to);
                }
            }
        }

        // Any vertex never drained to degree zero sits on a cycle.
        (order.len() == self.len()).then_some(order)
    }

    /// Finds the cheapest route from the provided start to every reachable vertex, producing
    /// each one's total distance and the label it is best entered from. Unreachable vertices are
    /// absent from the result. Weights are summed with [`Add`] from [`Default`] and must not be
    /// negative, or a settled distance could later be undercut.
    ///
    /// # Errors
    /// Fails with [`NotFound`] if the start vertex is missing.
    pub fn shortest_paths<Q>(&self, start: &Q) -> Result<HashDict<L, PathEntry<L, W>>, NotFound>
    where
        L: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
        W: Add<Output = W> + Copy + Default + Ord,
    {
        let (start, _) = self.vertices.get_entry(start).ok_or(NotFound)?;
        let mut paths = HashDict::with_cap(self.len() * 2);
        let mut frontier = ArrayHeap::new();
        paths.insert(start.clone(), PathEntry {
            distance: W::default(),
            predecessor: None,
        });
        frontier.add(FrontierEntry {
            distance: W::default(),
            label: start,
        });

        while let Some(FrontierEntry { distance, label }) = frontier.pop() {
            // A route undercut while still queued pops after its replacement.
            if Index::<&L>::index(&paths, label).distance < distance {
                continue;
            }
            // UNWRAP: Only labels of held vertices enter the frontier.
            for edge in self.vertices.get::<L>(label).unwrap().edges.iter() {
                let next = distance + edge.weight;
                let better = match paths.get::<L>(&edge.to) {
                    Some(entry) => next < entry.distance,
                    None => true,
                };
                if better {
                    paths.insert(edge.to.clone(), PathEntry {
                        distance: next,
                        predecessor: Some(label.clone()),
                    });
                    frontier.add(FrontierEntry {
                        distance: next,
                        label: &edge.to,
                    });
                }
            }
        }
        Ok(paths)
    }
}

/// The result of entering a vertex along a cheapest route: how far it sits from the start, and
/// the label of the vertex it is entered from. The start itself has no predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathEntry<L, W> {
    pub distance: W,
    pub predecessor: Option<L>,
}

/// A queued route in [`DirectedGraph::shortest_paths`], ordered by distance alone so the heap
/// always surfaces the nearest frontier vertex.
struct FrontierEntry<'a, L, W: Ord> {
    distance: W,
    label: &'a L,
}

impl<L, W: Ord> PartialEq for FrontierEntry<'_, L, W> {
    fn eq(&self, other: &FrontierEntry<'_, L, W>) -> bool {
        self.distance == other.distance
    }
}

impl<L, W: Ord> Eq for FrontierEntry<'_, L, W> {}

impl<L, W: Ord> PartialOrd for FrontierEntry<'_, L, W> {
    fn partial_cmp(&self, other: &FrontierEntry<'_, L, W>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<L, W: Ord> Ord for FrontierEntry<'_, L, W> {
    fn cmp(&self, other: &FrontierEntry<'_, L, W>) -> Ordering {
        self.distance.cmp(&other.distance)
    }
}

impl<L: Hash + Eq + Clone, W> Default for DirectedGraph<L, W> {
    fn default() -> DirectedGraph<L, W> {
        DirectedGraph::new()
    }
}

impl<L: Hash + Eq + Clone, W: Clone> Clone for DirectedGraph<L, W> {
    fn clone(&self) -> DirectedGraph<L, W> {
        DirectedGraph {
            vertices: self.vertices.clone(),
        }
    }
}

impl<L: Hash + Eq + Clone, W: PartialEq> PartialEq for DirectedGraph<L, W> {
    /// Graphs are equal when they hold the same vertices and the same weighted edges, in any
    /// insertion order.
    fn eq(&self, other: &DirectedGraph<L, W>) -> bool {
        self.len() == other.len()
            && self.edge_count() == other.edge_count()
            && self.vertices.iter().all(|(label, vertex)| {
                other.vertices.get(label).is_some_and(|found| {
                    vertex.edges.iter().all(|edge| {
                        found
                            .edges
                            .iter()
                            .any(|other_edge| other_edge.to == edge.to && other_edge.weight == edge.weight)
                    })
                })
            })
    }
}

impl<L: Hash + Eq + Clone, W: Eq> Eq for DirectedGraph<L, W> {}

impl<L: Hash + Eq + Clone + Debug, W: Debug> Debug for DirectedGraph<L, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirectedGraph")
            .field("vertices", &self.vertices)
            .finish()
    }
}

/// Renders a vertex's out-edges as `(to, weight)` pairs for [`DirectedGraph`]'s [`Display`].
struct EdgesDisplay<'a, L, W>(&'a Vector<Edge<L, W>>);

impl<L: Debug, W: Debug> Debug for EdgesDisplay<'_, L, W> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.0.iter().map(|edge| (&edge.to, &edge.weight)))
            .finish()
    }
}

impl<L: Hash + Eq + Clone + Debug, W: Debug> Display for DirectedGraph<L, W> {
    /// Renders each vertex's label against its out-edges, in bucket order.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.vertices.iter().map(|(label, vertex)| {
                (label, EdgesDisplay(&vertex.edges))
            }))
            .finish()
    }
}
