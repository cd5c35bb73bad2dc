/*!
# Graph

[`Graph`] wraps a [`StorageBackend`] together with one optional payload per node and
owns the node lifecycle:

- `add_node` first reclaims a free id (after zeroing its edges) and only grows the
  storage if there is none,
- `remove_node` physically shrinks the storage if the highest slot is removed and
  otherwise marks the id as free, leaving all other ids untouched.

Every public method validates all ids it receives before delegating, so a failing call
never leaves a partial mutation behind.

Nodes can be addressed by plain ids or through the lightweight handles [`NodeHandle`]
(read-only) and [`NodeHandleMut`]. Handles do not cache anything; each call re-validates
the id against the graph.
*/

use std::ops::Index;

use fxhash::FxHashSet;
use itertools::{Either, Itertools};
use tracing::debug;

use crate::{edge::*, error::*, node::*, ops::*, repr::*};

/// A weighted graph over node slots `0..n` with recyclable ids and per-node payloads `T`.
///
/// Undirected graphs store each edge once in normalized form, hence `(u, v)` and
/// `(v, u)` can never disagree.
#[derive(Clone, Debug)]
pub struct Graph<S, T = ()> {
    storage: S,
    data: Vec<Option<T>>,
    free: FxHashSet<Node>,
    directed: bool,
}

/// Graph using an Adjacency-Matrix
pub type DenseGraph<W = f64, T = ()> = Graph<AdjMatrix<W>, T>;

/// Graph using sparse per-node weight maps
pub type SparseGraph<W = f64, T = ()> = Graph<SparseAdjArray<W>, T>;

/// Setter-style configuration for new graphs
#[derive(Debug, Copy, Clone, Default)]
pub struct GraphBuilder {
    n: NumNodes,
    directed: bool,
}

impl GraphBuilder {
    /// Creates a builder for an empty undirected graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Updates the initial number of nodes
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n;
        self
    }

    /// Updates whether edges are directed
    pub fn directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Creates the configured graph on top of the storage backend `S`
    pub fn build<S: StorageBackend, T>(&self) -> Graph<S, T> {
        Graph::new(self.n, self.directed)
    }
}

impl<S: StorageBackend, T> Graph<S, T> {
    /// Creates a graph with `n` valid nodes, no edges and unset payloads
    pub fn new(n: NumNodes, directed: bool) -> Self {
        Self {
            storage: S::new(n),
            data: std::iter::repeat_with(|| None).take(n as usize).collect(),
            free: FxHashSet::default(),
            directed,
        }
    }

    /// Creates a directed graph with `n` nodes
    pub fn directed(n: NumNodes) -> Self {
        Self::new(n, true)
    }

    /// Creates an undirected graph with `n` nodes
    pub fn undirected(n: NumNodes) -> Self {
        Self::new(n, false)
    }

    /// Returns *true* if `(u, v)` and `(v, u)` are distinct edges
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    /// Returns the underlying storage
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Returns the ids that were removed and not yet reclaimed, in no particular order
    pub fn free_ids(&self) -> impl Iterator<Item = Node> + '_ {
        self.free.iter().copied()
    }

    fn check(&self, u: Node) -> GraphResult<()> {
        if self.is_valid(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidId(u))
        }
    }

    /// Position of `(u, v)` in the storage
    fn canonical(&self, u: Node, v: Node) -> Edge {
        if self.directed {
            Edge(u, v)
        } else {
            Edge(u, v).normalized()
        }
    }

    /// Returns a read-only handle to `u`
    pub fn node(&self, u: Node) -> GraphResult<NodeHandle<'_, S, T>> {
        self.check(u)?;
        Ok(NodeHandle { graph: self, id: u })
    }

    /// Returns a handle to `u` allowing modifications
    pub fn node_mut(&mut self, u: Node) -> GraphResult<NodeHandleMut<'_, S, T>> {
        self.check(u)?;
        Ok(NodeHandleMut { graph: self, id: u })
    }

    /// Adds a node without edges and payload and returns a handle to it.
    ///
    /// If there are free ids, an arbitrary one of them is reclaimed; callers must not
    /// rely on which. Otherwise the storage grows by one slot.
    pub fn add_node(&mut self) -> GraphResult<NodeHandleMut<'_, S, T>> {
        let reclaimed = self.free.iter().next().copied();
        let u = match reclaimed {
            Some(u) => {
                self.storage.zero(u)?;
                self.free.remove(&u);
                self.data[u as usize] = None;
                debug!(node = u, "reclaimed free node");
                u
            }
            None => {
                let u = self.storage.add_node();
                self.data.push(None);
                debug!(node = u, "appended node");
                u
            }
        };

        Ok(NodeHandleMut { graph: self, id: u })
    }

    /// Removes `u` together with all its edges and its payload.
    ///
    /// Removing the highest slot shrinks the storage; any other id is marked free and
    /// will be handed out again by a later [`Graph::add_node`].
    pub fn remove_node(&mut self, u: Node) -> GraphResult<()> {
        self.check(u)?;

        if u + 1 == self.storage.number_of_slots() {
            self.storage.remove()?;
            self.data.pop();
            debug!(node = u, "removed tail node");
        } else {
            self.storage.zero(u)?;
            self.data[u as usize] = None;
            self.free.insert(u);
            debug!(node = u, free = self.free.len(), "freed node");
        }

        Ok(())
    }

    /// Returns the weight of `(u, v)` or zero if there is no such edge
    pub fn weight(&self, u: Node, v: Node) -> GraphResult<S::Weight> {
        self.check(u)?;
        self.check(v)?;
        let Edge(u, v) = self.canonical(u, v);
        self.storage.get(u, v)
    }

    /// Sets the weight of `(u, v)`; zero removes the edge
    pub fn set_weight(&mut self, u: Node, v: Node, weight: S::Weight) -> GraphResult<()> {
        self.check(u)?;
        self.check(v)?;
        let Edge(u, v) = self.canonical(u, v);
        self.storage.set(u, v, weight)
    }

    /// Alias of [`Graph::set_weight`]
    pub fn connect(&mut self, u: Node, v: Node, weight: S::Weight) -> GraphResult<()> {
        self.set_weight(u, v, weight)
    }

    /// Index-style access, e.g. `graph.weight_at((1, 3))` or `graph.weight_at(1..3)`
    pub fn weight_at(&self, edge: impl Into<Edge>) -> GraphResult<S::Weight> {
        let Edge(u, v) = edge.into();
        self.weight(u, v)
    }

    /// Index-style write, e.g. `graph.set_weight_at((1, 3), 2.0)`
    pub fn set_weight_at(&mut self, edge: impl Into<Edge>, weight: S::Weight) -> GraphResult<()> {
        let Edge(u, v) = edge.into();
        self.set_weight(u, v, weight)
    }

    /// Returns the payload of `u` if one is set
    pub fn data(&self, u: Node) -> GraphResult<Option<&T>> {
        self.check(u)?;
        Ok(self.data[u as usize].as_ref())
    }

    /// Replaces the payload of `u` and returns the previous one.
    /// Passing `None` unsets the payload.
    pub fn set_data(&mut self, u: Node, value: impl Into<Option<T>>) -> GraphResult<Option<T>> {
        self.check(u)?;
        Ok(std::mem::replace(&mut self.data[u as usize], value.into()))
    }

    /// Returns all nodes reachable from `u` via one edge in ascending order.
    /// For undirected graphs, these are all nodes sharing an edge with `u`.
    pub fn children(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        self.check(u)?;
        let children = self.storage.children(u)?;
        Ok(if self.directed {
            Either::Left(children)
        } else {
            Either::Right(children.merge(self.storage.parents(u)?).dedup())
        })
    }

    /// Returns all nodes `v` with an edge `(v, u)` in ascending order.
    /// For undirected graphs, this equals [`Graph::children`].
    pub fn parents(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        self.check(u)?;
        let parents = self.storage.parents(u)?;
        Ok(if self.directed {
            Either::Left(parents)
        } else {
            Either::Right(self.storage.children(u)?.merge(parents).dedup())
        })
    }

    /// Collects [`Graph::children`]
    pub fn child_ids(&self, u: Node) -> GraphResult<Vec<Node>> {
        Ok(self.children(u)?.collect_vec())
    }

    /// Collects [`Graph::parents`]
    pub fn parent_ids(&self, u: Node) -> GraphResult<Vec<Node>> {
        Ok(self.parents(u)?.collect_vec())
    }
}

impl<S: StorageBackend, T> GraphNodeOrder for Graph<S, T> {
    fn number_of_slots(&self) -> NumNodes {
        self.storage.number_of_slots()
    }

    fn number_of_nodes(&self) -> NumNodes {
        self.number_of_slots() - self.free.len() as NumNodes
    }

    fn is_valid(&self, u: Node) -> bool {
        self.storage.contains_slot(u) && !self.free.contains(&u)
    }
}

impl<S: StorageBackend, T> AdjacencyList for Graph<S, T> {
    fn children_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        match self.children(u) {
            Ok(children) => children,
            Err(err) => panic!("{err}"),
        }
    }

    fn parents_of(&self, u: Node) -> impl Iterator<Item = Node> + '_ {
        match self.parents(u) {
            Ok(parents) => parents,
            Err(err) => panic!("{err}"),
        }
    }
}

/// `graph[(u, v)]` or `graph[u..v]`
///
/// ** Panics if `u` or `v` is not valid **
impl<S, T, E> Index<E> for Graph<S, T>
where
    S: StorageBackend + Index<Edge, Output = <S as StorageBackend>::Weight>,
    E: Into<Edge>,
{
    type Output = S::Weight;

    fn index(&self, index: E) -> &Self::Output {
        let Edge(u, v) = index.into();
        if let Err(err) = self.check(u).and(self.check(v)) {
            panic!("{err}");
        }
        &self.storage[self.canonical(u, v)]
    }
}

/// A non-owning, read-only reference to a node of a [`Graph`]
pub struct NodeHandle<'a, S, T = ()> {
    graph: &'a Graph<S, T>,
    id: Node,
}

impl<S, T> Clone for NodeHandle<'_, S, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<S, T> Copy for NodeHandle<'_, S, T> {}

impl<'a, S: StorageBackend, T> NodeHandle<'a, S, T> {
    /// Returns the id this handle refers to
    pub fn id(&self) -> Node {
        self.id
    }

    /// Returns the graph this handle belongs to
    pub fn graph(&self) -> &'a Graph<S, T> {
        self.graph
    }

    /// Returns *true* if the id still refers to a node of the graph
    pub fn is_valid(&self) -> bool {
        self.graph.is_valid(self.id)
    }

    /// Returns the weight of the edge towards `v`
    pub fn weight(&self, v: Node) -> GraphResult<S::Weight> {
        self.graph.weight(self.id, v)
    }

    /// Returns handles to all children
    pub fn children(self) -> GraphResult<impl Iterator<Item = NodeHandle<'a, S, T>>> {
        let graph = self.graph;
        Ok(graph.children(self.id)?.map(move |id| NodeHandle { graph, id }))
    }

    /// Returns handles to all parents
    pub fn parents(self) -> GraphResult<impl Iterator<Item = NodeHandle<'a, S, T>>> {
        let graph = self.graph;
        Ok(graph.parents(self.id)?.map(move |id| NodeHandle { graph, id }))
    }

    /// Returns the ids of all children
    pub fn child_ids(&self) -> GraphResult<Vec<Node>> {
        self.graph.child_ids(self.id)
    }

    /// Returns the ids of all parents
    pub fn parent_ids(&self) -> GraphResult<Vec<Node>> {
        self.graph.parent_ids(self.id)
    }

    /// Returns the payload if one is set
    pub fn get(self) -> GraphResult<Option<&'a T>> {
        self.graph.data(self.id)
    }
}

/// `node[v]` is the weight of the edge towards `v`
///
/// ** Panics if the handle or `v` is not valid **
impl<S, T> Index<Node> for NodeHandle<'_, S, T>
where
    S: StorageBackend + Index<Edge, Output = <S as StorageBackend>::Weight>,
{
    type Output = S::Weight;

    fn index(&self, v: Node) -> &Self::Output {
        &self.graph[(self.id, v)]
    }
}

/// A non-owning reference to a node of a [`Graph`] allowing modifications
pub struct NodeHandleMut<'a, S, T = ()> {
    graph: &'a mut Graph<S, T>,
    id: Node,
}

impl<'a, S: StorageBackend, T> NodeHandleMut<'a, S, T> {
    /// Returns the id this handle refers to
    pub fn id(&self) -> Node {
        self.id
    }

    /// Returns *true* if the id still refers to a node of the graph
    pub fn is_valid(&self) -> bool {
        self.graph.is_valid(self.id)
    }

    /// Reborrows as a read-only handle
    pub fn as_handle(&self) -> NodeHandle<'_, S, T> {
        NodeHandle {
            graph: &*self.graph,
            id: self.id,
        }
    }

    /// Downgrades into a read-only handle for the remaining lifetime of the borrow
    pub fn into_handle(self) -> NodeHandle<'a, S, T> {
        NodeHandle {
            graph: self.graph,
            id: self.id,
        }
    }

    /// Sets the weight of the edge towards `v`
    pub fn connect(&mut self, v: Node, weight: S::Weight) -> GraphResult<()> {
        self.graph.set_weight(self.id, v, weight)
    }

    /// Returns the weight of the edge towards `v`
    pub fn weight(&self, v: Node) -> GraphResult<S::Weight> {
        self.graph.weight(self.id, v)
    }

    /// Returns the ids of all children
    pub fn child_ids(&self) -> GraphResult<Vec<Node>> {
        self.graph.child_ids(self.id)
    }

    /// Returns the ids of all parents
    pub fn parent_ids(&self) -> GraphResult<Vec<Node>> {
        self.graph.parent_ids(self.id)
    }

    /// Returns the payload if one is set
    pub fn get(&self) -> GraphResult<Option<&T>> {
        self.graph.data(self.id)
    }

    /// Replaces the payload and returns the previous one
    pub fn set(&mut self, value: impl Into<Option<T>>) -> GraphResult<Option<T>> {
        self.graph.set_data(self.id, value)
    }

    /// Removes the node from the graph. Any later call on this handle fails.
    pub fn remove(&mut self) -> GraphResult<()> {
        self.graph.remove_node(self.id)
    }
}
