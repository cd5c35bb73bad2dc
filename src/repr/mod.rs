/*!
# Storage Backends

A storage backend holds the weighted edges between a contiguous range of node slots
`0..n`. It owns no traversal logic and keeps no free-list: which slots are currently
in use is the business of [`Graph`](crate::graph::Graph).

Two backends are available:
- [`AdjMatrix`]: a dense `n x n` weight table,
- [`SparseAdjArray`]: one sorted `neighbor -> weight` map per node.

Both satisfy the same contract (see [`StorageBackend`]) and are tested against the very
same suite, so they can be swapped without any observable change in behavior.
*/

use std::fmt::Debug;

use num::Zero;

use crate::{edge::*, error::*, node::*};

mod matrix;
mod sparse;

pub use matrix::*;
pub use sparse::*;

/// Edge weights. The zero value is indistinguishable from the absence of an edge.
pub trait Weight: Copy + PartialEq + Debug + Zero {}

impl<W> Weight for W where W: Copy + PartialEq + Debug + Zero {}

/// Capability interface shared by all storage backends.
///
/// All methods taking node ids fail with [`GraphError::InvalidId`] if an id is not in
/// `0..self.number_of_slots()`, and do so before touching any state.
pub trait StorageBackend: Sized {
    type Weight: Weight;

    /// Creates a storage with `n` slots and no edges
    fn new(n: NumNodes) -> Self;

    /// Returns the number of slots `n`
    fn number_of_slots(&self) -> NumNodes;

    /// Returns the weight of the edge `(u, v)` or zero if there is none
    fn get(&self, u: Node, v: Node) -> GraphResult<Self::Weight>;

    /// Overwrites the weight of the edge `(u, v)`. Writing zero deletes the edge.
    fn set(&mut self, u: Node, v: Node, weight: Self::Weight) -> GraphResult<()>;

    /// Appends a new slot without edges and returns its id (the old `n`)
    fn add_node(&mut self) -> Node;

    /// Drops the highest slot `n - 1` together with all edges referencing it and
    /// returns its id.
    /// Fails with [`GraphError::PreconditionViolation`] if there are no slots.
    fn remove(&mut self) -> GraphResult<Node>;

    /// Clears every edge with `u` as source or target; the number of slots is unchanged
    fn zero(&mut self, u: Node) -> GraphResult<()>;

    /// Returns all `v` with a non-zero weight `(u, v)` in ascending order.
    fn children(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_>;

    /// Returns all `v` with a non-zero weight `(v, u)` in ascending order.
    fn parents(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_>;

    /// Returns *true* if `u` addresses a slot
    fn contains_slot(&self, u: Node) -> bool {
        u < self.number_of_slots()
    }

    /// Fails with [`GraphError::InvalidId`] if `u` does not address a slot
    fn check_id(&self, u: Node) -> GraphResult<()> {
        if self.contains_slot(u) {
            Ok(())
        } else {
            Err(GraphError::InvalidId(u))
        }
    }

    /// Index-style access, e.g. `storage.get_at((1, 3))` or `storage.get_at(1..3)`
    fn get_at(&self, edge: impl Into<Edge>) -> GraphResult<Self::Weight> {
        let Edge(u, v) = edge.into();
        self.get(u, v)
    }

    /// Index-style write, e.g. `storage.set_at((1, 3), 7)` or `storage.set_at(1..3, 7)`
    fn set_at(&mut self, edge: impl Into<Edge>, weight: Self::Weight) -> GraphResult<()> {
        let Edge(u, v) = edge.into();
        self.set(u, v, weight)
    }
}
