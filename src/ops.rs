use crate::{edge::*, node::*};

/// Provides getters pertaining to the node-size of a graph
pub trait GraphNodeOrder {
    /// Returns the number of slots, i.e. one more than the highest id ever valid right now
    fn number_of_slots(&self) -> NumNodes;

    /// Returns the number of currently valid (non-free) nodes
    fn number_of_nodes(&self) -> NumNodes;

    /// Return the number of valid nodes as usize
    fn len(&self) -> usize {
        self.number_of_nodes() as usize
    }

    /// Returns *true* if the graph has no valid nodes (and thus no edges)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns *true* if `u` is in range and not free
    fn is_valid(&self, u: Node) -> bool;

    /// Returns an iterator over all valid nodes in ascending order
    fn vertices(&self) -> impl Iterator<Item = Node> + '_ {
        (0..self.number_of_slots()).filter(move |&u| self.is_valid(u))
    }
}

/// Read access to the neighborhoods of a graph. This is all a traversal needs.
pub trait AdjacencyList: GraphNodeOrder + Sized {
    /// Returns an iterator over all `v` reachable from `u` via a single edge, ascending.
    /// ** Panics if `u` is not valid **
    ///
    /// For undirected graphs this contains every node sharing an edge with `u`.
    fn children_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns an iterator over all `v` with an edge `(v, u)`, ascending.
    /// ** Panics if `u` is not valid **
    fn parents_of(&self, u: Node) -> impl Iterator<Item = Node> + '_;

    /// Returns the number of children of `u`
    /// ** Panics if `u` is not valid **
    fn out_degree_of(&self, u: Node) -> NumNodes {
        self.children_of(u).count() as NumNodes
    }

    /// Returns the number of parents of `u`
    /// ** Panics if `u` is not valid **
    fn in_degree_of(&self, u: Node) -> NumNodes {
        self.parents_of(u).count() as NumNodes
    }

    /// Returns *true* if `u` has neither children nor parents
    /// ** Panics if `u` is not valid **
    fn is_isolated(&self, u: Node) -> bool {
        self.children_of(u).next().is_none() && self.parents_of(u).next().is_none()
    }

    /// Returns an iterator over all edges `(u, v)` between valid nodes.
    /// If `only_normalized`, then only edges `(u, v)` with `u <= v` are considered.
    fn edges(&self, only_normalized: bool) -> impl Iterator<Item = Edge> + '_ {
        self.vertices().flat_map(move |u| {
            self.children_of(u)
                .map(move |v| Edge(u, v))
                .filter(move |e| !only_normalized || e.is_normalized())
        })
    }
}
