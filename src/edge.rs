use std::{
    fmt::{Debug, Display},
    ops::Range,
};

use crate::{error::*, node::Node};

/// An edge is defined by two nodes/endpoints, the first being the source.
/// Whether an Edge is treated as directed is up to the graph it is used with.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first.
    /// Undirected graphs store every edge in this form.
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Node, Node)> for Edge {
    fn from(value: &(Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}

/// `u..v` addresses the edge `(u, v)`
impl From<Range<Node>> for Edge {
    fn from(value: Range<Node>) -> Self {
        Edge(value.start, value.end)
    }
}

/// Parses an index expression given as a list of node ids
impl TryFrom<&[Node]> for Edge {
    type Error = GraphError;

    fn try_from(value: &[Node]) -> Result<Self, Self::Error> {
        match *value {
            [u, v] => Ok(Edge(u, v)),
            _ => Err(GraphError::InvalidArgument(format!(
                "must supply 2 indices, got {}",
                value.len()
            ))),
        }
    }
}
