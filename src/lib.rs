/*!
`wgraphs` is a small graph library for **w**eighted graphs whose nodes are numbered and may
come and go:
- Nodes are numbered `0` to `n - 1`; removed ids are recycled by later insertions,
- Edges carry a weight, where the zero weight means *no edge*,
- Graphs are either directed or undirected.

# Representation

We represent **nodes** as `u32` and **edges** as a simple tuple-struct `Edge(Node, Node)`.
In an **undirected** graph, `Edge(u, v)` and `Edge(v, u)` address the same edge, which is
stored once in normalized form (`u <= v`).

The weights themselves live in a [`StorageBackend`](crate::repr::StorageBackend):
- [`AdjMatrix`](crate::repr::AdjMatrix): dense `n x n` matrix, constant time lookups
  but quadratic memory and resizing cost,
- [`SparseAdjArray`](crate::repr::SparseAdjArray): one sorted weight map per node, memory
  proportional to the number of edges.

A [`Graph`](crate::graph::Graph) wraps a backend, owns the set of free ids and one optional
payload per node. Nodes can be accessed by id or through lightweight handles.

# Usage

- [`prelude`] includes definitions for nodes, edges, errors, graphs, basic graph operations
  and both storage backends,
- [`algo`] includes BFS/DFS traversals available as methods on every graph
  (`graph.bfs(start_node)`) as well as the step-wise [`Frontier`](crate::algo::Frontier),
- [`tree`] includes a rooted tree built on top of a directed graph.

In most use-cases, `use wgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use wgraphs::{algo::*, prelude::*};

let mut graph = SparseGraph::<f64, &str>::undirected(3);
graph.connect(0, 1, 0.5).unwrap();
graph.connect(2, 1, 1.5).unwrap();
graph.set_data(2, "leaf").unwrap();

assert_eq!(graph.weight(1, 2), Ok(1.5));
assert_eq!(graph.bfs(0).unwrap().collect::<Vec<_>>(), vec![0, 1, 2]);

graph.remove_node(1).unwrap();
assert_eq!(graph.add_node().unwrap().id(), 1);
```
*/

pub mod algo;
pub mod edge;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;
pub mod repr;
pub(crate) mod testing;
pub mod tree;

/// `wgraphs::prelude` includes definitions for nodes, edges and errors, all basic graph operation traits, graphs and their storage backends.
pub mod prelude {
    pub use super::{edge::*, error::*, graph::*, node::*, ops::*, repr::*};
}
