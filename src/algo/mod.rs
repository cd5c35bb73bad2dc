/*!
# Graph Algorithms

Algorithms built on top of the graph representations in this crate, re-exported at the top
level of this module:
```rust
use wgraphs::algo::*;
```
Traversals are provided as **iterators** and are available directly on every graph through
the [`Traversal`] trait, e.g. `graph.bfs(start)`.
*/

mod traversal;

pub use traversal::*;
