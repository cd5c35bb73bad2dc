/*!
# Node Representation

We choose `Node = u32` as almost all use-cases involve less than `2^32` node slots.
A node is only an index into the slot space of a graph: once removed, its id may be
handed out again by the next `add_node`, so it is never a permanent identity.
*/

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// Node-Value that is considered invalid
pub const INVALID_NODE: Node = Node::MAX;

/// There can be at most `2^32 - 1` node slots in a graph!
pub type NumNodes = Node;
