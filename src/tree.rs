/*!
# Tree

A rooted tree on top of a directed [`SparseGraph`]. The root has id `0`; every other node
is created through [`Tree::add_child`] and therefore has exactly one parent. Nodes are
never removed, so ids stay stable and are never recycled.
*/

use num::Zero;
use tracing::debug;

use crate::{error::*, graph::*, node::*, ops::*, repr::Weight};

/// Rooted tree whose edges (parent -> child) carry a non-zero weight
#[derive(Clone, Debug)]
pub struct Tree<W = f64> {
    graph: SparseGraph<W>,
}

impl<W: Weight> Default for Tree<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Weight> Tree<W> {
    /// Id of the root node
    pub const ROOT: Node = 0;

    /// Creates a tree consisting only of the root
    pub fn new() -> Self {
        Self {
            graph: SparseGraph::directed(1),
        }
    }

    /// Returns the underlying directed graph
    pub fn graph(&self) -> &SparseGraph<W> {
        &self.graph
    }

    /// Returns the number of nodes (including the root)
    pub fn len(&self) -> usize {
        self.graph.len()
    }

    /// Returns the root
    pub fn root(&self) -> TreeNode<'_, W> {
        TreeNode {
            tree: self,
            id: Self::ROOT,
        }
    }

    /// Returns the node with id `u`
    pub fn node(&self, u: Node) -> GraphResult<TreeNode<'_, W>> {
        if !self.graph.is_valid(u) {
            return Err(GraphError::InvalidId(u));
        }
        Ok(TreeNode { tree: self, id: u })
    }

    /// Creates a new leaf below `parent` and returns its id
    pub fn add_child(&mut self, parent: Node, weight: W) -> GraphResult<Node> {
        if weight.is_zero() {
            return Err(GraphError::InvalidArgument(
                "tree edges require a non-zero weight".into(),
            ));
        }
        if !self.graph.is_valid(parent) {
            return Err(GraphError::InvalidId(parent));
        }

        let child = self.graph.add_node()?.id();
        self.graph.set_weight(parent, child, weight)?;
        debug!(parent, child, "added tree node");
        Ok(child)
    }
}

/// Read-only navigation handle to a node of a [`Tree`]
pub struct TreeNode<'a, W> {
    tree: &'a Tree<W>,
    id: Node,
}

impl<W> Clone for TreeNode<'_, W> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<W> Copy for TreeNode<'_, W> {}

impl<'a, W: Weight> TreeNode<'a, W> {
    fn at(&self, id: Node) -> Self {
        Self {
            tree: self.tree,
            id,
        }
    }

    fn child_id(&self, index: usize) -> GraphResult<Node> {
        self.tree
            .graph
            .children_of(self.id)
            .nth(index)
            .ok_or_else(|| {
                GraphError::InvalidArgument(format!(
                    "node {} has no child with index {index}",
                    self.id
                ))
            })
    }

    /// Returns the id of this node
    pub fn id(&self) -> Node {
        self.id
    }

    pub fn is_root(&self) -> bool {
        self.id == Tree::<W>::ROOT
    }

    pub fn is_leaf(&self) -> bool {
        self.number_of_children() == 0
    }

    pub fn root(&self) -> Self {
        self.at(Tree::<W>::ROOT)
    }

    /// Returns the parent or `None` for the root
    pub fn parent(&self) -> Option<Self> {
        let mut parents = self.tree.graph.parents_of(self.id);
        let parent = parents.next()?;
        debug_assert!(parents.next().is_none(), "tree node with multiple parents");
        Some(self.at(parent))
    }

    /// Returns the `index`-th child in ascending id order, i.e. in creation order
    pub fn child(&self, index: usize) -> GraphResult<Self> {
        Ok(self.at(self.child_id(index)?))
    }

    /// Returns an iterator over all children in ascending id order
    pub fn children(self) -> impl Iterator<Item = TreeNode<'a, W>> {
        let tree = self.tree;
        tree.graph
            .children_of(self.id)
            .map(move |id| TreeNode { tree, id })
    }

    pub fn number_of_children(&self) -> usize {
        self.tree.graph.out_degree_of(self.id) as usize
    }

    /// Returns the weight of the edge towards the `index`-th child
    pub fn weight(&self, index: usize) -> GraphResult<W> {
        let child = self.child_id(index)?;
        self.tree.graph.weight(self.id, child)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algo::*;
    use itertools::Itertools;

    fn child_ids(node: TreeNode<'_, i32>) -> Vec<Node> {
        node.children().map(|c| c.id()).collect_vec()
    }

    #[test]
    fn init() {
        let tree = Tree::<i32>::new();
        let root = tree.root();

        assert_eq!(tree.len(), 1);
        assert!(root.is_root());
        assert!(root.is_leaf());
        assert_eq!(root.number_of_children(), 0);
        assert!(child_ids(root).is_empty());
        assert!(root.parent().is_none());
        assert_eq!(root.root().id(), root.id());
    }

    #[test]
    fn add_child() {
        let mut tree = Tree::<i32>::new();
        let id = tree.add_child(Tree::<i32>::ROOT, 5).unwrap();

        let root = tree.root();
        let node = tree.node(id).unwrap();

        assert_eq!(tree.len(), 2);
        assert_eq!(root.number_of_children(), 1);
        assert_eq!(node.number_of_children(), 0);

        assert_eq!(root.child(0).unwrap().id(), id);
        assert_eq!(node.parent().map(|p| p.id()), Some(root.id()));
        assert_eq!(node.root().id(), root.id());
        assert_eq!(root.weight(0), Ok(5));

        assert!(!root.is_leaf());
        assert!(node.is_leaf());
        assert!(!node.is_root());
    }

    #[test]
    fn deeper_tree() {
        let mut tree = Tree::<i32>::new();
        let a = tree.add_child(0, 1).unwrap();
        let b = tree.add_child(0, 2).unwrap();
        let c = tree.add_child(a, 3).unwrap();
        let d = tree.add_child(a, -4).unwrap();

        assert_eq!(child_ids(tree.root()), [a, b]);
        assert_eq!(child_ids(tree.node(a).unwrap()), [c, d]);

        let leaf = tree.node(d).unwrap();
        assert_eq!(leaf.parent().map(|p| p.id()), Some(a));
        assert_eq!(leaf.root().id(), 0);
        assert_eq!(tree.node(a).unwrap().weight(1), Ok(-4));
        assert_eq!(tree.root().weight(1), Ok(2));

        assert_eq!(tree.graph().bfs(0).unwrap().collect_vec(), [0, a, b, c, d]);
        assert_eq!(tree.graph().dfs(0).unwrap().collect_vec(), [0, b, a, d, c]);
    }

    #[test]
    fn bad_arguments() {
        let mut tree = Tree::<i32>::new();
        tree.add_child(0, 1).unwrap();

        assert!(matches!(
            tree.add_child(0, 0),
            Err(GraphError::InvalidArgument(_))
        ));
        assert_eq!(tree.add_child(7, 1), Err(GraphError::InvalidId(7)));
        assert_eq!(tree.node(2).err().map(|e| e.to_string()), Some("invalid node id: 2".into()));
        assert_eq!(tree.len(), 2);

        let root = tree.root();
        assert!(matches!(root.child(1), Err(GraphError::InvalidArgument(_))));
        assert!(matches!(root.weight(1), Err(GraphError::InvalidArgument(_))));
    }
}
