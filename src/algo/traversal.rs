/*!
Graph traversal algorithms.

This module provides:
- [`Frontier`]: the pending-work deque plus reached-table driving a traversal step by step
  (`peek`, `advance`, `remove`, `ignore`).
- [`FrontierSearch`]: lazy BFS/DFS iterators on top of a frontier, yielding either the
  visited node or the node together with its predecessor.
- [`VisitedSetSearch`]: an alternate visited-set traversal without predecessor tracking.
- A high-level [`Traversal`] trait that exposes the traversals directly as methods on
  graph data structures.

A traversal borrows the graph for its entire lifetime, so the graph cannot be modified
while a traversal is alive. The reached-table is sized once, when the traversal starts.
*/

use std::{collections::VecDeque, marker::PhantomData, ptr};

use fixedbitset::FixedBitSet;
use tracing::trace;

use crate::{error::*, graph::*, node::*, ops::*, repr::StorageBackend};

/// Entry of the frontier: a node and the node it was discovered from
pub type FrontierEntry = (Node, Option<Node>);

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`Node`]: only the visited node.
/// - [`NodeWithPredecessor`]: the visited node and the node it was discovered from.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item from a frontier entry
    fn from_entry(entry: FrontierEntry) -> Self;

    /// Returns the node represented by this item.
    fn item(&self) -> Node;

    /// Returns the predecessor of this node, if any and if tracked.
    fn predecessor(&self) -> Option<Node>;
}

impl SequencedItem for Node {
    fn from_entry(entry: FrontierEntry) -> Self {
        entry.0
    }

    fn item(&self) -> Node {
        *self
    }

    fn predecessor(&self) -> Option<Node> {
        None
    }
}

/// `(node, predecessor)`; the start node has no predecessor
pub type NodeWithPredecessor = (Node, Option<Node>);

impl SequencedItem for NodeWithPredecessor {
    fn from_entry(entry: FrontierEntry) -> Self {
        entry
    }

    fn item(&self) -> Node {
        self.0
    }

    fn predecessor(&self) -> Option<Node> {
        self.1
    }
}

/// Determines where newly discovered nodes enter the frontier and thereby the traversal order.
pub trait SearchOrder {
    /// Enqueues a newly discovered entry
    fn enqueue(queue: &mut VecDeque<FrontierEntry>, entry: FrontierEntry);
}

/// Discovered nodes are appended at the tail: FIFO level order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

/// Discovered nodes are pushed at the head: LIFO pre-order.
///
/// As the children of a node are pushed one after another, the last child ends up in front,
/// i.e. siblings are visited in reverse enumeration order.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepthFirst;

impl SearchOrder for BreadthFirst {
    fn enqueue(queue: &mut VecDeque<FrontierEntry>, entry: FrontierEntry) {
        queue.push_back(entry);
    }
}

impl SearchOrder for DepthFirst {
    fn enqueue(queue: &mut VecDeque<FrontierEntry>, entry: FrontierEntry) {
        queue.push_front(entry);
    }
}

/// Pending work of a traversal.
///
/// The frontier is *active* as long as its deque is non-empty and *exhausted* afterwards;
/// an exhausted frontier stays exhausted. A node is marked as reached when it is taken
/// from the head. Entries of already reached nodes may linger deeper in the deque but are
/// discarded as soon as they reach the head, hence `peek` never returns a reached node.
pub struct Frontier<'a, G, O> {
    graph: &'a G,
    queue: VecDeque<FrontierEntry>,
    reached: FixedBitSet,
    _order: PhantomData<O>,
}

impl<'a, G, O> Frontier<'a, G, O>
where
    G: AdjacencyList,
    O: SearchOrder,
{
    /// Creates a frontier containing only `start`.
    /// Fails with [`GraphError::InvalidId`] if `start` is not a valid node.
    pub fn new(graph: &'a G, start: Node) -> GraphResult<Self> {
        if !graph.is_valid(start) {
            return Err(GraphError::InvalidId(start));
        }

        Ok(Self {
            graph,
            queue: VecDeque::from([(start, None)]),
            reached: FixedBitSet::with_capacity(graph.number_of_slots() as usize),
            _order: PhantomData,
        })
    }

    /// Returns the head entry without removing it
    pub fn peek(&self) -> Option<FrontierEntry> {
        self.queue.front().copied()
    }

    /// Returns the number of pending entries (including lingering duplicates)
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    /// Returns *true* if there is nothing left to visit
    pub fn is_exhausted(&self) -> bool {
        self.queue.is_empty()
    }

    /// Returns *true* if `u` was already taken from the head (by `advance` or `remove`)
    pub fn did_reach(&self, u: Node) -> bool {
        self.reached.contains(u as usize)
    }

    /// Takes the head, marks it as reached and enqueues all its children not reached yet.
    pub fn advance(&mut self) -> GraphResult<()> {
        self.step().map(|_| ()).ok_or(EXHAUSTED)
    }

    /// Takes the head and marks it as reached without looking at its children.
    pub fn remove(&mut self) -> GraphResult<()> {
        self.take(true).ok_or(EXHAUSTED)?;
        self.discard_reached();
        Ok(())
    }

    /// Takes the head without marking it as reached; it may thus be discovered again later.
    pub fn ignore(&mut self) -> GraphResult<()> {
        self.take(false).ok_or(EXHAUSTED)?;
        self.discard_reached();
        Ok(())
    }

    /// `advance` returning the entry taken from the head
    fn step(&mut self) -> Option<FrontierEntry> {
        let entry = self.take(true)?;
        let u = entry.0;

        let graph = self.graph;
        for v in graph.children_of(u) {
            if !self.reached.contains(v as usize) {
                O::enqueue(&mut self.queue, (v, Some(u)));
            }
        }

        self.discard_reached();
        Some(entry)
    }

    fn take(&mut self, mark_reached: bool) -> Option<FrontierEntry> {
        let entry = self.queue.pop_front()?;
        if mark_reached {
            self.reached.insert(entry.0 as usize);
        }
        trace!(node = entry.0, from = ?entry.1, mark_reached, "took frontier head");
        Some(entry)
    }

    fn discard_reached(&mut self) {
        while let Some(&(u, _)) = self.queue.front() {
            if !self.reached.contains(u as usize) {
                break;
            }
            self.queue.pop_front();
        }
    }
}

const EXHAUSTED: GraphError = GraphError::PreconditionViolation("frontier is exhausted");

impl<'a, S, T, O> Frontier<'a, Graph<S, T>, O>
where
    S: StorageBackend,
    O: SearchOrder,
{
    /// Creates a frontier starting at the node of `start`.
    /// Fails with [`GraphError::InvalidArgument`] if the handle belongs to another graph.
    pub fn from_handle(graph: &'a Graph<S, T>, start: NodeHandle<'_, S, T>) -> GraphResult<Self> {
        if !ptr::eq(graph, start.graph()) {
            return Err(GraphError::InvalidArgument(
                "node handle belongs to a different graph".into(),
            ));
        }
        Self::new(graph, start.id())
    }
}

/// Lazy traversal iterator driving a [`Frontier`] to exhaustion.
///
/// Parameterized by the [`SearchOrder`] and the type of items yielded
/// (either [`Node`] or [`NodeWithPredecessor`]).
pub struct FrontierSearch<'a, G, O, I> {
    frontier: Frontier<'a, G, O>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator over the graph, visiting nodes in
/// breadth-first order from a given starting node.
pub type BFS<'a, G> = FrontierSearch<'a, G, BreadthFirst, Node>;

/// A DFS traversal iterator over the graph, visiting nodes in
/// depth-first order from a given starting node.
pub type DFS<'a, G> = FrontierSearch<'a, G, DepthFirst, Node>;

/// A BFS traversal iterator that also yields the predecessor of each node.
pub type BFSWithPredecessor<'a, G> = FrontierSearch<'a, G, BreadthFirst, NodeWithPredecessor>;

/// A DFS traversal iterator that also yields the predecessor of each node.
pub type DFSWithPredecessor<'a, G> = FrontierSearch<'a, G, DepthFirst, NodeWithPredecessor>;

impl<'a, G, O, I> FrontierSearch<'a, G, O, I>
where
    G: AdjacencyList,
    O: SearchOrder,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    pub fn new(graph: &'a G, start: Node) -> GraphResult<Self> {
        Ok(Frontier::new(graph, start)?.into())
    }

    /// Returns the underlying frontier
    pub fn frontier(&self) -> &Frontier<'a, G, O> {
        &self.frontier
    }
}

impl<'a, G, O, I> From<Frontier<'a, G, O>> for FrontierSearch<'a, G, O, I> {
    fn from(frontier: Frontier<'a, G, O>) -> Self {
        Self {
            frontier,
            _item: PhantomData,
        }
    }
}

impl<G, O, I> Iterator for FrontierSearch<'_, G, O, I>
where
    G: AdjacencyList,
    O: SearchOrder,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        self.frontier.step().map(I::from_entry)
    }
}

/// Abstraction for the pending nodes of a [`VisitedSetSearch`].
///
/// - [`VecDeque`] -> queue semantics -> **BFS**
/// - [`Vec`] -> stack semantics -> **DFS**
pub trait NodeSequencer {
    /// Creates a new sequencer initialized with a single node.
    fn init(u: Node) -> Self;

    /// Pushes a node into the sequencer.
    fn push(&mut self, u: Node);

    /// Removes and returns the next node.
    fn pop(&mut self) -> Option<Node>;
}

impl NodeSequencer for VecDeque<Node> {
    fn init(u: Node) -> Self {
        Self::from([u])
    }
    fn push(&mut self, u: Node) {
        self.push_back(u)
    }
    fn pop(&mut self) -> Option<Node> {
        self.pop_front()
    }
}

impl NodeSequencer for Vec<Node> {
    fn init(u: Node) -> Self {
        vec![u]
    }
    fn push(&mut self, u: Node) {
        Vec::push(self, u)
    }
    fn pop(&mut self) -> Option<Node> {
        Vec::pop(self)
    }
}

/// Alternate traversal primitive working on a plain visited-set.
///
/// A popped node is skipped if already visited; otherwise it is marked, yielded, and its
/// unvisited children are pushed. DFS pops from the tail of a stack, so it visits siblings
/// in reverse enumeration order just like [`DFS`].
///
/// For trees and DAGs the visiting order equals the one of [`FrontierSearch`], but
/// duplicates are only suppressed when popped instead of eagerly at the head, and there is
/// neither predecessor tracking nor step-wise control. [`FrontierSearch`] is the canonical
/// traversal; this one is kept as the simpler alternate.
pub struct VisitedSetSearch<'a, G, S> {
    graph: &'a G,
    visited: FixedBitSet,
    sequencer: S,
}

/// Breadth-first [`VisitedSetSearch`]
pub type VisitedSetBFS<'a, G> = VisitedSetSearch<'a, G, VecDeque<Node>>;

/// Depth-first [`VisitedSetSearch`]
pub type VisitedSetDFS<'a, G> = VisitedSetSearch<'a, G, Vec<Node>>;

impl<'a, G, S> VisitedSetSearch<'a, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    /// Creates a new traversal iterator starting from `start`.
    /// Fails with [`GraphError::InvalidId`] if `start` is not a valid node.
    pub fn new(graph: &'a G, start: Node) -> GraphResult<Self> {
        if !graph.is_valid(start) {
            return Err(GraphError::InvalidId(start));
        }

        Ok(Self {
            graph,
            visited: FixedBitSet::with_capacity(graph.number_of_slots() as usize),
            sequencer: S::init(start),
        })
    }
}

impl<G, S> Iterator for VisitedSetSearch<'_, G, S>
where
    G: AdjacencyList,
    S: NodeSequencer,
{
    type Item = Node;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let u = self.sequencer.pop()?;
            if self.visited.put(u as usize) {
                continue;
            }

            for v in self.graph.children_of(u) {
                if !self.visited.contains(v as usize) {
                    self.sequencer.push(v);
                }
            }

            return Some(u);
        }
    }
}

/// Traversal algorithms available as methods on every graph.
///
/// All constructors validate `start` immediately and fail with [`GraphError::InvalidId`]
/// instead of returning an iterator that fails later.
pub trait Traversal: AdjacencyList + Sized {
    /// Returns an iterator traversing nodes in breadth-first order, starting from `start`.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let mut graph = SparseGraph::<f64>::directed(5);
    /// for v in [2, 3, 4] {
    ///     graph.connect(1, v, 1.0).unwrap();
    /// }
    ///
    /// let order: Vec<_> = graph.bfs(1).unwrap().collect();
    /// assert_eq!(order, vec![1, 2, 3, 4]);
    /// ```
    fn bfs(&self, start: Node) -> GraphResult<BFS<'_, Self>> {
        FrontierSearch::new(self, start)
    }

    /// Returns an iterator traversing nodes in depth-first order, starting from `start`.
    ///
    /// # Example
    /// ```
    /// use wgraphs::{algo::*, prelude::*};
    ///
    /// let mut graph = DenseGraph::<f64>::directed(5);
    /// for v in [2, 3, 4] {
    ///     graph.connect(1, v, 1.0).unwrap();
    /// }
    ///
    /// let order: Vec<_> = graph.dfs(1).unwrap().collect();
    /// assert_eq!(order, vec![1, 4, 3, 2]);
    /// ```
    fn dfs(&self, start: Node) -> GraphResult<DFS<'_, Self>> {
        FrontierSearch::new(self, start)
    }

    /// Same order as [`Traversal::bfs`] but yields `(node, predecessor)`
    fn bfs_with_predecessor(&self, start: Node) -> GraphResult<BFSWithPredecessor<'_, Self>> {
        FrontierSearch::new(self, start)
    }

    /// Same order as [`Traversal::dfs`] but yields `(node, predecessor)`
    fn dfs_with_predecessor(&self, start: Node) -> GraphResult<DFSWithPredecessor<'_, Self>> {
        FrontierSearch::new(self, start)
    }

    /// Breadth-first [`VisitedSetSearch`] starting from `start`
    fn visited_set_bfs(&self, start: Node) -> GraphResult<VisitedSetBFS<'_, Self>> {
        VisitedSetSearch::new(self, start)
    }

    /// Depth-first [`VisitedSetSearch`] starting from `start`
    fn visited_set_dfs(&self, start: Node) -> GraphResult<VisitedSetDFS<'_, Self>> {
        VisitedSetSearch::new(self, start)
    }
}

impl<G> Traversal for G where G: AdjacencyList + Sized {}

#[cfg(test)]
pub mod tests {
    use super::*;
    use crate::repr::*;
    use itertools::Itertools;

    fn directed<S: StorageBackend<Weight = i32>>(n: NumNodes, edges: &[(Node, Node)]) -> Graph<S> {
        let mut graph = Graph::directed(n);
        for &(u, v) in edges {
            graph.set_weight(u, v, 1).unwrap();
        }
        graph
    }

    fn bfs_order<S: StorageBackend<Weight = i32>>() {
        let graph = directed::<S>(5, &[(1, 2), (1, 3), (1, 4)]);
        assert_eq!(graph.bfs(1).unwrap().collect_vec(), [1, 2, 3, 4]);

        let graph = directed::<S>(5, &[(1, 2), (1, 3), (2, 4)]);
        assert_eq!(graph.bfs(1).unwrap().collect_vec(), [1, 2, 3, 4]);

        //  / 2 --- \
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = directed::<S>(6, &[(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)]);
        assert_eq!(graph.bfs(1).unwrap().collect_vec(), [1, 0, 2, 5, 4, 3]);
        assert_eq!(graph.bfs(5).unwrap().collect_vec(), [5, 4, 3]);
    }

    #[test]
    fn bfs_order_dense() {
        bfs_order::<AdjMatrix<i32>>();
    }

    #[test]
    fn bfs_order_sparse() {
        bfs_order::<SparseAdjArray<i32>>();
    }

    fn dfs_order<S: StorageBackend<Weight = i32>>() {
        let graph = directed::<S>(5, &[(1, 2), (1, 3), (1, 4)]);
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), [1, 4, 3, 2]);

        let graph = directed::<S>(5, &[(1, 2), (1, 3), (3, 4)]);
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), [1, 3, 4, 2]);

        //  / 2
        // 1         4 - 3
        //  \ 0 - 5 /
        let graph = directed::<S>(6, &[(1, 2), (1, 0), (4, 3), (0, 5), (5, 4)]);
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), [1, 2, 0, 5, 4, 3]);
        assert_eq!(graph.dfs(5).unwrap().collect_vec(), [5, 4, 3]);
    }

    #[test]
    fn dfs_order_dense() {
        dfs_order::<AdjMatrix<i32>>();
    }

    #[test]
    fn dfs_order_sparse() {
        dfs_order::<SparseAdjArray<i32>>();
    }

    #[test]
    fn string_loop_and_dead_ends() {
        let graph = directed::<SparseAdjArray<i32>>(5, &[(0, 1), (1, 2), (2, 3)]);
        assert_eq!(graph.bfs(0).unwrap().collect_vec(), [0, 1, 2, 3]);
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), [0, 1, 2, 3]);

        let graph = directed::<SparseAdjArray<i32>>(5, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(graph.bfs(0).unwrap().collect_vec(), [0, 1, 2]);
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), [0, 1, 2]);
        assert_eq!(graph.bfs(2).unwrap().collect_vec(), [2, 0, 1]);

        let graph = directed::<SparseAdjArray<i32>>(5, &[(0, 1), (2, 1), (3, 1)]);
        assert_eq!(graph.bfs(1).unwrap().collect_vec(), [1]);
        assert_eq!(graph.dfs(1).unwrap().collect_vec(), [1]);
    }

    #[test]
    fn isolated_nodes() {
        let graph = DenseGraph::<i32>::directed(5);
        for u in 0..5 {
            assert_eq!(graph.bfs(u).unwrap().collect_vec(), [u]);
            assert_eq!(graph.dfs(u).unwrap().collect_vec(), [u]);
            assert_eq!(graph.visited_set_bfs(u).unwrap().collect_vec(), [u]);
        }
    }

    #[test]
    fn self_loop() {
        let graph = directed::<AdjMatrix<i32>>(3, &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(graph.bfs(0).unwrap().collect_vec(), [0, 1]);
        assert_eq!(graph.dfs(0).unwrap().collect_vec(), [0, 1]);
    }

    #[test]
    fn diamond_visits_once() {
        let graph = directed::<SparseAdjArray<i32>>(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);

        assert_eq!(
            graph.bfs_with_predecessor(0).unwrap().collect_vec(),
            [(0, None), (1, Some(0)), (2, Some(0)), (3, Some(1))]
        );
        assert_eq!(
            graph.dfs_with_predecessor(0).unwrap().collect_vec(),
            [(0, None), (2, Some(0)), (3, Some(2)), (1, Some(0))]
        );
    }

    #[test]
    fn predecessor_order_matches_plain() {
        let graph = directed::<AdjMatrix<i32>>(5, &[(1, 2), (1, 3), (1, 4)]);

        assert_eq!(
            graph.bfs_with_predecessor(1).unwrap().collect_vec(),
            [(1, None), (2, Some(1)), (3, Some(1)), (4, Some(1))]
        );
        assert_eq!(
            graph.dfs_with_predecessor(1).unwrap().collect_vec(),
            [(1, None), (4, Some(1)), (3, Some(1)), (2, Some(1))]
        );

        let items = graph.bfs_with_predecessor(1).unwrap().collect_vec();
        assert_eq!(
            items.iter().map(|x| x.item()).collect_vec(),
            graph.bfs(1).unwrap().collect_vec()
        );
        assert!(items[0].predecessor().is_none());
    }

    #[test]
    fn undirected() {
        let mut graph = SparseGraph::<i32>::undirected(4);
        graph.set_weight(1, 0, 1).unwrap();
        graph.set_weight(2, 1, 1).unwrap();
        graph.set_weight(0, 2, 1).unwrap();
        graph.set_weight(3, 2, 1).unwrap();

        assert_eq!(graph.bfs(3).unwrap().collect_vec(), [3, 2, 0, 1]);
        assert_eq!(graph.dfs(3).unwrap().collect_vec(), [3, 2, 1, 0]);
        assert_eq!(graph.bfs(0).unwrap().collect_vec(), [0, 1, 2, 3]);
    }

    #[test]
    fn invalid_start() {
        let mut graph = SparseGraph::<i32>::directed(4);
        graph.set_weight(0, 1, 1).unwrap();
        graph.remove_node(2).unwrap();

        for u in [2, 4, INVALID_NODE] {
            let err = Some(GraphError::InvalidId(u));
            assert_eq!(graph.bfs(u).err(), err);
            assert_eq!(graph.dfs(u).err(), err);
            assert_eq!(graph.bfs_with_predecessor(u).err(), err);
            assert_eq!(graph.dfs_with_predecessor(u).err(), err);
            assert_eq!(graph.visited_set_bfs(u).err(), err);
            assert_eq!(graph.visited_set_dfs(u).err(), err);
        }
    }

    #[test]
    fn start_from_handle() {
        let mut graph = DenseGraph::<i32>::directed(3);
        graph.connect(0, 2, 1).unwrap();
        let other = DenseGraph::<i32>::directed(3);

        let frontier =
            Frontier::<_, BreadthFirst>::from_handle(&graph, graph.node(0).unwrap()).unwrap();
        assert_eq!(BFS::from(frontier).collect_vec(), [0, 2]);

        let foreign = Frontier::<_, DepthFirst>::from_handle(&graph, other.node(0).unwrap());
        assert!(matches!(foreign, Err(GraphError::InvalidArgument(_))));
    }

    #[test]
    fn frontier_steps() {
        let graph = directed::<SparseAdjArray<i32>>(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut frontier = Frontier::<_, BreadthFirst>::new(&graph, 0).unwrap();

        assert_eq!(frontier.peek(), Some((0, None)));
        assert_eq!(frontier.len(), 1);
        frontier.advance().unwrap();
        assert!(frontier.did_reach(0));

        assert_eq!(frontier.peek(), Some((1, Some(0))));
        assert_eq!(frontier.len(), 2);
        frontier.remove().unwrap();
        assert!(frontier.did_reach(1));

        // 1 was removed, so 3 is only discovered through 2
        assert_eq!(frontier.peek(), Some((2, Some(0))));
        frontier.advance().unwrap();
        assert_eq!(frontier.peek(), Some((3, Some(2))));

        frontier.ignore().unwrap();
        assert!(!frontier.did_reach(3));
        assert!(frontier.is_exhausted());
        assert_eq!(frontier.peek(), None);

        let exhausted = Some(GraphError::PreconditionViolation("frontier is exhausted"));
        assert_eq!(frontier.advance().err(), exhausted);
        assert_eq!(frontier.remove().err(), exhausted);
        assert_eq!(frontier.ignore().err(), exhausted);
    }

    #[test]
    fn ignored_nodes_can_be_rediscovered() {
        let graph = directed::<AdjMatrix<i32>>(3, &[(0, 1), (0, 2), (2, 1)]);

        let mut frontier = Frontier::<_, BreadthFirst>::new(&graph, 0).unwrap();
        frontier.advance().unwrap();
        assert_eq!(frontier.peek(), Some((1, Some(0))));
        frontier.ignore().unwrap();
        frontier.advance().unwrap();
        assert_eq!(frontier.peek(), Some((1, Some(2))));

        let mut frontier = Frontier::<_, BreadthFirst>::new(&graph, 0).unwrap();
        frontier.advance().unwrap();
        frontier.remove().unwrap();
        frontier.advance().unwrap();
        assert!(frontier.is_exhausted());
    }

    #[test]
    fn reached_duplicates_are_discarded_at_head() {
        let graph = directed::<AdjMatrix<i32>>(4, &[(0, 1), (0, 2), (1, 3), (2, 3)]);
        let mut frontier = Frontier::<_, BreadthFirst>::new(&graph, 0).unwrap();

        frontier.advance().unwrap();
        frontier.advance().unwrap();
        frontier.advance().unwrap();
        // 3 was discovered twice
        assert_eq!(frontier.len(), 2);
        assert_eq!(frontier.peek(), Some((3, Some(1))));

        frontier.advance().unwrap();
        assert!(frontier.is_exhausted());
    }

    #[test]
    fn visited_set_agrees_on_dags() {
        let dags: [&[(Node, Node)]; 4] = [
            &[(1, 2), (1, 3), (1, 4)],
            &[(1, 2), (1, 3), (3, 4)],
            &[(0, 1), (0, 2), (1, 3), (2, 3)],
            &[(1, 2), (1, 0), (4, 3), (0, 5), (2, 4), (5, 4)],
        ];

        for edges in dags {
            let graph = directed::<SparseAdjArray<i32>>(6, edges);
            for u in graph.vertices() {
                assert_eq!(
                    graph.visited_set_bfs(u).unwrap().collect_vec(),
                    graph.bfs(u).unwrap().collect_vec()
                );
                assert_eq!(
                    graph.visited_set_dfs(u).unwrap().collect_vec(),
                    graph.dfs(u).unwrap().collect_vec()
                );
            }
        }

        let cycle = directed::<SparseAdjArray<i32>>(3, &[(0, 1), (1, 2), (2, 0)]);
        assert_eq!(cycle.visited_set_bfs(0).unwrap().collect_vec(), [0, 1, 2]);
        assert_eq!(cycle.visited_set_dfs(1).unwrap().collect_vec(), [1, 2, 0]);
    }
}
