use std::ops::Index;

use num::Zero;
use smallvec::SmallVec;

use super::*;

/// Outgoing weights of a single node, sorted by neighbor.
/// Entries never carry a zero weight.
#[derive(Clone, Debug, Default)]
pub struct SparseNeighborhood<W>(SmallVec<[(Node, W); 8]>);

impl<W: Weight> SparseNeighborhood<W> {
    fn position(&self, v: Node) -> Result<usize, usize> {
        self.0.binary_search_by_key(&v, |&(x, _)| x)
    }

    /// Returns the weight towards `v` if there is an edge
    pub fn weight_to(&self, v: Node) -> Option<&W> {
        self.position(v).ok().map(|pos| &self.0[pos].1)
    }

    /// Inserts, overwrites or (for zero) removes the entry of `v`
    fn set(&mut self, v: Node, weight: W) {
        match (self.position(v), weight.is_zero()) {
            (Ok(pos), true) => {
                self.0.remove(pos);
            }
            (Ok(pos), false) => self.0[pos].1 = weight,
            (Err(_), true) => {}
            (Err(pos), false) => self.0.insert(pos, (v, weight)),
        }
    }

    /// Removes the entry of `v` if there is one
    fn forget(&mut self, v: Node) {
        if let Ok(pos) = self.position(v) {
            self.0.remove(pos);
        }
    }

    /// Returns the number of neighbors
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns *true* if there is no outgoing edge
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all neighbors in ascending order
    pub fn neighbors(&self) -> impl Iterator<Item = Node> + '_ {
        self.0.iter().map(|&(v, _)| v)
    }
}

/// Representation using one sorted `neighbor -> weight` map per node.
///
/// Growing and shrinking only push/pop a map, but removing or zeroing a node has to
/// scan the maps of all nodes to purge entries pointing at it, i.e. takes `O(n)`.
#[derive(Clone, Debug)]
pub struct SparseAdjArray<W> {
    nbs: Vec<SparseNeighborhood<W>>,
    zero: W,
}

impl<W: Weight> SparseAdjArray<W> {
    /// Returns the outgoing weights of `u`
    pub fn neighborhood(&self, u: Node) -> GraphResult<&SparseNeighborhood<W>> {
        self.check_id(u)?;
        Ok(&self.nbs[u as usize])
    }

    fn weight_ref(&self, u: Node, v: Node) -> &W {
        self.nbs[u as usize].weight_to(v).unwrap_or(&self.zero)
    }

    fn purge(&mut self, v: Node) {
        for nbs in &mut self.nbs {
            nbs.forget(v);
        }
    }
}

impl<W: Weight> StorageBackend for SparseAdjArray<W> {
    type Weight = W;

    fn new(n: NumNodes) -> Self {
        Self {
            nbs: vec![SparseNeighborhood(SmallVec::new()); n as usize],
            zero: W::zero(),
        }
    }

    fn number_of_slots(&self) -> NumNodes {
        self.nbs.len() as NumNodes
    }

    fn get(&self, u: Node, v: Node) -> GraphResult<W> {
        self.check_id(u)?;
        self.check_id(v)?;
        Ok(*self.weight_ref(u, v))
    }

    fn set(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()> {
        self.check_id(u)?;
        self.check_id(v)?;
        self.nbs[u as usize].set(v, weight);
        Ok(())
    }

    fn add_node(&mut self) -> Node {
        self.nbs.push(SparseNeighborhood(SmallVec::new()));
        self.number_of_slots() - 1
    }

    fn remove(&mut self) -> GraphResult<Node> {
        if self.nbs.pop().is_none() {
            return Err(GraphError::PreconditionViolation(
                "cannot remove from an empty storage",
            ));
        }

        let u = self.number_of_slots();
        self.purge(u);
        Ok(u)
    }

    fn zero(&mut self, u: Node) -> GraphResult<()> {
        self.check_id(u)?;
        self.nbs[u as usize].0.clear();
        self.purge(u);
        Ok(())
    }

    fn children(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        Ok(self.neighborhood(u)?.neighbors())
    }

    fn parents(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        self.check_id(u)?;
        Ok(self
            .nbs
            .iter()
            .enumerate()
            .filter_map(move |(v, nbs)| nbs.weight_to(u).map(|_| v as Node)))
    }
}

/// `storage[(u, v)]` or `storage[u..v]`
///
/// ** Panics if `u >= n || v >= n` **
impl<W: Weight, E: Into<Edge>> Index<E> for SparseAdjArray<W> {
    type Output = W;

    fn index(&self, index: E) -> &W {
        let Edge(u, v) = index.into();
        if let Err(err) = self.check_id(u).and(self.check_id(v)) {
            panic!("{err}");
        }
        self.weight_ref(u, v)
    }
}

crate::testing::test_storage_backend!(test_sparse_adj_array, SparseAdjArray<i32>);
