use std::ops::Index;

use num::Zero;

use super::*;

/// Representation using a dense `n x n` weight table (row-major, row = source).
///
/// # Cost
/// Growing or shrinking by one slot reallocates and copies the whole table, i.e.
/// `add_node` and `remove` take `O(n^2)` time. Prefer [`SparseAdjArray`] for
/// graphs that change size often.
#[derive(Clone, Debug)]
pub struct AdjMatrix<W> {
    n: NumNodes,
    weights: Vec<W>,
}

impl<W: Weight> AdjMatrix<W> {
    fn offset(&self, u: Node, v: Node) -> usize {
        u as usize * self.n as usize + v as usize
    }

    fn row(&self, u: Node) -> &[W] {
        let begin = self.offset(u, 0);
        &self.weights[begin..begin + self.n as usize]
    }

    /// Moves the top-left square shared by both sizes into a fresh table
    fn resize(&mut self, new_n: NumNodes) {
        let keep = self.n.min(new_n) as usize;
        let mut weights = vec![W::zero(); new_n as usize * new_n as usize];

        for u in 0..keep {
            let src = u * self.n as usize;
            let dst = u * new_n as usize;
            weights[dst..dst + keep].copy_from_slice(&self.weights[src..src + keep]);
        }

        self.n = new_n;
        self.weights = weights;
    }
}

impl<W: Weight> StorageBackend for AdjMatrix<W> {
    type Weight = W;

    fn new(n: NumNodes) -> Self {
        Self {
            n,
            weights: vec![W::zero(); n as usize * n as usize],
        }
    }

    fn number_of_slots(&self) -> NumNodes {
        self.n
    }

    fn get(&self, u: Node, v: Node) -> GraphResult<W> {
        self.check_id(u)?;
        self.check_id(v)?;
        Ok(self.weights[self.offset(u, v)])
    }

    fn set(&mut self, u: Node, v: Node, weight: W) -> GraphResult<()> {
        self.check_id(u)?;
        self.check_id(v)?;
        let idx = self.offset(u, v);
        self.weights[idx] = weight;
        Ok(())
    }

    fn add_node(&mut self) -> Node {
        let u = self.n;
        self.resize(u + 1);
        u
    }

    fn remove(&mut self) -> GraphResult<Node> {
        let u = self
            .n
            .checked_sub(1)
            .ok_or(GraphError::PreconditionViolation("cannot remove from an empty storage"))?;
        self.resize(u);
        Ok(u)
    }

    fn zero(&mut self, u: Node) -> GraphResult<()> {
        self.check_id(u)?;

        let n = self.n as usize;
        let begin = self.offset(u, 0);
        self.weights[begin..begin + n].fill(W::zero());
        for row in self.weights.chunks_exact_mut(n) {
            row[u as usize] = W::zero();
        }

        Ok(())
    }

    fn children(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        self.check_id(u)?;
        Ok(self
            .row(u)
            .iter()
            .enumerate()
            .filter_map(|(v, w)| (!w.is_zero()).then_some(v as Node)))
    }

    fn parents(&self, u: Node) -> GraphResult<impl Iterator<Item = Node> + '_> {
        self.check_id(u)?;
        Ok((0..self.n).filter(move |&v| !self.weights[self.offset(v, u)].is_zero()))
    }
}

/// `matrix[(u, v)]` or `matrix[u..v]`
///
/// ** Panics if `u >= n || v >= n` **
impl<W: Weight, E: Into<Edge>> Index<E> for AdjMatrix<W> {
    type Output = W;

    fn index(&self, index: E) -> &W {
        let Edge(u, v) = index.into();
        if let Err(err) = self.check_id(u).and(self.check_id(v)) {
            panic!("{err}");
        }
        &self.weights[self.offset(u, v)]
    }
}

crate::testing::test_storage_backend!(test_adj_matrix, AdjMatrix<i32>);
