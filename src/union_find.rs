//! Disjoint-set (union-find) over the linear indices of grid cells.
//!
//! The structure only ever merges: `unify` attaches one root beneath
//! another, so `find` cannot cycle and `component_count` is monotonically
//! decreasing. Union-by-size keeps the trees shallow and path compression
//! flattens them further on every lookup, making `find` near-constant
//! amortized.

use error_chain::bail;

use crate::errors::{ErrorKind, Result};

#[derive(Debug, Clone)]
pub struct DisjointSet {
    parent: Vec<usize>,
    component_size: Vec<usize>,
    components: usize,
}

impl DisjointSet {
    /// Creates `size` singleton sets. Zero elements is an invalid argument.
    pub fn new(size: usize) -> Result<DisjointSet> {
        if size == 0 {
            bail!(ErrorKind::InvalidArgument("disjoint set size must be greater than zero".into()));
        }
        Ok(DisjointSet {
            parent: (0..size).collect(),
            component_size: vec![1; size],
            components: size,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// The number of distinct sets remaining.
    #[inline]
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// The representative id of the set containing `p`.
    ///
    /// After the root is located every node on the walked path is relinked
    /// directly to it, so repeat lookups get cheaper.
    pub fn find(&mut self, p: usize) -> Result<usize> {
        self.check_bounds(p)?;

        let mut root = p;
        while root != self.parent[root] {
            root = self.parent[root];
        }

        let mut walk = p;
        while walk != root {
            let next = self.parent[walk];
            self.parent[walk] = root;
            walk = next;
        }

        Ok(root)
    }

    /// Do `p` and `q` belong to the same set?
    pub fn connected(&mut self, p: usize, q: usize) -> Result<bool> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// The size of the component containing `p`.
    pub fn component_size_of(&mut self, p: usize) -> Result<usize> {
        let root = self.find(p)?;
        Ok(self.component_size[root])
    }

    /// Merges the sets containing `p` and `q`. A no-op when they are
    /// already connected, otherwise the smaller component's root is
    /// attached under the larger's (ties attach q's root under p's root)
    /// and the component count drops by one.
    pub fn unify(&mut self, p: usize, q: usize) -> Result<()> {
        let root_p = self.find(p)?;
        let root_q = self.find(q)?;

        if root_p == root_q {
            return Ok(());
        }

        if self.component_size[root_p] < self.component_size[root_q] {
            self.component_size[root_q] += self.component_size[root_p];
            self.parent[root_p] = root_q;
        } else {
            self.component_size[root_p] += self.component_size[root_q];
            self.parent[root_q] = root_p;
        }

        self.components -= 1;
        Ok(())
    }

    fn check_bounds(&self, p: usize) -> Result<()> {
        if p >= self.parent.len() {
            bail!(ErrorKind::OutOfRange(p, self.parent.len()));
        }
        Ok(())
    }
}
