//! Site percolation on an N×N grid.
//!
//! Sites are addressed with 1-based (row, col) coordinates. Internally each
//! site maps to the flat index `(row - 1) * n + (col - 1)`, and two virtual
//! sites sit past the real ones: `n²` above the top row and `n² + 1` below the
//! bottom row. Both virtual sites are always open, so the grid percolates
//! exactly when they share a component.

use crate::error::{PercolationError, Result};
use crate::union_find::UnionFind;

/// An N×N grid of open/blocked sites with incremental connectivity.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    /// Grid side length.
    n: usize,
    /// Open flags for the `n²` real sites followed by the two virtual sites.
    open: Vec<bool>,
    /// Real sites opened so far.
    open_sites: usize,
    /// Components over all `n² + 2` sites.
    components: UnionFind,
    virtual_top: usize,
    virtual_bottom: usize,
}

impl PercolationGrid {
    /// Create an `n`-by-`n` grid with every real site blocked.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(PercolationError::invalid("grid size", n));
        }

        // n² real sites plus the two virtual ones must fit in usize
        let Some(sites) = n.checked_mul(n).filter(|s| s.checked_add(2).is_some()) else {
            return Err(PercolationError::invalid("grid size", n));
        };
        let mut open = vec![false; sites + 2];
        open[sites] = true;
        open[sites + 1] = true;

        Ok(Self {
            n,
            open,
            open_sites: 0,
            components: UnionFind::new(sites + 2),
            virtual_top: sites,
            virtual_bottom: sites + 1,
        })
    }

    /// Grid side length.
    pub fn size(&self) -> usize {
        self.n
    }

    /// Number of real sites that have been opened.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Open the site at (row, col) and join it to its open neighbors.
    ///
    /// Opening an already open site changes nothing.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let site = self.index(row, col)?;
        if self.open[site] {
            return Ok(());
        }
        self.open[site] = true;
        self.open_sites += 1;

        // 0-based from here on
        let (r, c) = (row - 1, col - 1);
        let last = self.n - 1;

        // A 1×1 grid hits both branches.
        if r == 0 {
            self.union_if_open(site, self.virtual_top);
        }
        if r == last {
            self.union_if_open(site, self.virtual_bottom);
        }

        if r > 0 {
            self.union_if_open(site, site - self.n);
        }
        if r < last {
            self.union_if_open(site, site + self.n);
        }
        if c > 0 {
            self.union_if_open(site, site - 1);
        }
        if c < last {
            self.union_if_open(site, site + 1);
        }

        Ok(())
    }

    /// Whether the site at (row, col) is open.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        Ok(self.open[site])
    }

    /// Whether the site at (row, col) is connected to the top row.
    ///
    /// Both virtual sites live in one union-find, so once the grid percolates
    /// an open site that only reaches the bottom row also reports full
    /// ("backwash"). Thresholds depend only on [`percolates`](Self::percolates)
    /// and are unaffected.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool> {
        let site = self.index(row, col)?;
        Ok(self.components.connected(site, self.virtual_top))
    }

    /// Whether an open path runs from the top row to the bottom row.
    pub fn percolates(&self) -> bool {
        self.components
            .connected(self.virtual_top, self.virtual_bottom)
    }

    fn union_if_open(&mut self, site: usize, neighbor: usize) {
        if self.open[neighbor] {
            self.components.union(site, neighbor);
        }
    }

    /// Validate 1-based coordinates and map them to a flat index.
    fn index(&self, row: usize, col: usize) -> Result<usize> {
        if !(1..=self.n).contains(&row) || !(1..=self.n).contains(&col) {
            return Err(PercolationError::IndexOutOfRange {
                row,
                col,
                size: self.n,
            });
        }
        Ok((row - 1) * self.n + (col - 1))
    }
}
