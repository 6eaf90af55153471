//! The n×n percolation grid.
//!
//! Sites start blocked and are opened one at a time. The system
//! *percolates* when an open path joins the top row to the bottom row; a
//! site is *full* when an open path joins it to the top row.
//!
//! # Algorithm
//!
//! Connectivity to an edge is reduced to connectivity to a single node by
//! two virtual sites: `top` (above row 1) and `bottom` (below row n). Two
//! union-find forests share the same site indexing:
//!
//! - `full` has both virtual sites and answers [`Percolation::percolates`].
//! - `top_only` has only the virtual top and answers
//!   [`Percolation::is_full`]. Without it, once the system percolates every
//!   open site touching the bottom row would look full through the virtual
//!   bottom ("backwash").
//!
//! Coordinates are 1-indexed on the public API and translated to 0-indexed
//! flat indices `row * n + col` at the boundary.

use std::fmt;

use derive_more::IsVariant;

use crate::collections::UnionFind;
use crate::error::{PercolationError, Result};

/// State of a single site. Transitions only `Blocked → Open`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum Site {
    Blocked,
    Open,
}

/// An n×n grid of sites with incremental percolation tracking.
///
/// # Examples
/// ```
/// use u_percolation::Percolation;
///
/// let mut p = Percolation::new(3)?;
/// p.open(1, 2)?;
/// p.open(2, 2)?;
/// assert!(!p.percolates());
/// p.open(3, 2)?;
/// assert!(p.percolates());
/// assert!(p.is_full(3, 2)?);
/// # Ok::<(), u_percolation::PercolationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Percolation {
    n: usize,
    sites: Vec<Site>,
    full: UnionFind,
    top_only: UnionFind,
    open_sites: usize,
    top: usize,
    bottom: usize,
}

impl Percolation {
    /// Creates an n×n grid with every site blocked.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`] if `n == 0`, or if the grid
    /// and its forests (`n² + 2` entries) cannot be indexed or allocated.
    pub fn new(n: usize) -> Result<Self> {
        let invalid = PercolationError::InvalidArgument { name: "n", value: n };
        if n == 0 {
            return Err(invalid);
        }
        let cells = n
            .checked_mul(n)
            .filter(|&cells| fits_allocation(cells, 2))
            .ok_or(invalid)?;

        let mut sites = Vec::new();
        sites.try_reserve_exact(cells).map_err(|_| invalid)?;
        sites.resize(cells, Site::Blocked);

        Ok(Self {
            n,
            sites,
            full: UnionFind::try_new(cells + 2).map_err(|_| invalid)?,
            top_only: UnionFind::try_new(cells + 1).map_err(|_| invalid)?,
            open_sites: 0,
            top: cells,
            bottom: cells + 1,
        })
    }

    /// Side length of the grid.
    pub fn grid_size(&self) -> usize {
        self.n
    }

    /// Total number of sites, n².
    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    /// Opens site `(row, col)` if it is not open already.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfBounds`] if either coordinate is
    /// outside `[1, n]`. Nothing is mutated in that case.
    pub fn open(&mut self, row: usize, col: usize) -> Result<()> {
        let (r, c) = self.validate(row, col)?;
        let site = self.index(r, c);
        if self.sites[site].is_open() {
            return Ok(());
        }

        self.sites[site] = Site::Open;
        self.open_sites += 1;

        if r == 0 {
            self.full.union(site, self.top);
            self.top_only.union(site, self.top);
        }
        if r == self.n - 1 {
            self.full.union(site, self.bottom);
        }

        // up, down, left, right
        if r > 0 {
            self.connect_if_open(site, r - 1, c);
        }
        if r + 1 < self.n {
            self.connect_if_open(site, r + 1, c);
        }
        if c > 0 {
            self.connect_if_open(site, r, c - 1);
        }
        if c + 1 < self.n {
            self.connect_if_open(site, r, c + 1);
        }
        Ok(())
    }

    /// Is site `(row, col)` open?
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfBounds`] on a bad coordinate.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool> {
        let (r, c) = self.validate(row, col)?;
        Ok(self.sites[self.index(r, c)].is_open())
    }

    /// Is site `(row, col)` connected to the top row through open sites?
    ///
    /// Never reports a site full through the virtual bottom.
    ///
    /// # Errors
    /// [`PercolationError::IndexOutOfBounds`] on a bad coordinate.
    pub fn is_full(&mut self, row: usize, col: usize) -> Result<bool> {
        let (r, c) = self.validate(row, col)?;
        let site = self.index(r, c);
        if self.sites[site].is_blocked() {
            return Ok(false);
        }
        Ok(self.top_only.connected(site, self.top))
    }

    /// Number of open sites.
    pub fn number_of_open_sites(&self) -> usize {
        self.open_sites
    }

    /// Fraction of sites that are open, in `[0, 1]`.
    pub fn open_fraction(&self) -> f64 {
        self.open_sites as f64 / self.sites.len() as f64
    }

    /// Does the system percolate?
    ///
    /// Recomputed from the forest on every call.
    pub fn percolates(&mut self) -> bool {
        // A lone site is joined to both virtual sites at once, so the
        // forest cannot tell "open" from "percolating" apart here.
        if self.n == 1 {
            return self.sites[0].is_open();
        }
        self.full.connected(self.top, self.bottom)
    }

    /// Translates a 1-indexed coordinate to a 0-indexed one.
    fn validate(&self, row: usize, col: usize) -> Result<(usize, usize)> {
        let in_range = |x: usize| (1..=self.n).contains(&x);
        if !in_range(row) || !in_range(col) {
            return Err(PercolationError::IndexOutOfBounds { row, col, n: self.n });
        }
        Ok((row - 1, col - 1))
    }

    fn index(&self, r: usize, c: usize) -> usize {
        r * self.n + c
    }

    fn connect_if_open(&mut self, site: usize, r: usize, c: usize) {
        let neighbor = self.index(r, c);
        if self.sites[neighbor].is_open() {
            self.full.union(site, neighbor);
            self.top_only.union(site, neighbor);
        }
    }
}

/// Whether `cells + extra` forest entries stay within the largest
/// allocation a `Vec<usize>` may request.
fn fits_allocation(cells: usize, extra: usize) -> bool {
    cells
        .checked_add(extra)
        .and_then(|len| len.checked_mul(std::mem::size_of::<usize>()))
        .is_some_and(|bytes| bytes <= isize::MAX as usize)
}

/// Renders the grid one row per line: `#` blocked, `o` open, `*` full.
impl fmt::Display for Percolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display only has `&self`; work on a copy of the forest so the
        // roots can be compressed.
        let mut top_only = self.top_only.clone();
        for r in 0..self.n {
            for c in 0..self.n {
                let site = self.index(r, c);
                let glyph = if self.sites[site].is_blocked() {
                    '#'
                } else if top_only.connected(site, self.top) {
                    '*'
                } else {
                    'o'
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
