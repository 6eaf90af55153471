//! Random number generation and random site selection.
//!
//! # Reproducibility
//!
//! For reproducible experiments, use [`create_rng`] with a fixed seed.
//! The underlying algorithm (SmallRng) is deterministic for a given seed
//! on the same platform.

use rand::Rng;

use crate::Percolation;

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use u_percolation::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> rand::rngs::SmallRng {
    use rand::SeedableRng;
    rand::rngs::SmallRng::seed_from_u64(seed)
}

/// Draws an integer uniformly from the inclusive range `[lo, hi]`.
///
/// # Panics
/// Panics if `lo > hi`.
///
/// # Examples
/// ```
/// use u_percolation::random::{create_rng, uniform_int};
/// let mut rng = create_rng(7);
/// let x = uniform_int(1, 6, &mut rng);
/// assert!((1..=6).contains(&x));
/// ```
pub fn uniform_int<R: Rng>(lo: usize, hi: usize, rng: &mut R) -> usize {
    rng.random_range(lo..=hi)
}

/// Picks a blocked site of `grid`, as a 1-indexed `(row, col)`.
///
/// # Algorithm
/// Rejection sampling: draw row and column uniformly from `[1, n]` and
/// redraw while the site is open. Each blocked site is equally likely.
/// Expected draws are `n² / blocked`.
///
/// # Returns
/// - `None` if every site is already open.
///
/// # Examples
/// ```
/// use u_percolation::Percolation;
/// use u_percolation::random::{create_rng, random_blocked_site};
/// let mut grid = Percolation::new(2)?;
/// grid.open(1, 1)?;
/// let mut rng = create_rng(1);
/// let (row, col) = random_blocked_site(&grid, &mut rng).unwrap();
/// assert!(!grid.is_open(row, col)?);
/// # Ok::<(), u_percolation::PercolationError>(())
/// ```
pub fn random_blocked_site<R: Rng>(
    grid: &Percolation,
    rng: &mut R,
) -> Option<(usize, usize)> {
    if grid.number_of_open_sites() == grid.site_count() {
        return None;
    }
    let n = grid.grid_size();
    loop {
        let row = uniform_int(1, n, rng);
        let col = uniform_int(1, n, rng);
        if let Ok(false) = grid.is_open(row, col) {
            return Some((row, col));
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
