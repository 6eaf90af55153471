//! Monte Carlo estimation of the percolation threshold.
//!
//! Each trial starts from a fully blocked n×n grid and opens uniformly
//! random blocked sites until the system percolates; the fraction of open
//! sites at that moment is the trial's threshold. Over T trials the
//! estimator reports the sample mean, the sample standard deviation and a
//! 95% confidence interval for the mean.
//!
//! # Reproducibility
//!
//! One seed is drawn per trial from the caller's generator before any
//! trial runs, and each trial owns a generator built from its seed. The
//! thresholds therefore depend only on the caller's generator, not on
//! whether trials run one after another or (with the `parallel` feature)
//! on a rayon pool.

use std::fmt;

use rand::Rng;

use crate::config::ExperimentConfig;
use crate::error::Result;
use crate::random::{create_rng, random_blocked_site};
use crate::stats::{self, Z_95};
use crate::Percolation;

/// Summary of T independent percolation trials on an n×n grid.
///
/// All scalars are computed once at construction.
///
/// With a single trial the standard deviation is undefined, so
/// [`stddev`](Self::stddev), [`confidence_lo`](Self::confidence_lo) and
/// [`confidence_hi`](Self::confidence_hi) are NaN.
///
/// # Examples
/// ```
/// use u_percolation::PercolationStats;
///
/// let stats = PercolationStats::with_seed(20, 30, 42)?;
/// assert_eq!(stats.thresholds().len(), 30);
/// assert!(stats.confidence_lo() <= stats.mean());
/// assert!(stats.mean() <= stats.confidence_hi());
/// # Ok::<(), u_percolation::PercolationError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PercolationStats {
    grid_size: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
    confidence_lo: f64,
    confidence_hi: f64,
}

impl PercolationStats {
    /// Runs `trials` trials on an n×n grid with an entropy-seeded generator.
    ///
    /// # Errors
    /// [`PercolationError::InvalidArgument`](crate::PercolationError::InvalidArgument)
    /// if `n` or `trials` is zero, or an n×n grid cannot be allocated.
    pub fn new(n: usize, trials: usize) -> Result<Self> {
        Self::with_seed(n, trials, rand::random())
    }

    /// Runs the experiment from a fixed seed.
    pub fn with_seed(n: usize, trials: usize, seed: u64) -> Result<Self> {
        Self::with_rng(n, trials, &mut create_rng(seed))
    }

    /// Runs the experiment described by `config`.
    pub fn run(config: &ExperimentConfig) -> Result<Self> {
        match config.seed {
            Some(seed) => Self::with_seed(config.grid_size, config.trials, seed),
            None => Self::new(config.grid_size, config.trials),
        }
    }

    /// Runs the experiment, deriving every trial's randomness from `rng`.
    pub fn with_rng<R: Rng>(n: usize, trials: usize, rng: &mut R) -> Result<Self> {
        ExperimentConfig::new(n, trials).validate()?;

        let seeds: Vec<u64> = (0..trials).map(|_| rng.random()).collect();
        let thresholds = run_trials(n, &seeds)?;
        Ok(Self::from_thresholds(n, thresholds))
    }

    fn from_thresholds(grid_size: usize, thresholds: Vec<f64>) -> Self {
        let mean = stats::mean(&thresholds).unwrap_or(f64::NAN);
        let stddev = stats::std_dev(&thresholds).unwrap_or(f64::NAN);
        let (confidence_lo, confidence_hi) =
            stats::confidence_interval(mean, stddev, thresholds.len(), Z_95);
        Self {
            grid_size,
            thresholds,
            mean,
            stddev,
            confidence_lo,
            confidence_hi,
        }
    }

    /// Sample mean of the percolation threshold.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the percolation threshold (T − 1
    /// denominator). NaN when there is a single trial.
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval.
    pub fn confidence_lo(&self) -> f64 {
        self.confidence_lo
    }

    /// High endpoint of the 95% confidence interval.
    pub fn confidence_hi(&self) -> f64 {
        self.confidence_hi
    }

    /// Per-trial thresholds, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }
}

impl fmt::Display for PercolationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "mean                    = {:.6}", self.mean)?;
        writeln!(f, "stddev                  = {:.6}", self.stddev)?;
        write!(
            f,
            "95% confidence interval = [{:.6}, {:.6}]",
            self.confidence_lo, self.confidence_hi
        )
    }
}

/// Runs one trial: opens random blocked sites of a fresh n×n grid until it
/// percolates, and returns the fraction of sites open at that point.
///
/// # Errors
/// [`PercolationError::InvalidArgument`](crate::PercolationError::InvalidArgument)
/// if `n` is zero or the grid cannot be allocated.
///
/// # Examples
/// ```
/// use u_percolation::percolation_stats::run_trial;
/// use u_percolation::random::create_rng;
///
/// let threshold = run_trial(10, &mut create_rng(5))?;
/// assert!(threshold >= 0.1 && threshold <= 1.0);
/// # Ok::<(), u_percolation::PercolationError>(())
/// ```
pub fn run_trial<R: Rng>(n: usize, rng: &mut R) -> Result<f64> {
    let mut grid = Percolation::new(n)?;
    while !grid.percolates() {
        let (row, col) = random_blocked_site(&grid, rng)
            .expect("a grid that does not percolate has a blocked site");
        grid.open(row, col)?;
    }
    Ok(grid.open_fraction())
}

#[cfg(not(feature = "parallel"))]
fn run_trials(n: usize, seeds: &[u64]) -> Result<Vec<f64>> {
    seeds
        .iter()
        .map(|&seed| run_trial(n, &mut create_rng(seed)))
        .collect()
}

#[cfg(feature = "parallel")]
fn run_trials(n: usize, seeds: &[u64]) -> Result<Vec<f64>> {
    use rayon::prelude::*;

    seeds
        .par_iter()
        .map(|&seed| run_trial(n, &mut create_rng(seed)))
        .collect()
}
