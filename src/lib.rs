//! # u-percolation
//!
//! Site percolation on an n×n grid and Monte Carlo estimation of its
//! percolation threshold.
//!
//! ## Modules
//!
//! - [`percolation`] — the grid model: open sites, fullness, percolation
//! - [`percolation_stats`] — repeated randomized trials and their summary
//! - [`collections`] — weighted quick-union with path compression
//! - [`random`] — seeded generators and uniform blocked-site selection
//! - [`stats`] — mean, sample standard deviation, confidence intervals
//! - [`config`] — experiment parameters
//!
//! ## Design Philosophy
//!
//! - **Backwash-free fullness**: two union-find forests, only one of which
//!   links to the virtual bottom
//! - **Injectable randomness**: every experiment can be replayed from a seed
//! - **Property-based testing**: connectivity checked against breadth-first
//!   search via proptest

pub mod collections;
pub mod config;
pub mod error;
pub mod percolation;
pub mod percolation_stats;
pub mod random;
pub mod stats;

pub use config::ExperimentConfig;
pub use error::{PercolationError, Result};
pub use percolation::{Percolation, Site};
pub use percolation_stats::PercolationStats;
