//! Estimate the percolation threshold of an n×n grid.
//!
//! Usage:
//!   percolation-stats 200 100            200×200 grid, 100 trials
//!   percolation-stats 200 100 --seed 7   reproducible run
//!   percolation-stats 200 100 --verbose  timing and threshold range on stderr
//!
//! Only the three result lines go to stdout.

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use u_percolation::stats::min_max;
use u_percolation::{ExperimentConfig, PercolationStats};

#[derive(Parser)]
#[command(name = "percolation-stats")]
#[command(about = "Monte Carlo estimate of the site percolation threshold")]
struct Args {
    /// Grid side length
    n: usize,

    /// Number of independent trials
    trials: usize,

    /// Random seed (default: drawn from OS entropy)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report timing and threshold range on stderr
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn config(&self) -> ExperimentConfig {
        ExperimentConfig {
            grid_size: self.n,
            trials: self.trials,
            seed: self.seed,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    let config = args.config();

    let t0 = Instant::now();
    let stats = match PercolationStats::run(&config) {
        Ok(stats) => stats,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let elapsed_ms = t0.elapsed().as_secs_f64() * 1000.0;

    println!("{stats}");

    if args.verbose {
        eprintln!(
            "{} trials on a {}x{} grid in {:.1} ms ({:.3} ms/trial)",
            stats.trials(),
            stats.grid_size(),
            stats.grid_size(),
            elapsed_ms,
            elapsed_ms / stats.trials() as f64
        );
        if let Some((lo, hi)) = min_max(stats.thresholds()) {
            eprintln!("threshold range         = [{lo:.6}, {hi:.6}]");
        }
    }
    ExitCode::SUCCESS
}
