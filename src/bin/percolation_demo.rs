//! Opens a fixed sequence of sites on a 3×3 grid and reports the result.
//!
//! Run with: cargo run --bin percolation-demo

use u_percolation::{Percolation, PercolationError};

const SITES: [(usize, usize); 5] = [(1, 2), (2, 1), (2, 2), (2, 3), (3, 3)];

fn main() -> Result<(), PercolationError> {
    let mut grid = Percolation::new(3)?;
    for (row, col) in SITES {
        grid.open(row, col)?;
    }

    println!("Open sites: {}", grid.number_of_open_sites());
    for (row, col) in [(1, 2), (2, 2), (3, 3)] {
        println!("Site ({row},{col}) is full: {}", grid.is_full(row, col)?);
    }
    println!("System percolates: {}", grid.percolates());
    println!();
    print!("{grid}");
    Ok(())
}
