//! Array-backed collections used by the percolation model.

mod union_find;

pub use union_find::UnionFind;
