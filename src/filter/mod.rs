//! Filtering primitives for distance matrices.

pub mod missing;

pub use missing::{count_missing, eliminate_missing, EliminationSummary, RemovalRecord, DEFAULT_NA_TOKEN};
