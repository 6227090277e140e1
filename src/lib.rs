//! Parsimonious removal of samples with missing data from distance matrices.
//!
//! Pairwise genetic distances produced by variant-calling pipelines may be
//! undefined for some sample pairs, and downstream tools (clustering,
//! phylogenetics) require a complete matrix. This library greedily removes
//! the sample row/column with the most missing entries, recounting after
//! each removal, until no missing entries remain.
//!
//! The library is organized into small modules:
//!
//! - **data**: the [`data::DistMatrix`] structure and .dst file I/O
//! - **filter**: missing-data counting and the greedy elimination loop
//! - **profile**: missingness diagnostics
//!
//! # Example
//!
//! ```no_run
//! use distmat_prune::prelude::*;
//!
//! let mut matrix = DistMatrix::from_dst("dist.dst").unwrap();
//! let summary = eliminate_missing(&mut matrix, DEFAULT_NA_TOKEN).unwrap();
//! println!("{}", summary);
//! matrix.to_dst("filtered_dist_mat.dst").unwrap();
//! ```

pub mod data;
pub mod error;
pub mod filter;
pub mod profile;

/// Convenient re-exports for common usage.
pub mod prelude {
    pub use crate::data::DistMatrix;
    pub use crate::error::{PruneError, Result};
    pub use crate::filter::{
        count_missing, eliminate_missing, EliminationSummary, RemovalRecord, DEFAULT_NA_TOKEN,
    };
    pub use crate::profile::{profile_missingness, MissingnessProfile};
}
