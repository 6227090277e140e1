//! Greedy elimination of samples with missing distance data.
//!
//! Pairwise distance pipelines can leave some sample pairs without a defined
//! distance. Downstream clustering and phylogenetics tools require a complete
//! matrix, so the samples responsible for the gaps have to go. The policy
//! here is greedy and parsimonious: repeatedly drop the sample whose row
//! holds the most missing entries, recounting after each removal, until no
//! missing entries remain. This does not guarantee a minimum-removal
//! solution.

use crate::data::DistMatrix;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Default missing-value token: `nan` padded to the fixed cell width used by
/// nei_vcf output. Matched literally, trailing spaces included.
pub const DEFAULT_NA_TOKEN: &str = "nan     ";

/// One sample removal, in removal order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemovalRecord {
    /// Row index the sample had in the matrix as loaded.
    pub sample_index: usize,
    /// Sample label, for display.
    pub label: String,
    /// Missing entries in the sample's row at the time it was removed.
    pub n_missing: usize,
}

/// Outcome of an elimination run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EliminationSummary {
    /// Number of samples before elimination.
    pub n_before: usize,
    /// Number of samples after elimination.
    pub n_after: usize,
    /// Number of samples removed.
    pub n_removed: usize,
    /// Proportion of samples retained.
    pub retention_rate: f64,
    /// Removals in the order they happened.
    pub removals: Vec<RemovalRecord>,
}

impl std::fmt::Display for EliminationSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Elimination Result")?;
        writeln!(f, "  Before:    {} samples", self.n_before)?;
        writeln!(f, "  After:     {} samples", self.n_after)?;
        writeln!(f, "  Removed:   {} samples", self.n_removed)?;
        writeln!(f, "  Retained:  {:.1}%", self.retention_rate * 100.0)?;
        Ok(())
    }
}

/// Count missing entries per sample.
///
/// Returns one count per currently-present row: the number of distance cells
/// in that row exactly equal to `na_token`. Comparison is literal, with no
/// trimming, so a fixed-width sentinel like `"nan     "` only matches cells
/// that carry the same trailing whitespace.
pub fn count_missing(matrix: &DistMatrix, na_token: &str) -> Vec<usize> {
    (0..matrix.n_samples())
        .map(|row| {
            matrix
                .row(row)
                .iter()
                .filter(|cell| cell.as_str() == na_token)
                .count()
        })
        .collect()
}

/// Remove samples with missing data until the matrix is clean.
///
/// Each iteration recounts missing entries against the current matrix state
/// (a removal can zero out counts elsewhere: the removed sample's column no
/// longer contributes sentinels to other rows), removes the row and column of
/// the worst offender, and repeats. Ties for the maximum go to the lowest
/// current row index. Stops when no row has a missing entry, in the worst
/// case with an empty matrix.
///
/// The matrix is mutated in place; the returned summary logs each removal
/// with the sample's original row index and label.
pub fn eliminate_missing(matrix: &mut DistMatrix, na_token: &str) -> Result<EliminationSummary> {
    let n_before = matrix.n_samples();
    // current row position -> original sample index
    let mut original_index: Vec<usize> = (0..n_before).collect();
    let mut removals: Vec<RemovalRecord> = Vec::new();

    loop {
        let counts = count_missing(matrix, na_token);

        let mut worst_idx = 0;
        let mut worst_count = 0;
        for (idx, &count) in counts.iter().enumerate() {
            if count > worst_count {
                worst_idx = idx;
                worst_count = count;
            }
        }
        if worst_count == 0 {
            break;
        }

        removals.push(RemovalRecord {
            sample_index: original_index[worst_idx],
            label: matrix.labels()[worst_idx].clone(),
            n_missing: worst_count,
        });
        matrix.remove_sample(worst_idx)?;
        original_index.remove(worst_idx);
    }

    let n_after = matrix.n_samples();
    Ok(EliminationSummary {
        n_before,
        n_after,
        n_removed: n_before - n_after,
        retention_rate: if n_before == 0 {
            1.0
        } else {
            n_after as f64 / n_before as f64
        },
        removals,
    })
}
