//! Missingness profiling for distance matrices.

use crate::data::DistMatrix;
use crate::filter::count_missing;
use serde::{Deserialize, Serialize};

/// Profile of missing-data characteristics in a distance matrix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MissingnessProfile {
    /// Number of samples.
    pub n_samples: usize,
    /// Total number of distance cells (samples squared).
    pub total_cells: usize,
    /// Number of cells holding the missing-value token.
    pub missing_cells: usize,
    /// Proportion of cells missing.
    pub missing_fraction: f64,
    /// Missing entries per sample (row).
    pub sample_missing: Vec<usize>,
    /// Number of samples with no missing entries.
    pub n_complete_samples: usize,
    /// Highest per-sample missing count.
    pub max_sample_missing: usize,
}

impl MissingnessProfile {
    /// Check whether the matrix is already complete.
    pub fn is_complete(&self) -> bool {
        self.missing_cells == 0
    }
}

impl std::fmt::Display for MissingnessProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Missingness Profile")?;
        writeln!(f, "  Samples:           {}", self.n_samples)?;
        writeln!(f, "  Total cells:       {}", self.total_cells)?;
        writeln!(f, "  Missing cells:     {}", self.missing_cells)?;
        writeln!(f, "  Missing fraction:  {:.2}%", self.missing_fraction * 100.0)?;
        writeln!(f, "  Complete samples:  {}", self.n_complete_samples)?;
        writeln!(f, "  Worst sample:      {} missing", self.max_sample_missing)?;
        Ok(())
    }
}

/// Profile missing-data characteristics of a distance matrix.
pub fn profile_missingness(matrix: &DistMatrix, na_token: &str) -> MissingnessProfile {
    let n_samples = matrix.n_samples();
    let total_cells = n_samples * n_samples;
    let sample_missing = count_missing(matrix, na_token);
    let missing_cells: usize = sample_missing.iter().sum();
    let missing_fraction = if total_cells == 0 {
        0.0
    } else {
        missing_cells as f64 / total_cells as f64
    };
    let n_complete_samples = sample_missing.iter().filter(|&&c| c == 0).count();
    let max_sample_missing = sample_missing.iter().copied().max().unwrap_or(0);

    MissingnessProfile {
        n_samples,
        total_cells,
        missing_cells,
        missing_fraction,
        sample_missing,
        n_complete_samples,
        max_sample_missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NA: &str = "nan     ";

    fn create_test_matrix() -> DistMatrix {
        let labels: Vec<String> = (0..3).map(|i| format!("s{}", i)).collect();
        let cells = vec![
            vec!["0.0".to_string(), NA.to_string(), "0.2".to_string()],
            vec![NA.to_string(), "0.0".to_string(), "0.3".to_string()],
            vec!["0.2".to_string(), "0.3".to_string(), "0.0".to_string()],
        ];
        DistMatrix::new(labels, cells).unwrap()
    }

    #[test]
    fn test_profile_missingness() {
        let mat = create_test_matrix();
        let profile = profile_missingness(&mat, NA);

        assert_eq!(profile.n_samples, 3);
        assert_eq!(profile.total_cells, 9);
        assert_eq!(profile.missing_cells, 2);
        assert_eq!(profile.sample_missing, vec![1, 1, 0]);
        assert_eq!(profile.n_complete_samples, 1);
        assert_eq!(profile.max_sample_missing, 1);
        assert!((profile.missing_fraction - 2.0 / 9.0).abs() < 1e-10);
        assert!(!profile.is_complete());
    }

    #[test]
    fn test_profile_complete_matrix() {
        let labels = vec!["a".to_string()];
        let cells = vec![vec!["0.0".to_string()]];
        let mat = DistMatrix::new(labels, cells).unwrap();
        let profile = profile_missingness(&mat, NA);

        assert!(profile.is_complete());
        assert_eq!(profile.missing_cells, 0);
    }
}
