//! Square pairwise distance matrix with string-valued cells.

use crate::error::{PruneError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// A square pairwise distance matrix.
///
/// Row i and column i both correspond to sample i. Sample labels are carried
/// for display and output only; the filtering logic identifies samples by
/// position. Cells are stored as raw strings without numeric coercion so that
/// a missing-value sentinel matches literally, even when it looks numeric or
/// carries trailing whitespace (e.g. the fixed-width `"nan     "` emitted by
/// some upstream tools).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DistMatrix {
    /// Sample labels (row names), one per sample.
    labels: Vec<String>,
    /// Distance cells, N rows of N cells. Label excluded, so row index r
    /// pairs with cell column r.
    cells: Vec<Vec<String>>,
}

impl DistMatrix {
    /// Create a new DistMatrix from labels and distance cells.
    ///
    /// Validates squareness: one label per row, and every row must hold
    /// exactly as many cells as there are rows.
    pub fn new(labels: Vec<String>, cells: Vec<Vec<String>>) -> Result<Self> {
        let n = cells.len();
        if labels.len() != n {
            return Err(PruneError::DimensionMismatch {
                expected: n,
                actual: labels.len(),
            });
        }
        for (row, cells_row) in cells.iter().enumerate() {
            if cells_row.len() != n {
                return Err(PruneError::RaggedRow {
                    row,
                    expected: n,
                    actual: cells_row.len(),
                });
            }
        }
        Ok(Self { labels, cells })
    }

    /// Load a distance matrix from a tab-delimited .dst file.
    ///
    /// Expected format:
    /// - First line: sample count (skipped, not interpreted)
    /// - Subsequent lines: sample label followed by N distance cells
    ///
    /// Cells are read verbatim, without trimming, so sentinel tokens with
    /// trailing whitespace survive the round trip.
    pub fn from_dst<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = reader.lines();

        // Count header line, present but unused
        lines
            .next()
            .ok_or_else(|| PruneError::EmptyData("Empty .dst file".to_string()))??;

        let mut labels: Vec<String> = Vec::new();
        let mut cells: Vec<Vec<String>> = Vec::new();

        for line_result in lines {
            let line = line_result?;
            if line.is_empty() {
                continue;
            }
            let mut fields = line.split('\t');
            let label = fields
                .next()
                .unwrap_or_default()
                .to_string();
            labels.push(label);
            cells.push(fields.map(|s| s.to_string()).collect());
        }

        if cells.is_empty() {
            return Err(PruneError::EmptyData(
                "No samples in .dst file".to_string(),
            ));
        }

        Self::new(labels, cells)
    }

    /// Write the distance matrix to a tab-delimited .dst file.
    ///
    /// Same shape as the input format: sample count on the first line, then
    /// one label + distances row per sample. Cell values are passed through
    /// unchanged. An existing file at `path` is overwritten.
    pub fn to_dst<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", self.n_samples())?;
        for (label, row) in self.labels.iter().zip(&self.cells) {
            write!(writer, "{}", label)?;
            for cell in row {
                write!(writer, "\t{}", cell)?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }

    /// Number of samples (rows = columns).
    #[inline]
    pub fn n_samples(&self) -> usize {
        self.cells.len()
    }

    /// Sample labels.
    #[inline]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Get the cell at (row, col) as stored.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> &str {
        &self.cells[row][col]
    }

    /// Distance cells of one row, label excluded.
    #[inline]
    pub fn row(&self, row: usize) -> &[String] {
        &self.cells[row]
    }

    /// Remove sample `idx`: deletes its row, its column in every remaining
    /// row, and its label. The matrix stays square.
    pub fn remove_sample(&mut self, idx: usize) -> Result<()> {
        if idx >= self.n_samples() {
            return Err(PruneError::InvalidParameter(format!(
                "Sample index {} out of bounds",
                idx
            )));
        }
        self.labels.remove(idx);
        self.cells.remove(idx);
        for row in &mut self.cells {
            row.remove(idx);
        }
        Ok(())
    }
}
