//! Automatic dataset summarization.
//!
//! [`summarize`] derives the statistical overview shown to the user before
//! any question is asked: a head sample, missing-value counts, the number
//! of duplicate rows, and essential metrics for every numeric column. All
//! aggregation skips missing values explicitly.

use std::collections::HashSet;

use serde::Serialize;

use crate::stats;
use crate::table::Table;

/// Rows included in the head sample.
const HEAD_ROWS: usize = 5;

/// Essential metrics for one numeric column, missing values skipped.
#[derive(Debug, Clone, Serialize)]
pub struct ColumnMetrics {
    /// Column name.
    pub name: String,
    /// Count of numeric values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std_dev: f64,
    /// Minimum value.
    pub min: f64,
    /// Maximum value.
    pub max: f64,
}

/// High-level summary of a loaded table.
#[derive(Debug, Clone, Serialize)]
pub struct DataSummary {
    /// `(rows, columns)` shape of the table.
    pub shape: (usize, usize),
    /// Column names, in source order.
    pub columns: Vec<String>,
    /// First rows rendered as display strings (missing cells render empty).
    pub head: Vec<Vec<String>>,
    /// Per-column missing-value counts, in column order.
    pub missing_by_column: Vec<(String, usize)>,
    /// Total missing values across the table.
    pub missing_total: usize,
    /// Rows identical to an earlier row.
    pub duplicate_rows: usize,
    /// Metrics for each column holding at least one numeric value.
    pub metrics: Vec<ColumnMetrics>,
}

/// Summarize a table.
pub fn summarize(table: &Table) -> DataSummary {
    let mut missing_by_column = Vec::with_capacity(table.width());
    let mut missing_total = 0usize;
    let mut metrics = Vec::new();

    for (name, cells) in table.iter_columns() {
        let missing = cells.iter().filter(|c| c.is_missing()).count();
        missing_total += missing;
        missing_by_column.push((name.to_string(), missing));

        let count = stats::count(cells);
        if count == 0 {
            continue;
        }
        if let (Some(mean), Some(std_dev), Some(min), Some(max)) = (
            stats::mean(cells),
            stats::std_dev(cells),
            stats::min(cells),
            stats::max(cells),
        ) {
            metrics.push(ColumnMetrics {
                name: name.to_string(),
                count,
                mean,
                std_dev,
                min,
                max,
            });
        }
    }

    let mut seen = HashSet::with_capacity(table.height());
    let duplicate_rows = (0..table.height())
        .filter(|idx| !seen.insert(table.row_key(*idx)))
        .count();

    DataSummary {
        shape: table.shape(),
        columns: table.column_names().to_vec(),
        head: table.head(HEAD_ROWS),
        missing_by_column,
        missing_total,
        duplicate_rows,
        metrics,
    }
}
