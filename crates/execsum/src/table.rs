//! In-memory tabular data.
//!
//! [`Table`] is the central value of the crate: an ordered list of column
//! names paired with column-major typed cell storage. Tables are immutable
//! after construction; callers derive new tables by re-loading the source
//! rather than mutating in place.

use serde::Serialize;

/// A single typed cell.
///
/// `Missing` is a distinct variant, never an empty [`Str`](CellValue::Str):
/// an empty field in the source becomes `Missing`, while a present-but-blank
/// string survives as `Str`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum CellValue {
    Int(i64),
    Float(f64),
    Str(String),
    Missing,
}

impl CellValue {
    /// Numeric view of the cell. `Str` and `Missing` yield `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(v) => Some(*v as f64),
            Self::Float(v) => Some(*v),
            Self::Str(_) | Self::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Render the cell for display. `Missing` renders as an empty string.
    pub fn render(&self) -> String {
        match self {
            Self::Int(v) => v.to_string(),
            Self::Float(v) => v.to_string(),
            Self::Str(s) => s.clone(),
            Self::Missing => String::new(),
        }
    }

    /// Collision-free key used when comparing whole rows (duplicate
    /// detection). Distinguishes `Missing` from an empty string and `Int(1)`
    /// from `Str("1")`.
    pub(crate) fn dedup_key(&self) -> String {
        match self {
            Self::Int(v) => format!("i{v}"),
            Self::Float(v) => format!("f{}", v.to_bits()),
            Self::Str(s) => format!("s{s}"),
            Self::Missing => "m".to_string(),
        }
    }
}

/// Parsed tabular data: ordered column names plus column-major cells.
///
/// Invariants, enforced at construction:
/// - every column holds exactly `height()` cells;
/// - column order matches the source header row;
/// - column names are unique (duplicates are renamed during ingestion).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Vec<CellValue>>,
}

impl Table {
    /// Build a table from `(name, cells)` pairs.
    ///
    /// # Panics
    ///
    /// Panics if the columns do not all have the same length.
    pub fn from_columns(columns: Vec<(impl Into<String>, Vec<CellValue>)>) -> Self {
        let mut names = Vec::with_capacity(columns.len());
        let mut cells = Vec::with_capacity(columns.len());
        for (name, column) in columns {
            names.push(name.into());
            cells.push(column);
        }
        if let Some(first) = cells.first() {
            let height = first.len();
            assert!(
                cells.iter().all(|c| c.len() == height),
                "all columns must have the same length"
            );
        }
        Self {
            names,
            columns: cells,
        }
    }

    /// An empty table with no columns and no rows.
    pub fn empty() -> Self {
        Self {
            names: Vec::new(),
            columns: Vec::new(),
        }
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.names.len()
    }

    /// `(rows, columns)` shape.
    pub fn shape(&self) -> (usize, usize) {
        (self.height(), self.width())
    }

    /// Column names, in source order.
    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    /// Exact, case-sensitive membership test against the column names.
    ///
    /// Deliberately stricter than question matching (which is lower-cased
    /// substring search): a column lookup for `"volume"` does not find
    /// `"Volume"`.
    pub fn has_column(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Cells of the named column, or `None` if the name is absent.
    /// Case-sensitive, like [`has_column`](Self::has_column).
    pub fn column(&self, name: &str) -> Option<&[CellValue]> {
        self.names
            .iter()
            .position(|n| n == name)
            .map(|idx| self.columns[idx].as_slice())
    }

    /// Iterate columns as `(name, cells)` pairs, in source order.
    pub fn iter_columns(&self) -> impl Iterator<Item = (&str, &[CellValue])> {
        self.names
            .iter()
            .zip(&self.columns)
            .map(|(name, column)| (name.as_str(), column.as_slice()))
    }

    /// One row as ordered `(name, cell)` pairs.
    pub fn row(&self, idx: usize) -> Option<Vec<(&str, &CellValue)>> {
        if idx >= self.height() {
            return None;
        }
        Some(
            self.names
                .iter()
                .zip(&self.columns)
                .map(|(name, column)| (name.as_str(), &column[idx]))
                .collect(),
        )
    }

    /// First `n` rows rendered as display strings, row-major.
    pub fn head(&self, n: usize) -> Vec<Vec<String>> {
        let rows = n.min(self.height());
        (0..rows)
            .map(|idx| self.columns.iter().map(|c| c[idx].render()).collect())
            .collect()
    }

    /// Row-comparison keys for duplicate detection.
    pub(crate) fn row_key(&self, idx: usize) -> String {
        self.columns
            .iter()
            .map(|c| c[idx].dedup_key())
            .collect::<Vec<_>>()
            .join("\u{1f}")
    }
}

/// Make a list of header names unique by suffixing repeats with `.1`, `.2`, …
///
/// Returns the deduplicated names plus the renames that were applied as
/// `(original, renamed)` pairs.
pub(crate) fn dedupe_names(names: Vec<String>) -> (Vec<String>, Vec<(String, String)>) {
    let mut seen = std::collections::HashSet::new();
    let mut out = Vec::with_capacity(names.len());
    let mut renames = Vec::new();

    for name in names {
        if seen.insert(name.clone()) {
            out.push(name);
            continue;
        }
        let mut suffix = 1usize;
        let renamed = loop {
            let candidate = format!("{name}.{suffix}");
            if seen.insert(candidate.clone()) {
                break candidate;
            }
            suffix += 1;
        };
        renames.push((name, renamed.clone()));
        out.push(renamed);
    }

    (out, renames)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_table() -> Table {
        Table::from_columns(vec![
            (
                "Open",
                vec![CellValue::Float(1.0), CellValue::Float(2.0), CellValue::Missing],
            ),
            (
                "Close",
                vec![
                    CellValue::Float(1.5),
                    CellValue::Float(2.5),
                    CellValue::Float(3.5),
                ],
            ),
            (
                "Note",
                vec![
                    CellValue::Str("a".to_string()),
                    CellValue::Str(String::new()),
                    CellValue::Missing,
                ],
            ),
        ])
    }

    // ==================== shape and access tests ====================

    #[test]
    fn test_shape() {
        let table = sample_table();
        assert_eq!(table.shape(), (3, 3));
        assert_eq!(table.height(), 3);
        assert_eq!(table.width(), 3);
    }

    #[test]
    fn test_empty_table() {
        let table = Table::empty();
        assert_eq!(table.shape(), (0, 0));
        assert!(table.head(5).is_empty());
        assert!(table.row(0).is_none());
    }

    #[test]
    fn test_column_access() {
        let table = sample_table();
        let close = table.column("Close").unwrap();
        assert_eq!(close.len(), 3);
        assert_eq!(close[0], CellValue::Float(1.5));
        assert!(table.column("close").is_none());
    }

    #[test]
    fn test_row_preserves_column_order() {
        let table = sample_table();
        let row = table.row(0).unwrap();
        let names: Vec<&str> = row.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["Open", "Close", "Note"]);
    }

    // ==================== has_column tests ====================

    #[test]
    fn test_has_column_exact_match() {
        let table = sample_table();
        assert!(table.has_column("Close"));
        assert!(!table.has_column("Volume"));
    }

    #[test]
    fn test_has_column_is_case_sensitive() {
        let table = sample_table();
        assert!(!table.has_column("close"));
        assert!(!table.has_column("CLOSE"));
    }

    // ==================== cell value tests ====================

    #[test]
    fn test_missing_is_distinct_from_empty_string() {
        let table = sample_table();
        let note = table.column("Note").unwrap();
        assert_eq!(note[1], CellValue::Str(String::new()));
        assert_eq!(note[2], CellValue::Missing);
        assert_ne!(note[1], note[2]);
        // both render the same, but their dedup keys differ
        assert_eq!(note[1].render(), note[2].render());
        assert_ne!(note[1].dedup_key(), note[2].dedup_key());
    }

    #[test]
    fn test_as_f64() {
        assert_eq!(CellValue::Int(7).as_f64(), Some(7.0));
        assert_eq!(CellValue::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(CellValue::Str("1.5".to_string()).as_f64(), None);
        assert_eq!(CellValue::Missing.as_f64(), None);
    }

    // ==================== head tests ====================

    #[test]
    fn test_head_renders_rows() {
        let table = sample_table();
        let head = table.head(2);
        assert_eq!(head.len(), 2);
        assert_eq!(head[0], vec!["1", "1.5", "a"]);
    }

    #[test]
    fn test_head_clamps_to_height() {
        let table = sample_table();
        assert_eq!(table.head(100).len(), 3);
    }

    // ==================== dedupe_names tests ====================

    #[test]
    fn test_dedupe_names_no_duplicates() {
        let (names, renames) =
            dedupe_names(vec!["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(names, vec!["a", "b", "c"]);
        assert!(renames.is_empty());
    }

    #[test]
    fn test_dedupe_names_suffixes_repeats() {
        let (names, renames) = dedupe_names(vec![
            "Close".to_string(),
            "Close".to_string(),
            "Close".to_string(),
        ]);
        assert_eq!(names, vec!["Close", "Close.1", "Close.2"]);
        assert_eq!(renames.len(), 2);
        assert_eq!(renames[0], ("Close".to_string(), "Close.1".to_string()));
    }

    #[test]
    fn test_dedupe_names_avoids_existing_suffix() {
        let (names, _) = dedupe_names(vec![
            "x".to_string(),
            "x.1".to_string(),
            "x".to_string(),
        ]);
        assert_eq!(names, vec!["x", "x.1", "x.2"]);
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn test_from_columns_rejects_ragged_input() {
        let _ = Table::from_columns(vec![
            ("a", vec![CellValue::Int(1)]),
            ("b", vec![CellValue::Int(1), CellValue::Int(2)]),
        ]);
    }
}
