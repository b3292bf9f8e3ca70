//! Encoding-resilient CSV ingestion.
//!
//! [`TableLoader`] turns raw bytes into a [`Table`] in three steps: a
//! statistical byte-pattern scan guesses the text encoding, the bytes are
//! decoded under that guess, and the decoded text is parsed as delimited
//! data with a conservative whole-column type scan. If parsing fails under
//! the guessed encoding, one retry force-decodes as UTF-8 with U+FFFD
//! replacement. Only structurally invalid CSV (e.g. inconsistent row widths)
//! produces an error; garbled text never does.
//!
//! Loads are reproducible: a stream's position is restored before the call
//! returns, so loading the same source twice yields identical tables.

use std::io::{Read, Seek, SeekFrom};
use std::path::Path;

use chardetng::EncodingDetector;
use csv::ReaderBuilder;
use encoding_rs::{Encoding, UTF_8};
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::table::{dedupe_names, CellValue, Table};

/// Field values treated as missing, compared case-insensitively after
/// trimming. Deliberately small: only unambiguous not-available markers,
/// so ordinary text columns are never silently hollowed out.
const NA_MARKERS: [&str; 6] = ["na", "n/a", "nan", "null", "none", "#n/a"];

/// Best-effort inferred text encoding for a byte blob.
///
/// Recomputed on every load, never persisted.
#[derive(Debug, Clone, Copy)]
pub struct EncodingGuess {
    /// The guessed encoding.
    pub encoding: &'static Encoding,
    /// 1.0 when the detector assessed its guess as reliable, 0.5 when it
    /// did not, 0.0 for empty input (where the UTF-8 default applies).
    pub confidence: f32,
}

impl EncodingGuess {
    /// Canonical label of the guessed encoding, e.g. `"UTF-8"`.
    pub fn label(&self) -> &'static str {
        self.encoding.name()
    }
}

/// Guess the text encoding of `bytes` from byte-pattern statistics.
///
/// Empty input defaults to UTF-8 rather than failing; detection problems
/// are never fatal.
pub fn detect_encoding(bytes: &[u8]) -> EncodingGuess {
    if bytes.is_empty() {
        return EncodingGuess {
            encoding: UTF_8,
            confidence: 0.0,
        };
    }
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    let (encoding, reliable) = detector.guess_assess(None, true);
    EncodingGuess {
        encoding,
        confidence: if reliable { 1.0 } else { 0.5 },
    }
}

/// CSV loader with encoding detection and a forced-UTF-8 fallback.
#[derive(Debug, Clone)]
pub struct TableLoader {
    delimiter: u8,
}

impl Default for TableLoader {
    fn default() -> Self {
        Self { delimiter: b',' }
    }
}

impl TableLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a custom field delimiter (default: comma).
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Load a table from a file on disk.
    pub fn load_path(&self, path: impl AsRef<Path>) -> Result<Table> {
        let bytes = std::fs::read(path)?;
        self.load_bytes(&bytes)
    }

    /// Load a table from a seekable stream.
    ///
    /// Reads from the stream's current position to the end, then restores
    /// that position before returning, success or failure. A subsequent
    /// independent load of the same stream therefore observes identical
    /// bytes. Concurrent loads against one live stream must be serialized
    /// by the caller.
    pub fn load_reader<R: Read + Seek>(&self, reader: &mut R) -> Result<Table> {
        let start = reader.stream_position()?;
        let mut bytes = Vec::new();
        let read_result = reader.read_to_end(&mut bytes);
        reader.seek(SeekFrom::Start(start))?;
        read_result?;
        self.load_bytes(&bytes)
    }

    /// Load a table from raw bytes.
    pub fn load_bytes(&self, bytes: &[u8]) -> Result<Table> {
        if bytes.is_empty() {
            return Err(IngestError::EmptyInput);
        }

        let guess = detect_encoding(bytes);
        let (text, _, had_errors) = guess.encoding.decode(bytes);
        debug!(
            encoding = guess.label(),
            confidence = guess.confidence,
            malformed = had_errors,
            "decoded csv bytes"
        );

        match self.parse_text(&text) {
            Ok(table) => Ok(table),
            Err(first_err) => {
                let (fallback, _, _) = UTF_8.decode(bytes);
                if fallback == text {
                    // the guess already was UTF-8; a retry would re-parse
                    // the same text
                    return Err(first_err);
                }
                warn!(
                    encoding = guess.label(),
                    "parse failed under detected encoding, retrying as UTF-8 with replacement"
                );
                self.parse_text(&fallback)
            }
        }
    }

    /// Parse decoded text into a typed table.
    fn parse_text(&self, text: &str) -> Result<Table> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .from_reader(text.as_bytes());

        let headers: Vec<String> = reader
            .headers()
            .map_err(|cause| IngestError::Parse { cause })?
            .iter()
            .map(str::to_string)
            .collect();

        let (names, renames) = dedupe_names(headers);
        for (original, renamed) in &renames {
            warn!(column = original.as_str(), renamed = renamed.as_str(), "duplicate column name");
        }

        // raw column-major cells; None marks a missing field
        let mut raw: Vec<Vec<Option<String>>> = vec![Vec::new(); names.len()];
        for record in reader.records() {
            let record = record.map_err(|cause| IngestError::Parse { cause })?;
            for (idx, field) in record.iter().enumerate() {
                raw[idx].push(classify_field(field));
            }
        }

        let columns = names
            .into_iter()
            .zip(raw)
            .map(|(name, cells)| (name, infer_column(cells)))
            .collect();

        Ok(Table::from_columns(columns))
    }
}

/// Classify one raw field: `None` for missing, `Some` for a present value.
fn classify_field(field: &str) -> Option<String> {
    if field.is_empty() {
        return None;
    }
    let trimmed = field.trim();
    if NA_MARKERS.iter().any(|m| trimmed.eq_ignore_ascii_case(m)) {
        return None;
    }
    Some(field.to_string())
}

/// Type a whole column from its raw fields.
///
/// A column is integer only if every present value parses as `i64`, float
/// only if every present value parses as `f64`; anything mixed stays a
/// string column so ambiguous data is never silently misparsed.
fn infer_column(raw: Vec<Option<String>>) -> Vec<CellValue> {
    let all_int = raw
        .iter()
        .flatten()
        .all(|v| v.trim().parse::<i64>().is_ok());
    if all_int {
        return raw
            .into_iter()
            .map(|v| match v {
                Some(s) => CellValue::Int(s.trim().parse::<i64>().unwrap_or_default()),
                None => CellValue::Missing,
            })
            .collect();
    }

    let all_float = raw
        .iter()
        .flatten()
        .all(|v| v.trim().parse::<f64>().is_ok());
    if all_float {
        return raw
            .into_iter()
            .map(|v| match v {
                Some(s) => CellValue::Float(s.trim().parse::<f64>().unwrap_or_default()),
                None => CellValue::Missing,
            })
            .collect();
    }

    raw.into_iter()
        .map(|v| match v {
            Some(s) => CellValue::Str(s),
            None => CellValue::Missing,
        })
        .collect()
}
