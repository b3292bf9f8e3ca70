//! Deterministic rule-based question answering.

use super::AnswerEngine;
use crate::stats;
use crate::table::Table;
use anyhow::Result;
use tracing::debug;

/// Sentinel returned for questions no pattern recognizes.
pub const ANSWER_NOT_AVAILABLE: &str = "Answer not available for this question.";

/// Diagnostic returned when a recognized question needs a column that is
/// absent or holds no numeric values.
pub const COLUMN_UNAVAILABLE: &str = "Unable to compute this question — column may not exist.";

const TREND_GUIDANCE: &str =
    "Trend analysis can be visualized through a line chart showing closing prices over time.";

/// Rule-based answerer over a fixed, ordered set of keyword patterns.
///
/// The question is lower-cased and tested for substring membership against
/// each pattern in priority order; the first match wins. Matching is
/// intentionally looser than column lookup, which stays exact and
/// case-sensitive (see [`Table::has_column`]).
///
/// Aggregates skip missing values. An aggregate over zero numeric values
/// (empty table, absent column, or fully-missing column) is undefined and
/// surfaces as the [`COLUMN_UNAVAILABLE`] diagnostic rather than a literal
/// `nan` in the formatted sentence. Values are rendered with `{:.2}`
/// (correlations with `{:.3}`), which rounds the exact binary value to
/// nearest, ties to even.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedAnswerer;

impl RuleBasedAnswerer {
    pub fn new() -> Self {
        Self
    }

    /// Answer a question. Never fails; unanswerable questions come back as
    /// diagnostic strings.
    pub fn answer_question(&self, question: &str, table: &Table) -> String {
        let q = question.to_lowercase();

        if q.contains("average closing price") {
            self.format_aggregate(table, "Close", stats::mean, |v| {
                format!("The average closing price is {v:.2}")
            })
        } else if q.contains("highest price") {
            self.format_aggregate(table, "High", stats::max, |v| {
                format!("The highest price recorded is {v:.2}")
            })
        } else if q.contains("lowest price") {
            self.format_aggregate(table, "Low", stats::min, |v| {
                format!("The lowest price recorded is {v:.2}")
            })
        } else if q.contains("trading volume") {
            self.format_aggregate(table, "Volume", stats::mean, |v| {
                format!("The average trading volume is {v:.2}")
            })
        } else if q.contains("trend") && q.contains("price") {
            TREND_GUIDANCE.to_string()
        } else if q.contains("correlation") && q.contains("price") {
            self.format_correlation(table, "Open", "Close")
        } else {
            debug!(question, "no answer pattern matched");
            ANSWER_NOT_AVAILABLE.to_string()
        }
    }

    fn format_aggregate(
        &self,
        table: &Table,
        column: &str,
        aggregate: fn(&[crate::table::CellValue]) -> Option<f64>,
        render: impl Fn(f64) -> String,
    ) -> String {
        table
            .column(column)
            .and_then(aggregate)
            .map(render)
            .unwrap_or_else(|| COLUMN_UNAVAILABLE.to_string())
    }

    fn format_correlation(&self, table: &Table, left: &str, right: &str) -> String {
        let r = table
            .column(left)
            .zip(table.column(right))
            .and_then(|(xs, ys)| stats::pearson(xs, ys));
        match r {
            Some(r) => format!("The correlation between opening and closing prices is {r:.3}"),
            None => COLUMN_UNAVAILABLE.to_string(),
        }
    }
}

impl AnswerEngine for RuleBasedAnswerer {
    fn answer(&self, question: &str, table: &Table) -> Result<String> {
        Ok(self.answer_question(question, table))
    }

    fn name(&self) -> &str {
        "rule-based"
    }
}
