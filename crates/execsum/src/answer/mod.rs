//! Question answering over a loaded table.
//!
//! This module provides both a deterministic rule-based answerer and an
//! agent-backed answerer for free-form questions.
//!
//! The [`AnswerEngine`] trait abstracts the two so report generation does
//! not care which strategy is active. [`RuleBasedAnswerer`] recognizes a
//! fixed set of keyword patterns and computes answers directly from the
//! table; it works offline and never fails. [`AgentAnswerer`] (feature
//! `ai`) adds a hosted-agent escalation for questions the rules do not
//! recognize.

mod rule_engine;

pub use rule_engine::{RuleBasedAnswerer, ANSWER_NOT_AVAILABLE, COLUMN_UNAVAILABLE};

#[cfg(feature = "ai")]
mod agent_engine;

#[cfg(feature = "ai")]
pub use agent_engine::AgentAnswerer;

use crate::table::Table;
use anyhow::Result;

/// Strategy for answering a natural-language question about a table.
///
/// Implementations must never panic on a missing or wrong-typed column;
/// unanswerable questions surface as diagnostic strings in the returned
/// answer, which callers can embed directly into a generated report.
pub trait AnswerEngine: Send + Sync {
    /// Answer `question` against `table`.
    fn answer(&self, question: &str, table: &Table) -> Result<String>;

    /// Engine name for logging and debugging.
    fn name(&self) -> &str;
}
