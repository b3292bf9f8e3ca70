//! Executive Summary Generator Library
//!
//! An AI-optional library for turning CSV datasets into statistical
//! summaries and question-and-answer executive reports.
//!
//! # Overview
//!
//! This library provides:
//!
//! - **Encoding-Resilient Ingestion**: statistical encoding detection with a
//!   forced-UTF-8 fallback, so garbled text never aborts a load
//! - **Typed Tables**: a concrete owned table with conservative whole-column
//!   type inference and explicit missing-value cells
//! - **Dataset Summaries**: head sample, missing-value counts, duplicate
//!   rows, and per-column essential metrics
//! - **Rule-Based Q&A**: a fixed set of keyword patterns answered directly
//!   from the data, deterministic and offline
//! - **Agent Escalation**: optional hosted-LLM answering for free-form
//!   questions, with rule-based fallback
//! - **Report Assembly**: question-and-answer report text, written to disk
//!   on request
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use execsum::{ReportGenerator, RuleBasedAnswerer, TableLoader, summarize};
//!
//! // Load a CSV, whatever its encoding
//! let table = TableLoader::new().load_path("prices.csv")?;
//!
//! // Automatic summary
//! let summary = summarize(&table);
//! println!("{} rows, {} missing values", summary.shape.0, summary.missing_total);
//!
//! // Deterministic Q&A report
//! let questions = vec!["What is the average closing price?".to_string()];
//! let report = ReportGenerator::default().build_report(
//!     "Data Analysis Summary Report",
//!     &questions,
//!     &RuleBasedAnswerer::new(),
//!     &table,
//! )?;
//! println!("{report}");
//! ```
//!
//! # Agent Providers
//!
//! Free-form questions can be escalated to a hosted agent through the
//! [`agent::AgentProvider`] trait. The bundled [`agent::GroqProvider`]
//! (feature `ai`, enabled by default) talks to Groq's chat completions API;
//! the caller constructs it with its own API key and configuration:
//!
//! ```rust,ignore
//! use execsum::agent::{GroqConfig, GroqProvider};
//! use execsum::answer::AgentAnswerer;
//!
//! let provider = GroqProvider::with_config(
//!     api_key,
//!     GroqConfig::builder().timeout_secs(60).build(),
//! )?;
//! let engine = AgentAnswerer::new(&provider);
//! ```
//!
//! The deterministic core has no dependency on any provider: build with
//! `default-features = false` for a fully offline crate.

pub mod agent;
pub mod answer;
pub mod error;
pub mod ingest;
pub mod report;
pub mod stats;
pub mod summary;
pub mod table;

// Re-exports for convenient access
pub use answer::{AnswerEngine, RuleBasedAnswerer, ANSWER_NOT_AVAILABLE, COLUMN_UNAVAILABLE};
pub use error::{IngestError, Result as IngestResult};
pub use ingest::{detect_encoding, EncodingGuess, TableLoader};
pub use report::ReportGenerator;
pub use summary::{summarize, ColumnMetrics, DataSummary};
pub use table::{CellValue, Table};

#[cfg(feature = "ai")]
pub use answer::AgentAnswerer;
