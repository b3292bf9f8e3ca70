//! Hosted-agent capability for free-form dataset questions.
//!
//! The deterministic core never depends on this module: rule-based answers,
//! ingestion, and summaries all work without it. It exists for the
//! questions the rules cannot answer: free-form Q&A, column descriptions,
//! and trend narratives.
//!
//! # Feature Flag
//!
//! The [`AgentProvider`] trait and the prompt builders are always available
//! (for custom implementations); the concrete [`GroqProvider`] requires the
//! `ai` feature.
//!
//! ```toml
//! # Enable the hosted-agent client (default)
//! execsum = { version = "0.1", features = ["ai"] }
//!
//! # Deterministic-only build
//! execsum = { version = "0.1", default-features = false }
//! ```
//!
//! Providers are constructed explicitly by the caller with their own
//! credentials and configuration. There is no process-global client and no
//! import-time key lookup.

mod prompts;
mod provider;

pub use prompts::{describe_columns_prompt, question_prompt, table_preview, trend_prompt};
pub use provider::AgentProvider;

#[cfg(feature = "ai")]
mod groq;

#[cfg(feature = "ai")]
pub use groq::{GroqConfig, GroqConfigBuilder, GroqProvider};
