//! Agent-backed answering with a deterministic fallback.

use super::{AnswerEngine, RuleBasedAnswerer, ANSWER_NOT_AVAILABLE};
use crate::agent::{question_prompt, AgentProvider};
use crate::table::Table;
use anyhow::Result;
use tracing::{debug, warn};

/// Answerer that escalates unrecognized questions to a hosted agent.
///
/// The deterministic rules always run first and stay authoritative: a
/// question one of the fixed patterns recognizes is answered locally and the
/// provider is never contacted. Only questions the rules classify as
/// unavailable are sent to the agent, and a provider failure degrades back
/// to the rule-based sentinel rather than propagating.
///
/// # Example
///
/// ```rust,ignore
/// use execsum::agent::GroqProvider;
/// use execsum::answer::AgentAnswerer;
///
/// let provider = GroqProvider::new(api_key)?;
/// let engine = AgentAnswerer::new(&provider);
/// let answer = engine.answer("which month had the most volatility?", &table)?;
/// ```
pub struct AgentAnswerer<'a> {
    provider: &'a dyn AgentProvider,
    rules: RuleBasedAnswerer,
}

impl<'a> AgentAnswerer<'a> {
    /// Create an agent answerer wrapping the given provider.
    pub fn new(provider: &'a dyn AgentProvider) -> Self {
        Self {
            provider,
            rules: RuleBasedAnswerer::new(),
        }
    }
}

impl AnswerEngine for AgentAnswerer<'_> {
    fn answer(&self, question: &str, table: &Table) -> Result<String> {
        let rule_answer = self.rules.answer_question(question, table);
        if rule_answer != ANSWER_NOT_AVAILABLE {
            debug!(question, "answered by rules, skipping agent");
            return Ok(rule_answer);
        }

        match self.provider.ask(&question_prompt(table, question)) {
            Ok(reply) => Ok(reply),
            Err(e) => {
                warn!(
                    provider = self.provider.name(),
                    "agent call failed: {e}, returning rule-based answer"
                );
                Ok(rule_answer)
            }
        }
    }

    fn name(&self) -> &str {
        "agent"
    }
}
