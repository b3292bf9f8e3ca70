//! Agent provider trait for abstracting hosted LLM backends.

use anyhow::Result;

/// A hosted agent that can answer natural-language prompts about a dataset.
///
/// Implementations wrap a specific LLM backend. Calls may be slow and may
/// fail; callers are expected to degrade gracefully (the bundled
/// [`AgentAnswerer`] falls back to its deterministic answer when a call
/// fails).
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a provider can be shared
/// behind an `Arc` across answering and summarization call sites.
///
/// [`AgentAnswerer`]: crate::answer::AgentAnswerer
pub trait AgentProvider: Send + Sync {
    /// Send a prompt to the agent and return its textual reply.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend call fails or yields no usable
    /// reply content.
    fn ask(&self, prompt: &str) -> Result<String>;

    /// Provider name for logging and debugging.
    fn name(&self) -> &str;

    /// The model in use, if the provider exposes one.
    fn model(&self) -> Option<&str> {
        None
    }
}
