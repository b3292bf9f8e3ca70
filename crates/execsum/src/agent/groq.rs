//! Groq AI provider implementation.
//!
//! This module provides the [`GroqProvider`] which implements the
//! [`AgentProvider`] trait against Groq's OpenAI-compatible chat completions
//! API (<https://console.groq.com/>).
//!
//! Groq hosts open-weight models with low latency, making it a practical
//! backend for interactive dataset Q&A.

use std::time::Duration;

use super::AgentProvider;
use anyhow::{anyhow, Result};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

/// Default Groq API endpoint.
const DEFAULT_BASE_URL: &str = "https://api.groq.com/openai/v1/chat/completions";

/// Default model for dataset analysis.
const DEFAULT_MODEL: &str = "llama-3.3-70b-versatile";

/// Default timeout for API requests in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default temperature (0.0 for deterministic answers).
const DEFAULT_TEMPERATURE: f32 = 0.0;

/// Default max tokens for responses.
const DEFAULT_MAX_TOKENS: u32 = 1000;

// Chat completions request structures
#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize, Deserialize)]
struct Message {
    role: String,
    content: String,
}

// Chat completions response structures
#[derive(Deserialize)]
struct ChatResponse {
    choices: Option<Vec<Choice>>,
}

#[derive(Deserialize)]
struct Choice {
    message: Option<ChoiceMessage>,
    finish_reason: Option<String>,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

/// Configuration for the Groq provider.
#[derive(Debug, Clone)]
pub struct GroqConfig {
    /// The model to use (e.g., "llama-3.3-70b-versatile").
    pub model: String,
    /// Temperature for response generation (0.0 - 2.0).
    pub temperature: f32,
    /// Maximum tokens in the response.
    pub max_tokens: u32,
    /// Request timeout in seconds.
    pub timeout_secs: u64,
    /// Endpoint URL (useful for proxies or custom endpoints).
    pub base_url: String,
}

impl Default for GroqConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_owned(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            base_url: DEFAULT_BASE_URL.to_owned(),
        }
    }
}

impl GroqConfig {
    /// Create a new configuration builder.
    pub fn builder() -> GroqConfigBuilder {
        GroqConfigBuilder::default()
    }
}

/// Builder for [`GroqConfig`].
#[derive(Default)]
pub struct GroqConfigBuilder {
    model: Option<String>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    timeout_secs: Option<u64>,
    base_url: Option<String>,
}

impl GroqConfigBuilder {
    /// Set the model to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the temperature (0.0 - 2.0).
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set the maximum tokens.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Set the request timeout in seconds.
    pub fn timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }

    /// Set a custom endpoint URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GroqConfig {
        GroqConfig {
            model: self.model.unwrap_or_else(|| DEFAULT_MODEL.to_owned()),
            temperature: self.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_tokens: self.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS),
            timeout_secs: self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
        }
    }
}

/// Groq-backed agent provider for dataset questions.
///
/// The caller constructs the provider with its own API key; there is no
/// process-global client and no environment lookup inside the library.
///
/// # Example
///
/// ```rust,ignore
/// use execsum::agent::{GroqProvider, GroqConfig};
///
/// // Simple usage with defaults
/// let provider = GroqProvider::new("your-api-key")?;
///
/// // With custom configuration
/// let config = GroqConfig::builder()
///     .model("llama-3.1-8b-instant")
///     .timeout_secs(60)
///     .build();
/// let provider = GroqProvider::with_config("your-api-key", config)?;
/// ```
pub struct GroqProvider {
    api_key: String,
    config: GroqConfig,
    client: Client,
}

impl GroqProvider {
    /// Create a new Groq provider with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, GroqConfig::default())
    }

    /// Create a new Groq provider with custom configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_config(api_key: impl Into<String>, config: GroqConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            api_key: api_key.into(),
            config,
            client,
        })
    }

    fn call_api(&self, prompt: &str) -> Result<String> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![Message {
                role: "user".to_owned(),
                content: prompt.to_owned(),
            }],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self
            .client
            .post(&self.config.base_url)
            .bearer_auth(&self.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "Groq API error {}: {}",
                response.status(),
                response.text()?
            ));
        }

        let result: ChatResponse = response.json()?;
        extract_reply(result)
    }
}

/// Extract the assistant reply from a chat completions response.
///
/// Handles optional fields gracefully: the API may return empty choices or
/// a choice truncated by content filtering.
fn extract_reply(response: ChatResponse) -> Result<String> {
    let text = response
        .choices
        .as_ref()
        .and_then(|choices| choices.first())
        .and_then(|c| {
            if let Some(reason) = &c.finish_reason
                && reason == "content_filter"
            {
                return None;
            }
            c.message.as_ref()
        })
        .and_then(|m| m.content.as_ref())
        .map(|content| content.trim().to_owned())
        .filter(|content| !content.is_empty())
        .ok_or_else(|| anyhow!("No response content from Groq API"))?;

    Ok(text)
}

impl AgentProvider for GroqProvider {
    fn ask(&self, prompt: &str) -> Result<String> {
        self.call_api(prompt)
    }

    fn name(&self) -> &str {
        "Groq"
    }

    fn model(&self) -> Option<&str> {
        Some(&self.config.model)
    }
}

// ============================================================================
// Tests
// ============================================================================
