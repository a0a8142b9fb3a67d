//! AI provider abstraction
//!
//! Defines the AiProvider enum, AiError types, and factory for creating
//! provider instances from config.

use thiserror::Error;

use crate::config::types::{AiConfig, AiProviderType, ProviderConfig};

mod anthropic;
mod openai;

pub use anthropic::AnthropicClient;
pub use openai::OpenAiClient;

/// Errors that can occur during AI operations
///
/// These belong to the upstream network collaborator's error domain and are
/// surfaced to the user as retryable conditions. They are distinct from
/// degenerate segmentation, which is a silent quality fallback and never an
/// error.
#[derive(Debug, Error)]
pub enum AiError {
    /// AI is not configured (missing API key or disabled)
    #[error("AI not configured: {0}")]
    NotConfigured(String),

    /// Network error during API request
    #[error("Network error: {0}")]
    Network(String),

    /// API returned an error response
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Failed to parse API response
    #[error("Parse error: {0}")]
    Parse(String),
}

/// AI provider implementations
#[derive(Debug)]
pub enum AiProvider {
    /// Anthropic Messages API
    Anthropic(AnthropicClient),
    /// OpenAI Chat Completions API
    OpenAi(OpenAiClient),
}

impl AiProvider {
    /// Create an AI provider from configuration
    ///
    /// Returns an error if the configuration is invalid (e.g., missing API key)
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        if !config.enabled {
            return Err(AiError::NotConfigured(
                "AI is disabled in config".to_string(),
            ));
        }

        match config.provider {
            AiProviderType::Anthropic => {
                let (api_key, model) = required_credentials(&config.anthropic, "ai.anthropic")?;
                Ok(AiProvider::Anthropic(AnthropicClient::new(
                    api_key,
                    model,
                    config.anthropic.max_tokens,
                )))
            }
            AiProviderType::OpenAi => {
                let (api_key, model) = required_credentials(&config.openai, "ai.openai")?;
                Ok(AiProvider::OpenAi(OpenAiClient::new(
                    api_key,
                    model,
                    config.openai.max_tokens,
                )))
            }
        }
    }

    /// Request a full completion for the given prompt
    pub async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        match self {
            AiProvider::Anthropic(client) => client.complete(prompt).await,
            AiProvider::OpenAi(client) => client.complete(prompt).await,
        }
    }
}

/// Pull a non-empty api_key and model out of a provider section
fn required_credentials(
    config: &ProviderConfig,
    section: &str,
) -> Result<(String, String), AiError> {
    let api_key = config
        .api_key
        .as_ref()
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| {
            AiError::NotConfigured(format!("Missing or empty api_key in [{section}] config"))
        })?;

    let model = config
        .model
        .as_ref()
        .filter(|m| !m.trim().is_empty())
        .ok_or_else(|| {
            AiError::NotConfigured(format!("Missing or empty model in [{section}] config"))
        })?;

    Ok((api_key.clone(), model.clone()))
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod provider_tests;
