//! Cross-cutting error handling tests for the AI provider abstraction

use super::*;
use crate::config::types::{AiConfig, AiProviderType};

#[test]
fn test_ai_error_display() {
    let err = AiError::NotConfigured("test message".to_string());
    assert_eq!(format!("{}", err), "AI not configured: test message");

    let err = AiError::Network("connection failed".to_string());
    assert_eq!(format!("{}", err), "Network error: connection failed");

    let err = AiError::Api {
        code: 429,
        message: "rate limited".to_string(),
    };
    assert_eq!(format!("{}", err), "API error (429): rate limited");

    let err = AiError::Parse("invalid json".to_string());
    assert_eq!(format!("{}", err), "Parse error: invalid json");
}

#[test]
fn test_from_config_disabled() {
    let config = AiConfig {
        enabled: false,
        ..AiConfig::default()
    };

    let err = AiProvider::from_config(&config).unwrap_err();
    assert!(matches!(err, AiError::NotConfigured(_)));
}

#[test]
fn test_from_config_missing_api_key() {
    let mut config = AiConfig::default();
    config.anthropic.model = Some("claude-sonnet-4-20250514".to_string());

    let err = AiProvider::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("api_key"));
}

#[test]
fn test_from_config_blank_api_key_rejected() {
    let mut config = AiConfig::default();
    config.anthropic.api_key = Some("   ".to_string());
    config.anthropic.model = Some("claude-sonnet-4-20250514".to_string());

    let err = AiProvider::from_config(&config).unwrap_err();
    assert!(matches!(err, AiError::NotConfigured(_)));
}

#[test]
fn test_from_config_missing_model() {
    let mut config = AiConfig::default();
    config.anthropic.api_key = Some("key".to_string());

    let err = AiProvider::from_config(&config).unwrap_err();
    assert!(err.to_string().contains("model"));
}

#[test]
fn test_from_config_valid_anthropic() {
    let mut config = AiConfig::default();
    config.anthropic.api_key = Some("key".to_string());
    config.anthropic.model = Some("claude-sonnet-4-20250514".to_string());

    let provider = AiProvider::from_config(&config).unwrap();
    assert!(matches!(provider, AiProvider::Anthropic(_)));
}

#[test]
fn test_from_config_valid_openai() {
    let mut config = AiConfig {
        provider: AiProviderType::OpenAi,
        ..AiConfig::default()
    };
    config.openai.api_key = Some("sk-test".to_string());
    config.openai.model = Some("gpt-4o-mini".to_string());

    let provider = AiProvider::from_config(&config).unwrap();
    assert!(matches!(provider, AiProvider::OpenAi(_)));
}
