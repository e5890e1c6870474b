mod anthropic;
mod factory;
mod ollama;
mod open_ai;
mod prompt;

pub use anthropic::AnthropicProvider;
pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;
pub use prompt::{build_diet_prompt, long_date, DIET_PLAN_PROMPT};

use async_trait::async_trait;
use serde_json::Value;
use std::error::Error;
use std::time::Duration;

use crate::AlertError;

/// Unified trait for all LLM providers
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "groq", "anthropic")
    fn provider_name(&self) -> &str;

    /// Send the prompt and return the model's text reply
    async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>>;
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client, AlertError> {
    reqwest::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| AlertError::Provider(format!("Failed to build HTTP client: {}", e)))
}

/// Error message carried in an API response body, if any
pub(crate) fn api_error(response_body: &Value) -> Option<String> {
    let error = response_body.get("error")?;
    let message = error
        .as_str()
        .or_else(|| error["message"].as_str())
        .unwrap_or("Unknown error");
    Some(message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_api_error_variants() {
        assert_eq!(
            api_error(&json!({"error": "Invalid request"})),
            Some("Invalid request".to_string())
        );
        assert_eq!(
            api_error(&json!({"error": {"message": "Rate limited", "type": "rate_limit"}})),
            Some("Rate limited".to_string())
        );
        assert_eq!(
            api_error(&json!({"error": {"code": 500}})),
            Some("Unknown error".to_string())
        );
        assert_eq!(api_error(&json!({"choices": []})), None);
    }
}
