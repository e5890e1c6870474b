use crate::config::ProviderConfig;
use crate::providers::{api_error, http_client, LlmProvider};
use crate::AlertError;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::{json, Value};
use std::error::Error;
use std::time::Duration;

const OPENAI_BASE_URL: &str = "https://api.openai.com";
const GROQ_BASE_URL: &str = "https://api.groq.com/openai";

/// Chat-completions client for OpenAI and OpenAI-compatible hosts such as Groq
pub struct OpenAIProvider {
    name: &'static str,
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAIProvider {
    /// Create an OpenAI provider from configuration
    pub fn new(config: &ProviderConfig, timeout: Duration) -> Result<Self, AlertError> {
        Self::from_config("openai", "OPENAI_API_KEY", OPENAI_BASE_URL, config, timeout)
    }

    /// Create a Groq provider from configuration
    pub fn groq(config: &ProviderConfig, timeout: Duration) -> Result<Self, AlertError> {
        Self::from_config("groq", "GROQ_API_KEY", GROQ_BASE_URL, config, timeout)
    }

    fn from_config(
        name: &'static str,
        key_var: &str,
        default_base_url: &str,
        config: &ProviderConfig,
        timeout: Duration,
    ) -> Result<Self, AlertError> {
        // Try config first, then fall back to environment variable
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var(key_var).ok())
            .ok_or_else(|| {
                AlertError::Provider(format!("{} not found in config or environment", key_var))
            })?;

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| default_base_url.to_string());

        Ok(OpenAIProvider {
            name,
            client: http_client(timeout)?,
            api_key,
            base_url,
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(api_key: String, base_url: String, model: String) -> Self {
        OpenAIProvider {
            name: "openai",
            client: Client::new(),
            api_key,
            base_url,
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl LlmProvider for OpenAIProvider {
    fn provider_name(&self) -> &str {
        self.name
    }

    async fn generate(&self, prompt: &str) -> Result<String, Box<dyn Error + Send + Sync>> {
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&json!({
                "model": self.model,
                "messages": [
                    {"role": "user", "content": prompt}
                ],
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let response_body: Value = response.json().await?;
        debug!("{} response: {:?}", self.name, response_body);

        if let Some(message) = api_error(&response_body) {
            return Err(format!("{} API error: {}", self.name, message).into());
        }

        let plan = response_body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or("Failed to extract content from response")?
            .to_string();

        Ok(plan)
    }
}
