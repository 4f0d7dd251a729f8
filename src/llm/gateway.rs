use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// One-shot completion interface consumed by the reasoning loop.
///
/// Each REASONING step sends one fully rendered prompt and receives one
/// free-text completion; no conversation state lives in the gateway.
/// Implementations map provider failures (unreachable host, rate limits,
/// empty choices) to [`crate::types::AgentError::Gateway`].
#[async_trait]
pub trait LLMGateway: Send + Sync {
    /// Complete `prompt`, returning the model's raw text.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Get the model name/identifier, for logging.
    fn model_name(&self) -> &str;
}

/// Supported LLM providers with their connection settings.
#[derive(Debug, Clone)]
pub enum Provider {
    /// OpenAI API and compatible endpoints.
    OpenAI {
        /// API key for authentication.
        api_key: String,
        /// Base URL, e.g. `https://api.openai.com/v1`.
        api_base: String,
        /// Model identifier, e.g. `gpt-4o-mini`.
        model: String,
    },
    /// Local Ollama server.
    Ollama {
        /// Server URL, e.g. `http://localhost:11434`.
        base_url: String,
        /// Model identifier, e.g. `llama3.2`.
        model: String,
    },
}

impl Provider {
    /// Get the provider name as a string.
    pub fn name(&self) -> &'static str {
        match self {
            Provider::OpenAI { .. } => "OpenAI",
            Provider::Ollama { .. } => "Ollama",
        }
    }

    /// Get the model name configured for this provider.
    pub fn model_name(&self) -> &str {
        match self {
            Provider::OpenAI { model, .. } => model,
            Provider::Ollama { model, .. } => model,
        }
    }

    /// Build a gateway for this provider.
    ///
    /// Fails when the crate was compiled without the matching feature.
    pub fn create_gateway(&self) -> Result<Arc<dyn LLMGateway>> {
        match self {
            Provider::OpenAI {
                api_key,
                api_base,
                model,
            } => {
                #[cfg(feature = "openai")]
                {
                    Ok(Arc::new(super::openai::OpenAIGateway::new(
                        api_key.clone(),
                        api_base.clone(),
                        model.clone(),
                    )))
                }
                #[cfg(not(feature = "openai"))]
                {
                    let _ = (api_key, api_base, model);
                    Err(crate::types::AgentError::Configuration(
                        "OpenAI support not compiled in. Rebuild with --features openai"
                            .to_string(),
                    ))
                }
            }
            Provider::Ollama { base_url, model } => {
                #[cfg(feature = "ollama")]
                {
                    Ok(Arc::new(super::ollama::OllamaGateway::new(
                        base_url.clone(),
                        model.clone(),
                    )))
                }
                #[cfg(not(feature = "ollama"))]
                {
                    let _ = (base_url, model);
                    Err(crate::types::AgentError::Configuration(
                        "Ollama support not compiled in. Rebuild with --features ollama"
                            .to_string(),
                    ))
                }
            }
        }
    }
}
