//! Environment-based configuration
//!
//! Everything is read from the process environment (with a `.env` file
//! loaded first when present); unset variables fall back to defaults so a
//! bare `cargo run` against a local Ollama needs no setup beyond
//! `LLM_PROVIDER=ollama`.

use crate::agent::ExecutorConfig;
use crate::llm::Provider;
use crate::types::{AgentError, Result};
use serde::Deserialize;
use std::env;
use std::time::Duration;

/// Runtime configuration, read from the process environment (a `.env` file
/// is loaded first when present).
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Model provider selection and endpoints.
    pub llm: LLMConfig,
    /// Tool API credentials and endpoints.
    pub tools: ToolApiConfig,
    /// Loop bound and timeout policy.
    pub agent: AgentLoopConfig,
}

/// Which model serves the reasoning loop, and how to reach it.
#[derive(Debug, Clone, Deserialize)]
pub struct LLMConfig {
    /// `openai` or `ollama`.
    pub provider: String,
    /// API key, required when the provider is `openai`.
    pub openai_api_key: Option<String>,
    /// OpenAI-compatible endpoint base URL.
    pub openai_api_base: String,
    /// Model name for the OpenAI provider.
    pub openai_model: String,
    /// Ollama server URL.
    pub ollama_url: String,
    /// Model name for the Ollama provider.
    pub ollama_model: String,
}

/// Credentials and endpoints for the HTTP-backed tools. A missing key
/// disables the corresponding tool rather than failing startup.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolApiConfig {
    /// SerpAPI key for the web search tool.
    pub serpapi_key: Option<String>,
    /// SerpAPI-compatible endpoint.
    pub serpapi_url: String,
    /// OpenWeatherMap key for the weather tool.
    pub openweather_api_key: Option<String>,
    /// OpenWeatherMap-compatible endpoint.
    pub openweather_url: String,
}

/// Loop bound and timeout policy.
#[derive(Debug, Clone, Deserialize)]
pub struct AgentLoopConfig {
    /// Maximum reasoning steps per episode.
    pub max_iterations: usize,
    /// Bound on a single gateway completion call, in seconds.
    pub gateway_timeout_secs: u64,
    /// Bound on a single tool invocation, in seconds.
    pub tool_timeout_secs: u64,
    /// Re-send the reasoning prompt once when a gateway call fails.
    pub retry_gateway_once: bool,
}

impl Config {
    /// Load configuration from the environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Config {
            llm: LLMConfig {
                provider: env::var("LLM_PROVIDER").unwrap_or_else(|_| "openai".to_string()),
                openai_api_key: env::var("OPENAI_API_KEY").ok(),
                openai_api_base: env::var("OPENAI_API_BASE")
                    .unwrap_or_else(|_| "https://api.openai.com/v1".to_string()),
                openai_model: env::var("OPENAI_MODEL")
                    .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
                ollama_url: env::var("OLLAMA_URL")
                    .unwrap_or_else(|_| "http://localhost:11434".to_string()),
                ollama_model: env::var("OLLAMA_MODEL").unwrap_or_else(|_| "llama3.2".to_string()),
            },
            tools: ToolApiConfig {
                serpapi_key: env::var("SERPAPI_KEY").ok(),
                serpapi_url: env::var("SERPAPI_URL")
                    .unwrap_or_else(|_| "https://serpapi.com/search".to_string()),
                openweather_api_key: env::var("OPENWEATHER_API_KEY").ok(),
                openweather_url: env::var("OPENWEATHER_API_URL")
                    .unwrap_or_else(|_| "https://api.openweathermap.org/data/2.5/weather".to_string()),
            },
            agent: AgentLoopConfig {
                max_iterations: parse_env("MAX_ITERATIONS", "8")?,
                gateway_timeout_secs: parse_env("GATEWAY_TIMEOUT_SECS", "60")?,
                tool_timeout_secs: parse_env("TOOL_TIMEOUT_SECS", "30")?,
                retry_gateway_once: parse_env("RETRY_GATEWAY_ONCE", "false")?,
            },
        })
    }

    /// Select the LLM provider described by this configuration.
    pub fn provider(&self) -> Result<Provider> {
        match self.llm.provider.as_str() {
            "openai" => {
                let api_key = self.llm.openai_api_key.clone().ok_or_else(|| {
                    AgentError::Configuration("OPENAI_API_KEY is not set".to_string())
                })?;
                Ok(Provider::OpenAI {
                    api_key,
                    api_base: self.llm.openai_api_base.clone(),
                    model: self.llm.openai_model.clone(),
                })
            }
            "ollama" => Ok(Provider::Ollama {
                base_url: self.llm.ollama_url.clone(),
                model: self.llm.ollama_model.clone(),
            }),
            other => Err(AgentError::Configuration(format!(
                "unknown LLM provider '{}', expected 'openai' or 'ollama'",
                other
            ))),
        }
    }

    /// Executor policy derived from the agent section.
    pub fn executor_config(&self) -> ExecutorConfig {
        ExecutorConfig {
            max_iterations: self.agent.max_iterations,
            gateway_timeout: Duration::from_secs(self.agent.gateway_timeout_secs),
            tool_timeout: Duration::from_secs(self.agent.tool_timeout_secs),
            retry_gateway_once: self.agent.retry_gateway_once,
        }
    }
}

fn parse_env<T>(key: &str, default: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .map_err(|e| AgentError::Configuration(format!("{}: {}", key, e)))
}
