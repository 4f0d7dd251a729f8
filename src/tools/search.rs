//! Web search tool
//!
//! Queries a SerpAPI-compatible endpoint and reduces the response to the top
//! organic result, which keeps observations short enough to feed back into
//! the reasoning prompt.

use crate::tools::registry::Tool;
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://serpapi.com/search";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Web search backed by a SerpAPI-style JSON endpoint.
pub struct WebSearchTool {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl WebSearchTool {
    /// Create the tool against the public SerpAPI endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            api_url: DEFAULT_API_URL.to_string(),
        }
    }

    /// Override the endpoint. Tests point this at a local mock server.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

#[async_trait]
impl Tool for WebSearchTool {
    fn name(&self) -> &str {
        "web_search"
    }

    fn description(&self) -> &str {
        "Search the web for current information. Input: the search query text."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", input),
                ("api_key", self.api_key.as_str()),
                ("engine", "google"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AgentError::ToolExecution {
                tool: "web_search".to_string(),
                message: format!("request failed: {}", e),
            })?;

        if !response.status().is_success() {
            return Err(AgentError::ToolExecution {
                tool: "web_search".to_string(),
                message: format!("search API returned {}", response.status()),
            });
        }

        let body: Value = response.json().await.map_err(|e| AgentError::ToolExecution {
            tool: "web_search".to_string(),
            message: format!("invalid JSON response: {}", e),
        })?;

        let first = body
            .get("organic_results")
            .and_then(|r| r.as_array())
            .and_then(|r| r.first());

        let Some(first) = first else {
            return Ok(format!("No results found for '{}'.", input));
        };

        let snippet = first
            .get("snippet")
            .and_then(|v| v.as_str())
            .unwrap_or("No snippet available.");
        let link = first
            .get("link")
            .and_then(|v| v.as_str())
            .unwrap_or("No link available.");

        tracing::debug!(query = input, link, "web search returned a result");
        Ok(format!("Top result: {}\n{}", snippet, link))
    }
}
