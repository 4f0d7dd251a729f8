//! Current-weather tool
//!
//! Fetches current conditions from the OpenWeatherMap API. Unknown locations
//! come back as a polite correction string rather than an error, since the
//! model can relay that text straight to the user.

use crate::tools::registry::Tool;
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

const DEFAULT_API_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const DEFAULT_LOCATION: &str = "London";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Current weather lookup backed by OpenWeatherMap.
pub struct CurrentWeatherTool {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
}

impl CurrentWeatherTool {
    /// Create the tool against the public OpenWeatherMap endpoint.
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
impl Tool for CurrentWeatherTool {
    fn name(&self) -> &str {
        "current_weather"
    }

    fn description(&self) -> &str {
        "Get the current weather for a location. Input: the location name only, e.g. 'Paris'."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        let location = normalize_location(input);

        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("q", location.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .timeout(REQUEST_TIMEOUT)
            .send()
            .await
            .map_err(|e| AgentError::ToolExecution {
                tool: "current_weather".to_string(),
                message: format!("request failed: {}", e),
            })?;

        // The API answers 404 for unknown locations; treat any non-success
        // as bad user input the model can ask to correct.
        if !response.status().is_success() {
            tracing::debug!(%location, status = %response.status(), "weather lookup rejected");
            return Ok(format!(
                "Could not fetch weather for '{}'. Please check the location name.",
                location
            ));
        }

        let data: Value = response.json().await.map_err(|e| AgentError::ToolExecution {
            tool: "current_weather".to_string(),
            message: format!("invalid JSON response: {}", e),
        })?;

        let temp = data["main"]["temp"].as_f64();
        let description = data["weather"][0]["description"].as_str();
        let city = data["name"].as_str();

        match (temp, description, city) {
            (Some(temp), Some(description), Some(city)) => Ok(format!(
                "The current weather in {} is {}°C with {}.",
                city, temp, description
            )),
            _ => Err(AgentError::ToolExecution {
                tool: "current_weather".to_string(),
                message: "unexpected response shape from the weather API".to_string(),
            }),
        }
    }
}

/// Strip the "current weather in ..." phrasing models tend to echo, leaving
/// the bare location. Falls back to London when nothing remains.
fn normalize_location(input: &str) -> String {
    let mut location = input.trim();

    for prefix in ["current weather", "weather"] {
        if let Some(rest) = strip_word_prefix(location, prefix) {
            location = rest.trim_start();
            break;
        }
    }
    if let Some(rest) = strip_word_prefix(location, "in") {
        location = rest.trim_start();
    }
    let location = location
        .trim_matches(|c: char| c == '?' || c == '.' || c == ',')
        .trim();

    if location.is_empty() {
        DEFAULT_LOCATION.to_string()
    } else {
        location.to_string()
    }
}

/// Strips `word` from the front of `s` (ASCII case-insensitive), but only at
/// a word boundary: "weather in Lima" matches "weather", "Weatherford" does
/// not.
fn strip_word_prefix<'a>(s: &'a str, word: &str) -> Option<&'a str> {
    let rest = s
        .get(..word.len())
        .filter(|head| head.eq_ignore_ascii_case(word))
        .map(|_| &s[word.len()..])?;
    match rest.chars().next() {
        Some(c) if c.is_ascii_alphanumeric() => None,
        _ => Some(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weather_tool_definition() {
        let tool = CurrentWeatherTool::new("key");
        assert_eq!(tool.name(), "current_weather");
        assert!(!tool.description().is_empty());
    }

    #[test]
    fn test_normalize_plain_location() {
        assert_eq!(normalize_location("Paris"), "Paris");
        assert_eq!(normalize_location("  Paris  "), "Paris");
    }

    #[test]
    fn test_normalize_strips_weather_phrasing() {
        assert_eq!(normalize_location("current weather in Paris"), "Paris");
        assert_eq!(normalize_location("Current Weather In Berlin"), "Berlin");
        assert_eq!(normalize_location("weather in Tokyo?"), "Tokyo");
        assert_eq!(normalize_location("in Oslo"), "Oslo");
    }

    #[test]
    fn test_normalize_keeps_multiword_locations() {
        assert_eq!(normalize_location("New York"), "New York");
        assert_eq!(
            normalize_location("current weather in Rio de Janeiro"),
            "Rio de Janeiro"
        );
    }

    #[test]
    fn test_normalize_only_strips_whole_words() {
        assert_eq!(normalize_location("Weatherford"), "Weatherford");
        assert_eq!(normalize_location("Weathersfield"), "Weathersfield");
        assert_eq!(normalize_location("Indianapolis"), "Indianapolis");
        assert_eq!(normalize_location("weather in Weatherford"), "Weatherford");
    }

    #[test]
    fn test_normalize_defaults_to_london() {
        assert_eq!(normalize_location(""), "London");
        assert_eq!(normalize_location("current weather"), "London");
        assert_eq!(normalize_location("weather?"), "London");
    }
}
