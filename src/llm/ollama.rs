use crate::llm::gateway::LLMGateway;
use crate::types::{AgentError, Result};
use async_trait::async_trait;
use ollama_rs::{
    Ollama,
    generation::chat::{ChatMessage, request::ChatMessageRequest},
};

/// Gateway backed by a local Ollama server.
pub struct OllamaGateway {
    client: Ollama,
    model: String,
}

impl OllamaGateway {
    /// Create a gateway for `model` against `base_url`, e.g.
    /// `http://localhost:11434`.
    pub fn new(base_url: String, model: String) -> Self {
        let url_parts: Vec<&str> = base_url.split("://").collect();
        let (host, port) = if url_parts.len() == 2 {
            let host_port: Vec<&str> = url_parts[1].split(':').collect();
            let host = host_port[0].to_string();
            let port = if host_port.len() == 2 {
                host_port[1].parse().unwrap_or(11434)
            } else {
                11434
            };
            (host, port)
        } else {
            ("localhost".to_string(), 11434)
        };

        Self {
            client: Ollama::new(host, port),
            model,
        }
    }
}

#[async_trait]
impl LLMGateway for OllamaGateway {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let messages = vec![ChatMessage::user(prompt.to_string())];

        let request = ChatMessageRequest::new(self.model.clone(), messages);

        let response = self
            .client
            .send_chat_messages(request)
            .await
            .map_err(|e| AgentError::Gateway(format!("Ollama error: {}", e)))?;

        // ChatMessageResponse has a `message` field that is a ChatMessage (not Option)
        // ChatMessage has a `content` field that is a String
        Ok(response.message.content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gateway_reports_model_name() {
        let gateway = OllamaGateway::new("http://localhost:11434".to_string(), "llama3.2".to_string());
        assert_eq!(gateway.model_name(), "llama3.2");
    }
}
