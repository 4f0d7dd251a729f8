//! Direct-answer tool
//!
//! Sends the question straight to the language model with no external data
//! source. Registered first in the general sub-agent so it is the fallback
//! when neither search nor weather applies.

use crate::llm::LLMGateway;
use crate::tools::registry::Tool;
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// Answers general knowledge questions using the injected model gateway.
pub struct AnswerTool {
    gateway: Arc<dyn LLMGateway>,
}

impl AnswerTool {
    /// Create the tool over the given gateway.
    pub fn new(gateway: Arc<dyn LLMGateway>) -> Self {
        Self { gateway }
    }
}

#[async_trait]
impl Tool for AnswerTool {
    fn name(&self) -> &str {
        "answer_questions"
    }

    fn description(&self) -> &str {
        "Answer general knowledge questions directly. Input: the question text."
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        self.gateway.complete(input).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::AgentError;

    struct CannedGateway;

    #[async_trait]
    impl LLMGateway for CannedGateway {
        async fn complete(&self, prompt: &str) -> Result<String> {
            Ok(format!("answer to: {}", prompt))
        }
        fn model_name(&self) -> &str {
            "canned"
        }
    }

    struct DownGateway;

    #[async_trait]
    impl LLMGateway for DownGateway {
        async fn complete(&self, _prompt: &str) -> Result<String> {
            Err(AgentError::Gateway("unreachable".to_string()))
        }
        fn model_name(&self) -> &str {
            "down"
        }
    }

    #[tokio::test]
    async fn test_answer_passes_question_through() {
        let tool = AnswerTool::new(Arc::new(CannedGateway));
        let output = tool.invoke("What is the capital of France?").await.unwrap();
        assert_eq!(output, "answer to: What is the capital of France?");
    }

    #[tokio::test]
    async fn test_answer_surfaces_gateway_errors() {
        let tool = AnswerTool::new(Arc::new(DownGateway));
        let result = tool.invoke("anything").await;
        assert!(matches!(result, Err(AgentError::Gateway(_))));
    }
}
