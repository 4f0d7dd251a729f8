//! Mock gateways for testing.
//!
//! This module provides mock [`LLMGateway`] implementations that can be used
//! across different test files without duplication. Episodes are driven
//! entirely by these mocks, so no test here needs a real model.

use async_trait::async_trait;
use hermes::llm::LLMGateway;
use hermes::types::{AgentError, Result};
use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Gateway that replays a fixed sequence of responses.
///
/// Each completion call pops the front of the script; a call after the
/// script runs dry fails like a dead gateway. This also works for nested
/// agent scenarios, because one episode tree issues its completion calls
/// strictly in sequence.
///
/// # Examples
///
/// ```ignore
/// let gateway = ScriptedGateway::new(&[
///     "Action: echo\nAction Input: hi",
///     "Final Answer: done",
/// ]);
/// ```
pub struct ScriptedGateway {
    script: Mutex<VecDeque<String>>,
}

impl ScriptedGateway {
    /// Create a gateway that returns the given responses in order.
    pub fn new(responses: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            script: Mutex::new(responses.iter().map(|s| s.to_string()).collect()),
        })
    }
}

#[async_trait]
impl LLMGateway for ScriptedGateway {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| AgentError::Gateway("script exhausted".to_string()))
    }

    fn model_name(&self) -> &str {
        "scripted"
    }
}

/// Gateway that picks its response by substring rules.
///
/// Rules are checked in insertion order and the first rule whose needles all
/// appear in the prompt wins; a rule with no needles matches anything, so
/// catch-alls go last. The gateway is stateless, which makes it
/// deterministic under interleaved concurrent episodes.
#[derive(Default)]
pub struct KeyedGateway {
    rules: Vec<(Vec<String>, String)>,
}

impl KeyedGateway {
    /// Create a gateway with no rules. Every call fails until rules are added.
    pub fn new() -> Self {
        Self::default()
    }

    /// Respond with `response` whenever every needle appears in the prompt.
    /// Insert specific rules before general ones.
    pub fn rule(mut self, needles: &[&str], response: &str) -> Self {
        self.rules.push((
            needles.iter().map(|n| n.to_string()).collect(),
            response.to_string(),
        ));
        self
    }

    /// Finish the builder.
    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl LLMGateway for KeyedGateway {
    async fn complete(&self, prompt: &str) -> Result<String> {
        for (needles, response) in &self.rules {
            if needles.iter().all(|needle| prompt.contains(needle.as_str())) {
                return Ok(response.clone());
            }
        }
        let snippet: String = prompt.chars().take(120).collect();
        Err(AgentError::Gateway(format!(
            "no rule matched prompt: {}",
            snippet
        )))
    }

    fn model_name(&self) -> &str {
        "keyed"
    }
}

/// Gateway that always fails.
pub struct FailingGateway;

#[async_trait]
impl LLMGateway for FailingGateway {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        Err(AgentError::Gateway("gateway offline".to_string()))
    }

    fn model_name(&self) -> &str {
        "failing"
    }
}

/// Gateway whose completion never resolves. For timeout tests.
pub struct HangingGateway;

#[async_trait]
impl LLMGateway for HangingGateway {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        std::future::pending().await
    }

    fn model_name(&self) -> &str {
        "hanging"
    }
}

/// Gateway that fails the first `failures` calls, then keeps returning a
/// fixed response. For retry-policy tests.
pub struct FlakyGateway {
    remaining_failures: AtomicUsize,
    response: String,
}

impl FlakyGateway {
    /// Create a gateway that fails `failures` times before answering with
    /// `response`.
    pub fn new(failures: usize, response: &str) -> Arc<Self> {
        Arc::new(Self {
            remaining_failures: AtomicUsize::new(failures),
            response: response.to_string(),
        })
    }
}

#[async_trait]
impl LLMGateway for FlakyGateway {
    async fn complete(&self, _prompt: &str) -> Result<String> {
        let still_failing = self
            .remaining_failures
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |n| n.checked_sub(1))
            .is_ok();
        if still_failing {
            Err(AgentError::Gateway("transient gateway error".to_string()))
        } else {
            Ok(self.response.clone())
        }
    }

    fn model_name(&self) -> &str {
        "flaky"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_scripted_gateway_pops_in_order_then_fails() {
        let gateway = ScriptedGateway::new(&["one", "two"]);
        assert_eq!(gateway.complete("x").await.unwrap(), "one");
        assert_eq!(gateway.complete("x").await.unwrap(), "two");
        assert!(gateway.complete("x").await.is_err());
    }

    #[tokio::test]
    async fn test_keyed_gateway_first_full_match_wins() {
        let gateway = KeyedGateway::new()
            .rule(&["alpha", "beta"], "both")
            .rule(&["alpha"], "just alpha")
            .rule(&[], "fallback");

        assert_eq!(gateway.complete("alpha beta").await.unwrap(), "both");
        assert_eq!(gateway.complete("alpha only").await.unwrap(), "just alpha");
        assert_eq!(gateway.complete("nothing").await.unwrap(), "fallback");
    }

    #[tokio::test]
    async fn test_flaky_gateway_recovers_after_failures() {
        let gateway = FlakyGateway::new(1, "ok");
        assert!(gateway.complete("x").await.is_err());
        assert_eq!(gateway.complete("x").await.unwrap(), "ok");
        assert_eq!(gateway.complete("x").await.unwrap(), "ok");
    }
}
