//! The bounded reasoning loop
//!
//! An [`AgentExecutor`] drives one episode per call: it asks the gateway what
//! to do, parses the reply into a directive, runs the requested tool, feeds
//! the observation back, and repeats until the model answers or the
//! iteration bound is hit. Recoverable problems (unknown tool, unparsable
//! reply) are folded back into the loop as observations; only gateway
//! failure, cancellation and the iteration bound end an episode early, and
//! each of those degrades to a fixed user-facing message.

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use super::directive::{self, Directive};
use super::prompt::build_reasoning_prompt;
use super::transcript::{Step, Transcript};
use crate::llm::LLMGateway;
use crate::tools::ToolRegistry;
use crate::types::{AgentError, Result};

/// Reply when the loop hits its iteration bound without a final answer.
pub const ITERATION_LIMIT_MESSAGE: &str =
    "Unable to determine an answer within the allotted reasoning steps.";

/// Reply when the gateway fails or times out mid-episode.
pub const GATEWAY_FAILURE_MESSAGE: &str = "Sorry, something went wrong.";

/// Reply when the caller cancels the episode.
pub const CANCELLED_MESSAGE: &str = "The request was cancelled before an answer was found.";

/// Loop bound and timeout policy for one executor.
#[derive(Debug, Clone)]
pub struct ExecutorConfig {
    /// Maximum reasoning steps per episode. Values below 1 are treated as 1.
    pub max_iterations: usize,
    /// Bound on a single gateway completion call.
    pub gateway_timeout: Duration,
    /// Bound on a single tool invocation.
    pub tool_timeout: Duration,
    /// Re-send the reasoning prompt once when a gateway call fails.
    pub retry_gateway_once: bool,
}

impl Default for ExecutorConfig {
    fn default() -> Self {
        Self {
            max_iterations: 8,
            gateway_timeout: Duration::from_secs(60),
            tool_timeout: Duration::from_secs(30),
            retry_gateway_once: false,
        }
    }
}

/// How a finished episode ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodeStatus {
    /// The model emitted a final answer.
    Done,
    /// The iteration bound was reached first.
    IterationLimit,
    /// The gateway failed or timed out.
    GatewayFailure,
    /// The caller cancelled the episode.
    Cancelled,
}

/// Everything one finished episode produced.
#[derive(Debug)]
pub struct Episode {
    answer: String,
    status: EpisodeStatus,
    transcript: Transcript,
}

impl Episode {
    /// The user-facing outcome: the model's final answer when the episode
    /// succeeded, a fixed degraded message otherwise.
    pub fn answer(&self) -> &str {
        &self.answer
    }

    /// How the episode ended.
    pub fn status(&self) -> EpisodeStatus {
        self.status
    }

    /// The full reasoning record.
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Whether the model produced a real final answer.
    pub fn is_done(&self) -> bool {
        self.status == EpisodeStatus::Done
    }

    /// Consume the episode, keeping only the outcome string.
    pub fn into_answer(self) -> String {
        self.answer
    }
}

/// Drives the reason/act/observe loop over an injected gateway and a fixed
/// tool registry.
///
/// An executor holds no per-episode state: each [`run`](Self::run) builds its
/// own transcript, so one executor can serve any number of concurrent
/// episodes.
pub struct AgentExecutor {
    name: String,
    gateway: Arc<dyn LLMGateway>,
    tools: ToolRegistry,
    config: ExecutorConfig,
}

impl AgentExecutor {
    /// Create an executor with the default loop policy.
    pub fn new(name: impl Into<String>, gateway: Arc<dyn LLMGateway>, tools: ToolRegistry) -> Self {
        Self::with_config(name, gateway, tools, ExecutorConfig::default())
    }

    /// Create an executor with an explicit loop policy.
    pub fn with_config(
        name: impl Into<String>,
        gateway: Arc<dyn LLMGateway>,
        tools: ToolRegistry,
        mut config: ExecutorConfig,
    ) -> Self {
        config.max_iterations = config.max_iterations.max(1);
        Self {
            name: name.into(),
            gateway,
            tools,
            config,
        }
    }

    /// The executor's name, used in logs and by composite agents.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The tools this executor exposes to the model.
    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// The loop policy in effect.
    pub fn config(&self) -> &ExecutorConfig {
        &self.config
    }

    /// Run one episode to completion.
    pub async fn run(&self, query: &str) -> Episode {
        self.run_inner(query, None).await
    }

    /// Run one episode, stopping early if `cancel` fires.
    ///
    /// The token is checked once per iteration, before the next reasoning
    /// step; an in-flight gateway or tool call is left to finish first.
    pub async fn run_cancellable(&self, query: &str, cancel: &CancellationToken) -> Episode {
        self.run_inner(query, Some(cancel)).await
    }

    async fn run_inner(&self, query: &str, cancel: Option<&CancellationToken>) -> Episode {
        let episode_id = Uuid::new_v4();
        tracing::info!(agent = %self.name, episode = %episode_id, query, "episode started");

        let mut transcript = Transcript::new(query);
        match self.drive(&mut transcript, cancel, episode_id).await {
            Ok(answer) => {
                transcript.set_final_answer(&answer);
                tracing::info!(
                    agent = %self.name,
                    episode = %episode_id,
                    steps = transcript.steps().len(),
                    "episode finished"
                );
                Episode {
                    answer,
                    status: EpisodeStatus::Done,
                    transcript,
                }
            }
            Err(AgentError::IterationLimitExceeded(bound)) => {
                tracing::warn!(
                    agent = %self.name,
                    episode = %episode_id,
                    bound,
                    "episode hit the iteration limit"
                );
                Episode {
                    answer: ITERATION_LIMIT_MESSAGE.to_string(),
                    status: EpisodeStatus::IterationLimit,
                    transcript,
                }
            }
            Err(AgentError::Cancelled) => {
                tracing::info!(agent = %self.name, episode = %episode_id, "episode cancelled");
                Episode {
                    answer: CANCELLED_MESSAGE.to_string(),
                    status: EpisodeStatus::Cancelled,
                    transcript,
                }
            }
            Err(err) => {
                tracing::error!(
                    agent = %self.name,
                    episode = %episode_id,
                    error = %err,
                    "episode failed"
                );
                Episode {
                    answer: GATEWAY_FAILURE_MESSAGE.to_string(),
                    status: EpisodeStatus::GatewayFailure,
                    transcript,
                }
            }
        }
    }

    async fn drive(
        &self,
        transcript: &mut Transcript,
        cancel: Option<&CancellationToken>,
        episode_id: Uuid,
    ) -> Result<String> {
        for iteration in 1..=self.config.max_iterations {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Err(AgentError::Cancelled);
                }
            }

            tracing::debug!(agent = %self.name, episode = %episode_id, iteration, "reasoning");
            let prompt = build_reasoning_prompt(&self.tools, transcript);
            let response = self.complete_with_policy(&prompt).await?;

            match directive::parse(&response) {
                Directive::FinalAnswer(answer) => return Ok(answer),
                Directive::ToolCall { tool, input } => {
                    let thought = directive::extract_thought(&response);
                    let observation = self.act(&tool, &input).await;
                    transcript.push_step(Step {
                        thought,
                        action: tool,
                        action_input: input,
                        observation,
                    });
                }
                Directive::Unparsable => {
                    tracing::warn!(
                        agent = %self.name,
                        episode = %episode_id,
                        iteration,
                        "model response did not parse"
                    );
                    transcript.push_step(Step {
                        thought: response.trim().to_string(),
                        action: String::new(),
                        action_input: String::new(),
                        observation: "Could not parse the response. Reply with either a tool \
                                      call (Action: / Action Input:) or a Final Answer: line."
                            .to_string(),
                    });
                }
            }
        }

        Err(AgentError::IterationLimitExceeded(self.config.max_iterations))
    }

    /// ACTING: run one tool call. Every failure is reduced to observation
    /// text so the model can recover; nothing here ends the episode.
    async fn act(&self, tool_name: &str, input: &str) -> String {
        let tool = match self.tools.get(tool_name) {
            Ok(tool) => tool,
            Err(_) => {
                tracing::warn!(
                    agent = %self.name,
                    tool = tool_name,
                    "model requested a tool that is not registered"
                );
                return format!(
                    "Tool '{}' is not available. Available tools: {}.",
                    tool_name,
                    self.tools.tool_names().join(", ")
                );
            }
        };

        tracing::info!(agent = %self.name, tool = tool_name, input, "executing tool");
        match tokio::time::timeout(self.config.tool_timeout, tool.invoke(input)).await {
            Ok(Ok(output)) => output,
            Ok(Err(err)) => {
                tracing::warn!(agent = %self.name, tool = tool_name, error = %err, "tool failed");
                let message = match &err {
                    AgentError::ToolExecution { message, .. } => message.clone(),
                    other => other.to_string(),
                };
                format!("An error occurred while executing {}: {}", tool_name, message)
            }
            Err(_) => {
                tracing::warn!(agent = %self.name, tool = tool_name, "tool timed out");
                format!(
                    "An error occurred while executing {}: timed out after {:?}",
                    tool_name, self.config.tool_timeout
                )
            }
        }
    }

    async fn complete_with_policy(&self, prompt: &str) -> Result<String> {
        match self.complete_once(prompt).await {
            Ok(response) => Ok(response),
            Err(err) if self.config.retry_gateway_once => {
                tracing::warn!(agent = %self.name, error = %err, "gateway call failed, retrying once");
                self.complete_once(prompt).await
            }
            Err(err) => Err(err),
        }
    }

    async fn complete_once(&self, prompt: &str) -> Result<String> {
        match tokio::time::timeout(self.config.gateway_timeout, self.gateway.complete(prompt))
            .await
        {
            Ok(result) => result,
            Err(_) => Err(AgentError::Gateway(format!(
                "completion timed out after {:?}",
                self.config.gateway_timeout
            ))),
        }
    }
}
