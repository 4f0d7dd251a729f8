//! Agents as tools
//!
//! Wrapping an [`AgentExecutor`] in the [`Tool`] trait is what turns a flat
//! loop into a hierarchy: a router agent sees its sub-agents as ordinary
//! tools, picks one the same way it would pick a search tool, and receives
//! the sub-agent's outcome string as an observation. Delegation is opaque in
//! both directions: the outer transcript records a single step per
//! delegation, and an inner episode that failed still comes back as a normal
//! observation rather than an error, so a sub-agent can never abort its
//! caller.

use super::executor::AgentExecutor;
use crate::tools::Tool;
use crate::types::Result;
use async_trait::async_trait;
use std::sync::Arc;

/// An [`AgentExecutor`] exposed to an outer agent as a [`Tool`].
pub struct AgentTool {
    name: String,
    description: String,
    executor: Arc<AgentExecutor>,
}

impl AgentTool {
    /// Wrap `executor` under the given caller-facing name and description.
    ///
    /// The description is what the outer model routes on, so it should state
    /// the kinds of queries this agent handles.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        executor: Arc<AgentExecutor>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            executor,
        }
    }
}

#[async_trait]
impl Tool for AgentTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn invoke(&self, input: &str) -> Result<String> {
        tracing::info!(
            sub_agent = %self.executor.name(),
            tool = %self.name,
            "delegating to sub-agent"
        );
        // A failed inner episode already degraded to its fixed message, so
        // this is always Ok.
        let episode = self.executor.run(input).await;
        Ok(episode.into_answer())
    }
}
