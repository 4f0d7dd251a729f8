use serde::{Deserialize, Serialize};

// ============= Shared Types =============

/// A tool's name and description as rendered into the reasoning prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ToolDescription {
    /// Exact name the model must use to call the tool.
    pub name: String,
    /// One-line summary, including the expected input.
    pub description: String,
}

// ============= Error Types =============

/// Errors raised while building or running agents.
///
/// Only a subset of these is terminal for a running episode: a gateway
/// failure ends the episode, while an unknown tool or a failed tool call is
/// folded back into the reasoning loop as an observation.
#[derive(Debug, thiserror::Error)]
pub enum AgentError {
    /// The model asked for a tool name that is not in the registry.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// A tool's own logic or external call failed.
    #[error("Tool '{tool}' failed: {message}")]
    ToolExecution {
        /// Name of the failing tool.
        tool: String,
        /// What went wrong, suitable for feeding back to the model.
        message: String,
    },

    /// The language model gateway was unreachable, rate limited, returned
    /// an empty completion or timed out.
    #[error("Gateway error: {0}")]
    Gateway(String),

    /// A tool was registered under a name the registry already holds.
    #[error("Duplicate tool name: {0}")]
    DuplicateToolName(String),

    /// The reasoning loop hit its iteration bound without a final answer.
    #[error("No final answer after {0} reasoning steps")]
    IterationLimitExceeded(usize),

    /// The caller cancelled the episode before it finished.
    #[error("Episode cancelled")]
    Cancelled,

    /// Missing or invalid configuration.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AgentError>;
