//! Agent Execution
//!
//! This module holds the reasoning loop and everything it consumes: the
//! prompt that teaches the model the directive format, the parser that reads
//! the model's replies, the transcript that accumulates steps, and the
//! composite wrapper that lets one agent drive another.
//!
//! # Module Structure
//!
//! - [`executor`](crate::agent::executor) - The bounded reason/act/observe loop
//! - [`directive`](crate::agent::directive) - Parsing model replies into directives
//! - [`transcript`](crate::agent::transcript) - Per-episode step records
//! - [`composite`](crate::agent::composite) - Agents wrapped as tools
//!
//! # Example
//!
//! ```ignore
//! use hermes::agent::AgentExecutor;
//! use hermes::tools::ToolRegistry;
//!
//! let executor = AgentExecutor::new("general", gateway, tools);
//! let episode = executor.run("What's the weather in Paris?").await;
//! println!("{}", episode.answer());
//! ```

/// Agents wrapped as tools for hierarchical delegation.
pub mod composite;
/// Parsing of model responses into directives.
pub mod directive;
/// The bounded reasoning loop.
pub mod executor;
mod prompt;
/// Episode transcripts.
pub mod transcript;

pub use composite::AgentTool;
pub use directive::Directive;
pub use executor::{
    AgentExecutor, Episode, EpisodeStatus, ExecutorConfig, CANCELLED_MESSAGE,
    GATEWAY_FAILURE_MESSAGE, ITERATION_LIMIT_MESSAGE,
};
pub use transcript::{Step, Transcript};
