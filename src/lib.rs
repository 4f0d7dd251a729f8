//! # H.E.R.M.E.S - Hierarchical Engine for Routing Messages to Embedded Sub-agents
//!
//! A routing assistant built in Rust. A top-level router agent reads each
//! query, delegates it to a specialist sub-agent (general queries or
//! appointment management), and relays the specialist's answer. Every agent
//! runs the same bounded reason-act-observe loop over its own tool set, so
//! sub-agents are just tools from the router's point of view.
//!
//! ## Overview
//!
//! H.E.R.M.E.S can be used in two ways:
//!
//! 1. **As a standalone assistant** - Run the `hermes-router` binary
//! 2. **As a library** - Compose your own agents and tools in your project
//!
//! ## Quick Start (Library Usage)
//!
//! Add to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! hermes-router = "0.2"
//! ```
//!
//! ### Basic Example
//!
//! ```rust,ignore
//! use hermes::{Assistant, Provider};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Talk to a local Ollama model
//!     let provider = Provider::Ollama {
//!         base_url: "http://localhost:11434".to_string(),
//!         model: "llama3.2".to_string(),
//!     };
//!
//!     // Build the stock router and ask it something
//!     let assistant = Assistant::builder(provider.create_gateway()?).build()?;
//!     let answer = assistant.handle_query("What's the weather in Paris?").await;
//!     println!("{}", answer);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Composing Your Own Agents
//!
//! ```rust,ignore
//! use hermes::{AgentExecutor, AgentTool, ToolRegistry};
//! use std::sync::Arc;
//!
//! let mut tools = ToolRegistry::new();
//! tools.register(Arc::new(my_tool))?;
//!
//! // An executor wrapped in AgentTool is callable from another executor,
//! // which is how the router reaches its specialists.
//! let specialist = Arc::new(AgentExecutor::new("research", gateway.clone(), tools));
//! let as_tool = AgentTool::new(
//!     "research_queries",
//!     "Handles research questions. Input: the question, unchanged.",
//!     specialist,
//! );
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `openai` | OpenAI API support (default) |
//! | `ollama` | Ollama local inference |
//! | `all-llm` | Both providers |
//!
//! ## Modules
//!
//! - [`agent`] - The reasoning loop: executor, directives, transcripts
//! - [`assistant`] - The stock router-over-specialists topology
//! - [`cli`] - Argument parsing and terminal output
//! - [`llm`] - LLM gateway implementations
//! - [`tools`] - Tool trait, registry, and the built-in tools
//! - [`types`] - Common types and error handling
//! - [`utils`] - Environment-based configuration

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

/// The reasoning loop and everything episodic around it.
pub mod agent;
/// The assembled assistant (router plus specialist sub-agents).
pub mod assistant;
/// Command-line interface parsing and colored output.
pub mod cli;
/// LLM gateway abstractions and provider clients.
pub mod llm;
/// Tool trait, registry, and built-in tools.
pub mod tools;
/// Core types and error handling.
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use agent::{
    AgentExecutor, AgentTool, Directive, Episode, EpisodeStatus, ExecutorConfig, Step, Transcript,
};
pub use assistant::{Assistant, AssistantBuilder};
pub use llm::{LLMGateway, Provider};
pub use tools::{Tool, ToolRegistry};
pub use types::{AgentError, Result};
pub use utils::Config;
