//! Built-in Tools for Agent Capabilities
//!
//! This module provides the tool infrastructure that lets agents act beyond
//! text generation: looking things up, fetching live data and confirming
//! appointment requests.
//!
//! # Module Structure
//!
//! - [`registry`](crate::tools::registry) - The [`Tool`] trait and per-agent tool registry
//! - [`answer`](crate::tools::answer) - Direct model-backed question answering
//! - [`search`](crate::tools::search) - Web search via a SerpAPI-compatible endpoint
//! - [`weather`](crate::tools::weather) - Current conditions via OpenWeatherMap
//! - [`appointments`](crate::tools::appointments) - Scheduling and rescheduling stubs
//!
//! Every tool takes a single free-text input and returns a single free-text
//! output, so an agent executor can also be wrapped as a tool (see
//! [`crate::agent::AgentTool`]) and handed to another agent.

/// Direct-answer tool backed by the language model.
pub mod answer;
/// Appointment scheduling and rescheduling tools.
pub mod appointments;
/// Tool registry for managing available tools.
pub mod registry;
/// Web search tool using SerpAPI.
pub mod search;
/// Current-weather tool using OpenWeatherMap.
pub mod weather;

pub use registry::{Tool, ToolRegistry};
