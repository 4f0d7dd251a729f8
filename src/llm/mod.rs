//! Language Model Gateways
//!
//! This module provides a unified interface for the language model behind the
//! reasoning loop. Providers are abstracted behind one small trait so the
//! executor, the tools and the tests can all inject whatever model they need.
//!
//! # Architecture
//!
//! - [`LLMGateway`] - The core trait: one prompt in, one completion out
//! - [`Provider`] - Provider selection plus a factory for building gateways
//!
//! The loop deliberately sends the whole transcript as a single prompt on
//! every step instead of using provider-side conversation state, so a gateway
//! holds no per-episode state and one instance is shared by every agent.
//!
//! # Supported Providers
//!
//! Enable providers via Cargo features:
//! - `openai` - OpenAI API and compatible endpoints (default)
//! - `ollama` - Local Ollama server
//!
//! # Example
//!
//! ```ignore
//! use hermes::llm::Provider;
//!
//! let gateway = Provider::OpenAI {
//!     api_key: std::env::var("OPENAI_API_KEY")?,
//!     api_base: "https://api.openai.com/v1".to_string(),
//!     model: "gpt-4o-mini".to_string(),
//! }
//! .create_gateway()?;
//!
//! let completion = gateway.complete("What is 2+2?").await?;
//! println!("{}", completion);
//! ```

/// Core gateway trait and provider factory.
pub mod gateway;

/// Ollama local inference gateway.
#[cfg(feature = "ollama")]
pub mod ollama;

/// OpenAI API gateway.
#[cfg(feature = "openai")]
pub mod openai;

pub use gateway::{LLMGateway, Provider};
