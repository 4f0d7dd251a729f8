use crate::types::{AgentError, Result, ToolDescription};
use async_trait::async_trait;
use std::sync::Arc;

/// A named capability an agent can invoke during its reasoning loop.
///
/// Tools take one free-text input and produce one free-text output; the
/// description is what the model sees when deciding which tool to call, so
/// it must state the tool's purpose and expected input shape.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Name the model uses to select this tool. Unique within a registry.
    fn name(&self) -> &str;

    /// One or two sentences shown to the model in the reasoning prompt.
    fn description(&self) -> &str;

    /// Run the tool against a single input string.
    async fn invoke(&self, input: &str) -> Result<String>;
}

/// The fixed set of tools one agent can reach.
///
/// Registration order is preserved and is the order tool descriptions are
/// rendered into the reasoning prompt. A registry is assembled up front and
/// never mutated once an executor owns it.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { tools: Vec::new() }
    }

    /// Add a tool. Rejects empty names and names already taken.
    pub fn register(&mut self, tool: Arc<dyn Tool>) -> Result<()> {
        let name = tool.name();
        if name.is_empty() {
            return Err(AgentError::Configuration(
                "tool name must not be empty".to_string(),
            ));
        }
        if self.has_tool(name) {
            return Err(AgentError::DuplicateToolName(name.to_string()));
        }
        self.tools.push(tool);
        Ok(())
    }

    /// Look up a tool by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn Tool>> {
        self.tools
            .iter()
            .find(|tool| tool.name() == name)
            .cloned()
            .ok_or_else(|| AgentError::UnknownTool(name.to_string()))
    }

    /// Descriptions of every tool, in registration order.
    pub fn describe_all(&self) -> Vec<ToolDescription> {
        self.tools
            .iter()
            .map(|tool| ToolDescription {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
            })
            .collect()
    }

    /// Get a list of all registered tool names, in registration order.
    pub fn tool_names(&self) -> Vec<String> {
        self.tools.iter().map(|t| t.name().to_string()).collect()
    }

    /// Check if a tool is registered
    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name() == name)
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the registry holds no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
