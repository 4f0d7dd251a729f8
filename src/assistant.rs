//! Default assistant topology
//!
//! Wires the stock two-level hierarchy: a router agent whose only tools are
//! two wrapped sub-agents, one for general questions (direct answers, web
//! search, weather) and one for appointment handling. The router never calls
//! a leaf tool itself; it picks a sub-agent, forwards the query, and relays
//! the sub-agent's outcome.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::agent::{AgentExecutor, AgentTool, Episode, ExecutorConfig};
use crate::llm::LLMGateway;
use crate::tools::ToolRegistry;
use crate::tools::answer::AnswerTool;
use crate::tools::appointments::{RescheduleAppointmentTool, ScheduleAppointmentTool};
use crate::tools::search::WebSearchTool;
use crate::tools::weather::CurrentWeatherTool;
use crate::types::Result;
use crate::utils::config::Config;

/// Name of the general sub-agent as the router sees it.
pub const GENERAL_AGENT_NAME: &str = "general_queries";
/// Name of the appointment sub-agent as the router sees it.
pub const APPOINTMENT_AGENT_NAME: &str = "appointment_queries";

/// The assembled router hierarchy behind one chat entry point.
pub struct Assistant {
    router: AgentExecutor,
}

impl Assistant {
    /// Start building an assistant over `gateway`.
    pub fn builder(gateway: Arc<dyn LLMGateway>) -> AssistantBuilder {
        AssistantBuilder::new(gateway)
    }

    /// Build the stock topology from environment configuration.
    ///
    /// Search and weather tools are registered only when their API keys are
    /// configured; the general sub-agent always keeps the direct-answer tool.
    pub fn from_config(config: &Config) -> Result<Self> {
        let gateway = config.provider()?.create_gateway()?;
        let mut builder = Self::builder(gateway).executor_config(config.executor_config());

        if let Some(key) = &config.tools.serpapi_key {
            builder =
                builder.web_search(WebSearchTool::new(key).with_api_url(&config.tools.serpapi_url));
        }
        if let Some(key) = &config.tools.openweather_api_key {
            builder = builder
                .weather(CurrentWeatherTool::new(key).with_api_url(&config.tools.openweather_url));
        }

        builder.build()
    }

    /// Handle one user query end to end.
    ///
    /// Always returns a reply string: every internal failure has already
    /// degraded to a fixed user-facing message by the time the episode ends,
    /// so the transport layer never has nothing to say.
    pub async fn handle_query(&self, text: &str) -> String {
        self.router.run(text).await.into_answer()
    }

    /// Like [`handle_query`](Self::handle_query), but stops between reasoning
    /// steps when `cancel` fires.
    pub async fn handle_query_cancellable(
        &self,
        text: &str,
        cancel: &CancellationToken,
    ) -> String {
        self.router.run_cancellable(text, cancel).await.into_answer()
    }

    /// Run the router episode and keep the full record, for diagnostics.
    pub async fn run(&self, text: &str) -> Episode {
        self.router.run(text).await
    }

    /// The underlying router executor.
    pub fn router(&self) -> &AgentExecutor {
        &self.router
    }
}

/// Step-wise construction of the stock router topology.
pub struct AssistantBuilder {
    gateway: Arc<dyn LLMGateway>,
    executor_config: ExecutorConfig,
    web_search: Option<WebSearchTool>,
    weather: Option<CurrentWeatherTool>,
}

impl AssistantBuilder {
    fn new(gateway: Arc<dyn LLMGateway>) -> Self {
        Self {
            gateway,
            executor_config: ExecutorConfig::default(),
            web_search: None,
            weather: None,
        }
    }

    /// Loop policy applied to the router and both sub-agents.
    pub fn executor_config(mut self, config: ExecutorConfig) -> Self {
        self.executor_config = config;
        self
    }

    /// Enable web search in the general sub-agent.
    pub fn web_search(mut self, tool: WebSearchTool) -> Self {
        self.web_search = Some(tool);
        self
    }

    /// Enable weather lookups in the general sub-agent.
    pub fn weather(mut self, tool: CurrentWeatherTool) -> Self {
        self.weather = Some(tool);
        self
    }

    /// Assemble the router and its two sub-agents.
    pub fn build(self) -> Result<Assistant> {
        let mut general_tools = ToolRegistry::new();
        general_tools.register(Arc::new(AnswerTool::new(Arc::clone(&self.gateway))))?;
        if let Some(tool) = self.web_search {
            general_tools.register(Arc::new(tool))?;
        }
        if let Some(tool) = self.weather {
            general_tools.register(Arc::new(tool))?;
        }
        let general = Arc::new(AgentExecutor::with_config(
            "general",
            Arc::clone(&self.gateway),
            general_tools,
            self.executor_config.clone(),
        ));

        let mut appointment_tools = ToolRegistry::new();
        appointment_tools.register(Arc::new(ScheduleAppointmentTool))?;
        appointment_tools.register(Arc::new(RescheduleAppointmentTool))?;
        let appointments = Arc::new(AgentExecutor::with_config(
            "appointments",
            Arc::clone(&self.gateway),
            appointment_tools,
            self.executor_config.clone(),
        ));

        let mut router_tools = ToolRegistry::new();
        router_tools.register(Arc::new(AgentTool::new(
            GENERAL_AGENT_NAME,
            "Handles general queries like answering questions, web search, or checking \
             the weather. Input: the user's question, unchanged.",
            general,
        )))?;
        router_tools.register(Arc::new(AgentTool::new(
            APPOINTMENT_AGENT_NAME,
            "Handles appointment scheduling and rescheduling. Input: the user's request, \
             unchanged.",
            appointments,
        )))?;

        let router = AgentExecutor::with_config(
            "router",
            self.gateway,
            router_tools,
            self.executor_config,
        );

        Ok(Assistant { router })
    }
}
