//! End-to-end tests for the stock assistant topology
//!
//! These tests exercise the full router -> specialist -> tool chain with a
//! scripted gateway, so every reply the "model" gives is fixed up front:
//! - routing to the right specialist
//! - relaying a specialist's answer verbatim
//! - delegation staying opaque when a specialist fails
//! - concurrent queries on one shared assistant

mod common;

use common::mocks::{FailingGateway, KeyedGateway, ScriptedGateway};
use hermes::agent::{ExecutorConfig, GATEWAY_FAILURE_MESSAGE, ITERATION_LIMIT_MESSAGE};
use hermes::assistant::{Assistant, APPOINTMENT_AGENT_NAME, GENERAL_AGENT_NAME};
use hermes::tools::weather::CurrentWeatherTool;
use serde_json::json;
use std::sync::Arc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_weather_question_end_to_end() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("q", "Paris"))
        .and(query_param("appid", "test-key"))
        .and(query_param("units", "metric"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "main": { "temp": 18.0 },
            "weather": [{ "description": "clear sky" }],
            "name": "Paris"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    // Call order: router reasons, the general agent reasons, the general
    // agent answers, the router relays.
    let gateway = ScriptedGateway::new(&[
        "Action: general_queries\nAction Input: What's the weather in Paris?",
        "Action: current_weather\nAction Input: Paris",
        "Final Answer: The current weather in Paris is 18°C with clear sky.",
        "Final Answer: The current weather in Paris is 18°C with clear sky.",
    ]);

    let weather =
        CurrentWeatherTool::new("test-key").with_api_url(format!("{}/weather", mock_server.uri()));
    let assistant = Assistant::builder(gateway).weather(weather).build().unwrap();

    let episode = assistant.run("What's the weather in Paris?").await;
    assert!(episode.is_done());
    assert_eq!(
        episode.answer(),
        "The current weather in Paris is 18°C with clear sky."
    );

    // From the router's side the whole exchange is one delegation step.
    let steps = episode.transcript().steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].action, GENERAL_AGENT_NAME);
    assert_eq!(
        steps[0].observation,
        "The current weather in Paris is 18°C with clear sky."
    );
}

#[tokio::test]
async fn test_appointment_request_routes_to_the_appointment_agent() {
    let gateway = ScriptedGateway::new(&[
        "Action: appointment_queries\nAction Input: Book a dentist visit Friday 10am",
        "Action: schedule_appointment\nAction Input: dentist visit Friday 10am",
        "Final Answer: Your appointment is booked: dentist visit Friday 10am",
        "Final Answer: Your appointment is booked: dentist visit Friday 10am",
    ]);
    let assistant = Assistant::builder(gateway).build().unwrap();

    let episode = assistant
        .run("Please book a dentist visit Friday 10am")
        .await;
    assert!(episode.is_done());
    assert_eq!(
        episode.answer(),
        "Your appointment is booked: dentist visit Friday 10am"
    );

    let steps = episode.transcript().steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].action, APPOINTMENT_AGENT_NAME);
}

#[tokio::test]
async fn test_handle_query_always_returns_a_reply() {
    let assistant = Assistant::builder(Arc::new(FailingGateway)).build().unwrap();

    let reply = assistant.handle_query("anything at all").await;
    assert_eq!(reply, GATEWAY_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_specialist_iteration_limit_stays_opaque() {
    // The general agent burns both its iterations on unparsable replies and
    // gives up; the router just sees that fixed message as an observation.
    let gateway = ScriptedGateway::new(&[
        "Action: general_queries\nAction Input: hmm",
        "gibberish without any markers",
        "still gibberish",
        "Final Answer: I could not find an answer.",
    ]);
    let config = ExecutorConfig {
        max_iterations: 2,
        ..ExecutorConfig::default()
    };
    let assistant = Assistant::builder(gateway)
        .executor_config(config)
        .build()
        .unwrap();

    let episode = assistant.run("hmm").await;
    assert!(
        episode.is_done(),
        "a specialist giving up must not end the router episode"
    );
    assert_eq!(episode.answer(), "I could not find an answer.");

    let steps = episode.transcript().steps();
    assert_eq!(steps.len(), 1);
    assert_eq!(steps[0].observation, ITERATION_LIMIT_MESSAGE);
}

#[tokio::test]
async fn test_concurrent_queries_share_one_assistant() {
    // Stateless rules keyed on prompt content keep interleaved episodes
    // deterministic. Specific rules (with an observation) come first.
    let gateway = KeyedGateway::new()
        .rule(
            &["general_queries:", "Observation: pong one"],
            "Final Answer: pong one",
        )
        .rule(
            &["general_queries:", "ping one"],
            "Action: general_queries\nAction Input: ping one",
        )
        .rule(
            &["answer_questions:", "Observation: pong one"],
            "Final Answer: pong one",
        )
        .rule(
            &["answer_questions:", "ping one"],
            "Action: answer_questions\nAction Input: ping one",
        )
        .rule(&["ping one"], "pong one")
        .rule(
            &["general_queries:", "Observation: pong two"],
            "Final Answer: pong two",
        )
        .rule(
            &["general_queries:", "ping two"],
            "Action: general_queries\nAction Input: ping two",
        )
        .rule(
            &["answer_questions:", "Observation: pong two"],
            "Final Answer: pong two",
        )
        .rule(
            &["answer_questions:", "ping two"],
            "Action: answer_questions\nAction Input: ping two",
        )
        .rule(&["ping two"], "pong two")
        .into_arc();

    let assistant = Assistant::builder(gateway).build().unwrap();

    let (first, second) = tokio::join!(
        assistant.handle_query("ping one"),
        assistant.handle_query("ping two")
    );
    assert_eq!(first, "pong one");
    assert_eq!(second, "pong two");
}
