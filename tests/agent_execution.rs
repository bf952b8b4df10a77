//! Integration tests for the agent tool-calling loop.

mod common;

use std::collections::VecDeque;
use std::sync::Arc;

use common::{FakeChatModel, RecordingTool};
use deskagent::errors::AgentError;
use deskagent::models::{Content, ContentPart};
use deskagent::tools::{SimpleToolset, Tool, ToolCall, ToolResult, Toolset};
use deskagent::Agent;
use serde_json::json;

#[tokio::test]
async fn plain_text_response_returns_without_tools() {
    let model = FakeChatModel::with_responses("fake-model", [FakeChatModel::text_response("4")]);
    let agent = Agent::builder(model.clone()).build();

    let answer = agent.run("What is 2+2?").await.expect("agent result");
    assert_eq!(answer, "4");
    assert_eq!(model.call_count(), 1);
    assert!(!agent.has_tools());
}

#[tokio::test]
async fn tool_call_executes_before_final_response() {
    let tool_request = Content::from_parts(vec![ContentPart::ToolCall(ToolCall::new(
        "call-1",
        "recording_tool",
        json!({ "input": "ping" }),
    ))]);

    let model =
        FakeChatModel::with_responses("fake-model", [FakeChatModel::content_response(tool_request)]);
    model.push_response(FakeChatModel::text_response("done"));

    let results = VecDeque::from([ToolResult::success(json!({"ok": true}))]);
    let recorder = RecordingTool::new("recording_tool", "Records usage", results);

    let agent = Agent::builder(model.clone())
        .with_tool(recorder.clone())
        .build();

    let (answer, conversation) = agent.run_and_continue("Need help").await.expect("agent run");
    assert_eq!(answer, "done");
    assert_eq!(recorder.call_count(), 1, "tool should have been called once");
    assert_eq!(recorder.calls()[0]["input"], json!("ping"));

    // user + assistant(tool call) + tool response + final assistant
    assert_eq!(conversation.turns().len(), 4);
    assert_eq!(model.call_count(), 2);
}

#[tokio::test]
async fn failed_tool_result_is_fed_back_to_the_model() {
    let tool_request = Content::from_parts(vec![ContentPart::ToolCall(ToolCall::new(
        "call-1",
        "recording_tool",
        json!({}),
    ))]);

    let model =
        FakeChatModel::with_responses("fake-model", [FakeChatModel::content_response(tool_request)]);
    model.push_response(FakeChatModel::text_response("the tool failed"));

    let results = VecDeque::from([ToolResult::error("boom")]);
    let recorder = RecordingTool::new("recording_tool", "Records usage", results);

    let agent = Agent::builder(model).with_tool(recorder.clone()).build();

    // A failing tool does not abort the run; the error is surfaced to the model
    let answer = agent.run("try it").await.expect("agent run");
    assert_eq!(answer, "the tool failed");
    assert_eq!(recorder.call_count(), 1);
}

#[tokio::test]
async fn run_fails_when_tool_missing() {
    let tool_call = ToolCall::new("call-1", "unknown_tool", json!({ "value": "data" }));
    let model = FakeChatModel::with_responses(
        "fake-model",
        [FakeChatModel::content_response(Content::from_parts(vec![
            ContentPart::ToolCall(tool_call),
        ]))],
    );
    let agent = Agent::builder(model).build();

    let err = agent.run("Test").await.expect_err("should fail");
    assert!(matches!(err, AgentError::ToolNotFound { .. }));
}

#[tokio::test]
async fn run_fails_on_non_object_tool_arguments() {
    let tool_call = ToolCall::new("call-1", "recording_tool", json!("not an object"));
    let model = FakeChatModel::with_responses(
        "fake-model",
        [FakeChatModel::content_response(Content::from_parts(vec![
            ContentPart::ToolCall(tool_call),
        ]))],
    );
    let agent = Agent::builder(model)
        .with_tool(RecordingTool::default())
        .build();

    let err = agent.run("Test").await.expect_err("should fail");
    assert!(matches!(err, AgentError::ToolValidationError { .. }));
}

#[tokio::test]
async fn exceeding_iteration_budget_returns_error() {
    let looping_call = || {
        FakeChatModel::content_response(Content::from_parts(vec![ContentPart::ToolCall(
            ToolCall::new("call-1", "recording_tool", json!({})),
        )]))
    };
    let model = FakeChatModel::with_responses("fake-model", [looping_call(), looping_call()]);

    let agent = Agent::builder(model)
        .with_tool(RecordingTool::default())
        .with_max_iterations(1)
        .build();

    let err = agent
        .run("loop")
        .await
        .expect_err("should fail on iteration cap");
    assert!(matches!(err, AgentError::Internal { .. }));
}

#[tokio::test]
async fn system_instructions_are_applied_to_the_conversation() {
    let model = FakeChatModel::with_responses("fake-model", [FakeChatModel::text_response("ok")]);
    let agent = Agent::builder(model.clone())
        .with_system_instructions("Be terse")
        .build();

    agent.run("hello").await.expect("agent run");

    let calls = model.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].system(), Some("Be terse"));
    assert_eq!(
        calls[0].turns()[0].content().first_text(),
        Some("hello")
    );
}

#[tokio::test]
async fn builder_composes_tools_and_toolsets() {
    let model = FakeChatModel::with_responses("fake", [FakeChatModel::text_response("ok")]);
    let toolset = Arc::new(SimpleToolset::new(vec![Arc::new(RecordingTool::new(
        "extra_tool",
        "Extra",
        VecDeque::new(),
    )) as Arc<dyn Tool>])) as Arc<dyn Toolset>;

    let agent = Agent::builder(model)
        .with_tool(RecordingTool::default())
        .with_toolset(toolset)
        .build();

    assert!(agent.has_tools());
    let tools = agent.toolset().expect("toolset").get_tools().await;
    let names: Vec<&str> = tools.iter().map(|t| t.name()).collect();
    assert!(names.contains(&"recording_tool"));
    assert!(names.contains(&"extra_tool"));
}

#[tokio::test]
async fn model_error_propagates() {
    let model = FakeChatModel::with_responses(
        "fake-model",
        [Err(AgentError::LlmRateLimit {
            provider: "OpenAI".to_string(),
        })],
    );
    let agent = Agent::builder(model).build();

    let err = agent.run("hello").await.expect_err("should fail");
    assert!(matches!(err, AgentError::LlmRateLimit { .. }));
}
