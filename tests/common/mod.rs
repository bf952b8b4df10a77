//! Shared fixtures and helpers for integration tests.

use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use deskagent::errors::{AgentError, AgentResult};
use deskagent::models::{ChatModel, Content, Conversation, ModelResponse, TokenUsage};
use deskagent::tools::{FunctionDeclaration, Tool, ToolContext, ToolResult, Toolset};
use serde_json::Value;

/// A chat model returning pre-seeded responses.
///
/// Tests seed responses up-front and verify the inputs by inspecting
/// [`FakeChatModel::calls`]. When responses are exhausted the fake surfaces
/// an internal error so missing expectations are obvious.
#[derive(Clone)]
pub struct FakeChatModel {
    model_name: String,
    responses: Arc<Mutex<VecDeque<AgentResult<ModelResponse>>>>,
    calls: Arc<Mutex<Vec<Conversation>>>,
}

impl FakeChatModel {
    /// Creates a fake model that dequeues the provided responses.
    #[must_use]
    pub fn with_responses<I>(model_name: impl Into<String>, responses: I) -> Self
    where
        I: IntoIterator<Item = AgentResult<ModelResponse>>,
    {
        Self {
            model_name: model_name.into(),
            responses: Arc::new(Mutex::new(responses.into_iter().collect())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pushes an additional response to the back of the queue.
    pub fn push_response(&self, response: AgentResult<ModelResponse>) {
        self.responses
            .lock()
            .expect("fake model responses mutex poisoned")
            .push_back(response);
    }

    /// Returns the conversations the fake has been asked to process so far.
    #[must_use]
    pub fn calls(&self) -> Vec<Conversation> {
        self.calls
            .lock()
            .expect("fake model calls mutex poisoned")
            .clone()
    }

    /// Returns the number of times the fake model has been invoked.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .expect("fake model calls mutex poisoned")
            .len()
    }

    /// Creates a successful response from plain text for convenience.
    #[must_use]
    pub fn text_response(text: impl Into<String>) -> AgentResult<ModelResponse> {
        Ok(ModelResponse::new(
            Content::from_text(text),
            TokenUsage::empty(),
        ))
    }

    /// Creates a successful response from the provided content.
    #[must_use]
    pub fn content_response(content: Content) -> AgentResult<ModelResponse> {
        Ok(ModelResponse::new(content, TokenUsage::empty()))
    }
}

#[async_trait::async_trait]
impl ChatModel for FakeChatModel {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate_content(
        &self,
        conversation: Conversation,
        _toolset: Option<Arc<dyn Toolset>>,
    ) -> AgentResult<ModelResponse> {
        self.calls
            .lock()
            .expect("fake model calls mutex poisoned")
            .push(conversation);

        self.responses
            .lock()
            .expect("fake model responses mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| {
                Err(AgentError::Internal {
                    component: "FakeChatModel".to_string(),
                    reason: "No more fake responses queued".to_string(),
                })
            })
    }
}

/// Tool implementation that records invocations for assertions.
///
/// Clones share interior state, so one clone can be handed to an agent while
/// another is kept to inspect calls.
#[derive(Clone)]
pub struct RecordingTool {
    name: String,
    description: String,
    results: Arc<Mutex<VecDeque<ToolResult>>>,
    calls: Arc<Mutex<Vec<HashMap<String, Value>>>>,
}

impl RecordingTool {
    /// Creates a recording tool with a queue of results to hand out.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        results: impl Into<VecDeque<ToolResult>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            results: Arc::new(Mutex::new(results.into())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the number of times the tool was invoked.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls
            .lock()
            .expect("recording tool calls mutex poisoned")
            .len()
    }

    /// Returns the captured argument list.
    #[must_use]
    pub fn calls(&self) -> Vec<HashMap<String, Value>> {
        self.calls
            .lock()
            .expect("recording tool calls mutex poisoned")
            .clone()
    }
}

impl Default for RecordingTool {
    fn default() -> Self {
        let mut results = VecDeque::new();
        results.push_back(ToolResult::success(Value::Null));
        Self::new("recording_tool", "Records invocations", results)
    }
}

#[async_trait::async_trait]
impl Tool for RecordingTool {
    fn name(&self) -> &str {
        &self.name
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn declaration(&self) -> FunctionDeclaration {
        FunctionDeclaration::new(
            self.name.clone(),
            self.description.clone(),
            serde_json::json!({"type": "object"}),
        )
    }

    async fn run_async(&self, args: HashMap<String, Value>, _context: &ToolContext) -> ToolResult {
        self.calls
            .lock()
            .expect("recording tool calls mutex poisoned")
            .push(args);

        self.results
            .lock()
            .expect("recording tool results mutex poisoned")
            .pop_front()
            .unwrap_or_else(|| ToolResult::success(Value::Null))
    }
}
