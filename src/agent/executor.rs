//! Agent executor with toolset support.
//!
//! [`Agent`] wraps a chat model, manages a toolset, and runs the standard
//! tool-calling loop: send the conversation, execute any tool calls the
//! model requests, feed the results back, and repeat until the model
//! produces a final text answer.

use std::collections::HashMap;
use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::errors::{AgentError, AgentResult};
use crate::models::{ChatModel, ContentPart, Conversation, Turn};
use crate::tools::{CombinedToolset, SimpleToolset, Tool, ToolContext, ToolResponse, Toolset};

const DEFAULT_MAX_TOOL_ITERATIONS: usize = 10;

/// Agent executing LLM calls with tool support.
///
/// # Examples
///
/// ```ignore
/// let agent = Agent::builder(model)
///     .with_system_instructions("You are a helpful assistant.")
///     .with_tool(calculator_tool())
///     .build();
///
/// let answer = agent.run("What is 25 * 4 + 10?").await?;
/// ```
pub struct Agent {
    model: Arc<dyn ChatModel>,
    system_instructions: Option<String>,
    toolset: Option<Arc<dyn Toolset>>,
    max_iterations: usize,
}

impl Agent {
    /// Creates a new builder for constructing an `Agent`.
    ///
    /// The model is required and must be provided upfront.
    pub fn builder(model: impl ChatModel + 'static) -> AgentBuilder {
        AgentBuilder::new(model)
    }

    /// Runs the agent on the given input and returns the final answer text.
    ///
    /// # Errors
    ///
    /// Returns an error if the model call fails, a requested tool is not
    /// registered, or the tool-iteration budget is exceeded.
    pub async fn run<I>(&self, input: I) -> AgentResult<String>
    where
        I: Into<Conversation> + Send,
    {
        let (text, _) = self.run_and_continue(input).await?;
        Ok(text)
    }

    /// Runs the agent and returns both the final answer text and the full
    /// conversation (including tool calls and responses) for follow-up work.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`run`](Agent::run).
    pub async fn run_and_continue<I>(&self, input: I) -> AgentResult<(String, Conversation)>
    where
        I: Into<Conversation> + Send,
    {
        let mut conversation = input.into();
        if let Some(instructions) = &self.system_instructions {
            conversation = conversation.with_system(instructions.clone());
        }

        let toolset = self.toolset.clone();
        let tool_map = match &toolset {
            Some(ts) => load_tool_map(ts).await,
            None => HashMap::new(),
        };

        let result = self
            .run_tool_loop(conversation, toolset.clone(), &tool_map)
            .await;

        if let Some(ts) = toolset {
            ts.close().await;
        }

        result
    }

    /// Checks if this agent has any tools configured.
    #[must_use]
    pub fn has_tools(&self) -> bool {
        self.toolset.is_some()
    }

    /// Returns a reference to the configured toolset, if any.
    #[must_use]
    pub fn toolset(&self) -> Option<&Arc<dyn Toolset>> {
        self.toolset.as_ref()
    }

    /// Returns the model backing this agent.
    #[must_use]
    pub fn model(&self) -> &Arc<dyn ChatModel> {
        &self.model
    }

    async fn run_tool_loop(
        &self,
        mut conversation: Conversation,
        toolset: Option<Arc<dyn Toolset>>,
        tool_map: &HashMap<String, Arc<dyn Tool>>,
    ) -> AgentResult<(String, Conversation)> {
        let tool_context = ToolContext::new();
        let mut iterations = 0usize;

        loop {
            iterations += 1;
            if iterations > self.max_iterations {
                return Err(AgentError::Internal {
                    component: "agent".to_string(),
                    reason: format!(
                        "Exceeded tool interaction iterations (max: {})",
                        self.max_iterations
                    ),
                });
            }

            debug!(
                model = self.model.model_name(),
                iteration = iterations,
                "agent loop iteration"
            );

            let response = self
                .model
                .generate_content(conversation.clone(), toolset.clone())
                .await?;

            let content = response.into_content();

            let tool_calls: Vec<_> = content
                .parts()
                .iter()
                .filter_map(|part| match part {
                    ContentPart::ToolCall(call) => Some(call.clone()),
                    _ => None,
                })
                .collect();

            // No tool calls means the model produced its final answer
            if tool_calls.is_empty() {
                let text = content.joined_texts().unwrap_or_default();
                conversation = conversation.add_turn(Turn::assistant(content));
                return Ok((text, conversation));
            }

            conversation = conversation.add_turn(Turn::assistant(content));

            for call in tool_calls {
                let tool = tool_map
                    .get(call.name())
                    .ok_or_else(|| AgentError::ToolNotFound {
                        tool_name: call.name().to_string(),
                    })?;

                let args = value_to_arguments(call.name(), call.arguments())?;

                debug!(tool = call.name(), "executing tool call");
                let result = tool.run_async(args, &tool_context).await;
                let response = ToolResponse::new(call.id(), result);
                conversation = conversation.add_turn(Turn::from(response));
            }
        }
    }
}

/// Loads tools from a toolset into a name-indexed map.
async fn load_tool_map(toolset: &Arc<dyn Toolset>) -> HashMap<String, Arc<dyn Tool>> {
    let tools = toolset.get_tools().await;
    let mut map = HashMap::with_capacity(tools.len());
    for tool in tools {
        map.insert(tool.name().to_string(), tool);
    }
    map
}

fn value_to_arguments(tool_name: &str, value: &Value) -> AgentResult<HashMap<String, Value>> {
    match value {
        Value::Null => Ok(HashMap::new()),
        Value::Object(map) => Ok(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
        _ => Err(AgentError::ToolValidationError {
            tool_name: tool_name.to_string(),
            reason: "Tool arguments must be a JSON object".to_string(),
        }),
    }
}

/// Builder for constructing [`Agent`] instances.
///
/// Individual tools added via [`with_tool`](AgentBuilder::with_tool) are
/// collected into a [`SimpleToolset`] and combined with any toolsets added
/// via [`with_toolset`](AgentBuilder::with_toolset).
pub struct AgentBuilder {
    model: Arc<dyn ChatModel>,
    system_instructions: Option<String>,
    tools: Vec<Arc<dyn Tool>>,
    toolsets: Vec<Arc<dyn Toolset>>,
    max_iterations: usize,
}

impl AgentBuilder {
    /// Creates a new builder with the required model. Prefer
    /// [`Agent::builder`] over calling this directly.
    pub fn new(model: impl ChatModel + 'static) -> Self {
        Self {
            model: Arc::new(model) as Arc<dyn ChatModel>,
            system_instructions: None,
            tools: Vec::new(),
            toolsets: Vec::new(),
            max_iterations: DEFAULT_MAX_TOOL_ITERATIONS,
        }
    }

    /// Sets the system instructions prepended to every run.
    #[must_use]
    pub fn with_system_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.system_instructions = Some(instructions.into());
        self
    }

    /// Adds an individual tool to the agent.
    #[must_use]
    pub fn with_tool<T>(mut self, tool: T) -> Self
    where
        T: Tool + 'static,
    {
        self.tools.push(Arc::new(tool));
        self
    }

    /// Adds multiple individual tools at once.
    #[must_use]
    pub fn with_tools<I, T>(mut self, tools: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Tool + 'static,
    {
        for tool in tools {
            self.tools.push(Arc::new(tool));
        }
        self
    }

    /// Adds a toolset to the agent. Multiple toolsets are combined.
    #[must_use]
    pub fn with_toolset(mut self, toolset: Arc<dyn Toolset>) -> Self {
        self.toolsets.push(toolset);
        self
    }

    /// Overrides the maximum number of tool iterations before failing.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations.max(1);
        self
    }

    /// Builds the [`Agent`] instance.
    #[must_use]
    pub fn build(self) -> Agent {
        let mut all_toolsets = self.toolsets;

        if !self.tools.is_empty() {
            all_toolsets.push(Arc::new(SimpleToolset::new(self.tools)) as Arc<dyn Toolset>);
        }

        let combined_toolset = if all_toolsets.is_empty() {
            None
        } else {
            let mut iter = all_toolsets.into_iter();
            let first = iter.next();
            first.map(|first| {
                iter.fold(first, |acc, toolset| {
                    Arc::new(CombinedToolset::new(acc, toolset)) as Arc<dyn Toolset>
                })
            })
        };

        Agent {
            model: self.model,
            system_instructions: self.system_instructions,
            toolset: combined_toolset,
            max_iterations: self.max_iterations,
        }
    }
}
