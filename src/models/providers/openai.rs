//! OpenAI-compatible chat-completions provider.
//!
//! API Documentation: <https://platform.openai.com/docs/api-reference/chat>
//!
//! The same wire format is served by several gateways; the base URL is
//! configurable so this client also talks to the GitHub Models inference
//! endpoint (<https://docs.github.com/en/github-models>).

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::error;

use crate::errors::{AgentError, AgentResult};
use crate::models::{ChatModel, Content, ContentPart, Conversation, ModelResponse, Role, TokenUsage};
use crate::tools::{ToolCall, Toolset};

const OPENAI_BASE_URL: &str = "https://api.openai.com/v1/chat/completions";
const GITHUB_MODELS_BASE_URL: &str = "https://models.github.ai/inference/chat/completions";

/// Chat-completions client for OpenAI and OpenAI-compatible endpoints.
///
/// # Authentication
///
/// The API key can be provided explicitly, loaded from the
/// `OPENAI_API_KEY` environment variable via [`from_env`](OpenAiChat::from_env),
/// or be a GitHub token when targeting GitHub Models via
/// [`github_models`](OpenAiChat::github_models).
///
/// # Examples
///
/// ```ignore
/// use deskagent::models::providers::OpenAiChat;
/// use deskagent::models::{ChatModel, Conversation};
///
/// let llm = OpenAiChat::github_models("openai/gpt-4o", token).with_temperature(0.0);
/// let response = llm.generate_content(Conversation::from_user("Hello!"), None).await?;
/// ```
pub struct OpenAiChat {
    model_name: String,
    api_key: String,
    base_url: String,
    max_tokens: Option<u32>,
    temperature: Option<f32>,
    client: reqwest::Client,
}

impl OpenAiChat {
    /// Environment variable name for the OpenAI API key.
    pub const API_KEY_ENV: &'static str = "OPENAI_API_KEY";

    /// Creates a new client for api.openai.com with an explicit API key.
    pub fn new(model_name: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            model_name: model_name.into(),
            api_key: api_key.into(),
            base_url: OPENAI_BASE_URL.to_string(),
            max_tokens: None,
            temperature: None,
            client: reqwest::Client::new(),
        }
    }

    /// Creates a new client loading the API key from `OPENAI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment variable is not set or is empty.
    pub fn from_env(model_name: impl Into<String>) -> AgentResult<Self> {
        let api_key =
            std::env::var(Self::API_KEY_ENV).map_err(|_| AgentError::MissingConfiguration {
                field: Self::API_KEY_ENV.to_string(),
            })?;

        if api_key.is_empty() {
            return Err(AgentError::InvalidConfiguration {
                field: Self::API_KEY_ENV.to_string(),
                reason: "API key cannot be empty".to_string(),
            });
        }

        Ok(Self::new(model_name, api_key))
    }

    /// Creates a new client pointed at the GitHub Models inference endpoint,
    /// authenticating with a GitHub token.
    pub fn github_models(model_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self::new(model_name, token).with_base_url(GITHUB_MODELS_BASE_URL)
    }

    /// Sets a custom base URL for the chat-completions endpoint.
    ///
    /// Useful for OpenAI-compatible APIs or when using a proxy/gateway.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the maximum number of tokens to generate.
    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Sets the sampling temperature (0.0 to 2.0).
    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Converts a conversation into the chat-completions request format.
    async fn build_request_payload(
        &self,
        conversation: Conversation,
        toolset: Option<Arc<dyn Toolset>>,
    ) -> AgentResult<Value> {
        let (system_prompt, turns) = conversation.into_parts();

        let mut messages = Vec::new();

        if let Some(system) = system_prompt {
            messages.push(json!({
                "role": "system",
                "content": system
            }));
        }

        for turn in turns {
            let (role, content) = turn.into_parts();

            match role {
                Role::System | Role::User => {
                    let role_str = match role {
                        Role::System => "system",
                        _ => "user",
                    };
                    if let Some(text) = content.joined_texts() {
                        messages.push(json!({
                            "role": role_str,
                            "content": text
                        }));
                    }
                }
                Role::Assistant => {
                    // Assistant turns can carry text and tool_calls
                    let mut texts = Vec::new();
                    let mut tool_calls = Vec::new();

                    for part in content {
                        match part {
                            ContentPart::Text(text) => texts.push(text),
                            ContentPart::ToolCall(tool_call) => {
                                tool_calls.push(json!({
                                    "type": "function",
                                    "id": tool_call.id(),
                                    "function": {
                                        "name": tool_call.name(),
                                        "arguments": tool_call.arguments().to_string()
                                    }
                                }));
                            }
                            _ => {}
                        }
                    }

                    let mut message = json!({
                        "role": "assistant",
                        "content": texts.join("\n\n")
                    });
                    if !tool_calls.is_empty() {
                        message["tool_calls"] = json!(tool_calls);
                    }
                    messages.push(message);
                }
                Role::Tool => {
                    // Tool responses go as role: "tool" with tool_call_id
                    for part in content {
                        if let ContentPart::ToolResponse(tool_response) = part {
                            let result = tool_response.result();
                            let content_value = if result.is_success() {
                                result.data().to_string()
                            } else {
                                json!({
                                    "error": result.error_message().unwrap_or("Unknown error")
                                })
                                .to_string()
                            };

                            messages.push(json!({
                                "role": "tool",
                                "content": content_value,
                                "tool_call_id": tool_response.tool_call_id()
                            }));
                        }
                    }
                }
            }
        }

        let mut payload = json!({
            "model": self.model_name,
            "messages": messages
        });

        if let Some(temperature) = self.temperature {
            payload["temperature"] = json!(temperature);
        }

        if let Some(max_tokens) = self.max_tokens {
            payload["max_tokens"] = json!(max_tokens);
        }

        if let Some(toolset) = toolset {
            let tools_list = toolset.get_tools().await;
            if !tools_list.is_empty() {
                let tools: Vec<Value> = tools_list
                    .iter()
                    .map(|tool| {
                        let decl = tool.declaration();
                        json!({
                            "type": "function",
                            "function": {
                                "name": decl.name(),
                                "description": decl.description(),
                                "parameters": decl.parameters()
                            }
                        })
                    })
                    .collect();

                payload["tools"] = json!(tools);
            }
        }

        Ok(payload)
    }

    /// Parses a chat-completions response body into [`Content`].
    fn parse_response(&self, response_body: &Value) -> AgentResult<Content> {
        let mut content = Content::default();

        let first_choice = response_body
            .get("choices")
            .and_then(|v| v.as_array())
            .and_then(|arr| arr.first())
            .ok_or_else(|| AgentError::LlmProvider {
                provider: self.provider_name().to_string(),
                message: "Missing or invalid 'choices' field in response".to_string(),
            })?;

        let message = first_choice
            .get("message")
            .ok_or_else(|| AgentError::LlmProvider {
                provider: self.provider_name().to_string(),
                message: "Missing 'message' field in choice".to_string(),
            })?;

        if let Some(text) = message.get("content").and_then(|v| v.as_str()) {
            if !text.trim().is_empty() {
                content.push(ContentPart::Text(text.trim().to_string()));
            }
        }

        if let Some(tool_calls) = message.get("tool_calls").and_then(|v| v.as_array()) {
            for tool_call in tool_calls {
                let id = tool_call
                    .get("id")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| AgentError::LlmProvider {
                        provider: self.provider_name().to_string(),
                        message: "Missing 'id' in tool call".to_string(),
                    })?;

                let function =
                    tool_call
                        .get("function")
                        .ok_or_else(|| AgentError::LlmProvider {
                            provider: self.provider_name().to_string(),
                            message: "Missing 'function' in tool call".to_string(),
                        })?;

                let name = function
                    .get("name")
                    .and_then(|v| v.as_str())
                    .ok_or_else(|| AgentError::LlmProvider {
                        provider: self.provider_name().to_string(),
                        message: "Missing 'name' in tool call function".to_string(),
                    })?;

                // Arguments arrive as a JSON string; tolerate objects too
                let arguments = function.get("arguments").cloned().unwrap_or(Value::Null);
                let arguments = match arguments {
                    Value::String(s) => serde_json::from_str(&s).unwrap_or(Value::Null),
                    other => other,
                };

                content.push(ContentPart::ToolCall(ToolCall::new(id, name, arguments)));
            }
        }

        Ok(content)
    }

    /// Parses token usage from a chat-completions response body.
    fn parse_usage(&self, response_body: &Value) -> TokenUsage {
        let Some(usage_obj) = response_body.get("usage") else {
            return TokenUsage::empty();
        };

        let prompt_tokens = usage_obj
            .get("prompt_tokens")
            .and_then(Value::as_u64)
            .map(|v| v as u32);

        let completion_tokens = usage_obj
            .get("completion_tokens")
            .and_then(Value::as_u64)
            .map(|v| v as u32);

        let total_tokens = usage_obj
            .get("total_tokens")
            .and_then(Value::as_u64)
            .map(|v| v as u32);

        TokenUsage::partial(prompt_tokens, completion_tokens, total_tokens)
    }

    fn provider_name(&self) -> &'static str {
        if self.base_url == GITHUB_MODELS_BASE_URL {
            "GitHub Models"
        } else {
            "OpenAI"
        }
    }
}

#[async_trait::async_trait]
impl ChatModel for OpenAiChat {
    fn model_name(&self) -> &str {
        &self.model_name
    }

    async fn generate_content(
        &self,
        conversation: Conversation,
        toolset: Option<Arc<dyn Toolset>>,
    ) -> AgentResult<ModelResponse> {
        let payload = self.build_request_payload(conversation, toolset).await?;

        let response = self
            .client
            .post(&self.base_url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            error!(provider = self.provider_name(), %status, "chat completion request failed: {error_body}");

            return Err(match status.as_u16() {
                401 | 403 => AgentError::LlmAuthentication {
                    provider: self.provider_name().to_string(),
                },
                429 => AgentError::LlmRateLimit {
                    provider: self.provider_name().to_string(),
                },
                _ => AgentError::LlmProvider {
                    provider: self.provider_name().to_string(),
                    message: format!("HTTP {status}: {error_body}"),
                },
            });
        }

        let response_body: Value = response.json().await?;

        let content = self.parse_response(&response_body)?;
        let usage = self.parse_usage(&response_body);

        Ok(ModelResponse::new(content, usage))
    }
}
