//! Wire-level tool types: declarations, calls, results, and responses.
//!
//! These types mirror the OpenAI function-calling shapes: a
//! [`FunctionDeclaration`] advertises a tool to the model, the model answers
//! with [`ToolCall`]s, and executed calls are fed back as [`ToolResponse`]s.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Declaration describing a tool's interface to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    name: String,
    description: String,
    /// JSON Schema for the parameters object.
    parameters: Value,
}

impl FunctionDeclaration {
    /// Creates a new declaration.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        parameters: Value,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// The tool name advertised to the model.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The natural-language description advertised to the model.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The JSON Schema for the parameters object.
    #[must_use]
    pub const fn parameters(&self) -> &Value {
        &self.parameters
    }
}

/// A tool invocation requested by the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCall {
    id: String,
    name: String,
    arguments: Value,
}

impl ToolCall {
    /// Creates a new tool call.
    pub fn new(id: impl Into<String>, name: impl Into<String>, arguments: Value) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            arguments,
        }
    }

    /// Provider-assigned identifier correlating call and response.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Name of the tool to invoke.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Arguments as a JSON value (an object for well-formed calls).
    #[must_use]
    pub const fn arguments(&self) -> &Value {
        &self.arguments
    }
}

/// Result of a tool execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResult {
    success: bool,
    data: Value,
    error_message: Option<String>,
}

impl ToolResult {
    /// Creates a successful result carrying the given data.
    #[must_use]
    pub const fn success(data: Value) -> Self {
        Self {
            success: true,
            data,
            error_message: None,
        }
    }

    /// Creates a failed result carrying an error message.
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: Value::Null,
            error_message: Some(message.into()),
        }
    }

    /// Whether the execution succeeded.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// The result data (null for failed executions).
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    /// The error message for failed executions.
    #[must_use]
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }
}

/// The outcome of executing one [`ToolCall`], ready to feed back to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    tool_call_id: String,
    result: ToolResult,
}

impl ToolResponse {
    /// Creates a new response for the given call id.
    pub fn new(tool_call_id: impl Into<String>, result: ToolResult) -> Self {
        Self {
            tool_call_id: tool_call_id.into(),
            result,
        }
    }

    /// The id of the call this response answers.
    #[must_use]
    pub fn tool_call_id(&self) -> &str {
        &self.tool_call_id
    }

    /// The execution result.
    #[must_use]
    pub const fn result(&self) -> &ToolResult {
        &self.result
    }

    /// Consumes the response and returns the result.
    #[must_use]
    pub fn into_result(self) -> ToolResult {
        self.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tool_result_constructors() {
        let ok = ToolResult::success(json!({"answer": 42}));
        assert!(ok.is_success());
        assert_eq!(ok.data()["answer"], json!(42));
        assert!(ok.error_message().is_none());

        let err = ToolResult::error("it broke");
        assert!(!err.is_success());
        assert_eq!(err.data(), &Value::Null);
        assert_eq!(err.error_message(), Some("it broke"));
    }

    #[test]
    fn tool_response_correlates_with_call() {
        let call = ToolCall::new("call-7", "calculator", json!({"expression": "2+2"}));
        let response = ToolResponse::new(call.id(), ToolResult::success(json!("4")));
        assert_eq!(response.tool_call_id(), "call-7");
        assert!(response.result().is_success());
    }
}
