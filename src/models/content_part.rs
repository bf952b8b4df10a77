//! Content parts for representing different types of message content.

use crate::tools::{ToolCall, ToolResponse};
use derive_more::From;
use serde::{Deserialize, Serialize};

/// A segment of content in a message.
///
/// Content parts represent the different types of content that can be
/// included in a message exchanged with an LLM: plain text, tool calls made
/// by the model, and the responses produced by executing those calls.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize, From)]
pub enum ContentPart {
    #[from(String, &String, &str)]
    Text(String),

    #[from]
    ToolCall(ToolCall),

    #[from]
    ToolResponse(ToolResponse),
}

impl ContentPart {
    /// Creates a new text content part.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::Text(text.into())
    }

    /// Returns a reference to the inner text if this part is text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        if let Self::Text(content) = self {
            Some(content.as_str())
        } else {
            None
        }
    }

    /// Consumes the part and returns the inner text.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        if let Self::Text(content) = self {
            Some(content)
        } else {
            None
        }
    }

    /// Returns a reference to the inner tool call if present.
    #[must_use]
    pub const fn as_tool_call(&self) -> Option<&ToolCall> {
        if let Self::ToolCall(tool_call) = self {
            Some(tool_call)
        } else {
            None
        }
    }

    /// Consumes the part and returns the inner tool call.
    #[must_use]
    pub fn into_tool_call(self) -> Option<ToolCall> {
        if let Self::ToolCall(tool_call) = self {
            Some(tool_call)
        } else {
            None
        }
    }

    /// Returns a reference to the inner tool response if present.
    #[must_use]
    pub const fn as_tool_response(&self) -> Option<&ToolResponse> {
        if let Self::ToolResponse(tool_response) = self {
            Some(tool_response)
        } else {
            None
        }
    }

    /// Consumes the part and returns the inner tool response.
    #[must_use]
    pub fn into_tool_response(self) -> Option<ToolResponse> {
        if let Self::ToolResponse(tool_response) = self {
            Some(tool_response)
        } else {
            None
        }
    }
}
