//! String reversal tool.

use serde_json::json;

use crate::tools::{FunctionTool, ToolResult};

/// Reverses the given string by character.
#[must_use]
pub fn reverse_text(text: &str) -> String {
    text.chars().rev().collect()
}

/// Creates the string-reversal tool.
pub fn reverse_text_tool() -> FunctionTool {
    FunctionTool::new(
        "reverse_text",
        "Reverses a string. Input should be a single string.",
        |args, _ctx| {
            Box::pin(async move {
                let text = args.get("text").and_then(|v| v.as_str()).unwrap_or("");
                ToolResult::success(json!({ "reversed": reverse_text(text) }))
            })
        },
    )
    .with_parameters_schema(json!({
        "type": "object",
        "properties": {
            "text": {
                "type": "string",
                "description": "The string to reverse"
            }
        },
        "required": ["text"]
    }))
}
