//! Current date/time tool.

use chrono::Local;
use serde_json::json;

use crate::tools::{FunctionTool, ToolResult};

/// Returns the current local date and time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn current_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Creates the clock tool. The tool takes no arguments.
pub fn current_time_tool() -> FunctionTool {
    FunctionTool::new(
        "current_time",
        "Use this tool to get the current date and time. \
         Use this whenever the user asks what time or date it is.",
        |_args, _ctx| {
            Box::pin(async move { ToolResult::success(json!({ "time": current_timestamp() })) })
        },
    )
    .with_parameters_schema(json!({
        "type": "object",
        "properties": {}
    }))
}
