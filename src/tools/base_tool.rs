use serde_json::Value;
use std::collections::HashMap;

use crate::tools::tool::{FunctionDeclaration, ToolResult};
use crate::tools::tool_context::ToolContext;

/// Core trait for all tools in the system.
///
/// Tools provide functionality the model can invoke during an agent run.
/// Implementations must be `Send + Sync` so toolsets can be shared across
/// async tasks.
#[async_trait::async_trait]
pub trait Tool: Send + Sync {
    /// The name of the tool, unique within an agent.
    fn name(&self) -> &str;

    /// Human-readable description of what this tool does.
    fn description(&self) -> &str;

    /// The declaration describing this tool's interface to the model.
    fn declaration(&self) -> FunctionDeclaration;

    /// Executes the tool with the given arguments and context.
    ///
    /// Failures are reported through [`ToolResult::error`] rather than a
    /// `Result`, so they can be fed back to the model as regular content.
    async fn run_async(&self, args: HashMap<String, Value>, context: &ToolContext) -> ToolResult;
}
