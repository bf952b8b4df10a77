//! Function-based tool implementation.
//!
//! [`FunctionTool`] turns an async closure into a tool without manually
//! implementing the [`Tool`](super::Tool) trait.
//!
//! # Examples
//!
//! ```ignore
//! use deskagent::tools::{FunctionTool, ToolResult};
//! use serde_json::json;
//!
//! let tool = FunctionTool::new(
//!     "add_numbers",
//!     "Add two numbers together",
//!     |args, _ctx| Box::pin(async move {
//!         let a = args.get("a").and_then(|v| v.as_i64()).unwrap_or(0);
//!         let b = args.get("b").and_then(|v| v.as_i64()).unwrap_or(0);
//!         ToolResult::success(json!({"result": a + b}))
//!     })
//! ).with_parameters_schema(json!({
//!     "type": "object",
//!     "properties": {
//!         "a": {"type": "integer"},
//!         "b": {"type": "integer"}
//!     },
//!     "required": ["a", "b"]
//! }));
//! ```

use serde_json::{json, Value};
use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;

use crate::tools::base_tool::Tool;
use crate::tools::tool::{FunctionDeclaration, ToolResult};
use crate::tools::tool_context::ToolContext;

type ToolFuture<'a> = Pin<Box<dyn Future<Output = ToolResult> + Send + 'a>>;

/// Type alias for an async function that can be used as a tool.
pub type AsyncToolFunction = Box<
    dyn for<'a> Fn(HashMap<String, Value>, &'a ToolContext) -> ToolFuture<'a> + Send + Sync,
>;

/// A tool that wraps a simple async function.
///
/// The function receives arguments as a `HashMap` and returns a
/// [`ToolResult`]. The parameters schema defaults to an empty object; set it
/// with [`with_parameters_schema`](FunctionTool::with_parameters_schema) so
/// the model knows what arguments to provide.
pub struct FunctionTool {
    name: String,
    description: String,
    function: AsyncToolFunction,
    parameters_schema: Value,
}

impl FunctionTool {
    /// Creates a new function tool with the given name, description, and
    /// function.
    pub fn new<F>(name: impl Into<String>, description: impl Into<String>, function: F) -> Self
    where
        F: for<'a> Fn(HashMap<String, Value>, &'a ToolContext) -> ToolFuture<'a>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name: name.into(),
            description: description.into(),
            function: Box::new(function),
            parameters_schema: json!({}),
        }
    }

    /// Sets the JSON Schema for the function parameters.
    #[must_use]
    pub fn with_parameters_schema(mut self, schema: Value) -> Self {
        self.parameters_schema = schema;
        self
    }

    /// Returns a reference to the parameters schema.
    #[must_use]
    pub const fn parameters_schema(&self) -> &Value {
        &self.parameters_schema
    }
}

#[async_trait::async_trait]
impl Tool for FunctionTool {
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
            self.parameters_schema.clone(),
        )
    }

    async fn run_async(&self, args: HashMap<String, Value>, context: &ToolContext) -> ToolResult {
        (self.function)(args, context).await
    }
}
