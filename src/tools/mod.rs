//! Tools and toolsets for agent capabilities.
//!
//! Tools are named callables the model can invoke during a run. This module
//! provides the core abstractions plus the built-in demo tools.
//!
//! # Core Concepts
//!
//! - [`Tool`]: the fundamental trait for implementing a tool
//! - [`Toolset`]: collections of related tools
//! - [`FunctionTool`]: wrapper turning an async closure into a tool
//! - [`ToolContext`]: execution context passed to tools
//! - [`ExecutionState`]: key-value storage scoped to one agent run
//!
//! # Examples
//!
//! ```ignore
//! use deskagent::tools::{FunctionTool, ToolResult};
//! use serde_json::json;
//!
//! let weather_tool = FunctionTool::new(
//!     "get_weather",
//!     "Get current weather for a location",
//!     |args, _ctx| Box::pin(async move {
//!         ToolResult::success(json!({"temp": 72, "condition": "sunny"}))
//!     })
//! );
//! ```

pub mod base_tool;
pub mod base_toolset;
pub mod builtin;
pub mod execution_state;
pub mod function_tool;
pub mod tool;
pub mod tool_context;

pub use base_tool::Tool;
pub use base_toolset::{CombinedToolset, SimpleToolset, Toolset};
pub use execution_state::{DefaultExecutionState, ExecutionState};
pub use function_tool::FunctionTool;
pub use tool::{FunctionDeclaration, ToolCall, ToolResponse, ToolResult};
pub use tool_context::ToolContext;
