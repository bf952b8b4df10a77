//! Toolset abstractions for grouping related tools.
//!
//! - [`Toolset`]: trait for tool collections with lifecycle management
//! - [`SimpleToolset`]: basic in-memory collection of tools
//! - [`CombinedToolset`]: composes two toolsets into one

use std::sync::Arc;

use crate::tools::base_tool::Tool;

/// Base trait for toolsets - collections of related tools.
///
/// The [`close`](Toolset::close) method is called when the toolset is no
/// longer needed; for in-memory toolsets it is a no-op, but toolsets backed
/// by external services can release connections there.
#[async_trait::async_trait]
pub trait Toolset: Send + Sync {
    /// Returns all tools in the toolset.
    async fn get_tools(&self) -> Vec<Arc<dyn Tool>>;

    /// Performs cleanup and releases resources held by the toolset.
    async fn close(&self);
}

/// Default implementation of `Toolset` for simple collections of tools.
#[derive(Default)]
pub struct SimpleToolset {
    tools: Vec<Arc<dyn Tool>>,
}

impl SimpleToolset {
    /// Creates a toolset from a vector of tools.
    #[must_use]
    pub fn new(tools: Vec<Arc<dyn Tool>>) -> Self {
        Self { tools }
    }

    /// Adds a single tool to this toolset.
    pub fn add_tool(&mut self, tool: Arc<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Builder pattern for adding a tool.
    #[must_use]
    pub fn with_tool(mut self, tool: Arc<dyn Tool>) -> Self {
        self.tools.push(tool);
        self
    }
}

#[async_trait::async_trait]
impl Toolset for SimpleToolset {
    async fn get_tools(&self) -> Vec<Arc<dyn Tool>> {
        self.tools.clone()
    }

    async fn close(&self) {
        // Simple toolset doesn't need cleanup
    }
}

/// Composes two toolsets into one.
pub struct CombinedToolset {
    first: Arc<dyn Toolset>,
    second: Arc<dyn Toolset>,
}

impl CombinedToolset {
    /// Creates a toolset exposing the tools of both inputs, in order.
    #[must_use]
    pub fn new(first: Arc<dyn Toolset>, second: Arc<dyn Toolset>) -> Self {
        Self { first, second }
    }
}

#[async_trait::async_trait]
impl Toolset for CombinedToolset {
    async fn get_tools(&self) -> Vec<Arc<dyn Tool>> {
        let mut all_tools = self.first.get_tools().await;
        all_tools.extend(self.second.get_tools().await);
        all_tools
    }

    async fn close(&self) {
        self.first.close().await;
        self.second.close().await;
    }
}
