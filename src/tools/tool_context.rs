//! Execution context passed to tools.
//!
//! Tools receive a [`ToolContext`] instead of any wider agent internals, so
//! their capabilities stay limited to safe operations. Currently the context
//! exposes execution-scoped key-value state shared by all tools in one run.

use std::sync::Arc;

use serde_json::Value;

use crate::tools::execution_state::{DefaultExecutionState, ExecutionState};

/// Safe, limited execution context handed to every tool invocation.
#[derive(Clone)]
pub struct ToolContext {
    state: Arc<dyn ExecutionState>,
}

impl ToolContext {
    /// Creates a context with a fresh in-memory state store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: Arc::new(DefaultExecutionState::new()),
        }
    }

    /// Creates a context around an existing state store.
    #[must_use]
    pub fn with_state(state: Arc<dyn ExecutionState>) -> Self {
        Self { state }
    }

    /// Stores a value in the execution-scoped state.
    pub fn set_state(&self, key: &str, value: Value) {
        self.state.set_state(key, value);
    }

    /// Reads a value from the execution-scoped state.
    #[must_use]
    pub fn get_state(&self, key: &str) -> Option<Value> {
        self.state.get_state(key)
    }
}

impl Default for ToolContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn context_state_is_shared_between_clones() {
        let context = ToolContext::new();
        let clone = context.clone();

        context.set_state("seen", json!(true));
        assert_eq!(clone.get_state("seen"), Some(json!(true)));
    }
}
