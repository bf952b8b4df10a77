//! Execution state management for tools.
//!
//! Key-value storage scoped to one agent run. Tools sharing a
//! [`ToolContext`](crate::tools::ToolContext) can use it to pass data between
//! invocations within the same run.

use serde_json::Value;
use std::sync::Arc;

/// Trait encapsulating storage for execution-scoped key-value data.
pub trait ExecutionState: Send + Sync {
    /// Persists a JSON value under the provided key, replacing any previous
    /// value.
    fn set_state(&self, key: &str, value: Value);

    /// Retrieves a JSON value for the given key, cloning it out of the store.
    fn get_state(&self, key: &str) -> Option<Value>;
}

/// Default in-memory implementation backed by a concurrent map.
#[derive(Clone, Default)]
pub struct DefaultExecutionState {
    state: Arc<dashmap::DashMap<String, Value>>,
}

impl DefaultExecutionState {
    /// Construct a new execution state store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ExecutionState for DefaultExecutionState {
    fn set_state(&self, key: &str, value: Value) {
        self.state.insert(key.to_owned(), value);
    }

    fn get_state(&self, key: &str) -> Option<Value> {
        self.state.get(key).map(|entry| entry.value().clone())
    }
}
