//! deskagent: a small agent SDK plus demo binary.
//!
//! The crate wires an OpenAI-compatible chat model (pointed at the GitHub
//! Models inference endpoint by default) to a set of callable tools through
//! a tool-calling executor loop. Four built-in demo tools are provided:
//! a calculator, a clock, string reversal, and a mock weather lookup.

pub mod agent;
pub mod config;
pub mod errors;
pub mod models;
pub mod tools;

// Re-export key types for easier access
pub use agent::{Agent, AgentBuilder};
pub use config::AppConfig;
pub use errors::{AgentError, AgentResult};
