//! Agent definition and execution.

pub mod executor;

pub use executor::{Agent, AgentBuilder};
