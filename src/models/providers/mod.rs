//! Chat-model provider implementations.
//!
//! Currently a single provider is implemented: [`OpenAiChat`], which speaks
//! the OpenAI chat-completions wire format and therefore also covers
//! OpenAI-compatible gateways such as the GitHub Models inference endpoint.

mod openai;

pub use openai::OpenAiChat;
