//! Data models for conversations and chat models.
//!
//! This module provides the core types for representing LLM interactions:
//! conversations, turns, content, responses, and the base chat-model trait.

pub mod base;
pub mod content;
pub mod content_part;
pub mod conversation;
pub mod providers;
pub mod response;
pub mod turn;

// Re-export primary types for convenient access
pub use self::base::{ChatModel, ChatModelExt};
pub use self::content::Content;
pub use self::content_part::ContentPart;
pub use self::conversation::Conversation;
pub use self::response::{ModelResponse, TokenUsage};
pub use self::turn::{Role, Turn};
