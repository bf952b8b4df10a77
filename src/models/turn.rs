//! Turns representing messages in a conversation.

use crate::models::Content;
use crate::tools::{ToolCall, ToolResponse};
use serde::{Deserialize, Serialize};

/// The role of a participant in a conversation.
#[non_exhaustive]
#[derive(Debug, Clone, Serialize, Deserialize, derive_more::Display)]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// A single turn in a conversation.
///
/// A turn pairs a [`Role`] with the [`Content`] produced by that participant.
/// Use the constructor methods ([`Turn::system`], [`Turn::user`],
/// [`Turn::assistant`]) to create turns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    role: Role,
    content: Content,
}

impl Turn {
    /// Creates a new `Turn` with a `System` role.
    pub fn system(content: impl Into<Content>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    /// Creates a new `Turn` with a `User` role.
    pub fn user(content: impl Into<Content>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    /// Creates a new `Turn` with an `Assistant` role.
    pub fn assistant(content: impl Into<Content>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }

    /// Returns a reference to the role of this turn.
    #[must_use]
    pub const fn role(&self) -> &Role {
        &self.role
    }

    /// Returns a reference to the content of this turn.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Consumes the turn and returns the content.
    #[must_use]
    pub fn into_content(self) -> Content {
        self.content
    }

    /// Consumes the turn and returns both role and content.
    #[must_use]
    pub fn into_parts(self) -> (Role, Content) {
        (self.role, self.content)
    }
}

impl From<Vec<ToolCall>> for Turn {
    fn from(tool_calls: Vec<ToolCall>) -> Self {
        Self {
            role: Role::Assistant,
            content: Content::from(tool_calls),
        }
    }
}

impl From<ToolResponse> for Turn {
    fn from(value: ToolResponse) -> Self {
        Self {
            role: Role::Tool,
            content: Content::from(value),
        }
    }
}
