//! Conversation threads for LLM interactions.
//!
//! A [`Conversation`] is an optional system prompt plus an ordered sequence
//! of [`Turn`]s. It is the unit of input to a [`ChatModel`](crate::models::ChatModel).

use crate::models::content::Content;
use crate::models::content_part::ContentPart;
use crate::models::turn::Turn;
use serde::{Deserialize, Serialize};

/// A conversation containing a system prompt and a sequence of turns.
///
/// Use the builder-style methods ([`with_system`](Conversation::with_system),
/// [`add_turn`](Conversation::add_turn), [`add_turns`](Conversation::add_turns))
/// to construct complex conversations, or the `From` impls to lift a plain
/// string into a single user turn.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Conversation {
    system: Option<String>,
    #[serde(default)]
    turns: Vec<Turn>,
}

impl Conversation {
    /// Creates a new `Conversation` from a vector of `Turn`s.
    #[must_use]
    pub const fn new(turns: Vec<Turn>) -> Self {
        Self {
            system: None,
            turns,
        }
    }

    /// Creates a new `Conversation` with an initial system prompt.
    pub fn from_system(content: impl Into<String>) -> Self {
        Self {
            system: Some(content.into()),
            turns: Vec::new(),
        }
    }

    /// Creates a new `Conversation` with a single user turn.
    pub fn from_user(content: impl Into<String>) -> Self {
        Self {
            system: None,
            turns: vec![Turn::user(content.into())],
        }
    }

    /// Sets or replaces the system prompt.
    #[must_use]
    pub fn with_system(mut self, system: impl Into<String>) -> Self {
        self.system = Some(system.into());
        self
    }

    /// Adds a single turn to the conversation.
    #[must_use]
    pub fn add_turn(mut self, turn: impl Into<Turn>) -> Self {
        self.turns.push(turn.into());
        self
    }

    /// Adds multiple turns to the conversation.
    #[must_use]
    pub fn add_turns<I>(mut self, turns: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Turn>,
    {
        self.turns.extend(turns.into_iter().map(Into::into));
        self
    }

    /// Returns a reference to the system prompt, if any.
    #[must_use]
    pub fn system(&self) -> Option<&str> {
        self.system.as_deref()
    }

    /// Returns a reference to the turns in this conversation.
    #[must_use]
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    /// Consumes the conversation and returns the turns.
    #[must_use]
    pub fn into_turns(self) -> Vec<Turn> {
        self.turns
    }

    /// Consumes the conversation and returns both system prompt and turns.
    #[must_use]
    pub fn into_parts(self) -> (Option<String>, Vec<Turn>) {
        (self.system, self.turns)
    }
}

impl From<Content> for Conversation {
    /// Treats the content as a user message.
    fn from(content: Content) -> Self {
        Self::new(vec![Turn::user(content)])
    }
}

impl From<ContentPart> for Conversation {
    /// Treats the content part as a user message.
    fn from(part: ContentPart) -> Self {
        Self::from(Content::from(part))
    }
}

impl From<Turn> for Conversation {
    /// Creates a `Conversation` with a single turn.
    fn from(turn: Turn) -> Self {
        Self::new(vec![turn])
    }
}

impl From<Vec<Turn>> for Conversation {
    fn from(turns: Vec<Turn>) -> Self {
        Self::new(turns)
    }
}

impl From<&str> for Conversation {
    /// Treats the string as a user message.
    fn from(user: &str) -> Self {
        Self::from_user(user)
    }
}

impl From<&String> for Conversation {
    /// Treats the string as a user message.
    fn from(user: &String) -> Self {
        Self::from_user(user.as_str())
    }
}

impl From<String> for Conversation {
    /// Treats the string as a user message.
    fn from(user: String) -> Self {
        Self::from_user(user)
    }
}
