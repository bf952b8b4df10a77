//! Model response types.

use crate::models::Content;
use serde::{Deserialize, Serialize};

/// Response produced by a [`ChatModel`](crate::models::ChatModel) call.
#[derive(Debug, Clone)]
pub struct ModelResponse {
    content: Content,
    usage: TokenUsage,
}

impl ModelResponse {
    /// Creates a new response from content and token usage.
    #[must_use]
    pub const fn new(content: Content, usage: TokenUsage) -> Self {
        Self { content, usage }
    }

    /// Returns a reference to the generated content.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Returns the token usage reported by the provider.
    #[must_use]
    pub const fn usage(&self) -> TokenUsage {
        self.usage
    }

    /// Consumes the response and returns the content.
    #[must_use]
    pub fn into_content(self) -> Content {
        self.content
    }
}

/// Token accounting reported by a provider.
///
/// Providers do not always report every counter, so the individual fields
/// are optional internally; the accessors default missing values to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    prompt_tokens: Option<u32>,
    completion_tokens: Option<u32>,
    total_tokens: Option<u32>,
}

impl TokenUsage {
    /// Usage with no reported counters.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            prompt_tokens: None,
            completion_tokens: None,
            total_tokens: None,
        }
    }

    /// Usage from whatever counters the provider reported.
    #[must_use]
    pub const fn partial(
        prompt_tokens: Option<u32>,
        completion_tokens: Option<u32>,
        total_tokens: Option<u32>,
    ) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens,
        }
    }

    /// Input tokens consumed, zero if unreported.
    #[must_use]
    pub fn input_tokens(&self) -> u32 {
        self.prompt_tokens.unwrap_or(0)
    }

    /// Output tokens generated, zero if unreported.
    #[must_use]
    pub fn output_tokens(&self) -> u32 {
        self.completion_tokens.unwrap_or(0)
    }

    /// Total tokens; falls back to input + output when unreported.
    #[must_use]
    pub fn total_tokens(&self) -> u32 {
        self.total_tokens
            .unwrap_or_else(|| self.input_tokens() + self.output_tokens())
    }
}
