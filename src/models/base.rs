//! Base chat-model trait.
//!
//! This module defines [`ChatModel`], a unified interface over LLM chat
//! providers, plus the [`ChatModelExt`] extension trait with ergonomic
//! helpers.

use std::sync::Arc;

use crate::errors::AgentResult;
use crate::models::{Conversation, ModelResponse};
use crate::tools::Toolset;

/// Base trait for chat-model implementations.
///
/// Implementations must be `Send + Sync` so they can be shared across async
/// tasks. Provider-specific failures should be mapped into
/// [`AgentError`](crate::errors::AgentError) variants.
#[async_trait::async_trait]
pub trait ChatModel: Send + Sync {
    /// Returns the model identifier for this instance (e.g. "openai/gpt-4o").
    fn model_name(&self) -> &str;

    /// Generates content in response to a conversation.
    ///
    /// The optional toolset is advertised to the model; any tool calls the
    /// model decides to make come back as
    /// [`ContentPart::ToolCall`](crate::models::ContentPart::ToolCall) parts
    /// in the response. Executing them is the caller's job (see
    /// [`Agent`](crate::agent::Agent)).
    ///
    /// # Errors
    ///
    /// Returns an error if the provider request fails, authentication is
    /// rejected, the request is rate-limited, or the response cannot be
    /// parsed.
    async fn generate_content(
        &self,
        conversation: Conversation,
        toolset: Option<Arc<dyn Toolset>>,
    ) -> AgentResult<ModelResponse>;
}

/// Extension trait providing ergonomic helpers for [`ChatModel`].
///
/// Automatically implemented for every `ChatModel`, so a plain string can be
/// passed wherever a conversation is expected:
///
/// ```ignore
/// let response = model.generate("What is 2+2?", None).await?;
/// ```
#[async_trait::async_trait]
pub trait ChatModelExt: ChatModel {
    /// Generates content from any type convertible to a [`Conversation`].
    async fn generate<T: Into<Conversation> + Send>(
        &self,
        conversation: T,
        toolset: Option<Arc<dyn Toolset>>,
    ) -> AgentResult<ModelResponse> {
        self.generate_content(conversation.into(), toolset).await
    }
}

impl<T: ChatModel + ?Sized> ChatModelExt for T {}
