//! Prompt Rewriter Port
//!
//! Turns verse text into an image-generation prompt using a text-completion
//! model. Implementations are free to pick the provider; the session only
//! cares that each call is an independent request with the same parameters.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::domain::{ImagePrompt, RewriteError, VerseText};

/// Token usage statistics reported by the completion service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenUsage {
    /// Tokens in the prompt
    #[serde(default)]
    pub prompt_tokens: u32,
    /// Tokens in the completion
    #[serde(default)]
    pub completion_tokens: u32,
    /// Total tokens used
    #[serde(default)]
    pub total_tokens: u32,
}

/// Prompt rewriter interface
///
/// # Example
///
/// ```rust,ignore
/// use mnemonic::ports::PromptRewriter;
///
/// struct CannedRewriter;
///
/// #[async_trait]
/// impl PromptRewriter for CannedRewriter {
///     async fn rewrite(&self, verse: &VerseText) -> Result<ImagePrompt, RewriteError> {
///         Ok(ImagePrompt::new(format!("a painting of {}", verse)))
///     }
/// }
/// ```
#[async_trait]
pub trait PromptRewriter: Send + Sync {
    /// Produce one candidate prompt for the verse
    async fn rewrite(&self, verse: &VerseText) -> Result<ImagePrompt, RewriteError>;

    /// Model identifier used for the rewrite (for logging)
    fn model_id(&self) -> &str {
        "unknown"
    }
}
