//! Image Generator Port

use async_trait::async_trait;

use crate::domain::{ImageError, ImagePrompt, ImageResult};

/// Service interface for rendering a prompt into an image
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Request one new image; every call is a fresh generation.
    async fn generate(&self, prompt: &ImagePrompt) -> Result<ImageResult, ImageError>;
}
