pub(crate) mod huggingface;

use async_trait::async_trait;

use crate::{error::Result, types::Dimensions};

/// Trait for text-to-image provider implementations
#[async_trait]
pub(crate) trait ImageProvider: Send + Sync {
    /// Generate one image for the prompt, returning the raw image bytes
    async fn generate(&self, prompt: &str, size: Dimensions) -> Result<Vec<u8>>;

    /// Get the provider name
    fn name(&self) -> &str;
}
