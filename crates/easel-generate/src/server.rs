use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use easel_config::ProviderConfig;
use easel_config::provider::{DEFAULT_BASE_URL, DEFAULT_MODEL};

use crate::{
    error::{GenerateError, Result},
    provider::{ImageProvider, huggingface::HuggingFaceProvider},
    types::{GenerateRequest, GenerateResponse},
};

/// Image generation adapter: validates the request, makes exactly one
/// outbound provider call, and shapes the result
pub struct Server {
    provider: Box<dyn ImageProvider>,
}

impl Server {
    /// Build the adapter from provider configuration
    ///
    /// The API key is resolved once here (config file first, then the
    /// process environment) and injected into the provider; requests see a
    /// read-only snapshot.
    pub(crate) fn from_config(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.resolve_api_key();
        if api_key.is_none() {
            tracing::warn!("no provider API key configured; generation requests will fail");
        }

        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let model = config.model.clone().unwrap_or_else(|| DEFAULT_MODEL.to_string());

        let provider = HuggingFaceProvider::new(api_key, base_url, model);

        tracing::debug!(provider = provider.name(), "image generation adapter initialized");

        Ok(Self {
            provider: Box::new(provider),
        })
    }

    /// Run one generation request through the provider
    ///
    /// One linear attempt: validate, call out, base64-encode. No retries.
    pub async fn generate(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        if request.prompt.is_empty() {
            return Err(GenerateError::MissingPrompt);
        }

        let bytes = self
            .provider
            .generate(&request.prompt, request.dimensions())
            .await?;

        Ok(GenerateResponse {
            b64: STANDARD.encode(bytes),
        })
    }
}
