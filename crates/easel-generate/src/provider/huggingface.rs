use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use super::ImageProvider;
use crate::{
    error::{GenerateError, Result},
    types::Dimensions,
};

/// Hugging Face inference API provider
///
/// Posts the prompt to `<base_url>/models/<model>` and returns the raw
/// image bytes from a successful response. A non-success status is passed
/// through with the provider's own error text.
pub(crate) struct HuggingFaceProvider {
    client: Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
}

impl HuggingFaceProvider {
    /// Create a new Hugging Face provider
    ///
    /// The API key stays optional: a missing key is reported per request,
    /// not at startup.
    pub fn new(api_key: Option<SecretString>, base_url: String, model: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
            model,
        }
    }
}

/// Wire format for the Hugging Face inference API request
#[derive(Serialize)]
struct HfRequest<'a> {
    inputs: &'a str,
    parameters: HfParameters,
}

#[derive(Serialize)]
struct HfParameters {
    width: u32,
    height: u32,
}

#[async_trait]
impl ImageProvider for HuggingFaceProvider {
    async fn generate(&self, prompt: &str, size: Dimensions) -> Result<Vec<u8>> {
        let Some(ref api_key) = self.api_key else {
            tracing::error!("no API key in configuration or environment");
            return Err(GenerateError::MissingApiKey);
        };

        let url = format!("{}/models/{}", self.base_url.trim_end_matches('/'), self.model);

        let wire_request = HfRequest {
            inputs: prompt,
            parameters: HfParameters {
                width: size.width,
                height: size.height,
            },
        };

        tracing::debug!(
            model = %self.model,
            width = size.width,
            height = size.height,
            "sending image generation request"
        );

        let response = self
            .client
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", api_key.expose_secret()),
            )
            .json(&wire_request)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(model = %self.model, error = %e, "image generation request failed");
                GenerateError::Connection(e.to_string())
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());

            tracing::error!(
                model = %self.model,
                status = %status,
                "Hugging Face inference API error"
            );

            return Err(GenerateError::Provider {
                status: status.as_u16(),
                message: error_text,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            tracing::error!(model = %self.model, error = %e, "failed to read image bytes");
            GenerateError::Connection(e.to_string())
        })?;

        tracing::debug!(model = %self.model, bytes = bytes.len(), "image generation request complete");

        Ok(bytes.to_vec())
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}
