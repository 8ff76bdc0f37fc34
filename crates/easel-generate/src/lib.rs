#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod error;
mod provider;
mod server;
mod types;

use std::sync::Arc;

use axum::{Json, Router, extract::State, routing::post};

pub use error::{GenerateError, Result};
pub use types::{Dimensions, GenerateRequest, GenerateResponse};

pub use server::Server;

/// Build the image generation adapter from configuration
///
/// # Errors
///
/// Returns an error if the outbound HTTP client fails to initialize
pub fn build_server(config: &easel_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        Server::from_config(&config.provider)
            .map_err(|e| anyhow::anyhow!("failed to initialize image generation adapter: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for image generation
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new().route("/generate", post(generate))
}

/// Handle image generation requests
///
/// The body is taken as raw text rather than through the `Json` extractor:
/// an empty body must behave like `{}` and a malformed body must surface as
/// a server error, not an extractor rejection.
async fn generate(State(server): State<Arc<Server>>, body: String) -> Result<Json<GenerateResponse>> {
    let request = GenerateRequest::from_body(&body)?;

    tracing::debug!(size = %request.size, "image generation handler called");

    let response = server.generate(&request).await?;

    tracing::debug!("image generation complete");

    Ok(Json(response))
}
