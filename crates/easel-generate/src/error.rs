use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GenerateError>;

/// Image generation adapter errors with appropriate HTTP status codes
///
/// The inbound contract fixes the exact response bodies, so every variant
/// renders as plain text via [`GenerateError::client_message`].
#[derive(Debug, Error)]
pub enum GenerateError {
    /// Request carried no prompt (or an empty one)
    #[error("request is missing a prompt")]
    MissingPrompt,

    /// No API key in configuration or environment
    #[error("no provider API key configured")]
    MissingApiKey,

    /// Request body was present but not valid JSON
    #[error("malformed request body: {0}")]
    BodyParse(String),

    /// Provider API returned a non-success status; passed through verbatim
    #[error("provider returned status {status}: {message}")]
    Provider { status: u16, message: String },

    /// Network or transport failure on the outbound call
    #[error("connection error: {0}")]
    Connection(String),
}

impl GenerateError {
    /// Get the appropriate HTTP status code for this error
    ///
    /// Provider failures keep the provider's own status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPrompt => StatusCode::BAD_REQUEST,
            Self::Provider { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            Self::MissingApiKey | Self::BodyParse(_) | Self::Connection(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Response body for this error, character-exact per the inbound contract
    pub fn client_message(&self) -> String {
        match self {
            Self::MissingPrompt => "Missing prompt".to_string(),
            Self::MissingApiKey => "Server misconfigured: missing API key".to_string(),
            Self::BodyParse(message) | Self::Connection(message) => {
                format!("Server error: {message}")
            }
            Self::Provider { message, .. } => format!("HF error: {message}"),
        }
    }
}

impl IntoResponse for GenerateError {
    fn into_response(self) -> Response {
        (self.status_code(), self.client_message()).into_response()
    }
}
