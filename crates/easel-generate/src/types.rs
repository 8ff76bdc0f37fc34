use serde::{Deserialize, Serialize};

use crate::error::{GenerateError, Result};

/// Edge length used when a size token is absent, unparseable, or zero
const DEFAULT_EDGE: u32 = 512;

/// Inbound image generation request
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateRequest {
    /// Text description of the desired image
    #[serde(default)]
    pub prompt: String,
    /// Size of the generated image as "<width>x<height>"
    #[serde(default = "default_size")]
    pub size: String,
}

/// Default image size
fn default_size() -> String {
    "512x512".to_string()
}

impl Default for GenerateRequest {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            size: default_size(),
        }
    }
}

impl GenerateRequest {
    /// Parse a request from a raw body
    ///
    /// An absent (empty) body behaves like `{}`: all fields take their
    /// defaults. Anything else must be valid JSON — a whitespace-only body
    /// included — or it is a [`GenerateError::BodyParse`]. Unknown fields
    /// are ignored. The size is lowercased so "512X512" splits the same as
    /// "512x512".
    pub fn from_body(body: &str) -> Result<Self> {
        let mut request = if body.is_empty() {
            Self::default()
        } else {
            serde_json::from_str::<Self>(body).map_err(|e| GenerateError::BodyParse(e.to_string()))?
        };

        request.size = request.size.to_lowercase();
        Ok(request)
    }

    /// Image dimensions parsed from the size field
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::parse(&self.size)
    }
}

/// Width and height requested from the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Parse "<width>x<height>", substituting 512 for any edge that is
    /// missing, unparseable, or zero
    pub fn parse(size: &str) -> Self {
        let mut tokens = size.split('x');
        Self {
            width: edge(tokens.next()),
            height: edge(tokens.next()),
        }
    }
}

fn edge(token: Option<&str>) -> u32 {
    token
        .and_then(|t| t.trim().parse::<u32>().ok())
        .filter(|&value| value != 0)
        .unwrap_or(DEFAULT_EDGE)
}

/// Successful generation response: the image bytes as standard base64
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub b64: String,
}
