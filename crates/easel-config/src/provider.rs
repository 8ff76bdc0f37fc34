use secrecy::SecretString;
use serde::Deserialize;

/// Environment variable consulted when no API key is set in the config file
pub const API_KEY_ENV: &str = "HUGGINGFACE_API_KEY";

/// Model used when the config file does not name one
pub const DEFAULT_MODEL: &str = "stabilityai/stable-diffusion-2-1";

/// Hugging Face inference API base URL
pub const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co";

/// Image generation provider configuration
///
/// Every field is optional; an empty `[provider]` section (or none at all)
/// runs against the Hugging Face inference API with the key taken from the
/// `HUGGINGFACE_API_KEY` environment variable.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key; falls back to `HUGGINGFACE_API_KEY` when unset
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override
    #[serde(default)]
    pub base_url: Option<String>,
    /// Model identifier override (e.g. "stabilityai/stable-diffusion-xl-base-1.0")
    #[serde(default)]
    pub model: Option<String>,
}

impl ProviderConfig {
    /// Resolve the API key from the config file or the process environment
    ///
    /// Returns `None` when neither source has a key. That is not a startup
    /// error; the handler reports the missing key per request.
    pub fn resolve_api_key(&self) -> Option<SecretString> {
        self.api_key
            .clone()
            .or_else(|| std::env::var(API_KEY_ENV).ok().map(SecretString::from))
    }
}
