#![allow(clippy::must_use_candidate)]

mod env;
pub mod health;
mod loader;
pub mod provider;
pub mod server;

use serde::Deserialize;

pub use health::HealthConfig;
pub use provider::ProviderConfig;
pub use server::ServerConfig;

/// Top-level easel configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Image generation provider configuration
    #[serde(default)]
    pub provider: ProviderConfig,
}
