use std::path::PathBuf;

use clap::Parser;

/// Easel image generation gateway
#[derive(Debug, Parser)]
#[command(name = "easel", about = "Forwards text prompts to a text-to-image provider")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "easel.toml", env = "EASEL_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "EASEL_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,

    /// Log filter when RUST_LOG is unset
    #[arg(long, default_value = "info", env = "EASEL_LOG")]
    pub log_filter: String,
}
