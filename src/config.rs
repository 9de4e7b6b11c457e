//! Configuration loading.
//!
//! The subsystem consumes two pieces of configuration: the local
//! identity's nickname (used to recognize self-kicks and self-parts)
//! and the channel list to join once the server signals readiness.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Membership subsystem configuration.
///
/// ```toml
/// nick = "wildbot"
/// channels = ["#lobby", "#ops"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// The local identity's nickname.
    pub nick: String,
    /// Channels joined once at the startup-complete signal.
    #[serde(default)]
    pub channels: Vec<String>,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
