//! Configuration module
//!
//! Layered loading: optional `config.toml`, then `SERVER_`-prefixed
//! environment variables, on top of built-in defaults.

use crate::server::ListenConfig;
use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    pub access_log: bool,
    pub access_log_file: Option<String>,
    pub error_log_file: Option<String>,
}

/// Static asset projection settings. When `dir` is unset, no assets are
/// projected and only explicitly registered routes serve.
#[derive(Debug, Deserialize, Clone)]
pub struct AssetsConfig {
    pub dir: Option<String>,
    pub route_prefix: String,
    pub mode: AssetMode,
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetMode {
    Eager,
    Lazy,
}

impl Config {
    /// Load from the default "config" basename (config.toml when present).
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from specified file path (without extension)
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(config::Environment::with_prefix("SERVER"))
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("logging.access_log", true)?
            .set_default("assets.route_prefix", "/")?
            .set_default("assets.mode", "eager")?
            .build()?;

        settings.try_deserialize()
    }

    pub fn listen_config(&self) -> ListenConfig {
        ListenConfig {
            host: self.server.host.clone(),
            port: self.server.port,
            access_log: self.logging.access_log,
        }
    }
}
