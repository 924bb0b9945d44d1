use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub token: TokenConfig,
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct TokenConfig {
    /// Server-held signing secret. Override via environment in
    /// anything but local development.
    pub secret: String,
    pub issuer: String,
    pub ttl_secs: i64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Upper bound for a single store round trip, in seconds.
    pub timeout_secs: u64,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        Self::new_with_config("config/default")
    }

    pub fn new_with_config(config_path: &str) -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(File::with_name(config_path))
            .add_source(Environment::with_prefix("IDENTITY_SERVICE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}
