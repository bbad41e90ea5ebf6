use std::{env, fs, io};

use serde::Deserialize;

use crate::constants::{DEFAULT_PORT, DEFAULT_UPSTREAM_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL};
use crate::error::{Result, WebError};

const CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub upstream: UpstreamConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            upstream: UpstreamConfig::default(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_URL.to_string(),
            timeout_seconds: DEFAULT_UPSTREAM_TIMEOUT_SECS,
        }
    }
}

impl Config {
    /// Load `config.toml` when present, then apply `PORT` and `API_BASE_URL`
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(CONFIG_PATH)?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Load a config file; a missing file yields the defaults.
    pub fn load_from(path: &str) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    fn apply_env(&mut self) {
        if let Ok(url) = env::var("API_BASE_URL") {
            self.upstream.base_url = url;
        }
        if let Ok(raw) = env::var("PORT") {
            if let Ok(port) = raw.parse() {
                self.server.port = port;
            }
        }
    }

    fn validate(&self) -> Result<()> {
        if self.upstream.base_url.trim().is_empty() {
            return Err(WebError::Config(
                "upstream base_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
