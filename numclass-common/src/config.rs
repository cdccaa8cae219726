//! Configuration loading and resolution
//!
//! Each setting is resolved in priority order:
//! 1. Command-line argument (highest priority)
//! 2. Environment variable
//! 3. TOML config file
//! 4. Compiled default (fallback)
//!
//! Sources 1 and 2 are merged by the service's argument parser and arrive
//! here as [`ConfigOverrides`]. A missing config file at the default
//! location is not an error; the compiled defaults apply.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, info};

use crate::{Error, Result};

/// Default listen address
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Default base URL of the numeric-trivia service
pub const DEFAULT_FACT_SERVICE_URL: &str = "http://numbersapi.com";

/// Default bound on a single fun fact lookup
pub const DEFAULT_FACT_TIMEOUT_SECS: u64 = 5;

/// Fully resolved service configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
    /// Base URL; lookups go to `{fact_service_url}/{n}/math`
    pub fact_service_url: String,
    pub fact_timeout: Duration,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            fact_service_url: DEFAULT_FACT_SERVICE_URL.to_string(),
            fact_timeout: Duration::from_secs(DEFAULT_FACT_TIMEOUT_SECS),
        }
    }
}

impl ServiceConfig {
    /// `host:port` string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Reject values the service cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(Error::Config("host must not be empty".to_string()));
        }
        if self.fact_service_url.trim().is_empty() {
            return Err(Error::Config(
                "fact_service_url must not be empty".to_string(),
            ));
        }
        if !(self.fact_service_url.starts_with("http://")
            || self.fact_service_url.starts_with("https://"))
        {
            return Err(Error::Config(format!(
                "fact_service_url must be an http(s) URL: {}",
                self.fact_service_url
            )));
        }
        if self.fact_timeout.is_zero() {
            return Err(Error::Config(
                "fact_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Contents of `config.toml`. Every key is optional.
///
/// ```toml
/// host = "127.0.0.1"
/// port = 8080
/// fact_service_url = "http://numbersapi.com"
/// fact_timeout_secs = 5
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub fact_service_url: Option<String>,
    pub fact_timeout_secs: Option<u64>,
}

impl TomlConfig {
    /// Parse a config file. Missing, unreadable or malformed files are errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Parse TOML text
    pub fn parse(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Values supplied on the command line or through environment variables
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub fact_service_url: Option<String>,
    pub fact_timeout_secs: Option<u64>,
}

/// Platform config file location: `<config_dir>/numclass/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("numclass").join("config.toml"))
}

/// Merges overrides, the config file and compiled defaults
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    overrides: ConfigOverrides,
    config_file: Option<PathBuf>,
}

impl ConfigResolver {
    pub fn new(overrides: ConfigOverrides) -> Self {
        Self {
            overrides,
            config_file: None,
        }
    }

    /// Use an explicit config file instead of the platform default.
    /// Unlike the default location, an explicit file must exist.
    pub fn with_config_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_file = Some(path.into());
        self
    }

    /// Resolve and validate the final configuration
    pub fn resolve(&self) -> Result<ServiceConfig> {
        let file = self.load_file()?.unwrap_or_default();
        let defaults = ServiceConfig::default();
        let overrides = &self.overrides;

        let fact_timeout_secs = overrides
            .fact_timeout_secs
            .or(file.fact_timeout_secs)
            .unwrap_or(DEFAULT_FACT_TIMEOUT_SECS);

        let config = ServiceConfig {
            host: overrides
                .host
                .clone()
                .or(file.host)
                .unwrap_or(defaults.host),
            port: overrides.port.or(file.port).unwrap_or(defaults.port),
            fact_service_url: overrides
                .fact_service_url
                .clone()
                .or(file.fact_service_url)
                .unwrap_or(defaults.fact_service_url)
                .trim_end_matches('/')
                .to_string(),
            fact_timeout: Duration::from_secs(fact_timeout_secs),
        };

        config.validate()?;
        Ok(config)
    }

    fn load_file(&self) -> Result<Option<TomlConfig>> {
        if let Some(path) = &self.config_file {
            info!("Loading config file {}", path.display());
            return TomlConfig::load(path).map(Some);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                info!("Loading config file {}", path.display());
                TomlConfig::load(&path).map(Some)
            }
            Some(path) => {
                debug!("No config file at {}, using defaults", path.display());
                Ok(None)
            }
            None => {
                debug!("No platform config directory, using defaults");
                Ok(None)
            }
        }
    }
}
