//! Command-line arguments
//!
//! Every option can also be supplied through its environment variable.
//! Anything left unset falls through to the config file and then to the
//! compiled defaults (see `numclass_common::config`).

use clap::Parser;
use numclass_common::config::{ConfigOverrides, ConfigResolver, ServiceConfig};
use std::path::PathBuf;

/// Command-line arguments for numclass-api
#[derive(Parser, Debug)]
#[command(name = "numclass-api")]
#[command(about = "Number classification HTTP service")]
#[command(version)]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "NUMCLASS_HOST")]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "NUMCLASS_PORT")]
    pub port: Option<u16>,

    /// Base URL of the trivia service
    #[arg(long, env = "NUMCLASS_FACT_URL")]
    pub fact_service_url: Option<String>,

    /// Seconds to wait for a fun fact before falling back
    #[arg(long, env = "NUMCLASS_FACT_TIMEOUT_SECS")]
    pub fact_timeout_secs: Option<u64>,

    /// TOML config file (defaults to <config dir>/numclass/config.toml)
    #[arg(short, long, env = "NUMCLASS_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Command-line and environment values, unset ones left as `None`
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            host: self.host.clone(),
            port: self.port,
            fact_service_url: self.fact_service_url.clone(),
            fact_timeout_secs: self.fact_timeout_secs,
        }
    }

    /// Merge with the config file and defaults
    pub fn resolve_config(&self) -> numclass_common::Result<ServiceConfig> {
        let mut resolver = ConfigResolver::new(self.overrides());
        if let Some(path) = &self.config {
            resolver = resolver.with_config_file(path);
        }
        resolver.resolve()
    }
}
