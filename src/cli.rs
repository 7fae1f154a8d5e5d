//! Command-line arguments and config resolution.

use clap::Parser;
use std::io;
use std::path::PathBuf;

use crate::catalog::{LengthChoice, ModelChoice};
use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(
    name = "descgen",
    version,
    about = "Generate multilingual product descriptions from a product photo"
)]
pub struct Cli {
    /// Config file (default: <config_dir>/descgen/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Vision model selected at startup.
    #[arg(long, value_enum)]
    pub model: Option<ModelChoice>,

    /// Description length selected at startup.
    #[arg(long, value_enum)]
    pub length: Option<LengthChoice>,

    /// Generation endpoint URL.
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Image upload endpoint URL.
    #[arg(long, value_name = "URL")]
    pub upload_url: Option<String>,

    /// Log file (default: <data_local_dir>/descgen/descgen.log).
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Loads the config file and applies command-line overrides.
    ///
    /// An explicit `--config` path must exist; the default path may be absent.
    pub fn load_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) if !path.exists() => {
                return Err(ConfigError::ReadError {
                    path: path.clone(),
                    source: io::Error::new(io::ErrorKind::NotFound, "file not found"),
                });
            }
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(model) = self.model {
            config.defaults.model = model;
        }
        if let Some(length) = self.length {
            config.defaults.length = length;
        }
        if let Some(endpoint) = &self.endpoint {
            config.generation.endpoint = endpoint.clone();
        }
        if let Some(upload_url) = &self.upload_url {
            config.storage.upload_url = upload_url.clone();
        }

        config.validate()?;
        Ok(config)
    }
}
