use crate::config::StoreConfig;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "parking-store")]
#[command(about = "Fetch the parking spot list and look up a spot by plate")]
pub struct CliConfig {
    #[arg(long, help = "TOML config file with a [source] section")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Override the spots endpoint")]
    pub endpoint: Option<String>,

    #[arg(long, help = "Request timeout in seconds (no timeout by default)")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "License plate to look up (case-insensitive)")]
    pub plate: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// 旗標優先於設定檔，設定檔優先於預設值
    pub fn resolve(&self) -> Result<StoreConfig> {
        let mut config = match &self.config {
            Some(path) => StoreConfig::from_file(path)?,
            None => StoreConfig::default(),
        };

        if let Some(endpoint) = &self.endpoint {
            config.source.endpoint = endpoint.clone();
        }
        if let Some(timeout) = self.timeout_seconds {
            config.source.timeout_seconds = Some(timeout);
        }

        config.validate()?;
        Ok(config)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(plate) = &self.plate {
            validate_non_empty_string("plate", plate)?;
        }
        Ok(())
    }
}
