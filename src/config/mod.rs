#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_url, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

/// The parking server the mobile app talks to on the local network.
pub const DEFAULT_SPOTS_URL: &str = "http://192.168.1.180:8080/api/spots";

pub const MAX_TIMEOUT_SECONDS: u64 = 300;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// 沒有設定時不設逾時
    pub timeout_seconds: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_SPOTS_URL.to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: None,
        }
    }
}

impl StoreConfig {
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            source: SourceConfig {
                endpoint: endpoint.into(),
                timeout_seconds: None,
            },
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!("Loaded config file: {}", path.as_ref().display());
        Self::from_str(&content)
    }

    /// 從 TOML 字串解析配置
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let config: StoreConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

impl Validate for StoreConfig {
    fn validate(&self) -> Result<()> {
        validate_url("source.endpoint", &self.source.endpoint)?;

        if let Some(timeout) = self.source.timeout_seconds {
            validate_range("source.timeout_seconds", timeout, 1, MAX_TIMEOUT_SECONDS)?;
        }

        Ok(())
    }
}

impl ConfigProvider for StoreConfig {
    fn endpoint(&self) -> &str {
        &self.source.endpoint
    }

    fn timeout(&self) -> Option<Duration> {
        self.source.timeout_seconds.map(Duration::from_secs)
    }
}
