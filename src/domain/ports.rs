use crate::domain::model::Spot;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Where the store gets its spots from.
#[async_trait]
pub trait SpotSource: Send + Sync {
    async fn fetch_spots(&self) -> Result<Vec<Spot>>;

    /// Human readable location used in log lines.
    fn describe(&self) -> String;
}

pub trait ConfigProvider: Send + Sync {
    fn endpoint(&self) -> &str;
    fn timeout(&self) -> Option<Duration>;
}
