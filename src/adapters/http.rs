use crate::domain::model::Spot;
use crate::domain::ports::{ConfigProvider, SpotSource};
use crate::utils::error::{ParkingError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Fetches the spot list with a single `GET` against a fixed endpoint.
#[derive(Debug, Clone)]
pub struct HttpSpotSource {
    client: Client,
    endpoint: String,
}

impl HttpSpotSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            client: builder.build()?,
            endpoint: config.endpoint().to_string(),
        })
    }
}

#[async_trait]
impl SpotSource for HttpSpotSource {
    async fn fetch_spots(&self) -> Result<Vec<Spot>> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);

        if !status.is_success() {
            return Err(ParkingError::StatusError {
                status,
                url: self.endpoint.clone(),
            });
        }

        // 先取 bytes 再解析，格式錯誤時回報 DecodeError 而不是 reqwest 的錯誤
        let body = response.bytes().await?;
        let spots: Vec<Spot> = serde_json::from_slice(&body)?;
        Ok(spots)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}
