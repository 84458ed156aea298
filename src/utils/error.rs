use thiserror::Error;

#[derive(Error, Debug)]
pub enum ParkingError {
    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("API returned {status} for {url}")]
    StatusError {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Malformed spot payload: {0}")]
    DecodeError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value for {field} ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl ParkingError {
    /// 網路、HTTP 狀態碼或回應格式錯誤都算作一次失敗的抓取
    pub fn is_fetch_failure(&self) -> bool {
        matches!(
            self,
            ParkingError::ApiError(_)
                | ParkingError::StatusError { .. }
                | ParkingError::DecodeError(_)
        )
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            ParkingError::ApiError(e) if e.is_timeout() => {
                "The parking server did not answer in time".to_string()
            }
            ParkingError::ApiError(_) => "Could not reach the parking server".to_string(),
            ParkingError::StatusError { status, .. } => {
                format!("The parking server answered with {}", status)
            }
            ParkingError::DecodeError(_) => {
                "The parking server sent a spot list we could not read".to_string()
            }
            ParkingError::IoError(e) => format!("Could not read configuration: {}", e),
            ParkingError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            ParkingError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ParkingError::ApiError(_) => {
                "Check that the server is running and the endpoint is reachable"
            }
            ParkingError::StatusError { .. } => "Check the endpoint path and the server logs",
            ParkingError::DecodeError(_) => {
                "Make sure the endpoint returns a JSON array of spot objects"
            }
            ParkingError::IoError(_) => "Check the --config path and file permissions",
            ParkingError::TomlError(_) => "Fix the syntax of the configuration file",
            ParkingError::InvalidConfigValueError { .. } => "Review the configuration values",
        }
    }
}

pub type Result<T> = std::result::Result<T, ParkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_failure_grouping() {
        let status = ParkingError::StatusError {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            url: "http://localhost/api/spots".to_string(),
        };
        assert!(status.is_fetch_failure());

        let decode = ParkingError::from(serde_json::from_str::<Vec<u8>>("{").unwrap_err());
        assert!(decode.is_fetch_failure());

        let config = ParkingError::InvalidConfigValueError {
            field: "source.endpoint".to_string(),
            value: String::new(),
            reason: "URL cannot be empty".to_string(),
        };
        assert!(!config.is_fetch_failure());
    }

    #[test]
    fn test_status_error_message() {
        let err = ParkingError::StatusError {
            status: reqwest::StatusCode::NOT_FOUND,
            url: "http://localhost/api/spots".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API returned 404 Not Found for http://localhost/api/spots"
        );
        assert!(err.user_friendly_message().contains("404"));
    }
}
