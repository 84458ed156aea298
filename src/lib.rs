pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::adapters::http::HttpSpotSource;
pub use crate::config::{StoreConfig, DEFAULT_SPOTS_URL};
pub use crate::core::{ParkingStore, Snapshot, Spot, SpotSource};
pub use crate::utils::error::{ParkingError, Result};
