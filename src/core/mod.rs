pub mod store;

pub use crate::domain::model::{Snapshot, Spot};
pub use crate::domain::ports::{ConfigProvider, SpotSource};
pub use crate::utils::error::Result;
pub use store::ParkingStore;
