use crate::adapters::http::HttpSpotSource;
use crate::domain::model::{Snapshot, Spot};
use crate::domain::ports::{ConfigProvider, SpotSource};
use crate::utils::error::Result;
use std::sync::Arc;
use tokio::sync::watch;

/// Holds the last fetched snapshot of spots and answers lookups against it.
///
/// The snapshot lives in a `watch` channel: a refresh swaps the whole value in
/// one step, so readers see either the old or the new list, never a mix.
/// Overlapping refreshes are not serialized and the response that resolves
/// last wins. Dropping an in-flight [`ParkingStore::fetch_spots`] future cancels
/// the request and leaves the snapshot as it was.
#[derive(Debug)]
pub struct ParkingStore<S: SpotSource> {
    source: S,
    state: watch::Sender<Arc<Snapshot>>,
}

impl ParkingStore<HttpSpotSource> {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Result<Self> {
        Ok(Self::new(HttpSpotSource::from_config(config)?))
    }
}

impl<S: SpotSource> ParkingStore<S> {
    pub fn new(source: S) -> Self {
        let (state, _) = watch::channel(Arc::new(Snapshot::default()));
        Self { source, state }
    }

    /// Replaces the stored spots with whatever the source returns.
    ///
    /// On failure the previous snapshot is kept and the error is handed back
    /// so the caller can react to it.
    pub async fn fetch_spots(&self) -> Result<usize> {
        let origin = self.source.describe();
        tracing::debug!("Refreshing spots from {}", origin);

        match self.source.fetch_spots().await {
            Ok(spots) => {
                let count = spots.len();
                self.state.send_replace(Arc::new(Snapshot::fetched(spots)));
                tracing::info!("✅ Stored {} spots from {}", count, origin);
                Ok(count)
            }
            Err(e) => {
                tracing::error!("❌ Failed to fetch spots from {}: {}", origin, e);
                Err(e)
            }
        }
    }

    /// First spot in the current snapshot whose plate matches, ignoring case.
    pub fn get_spot_by_plate(&self, plate: &str) -> Option<Spot> {
        let needle = plate.to_uppercase();
        self.state
            .borrow()
            .spots
            .iter()
            .find(|spot| spot.plate_matches(&needle))
            .cloned()
    }

    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.state.borrow())
    }

    pub fn spots(&self) -> Vec<Spot> {
        self.state.borrow().spots.clone()
    }

    pub fn is_populated(&self) -> bool {
        self.state.borrow().is_populated()
    }

    /// 每次成功刷新後通知訂閱者
    pub fn subscribe(&self) -> watch::Receiver<Arc<Snapshot>> {
        self.state.subscribe()
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
