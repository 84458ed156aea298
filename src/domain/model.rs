use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 一個停車位紀錄，原樣保留伺服器回傳的 JSON 物件（包含欄位順序）。
///
/// Only `plate` is read; a record without a string `plate` is kept but never
/// matches a lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Spot {
    pub attributes: serde_json::Map<String, serde_json::Value>,
}

impl Spot {
    pub fn new(plate: impl Into<String>) -> Self {
        let mut attributes = serde_json::Map::new();
        attributes.insert("plate".to_string(), serde_json::Value::String(plate.into()));
        Self { attributes }
    }

    pub fn plate(&self) -> Option<&str> {
        self.attributes.get("plate").and_then(serde_json::Value::as_str)
    }

    /// Case-insensitive plate comparison against an already upper-cased needle.
    pub(crate) fn plate_matches(&self, upper_plate: &str) -> bool {
        self.plate()
            .is_some_and(|plate| plate.to_uppercase() == upper_plate)
    }
}

/// The full sequence of spots as of the last successful fetch.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Snapshot {
    pub spots: Vec<Spot>,
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    pub fn fetched(spots: Vec<Spot>) -> Self {
        Self {
            spots,
            fetched_at: Some(Utc::now()),
        }
    }

    pub fn is_populated(&self) -> bool {
        self.fetched_at.is_some()
    }

    pub fn len(&self) -> usize {
        self.spots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spot_keeps_record_as_sent() {
        let raw = r#"{"id":7,"plate":"ABC123","level":2,"zone":"B","occupied":true}"#;
        let spot: Spot = serde_json::from_str(raw).unwrap();

        assert_eq!(spot.plate(), Some("ABC123"));
        assert_eq!(spot.attributes.len(), 5);
        assert_eq!(serde_json::to_string(&spot).unwrap(), raw);
    }

    #[test]
    fn test_spot_without_plate_is_kept() {
        let spots: Vec<Spot> =
            serde_json::from_str(r#"[{"plate":"ABC123"},{"id":7},{"plate":null}]"#).unwrap();

        assert_eq!(spots.len(), 3);
        assert_eq!(spots[1].plate(), None);
        assert_eq!(spots[2].plate(), None);
        assert!(!spots[1].plate_matches(""));
        assert!(!spots[2].plate_matches("NULL"));
    }

    #[test]
    fn test_plate_matches_ignores_case() {
        let spot = Spot::new("abc123");
        assert!(spot.plate_matches("ABC123"));
        assert!(!spot.plate_matches("ABC124"));
    }

    #[test]
    fn test_default_snapshot_is_unfetched() {
        let snapshot = Snapshot::default();
        assert!(!snapshot.is_populated());
        assert!(snapshot.is_empty());

        let fetched = Snapshot::fetched(vec![]);
        assert!(fetched.is_populated());
        assert_eq!(fetched.len(), 0);
    }
}
