use beacon_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Forward line-detection array
///
/// Binary hit flags indexed 0..M-1 left to right across the front of the
/// robot. M is fixed at construction and is at least 2.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineScan {
    pub stamp_nanos: u64,
    pub hits: Vec<bool>,
}

impl LineScan {
    /// Create a new LineScan with current timestamp
    pub fn new(hits: Vec<bool>) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            hits,
        }
    }

    /// Create a LineScan with explicit timestamp
    pub fn with_timestamp(hits: Vec<bool>, stamp_nanos: u64) -> Self {
        Self { stamp_nanos, hits }
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    pub fn hit_count(&self) -> usize {
        self.hits.iter().filter(|&&h| h).count()
    }
}

impl LogSummary for LineScan {
    fn log_summary(&self) -> String {
        format!("{}/{} line hits", self.hit_count(), self.hits.len())
    }
}
