use beacon_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Discrete heading change event
///
/// Published when the controller snaps the robot heading by a fixed angle
/// instead of steering through a rotational velocity, e.g. when the line
/// array reads an intersection. The host applies `delta` to the robot
/// orientation directly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct HeadingStep {
    pub stamp_nanos: u64,
    pub delta: f64, // radians, positive counterclockwise
}

impl HeadingStep {
    /// Create a new HeadingStep with current timestamp
    pub fn new(delta: f64) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            delta,
        }
    }

    /// Create a HeadingStep with explicit timestamp
    pub fn with_timestamp(delta: f64, stamp_nanos: u64) -> Self {
        Self { stamp_nanos, delta }
    }
}

impl LogSummary for HeadingStep {
    fn log_summary(&self) -> String {
        format!("delta={:.3}rad", self.delta)
    }
}

unsafe impl bytemuck::Pod for HeadingStep {}
unsafe impl bytemuck::Zeroable for HeadingStep {}
