use beacon_core::LogSummary;
use serde::{Deserialize, Serialize};

/// Ambient light sensor sample
///
/// One sample per sensor per tick; the robot carries a left and a right
/// sensor on separate topics. `lux` is the instantaneous reading; the
/// temporal smoothing behind `average_luminance` is done by the host, not
/// by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[repr(C)]
pub struct LightSample {
    pub stamp_nanos: u64,
    pub lux: f64,               // instantaneous illuminance, >= 0
    pub average_luminance: f64, // host-smoothed luminance, >= 0
}

impl LightSample {
    /// Create a new LightSample with current timestamp
    pub fn new(lux: f64, average_luminance: f64) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            lux,
            average_luminance,
        }
    }

    /// Create a LightSample with explicit timestamp
    pub fn with_timestamp(lux: f64, average_luminance: f64, stamp_nanos: u64) -> Self {
        Self {
            stamp_nanos,
            lux,
            average_luminance,
        }
    }
}

impl LogSummary for LightSample {
    fn log_summary(&self) -> String {
        format!("lux={:.3} avg={:.3}", self.lux, self.average_luminance)
    }
}

unsafe impl bytemuck::Pod for LightSample {}
unsafe impl bytemuck::Zeroable for LightSample {}
