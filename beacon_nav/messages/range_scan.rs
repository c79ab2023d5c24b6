use beacon_core::LogSummary;
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// Single return from one sensor of a range ring.
///
/// `angle` is fixed when the ring is built and never changes for the
/// robot's lifetime. `distance` is meaningful only when `hit` is set, and a
/// hit is always strictly inside `max_range`; the constructors maintain
/// that invariant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeReading {
    pub angle: f64,     // sensor heading relative to robot forward, radians
    pub distance: f64,  // measured distance, meters; valid only when hit
    pub max_range: f64, // sensor range limit, meters
    pub hit: bool,
}

impl RangeReading {
    /// Reading that detected an obstacle at `distance`.
    ///
    /// Distances at or beyond `max_range`, or negative ones, degrade to a
    /// clear reading so the hit invariant holds for any input.
    pub fn detection(angle: f64, distance: f64, max_range: f64) -> Self {
        if !(0.0..max_range).contains(&distance) {
            return Self::clear(angle, max_range);
        }
        Self {
            angle,
            distance,
            max_range,
            hit: true,
        }
    }

    /// Reading that saw nothing within range.
    pub fn clear(angle: f64, max_range: f64) -> Self {
        Self {
            angle,
            distance: max_range,
            max_range,
            hit: false,
        }
    }

    /// Measurement used for nearest-obstacle scans: the detection distance
    /// when hit, +infinity otherwise so clear sensors never win.
    pub fn measurement(&self) -> f64 {
        if self.hit {
            self.distance
        } else {
            f64::INFINITY
        }
    }

    /// Range from the robot center to the sensed point: body radius plus
    /// the detection distance, or radius plus max range for a clear sensor.
    pub fn effective_range(&self, robot_radius: f64) -> f64 {
        if self.hit {
            robot_radius + self.distance
        } else {
            robot_radius + self.max_range
        }
    }
}

/// Ordered ring of range readings, index 0..N-1 around the robot.
///
/// The ordering is stable for the robot's lifetime; the controller relies
/// on it for deterministic nearest-obstacle selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RangeScan {
    pub stamp_nanos: u64,
    pub readings: Vec<RangeReading>,
}

impl RangeScan {
    /// Create a new RangeScan with current timestamp
    pub fn new(readings: Vec<RangeReading>) -> Self {
        Self {
            stamp_nanos: std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .unwrap_or_default()
                .as_nanos() as u64,
            readings,
        }
    }

    /// Create a RangeScan with explicit timestamp
    pub fn with_timestamp(readings: Vec<RangeReading>, stamp_nanos: u64) -> Self {
        Self {
            stamp_nanos,
            readings,
        }
    }

    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// True when any sensor in the ring currently detects an obstacle.
    pub fn any_hit(&self) -> bool {
        self.readings.iter().any(|r| r.hit)
    }

    /// Minimum measurement over the readings whose angle, wrapped to
    /// [0, 2π), lies in `[lo, hi)`. Returns +infinity when nothing in the
    /// window has a detection.
    pub fn min_measurement_in_window(&self, lo: f64, hi: f64) -> f64 {
        self.readings
            .iter()
            .filter(|r| {
                let a = r.angle.rem_euclid(TAU);
                a >= lo && a < hi
            })
            .map(RangeReading::measurement)
            .fold(f64::INFINITY, f64::min)
    }
}

impl LogSummary for RangeScan {
    fn log_summary(&self) -> String {
        let hits = self.readings.iter().filter(|r| r.hit).count();
        format!("{} readings ({} hits)", self.readings.len(), hits)
    }
}
