//! Obstacle circumnavigation: orbit the nearest sensed obstacle at a fixed
//! standoff distance.
//!
//! The nearest range return is projected into the robot's local plane, a
//! tangent along the obstacle boundary picks the travel direction, and an
//! arctangent restoring term pulls the robot back onto the standoff circle.
//! The commanded heading becomes a proportional rotational velocity and a
//! forward speed that fades as the required turn grows, reversing once the
//! turn exceeds a quarter revolution.

use super::angles::wrap_to_pi;
use crate::messages::{RangeReading, RangeScan};
use crate::params::NavParams;

/// Point in the robot's local plane: `x` forward, `z` lateral.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensedPoint {
    pub x: f64,
    pub z: f64,
}

impl SensedPoint {
    /// Planar distance from the robot center.
    pub fn distance(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }
}

/// Project one range reading into the robot's local plane.
///
/// The sensed range is taken from the robot boundary, so the body radius is
/// added back to place the point relative to the robot center.
pub fn sensed_point(reading: &RangeReading, robot_radius: f64) -> SensedPoint {
    let v = reading.effective_range(robot_radius);
    SensedPoint {
        x: v * reading.angle.cos(),
        z: v * reading.angle.sin(),
    }
}

/// Index of the reading with the smallest measurement; the first occurrence
/// wins ties, so selection is deterministic for a stable ring order.
pub fn nearest_reading(scan: &RangeScan) -> usize {
    let mut min = 0;
    for i in 1..scan.readings.len() {
        if scan.readings[i].measurement() < scan.readings[min].measurement() {
            min = i;
        }
    }
    min
}

/// Compute the circumnavigation command for the current scan.
///
/// Returns `(rotational, translational)` velocity. The scan must be
/// non-empty; the controller guarantees that at construction.
pub fn command(
    scan: &RangeScan,
    clockwise: bool,
    robot_radius: f64,
    params: &NavParams,
) -> (f64, f64) {
    let p = sensed_point(&scan.readings[nearest_reading(scan)], robot_radius);
    let d = p.distance();

    // tangent along the obstacle boundary in the direction of travel
    let (vx, vz) = if clockwise { (-p.z, p.x) } else { (p.z, -p.x) };

    // atan2(0, 0) has no meaning; an obstacle exactly at the robot center
    // keeps heading 0 instead of feeding NaN into the command
    let ph_lin = if vx == 0.0 && vz == 0.0 {
        0.0
    } else {
        vz.atan2(vx)
    };

    // restoring term: positive beyond the standoff circle, negative inside
    // it, saturating at a quarter turn
    let mut ph_rot = (params.k3 * (d - params.safety)).atan();
    if clockwise {
        ph_rot = -ph_rot;
    }

    let ph_ref = wrap_to_pi(ph_lin + ph_rot);
    (params.k1 * ph_ref, params.k2 * ph_ref.cos())
}
