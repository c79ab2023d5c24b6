//! Differential-light steering.
//!
//! Turns the robot toward the brighter side by weighting the difference of
//! the smoothed left and right luminance readings. Stateless; used as the
//! fallback behavior whenever no line is being traced.

use std::f64::consts::FRAC_PI_4;

/// Steering gain applied to the left/right luminance difference.
const LIGHT_GAIN: f64 = FRAC_PI_4;

/// Rotational velocity steering toward the brighter side.
pub fn steer(left_avg_luminance: f64, right_avg_luminance: f64) -> f64 {
    (left_avg_luminance - right_avg_luminance) * LIGHT_GAIN
}
