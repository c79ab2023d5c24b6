//! Line-edge steering over a forward array of binary line sensors.
//!
//! The array is split into a left and a right half (mirrored inward from
//! the ends; the center sensor of an odd-sized array belongs to neither).
//! An asymmetric hit count steers proportionally back over the line edge; a
//! near-total blackout reads as an intersection and snaps the heading by a
//! fixed angle toward the dimmer side; an empty array means the line is
//! lost and the evaluator has no opinion, letting the arbiter fall back to
//! light seeking.

use std::f64::consts::FRAC_PI_4;

/// Proportional steering gain for an asymmetric edge reading.
const EDGE_GAIN: f64 = 5.0;

/// Discrete heading change applied on a blackout reading.
const SNAP_ANGLE: f64 = FRAC_PI_4;

/// Steering opinion produced by one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LineSteer {
    /// Set the rotational velocity to this value.
    Turn(f64),
    /// Snap the heading by this angle; rotational velocity is untouched.
    Snap(f64),
}

/// Result of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFollowOutcome {
    /// `None` means the evaluator has no opinion this tick.
    pub steering: Option<LineSteer>,
    /// Whether the robot counts as tracing a line after this tick.
    pub tracing: bool,
}

/// Evaluate one tick of line following.
///
/// `hits` is the forward sensor array, left to right, length at least 2.
/// The luminance pair is consulted only on the blackout branch, to pick the
/// snap direction. `was_tracing` is the flag carried over from the previous
/// tick; the branches that do not decide leave it unchanged.
pub fn evaluate(
    hits: &[bool],
    left_avg_luminance: f64,
    right_avg_luminance: f64,
    was_tracing: bool,
) -> LineFollowOutcome {
    let m = hits.len();
    let k = m / 2;

    let mut left = 0usize;
    let mut right = 0usize;
    for i in 0..k {
        if hits[i] {
            left += 1;
        }
        if hits[m - 1 - i] {
            right += 1;
        }
    }

    if left != right {
        let turn = (left as f64 - right as f64) / k as f64 * EDGE_GAIN;
        return LineFollowOutcome {
            steering: Some(LineSteer::Turn(turn)),
            tracing: true,
        };
    }

    if left == 0 {
        // line lost; the arbiter falls back to light seeking
        return LineFollowOutcome {
            steering: None,
            tracing: false,
        };
    }

    if left + right > m.saturating_sub(3) {
        // blackout: the array sits on a wide marking, snap toward the
        // dimmer side instead of steering through it
        let delta = if right_avg_luminance > left_avg_luminance {
            -SNAP_ANGLE
        } else {
            SNAP_ANGLE
        };
        return LineFollowOutcome {
            steering: Some(LineSteer::Snap(delta)),
            tracing: true,
        };
    }

    // symmetric partial coverage has no rule; leave everything as it was
    LineFollowOutcome {
        steering: None,
        tracing: was_tracing,
    }
}
