//! Controller configuration.

use beacon_core::{BeaconError, BeaconResult};
use serde::Deserialize;
use std::path::Path;

fn default_k1() -> f64 {
    5.0
}
fn default_k2() -> f64 {
    0.8
}
fn default_k3() -> f64 {
    1.0
}
fn default_safety() -> f64 {
    0.8
}
fn default_obstacle_trigger() -> f64 {
    0.8
}
fn default_goal_lux() -> f64 {
    0.06
}
fn default_clockwise() -> bool {
    true
}

/// Tunable parameters of the navigation controller.
///
/// The gain defaults reproduce the reference tuning; tests override
/// individual fields as needed. The sensor layout (`robot_radius`,
/// `sonar_count`, `line_sensor_count`) has no default in TOML input and is
/// validated once, when the controller is built.
#[derive(Debug, Clone, Deserialize)]
pub struct NavParams {
    /// Circumnavigation steering gain.
    ///
    /// Default: 5.0
    #[serde(default = "default_k1")]
    pub k1: f64,

    /// Circumnavigation speed gain.
    ///
    /// Default: 0.8
    #[serde(default = "default_k2")]
    pub k2: f64,

    /// Standoff restoring gain.
    ///
    /// Default: 1.0
    #[serde(default = "default_k3")]
    pub k3: f64,

    /// Standoff distance held while orbiting an obstacle (m).
    ///
    /// Default: 0.8
    #[serde(default = "default_safety")]
    pub safety: f64,

    /// Range below which the obstacle override engages (m).
    ///
    /// Default: 0.8
    #[serde(default = "default_obstacle_trigger")]
    pub obstacle_trigger: f64,

    /// Mean instantaneous lux at which the goal counts as reached.
    ///
    /// Default: 0.06
    #[serde(default = "default_goal_lux")]
    pub goal_lux: f64,

    /// Direction preference when orbiting an obstacle.
    ///
    /// Default: true
    #[serde(default = "default_clockwise")]
    pub clockwise: bool,

    /// Robot body radius (m), > 0.
    pub robot_radius: f64,

    /// Number of sensors in the range ring, >= 1.
    pub sonar_count: usize,

    /// Number of sensors in the forward line array, >= 2.
    pub line_sensor_count: usize,
}

impl NavParams {
    /// Parameters with default gains for the given sensor layout.
    pub fn new(robot_radius: f64, sonar_count: usize, line_sensor_count: usize) -> Self {
        Self {
            k1: default_k1(),
            k2: default_k2(),
            k3: default_k3(),
            safety: default_safety(),
            obstacle_trigger: default_obstacle_trigger(),
            goal_lux: default_goal_lux(),
            clockwise: default_clockwise(),
            robot_radius,
            sonar_count,
            line_sensor_count,
        }
    }

    /// Parse parameters from a TOML document.
    pub fn from_toml_str(input: &str) -> BeaconResult<Self> {
        toml::from_str(input).map_err(|e| BeaconError::Config(e.to_string()))
    }

    /// Load parameters from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> BeaconResult<Self> {
        let input = std::fs::read_to_string(path.as_ref())
            .map_err(|e| BeaconError::Config(e.to_string()))?;
        Self::from_toml_str(&input)
    }

    /// Reject sensor layouts the controller cannot run with.
    pub fn validate(&self) -> BeaconResult<()> {
        if self.sonar_count == 0 {
            return Err(BeaconError::InvalidSensorConfiguration(
                "range ring has no sensors".to_string(),
            ));
        }
        if self.line_sensor_count < 2 {
            return Err(BeaconError::InvalidSensorConfiguration(format!(
                "line array needs at least 2 sensors, got {}",
                self.line_sensor_count
            )));
        }
        if self.robot_radius <= 0.0 {
            return Err(BeaconError::InvalidSensorConfiguration(format!(
                "robot radius must be positive, got {}",
                self.robot_radius
            )));
        }
        Ok(())
    }
}
