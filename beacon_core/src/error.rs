//! Error types shared across the beacon workspace.

use thiserror::Error;

/// Errors surfaced by the beacon runtime and by controller construction.
#[derive(Debug, Error)]
pub enum BeaconError {
    /// A sensor layout was rejected when a controller was built. Layouts are
    /// validated once at construction, never per tick.
    #[error("invalid sensor configuration: {0}")]
    InvalidSensorConfiguration(String),

    /// Topic registry conflicts and other messaging failures.
    #[error("communication error: {0}")]
    Communication(String),

    /// A configuration file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the workspace.
pub type BeaconResult<T> = Result<T, BeaconError>;
