//! # Beacon Navigation Library
//!
//! The standard library of the beacon stack: a reactive navigation
//! controller for a single mobile robot, blending line following,
//! light seeking, and obstacle circumnavigation once per control tick.
//!
//! ## Structure
//!
//! ```text
//! beacon_nav/
//! ── messages/      # Sensor and actuator message types
//! ── algorithms/    # Pure control algorithms (no I/O)
//! ── nodes/         # Nodes wiring algorithms to topics
//! ── params.rs      # Controller configuration
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use beacon_nav::prelude::*;
//!
//! let params = NavParams::new(0.25, 12, 11);
//! let mut controller = NavControllerNode::new(params)?;
//! let mut info = NodeInfo::new("NavControllerNode".to_string(), true);
//! controller.init(&mut info)?;
//!
//! // host loop: publish fresh sensor snapshots, then tick
//! loop {
//!     info.begin_tick();
//!     controller.tick(Some(&mut info));
//! }
//! ```

pub mod algorithms;
pub mod messages;
pub mod nodes;
pub mod params;

// Re-export core traits needed for message types
pub use beacon_core::LogSummary;

// Re-export message types at the crate root for convenience
pub use messages::*;

// Re-export commonly used items for convenience
pub use nodes::NavControllerNode;
pub use params::NavParams;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::messages::{
        CmdVel, HeadingStep, LightSample, LineScan, RangeReading, RangeScan,
    };
    pub use crate::nodes::NavControllerNode;
    pub use crate::params::NavParams;
    pub use beacon_core::{BeaconError, BeaconResult, Hub, LogSummary, Node, NodeInfo};
}
