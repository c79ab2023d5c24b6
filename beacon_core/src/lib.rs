//! # Beacon Core
//!
//! The core runtime for the beacon reactive navigation stack.
//!
//! Beacon is a single-robot, single-threaded control system: a host loop
//! refreshes sensor topics once per tick and then calls each node's `tick`
//! to completion. This crate provides the building blocks that contract
//! rests on:
//!
//! - **Nodes**: computational units with an `init`/`tick`/`shutdown`
//!   lifecycle
//! - **Communication**: in-process publisher-subscriber topics (`Hub`)
//! - **Errors**: the shared [`BeaconError`] type
//!
//! ## Quick Start
//!
//! ```rust
//! use beacon_core::{Hub, Node, NodeInfo};
//!
//! struct ExampleNode {
//!     output: Hub<f64>,
//! }
//!
//! impl Node for ExampleNode {
//!     fn name(&self) -> &'static str {
//!         "example"
//!     }
//!
//!     fn tick(&mut self, ctx: Option<&mut NodeInfo>) {
//!         let _ = self.output.send(42.0, ctx);
//!     }
//! }
//! ```

pub mod communication;
pub mod core;
pub mod error;

// Re-export commonly used types for easy access
pub use self::communication::Hub;
pub use self::core::{LogSummary, Node, NodeInfo};
pub use self::error::{BeaconError, BeaconResult};
