//! Reusable nodes wiring the pure algorithms to topics.

pub mod nav_controller_node;

pub use nav_controller_node::NavControllerNode;
