//! Node lifecycle contract and per-node context.

pub mod node;

pub use node::{LogSummary, Node, NodeInfo};
