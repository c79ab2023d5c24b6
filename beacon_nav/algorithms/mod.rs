//! Pure control algorithms for reactive navigation
//!
//! This module contains pure algorithmic implementations with no I/O
//! dependencies. Each algorithm is fully tested and can be reused by any
//! node or external code.
//!
//! # Available Algorithms
//!
//! - **angles**: wrapping into the canonical (−π, π] range
//! - **line_follow**: edge steering over a forward array of line sensors
//! - **phototaxis**: differential-light steering toward the brighter side
//! - **circumnavigate**: orbiting the nearest obstacle at a standoff
//!   distance

pub mod angles;
pub mod circumnavigate;
pub mod line_follow;
pub mod phototaxis;
