//! Core Module - Launch flow
//!
//! The fixed entity blueprint and the sequential create flow.

pub mod blueprint;
pub mod launcher;

pub use blueprint::*;
pub use launcher::*;
