//! Models Module - Data Structures & Configuration
//!
//! Payload types, credentials/config and the single error type.

pub mod config;
pub mod errors;
pub mod types;

pub use config::*;
pub use errors::*;
pub use types::*;
