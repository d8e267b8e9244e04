//! Providers Module - External APIs
//!
//! The Graph API client behind the `AdAccountApi` seam.

pub mod graph;

pub use graph::*;
