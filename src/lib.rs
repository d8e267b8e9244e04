//! Ads Launcher Library
//!
//! Creates a campaign, an ad set attached to it, and an ad creative on a
//! Meta sandbox ad account through the Graph API, printing each created id.

pub mod core;
pub mod models;
pub mod providers;
pub mod utils;

pub use crate::core::{launch, run, LaunchBlueprint};
pub use models::{
    AdAccountId, AppError, AppResult, CreatedEntity, Credentials, EntityKind, ErrorCode,
    LaunchReport, LauncherConfig,
};
pub use providers::{AdAccountApi, GraphClient};
