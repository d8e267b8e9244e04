//! Launcher - the campaign → ad set → ad creative sequence
//!
//! Each step starts only after the previous one succeeded. The first failure
//! ends the run; entities created before it are left in place.

use std::io::Write;
use tracing::{error, info};

use crate::core::blueprint::LaunchBlueprint;
use crate::models::config::{Credentials, LauncherConfig};
use crate::models::errors::AppResult;
use crate::models::types::LaunchReport;
use crate::providers::graph::AdAccountApi;
use crate::utils::constants::ERROR_LINE_PREFIX;

/// Create the three entities in order, writing one success line per entity to `out`
pub async fn launch<A, W>(
    api: &A,
    blueprint: &LaunchBlueprint,
    out: &mut W,
) -> AppResult<LaunchReport>
where
    A: AdAccountApi + ?Sized,
    W: Write,
{
    let campaign = api.create_campaign(&blueprint.campaign).await?;
    writeln!(out, "{}", campaign.success_line())?;

    let ad_set = blueprint.ad_set.for_campaign(&campaign.id);
    let ad_set = api.create_ad_set(&ad_set).await?;
    writeln!(out, "{}", ad_set.success_line())?;

    let creative = api.create_ad_creative(&blueprint.creative).await?;
    writeln!(out, "{}", creative.success_line())?;

    Ok(LaunchReport {
        campaign_id: campaign.id,
        ad_set_id: ad_set.id,
        ad_creative_id: creative.id,
    })
}

/// Load credentials, open a session through `connect`, then launch.
///
/// Credential and session errors are returned before any request is made.
/// A launch error is reported as the single error line on `out` and yields `Ok(None)`.
pub async fn run<A, F, W>(
    config: &LauncherConfig,
    blueprint: &LaunchBlueprint,
    connect: F,
    out: &mut W,
) -> AppResult<Option<LaunchReport>>
where
    A: AdAccountApi,
    F: FnOnce(&LauncherConfig, Credentials) -> AppResult<A>,
    W: Write,
{
    let credentials = Credentials::load(&config.credentials_path)?;
    let api = connect(config, credentials)?;

    match launch(&api, blueprint, out).await {
        Ok(report) => {
            info!(
                "🚀 Launch complete: campaign={} ad_set={} ad_creative={}",
                report.campaign_id, report.ad_set_id, report.ad_creative_id
            );
            Ok(Some(report))
        }
        Err(err) => {
            error!("❌ Launch aborted [{}]: {}", err.code_str(), err.message);
            writeln!(out, "{} {}", ERROR_LINE_PREFIX, err.message)?;
            Ok(None)
        }
    }
}
