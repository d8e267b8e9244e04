//! Ads Launcher - sandbox campaign bootstrapper
//!
//! Reads `config/credentials.json` (or `ADS_CREDENTIALS_PATH`), then creates on
//! the sandbox ad account, in order:
//! - a paused traffic campaign
//! - an ad set targeting Latin America, attached to that campaign
//! - a link ad creative
//!
//! Environment:
//!   ADS_CREDENTIALS_PATH      - credentials JSON (default: config/credentials.json)
//!   ADS_GRAPH_BASE_URL        - Graph API host (default: https://graph.facebook.com)
//!   ADS_GRAPH_API_VERSION     - Graph API version (default: v21.0)
//!   ADS_REQUEST_TIMEOUT_SECS  - per-request timeout (default: 30)
//!   RUST_LOG                  - log filter (default: info)

use ads_launcher::utils::constants::{APP_NAME, APP_VERSION};
use ads_launcher::{run, GraphClient, LaunchBlueprint, LauncherConfig};

use eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the result lines
    FmtSubscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    info!("📣 {} v{} starting", APP_NAME, APP_VERSION);

    let config = LauncherConfig::from_env()?;
    let blueprint = LaunchBlueprint::tech_lead_recruitment()?;

    let mut stdout = std::io::stdout();
    run(&config, &blueprint, GraphClient::new, &mut stdout).await?;

    Ok(())
}
