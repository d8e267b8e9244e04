//! Constants Module - Single Source of Truth
//!
//! Endpoints, defaults, console templates and the literal values of the
//! sandbox launch. Other modules read from here instead of hardcoding.

// ============================================
// APPLICATION CONSTANTS
// ============================================

/// Application name
pub const APP_NAME: &str = "AdsLauncher";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// User-Agent for HTTP requests
pub const USER_AGENT: &str = concat!("AdsLauncher/", env!("CARGO_PKG_VERSION"));

// ============================================
// GRAPH API CONSTANTS
// ============================================

/// Graph API host
pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.facebook.com";

/// Graph API version path segment
pub const DEFAULT_GRAPH_API_VERSION: &str = "v21.0";

/// Default timeout for a single create request (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Prefix the Graph API expects on ad account node ids
pub const AD_ACCOUNT_PREFIX: &str = "act_";

/// Ad account edge for campaigns
pub const EDGE_CAMPAIGNS: &str = "campaigns";
/// Ad account edge for ad sets
pub const EDGE_AD_SETS: &str = "adsets";
/// Ad account edge for ad creatives
pub const EDGE_AD_CREATIVES: &str = "adcreatives";

/// Wire format of ad set schedule timestamps
pub const GRAPH_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

// ============================================
// CONFIGURATION
// ============================================

/// Credentials file, relative to the working directory
pub const DEFAULT_CREDENTIALS_PATH: &str = "config/credentials.json";

/// Env var overriding the credentials path
pub const ENV_CREDENTIALS_PATH: &str = "ADS_CREDENTIALS_PATH";
/// Env var overriding the Graph API host
pub const ENV_GRAPH_BASE_URL: &str = "ADS_GRAPH_BASE_URL";
/// Env var overriding the Graph API version
pub const ENV_GRAPH_API_VERSION: &str = "ADS_GRAPH_API_VERSION";
/// Env var overriding the request timeout
pub const ENV_REQUEST_TIMEOUT_SECS: &str = "ADS_REQUEST_TIMEOUT_SECS";

// ============================================
// CONSOLE OUTPUT
// ============================================

/// Suffix appended to every success line
pub const SANDBOX_SUFFIX: &str = "(Modo Sandbox)";

/// Prefix of the single failure line
pub const ERROR_LINE_PREFIX: &str = "Erro durante a execução:";

// ============================================
// SANDBOX LAUNCH - CAMPAIGN
// ============================================

pub const CAMPAIGN_NAME: &str = "Tech Lead Recruitment Campaign (Sandbox)";

// ============================================
// SANDBOX LAUNCH - AD SET
// ============================================

pub const AD_SET_NAME: &str = "Tech Lead AdSet - Latin America (Sandbox)";

/// Daily budget in the account currency's minor units ($200/day)
pub const AD_SET_DAILY_BUDGET: u64 = 20_000;

/// Bid per impression, minor units
pub const AD_SET_BID_AMOUNT: u64 = 100;

/// Latin American target markets
pub const TARGET_COUNTRIES: [&str; 5] = ["BR", "MX", "AR", "CL", "PE"];

pub const TARGET_AGE_MIN: u8 = 25;
pub const TARGET_AGE_MAX: u8 = 45;

/// Graph locale id 6 = en_US
pub const TARGET_LOCALES: [u32; 1] = [6];

pub const AD_SET_START_TIME: &str = "2024-10-25T00:00:00-0800";
pub const AD_SET_END_TIME: &str = "2024-11-25T23:59:59-0800";

// ============================================
// SANDBOX LAUNCH - AD CREATIVE
// ============================================

pub const CREATIVE_NAME: &str = "Tech Lead Creative (Sandbox)";
pub const CREATIVE_CAPTION: &str = "torre.ai";
pub const CREATIVE_DESCRIPTION: &str = "Join Torre as a Tech Lead and lead a global team!";
pub const CREATIVE_LINK: &str = "https://torre.ai/post/awyJqjad-torre-product-minded-tech-lead";
pub const CREATIVE_MESSAGE: &str = "We are hiring a Product-Minded Tech Lead! Apply now.";
pub const CREATIVE_HEADLINE: &str = "Tech Lead at Torre - Product Leadership";

/// Facebook page the creative is published as. Must be a page the token manages.
pub const CREATIVE_PAGE_ID: &str = "450954828104598";

/// Mask a secret for logging, keeping only the last four characters
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 4 {
        return "****".to_string();
    }
    let tail: String = secret.chars().skip(count - 4).collect();
    format!("****{}", tail)
}
