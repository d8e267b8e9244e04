//! Graph API Client - Ad account create calls
//!
//! Entities are created by POSTing form params to edges of the ad account node:
//! `POST {host}/{version}/act_<id>/{campaigns|adsets|adcreatives}`
//!
//! Params are encoded the way the vendor SDK does it: string fields go out raw,
//! everything else (numbers, lists, nested specs) as compact JSON.
//! The access token travels in the `Authorization: Bearer` header and is never logged.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::models::config::{AdAccountId, Credentials, LauncherConfig};
use crate::models::errors::{AppError, AppResult};
use crate::models::types::{CreatedEntity, EntityKind, NewAdCreative, NewAdSet, NewCampaign};
use crate::utils::constants::{
    EDGE_AD_CREATIVES, EDGE_AD_SETS, EDGE_CAMPAIGNS, USER_AGENT as USER_AGENT_CONST,
};

/// Longest slice of a non-JSON error body kept in the error message
const MAX_ERROR_BODY_CHARS: usize = 200;

/// Create operations on one ad account
#[async_trait]
pub trait AdAccountApi: Send + Sync {
    async fn create_campaign(&self, campaign: &NewCampaign) -> AppResult<CreatedEntity>;

    async fn create_ad_set(&self, ad_set: &NewAdSet) -> AppResult<CreatedEntity>;

    async fn create_ad_creative(&self, creative: &NewAdCreative) -> AppResult<CreatedEntity>;
}

#[async_trait]
impl<T: AdAccountApi + ?Sized> AdAccountApi for &T {
    async fn create_campaign(&self, campaign: &NewCampaign) -> AppResult<CreatedEntity> {
        (**self).create_campaign(campaign).await
    }

    async fn create_ad_set(&self, ad_set: &NewAdSet) -> AppResult<CreatedEntity> {
        (**self).create_ad_set(ad_set).await
    }

    async fn create_ad_creative(&self, creative: &NewAdCreative) -> AppResult<CreatedEntity> {
        (**self).create_ad_creative(creative).await
    }
}

/// Body of a successful create call
#[derive(Debug, Deserialize)]
struct CreateResponse {
    id: Option<String>,
}

/// Graph error envelope: `{"error": {...}}`
#[derive(Debug, Deserialize)]
struct GraphErrorEnvelope {
    error: GraphErrorBody,
}

/// Error object returned by the Graph API
#[derive(Debug, Clone, Deserialize)]
pub struct GraphErrorBody {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub code: Option<i64>,
    pub error_subcode: Option<i64>,
    pub fbtrace_id: Option<String>,
}

/// HTTP session bound to one ad account
#[derive(Clone)]
pub struct GraphClient {
    client: reqwest::Client,
    base_url: String,
    api_version: String,
    account: AdAccountId,
    access_token: String,
}

impl GraphClient {
    /// Initialize a session with the account's access token
    pub fn new(config: &LauncherConfig, credentials: Credentials) -> AppResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_CONST));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .gzip(true)
            .timeout(config.request_timeout)
            .build()?;

        info!(
            "🌐 Graph API session ready: {}/{} for {}",
            config.graph_base_url, config.api_version, credentials.ad_account_id
        );

        Ok(Self {
            client,
            base_url: config.graph_base_url.trim_end_matches('/').to_string(),
            api_version: config.api_version.clone(),
            account: credentials.ad_account_id,
            access_token: credentials.access_token,
        })
    }

    pub fn account(&self) -> &AdAccountId {
        &self.account
    }

    /// URL of an ad account edge
    pub fn endpoint(&self, edge: &str) -> String {
        format!(
            "{}/{}/{}/{}",
            self.base_url, self.api_version, self.account, edge
        )
    }

    async fn create<T: Serialize + Sync>(
        &self,
        kind: EntityKind,
        edge: &str,
        payload: &T,
    ) -> AppResult<CreatedEntity> {
        let url = self.endpoint(edge);
        let params = encode_params(payload)?;
        info!("📤 Creating {} via POST {}", kind, url);
        debug!("   {} params: {:?}", kind, params);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .form(&params)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let id = decode_response(status, &body)?;

        info!("✅ {} created: {}", kind, id);
        Ok(CreatedEntity::new(kind, id))
    }
}

#[async_trait]
impl AdAccountApi for GraphClient {
    async fn create_campaign(&self, campaign: &NewCampaign) -> AppResult<CreatedEntity> {
        self.create(EntityKind::Campaign, EDGE_CAMPAIGNS, campaign)
            .await
    }

    async fn create_ad_set(&self, ad_set: &NewAdSet) -> AppResult<CreatedEntity> {
        self.create(EntityKind::AdSet, EDGE_AD_SETS, ad_set).await
    }

    async fn create_ad_creative(&self, creative: &NewAdCreative) -> AppResult<CreatedEntity> {
        self.create(EntityKind::AdCreative, EDGE_AD_CREATIVES, creative)
            .await
    }
}

/// Flatten a payload into form params: strings raw, other values as compact JSON.
/// Null fields are omitted.
pub fn encode_params<T: Serialize>(payload: &T) -> AppResult<Vec<(String, String)>> {
    let fields = match serde_json::to_value(payload)? {
        Value::Object(fields) => fields,
        other => {
            return Err(AppError::invalid_config(format!(
                "Payload must serialize to an object, got {}",
                other
            )))
        }
    };

    Ok(fields
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| match value {
            Value::String(s) => (key, s),
            other => (key, other.to_string()),
        })
        .collect())
}

/// Turn a create response into the new entity's id
pub fn decode_response(status: StatusCode, body: &str) -> AppResult<String> {
    if status.is_success() {
        let parsed: CreateResponse = serde_json::from_str(body)?;
        return parsed
            .id
            .filter(|id| !id.is_empty())
            .ok_or_else(|| AppError::invalid_response(format!("Response has no id: {}", body)));
    }

    match serde_json::from_str::<GraphErrorEnvelope>(body) {
        Ok(GraphErrorEnvelope { error }) => {
            warn!(
                "⚠️ Graph API error: HTTP {} type={} code={} subcode={} fbtrace_id={}",
                status.as_u16(),
                error.kind.as_deref().unwrap_or("-"),
                error.code.map(|c| c.to_string()).unwrap_or_else(|| "-".into()),
                error
                    .error_subcode
                    .map(|c| c.to_string())
                    .unwrap_or_else(|| "-".into()),
                error.fbtrace_id.as_deref().unwrap_or("-"),
            );
            Err(AppError::graph_api(error.message))
        }
        Err(_) => {
            let snippet: String = body.chars().take(MAX_ERROR_BODY_CHARS).collect();
            Err(AppError::graph_api(format!(
                "HTTP {}: {}",
                status.as_u16(),
                snippet
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::errors::ErrorCode;
    use crate::models::types::{CampaignObjective, EntityStatus};
    use std::time::Duration;

    fn test_client() -> GraphClient {
        let config = LauncherConfig {
            graph_base_url: "http://127.0.0.1:9/".to_string(),
            api_version: "v21.0".to_string(),
            request_timeout: Duration::from_secs(1),
            ..LauncherConfig::default()
        };
        let creds =
            Credentials::from_json(r#"{"access_token": "tok", "ad_account_id": "777"}"#).unwrap();
        GraphClient::new(&config, creds).unwrap()
    }

    #[test]
    fn test_endpoint() {
        let client = test_client();
        assert_eq!(client.account().as_str(), "act_777");
        assert_eq!(
            client.endpoint(EDGE_AD_SETS),
            "http://127.0.0.1:9/v21.0/act_777/adsets"
        );
    }

    #[test]
    fn test_encode_params_strings_raw_rest_json() {
        let campaign = NewCampaign {
            name: "Recruitment".to_string(),
            objective: CampaignObjective::OutcomeTraffic,
            status: EntityStatus::Paused,
            special_ad_categories: vec![],
        };
        let params = encode_params(&campaign).unwrap();
        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("name"), "Recruitment");
        assert_eq!(get("objective"), "OUTCOME_TRAFFIC");
        assert_eq!(get("status"), "PAUSED");
        assert_eq!(get("special_ad_categories"), "[]");
    }

    #[test]
    fn test_encode_params_nested_and_null() {
        let payload = serde_json::json!({
            "budget": 20000,
            "targeting": {"age_min": 25},
            "skip": null,
        });
        let params = encode_params(&payload).unwrap();
        assert_eq!(params.len(), 2);
        assert!(params.contains(&("budget".to_string(), "20000".to_string())));
        assert!(params.contains(&("targeting".to_string(), r#"{"age_min":25}"#.to_string())));
    }

    #[test]
    fn test_encode_params_rejects_non_object() {
        assert!(encode_params(&vec![1, 2]).is_err());
    }

    #[test]
    fn test_decode_success() {
        let id = decode_response(StatusCode::OK, r#"{"id": "120210000000001"}"#).unwrap();
        assert_eq!(id, "120210000000001");
    }

    #[test]
    fn test_decode_success_without_id() {
        let err = decode_response(StatusCode::OK, r#"{"success": true}"#).unwrap_err();
        assert_eq!(err.code, ErrorCode::GraphInvalidResponse);
    }

    #[test]
    fn test_decode_graph_error() {
        let body = r#"{"error": {"message": "Invalid OAuth access token - Cannot parse access token", "type": "OAuthException", "code": 190, "fbtrace_id": "AbC"}}"#;
        let err = decode_response(StatusCode::BAD_REQUEST, body).unwrap_err();
        assert_eq!(err.code, ErrorCode::GraphApiError);
        assert_eq!(
            err.message,
            "Invalid OAuth access token - Cannot parse access token"
        );
    }

    #[test]
    fn test_decode_non_json_error() {
        let err = decode_response(StatusCode::BAD_GATEWAY, "<html>bad gateway</html>").unwrap_err();
        assert_eq!(err.code, ErrorCode::GraphApiError);
        assert!(err.message.starts_with("HTTP 502"));
    }
}
