//! Type definitions for the ad launcher
//! Request payloads for the three Graph API create calls and their results

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::constants::SANDBOX_SUFFIX;

/// Campaign objective (ODAX outcome-based objectives)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CampaignObjective {
    OutcomeAwareness,
    OutcomeEngagement,
    OutcomeLeads,
    OutcomeSales,
    OutcomeTraffic,
    OutcomeAppPromotion,
}

/// Delivery status requested at creation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityStatus {
    Active,
    Paused,
}

/// Special ad categories (housing, employment, credit, ...)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecialAdCategory {
    Credit,
    Employment,
    Housing,
    IssuesElectionsPolitics,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BillingEvent {
    Impressions,
    LinkClicks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizationGoal {
    Reach,
    Impressions,
    LinkClicks,
    LandingPageViews,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DevicePlatform {
    Mobile,
    Desktop,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PublisherPlatform {
    Facebook,
    Instagram,
    Messenger,
    AudienceNetwork,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FacebookPosition {
    Feed,
    Marketplace,
    VideoFeeds,
    Story,
    RightHandColumn,
}

/// Payload for `POST act_<id>/campaigns`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewCampaign {
    pub name: String,
    pub objective: CampaignObjective,
    pub status: EntityStatus,
    /// Empty list means "no special category"; the API still requires the field
    pub special_ad_categories: Vec<SpecialAdCategory>,
}

/// Geographic targeting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoLocations {
    /// ISO 3166-1 alpha-2 country codes
    pub countries: Vec<String>,
}

/// Audience targeting spec, sent as one JSON-encoded form field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Targeting {
    pub geo_locations: GeoLocations,
    pub age_min: u8,
    pub age_max: u8,
    /// Graph locale ids
    pub locales: Vec<u32>,
    pub device_platforms: Vec<DevicePlatform>,
    pub publisher_platforms: Vec<PublisherPlatform>,
    pub facebook_positions: Vec<FacebookPosition>,
}

/// Payload for `POST act_<id>/adsets`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdSet {
    pub name: String,
    /// Parent campaign. Always the id returned by the campaign create call.
    pub campaign_id: String,
    /// Minor units of the account currency
    pub daily_budget: u64,
    pub billing_event: BillingEvent,
    pub optimization_goal: OptimizationGoal,
    pub bid_amount: u64,
    pub targeting: Targeting,
    pub status: EntityStatus,
    #[serde(with = "graph_time")]
    pub start_time: DateTime<FixedOffset>,
    #[serde(with = "graph_time")]
    pub end_time: DateTime<FixedOffset>,
}

impl NewAdSet {
    /// Copy of this ad set attached to `campaign_id`
    pub fn for_campaign(&self, campaign_id: impl Into<String>) -> Self {
        Self {
            campaign_id: campaign_id.into(),
            ..self.clone()
        }
    }
}

/// Link post content of a creative
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinkData {
    pub caption: String,
    pub description: String,
    pub link: String,
    pub message: String,
    /// Headline shown under the link preview
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectStorySpec {
    pub link_data: LinkData,
    pub page_id: String,
}

/// Payload for `POST act_<id>/adcreatives`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAdCreative {
    pub name: String,
    pub object_story_spec: ObjectStorySpec,
}

/// The three entity types the launcher creates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    Campaign,
    AdSet,
    AdCreative,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Campaign => "campaign",
            EntityKind::AdSet => "ad_set",
            EntityKind::AdCreative => "ad_creative",
        }
    }

    /// Console line announcing a created entity
    pub fn success_line(&self, id: &str) -> String {
        let created = match self {
            EntityKind::Campaign => "Campanha criada",
            EntityKind::AdSet => "AdSet criado",
            EntityKind::AdCreative => "AdCreative criado",
        };
        format!("{} com ID: {} {}", created, id, SANDBOX_SUFFIX)
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entity the platform accepted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedEntity {
    pub kind: EntityKind,
    pub id: String,
}

impl CreatedEntity {
    pub fn new(kind: EntityKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }

    pub fn success_line(&self) -> String {
        self.kind.success_line(&self.id)
    }
}

/// Ids of everything created in one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LaunchReport {
    pub campaign_id: String,
    pub ad_set_id: String,
    pub ad_creative_id: String,
}

/// Graph API wire format for ad set schedule timestamps (`2024-10-25T00:00:00-0800`)
pub mod graph_time {
    use chrono::{DateTime, FixedOffset};
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::utils::constants::GRAPH_TIME_FORMAT;

    pub fn serialize<S>(time: &DateTime<FixedOffset>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(&time.format(GRAPH_TIME_FORMAT))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<FixedOffset>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(serde::de::Error::custom)
    }

    /// Parse a timestamp in the Graph API format
    pub fn parse(raw: &str) -> Result<DateTime<FixedOffset>, chrono::ParseError> {
        DateTime::parse_from_str(raw, GRAPH_TIME_FORMAT)
    }
}
