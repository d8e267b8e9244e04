//! Launch blueprint: the fixed configuration of the three sandbox entities

use crate::models::errors::{AppError, AppResult};
use crate::models::types::{
    graph_time, BillingEvent, CampaignObjective, DevicePlatform, EntityStatus, FacebookPosition,
    GeoLocations, LinkData, NewAdCreative, NewAdSet, NewCampaign, ObjectStorySpec,
    OptimizationGoal, PublisherPlatform, Targeting,
};
use crate::utils::constants::{
    AD_SET_BID_AMOUNT, AD_SET_DAILY_BUDGET, AD_SET_END_TIME, AD_SET_NAME, AD_SET_START_TIME,
    CAMPAIGN_NAME, CREATIVE_CAPTION, CREATIVE_DESCRIPTION, CREATIVE_HEADLINE, CREATIVE_LINK,
    CREATIVE_MESSAGE, CREATIVE_NAME, CREATIVE_PAGE_ID, TARGET_AGE_MAX, TARGET_AGE_MIN,
    TARGET_COUNTRIES, TARGET_LOCALES,
};

/// Everything submitted during one launch.
///
/// `ad_set.campaign_id` is a placeholder; the launcher replaces it with the id
/// returned by the campaign create call.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchBlueprint {
    pub campaign: NewCampaign,
    pub ad_set: NewAdSet,
    pub creative: NewAdCreative,
}

impl LaunchBlueprint {
    /// Tech lead recruitment campaign for Latin America
    pub fn tech_lead_recruitment() -> AppResult<Self> {
        let campaign = NewCampaign {
            name: CAMPAIGN_NAME.to_string(),
            objective: CampaignObjective::OutcomeTraffic,
            // Activated manually later
            status: EntityStatus::Paused,
            special_ad_categories: Vec::new(),
        };

        let targeting = Targeting {
            geo_locations: GeoLocations {
                countries: TARGET_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            },
            age_min: TARGET_AGE_MIN,
            age_max: TARGET_AGE_MAX,
            locales: TARGET_LOCALES.to_vec(),
            device_platforms: vec![DevicePlatform::Mobile, DevicePlatform::Desktop],
            publisher_platforms: vec![PublisherPlatform::Facebook, PublisherPlatform::Instagram],
            facebook_positions: vec![FacebookPosition::Feed, FacebookPosition::Marketplace],
        };

        let ad_set = NewAdSet {
            name: AD_SET_NAME.to_string(),
            campaign_id: String::new(),
            daily_budget: AD_SET_DAILY_BUDGET,
            billing_event: BillingEvent::Impressions,
            optimization_goal: OptimizationGoal::Reach,
            bid_amount: AD_SET_BID_AMOUNT,
            targeting,
            status: EntityStatus::Active,
            start_time: parse_schedule(AD_SET_START_TIME)?,
            end_time: parse_schedule(AD_SET_END_TIME)?,
        };

        let creative = NewAdCreative {
            name: CREATIVE_NAME.to_string(),
            object_story_spec: ObjectStorySpec {
                link_data: LinkData {
                    caption: CREATIVE_CAPTION.to_string(),
                    description: CREATIVE_DESCRIPTION.to_string(),
                    link: CREATIVE_LINK.to_string(),
                    message: CREATIVE_MESSAGE.to_string(),
                    name: CREATIVE_HEADLINE.to_string(),
                },
                page_id: CREATIVE_PAGE_ID.to_string(),
            },
        };

        Ok(Self {
            campaign,
            ad_set,
            creative,
        })
    }
}

fn parse_schedule(raw: &str) -> AppResult<chrono::DateTime<chrono::FixedOffset>> {
    graph_time::parse(raw)
        .map_err(|e| AppError::invalid_config(format!("Bad ad set schedule {:?}: {}", raw, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::graph::encode_params;

    #[test]
    fn test_campaign_literals() {
        let bp = LaunchBlueprint::tech_lead_recruitment().unwrap();
        assert_eq!(bp.campaign.objective, CampaignObjective::OutcomeTraffic);
        assert_eq!(bp.campaign.status, EntityStatus::Paused);
        assert!(bp.campaign.special_ad_categories.is_empty());
    }

    #[test]
    fn test_ad_set_schedule_ordered() {
        let bp = LaunchBlueprint::tech_lead_recruitment().unwrap();
        assert!(bp.ad_set.start_time < bp.ad_set.end_time);
        assert!(bp.ad_set.campaign_id.is_empty());
    }

    #[test]
    fn test_ad_set_wire_params() {
        let bp = LaunchBlueprint::tech_lead_recruitment().unwrap();
        let params = encode_params(&bp.ad_set.for_campaign("120")).unwrap();
        let get = |k: &str| {
            params
                .iter()
                .find(|(key, _)| key == k)
                .map(|(_, v)| v.clone())
                .unwrap()
        };

        assert_eq!(get("campaign_id"), "120");
        assert_eq!(get("daily_budget"), "20000");
        assert_eq!(get("bid_amount"), "100");
        assert_eq!(get("billing_event"), "IMPRESSIONS");
        assert_eq!(get("optimization_goal"), "REACH");
        assert_eq!(get("start_time"), "2024-10-25T00:00:00-0800");
        assert_eq!(get("end_time"), "2024-11-25T23:59:59-0800");

        let targeting: serde_json::Value = serde_json::from_str(&get("targeting")).unwrap();
        assert_eq!(
            targeting["geo_locations"]["countries"],
            serde_json::json!(["BR", "MX", "AR", "CL", "PE"])
        );
        assert_eq!(targeting["age_min"], 25);
        assert_eq!(targeting["age_max"], 45);
        assert_eq!(targeting["locales"], serde_json::json!([6]));
        assert_eq!(
            targeting["publisher_platforms"],
            serde_json::json!(["facebook", "instagram"])
        );
        assert_eq!(
            targeting["facebook_positions"],
            serde_json::json!(["feed", "marketplace"])
        );
    }

    #[test]
    fn test_creative_story_spec() {
        let bp = LaunchBlueprint::tech_lead_recruitment().unwrap();
        let params = encode_params(&bp.creative).unwrap();
        let spec = params
            .iter()
            .find(|(k, _)| k == "object_story_spec")
            .map(|(_, v)| v.clone())
            .unwrap();
        let spec: serde_json::Value = serde_json::from_str(&spec).unwrap();
        assert_eq!(spec["page_id"], "450954828104598");
        assert_eq!(spec["link_data"]["caption"], "torre.ai");
    }
}
