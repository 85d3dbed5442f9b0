// src/model/campaign.rs

use serde::{Deserialize, Serialize};

/// Campaign id sentinel reported while no active campaign is known.
pub const NO_CAMPAIGN: &str = "None";

/// One creative inside a campaign response.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CampaignAd {
    pub asset_url: String,
    pub cta_url: String,
}

/// Campaign lookup envelope. The first element of `ads` is authoritative.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct CampaignResponse {
    #[serde(rename = "Ads")]
    pub ads: Vec<CampaignAd>,
    #[serde(rename = "CampaignId")]
    pub campaign_id: String,
}

impl CampaignResponse {
    /// Asset URL of the authoritative (first) ad, when any.
    pub fn first_asset_url(&self) -> Option<&str> {
        self.ads.first().map(|ad| ad.asset_url.as_str())
    }

    /// CTA URL of the authoritative (first) ad, when any.
    pub fn first_cta_url(&self) -> Option<&str> {
        self.ads.first().map(|ad| ad.cta_url.as_str())
    }

    /// True when the server reported no active campaign for the ad unit.
    /// Distinct from a transport failure.
    pub fn is_no_campaign(&self) -> bool {
        self.campaign_id == NO_CAMPAIGN
    }
}
