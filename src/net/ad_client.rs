// src/net/ad_client.rs

use async_trait::async_trait;
use reqwest::{Client, Url};
use tracing::debug;

use crate::config::endpoints::Endpoints;
use crate::error::AdError;
use crate::model::campaign::CampaignResponse;

/// Source of campaign lookups. The session depends on this seam rather than
/// the concrete client so tests can substitute a double for the ad server.
#[async_trait]
pub trait CampaignSource: Send + Sync {
    async fn fetch_campaign_ad(&self, ad_unit_id: &str) -> Result<CampaignResponse, AdError>;
}

/// Stateless client for the ad server. No retries; retry policy, if any,
/// belongs to the caller.
#[derive(Clone)]
pub struct AdServerClient {
    client: Client,
    endpoints: Endpoints,
}

impl AdServerClient {
    pub fn new(endpoints: Endpoints) -> Self {
        AdServerClient {
            client: Client::new(),
            endpoints,
        }
    }

    fn ad_url(&self, ad_unit_id: &str) -> Result<Url, AdError> {
        if ad_unit_id.is_empty() {
            return Err(AdError::InvalidUrl);
        }
        let mut url = Url::parse(&format!("{}/ad", self.endpoints.ad_server))
            .map_err(|_| AdError::InvalidUrl)?;
        url.query_pairs_mut().append_pair("ad_unit_id", ad_unit_id);
        Ok(url)
    }
}

impl Default for AdServerClient {
    fn default() -> Self {
        AdServerClient::new(Endpoints::default())
    }
}

#[async_trait]
impl CampaignSource for AdServerClient {
    async fn fetch_campaign_ad(&self, ad_unit_id: &str) -> Result<CampaignResponse, AdError> {
        let url = self.ad_url(ad_unit_id)?;
        let response = self
            .client
            .get(url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|err| {
                debug!(error = %err, "campaign fetch transport failure");
                AdError::InvalidResponse
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), "campaign fetch rejected");
            return Err(AdError::InvalidResponse);
        }

        response.json::<CampaignResponse>().await.map_err(|err| {
            debug!(error = %err, "campaign envelope decode failed");
            AdError::InvalidResponse
        })
    }
}
