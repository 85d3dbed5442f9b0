// src/net/beacon.rs

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use tracing::debug;

use crate::config::endpoints::{Endpoints, PLATFORM};
use crate::error::AdError;

/// Telemetry event kinds recorded against an ad unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricEvent {
    Load,
    Click,
}

impl MetricEvent {
    /// Wire name of the event type inside the beacon mutation.
    pub fn wire_name(self) -> &'static str {
        match self {
            MetricEvent::Load => "visits",
            MetricEvent::Click => "clicks",
        }
    }
}

/// Sink for load/click telemetry. Best-effort by contract: callers swallow
/// every error this returns.
#[async_trait]
pub trait MetricsSink: Send + Sync {
    async fn report_event(
        &self,
        event: MetricEvent,
        ad_unit_id: &str,
        campaign_id: &str,
    ) -> Result<(), AdError>;
}

/// Client for the metrics beacon. Response bodies are ignored beyond the
/// status check.
#[derive(Clone)]
pub struct BeaconClient {
    client: Client,
    endpoints: Endpoints,
}

impl BeaconClient {
    pub fn new(endpoints: Endpoints) -> Self {
        BeaconClient {
            client: Client::new(),
            endpoints,
        }
    }
}

impl Default for BeaconClient {
    fn default() -> Self {
        BeaconClient::new(Endpoints::default())
    }
}

// Ids are server- or caller-supplied; quotes in them must not break out of
// the string literals inside the mutation.
fn escape_graphql_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Increment mutation for one telemetry event.
fn mutation_payload(event: MetricEvent, ad_unit_id: &str, campaign_id: &str) -> Value {
    json!({
        "query": format!(
            "mutation {{ increment(eventType: {}, spaceId: \"{}\", campaignId: \"{}\", platform: {}) {{ message }} }}",
            event.wire_name(),
            escape_graphql_string(ad_unit_id),
            escape_graphql_string(campaign_id),
            PLATFORM
        )
    })
}

#[async_trait]
impl MetricsSink for BeaconClient {
    async fn report_event(
        &self,
        event: MetricEvent,
        ad_unit_id: &str,
        campaign_id: &str,
    ) -> Result<(), AdError> {
        let payload = mutation_payload(event, ad_unit_id, campaign_id);
        let response = self
            .client
            .post(&self.endpoints.beacon)
            .header("Content-Type", "application/json")
            .json(&payload)
            .send()
            .await
            .map_err(|err| {
                debug!(error = %err, event = event.wire_name(), "beacon transport failure");
                AdError::InvalidResponse
            })?;

        if !response.status().is_success() {
            debug!(status = %response.status(), event = event.wire_name(), "beacon rejected event");
            return Err(AdError::InvalidResponse);
        }
        Ok(())
    }
}
