// src/lib.rs

//! Zesty in-app ad delivery client.
//!
//! Resolves a campaign creative for an (ad unit, format) pairing, reports
//! load/click telemetry to the beacon, and degrades to a built-in default
//! creative or an embedded web fallback when the ad server cannot deliver.
//! The display always ends in one of: served creative, default creative, or
//! the web fallback page — never blank.

pub mod config;
pub mod error;
pub mod model;
pub mod net;
pub mod session;
pub mod surface;

pub use config::endpoints::Endpoints;
pub use error::AdError;
pub use model::campaign::{CampaignAd, CampaignResponse, NO_CAMPAIGN};
pub use model::creative::ResolvedCreative;
pub use model::format::{scale_for, DisplayConstraints, Format};
pub use net::ad_client::{AdServerClient, CampaignSource};
pub use net::beacon::{BeaconClient, MetricEvent, MetricsSink};
pub use session::{AdSession, AdState, Phase, RenderSurface};
pub use surface::{classify_navigation, web_fallback_url, ImageLoader, Navigation, WebSurface};
