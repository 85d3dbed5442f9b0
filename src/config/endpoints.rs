// src/config/endpoints.rs

/// Production ad-server API root.
pub const AD_ENDPOINT: &str = "https://api.zesty.market/api";
/// Production metrics beacon.
pub const BEACON_ENDPOINT: &str = "https://beacon2.zesty.market/zgraphql";
/// CDN base holding the default creatives.
pub const CDN_BASE: &str = "https://cdn.zesty.xyz/images/zesty/";
/// Default click-through destination when no campaign CTA is known.
pub const RELAY_URL: &str = "https://relay.zesty.xyz";
/// Base of the embedded web fallback page.
pub const WEB_FALLBACK_BASE: &str = "https://www.zesty.xyz";
/// Platform tag attached to every beacon event.
pub const PLATFORM: &str = "Rust";

/// Endpoint set handed to the network clients. Defaults to the production
/// services; tests point it at local doubles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    pub ad_server: String,
    pub beacon: String,
}

impl Endpoints {
    pub fn new(ad_server: impl Into<String>, beacon: impl Into<String>) -> Self {
        Endpoints {
            ad_server: ad_server.into(),
            beacon: beacon.into(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Endpoints::new(AD_ENDPOINT, BEACON_ENDPOINT)
    }
}
