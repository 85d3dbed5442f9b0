// src/model/creative.rs

use crate::config::endpoints::{CDN_BASE, RELAY_URL};
use crate::model::campaign::NO_CAMPAIGN;
use crate::model::format::Format;

/// The creative actually handed to the rendering surface. Never carries an
/// empty image or CTA URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCreative {
    pub image_url: String,
    pub cta_url: String,
    pub campaign_id: String,
}

impl ResolvedCreative {
    /// Built-in fallback creative for `format`: the CDN default image and
    /// the relay click-through. Pure; the terminal fallback cannot fail.
    pub fn default_for(format: Format) -> Self {
        ResolvedCreative {
            image_url: format!("{}zesty-default-{}.png", CDN_BASE, format.slug()),
            cta_url: RELAY_URL.to_string(),
            campaign_id: NO_CAMPAIGN.to_string(),
        }
    }
}
