// src/session.rs

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::AdError;
use crate::model::campaign::NO_CAMPAIGN;
use crate::model::creative::ResolvedCreative;
use crate::model::format::{scale_for, DisplayConstraints, Format};
use crate::net::ad_client::CampaignSource;
use crate::net::beacon::{MetricEvent, MetricsSink};
use crate::surface::{web_fallback_url, ImageLoader, WebSurface};

/// Resolution progress within one display session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Loading,
    /// A campaign response was decoded; the creative comes from it.
    Resolved,
    /// The fetch failed; the built-in default creative is shown.
    Defaulted,
}

/// Which surface the host should present right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderSurface {
    /// Show the current creative image, linked to its CTA.
    Image,
    /// Show the embedded web fallback page at this address.
    WebFallback(String),
}

/// Snapshot of session state for the host to poll after `resolve`.
#[derive(Debug, Clone, PartialEq)]
pub struct AdState {
    pub phase: Phase,
    pub creative: ResolvedCreative,
    pub is_loading: bool,
    pub error: Option<AdError>,
}

/// One ad resolution session, owned by a single display surface for the
/// lifetime of one mount.
///
/// Resolution runs at most once per mount; there is no transition back to
/// Loading. The ad unit id is validated as a UUID at construction, and a
/// malformed id routes the session to the web fallback permanently, with no
/// network call ever issued for it.
pub struct AdSession {
    ad_unit_id: String,
    format: Format,
    web_fallback: bool,
    phase: Phase,
    creative: ResolvedCreative,
    error: Option<AdError>,
    load_reported: bool,
    source: Arc<dyn CampaignSource>,
    metrics: Arc<dyn MetricsSink>,
}

impl AdSession {
    pub fn new(
        ad_unit_id: impl Into<String>,
        format: Format,
        source: Arc<dyn CampaignSource>,
        metrics: Arc<dyn MetricsSink>,
    ) -> Self {
        let ad_unit_id = ad_unit_id.into();
        let web_fallback = Uuid::parse_str(&ad_unit_id).is_err();
        if web_fallback {
            warn!(ad_unit_id = %ad_unit_id, "ad unit id is not a UUID; session pinned to web fallback");
        }
        AdSession {
            creative: ResolvedCreative::default_for(format),
            ad_unit_id,
            format,
            web_fallback,
            phase: Phase::Idle,
            error: None,
            load_reported: false,
            source,
            metrics,
        }
    }

    /// Runs fetch → creative decision once, suspending at the network
    /// boundary. Further calls within the same mount are no-ops, so the
    /// load metric cannot double-fire.
    pub async fn resolve(&mut self) {
        if self.web_fallback || self.phase != Phase::Idle {
            return;
        }
        self.phase = Phase::Loading;
        self.error = None;

        match self.source.fetch_campaign_ad(&self.ad_unit_id).await {
            Ok(response) => {
                // Empty-string URLs count as absent: the creative handed to
                // the surface must always be renderable.
                let fallback = ResolvedCreative::default_for(self.format);
                self.creative = ResolvedCreative {
                    image_url: response
                        .first_asset_url()
                        .filter(|url| !url.is_empty())
                        .map(str::to_owned)
                        .unwrap_or(fallback.image_url),
                    cta_url: response
                        .first_cta_url()
                        .filter(|url| !url.is_empty())
                        .map(str::to_owned)
                        .unwrap_or(fallback.cta_url),
                    campaign_id: response.campaign_id,
                };
                self.phase = Phase::Resolved;
                if !self.load_reported {
                    self.load_reported = true;
                    self.spawn_metric(MetricEvent::Load);
                }
            }
            Err(err) => {
                warn!(error = %err, ad_unit_id = %self.ad_unit_id, "campaign fetch failed; using default creative");
                self.creative = ResolvedCreative::default_for(self.format);
                self.phase = Phase::Defaulted;
                self.error = Some(err);
            }
        }
    }

    /// Records a click and hands back the CTA to open. Returns `None` until
    /// resolution settles. Concurrent clicks produce independent metric
    /// calls; none of them can fail the caller.
    pub fn click(&self) -> Option<&str> {
        match self.phase {
            Phase::Resolved | Phase::Defaulted => {
                self.spawn_metric(MetricEvent::Click);
                Some(self.creative.cta_url.as_str())
            }
            Phase::Idle | Phase::Loading => None,
        }
    }

    // Not awaited: a metric failure, or a result arriving after the host
    // surface is torn down, must never touch the displayed state. Without a
    // running runtime the event is dropped, not panicked on.
    fn spawn_metric(&self, event: MetricEvent) {
        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                debug!(event = event.wire_name(), "no async runtime; dropping metric report");
                return;
            }
        };
        let metrics = Arc::clone(&self.metrics);
        let ad_unit_id = self.ad_unit_id.clone();
        let campaign_id = self.creative.campaign_id.clone();
        handle.spawn(async move {
            if let Err(err) = metrics
                .report_event(event, &ad_unit_id, &campaign_id)
                .await
            {
                debug!(error = %err, event = event.wire_name(), "dropping failed metric report");
            }
        });
    }

    /// Which surface to present. The web fallback covers invalid-id
    /// sessions, the window before resolution settles, and a success path
    /// that reported no active campaign. A Defaulted session shows the
    /// default image, never the web view.
    pub fn render_surface(&self) -> RenderSurface {
        let show_web = self.web_fallback
            || matches!(self.phase, Phase::Idle | Phase::Loading)
            || (self.phase == Phase::Resolved && self.creative.campaign_id == NO_CAMPAIGN);
        if show_web {
            RenderSurface::WebFallback(web_fallback_url(self.format, &self.ad_unit_id))
        } else {
            RenderSurface::Image
        }
    }

    /// Drives the host collaborators per the render rule. Returns the loaded
    /// renderable and its contain-fit scale when the image path is taken.
    pub fn render<L, W>(
        &self,
        images: &L,
        web: &W,
        constraints: &DisplayConstraints,
    ) -> Option<(L::Renderable, (f64, f64))>
    where
        L: ImageLoader,
        W: WebSurface,
    {
        match self.render_surface() {
            RenderSurface::Image => {
                let scale = scale_for(self.format, constraints);
                Some((images.load_image(&self.creative.image_url), scale))
            }
            RenderSurface::WebFallback(url) => {
                web.load_page(&url);
                None
            }
        }
    }

    pub fn state(&self) -> AdState {
        AdState {
            phase: self.phase,
            creative: self.creative.clone(),
            is_loading: self.phase == Phase::Loading,
            error: self.error,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.phase == Phase::Loading
    }

    pub fn creative(&self) -> &ResolvedCreative {
        &self.creative
    }

    pub fn format(&self) -> Format {
        self.format
    }

    pub fn ad_unit_id(&self) -> &str {
        &self.ad_unit_id
    }

    /// True when the invalid-id gate is active for this session.
    pub fn is_web_fallback(&self) -> bool {
        self.web_fallback
    }

    /// The fetch error that forced the Defaulted state, when any.
    pub fn last_error(&self) -> Option<AdError> {
        self.error
    }
}
