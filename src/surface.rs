// src/surface.rs

use url::Url;

use crate::config::endpoints::WEB_FALLBACK_BASE;
use crate::model::format::Format;

/// Image loading capability supplied by the host. Caching and retry
/// semantics are the host's concern.
pub trait ImageLoader {
    type Renderable;

    fn load_image(&self, url: &str) -> Self::Renderable;
}

/// Embedded web surface capability supplied by the host.
pub trait WebSurface {
    fn load_page(&self, url: &str);
}

/// Address of the embedded web fallback page for an ad unit.
pub fn web_fallback_url(format: Format, ad_unit_id: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .append_pair("size", format.slug())
        .append_pair("ad_unit_id", ad_unit_id)
        .finish();
    format!("{}/prebid/?{}", WEB_FALLBACK_BASE, query)
}

/// Disposition of a navigation intercepted from the embedded web surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The target stays on the fallback host; load it in the surface.
    InSurface,
    /// Anything else opens in the platform's external browser.
    External,
}

/// Classifies a navigation intercepted from the web fallback surface.
pub fn classify_navigation(target: &str) -> Navigation {
    let fallback_host = Url::parse(WEB_FALLBACK_BASE)
        .ok()
        .and_then(|url| url.host_str().map(str::to_owned));
    match (Url::parse(target), fallback_host) {
        (Ok(url), Some(host)) if url.host_str() == Some(host.as_str()) => Navigation::InSurface,
        _ => Navigation::External,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_url_names_size_and_unit() {
        assert_eq!(
            web_fallback_url(Format::MediumRectangle, "not-a-uuid"),
            "https://www.zesty.xyz/prebid/?size=medium-rectangle&ad_unit_id=not-a-uuid"
        );
    }

    #[test]
    fn fallback_url_encodes_the_unit_id() {
        let url = web_fallback_url(Format::Billboard, "unit id&x");
        assert_eq!(
            url,
            "https://www.zesty.xyz/prebid/?size=billboard&ad_unit_id=unit+id%26x"
        );
    }

    #[test]
    fn fallback_host_navigations_stay_in_surface() {
        assert_eq!(
            classify_navigation("https://www.zesty.xyz/prebid/?size=billboard"),
            Navigation::InSurface
        );
    }

    #[test]
    fn off_host_navigations_open_externally() {
        assert_eq!(
            classify_navigation("https://advertiser.example.com/landing"),
            Navigation::External
        );
        assert_eq!(
            classify_navigation("https://zesty.xyz.evil.example.com/"),
            Navigation::External
        );
        assert_eq!(classify_navigation("not a url"), Navigation::External);
    }
}
