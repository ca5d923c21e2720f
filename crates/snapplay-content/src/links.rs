//! Outbound links referenced by the site.
//!
//! These URLs are rendered verbatim; changing one here changes every anchor
//! that points at it.

use serde::Serialize;

/// Play Store listing for the app.
pub const APP_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.snapplay.offline.games";

/// Developer website.
pub const DEVELOPER_URL: &str = "https://sarankar.com";

/// Support address, without the `mailto:` scheme.
pub const SUPPORT_EMAIL: &str = "support@sarankar.com";

/// Support address as a link target.
pub const SUPPORT_MAILTO: &str = "mailto:support@sarankar.com";

/// Route of the privacy policy page.
pub const PRIVACY_ROUTE: &str = "/privacy";

/// In-page anchor of the feature grid.
pub const FEATURES_ANCHOR: &str = "#features";

/// A static navigation reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OutboundLink {
    /// Anchor text
    pub label: &'static str,

    /// Destination, rendered exactly as written
    pub href: &'static str,

    /// Opens in a new tab with `rel="noopener noreferrer"`
    pub external: bool,
}

impl OutboundLink {
    /// Link that stays in the current tab.
    pub const fn internal(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            external: false,
        }
    }

    /// Link that opens in a new tab.
    pub const fn external(label: &'static str, href: &'static str) -> Self {
        Self {
            label,
            href,
            external: true,
        }
    }
}

/// Text links in the landing navigation bar.
pub const NAV_LINKS: [OutboundLink; 2] = [
    OutboundLink::internal("Features", FEATURES_ANCHOR),
    OutboundLink::internal("Developer", DEVELOPER_URL),
];

/// Download button at the right of the navigation bar.
pub const NAV_DOWNLOAD: OutboundLink = OutboundLink::external("Download", APP_STORE_URL);

/// Primary hero call to action.
pub const HERO_PRIMARY: OutboundLink = OutboundLink::external("Get on Google Play", APP_STORE_URL);

/// Secondary hero call to action, scrolls to the feature grid.
pub const HERO_SECONDARY: OutboundLink = OutboundLink::internal("Learn More", FEATURES_ANCHOR);

/// Footer links, in display order.
pub const FOOTER_LINKS: [OutboundLink; 3] = [
    OutboundLink::internal("Developer Website", DEVELOPER_URL),
    OutboundLink::internal("Privacy Policy", PRIVACY_ROUTE),
    OutboundLink::internal("Support", SUPPORT_MAILTO),
];

/// Third-party services whose privacy policies apply to the apps.
pub const THIRD_PARTY_SERVICES: [OutboundLink; 2] = [
    OutboundLink::external("Google Play Services", "https://policies.google.com/privacy"),
    OutboundLink::external(
        "AdMob",
        "https://support.google.com/admob/answer/6128543?hl=en",
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_store_link_targets_package() {
        assert!(APP_STORE_URL.ends_with("/details?id=com.snapplay.offline.games"));
        assert_eq!(NAV_DOWNLOAD.href, APP_STORE_URL);
        assert_eq!(HERO_PRIMARY.href, APP_STORE_URL);
    }

    #[test]
    fn support_mailto_matches_address() {
        assert_eq!(SUPPORT_MAILTO, format!("mailto:{}", SUPPORT_EMAIL));
    }

    #[test]
    fn footer_links_in_order() {
        let labels: Vec<_> = FOOTER_LINKS.iter().map(|l| l.label).collect();
        assert_eq!(labels, ["Developer Website", "Privacy Policy", "Support"]);
        assert!(FOOTER_LINKS.iter().all(|l| !l.external));
    }

    #[test]
    fn third_party_links_open_externally() {
        assert!(THIRD_PARTY_SERVICES.iter().all(|l| l.external));
    }
}
