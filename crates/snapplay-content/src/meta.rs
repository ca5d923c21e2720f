//! Page metadata for discovery and sharing.

use serde::Serialize;
use serde_json::{json, Value};

use crate::features::FEATURES;
use crate::links::{APP_STORE_URL, DEVELOPER_URL};

/// Brand name shown in the navigation bar and footer.
pub const SITE_NAME: &str = "SnapPlay";

/// Publisher named in the policy and structured data.
pub const PUBLISHER: &str = "Sarankar Developers";

/// Footer copyright line.
pub const COPYRIGHT: &str = "\u{a9} 2026 SnapPlay.";

/// Title and description attached to a document head.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const LANDING_META: PageMeta = PageMeta {
    title: "SnapPlay | Offline Multiplayer Game Collection",
    description: "Play 30+ premium mini-games without internet. Challenge friends via Bluetooth or pass-and-play.",
};

pub const PRIVACY_META: PageMeta = PageMeta {
    title: "Privacy Policy | SnapPlay",
    description: "How Sarankar Developers handles information in SnapPlay and its other apps.",
};

/// JSON-LD `SoftwareApplication` record for the landing page.
///
/// `site_url` is the absolute origin the site is deployed at, if known.
pub fn structured_data(site_url: Option<&str>) -> Value {
    let mut data = json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": SITE_NAME,
        "description": LANDING_META.description,
        "applicationCategory": "GameApplication",
        "operatingSystem": "Android",
        "installUrl": APP_STORE_URL,
        "featureList": FEATURES.iter().map(|f| f.title).collect::<Vec<_>>(),
        "offers": { "@type": "Offer", "price": "0" },
        "author": {
            "@type": "Organization",
            "name": PUBLISHER,
            "url": DEVELOPER_URL,
        },
    });

    if let Some(url) = site_url {
        data["url"] = Value::String(url.to_string());
    }

    data
}
