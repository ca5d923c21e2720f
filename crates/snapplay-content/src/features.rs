//! Feature cards shown in the landing page grid.

use serde::Serialize;

use crate::icons::Icon;

/// Accent color of a feature glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Yellow,
    Blue,
    Purple,
}

/// One card in the feature grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeatureCard {
    pub icon: Icon,
    pub tone: Tone,
    pub title: &'static str,
    pub description: &'static str,
}

/// The feature grid, in display order.
pub const FEATURES: [FeatureCard; 3] = [
    FeatureCard {
        icon: Icon::Zap,
        tone: Tone::Yellow,
        title: "Zero Internet Needed",
        description: "Every game works 100% offline. Perfect for flights, road trips, or when you're out of data.",
    },
    FeatureCard {
        icon: Icon::Users,
        tone: Tone::Blue,
        title: "Multiplayer Madness",
        description: "Challenge friends on the same device (Pass & Play) or connect via Bluetooth for local battles.",
    },
    FeatureCard {
        icon: Icon::Trophy,
        tone: Tone::Purple,
        title: "Global Leaderboards",
        description: "Climb the ranks and prove your skills in daily challenges.",
    },
];
