//! Hero copy of the landing page.

/// Small pill above the heading.
pub const BADGE: &str = "OFFLINE MULTIPLAYER GAMES";

/// Heading text before the accented phrase.
pub const HEADING_LEAD: &str = "Your Ultimate";

/// Accented phrase in the middle of the heading.
pub const HEADING_ACCENT: &str = "Offline Game";

/// Heading text after the accented phrase.
pub const HEADING_TAIL: &str = "Collection";

pub const SUBHEADING: &str = "Play 30+ premium mini-games without internet. Challenge friends via Bluetooth or pass-and-play. No Wi-Fi? No Problem.";
