//! Inline SVG glyphs.
//!
//! Glyph geometry follows the Lucide icon set (24x24 viewBox, stroked).

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// A symbolic glyph reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Gamepad,
    Users,
    Download,
    Trophy,
    Zap,
    ChevronRight,
}

/// Returned when a template asks for a glyph that does not exist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown icon: {0}")]
pub struct UnknownIcon(pub String);

impl Icon {
    /// All glyphs, in declaration order.
    pub const ALL: [Icon; 6] = [
        Icon::Gamepad,
        Icon::Users,
        Icon::Download,
        Icon::Trophy,
        Icon::Zap,
        Icon::ChevronRight,
    ];

    /// Name used in templates.
    pub fn name(self) -> &'static str {
        match self {
            Icon::Gamepad => "gamepad",
            Icon::Users => "users",
            Icon::Download => "download",
            Icon::Trophy => "trophy",
            Icon::Zap => "zap",
            Icon::ChevronRight => "chevron-right",
        }
    }

    fn paths(self) -> &'static str {
        match self {
            Icon::Gamepad => concat!(
                r#"<line x1="6" x2="10" y1="11" y2="11"/>"#,
                r#"<line x1="8" x2="8" y1="9" y2="13"/>"#,
                r#"<line x1="15" x2="15.01" y1="12" y2="12"/>"#,
                r#"<line x1="18" x2="18.01" y1="10" y2="10"/>"#,
                r#"<path d="M17.32 5H6.68a4 4 0 0 0-3.978 3.59c-.006.052-.01.101-.017.152C2.604 9.416 2 14.456 2 16a3 3 0 0 0 3 3c1 0 1.5-.5 2-1l1.414-1.414A2 2 0 0 1 9.828 16h4.344a2 2 0 0 1 1.414.586L17 18c.5.5 1 1 2 1a3 3 0 0 0 3-3c0-1.545-.604-6.584-.685-7.258-.007-.05-.011-.1-.017-.151A4 4 0 0 0 17.32 5z"/>"#,
            ),
            Icon::Users => concat!(
                r#"<path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2"/>"#,
                r#"<circle cx="9" cy="7" r="4"/>"#,
                r#"<path d="M22 21v-2a4 4 0 0 0-3-3.87"/>"#,
                r#"<path d="M16 3.13a4 4 0 0 1 0 7.75"/>"#,
            ),
            Icon::Download => concat!(
                r#"<path d="M21 15v4a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2v-4"/>"#,
                r#"<polyline points="7 10 12 15 17 10"/>"#,
                r#"<line x1="12" x2="12" y1="15" y2="3"/>"#,
            ),
            Icon::Trophy => concat!(
                r#"<path d="M6 9H4.5a2.5 2.5 0 0 1 0-5H6"/>"#,
                r#"<path d="M18 9h1.5a2.5 2.5 0 0 0 0-5H18"/>"#,
                r#"<path d="M4 22h16"/>"#,
                r#"<path d="M10 14.66V17c0 .55-.47.98-.97 1.21C7.85 18.75 7 20.24 7 22"/>"#,
                r#"<path d="M14 14.66V17c0 .55.47.98.97 1.21C16.15 18.75 17 20.24 17 22"/>"#,
                r#"<path d="M18 2H6v7a6 6 0 0 0 12 0V2Z"/>"#,
            ),
            Icon::Zap => r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#,
            Icon::ChevronRight => r#"<path d="m9 18 6-6-6-6"/>"#,
        }
    }

    /// Render the glyph as an inline `<svg>` element.
    ///
    /// `class` is inserted verbatim; callers pass template literals only.
    pub fn svg(self, class: &str) -> String {
        format!(
            r#"<svg class="icon icon-{} {}" xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" aria-hidden="true">{}</svg>"#,
            self.name(),
            class,
            self.paths()
        )
    }

    /// Render the glyph in white on a rounded square, sized for a favicon.
    pub fn badge_svg(self, background: &str) -> String {
        format!(
            r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><rect width="32" height="32" rx="8" fill="{}"/><g transform="translate(4 4)" fill="none" stroke="#fff" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">{}</g></svg>"##,
            background,
            self.paths()
        )
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Icon {
    type Err = UnknownIcon;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .into_iter()
            .find(|icon| icon.name() == s)
            .ok_or_else(|| UnknownIcon(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_through_from_str() {
        for icon in Icon::ALL {
            assert_eq!(icon.name().parse::<Icon>(), Ok(icon));
        }
    }

    #[test]
    fn serializes_as_template_name() {
        let json = serde_json::to_string(&Icon::ChevronRight).unwrap();
        assert_eq!(json, "\"chevron-right\"");
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "rocket".parse::<Icon>(),
            Err(UnknownIcon("rocket".to_string()))
        );
    }

    #[test]
    fn badge_svg_is_standalone() {
        let svg = Icon::Gamepad.badge_svg("#f97316");
        assert!(svg.contains("xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.contains("fill=\"#f97316\""));
        assert!(svg.contains("stroke=\"#fff\" stroke-width=\"2\""));
        assert!(svg.ends_with("</g></svg>"));
    }

    #[test]
    fn svg_carries_class_and_is_decorative() {
        let svg = Icon::Zap.svg("tone-yellow");
        assert!(svg.starts_with("<svg class=\"icon icon-zap tone-yellow\""));
        assert!(svg.contains("aria-hidden=\"true\""));
        assert!(svg.ends_with("</svg>"));
    }
}
