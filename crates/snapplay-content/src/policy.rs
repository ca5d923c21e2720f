//! Privacy policy text.

use serde::Serialize;

use crate::links::{OutboundLink, SUPPORT_EMAIL, THIRD_PARTY_SERVICES};

/// Date shown under the policy.
pub const POLICY_LAST_UPDATED: &str = "February 16, 2026";

/// A piece of a policy section body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PolicyBlock {
    /// Rich text paragraph written in markdown
    Paragraph { markdown: &'static str },

    /// Plain bullet list
    List { items: &'static [&'static str] },

    /// Boxed list of third-party privacy policy links
    Services { links: &'static [OutboundLink] },

    /// Lead sentence followed by a highlighted address on its own line
    Contact {
        lead: &'static str,
        email: &'static str,
    },
}

/// One numbered section of the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PolicySection {
    pub heading: &'static str,
    pub body: &'static [PolicyBlock],
}

impl PolicySection {
    /// Links of every services block in this section.
    pub fn services(&self) -> impl Iterator<Item = &'static OutboundLink> + '_ {
        self.body.iter().flat_map(|block| match block {
            PolicyBlock::Services { links } => *links,
            _ => &[],
        })
    }
}

/// The policy, in display order.
pub const POLICY_SECTIONS: [PolicySection; 6] = [
    PolicySection {
        heading: "1. Introduction",
        body: &[PolicyBlock::Paragraph {
            markdown: "Sarankar Developers (\"we\", \"our\", or \"us\") is committed to protecting your privacy. \
This Privacy Policy applies to our mobile applications, including **SnapPlay**, **Amozea**, \
and any other apps published by us on the Google Play Store.\n\
By using our applications, you signify that you have read, understood, and agree to our collection, \
storage, use, and disclosure of your personal information as described in this Privacy Policy.",
        }],
    },
    PolicySection {
        heading: "2. Information Collection",
        body: &[
            PolicyBlock::Paragraph {
                markdown: "**Personal Information:** We do not collect any personally identifiable information (PII) \
such as your name, address, or phone number unless you explicitly provide it to us for support purposes.",
            },
            PolicyBlock::Paragraph {
                markdown: "**Device Information:** We may collect non-personal information about the device you use \
to access our apps, including device model, operating system version, and unique device identifiers \
(like Android Advertising ID). This is primarily used for ad delivery and analytics.",
            },
        ],
    },
    PolicySection {
        heading: "3. Use of Information",
        body: &[
            PolicyBlock::Paragraph {
                markdown: "We use the information we collect to:",
            },
            PolicyBlock::List {
                items: &[
                    "Provide and maintain our applications.",
                    "Show relevant advertisements via Google AdMob.",
                    "Analyze usage patterns to improve the user experience.",
                    "Communicate with you regarding support requests.",
                ],
            },
        ],
    },
    PolicySection {
        heading: "4. Third-Party Services",
        body: &[
            PolicyBlock::Paragraph {
                markdown: "Our apps use third-party services that may collect information used to identify you:",
            },
            PolicyBlock::Services {
                links: &THIRD_PARTY_SERVICES,
            },
        ],
    },
    PolicySection {
        heading: "5. Data Retention",
        body: &[PolicyBlock::Paragraph {
            markdown: "We do not store your personal data on our servers. Any app-specific progress, settings, \
or favorites (like saved wallpapers) are stored locally on your device.",
        }],
    },
    PolicySection {
        heading: "6. Contact Us",
        body: &[PolicyBlock::Contact {
            lead: "If you have any questions about this Privacy Policy, please contact us at:",
            email: SUPPORT_EMAIL,
        }],
    },
];

/// Links listed under the third-party services section.
pub fn third_party_services() -> Vec<&'static OutboundLink> {
    POLICY_SECTIONS.iter().flat_map(|s| s.services()).collect()
}
