//! Static content for the SnapPlay marketing site.
//!
//! Every record in this crate is compiled into the binary and identical on
//! every render: the landing page feature cards, the privacy policy sections,
//! the outbound links both pages point at, and the page metadata.

pub mod features;
pub mod hero;
pub mod icons;
pub mod links;
pub mod markdown;
pub mod meta;
pub mod policy;

pub use features::{FeatureCard, Tone, FEATURES};
pub use icons::{Icon, UnknownIcon};
pub use links::OutboundLink;
pub use markdown::render_markdown;
pub use meta::{structured_data, PageMeta, COPYRIGHT, LANDING_META, PRIVACY_META, SITE_NAME};
pub use policy::{
    third_party_services, PolicyBlock, PolicySection, POLICY_LAST_UPDATED, POLICY_SECTIONS,
};
