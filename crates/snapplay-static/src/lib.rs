//! Static site generator for the SnapPlay marketing site.
//!
//! Renders the landing and privacy pages from the compiled-in content and
//! writes them, with their assets, to an output directory.

pub mod assets;
pub mod builder;
pub mod pages;
pub mod templates;

pub use builder::{BuildConfig, BuildError, BuildResult, SiteBuilder};
pub use pages::Page;
