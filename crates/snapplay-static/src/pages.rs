//! The pages of the site and where they live.

use std::path::PathBuf;

use snapplay_content::{PageMeta, LANDING_META, PRIVACY_META};

/// A renderable page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Landing,
    Privacy,
}

impl Page {
    /// Every page, in sitemap order.
    pub const ALL: [Page; 2] = [Page::Landing, Page::Privacy];

    /// Template used to render the page.
    pub fn template(self) -> &'static str {
        match self {
            Page::Landing => "landing.html",
            Page::Privacy => "privacy.html",
        }
    }

    /// Route relative to the site root, without the leading slash.
    pub fn route(self) -> &'static str {
        match self {
            Page::Landing => "",
            Page::Privacy => "privacy/",
        }
    }

    /// Output file relative to the output directory.
    pub fn output_path(self) -> PathBuf {
        PathBuf::from(self.route()).join("index.html")
    }

    pub fn meta(self) -> PageMeta {
        match self {
            Page::Landing => LANDING_META,
            Page::Privacy => PRIVACY_META,
        }
    }

    /// Resolve a request path to a page.
    ///
    /// Accepts the route with or without a trailing slash and with an
    /// explicit `index.html`.
    pub fn from_request_path(path: &str) -> Option<Page> {
        let trimmed = path
            .trim_start_matches('/')
            .trim_end_matches("index.html")
            .trim_end_matches('/');

        Page::ALL
            .into_iter()
            .find(|page| page.route().trim_end_matches('/') == trimmed)
    }
}
