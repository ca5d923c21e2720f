//! Static site builder.

use std::fs;
use std::path::PathBuf;
use std::sync::OnceLock;
use std::time::Instant;

use rayon::prelude::*;
use regex::Regex;
use walkdir::WalkDir;

use snapplay_content::meta::structured_data;

use crate::assets::AssetPipeline;
use crate::pages::Page;
use crate::templates::{Context, TemplateEngine};

/// Favicon expected at the root of the public directory.
pub const FAVICON_FILE: &str = "favicon.svg";

/// Configuration for building the site.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Output directory
    pub output_dir: PathBuf,

    /// Directory copied verbatim into the output (favicons, images)
    pub public_dir: Option<PathBuf>,

    /// Minify HTML and CSS output
    pub minify: bool,

    /// Path prefix for generated assets
    pub base_url: String,

    /// Absolute origin the site is deployed at, used for canonical URLs and the sitemap
    pub site_url: Option<String>,

    /// Extra script URLs appended to every page
    pub scripts: Vec<String>,
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("dist"),
            public_dir: None,
            minify: true,
            base_url: "/".to_string(),
            site_url: None,
            scripts: vec![],
        }
    }
}

/// Result of a build operation.
#[derive(Debug)]
pub struct BuildResult {
    /// Number of pages generated
    pub pages: usize,

    /// Number of asset files written, including copied public files
    pub assets: usize,

    /// Total build time in milliseconds
    pub duration_ms: u64,

    /// Output directory
    pub output_dir: PathBuf,
}

/// Errors that can occur during build.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("Failed to read {0}")]
    ReadError(String),

    #[error("Failed to render template: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Static site builder.
pub struct SiteBuilder {
    config: BuildConfig,
    templates: TemplateEngine,
}

impl SiteBuilder {
    /// Create a new site builder.
    pub fn new(config: BuildConfig) -> Self {
        Self {
            config,
            templates: TemplateEngine::new(),
        }
    }

    pub fn config(&self) -> &BuildConfig {
        &self.config
    }

    /// Build the site into the output directory.
    pub async fn build(&self) -> Result<BuildResult, BuildError> {
        let start = Instant::now();

        fs::create_dir_all(&self.config.output_dir)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        // Public files first so generated output wins on a name clash
        let mut assets = self.copy_public_dir()?;

        let results: Vec<Result<(), BuildError>> = Page::ALL
            .par_iter()
            .map(|page| self.write_page(*page))
            .collect();

        for result in results {
            result?;
        }

        assets += self.generate_assets()?;

        self.generate_sitemap()?;

        let duration = start.elapsed();

        Ok(BuildResult {
            pages: Page::ALL.len(),
            assets,
            duration_ms: duration.as_millis() as u64,
            output_dir: self.config.output_dir.clone(),
        })
    }

    /// Render a page to HTML without touching the filesystem.
    pub fn render_page(&self, page: Page) -> Result<String, BuildError> {
        let site_url = self.site_url();

        let structured = match page {
            Page::Landing => Some(
                serde_json::to_string(&structured_data(site_url))
                    .map_err(|e| BuildError::TemplateError(e.to_string()))?,
            ),
            Page::Privacy => None,
        };

        let context = Context {
            meta: page.meta(),
            stylesheet: self.asset_url(AssetPipeline::CSS_FILE),
            script: self.asset_url(AssetPipeline::JS_FILE),
            favicon: format!("{}{}", self.config.base_url, FAVICON_FILE),
            scripts: self.config.scripts.clone(),
            canonical: site_url.map(|origin| self.page_url(origin, page)),
            structured_data: structured,
        };

        let html = self
            .templates
            .render_page(page, &context)
            .map_err(|e| BuildError::TemplateError(e.to_string()))?;

        Ok(if self.config.minify {
            minify_html(&html)
        } else {
            html
        })
    }

    /// Render the site stylesheet, minified when configured.
    pub fn render_css(&self) -> String {
        let css = AssetPipeline::generate_css();
        if !self.config.minify {
            return css;
        }

        match AssetPipeline::minify_css(&css) {
            Ok(minified) => minified,
            Err(e) => {
                tracing::warn!("Serving unminified CSS: {}", e);
                css
            }
        }
    }

    /// Deployment origin without a trailing slash.
    fn site_url(&self) -> Option<&str> {
        self.config
            .site_url
            .as_deref()
            .map(|url| url.trim_end_matches('/'))
            .filter(|url| !url.is_empty())
    }

    /// Public location of a page under the base URL; `origin` may be empty.
    fn page_url(&self, origin: &str, page: Page) -> String {
        format!("{}{}{}", origin, self.config.base_url, page.route())
    }

    fn asset_url(&self, file: &str) -> String {
        format!("{}assets/{}", self.config.base_url, file)
    }

    fn write_page(&self, page: Page) -> Result<(), BuildError> {
        let html = self.render_page(page)?;
        let output_path = self.config.output_dir.join(page.output_path());

        if let Some(parent) = output_path.parent() {
            fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
        }

        fs::write(&output_path, html).map_err(|e| BuildError::WriteError(e.to_string()))?;

        tracing::debug!("Wrote {}", output_path.display());

        Ok(())
    }

    /// Generate static assets. Returns the number of files written.
    fn generate_assets(&self) -> Result<usize, BuildError> {
        let assets_dir = self.config.output_dir.join("assets");
        fs::create_dir_all(&assets_dir).map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(assets_dir.join(AssetPipeline::CSS_FILE), self.render_css())
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        fs::write(
            assets_dir.join(AssetPipeline::JS_FILE),
            AssetPipeline::generate_js(),
        )
        .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(2)
    }

    /// Copy the public directory into the output. Returns the number of files copied.
    fn copy_public_dir(&self) -> Result<usize, BuildError> {
        let Some(public_dir) = &self.config.public_dir else {
            return Ok(0);
        };

        if !public_dir.exists() {
            tracing::debug!("No public directory at {}", public_dir.display());
            return Ok(0);
        }

        let mut count = 0;

        for entry in WalkDir::new(public_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            let relative = path.strip_prefix(public_dir).unwrap_or(path);
            let target = self.config.output_dir.join(relative);

            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|e| BuildError::WriteError(e.to_string()))?;
            }

            fs::copy(path, &target)
                .map_err(|e| BuildError::ReadError(format!("{}: {}", path.display(), e)))?;
            count += 1;
        }

        tracing::info!("Copied {} files from {}", count, public_dir.display());

        Ok(count)
    }

    /// Generate sitemap and robots.txt.
    fn generate_sitemap(&self) -> Result<(), BuildError> {
        let origin = self.site_url().unwrap_or("");
        if origin.is_empty() {
            tracing::debug!("No site url configured, sitemap uses relative locations");
        }

        let urls: Vec<String> = Page::ALL
            .iter()
            .map(|page| {
                format!(
                    "  <url>\n    <loc>{}</loc>\n  </url>",
                    self.page_url(origin, *page)
                )
            })
            .collect();

        let sitemap = format!(
            r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
{}
</urlset>"#,
            urls.join("\n")
        );

        fs::write(self.config.output_dir.join("sitemap.xml"), sitemap)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        let robots = format!(
            "User-agent: *\nAllow: /\nSitemap: {}{}sitemap.xml\n",
            origin, self.config.base_url
        );
        fs::write(self.config.output_dir.join("robots.txt"), robots)
            .map_err(|e| BuildError::WriteError(e.to_string()))?;

        Ok(())
    }
}

/// Collapse the line breaks and indentation templates leave between tags.
fn minify_html(html: &str) -> String {
    static BETWEEN_TAGS: OnceLock<Regex> = OnceLock::new();

    let re = BETWEEN_TAGS.get_or_init(|| Regex::new(r">\s*\n\s*<").expect("valid regex"));

    re.replace_all(html.trim(), "><").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn builder(minify: bool) -> SiteBuilder {
        SiteBuilder::new(BuildConfig {
            minify,
            ..Default::default()
        })
    }

    #[tokio::test]
    async fn builds_site() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let result = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        assert_eq!(result.pages, 2);
        assert_eq!(result.assets, 2);
        assert!(out.join("index.html").exists());
        assert!(out.join("privacy").join("index.html").exists());
        assert!(out.join("assets").join("site.css").exists());
        assert!(out.join("assets").join("site.js").exists());
        assert!(out.join("robots.txt").exists());
    }

    #[tokio::test]
    async fn copies_public_files() {
        let temp = tempdir().unwrap();
        let public = temp.path().join("public");
        let out = temp.path().join("dist");

        fs::create_dir_all(public.join("images")).unwrap();
        fs::write(public.join("favicon.ico"), b"ico").unwrap();
        fs::write(public.join("images").join("phone.png"), b"png").unwrap();

        let result = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            public_dir: Some(public),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        assert_eq!(result.assets, 4);
        assert_eq!(fs::read(out.join("favicon.ico")).unwrap(), b"ico");
        assert!(out.join("images").join("phone.png").exists());
    }

    #[tokio::test]
    async fn sitemap_uses_site_url() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            site_url: Some("https://snapplay.example/".to_string()),
            ..Default::default()
        })
        .build()
        .await
        .unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        assert!(sitemap.contains("<loc>https://snapplay.example/</loc>"));
        assert!(sitemap.contains("<loc>https://snapplay.example/privacy/</loc>"));

        let robots = fs::read_to_string(out.join("robots.txt")).unwrap();
        assert!(robots.contains("Sitemap: https://snapplay.example/sitemap.xml"));
    }

    #[test]
    fn renders_are_byte_identical() {
        let builder = builder(true);

        for page in Page::ALL {
            let first = builder.render_page(page).unwrap();
            let second = builder.render_page(page).unwrap();
            assert_eq!(first, second);
        }

        let other = SiteBuilder::new(BuildConfig::default());
        assert_eq!(
            builder.render_page(Page::Landing).unwrap(),
            other.render_page(Page::Landing).unwrap()
        );
    }

    #[test]
    fn every_page_renders_without_error() {
        for minify in [true, false] {
            let builder = builder(minify);
            for page in Page::ALL {
                assert!(builder.render_page(page).is_ok(), "{:?} failed", page);
            }
        }
    }

    #[test]
    fn outbound_links_match_literal_urls() {
        let landing = builder(false).render_page(Page::Landing).unwrap();

        for href in [
            "https://play.google.com/store/apps/details?id=com.snapplay.offline.games",
            "https://sarankar.com",
            "mailto:support@sarankar.com",
            "/privacy",
            "#features",
        ] {
            assert!(
                landing.contains(&format!("href=\"{}\"", href)),
                "missing {}",
                href
            );
        }

        let privacy = builder(false).render_page(Page::Privacy).unwrap();
        assert!(privacy.contains("href=\"https://policies.google.com/privacy\""));
    }

    #[test]
    fn minified_html_drops_indentation() {
        let html = builder(true).render_page(Page::Landing).unwrap();

        assert!(html.starts_with("<!DOCTYPE html><html lang=\"en\"><head>"));
        assert!(!html.contains(">\n"));
        assert!(html.contains("Your Ultimate <span class=\"hero-accent\">Offline Game</span> Collection"));
    }

    #[test]
    fn canonical_and_structured_data() {
        let builder = SiteBuilder::new(BuildConfig {
            site_url: Some("https://snapplay.example".to_string()),
            ..Default::default()
        });

        let landing = builder.render_page(Page::Landing).unwrap();
        assert!(landing.contains("<link rel=\"canonical\" href=\"https://snapplay.example/\">"));
        assert!(landing.contains("application/ld+json"));
        assert!(landing.contains("\"@type\":\"SoftwareApplication\""));

        let privacy = builder.render_page(Page::Privacy).unwrap();
        assert!(privacy.contains("href=\"https://snapplay.example/privacy/\""));
        assert!(!privacy.contains("application/ld+json"));
    }

    #[tokio::test]
    async fn canonical_matches_sitemap_under_base_url() {
        let temp = tempdir().unwrap();
        let out = temp.path().join("dist");

        let builder = SiteBuilder::new(BuildConfig {
            output_dir: out.clone(),
            minify: false,
            base_url: "/snapplay/".to_string(),
            site_url: Some("https://snapplay.example".to_string()),
            ..Default::default()
        });
        builder.build().await.unwrap();

        let sitemap = fs::read_to_string(out.join("sitemap.xml")).unwrap();
        let privacy = fs::read_to_string(out.join("privacy").join("index.html")).unwrap();

        assert!(sitemap.contains("<loc>https://snapplay.example/snapplay/privacy/</loc>"));
        assert!(privacy.contains(
            "<link rel=\"canonical\" href=\"https://snapplay.example/snapplay/privacy/\">"
        ));
        assert!(privacy.contains("href=\"/snapplay/assets/site.css\""));
    }

    #[test]
    fn empty_site_url_is_ignored() {
        let builder = SiteBuilder::new(BuildConfig {
            site_url: Some(String::new()),
            ..Default::default()
        });

        let html = builder.render_page(Page::Landing).unwrap();
        assert!(!html.contains("rel=\"canonical\""));
    }

    #[test]
    fn minify_collapses_only_between_tags() {
        assert_eq!(
            minify_html("<ul>\n  <li>a b</li>\n  <li>c</li>\n</ul>\n"),
            "<ul><li>a b</li><li>c</li></ul>"
        );
        assert_eq!(minify_html("<p>one\ntwo</p>"), "<p>one\ntwo</p>");
    }
}
