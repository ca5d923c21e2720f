//! Site configuration file (site.toml).

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ConfigFile {
    pub site: SiteSection,
    pub build: BuildSettings,
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteSection {
    /// Absolute origin the site is deployed at; empty when unknown
    pub url: String,
    /// Path prefix for generated assets
    pub base_url: String,
    /// Output directory for built site
    pub output: String,
    /// Directory copied verbatim into the output
    pub public: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            url: String::new(),
            base_url: "/".to_string(),
            output: "dist".to_string(),
            public: "public".to_string(),
        }
    }
}

#[derive(Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct BuildSettings {
    pub minify: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self { minify: true }
    }
}

impl ConfigFile {
    /// Deployment origin, if one is configured.
    pub fn site_url(&self) -> Option<String> {
        let url = self.site.url.trim();
        (!url.is_empty()).then(|| url.to_string())
    }

    /// Base URL normalised to start and end with a slash.
    pub fn base_url(&self) -> String {
        let trimmed = self.site.base_url.trim_matches('/');
        if trimmed.is_empty() {
            "/".to_string()
        } else {
            format!("/{}/", trimmed)
        }
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.site.output)
    }

    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.site.public)
    }
}

/// Load configuration if the file exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(path: &Path) -> Result<ConfigFile> {
    if !path.exists() {
        tracing::debug!("No {} found, using defaults", path.display());
        return Ok(ConfigFile::default());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let config: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::info!("Loaded config from {}", path.display());

    Ok(config)
}

/// Default contents written by `snapplay init`.
pub const DEFAULT_CONFIG: &str = r#"# SnapPlay site configuration

[site]
# Absolute origin the site is deployed at, used for canonical links
# and the sitemap. Leave empty to emit relative locations.
url = ""

# Path prefix for generated assets
base_url = "/"

# Output directory for the built site
output = "dist"

# Files copied verbatim into the output (favicons, images)
public = "public"

[build]
# Minify HTML and CSS
minify = true
"#;
