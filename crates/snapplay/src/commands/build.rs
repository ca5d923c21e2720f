//! Static site build command.

use std::path::{Path, PathBuf};

use anyhow::Result;
use snapplay_static::{BuildConfig, SiteBuilder};

use crate::config::{load_config, ConfigFile};

/// Merge the config file with command-line overrides.
fn build_config(file: &ConfigFile, output: Option<PathBuf>, minify: Option<bool>) -> BuildConfig {
    BuildConfig {
        output_dir: output.unwrap_or_else(|| file.output_dir()),
        public_dir: Some(file.public_dir()),
        minify: minify.unwrap_or(file.build.minify),
        base_url: file.base_url(),
        site_url: file.site_url(),
        scripts: vec![],
    }
}

/// Run the build command.
pub async fn run(config_path: &Path, output: Option<PathBuf>, minify: Option<bool>) -> Result<()> {
    tracing::info!("Building static site...");

    let file_config = load_config(config_path)?;
    let config = build_config(&file_config, output, minify);

    let result = SiteBuilder::new(config).build().await?;

    tracing::info!(
        "Built {} pages and {} assets in {}ms",
        result.pages,
        result.assets,
        result.duration_ms
    );

    tracing::info!("Output: {}", result.output_dir.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn flags_override_file_values() {
        let file = ConfigFile::default();

        let config = build_config(&file, Some(PathBuf::from("out")), Some(false));

        assert_eq!(config.output_dir, PathBuf::from("out"));
        assert!(!config.minify);
        assert_eq!(config.public_dir, Some(PathBuf::from("public")));
        assert_eq!(config.base_url, "/");
    }

    #[test]
    fn file_values_apply_without_flags() {
        let mut file = ConfigFile::default();
        file.site.url = "https://snapplay.example".to_string();
        file.build.minify = false;

        let config = build_config(&file, None, None);

        assert_eq!(config.output_dir, PathBuf::from("dist"));
        assert!(!config.minify);
        assert_eq!(config.site_url.as_deref(), Some("https://snapplay.example"));
    }

    #[tokio::test]
    async fn builds_from_config_file() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        let out = temp.path().join("site-out");
        let config = format!(
            "[site]\npublic = {:?}\n\n[build]\nminify = false\n",
            temp.path().join("public").display().to_string()
        );
        std::fs::write(&config_path, config).unwrap();

        run(&config_path, Some(out.clone()), None).await.unwrap();

        let html = std::fs::read_to_string(out.join("index.html")).unwrap();
        assert!(html.contains("<title>SnapPlay | Offline Multiplayer Game Collection</title>"));
        assert!(out.join("privacy").join("index.html").exists());
    }
}
