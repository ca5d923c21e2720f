//! Scaffold a site project.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use snapplay_content::Icon;
use snapplay_static::builder::FAVICON_FILE;

use crate::config::DEFAULT_CONFIG;

const FAVICON_BACKGROUND: &str = "#f97316";

/// Run the init command.
///
/// The config file is written at `config_path`; `public/` is created next to it.
pub async fn run(config_path: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing SnapPlay site...");

    let root = match config_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create {}", root.display()))?;
    fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    tracing::info!("Created {}", config_path.display());

    let public_dir = root.join("public");
    fs::create_dir_all(&public_dir).context("Failed to create public directory")?;

    let favicon_path = public_dir.join(FAVICON_FILE);
    if !favicon_path.exists() || yes {
        fs::write(&favicon_path, Icon::Gamepad.badge_svg(FAVICON_BACKGROUND))
            .with_context(|| format!("Failed to write {}", favicon_path.display()))?;
        tracing::info!("Created {}", favicon_path.display());
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'snapplay dev' to start the development server.");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    #[tokio::test]
    async fn writes_config_and_favicon() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");

        run(&config_path, false).await.unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), DEFAULT_CONFIG);
        let favicon = fs::read_to_string(temp.path().join("public").join(FAVICON_FILE)).unwrap();
        assert!(favicon.starts_with("<svg"));
    }

    #[tokio::test]
    async fn keeps_existing_config_without_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, "[build]\nminify = false\n").unwrap();

        run(&config_path, false).await.unwrap();

        assert_eq!(
            fs::read_to_string(&config_path).unwrap(),
            "[build]\nminify = false\n"
        );
        assert!(!temp.path().join("public").exists());
    }

    #[tokio::test]
    async fn overwrites_with_yes() {
        let temp = tempdir().unwrap();
        let config_path = temp.path().join("site.toml");
        fs::write(&config_path, "[build]\nminify = false\n").unwrap();

        run(&config_path, true).await.unwrap();

        assert_eq!(fs::read_to_string(&config_path).unwrap(), DEFAULT_CONFIG);
        assert!(temp.path().join("public").join(FAVICON_FILE).exists());
    }
}
