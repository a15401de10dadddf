use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub storage: StorageConfig,
    #[serde(default)]
    pub camera: CameraConfig,
    #[serde(default)]
    pub gallery: GalleryConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// App-private directory that holds one file per photo.
    pub photos_dir: PathBuf,
    /// SQLite database file for the preference store.
    pub preferences_db: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CameraConfig {
    #[serde(default = "default_quality")]
    pub quality: u8,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            quality: default_quality(),
        }
    }
}

fn default_quality() -> u8 {
    100
}

#[derive(Debug, Deserialize, Clone)]
pub struct GalleryConfig {
    /// Preference key under which the serialized index is stored.
    #[serde(default = "default_storage_key")]
    pub storage_key: String,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
        }
    }
}

fn default_storage_key() -> String {
    "photos".to_string()
}

pub fn load_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    let config: Config = toml::from_str(&content).with_context(|| "Failed to parse config file")?;

    if config.camera.quality > 100 {
        anyhow::bail!("camera.quality must be in 0..=100");
    }

    if config.gallery.storage_key.is_empty() {
        anyhow::bail!("gallery.storage_key must not be empty");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(dir: &Path, body: &str) -> PathBuf {
        let path = dir.join("photokeep.toml");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r#"[storage]
photos_dir = "/tmp/photos"
preferences_db = "/tmp/prefs.sqlite"
"#,
        );
        let config = load_config(&path).unwrap();
        assert_eq!(config.camera.quality, 100);
        assert_eq!(config.gallery.storage_key, "photos");
    }

    #[test]
    fn test_quality_out_of_range_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r#"[storage]
photos_dir = "/tmp/photos"
preferences_db = "/tmp/prefs.sqlite"

[camera]
quality = 101
"#,
        );
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn test_empty_storage_key_rejected() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = write_config(
            tmp.path(),
            r#"[storage]
photos_dir = "/tmp/photos"
preferences_db = "/tmp/prefs.sqlite"

[gallery]
storage_key = ""
"#,
        );
        assert!(load_config(&path).is_err());
    }
}
