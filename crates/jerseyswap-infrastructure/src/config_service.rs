//! Configuration loading.
//!
//! Reads `AppConfig` from a TOML file. A missing file yields the defaults; a
//! malformed one is an error so a typo does not silently reset settings.

use std::path::{Path, PathBuf};

use jerseyswap_core::config::AppConfig;
use jerseyswap_core::error::Result;

use crate::paths::JerseySwapPaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Uses `<config_dir>/jerseyswap/config.toml`.
    pub fn from_default_location() -> Result<Self> {
        Ok(Self::new(JerseySwapPaths::config_file()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<AppConfig> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => {
                let config = toml::from_str(&content)?;
                tracing::debug!("Loaded config from {}", self.path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("No config at {}, using defaults", self.path.display());
                Ok(AppConfig::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::new(temp_dir.path().join("config.toml"));
        assert_eq!(service.load().await.unwrap(), AppConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        tokio::fs::write(
            &path,
            "[storage]\ndir = \"/srv/jerseyswap\"\n\n[logging]\nlevel = \"debug\"\n",
        )
        .await
        .unwrap();

        let config = ConfigService::new(&path).load().await.unwrap();
        assert_eq!(config.storage.dir, Some(PathBuf::from("/srv/jerseyswap")));
        assert_eq!(config.logging.level, "debug");
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        tokio::fs::write(&path, "[studio\nswap_delay_ms = ").await.unwrap();

        let err = ConfigService::new(&path).load().await.unwrap_err();
        assert!(err.to_string().contains("TOML"));
    }
}
