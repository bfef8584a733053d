//! Application configuration model.
//!
//! Every field has a default so an empty or partial `config.toml` is valid.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageSettings,
    pub studio: StudioSettings,
    pub session: SessionSettings,
    pub logging: LoggingSettings,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StorageSettings {
    /// Directory of the file-backed store. Platform data dir when unset.
    pub dir: Option<PathBuf>,
}

/// Simulated latency of the mock studio, in milliseconds.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct StudioSettings {
    pub prepare_delay_ms: u64,
    pub swap_delay_ms: u64,
    pub stats_delay_ms: u64,
    pub synthesis_delay_ms: u64,
}

impl Default for StudioSettings {
    fn default() -> Self {
        Self {
            prepare_delay_ms: 1500,
            swap_delay_ms: 3000,
            stats_delay_ms: 0,
            synthesis_delay_ms: 2000,
        }
    }
}

impl StudioSettings {
    /// No simulated latency at all.
    pub fn instant() -> Self {
        Self {
            prepare_delay_ms: 0,
            swap_delay_ms: 0,
            stats_delay_ms: 0,
            synthesis_delay_ms: 0,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SessionSettings {
    /// Lets the on-device profile picker activate a profile without its
    /// password.
    pub allow_passwordless_picker: bool,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingSettings {
    /// `tracing` filter directive used when `RUST_LOG` is not set
    pub level: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.studio.swap_delay_ms, 3000);
        assert!(!config.session.allow_passwordless_picker);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_partial_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [studio]
            swap_delay_ms = 10

            [session]
            allow_passwordless_picker = true
            "#,
        )
        .unwrap();
        assert_eq!(config.studio.swap_delay_ms, 10);
        assert_eq!(config.studio.prepare_delay_ms, 1500);
        assert!(config.session.allow_passwordless_picker);
        assert!(config.storage.dir.is_none());
    }
}
