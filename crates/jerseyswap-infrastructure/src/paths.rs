//! Platform paths for JerseySwap files.
//!
//! ```text
//! ~/.config/jerseyswap/           # Config directory
//! └── config.toml
//!
//! ~/.local/share/jerseyswap/      # Data directory
//! └── store/                      # FileStore keys
//! ```

use std::path::PathBuf;

use jerseyswap_core::config::AppConfig;
use jerseyswap_core::error::{Result, SwapError};

const APP_DIR: &str = "jerseyswap";

pub struct JerseySwapPaths;

impl JerseySwapPaths {
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SwapError::config("Cannot find config directory"))
    }

    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| SwapError::config("Cannot find data directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    pub fn default_store_dir() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join("store"))
    }

    /// Store directory from config, falling back to the platform default.
    pub fn store_dir(config: &AppConfig) -> Result<PathBuf> {
        match &config.storage.dir {
            Some(dir) => Ok(dir.clone()),
            None => Self::default_store_dir(),
        }
    }
}
