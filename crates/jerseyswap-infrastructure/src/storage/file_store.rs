//! File-backed key-value store.
//!
//! Each key is one file inside the store directory:
//!
//! ```text
//! <store_dir>/
//! ├── js_pro_accounts_v2   # JSON array of profiles
//! └── js_pro_session_v2    # active profile id
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use jerseyswap_core::error::{Result, SwapError};
use jerseyswap_core::storage::KeyValueStore;
use tokio::sync::Mutex;

use super::atomic_file::AtomicFile;

#[derive(Clone)]
pub struct FileStore {
    dir: PathBuf,
    /// Serializes file access within this process; the lock file covers
    /// other processes.
    guard: Arc<Mutex<()>>,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            guard: Arc::new(Mutex::new(())),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> Result<AtomicFile> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SwapError::config(format!("Invalid storage key '{}'", key)));
        }
        Ok(AtomicFile::new(self.dir.join(key)))
    }

    async fn run_blocking<T, F>(&self, f: F) -> Result<T>
    where
        T: Send + 'static,
        F: FnOnce() -> Result<T> + Send + 'static,
    {
        let _guard = self.guard.lock().await;
        tokio::task::spawn_blocking(f)
            .await
            .map_err(|e| SwapError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let file = self.file_for(key)?;
        self.run_blocking(move || file.read()).await
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let file = self.file_for(key)?;
        let value = value.to_string();
        tracing::debug!("Writing key '{}' ({} bytes)", key, value.len());
        self.run_blocking(move || file.write(&value)).await
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let file = self.file_for(key)?;
        self.run_blocking(move || file.delete()).await
    }
}
