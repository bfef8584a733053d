//! Profile collection and session pointer persistence.
//!
//! The whole collection is one JSON array; every save overwrites it. Reads
//! never fail: a missing or corrupted value is logged and treated as empty.

use std::sync::Arc;

use jerseyswap_core::error::Result;
use jerseyswap_core::storage::{KeyValueStore, PROFILES_KEY, SESSION_KEY};
use jerseyswap_core::user::UserProfile;

#[derive(Clone)]
pub struct ProfileStore {
    store: Arc<dyn KeyValueStore>,
}

impl ProfileStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads every stored profile. Corruption yields an empty list.
    pub async fn load_profiles(&self) -> Vec<UserProfile> {
        let raw = match self.store.get(PROFILES_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read profile collection, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<UserProfile>>(&raw) {
            Ok(profiles) => profiles,
            Err(e) => {
                tracing::warn!("Identity database corrupted, ignoring stored profiles: {}", e);
                Vec::new()
            }
        }
    }

    /// Overwrites the stored collection.
    pub async fn save_profiles(&self, profiles: &[UserProfile]) -> Result<()> {
        let json = serde_json::to_string(profiles)?;
        self.store.set(PROFILES_KEY, &json).await
    }

    /// Returns the stored active profile id, if any.
    pub async fn load_session(&self) -> Option<String> {
        match self.store.get(SESSION_KEY).await {
            Ok(value) => value
                .map(|id| id.trim().to_string())
                .filter(|id| !id.is_empty()),
            Err(e) => {
                tracing::warn!("Failed to read session pointer: {}", e);
                None
            }
        }
    }

    pub async fn save_session(&self, profile_id: &str) -> Result<()> {
        self.store.set(SESSION_KEY, profile_id).await
    }

    pub async fn clear_session(&self) -> Result<()> {
        self.store.remove(SESSION_KEY).await
    }
}
