//! Key-value storage port.
//!
//! Persistence is a flat string-to-string store. The profile collection is
//! one JSON document under [`PROFILES_KEY`]; the active profile id lives under
//! [`SESSION_KEY`].

use async_trait::async_trait;

use crate::error::Result;

/// Key holding the JSON array of all profiles.
pub const PROFILES_KEY: &str = "js_pro_accounts_v2";

/// Key holding the id of the active profile.
pub const SESSION_KEY: &str = "js_pro_session_v2";

/// Repository for string values addressed by key.
///
/// Implementations must overwrite on `set` and treat `remove` of a missing
/// key as success.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    async fn remove(&self, key: &str) -> Result<()>;
}
