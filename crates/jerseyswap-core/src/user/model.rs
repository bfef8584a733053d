//! Profile domain model.
//!
//! Field names serialize as camelCase so that a profile collection written by
//! the browser client can be read back unchanged.

use serde::{Deserialize, Serialize};

use super::achievement::Achievement;

/// What the user does on the platform.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Role {
    #[serde(rename = "Athlete")]
    #[strum(to_string = "Athlete")]
    Athlete,
    #[default]
    #[serde(rename = "Pro Designer")]
    #[strum(to_string = "Pro Designer", serialize = "pro-designer")]
    ProDesigner,
    #[serde(rename = "Scout")]
    #[strum(to_string = "Scout")]
    Scout,
}

/// Attribute triple shown on the profile card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub precision: u32,
    pub sync: u32,
    pub speed: u32,
}

impl Default for ProfileStats {
    fn default() -> Self {
        Self {
            precision: 85,
            sync: 90,
            speed: 75,
        }
    }
}

/// One completed swap kept in a profile's vault.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedSwap {
    pub id: String,
    /// Team display name
    pub team: String,
    /// League display name
    pub league: String,
    /// Creation date formatted as `dd.mm.yy`
    pub date: String,
    /// Result image (data URL or remote URL)
    pub image: String,
    pub season: String,
}

/// A locally stored user profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Plaintext password. Demo-grade local storage only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Always starts with `@`
    pub handle: String,
    #[serde(default)]
    pub role: Role,
    #[serde(default)]
    pub league_preference: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    #[serde(default)]
    pub stats: ProfileStats,
    #[serde(default)]
    pub ovr: u32,
    /// Newest first, at most [`super::VAULT_CAPACITY`] entries
    #[serde(default)]
    pub vault: Vec<SavedSwap>,
    #[serde(default)]
    pub achievements: Vec<Achievement>,
}

impl UserProfile {
    /// Returns true when `identifier` names this profile by handle (with or
    /// without its `@`) or email, ignoring ASCII case.
    pub fn matches_identifier(&self, identifier: &str) -> bool {
        let input = identifier.trim().to_lowercase();
        if input.is_empty() {
            return false;
        }
        let handle = self.handle.to_lowercase();
        handle == input || handle == format!("@{}", input) || self.email.to_lowercase() == input
    }

    pub fn password_matches(&self, password: &str) -> bool {
        self.password.as_deref() == Some(password)
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.achievements.iter().any(|a| a.id == id)
    }
}
