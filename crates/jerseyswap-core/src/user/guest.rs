//! Guest profiles created by single sign-on.

use serde::{Deserialize, Serialize};

use super::model::{ProfileStats, Role, UserProfile};

pub const GUEST_LEAGUE_PREFERENCE: &str = "Global Elite";
pub const GUEST_OVR: u32 = 80;

/// External identity provider offered on the auth screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum AuthProvider {
    Google,
    Discord,
}

impl AuthProvider {
    /// Capitalized provider name, e.g. `Google`.
    pub fn label(self) -> &'static str {
        match self {
            AuthProvider::Google => "Google",
            AuthProvider::Discord => "Discord",
        }
    }

    /// Shared email of this provider's guest profile.
    pub fn guest_email(self) -> String {
        format!("{}@sso.io", self)
    }

    /// Guest handle with the given ordinal, e.g. `@google_pioneer_3`.
    pub fn guest_handle(self, ordinal: u32) -> String {
        format!("@{}_pioneer_{}", self, ordinal)
    }
}

impl UserProfile {
    /// Builds a passwordless guest profile for `provider`.
    pub fn sso_guest(id: impl Into<String>, provider: AuthProvider, handle: String) -> Self {
        Self {
            id: id.into(),
            name: format!("{} Explorer", provider.label()),
            email: provider.guest_email(),
            password: None,
            handle,
            role: Role::ProDesigner,
            league_preference: GUEST_LEAGUE_PREFERENCE.to_string(),
            bio: format!("Authenticated via {} neural gateway.", provider),
            avatar: None,
            stats: ProfileStats {
                precision: GUEST_OVR,
                sync: GUEST_OVR,
                speed: GUEST_OVR,
            },
            ovr: GUEST_OVR,
            vault: Vec::new(),
            achievements: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_names() {
        assert_eq!(AuthProvider::Discord.to_string(), "discord");
        assert_eq!("Google".parse::<AuthProvider>().unwrap(), AuthProvider::Google);
        assert_eq!(AuthProvider::Google.guest_email(), "google@sso.io");
        assert_eq!(AuthProvider::Discord.guest_handle(7), "@discord_pioneer_7");
    }

    #[test]
    fn test_guest_profile() {
        let profile =
            UserProfile::sso_guest("sso_1", AuthProvider::Discord, "@discord_pioneer_1".into());
        assert_eq!(profile.name, "Discord Explorer");
        assert_eq!(profile.bio, "Authenticated via discord neural gateway.");
        assert_eq!(profile.stats, ProfileStats { precision: 80, sync: 80, speed: 80 });
        assert_eq!(profile.ovr, 80);
        assert!(profile.password.is_none());
        assert!(profile.vault.is_empty());
    }
}
