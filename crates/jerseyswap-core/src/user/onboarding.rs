//! Profile creation from sign-up credentials plus onboarding answers.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::achievement::Achievement;
use super::model::{ProfileStats, Role, UserProfile};
use super::validation::{SignUpRequest, normalize_handle};
use super::vault::format_swap_date;

pub const DEFAULT_LEAGUE_PREFERENCE: &str = "Elite";
pub const DEFAULT_BIO: &str = "Neural link established.";
pub const DEFAULT_OVR: u32 = 85;

/// Answers collected by the onboarding screens. Everything is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OnboardingDetails {
    pub role: Option<Role>,
    pub league_preference: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
    pub stats: Option<ProfileStats>,
    pub ovr: Option<u32>,
}

impl UserProfile {
    /// Builds a fresh profile with an empty vault and the sign-up badge.
    pub fn from_onboarding(
        id: impl Into<String>,
        request: &SignUpRequest,
        details: OnboardingDetails,
        today: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: request.name.trim().to_string(),
            email: request.email.trim().to_string(),
            password: Some(request.password.clone()),
            handle: normalize_handle(&request.handle),
            role: details.role.unwrap_or_default(),
            league_preference: details
                .league_preference
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_LEAGUE_PREFERENCE.to_string()),
            bio: details
                .bio
                .filter(|s| !s.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BIO.to_string()),
            avatar: details.avatar,
            stats: details.stats.unwrap_or_default(),
            ovr: details.ovr.filter(|ovr| *ovr > 0).unwrap_or(DEFAULT_OVR),
            vault: Vec::new(),
            achievements: vec![Achievement::neural_link(format_swap_date(today))],
        }
    }
}
