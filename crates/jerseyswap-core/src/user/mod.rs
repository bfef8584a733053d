//! User domain module.
//!
//! # Module Structure
//!
//! - `model`: profile and saved swap records
//! - `achievement`: milestone badges
//! - `onboarding`: profile creation defaults
//! - `guest`: single sign-on guest profiles
//! - `validation`: sign-up rules and identity uniqueness
//! - `vault`: bounded swap history mutation

mod achievement;
mod guest;
mod model;
mod onboarding;
mod validation;
pub mod vault;

pub use achievement::{Achievement, FIRST_DRAFT_ID, NEURAL_LINK_ID, Rarity};
pub use guest::AuthProvider;
pub use onboarding::OnboardingDetails;
pub use model::{ProfileStats, Role, SavedSwap, UserProfile};
pub use validation::{
    MIN_PASSWORD_LEN, SignUpRequest, ensure_unique_identity, is_blank_handle, is_valid_email,
    normalize_handle,
};
pub use vault::{VAULT_CAPACITY, VaultAnalytics, format_swap_date};
