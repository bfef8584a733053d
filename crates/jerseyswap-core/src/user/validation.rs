//! Sign-up validation and identity uniqueness rules.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::model::UserProfile;
use crate::error::ValidationError;

pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Basic `local@domain.tld` shape check.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Returns the handle with a single leading `@`.
pub fn normalize_handle(handle: &str) -> String {
    let trimmed = handle.trim();
    if trimmed.starts_with('@') {
        trimmed.to_string()
    } else {
        format!("@{}", trimmed)
    }
}

/// True when nothing but whitespace and `@` was entered.
pub fn is_blank_handle(handle: &str) -> bool {
    handle.trim().trim_start_matches('@').trim().is_empty()
}

/// Credentials collected on the sign-up form, before onboarding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub handle: String,
    pub password: String,
}

impl SignUpRequest {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        handle: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            handle: handle.into(),
            password: password.into(),
        }
    }

    /// Checks field presence and format. Reports the first failing field in
    /// form order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.email.trim().is_empty() {
            return Err(ValidationError::EmailRequired);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::InvalidEmail);
        }
        if is_blank_handle(&self.handle) {
            return Err(ValidationError::HandleRequired);
        }
        if self.password.is_empty() {
            return Err(ValidationError::PasswordRequired);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort {
                min: MIN_PASSWORD_LEN,
            });
        }
        Ok(())
    }
}

/// Rejects an email or handle already used by another profile.
///
/// `exclude_id` skips the profile being edited. Emails compare
/// case-insensitively; handles compare after `@` normalization.
pub fn ensure_unique_identity(
    profiles: &[UserProfile],
    email: &str,
    handle: &str,
    exclude_id: Option<&str>,
) -> Result<(), ValidationError> {
    let email = email.trim().to_lowercase();
    let handle = normalize_handle(handle).to_lowercase();
    let others = || profiles.iter().filter(|p| Some(p.id.as_str()) != exclude_id);

    if others().any(|p| p.email.to_lowercase() == email) {
        return Err(ValidationError::EmailTaken);
    }
    if others().any(|p| normalize_handle(&p.handle).to_lowercase() == handle) {
        return Err(ValidationError::HandleTaken);
    }
    Ok(())
}
