use std::sync::Arc;

use chrono::NaiveDate;
use jerseyswap_core::config::SessionSettings;
use jerseyswap_core::error::{Result, SwapError, ValidationError};
use jerseyswap_core::storage::KeyValueStore;
use jerseyswap_core::user::{
    AuthProvider, OnboardingDetails, SavedSwap, SignUpRequest, UserProfile,
    ensure_unique_identity, is_blank_handle, is_valid_email, normalize_handle, vault,
};
use jerseyswap_core::workflow::Step;
use jerseyswap_infrastructure::ProfileStore;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials. Please try again.";

/// Returns today's local date.
pub type Clock = fn() -> NaiveDate;

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Owns the profile collection and the active session.
///
/// `SessionService` is responsible for:
/// - Restoring the active profile at startup
/// - Sign-up (validated, then finalized after onboarding)
/// - Sign-in / sign-out and the on-device profile picker
/// - Keeping handles and emails unique across every write path
/// - Persisting the full collection after each mutation
///
/// All mutation goes through `&mut self`; the owner serializes access.
pub struct SessionService {
    store: ProfileStore,
    settings: SessionSettings,
    clock: Clock,
    profiles: Vec<UserProfile>,
    active_id: Option<String>,
    pending_sign_up: Option<SignUpRequest>,
}

impl SessionService {
    /// Creates a service over `store`. Call [`Self::bootstrap`] before use.
    pub fn new(store: Arc<dyn KeyValueStore>, settings: SessionSettings) -> Self {
        Self {
            store: ProfileStore::new(store),
            settings,
            clock: local_today,
            profiles: Vec::new(),
            active_id: None,
            pending_sign_up: None,
        }
    }

    /// Replaces the date source used for swap and achievement dates.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }

    /// Loads the stored collection and restores the session pointer.
    ///
    /// Returns the step the workflow should start at. Never fails: storage
    /// problems are logged and treated as "no saved data".
    pub async fn bootstrap(&mut self) -> Step {
        self.profiles = self.store.load_profiles().await;
        self.pending_sign_up = None;
        self.active_id = match self.store.load_session().await {
            Some(id) if self.profiles.iter().any(|p| p.id == id) => Some(id),
            Some(id) => {
                tracing::warn!("Session pointer '{}' names no stored profile", id);
                None
            }
            None => None,
        };

        match self.active_profile() {
            Some(profile) => {
                tracing::info!("Restored session for {}", profile.handle);
            }
            None => {
                tracing::debug!("No session to restore ({} profiles)", self.profiles.len());
            }
        }
        Step::initial(self.active_id.is_some())
    }

    pub fn profiles(&self) -> &[UserProfile] {
        &self.profiles
    }

    pub fn active_profile(&self) -> Option<&UserProfile> {
        let id = self.active_id.as_deref()?;
        self.profiles.iter().find(|p| p.id == id)
    }

    pub fn pending_sign_up(&self) -> Option<&SignUpRequest> {
        self.pending_sign_up.as_ref()
    }

    /// Validates sign-up credentials and holds them until onboarding
    /// completes. Nothing is persisted yet.
    pub fn sign_up(&mut self, candidate: SignUpRequest) -> Result<()> {
        candidate.validate()?;
        ensure_unique_identity(&self.profiles, &candidate.email, &candidate.handle, None)?;
        tracing::debug!("Sign-up accepted for {}, awaiting onboarding", candidate.email);
        self.pending_sign_up = Some(candidate);
        Ok(())
    }

    /// Drops a pending sign-up (onboarding cancelled).
    pub fn cancel_sign_up(&mut self) {
        self.pending_sign_up = None;
    }

    /// Creates the profile from the pending sign-up and makes it active.
    pub async fn complete_onboarding(
        &mut self,
        details: OnboardingDetails,
    ) -> Result<&UserProfile> {
        let request = self
            .pending_sign_up
            .take()
            .ok_or_else(|| SwapError::internal("No pending sign-up to complete"))?;

        // The collection may have changed since sign-up was accepted.
        if let Err(e) =
            ensure_unique_identity(&self.profiles, &request.email, &request.handle, None)
        {
            self.pending_sign_up = Some(request);
            return Err(e.into());
        }

        let id = uuid::Uuid::new_v4().to_string();
        let profile = UserProfile::from_onboarding(id.clone(), &request, details, self.today());
        tracing::info!("Created profile {} ({})", profile.handle, profile.id);

        self.profiles.push(profile);
        self.active_id = Some(id);
        self.persist_with_session().await?;
        self.require_active()
    }

    /// Activates the profile named by handle (with or without `@`) or email.
    pub async fn sign_in(&mut self, identifier: &str, password: &str) -> Result<&UserProfile> {
        if identifier.trim().is_empty() {
            return Err(ValidationError::IdentifierRequired.into());
        }
        if password.is_empty() {
            return Err(ValidationError::PasswordRequired.into());
        }

        let id = self
            .profiles
            .iter()
            .find(|p| p.matches_identifier(identifier) && p.password_matches(password))
            .map(|p| p.id.clone())
            .ok_or_else(|| {
                tracing::debug!("Sign-in rejected for '{}'", identifier.trim());
                SwapError::authentication(INVALID_CREDENTIALS)
            })?;

        self.activate(id).await
    }

    /// Signs in through an external provider.
    ///
    /// Reuses the provider's guest profile when one is stored, otherwise
    /// creates it with the first free `@<provider>_pioneer_N` handle.
    pub async fn sign_in_with_provider(&mut self, provider: AuthProvider) -> Result<&UserProfile> {
        let email = provider.guest_email();
        let existing = self
            .profiles
            .iter()
            .find(|p| p.email.eq_ignore_ascii_case(&email))
            .map(|p| p.id.clone());
        if let Some(id) = existing {
            return self.activate(id).await;
        }

        let handle = (1..=self.profiles.len() as u32 + 1)
            .map(|n| provider.guest_handle(n))
            .find(|h| ensure_unique_identity(&self.profiles, &email, h, None).is_ok())
            .ok_or_else(|| SwapError::internal("No free guest handle"))?;
        ensure_unique_identity(&self.profiles, &email, &handle, None)?;

        let id = format!("sso_{}", uuid::Uuid::new_v4());
        let profile = UserProfile::sso_guest(id.clone(), provider, handle);
        tracing::info!("Created {} guest profile {}", provider, profile.handle);

        self.profiles.push(profile);
        self.pending_sign_up = None;
        self.active_id = Some(id);
        self.persist_with_session().await?;
        self.require_active()
    }

    /// Activates a stored profile picked from the on-device list.
    ///
    /// The credential is checked before the session pointer moves, so a
    /// rejected pick leaves the current session untouched. The password is
    /// required unless the passwordless picker is enabled in config.
    pub async fn select_existing_profile(
        &mut self,
        profile_id: &str,
        password: Option<&str>,
    ) -> Result<&UserProfile> {
        let profile = self
            .profiles
            .iter()
            .find(|p| p.id == profile_id)
            .ok_or_else(|| SwapError::not_found("UserProfile", profile_id))?;

        if self.settings.allow_passwordless_picker {
            tracing::warn!(
                "Activating {} from the profile picker without a credential check",
                profile.handle
            );
        } else {
            let password = password
                .filter(|p| !p.is_empty())
                .ok_or(ValidationError::PasswordRequired)?;
            if !profile.password_matches(password) {
                return Err(SwapError::authentication(INVALID_CREDENTIALS));
            }
        }

        let id = profile.id.clone();
        self.activate(id).await
    }

    /// Clears the active profile and the stored session pointer.
    pub async fn sign_out(&mut self) -> Result<()> {
        if let Some(profile) = self.active_profile() {
            tracing::info!("Signing out {}", profile.handle);
        }
        self.active_id = None;
        self.pending_sign_up = None;
        self.store.clear_session().await
    }

    /// Saves edits to the active profile.
    ///
    /// The handle is normalized and must stay unique. Vault, achievements
    /// and password are kept from the stored record.
    pub async fn update_profile(&mut self, mut updated: UserProfile) -> Result<&UserProfile> {
        let current = self.require_active()?;
        if current.id != updated.id {
            return Err(SwapError::authentication(
                "Only the active profile can be edited",
            ));
        }
        if updated.name.trim().is_empty() {
            return Err(ValidationError::NameRequired.into());
        }
        if !is_valid_email(updated.email.trim()) {
            return Err(ValidationError::InvalidEmail.into());
        }
        if is_blank_handle(&updated.handle) {
            return Err(ValidationError::HandleRequired.into());
        }

        updated.name = updated.name.trim().to_string();
        updated.email = updated.email.trim().to_string();
        updated.handle = normalize_handle(&updated.handle);
        ensure_unique_identity(
            &self.profiles,
            &updated.email,
            &updated.handle,
            Some(&updated.id),
        )?;

        updated.vault = current.vault.clone();
        updated.achievements = current.achievements.clone();
        updated.password = current.password.clone();

        let slot = self.active_slot()?;
        *slot = updated;
        self.persist_with_session().await?;
        self.require_active()
    }

    /// Adds a finished swap to the active profile's vault and persists.
    ///
    /// Returns true when this unlocked the first-swap achievement.
    pub async fn record_swap(&mut self, swap: SavedSwap) -> Result<bool> {
        let today = self.today();
        let profile = self.active_slot()?;
        let unlocked = profile.record_swap(swap, today);
        tracing::debug!(
            "Vault of {} now holds {} swaps",
            profile.handle,
            profile.vault.len()
        );
        if unlocked {
            tracing::info!("{} unlocked First Draft", profile.handle);
        }
        self.persist_with_session().await?;
        Ok(unlocked)
    }

    /// Deletes one swap from the active profile's vault.
    pub async fn remove_swap(&mut self, swap_id: &str) -> Result<SavedSwap> {
        let profile = self.active_slot()?;
        let removed = vault::remove(&mut profile.vault, swap_id)?;
        self.persist_with_session().await?;
        Ok(removed)
    }

    async fn activate(&mut self, id: String) -> Result<&UserProfile> {
        self.store.save_session(&id).await?;
        self.active_id = Some(id);
        self.pending_sign_up = None;
        let profile = self.require_active()?;
        tracing::info!("Session started for {}", profile.handle);
        Ok(profile)
    }

    fn require_active(&self) -> Result<&UserProfile> {
        self.active_profile()
            .ok_or_else(|| SwapError::authentication("No active profile"))
    }

    fn active_slot(&mut self) -> Result<&mut UserProfile> {
        let id = self
            .active_id
            .as_deref()
            .ok_or_else(|| SwapError::authentication("No active profile"))?;
        self.profiles
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| SwapError::not_found("UserProfile", id))
    }

    async fn persist_with_session(&self) -> Result<()> {
        self.store.save_profiles(&self.profiles).await?;
        if let Some(id) = &self.active_id {
            self.store.save_session(id).await?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_service_test.rs"]
mod tests;
