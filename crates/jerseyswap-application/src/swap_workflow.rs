//! The swap workflow use case.
//!
//! Drives the user from upload to result, one [`Step`] at a time, and hands
//! finished swaps to the [`SessionService`] for the vault.

use std::sync::Arc;

use jerseyswap_core::catalog::{self, League, Team};
use jerseyswap_core::error::{Result, SwapError, ValidationError};
use jerseyswap_core::studio::{ImageRef, PlayerCard, SwapRequest, SwapStudio};
use jerseyswap_core::user::{
    AuthProvider, OnboardingDetails, SavedSwap, SignUpRequest, UserProfile,
};
use jerseyswap_core::workflow::{Event, Step, SwapState, validate_jersey_number};
use jerseyswap_infrastructure::studio::image::extension_for;

use crate::session_service::SessionService;

/// Output of a successful swap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapOutcome {
    pub image: ImageRef,
    pub card: PlayerCard,
    pub is_4k: bool,
}

/// A result image ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadArtifact {
    pub file_name: String,
    pub image: ImageRef,
}

pub struct SwapWorkflow {
    session: SessionService,
    studio: Arc<dyn SwapStudio>,
    step: Step,
    state: SwapState,
    outcome: Option<SwapOutcome>,
    card_visible: bool,
}

impl SwapWorkflow {
    pub fn new(session: SessionService, studio: Arc<dyn SwapStudio>) -> Self {
        Self {
            session,
            studio,
            step: Step::Auth,
            state: SwapState::default(),
            outcome: None,
            card_visible: false,
        }
    }

    /// Restores the stored session and picks the starting step.
    pub async fn bootstrap(&mut self) -> Step {
        self.step = self.session.bootstrap().await;
        self.clear_swap();
        self.step
    }

    // ============================================================================
    // Accessors
    // ============================================================================

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn state(&self) -> &SwapState {
        &self.state
    }

    pub fn outcome(&self) -> Option<&SwapOutcome> {
        self.outcome.as_ref()
    }

    pub fn result_image(&self) -> Option<&ImageRef> {
        self.outcome.as_ref().map(|o| &o.image)
    }

    pub fn is_card_visible(&self) -> bool {
        self.card_visible
    }

    pub fn session(&self) -> &SessionService {
        &self.session
    }

    pub fn active_profile(&self) -> Option<&UserProfile> {
        self.session.active_profile()
    }

    /// Teams of the selected league, or none before a league is picked.
    pub fn available_teams(&self) -> Vec<&'static Team> {
        match &self.state.league {
            Some(league) => catalog::teams_for_league(league.id).collect(),
            None => Vec::new(),
        }
    }

    // ============================================================================
    // Auth and onboarding
    // ============================================================================

    pub async fn sign_in(&mut self, identifier: &str, password: &str) -> Result<()> {
        let next = self.step.apply(Event::SignedIn)?;
        self.session.sign_in(identifier, password).await?;
        self.go(next);
        Ok(())
    }

    /// Single sign-on with a guest profile for `provider`.
    pub async fn sign_in_with_provider(&mut self, provider: AuthProvider) -> Result<()> {
        let next = self.step.apply(Event::SignedIn)?;
        self.session.sign_in_with_provider(provider).await?;
        self.go(next);
        Ok(())
    }

    pub fn sign_up(&mut self, candidate: SignUpRequest) -> Result<()> {
        let next = self.step.apply(Event::SignUpAccepted)?;
        self.session.sign_up(candidate)?;
        self.go(next);
        Ok(())
    }

    pub async fn complete_onboarding(&mut self, details: OnboardingDetails) -> Result<()> {
        let next = self.step.apply(Event::OnboardingCompleted)?;
        self.session.complete_onboarding(details).await?;
        self.go(next);
        Ok(())
    }

    /// Picks a stored profile from the on-device list.
    pub async fn select_profile(&mut self, profile_id: &str, password: Option<&str>) -> Result<()> {
        let next = self.step.apply(Event::SignedIn)?;
        self.session
            .select_existing_profile(profile_id, password)
            .await?;
        self.go(next);
        Ok(())
    }

    /// Moves a signed-in session to another stored profile.
    ///
    /// Fails without side effects when the pick is rejected; on success
    /// the swap in progress is dropped and the workflow lands on landing.
    pub async fn switch_profile(&mut self, profile_id: &str, password: Option<&str>) -> Result<()> {
        if !self.step.is_signed_in() {
            return self.select_profile(profile_id, password).await;
        }
        let next = self.step.apply(Event::SignedOut)?.apply(Event::SignedIn)?;
        self.session
            .select_existing_profile(profile_id, password)
            .await?;
        self.clear_swap();
        self.go(next);
        Ok(())
    }

    pub async fn sign_out(&mut self) -> Result<()> {
        let next = self.step.apply(Event::SignedOut)?;
        self.session.sign_out().await?;
        self.clear_swap();
        self.go(next);
        Ok(())
    }

    pub async fn update_profile(&mut self, updated: UserProfile) -> Result<&UserProfile> {
        self.session.update_profile(updated).await
    }

    pub async fn remove_swap(&mut self, swap_id: &str) -> Result<SavedSwap> {
        self.session.remove_swap(swap_id).await
    }

    // ============================================================================
    // Swap steps
    // ============================================================================

    /// Landing → upload. Every new cycle begins from default selections.
    pub fn start(&mut self) -> Result<()> {
        self.fire(Event::Start)?;
        self.clear_swap();
        Ok(())
    }

    /// Accepts the uploaded photo and moves to league selection.
    ///
    /// A failing plate preparation is not surfaced; the raw upload is used.
    pub async fn upload(&mut self, raw: ImageRef) -> Result<()> {
        let next = self.step.apply(Event::ImageUploaded)?;
        let image = match self.studio.prepare_plate(&raw).await {
            Ok(prepared) => prepared,
            Err(e) => {
                tracing::debug!("Plate preparation failed, using raw upload: {}", e);
                raw
            }
        };
        self.state.image = Some(image);
        self.go(next);
        Ok(())
    }

    pub fn select_league(&mut self, league_id: &str) -> Result<&League> {
        let next = self.step.apply(Event::LeagueSelected)?;
        let league = catalog::find_league(league_id)
            .ok_or_else(|| SwapError::not_found("League", league_id))?;
        if self.state.league.map(|l| l.id) != Some(league.id) {
            self.state.team = None;
        }
        self.state.league = Some(*league);
        self.go(next);
        Ok(league)
    }

    pub fn select_team(&mut self, team_id: &str) -> Result<&Team> {
        self.require_step(Step::Customize, "select-team")?;
        let team = self
            .available_teams()
            .into_iter()
            .find(|t| t.id == team_id)
            .ok_or_else(|| SwapError::not_found("Team", team_id))?;
        self.state.team = Some(*team);
        Ok(team)
    }

    pub fn set_number(&mut self, number: &str) -> Result<()> {
        self.require_step(Step::Customize, "set-number")?;
        let number = number.trim();
        validate_jersey_number(number)?;
        self.state.number = number.to_string();
        Ok(())
    }

    pub fn set_remove_background(&mut self, remove: bool) -> Result<()> {
        self.require_step(Step::Customize, "set-remove-background")?;
        self.state.remove_background = remove;
        Ok(())
    }

    /// Runs the swap and stat generation together and records the result.
    ///
    /// On failure the workflow returns to customize with every selection
    /// intact, and the error is returned for display.
    pub async fn confirm_swap(&mut self) -> Result<&SwapOutcome> {
        let processing = self.step.apply(Event::SwapConfirmed)?;
        let (image, team) = match (&self.state.image, &self.state.team) {
            (Some(image), Some(team)) => (image.clone(), *team),
            (None, _) => return Err(ValidationError::Other("Upload a photo first".into()).into()),
            (_, None) => return Err(ValidationError::Other("Pick a team first".into()).into()),
        };
        if self.session.active_profile().is_none() {
            return Err(SwapError::authentication("No active profile"));
        }

        self.go(processing);
        self.outcome = None;
        self.card_visible = false;

        let request = SwapRequest {
            image,
            team_name: team.name.to_string(),
            number: self.state.number.clone(),
            remove_background: self.state.remove_background,
        };
        let studio = Arc::clone(&self.studio);
        let joined = tokio::try_join!(
            studio.perform_swap(&request),
            studio.generate_stats(&request.team_name)
        );

        let (image, card) = match joined {
            Ok(pair) => pair,
            Err(e) => {
                tracing::error!("Swap for {} failed: {}", request.team_name, e);
                self.go(self.step.apply(Event::SwapFailed)?);
                return Err(e);
            }
        };

        self.save_to_vault(&image).await;
        tracing::info!(
            "Swap complete: {} #{}{}",
            request.team_name,
            request.number,
            if request.remove_background { " (background removed)" } else { "" }
        );
        self.go(self.step.apply(Event::SwapSucceeded)?);
        Ok(self.outcome.insert(SwapOutcome {
            image,
            card,
            is_4k: false,
        }))
    }

    // ============================================================================
    // Result, editor and navigation
    // ============================================================================

    pub fn view_card(&mut self) -> Result<&PlayerCard> {
        self.require_step(Step::Result, "view-card")?;
        let outcome = self
            .outcome
            .as_ref()
            .ok_or_else(|| SwapError::internal("Result step without a swap outcome"))?;
        self.card_visible = true;
        Ok(&outcome.card)
    }

    pub fn close_card(&mut self) {
        self.card_visible = false;
    }

    /// Builds the download for the current result. Does not change state.
    pub fn download(&self) -> Result<DownloadArtifact> {
        let outcome = self
            .outcome
            .as_ref()
            .ok_or_else(|| SwapError::not_found("SwapOutcome", "current"))?;
        let team = self
            .state
            .team
            .map(|t| slug(t.name))
            .unwrap_or_else(|| "athlete".to_string());
        let suffix = if outcome.is_4k { "-4k" } else { "" };
        Ok(DownloadArtifact {
            file_name: format!(
                "jerseyswap-{}-{}{}.{}",
                team,
                self.state.number,
                suffix,
                extension_for(&outcome.image)
            ),
            image: outcome.image.clone(),
        })
    }

    /// Re-renders the result at 4K and saves it to the vault. A failure
    /// leaves the result untouched.
    pub async fn upgrade_to_4k(&mut self) -> Result<&SwapOutcome> {
        self.require_step(Step::Result, "upgrade-4k")?;
        let (image, team_name, already_4k) = match (&self.outcome, &self.state.team) {
            (Some(outcome), Some(team)) => (outcome.image.clone(), team.name, outcome.is_4k),
            _ => return Err(SwapError::not_found("SwapOutcome", "current")),
        };
        if already_4k {
            return self
                .outcome
                .as_ref()
                .ok_or_else(|| SwapError::internal("Outcome vanished"));
        }

        let upscaled = self
            .studio
            .synthesize_4k(&image, team_name)
            .await
            .inspect_err(|e| tracing::error!("4K synthesis failed: {}", e))?;

        self.save_to_vault(&upscaled).await;
        let outcome = self
            .outcome
            .as_mut()
            .ok_or_else(|| SwapError::internal("Outcome vanished"))?;
        outcome.image = upscaled;
        outcome.is_4k = true;
        tracing::info!("Upgraded {} swap to 4K", team_name);
        Ok(outcome)
    }

    pub fn open_editor(&mut self) -> Result<()> {
        self.fire(Event::OpenEditor)
    }

    /// Stores an edited result, saves it to the vault and returns to result.
    pub async fn save_edit(&mut self, edited: ImageRef) -> Result<()> {
        let next = self.step.apply(Event::EditorClosed)?;
        let outcome = self
            .outcome
            .as_mut()
            .ok_or_else(|| SwapError::internal("Editor open without a swap outcome"))?;
        outcome.image = edited.clone();
        self.save_to_vault(&edited).await;
        self.go(next);
        Ok(())
    }

    pub fn open_profile(&mut self) -> Result<()> {
        self.card_visible = false;
        self.fire(Event::OpenProfile)
    }

    /// Steps back one screen. Leaving onboarding discards the sign-up and
    /// arriving on landing discards the swap in progress.
    pub fn back(&mut self) -> Result<()> {
        let from = self.step;
        self.fire(Event::Back)?;
        if from == Step::Onboarding {
            self.session.cancel_sign_up();
        }
        if self.step == Step::Landing {
            self.clear_swap();
        }
        Ok(())
    }

    /// Returns to landing with a clean slate.
    pub fn reset(&mut self) -> Result<()> {
        self.fire(Event::Reset)?;
        self.clear_swap();
        Ok(())
    }

    /// Starts over from a finished result.
    pub fn remix(&mut self) -> Result<()> {
        self.require_step(Step::Result, "remix")?;
        self.reset()
    }

    // ============================================================================
    // Helpers
    // ============================================================================

    fn fire(&mut self, event: Event) -> Result<()> {
        let next = self.step.apply(event)?;
        self.go(next);
        Ok(())
    }

    fn go(&mut self, next: Step) {
        if next != self.step {
            tracing::debug!("Step {} -> {}", self.step, next);
        }
        self.step = next;
    }

    fn require_step(&self, expected: Step, action: &str) -> Result<()> {
        if self.step == expected {
            Ok(())
        } else {
            Err(SwapError::invalid_transition(self.step, action))
        }
    }

    fn clear_swap(&mut self) {
        self.state = SwapState::default();
        self.outcome = None;
        self.card_visible = false;
    }

    async fn save_to_vault(&mut self, image: &ImageRef) {
        let Some(team) = self.state.team else {
            return;
        };
        let swap = SavedSwap::new(
            team.name,
            self.state.league.map(|l| l.name),
            image.as_str(),
            self.session.today(),
        );
        // The swap stays in the in-memory profile; the next write retries.
        if let Err(e) = self.session.record_swap(swap).await {
            tracing::error!("Failed to persist swap to vault: {}", e);
        }
    }
}

fn slug(name: &str) -> String {
    name.split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(|part| part.to_ascii_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
#[path = "swap_workflow_test.rs"]
mod tests;
