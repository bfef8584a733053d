//! Workflow steps and the transition table.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SwapError};

/// A screen of the swap workflow.
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
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Step {
    Auth,
    Onboarding,
    Landing,
    Upload,
    LeagueSelect,
    Customize,
    Processing,
    Result,
    Editor,
    Profile,
}

/// A user action or async completion that may move the workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Event {
    SignUpAccepted,
    SignedIn,
    OnboardingCompleted,
    SignedOut,
    Start,
    ImageUploaded,
    LeagueSelected,
    SwapConfirmed,
    SwapSucceeded,
    SwapFailed,
    OpenEditor,
    EditorClosed,
    OpenProfile,
    Back,
    Reset,
}

impl Step {
    /// The step shown at startup.
    pub fn initial(has_session: bool) -> Self {
        if has_session { Step::Landing } else { Step::Auth }
    }

    /// True for steps that require an active profile.
    pub fn is_signed_in(self) -> bool {
        !matches!(self, Step::Auth | Step::Onboarding)
    }

    /// Returns the step reached by `event`, or an invalid-transition error.
    pub fn apply(self, event: Event) -> Result<Step> {
        use Event as E;
        use Step as S;

        let next = match (self, event) {
            (_, E::SignedOut) => S::Auth,
            (from, E::Reset) if from.is_signed_in() => S::Landing,

            (S::Auth, E::SignUpAccepted) => S::Onboarding,
            (S::Auth, E::SignedIn) => S::Landing,
            (S::Onboarding, E::OnboardingCompleted) => S::Landing,
            (S::Onboarding, E::Back) => S::Auth,

            (S::Landing, E::Start) => S::Upload,
            (S::Upload, E::ImageUploaded) => S::LeagueSelect,
            (S::LeagueSelect, E::LeagueSelected) => S::Customize,
            (S::Customize, E::SwapConfirmed) => S::Processing,
            (S::Processing, E::SwapSucceeded) => S::Result,
            (S::Processing, E::SwapFailed) => S::Customize,
            (S::Result, E::OpenEditor) => S::Editor,
            (S::Editor, E::EditorClosed) => S::Result,

            (S::Upload, E::Back) => S::Landing,
            (S::LeagueSelect, E::Back) => S::Upload,
            (S::Customize, E::Back) => S::LeagueSelect,
            (S::Editor, E::Back) => S::Result,
            (S::Profile, E::Back) => S::Landing,

            (
                S::Landing | S::Upload | S::LeagueSelect | S::Customize | S::Result | S::Editor,
                E::OpenProfile,
            ) => S::Profile,

            (from, event) => return Err(SwapError::invalid_transition(from, event.to_string())),
        };
        Ok(next)
    }
}
