//! Transient selections made while walking through the workflow.

use crate::catalog::{League, Team};
use crate::error::ValidationError;
use crate::studio::ImageRef;

pub const DEFAULT_JERSEY_NUMBER: &str = "23";

/// Selections for the swap in progress. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapState {
    pub image: Option<ImageRef>,
    pub league: Option<League>,
    pub team: Option<Team>,
    /// One or two ASCII digits
    pub number: String,
    pub remove_background: bool,
}

impl Default for SwapState {
    fn default() -> Self {
        Self {
            image: None,
            league: None,
            team: None,
            number: DEFAULT_JERSEY_NUMBER.to_string(),
            remove_background: false,
        }
    }
}

/// Accepts `"0"` through `"99"`, including a leading zero.
pub fn validate_jersey_number(number: &str) -> Result<(), ValidationError> {
    let valid = (1..=2).contains(&number.len()) && number.bytes().all(|b| b.is_ascii_digit());
    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidJerseyNumber)
    }
}
