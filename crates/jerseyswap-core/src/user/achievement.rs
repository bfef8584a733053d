//! Achievements unlocked by profile milestones.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Icon name understood by the client
    pub icon: String,
    pub unlocked_at: String,
    pub rarity: Rarity,
}

pub const NEURAL_LINK_ID: &str = "first_link";
pub const FIRST_DRAFT_ID: &str = "first_swap";

impl Achievement {
    /// Granted when a profile is created.
    pub fn neural_link(unlocked_at: impl Into<String>) -> Self {
        Self {
            id: NEURAL_LINK_ID.to_string(),
            title: "Neural Link Established".to_string(),
            description: "Successfully initialized a profile on JerseySwap.io".to_string(),
            icon: "Zap".to_string(),
            unlocked_at: unlocked_at.into(),
            rarity: Rarity::Common,
        }
    }

    /// Granted with the first swap saved to an empty vault.
    pub fn first_draft(unlocked_at: impl Into<String>) -> Self {
        Self {
            id: FIRST_DRAFT_ID.to_string(),
            title: "First Draft".to_string(),
            description: "Successfully generated your first jersey swap".to_string(),
            icon: "Trophy".to_string(),
            unlocked_at: unlocked_at.into(),
            rarity: Rarity::Rare,
        }
    }
}
