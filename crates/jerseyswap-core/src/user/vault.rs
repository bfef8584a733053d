//! Vault mutation: the bounded, newest-first swap history of a profile.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::achievement::Achievement;
use super::model::{SavedSwap, UserProfile};
use crate::error::{Result, SwapError};

/// Maximum number of swaps kept per profile.
pub const VAULT_CAPACITY: usize = 20;

/// Season label stamped on new swaps.
pub const CURRENT_SEASON: &str = "S2";

/// League label used when a swap has no league attached.
pub const FALLBACK_LEAGUE: &str = "Pro";

/// Formats a swap date as `dd.mm.yy`.
pub fn format_swap_date(date: NaiveDate) -> String {
    date.format("%d.%m.%y").to_string()
}

impl SavedSwap {
    /// Creates a swap record dated `date` with a fresh id.
    pub fn new(
        team: impl Into<String>,
        league: Option<&str>,
        image: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            team: team.into(),
            league: league.unwrap_or(FALLBACK_LEAGUE).to_string(),
            date: format_swap_date(date),
            image: image.into(),
            season: CURRENT_SEASON.to_string(),
        }
    }
}

/// Prepends `swap` and drops whatever falls past [`VAULT_CAPACITY`].
pub fn record(vault: &mut Vec<SavedSwap>, swap: SavedSwap) {
    vault.insert(0, swap);
    vault.truncate(VAULT_CAPACITY);
}

/// Removes the swap with `swap_id`, returning it.
pub fn remove(vault: &mut Vec<SavedSwap>, swap_id: &str) -> Result<SavedSwap> {
    let index = vault
        .iter()
        .position(|s| s.id == swap_id)
        .ok_or_else(|| SwapError::not_found("SavedSwap", swap_id))?;
    Ok(vault.remove(index))
}

impl UserProfile {
    /// Records a completed swap on this profile.
    ///
    /// The first swap into an empty vault unlocks the "First Draft"
    /// achievement. Returns true when that happened.
    pub fn record_swap(&mut self, swap: SavedSwap, today: NaiveDate) -> bool {
        let unlocked = self.vault.is_empty() && !self.has_achievement(super::FIRST_DRAFT_ID);
        if unlocked {
            self.achievements
                .push(Achievement::first_draft(format_swap_date(today)));
        }
        record(&mut self.vault, swap);
        unlocked
    }
}

/// Summary shown on the profile analytics tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultAnalytics {
    pub total: usize,
    /// Most frequent league name, `"NONE"` for an empty vault
    pub top_league: String,
    pub consistency: u32,
    pub avg_ovr: u32,
}

impl VaultAnalytics {
    pub fn of(profile: &UserProfile) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for swap in &profile.vault {
            *counts.entry(swap.league.as_str()).or_default() += 1;
        }
        // Ties go to the league seen first in the vault (newest first).
        let top_league = profile
            .vault
            .iter()
            .map(|s| s.league.as_str())
            .fold(None::<(&str, usize)>, |best, league| {
                let count = counts[league];
                match best {
                    Some((_, best_count)) if best_count >= count => best,
                    _ => Some((league, count)),
                }
            })
            .map(|(league, _)| league.to_string())
            .unwrap_or_else(|| "NONE".to_string());

        Self {
            total: profile.vault.len(),
            top_league,
            consistency: profile.stats.sync,
            avg_ovr: profile.ovr,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 7).unwrap()
    }

    fn swap(n: usize) -> SavedSwap {
        let mut s = SavedSwap::new(format!("Team {n}"), Some("NFL PRO-SYNC"), "img", day());
        s.id = n.to_string();
        s
    }

    #[test]
    fn test_swap_date_format() {
        assert_eq!(format_swap_date(day()), "07.03.24");
    }

    #[test]
    fn test_new_swap_defaults() {
        let s = SavedSwap::new("Liverpool FC", None, "data:image/png;base64,AA==", day());
        assert_eq!(s.league, "Pro");
        assert_eq!(s.season, "S2");
        assert!(!s.id.is_empty());
    }

    #[test]
    fn test_vault_length_is_bounded_and_newest_first() {
        for total in [0usize, 1, 19, 20, 21, 45] {
            let mut vault = Vec::new();
            for n in 0..total {
                record(&mut vault, swap(n));
            }
            assert_eq!(vault.len(), total.min(VAULT_CAPACITY));
            if total > 0 {
                assert_eq!(vault[0].id, (total - 1).to_string());
            }
        }
    }

    #[test]
    fn test_full_vault_evicts_oldest() {
        let mut vault = Vec::new();
        for n in 0..VAULT_CAPACITY {
            record(&mut vault, swap(n));
        }
        record(&mut vault, swap(99));
        assert_eq!(vault.len(), VAULT_CAPACITY);
        assert_eq!(vault[0].id, "99");
        assert!(vault.iter().all(|s| s.id != "0"));
        assert_eq!(vault.last().unwrap().id, "1");
    }

    #[test]
    fn test_remove_unknown_swap() {
        let mut vault = vec![swap(1)];
        let err = remove(&mut vault, "nope").unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(remove(&mut vault, "1").unwrap().id, "1");
        assert!(vault.is_empty());
    }

    #[test]
    fn test_analytics_top_league() {
        let mut profile: UserProfile = serde_json::from_value(serde_json::json!({
            "id": "p", "name": "n", "email": "e@x.io", "handle": "@n",
            "stats": {"precision": 1, "sync": 42, "speed": 3}, "ovr": 77
        }))
        .unwrap();
        assert_eq!(VaultAnalytics::of(&profile).top_league, "NONE");

        let mut fc = swap(1);
        fc.league = "EA SPORTS FC".to_string();
        record(&mut profile.vault, swap(0));
        record(&mut profile.vault, fc.clone());
        record(&mut profile.vault, fc);

        let analytics = VaultAnalytics::of(&profile);
        assert_eq!(analytics.total, 3);
        assert_eq!(analytics.top_league, "EA SPORTS FC");
        assert_eq!(analytics.consistency, 42);
        assert_eq!(analytics.avg_ovr, 77);
    }
}
