//! Simulated studio backend.
//!
//! Images pass through unchanged after a configurable delay; the player card
//! is a fixed payload.

use std::collections::BTreeMap;
use std::time::Duration;

use async_trait::async_trait;
use jerseyswap_core::config::StudioSettings;
use jerseyswap_core::error::Result;
use jerseyswap_core::studio::{ImageRef, PlayerCard, SwapRequest, SwapStudio};

pub const CARD_BACKGROUND_URL: &str = "https://images.unsplash.com/photo-1519750783826-e2420f4d687f?ixlib=rb-1.2.1&auto=format&fit=crop&w=1950&q=80";

#[derive(Debug, Clone, Default)]
pub struct MockSwapStudio {
    settings: StudioSettings,
}

impl MockSwapStudio {
    pub fn new(settings: StudioSettings) -> Self {
        Self { settings }
    }

    /// A studio that answers immediately.
    pub fn instant() -> Self {
        Self::new(StudioSettings::instant())
    }

    async fn pause(millis: u64) {
        if millis > 0 {
            tokio::time::sleep(Duration::from_millis(millis)).await;
        }
    }
}

#[async_trait]
impl SwapStudio for MockSwapStudio {
    async fn prepare_plate(&self, image: &ImageRef) -> Result<ImageRef> {
        Self::pause(self.settings.prepare_delay_ms).await;
        Ok(image.clone())
    }

    async fn perform_swap(&self, request: &SwapRequest) -> Result<ImageRef> {
        tracing::debug!(
            "Simulating swap: team={} number={} remove_background={}",
            request.team_name,
            request.number,
            request.remove_background
        );
        Self::pause(self.settings.swap_delay_ms).await;
        Ok(request.image.clone())
    }

    async fn generate_stats(&self, _team_name: &str) -> Result<PlayerCard> {
        Self::pause(self.settings.stats_delay_ms).await;
        let stats = [
            ("PAC", 92),
            ("SHO", 88),
            ("PAS", 90),
            ("DRI", 94),
            ("DEF", 45),
            ("PHY", 78),
        ]
        .into_iter()
        .map(|(label, value)| (label.to_string(), value))
        .collect::<BTreeMap<_, _>>();

        Ok(PlayerCard {
            background: CARD_BACKGROUND_URL.to_string(),
            highlights: vec![
                "Elite Speed".to_string(),
                "Precision Passing".to_string(),
                "Clutch Factor".to_string(),
            ],
            stats,
        })
    }

    async fn synthesize_4k(&self, image: &ImageRef, _team_name: &str) -> Result<ImageRef> {
        Self::pause(self.settings.synthesis_delay_ms).await;
        Ok(image.clone())
    }
}
