//! Image studio port.
//!
//! The studio is the AI backend that prepares uploads, renders the jersey
//! swap and invents the player card. The workflow only sees this trait, so a
//! network client or a test fake can be swapped in.

mod model;

pub use model::{ImageRef, PlayerCard, SwapRequest};

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait SwapStudio: Send + Sync {
    /// Cleans up an uploaded photo for swapping. May return the input as-is.
    async fn prepare_plate(&self, image: &ImageRef) -> Result<ImageRef>;

    /// Renders the athlete in the requested team's jersey.
    async fn perform_swap(&self, request: &SwapRequest) -> Result<ImageRef>;

    /// Generates player card stats for a team.
    async fn generate_stats(&self, team_name: &str) -> Result<PlayerCard>;

    /// Upscales a finished swap to 4K.
    async fn synthesize_4k(&self, image: &ImageRef, team_name: &str) -> Result<ImageRef>;
}
