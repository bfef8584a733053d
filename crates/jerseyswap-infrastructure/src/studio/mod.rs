//! Studio adapters and image helpers.

pub mod image;
mod mock_studio;

pub use mock_studio::{CARD_BACKGROUND_URL, MockSwapStudio};
