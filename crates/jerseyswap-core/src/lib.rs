//! Domain layer for JerseySwap.
//!
//! Holds the profile and vault model, the league catalog, the workflow step
//! machine and the ports (`KeyValueStore`, `SwapStudio`) that adapters
//! implement.

pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;
pub mod studio;
pub mod user;
pub mod workflow;

// Re-export common error type
pub use error::{Result, SwapError, ValidationError};
