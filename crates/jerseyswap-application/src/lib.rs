//! Application layer for JerseySwap.
//!
//! This crate provides the use cases that coordinate the domain model with
//! the storage and studio adapters: the session service and the swap
//! workflow driver.

pub mod session_service;
pub mod swap_workflow;

pub use session_service::SessionService;
pub use swap_workflow::{DownloadArtifact, SwapOutcome, SwapWorkflow};
