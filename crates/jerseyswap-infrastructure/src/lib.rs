//! Infrastructure adapters for JerseySwap: key-value stores, profile
//! persistence, the simulated studio, configuration and platform paths.

pub mod config_service;
pub mod paths;
pub mod profile_store;
pub mod storage;
pub mod studio;

pub use crate::config_service::ConfigService;
pub use crate::paths::JerseySwapPaths;
pub use crate::profile_store::ProfileStore;
pub use crate::storage::{FileStore, MemoryStore};
pub use crate::studio::MockSwapStudio;
