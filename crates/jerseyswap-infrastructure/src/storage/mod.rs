//! Key-value store adapters.

mod atomic_file;
mod file_store;
mod memory_store;

pub use atomic_file::AtomicFile;
pub use file_store::FileStore;
pub use memory_store::MemoryStore;
