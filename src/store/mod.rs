//! Profile persistence
//!
//! The engine only needs `load` and `save`. Saves must be safe to retry and
//! the last write wins; a failed save never touches the in-memory profile.

pub mod file;
pub mod memory;

use crate::core::error::Result;
use crate::profile::{ImportReport, Profile};

pub use file::JsonFileStore;
pub use memory::MemoryStore;

/// Somewhere a profile can be kept between sessions
pub trait ProfileStore {
    /// The stored profile, or None if nothing has been saved yet
    ///
    /// Stored data is read with the same tolerance as an import, so the
    /// report may carry warnings.
    fn load(&self) -> Result<Option<ImportReport>>;

    /// Replace the stored profile
    fn save(&self, profile: &Profile) -> Result<()>;

    /// Short human-readable description for logs
    fn describe(&self) -> String;
}
