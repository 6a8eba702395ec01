//! In-process store, used by tests and dry runs

use crate::core::error::{Result, TrackerError};
use crate::profile::{export_profile, import_profile, ImportReport, Profile};
use crate::store::ProfileStore;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Keeps the serialized profile in memory
///
/// Goes through the same JSON encoding as the file store, and can be told
/// to fail saves so callers' failure handling can be exercised.
#[derive(Debug, Default)]
pub struct MemoryStore {
    document: Mutex<Option<String>>,
    fail_saves: AtomicBool,
    saves: AtomicUsize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `profile`
    pub fn with_profile(profile: &Profile) -> Result<Self> {
        let store = Self::new();
        store.save(profile)?;
        store.saves.store(0, Ordering::SeqCst);
        Ok(store)
    }

    /// Make every following save fail (or succeed again)
    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Number of successful saves so far
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }

    /// The raw stored document
    pub fn document(&self) -> Option<String> {
        self.document.lock().ok().and_then(|doc| doc.clone())
    }
}

impl ProfileStore for MemoryStore {
    fn load(&self) -> Result<Option<ImportReport>> {
        let document = self
            .document
            .lock()
            .map_err(|_| TrackerError::Persistence("memory store poisoned".to_string()))?;
        document.as_deref().map(import_profile).transpose()
    }

    fn save(&self, profile: &Profile) -> Result<()> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(TrackerError::Persistence("simulated save failure".to_string()));
        }
        let content = export_profile(profile)?;
        let mut document = self
            .document
            .lock()
            .map_err(|_| TrackerError::Persistence("memory store poisoned".to_string()))?;
        *document = Some(content);
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}
