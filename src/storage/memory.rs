use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicBool, Ordering},
        Mutex,
    },
};

use crate::errors::TrackerError;

use super::{Result, SubscriptionStorage};

/// In-process key-value store for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    reject_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the store with an existing blob.
    pub fn with_blob(key: impl Into<String>, blob: impl Into<String>) -> Self {
        let storage = Self::new();
        if let Ok(mut entries) = storage.entries.lock() {
            entries.insert(key.into(), blob.into());
        }
        storage
    }

    /// Makes subsequent writes fail as if the backing quota were exhausted.
    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.store(reject, Ordering::SeqCst);
    }

    fn entries(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| TrackerError::Storage("memory storage lock poisoned".into()))
    }
}

impl SubscriptionStorage for MemoryStorage {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries()?.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        if self.reject_writes.load(Ordering::SeqCst) {
            return Err(TrackerError::Storage(format!(
                "quota exceeded while writing `{key}`"
            )));
        }
        self.entries()?.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_writes_keep_previous_blob() {
        let storage = MemoryStorage::with_blob("k", "[]");
        storage.set_reject_writes(true);
        let err = storage.save("k", "[1]").expect_err("write must fail");
        assert!(err.to_string().contains("quota"));
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("[]"));

        storage.set_reject_writes(false);
        storage.save("k", "[1]").unwrap();
        assert_eq!(storage.load("k").unwrap().as_deref(), Some("[1]"));
    }
}
