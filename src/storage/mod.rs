//! Persistence of the subscription collection as a JSON blob in a key-value store.

pub mod json_backend;
pub mod memory;

use std::{collections::HashSet, sync::Arc};

use tracing::{info, warn};

use crate::{domain::Subscription, errors::TrackerError};

pub type Result<T> = std::result::Result<T, TrackerError>;

/// Fixed key under which the collection is stored.
pub const DEFAULT_STORAGE_KEY: &str = "subscriptionsApp.subscriptions";

/// Abstraction over durable key-value backends holding serialized collections.
pub trait SubscriptionStorage: Send + Sync {
    /// Returns the blob stored under `key`, or `None` when nothing was saved yet.
    fn load(&self, key: &str) -> Result<Option<String>>;
    fn save(&self, key: &str, blob: &str) -> Result<()>;
}

impl<T: SubscriptionStorage + ?Sized> SubscriptionStorage for Arc<T> {
    fn load(&self, key: &str) -> Result<Option<String>> {
        (**self).load(key)
    }

    fn save(&self, key: &str, blob: &str) -> Result<()> {
        (**self).save(key, blob)
    }
}

pub use json_backend::JsonFileStorage;
pub use memory::MemoryStorage;

/// Serializes the collection as a JSON array of records.
pub fn encode_collection(subscriptions: &[Subscription]) -> Result<String> {
    Ok(serde_json::to_string(subscriptions)?)
}

pub fn decode_collection(blob: &str) -> Result<Vec<Subscription>> {
    Ok(serde_json::from_str(blob)?)
}

/// Reads the collection under `key`, falling back to an empty collection when
/// the blob is absent, unreadable, or malformed.
pub fn load_collection(storage: &dyn SubscriptionStorage, key: &str) -> Vec<Subscription> {
    let blob = match storage.load(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => {
            info!(key, "no stored subscriptions, starting empty");
            return Vec::new();
        }
        Err(err) => {
            warn!(key, error = %err, "failed to read stored subscriptions, starting empty");
            return Vec::new();
        }
    };
    match decode_collection(&blob) {
        Ok(subscriptions) => {
            for warning in collection_warnings(&subscriptions) {
                warn!(key, "{warning}");
            }
            info!(key, count = subscriptions.len(), "loaded subscriptions");
            subscriptions
        }
        Err(err) => {
            warn!(key, error = %err, "stored subscriptions are malformed, starting empty");
            Vec::new()
        }
    }
}

/// Writes the collection under `key`.
pub fn save_collection(
    storage: &dyn SubscriptionStorage,
    key: &str,
    subscriptions: &[Subscription],
) -> Result<()> {
    let blob = encode_collection(subscriptions)?;
    storage.save(key, &blob)
}

/// Detects records that break collection invariants in a loaded snapshot.
pub fn collection_warnings(subscriptions: &[Subscription]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut warnings = Vec::new();
    for sub in subscriptions {
        if !seen.insert(&sub.id) {
            warnings.push(format!("subscription id {} appears more than once", sub.id));
        }
        if sub.name.trim().is_empty() {
            warnings.push(format!("subscription {} has an empty name", sub.id));
        }
        if !(sub.cost.is_finite() && sub.cost > 0.0) {
            warnings.push(format!(
                "subscription {} has non-positive cost {}",
                sub.id, sub.cost
            ));
        }
    }
    warnings
}
