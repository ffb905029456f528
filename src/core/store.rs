//! Owner of the authoritative subscription collection.

use chrono::NaiveDate;
use tracing::{debug, error};

use crate::core::{
    aggregate::{aggregate, SpendSummary},
    services::SubscriptionService,
    sort::{sort_subscriptions, SortKey},
};
use crate::domain::{Subscription, SubscriptionDraft, SubscriptionId};
use crate::errors::TrackerError;
use crate::storage::{load_collection, save_collection, SubscriptionStorage};

/// Facade that coordinates the in-memory collection and its persistence.
///
/// Every mutation is written through immediately. A failed write is logged
/// and remembered, but the in-memory change stands.
pub struct SubscriptionStore {
    subscriptions: Vec<Subscription>,
    key: String,
    storage: Box<dyn SubscriptionStorage>,
    last_persist_error: Option<String>,
}

impl SubscriptionStore {
    /// Opens the collection stored under `key`; unreadable data yields an empty store.
    pub fn open(storage: Box<dyn SubscriptionStorage>, key: impl Into<String>) -> Self {
        let key = key.into();
        let subscriptions = load_collection(storage.as_ref(), &key);
        Self {
            subscriptions,
            key,
            storage,
            last_persist_error: None,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &dyn SubscriptionStorage {
        self.storage.as_ref()
    }

    /// Subscriptions in insertion order.
    pub fn list(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn len(&self) -> usize {
        self.subscriptions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.is_empty()
    }

    pub fn get(&self, id: &SubscriptionId) -> Option<&Subscription> {
        SubscriptionService::find(&self.subscriptions, id)
    }

    pub fn create(&mut self, draft: SubscriptionDraft) -> Result<SubscriptionId, TrackerError> {
        let id = SubscriptionService::add(&mut self.subscriptions, draft)?;
        debug!(%id, "created subscription");
        self.persist();
        Ok(id)
    }

    pub fn update(
        &mut self,
        id: &SubscriptionId,
        draft: SubscriptionDraft,
    ) -> Result<(), TrackerError> {
        SubscriptionService::update(&mut self.subscriptions, id, draft)?;
        debug!(%id, "updated subscription");
        self.persist();
        Ok(())
    }

    /// Removes a subscription. Callers confirm with the user beforehand.
    pub fn delete(&mut self, id: &SubscriptionId) -> Result<Subscription, TrackerError> {
        let removed = SubscriptionService::remove(&mut self.subscriptions, id)?;
        debug!(%id, "deleted subscription");
        self.persist();
        Ok(removed)
    }

    pub fn sorted(&self, key: SortKey, today: NaiveDate) -> Vec<&Subscription> {
        sort_subscriptions(&self.subscriptions, key, today)
    }

    pub fn summary(&self) -> SpendSummary {
        aggregate(&self.subscriptions)
    }

    /// Message of the most recent failed write, cleared by the next successful one.
    pub fn last_persist_error(&self) -> Option<&str> {
        self.last_persist_error.as_deref()
    }

    /// Writes the current collection, returning any storage failure.
    pub fn flush(&mut self) -> Result<(), TrackerError> {
        match save_collection(self.storage.as_ref(), &self.key, &self.subscriptions) {
            Ok(()) => {
                self.last_persist_error = None;
                Ok(())
            }
            Err(err) => {
                self.last_persist_error = Some(err.to_string());
                Err(err)
            }
        }
    }

    fn persist(&mut self) {
        if let Err(err) = self.flush() {
            error!(key = %self.key, error = %err, "failed to save subscriptions");
        }
    }
}
