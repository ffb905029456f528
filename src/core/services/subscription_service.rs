//! Validated CRUD helpers over a subscription collection.

use crate::core::services::{ServiceError, ServiceResult};
use crate::domain::{Subscription, SubscriptionDraft, SubscriptionId};

/// Enforces collection invariants for create, update and delete.
pub struct SubscriptionService;

impl SubscriptionService {
    /// Appends a new subscription built from `draft` and returns its identifier.
    pub fn add(
        subscriptions: &mut Vec<Subscription>,
        draft: SubscriptionDraft,
    ) -> ServiceResult<SubscriptionId> {
        Self::validate(&draft)?;
        let mut subscription = Subscription::new(draft);
        while Self::find(subscriptions, &subscription.id).is_some() {
            subscription.id = SubscriptionId::generate();
        }
        let id = subscription.id.clone();
        subscriptions.push(subscription);
        Ok(id)
    }

    /// Replaces the fields of the subscription identified by `id`, keeping its position.
    pub fn update(
        subscriptions: &mut [Subscription],
        id: &SubscriptionId,
        draft: SubscriptionDraft,
    ) -> ServiceResult<()> {
        Self::validate(&draft)?;
        let subscription = subscriptions
            .iter_mut()
            .find(|sub| &sub.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
        subscription.apply(draft);
        Ok(())
    }

    /// Removes the subscription identified by `id`, returning the removed record.
    pub fn remove(
        subscriptions: &mut Vec<Subscription>,
        id: &SubscriptionId,
    ) -> ServiceResult<Subscription> {
        let index = subscriptions
            .iter()
            .position(|sub| &sub.id == id)
            .ok_or_else(|| ServiceError::NotFound(id.clone()))?;
        Ok(subscriptions.remove(index))
    }

    pub fn find<'a>(
        subscriptions: &'a [Subscription],
        id: &SubscriptionId,
    ) -> Option<&'a Subscription> {
        subscriptions.iter().find(|sub| &sub.id == id)
    }

    fn validate(draft: &SubscriptionDraft) -> ServiceResult<()> {
        if draft.name.trim().is_empty() {
            return Err(ServiceError::Invalid("Subscription name is required".into()));
        }
        if !draft.cost.is_finite() || draft.cost <= 0.0 {
            return Err(ServiceError::Invalid(format!(
                "Subscription cost must be positive, got {}",
                draft.cost
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BillingCycle, Category};
    use chrono::NaiveDate;

    fn draft(name: &str, cost: f64) -> SubscriptionDraft {
        SubscriptionDraft::new(
            name,
            cost,
            BillingCycle::Monthly,
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Category::Music,
        )
    }

    #[test]
    fn add_assigns_unique_ids_and_keeps_insertion_order() {
        let mut subs = Vec::new();
        let first = SubscriptionService::add(&mut subs, draft("Spotify", 21.90)).unwrap();
        let second = SubscriptionService::add(&mut subs, draft("Deezer", 19.90)).unwrap();
        assert_ne!(first, second);
        assert_eq!(subs[0].name, "Spotify");
        assert_eq!(subs[1].name, "Deezer");
    }

    #[test]
    fn add_rejects_invalid_drafts() {
        let mut subs = Vec::new();
        let err = SubscriptionService::add(&mut subs, draft("  ", 10.0))
            .expect_err("blank name must be rejected");
        assert!(matches!(err, ServiceError::Invalid(_)));
        let err = SubscriptionService::add(&mut subs, draft("Spotify", 0.0))
            .expect_err("zero cost must be rejected");
        assert!(matches!(err, ServiceError::Invalid(ref message) if message.contains("positive")));
        assert!(subs.is_empty());
    }

    #[test]
    fn update_replaces_fields_in_place() {
        let mut subs = Vec::new();
        let id = SubscriptionService::add(&mut subs, draft("Spotify", 21.90)).unwrap();
        SubscriptionService::add(&mut subs, draft("Deezer", 19.90)).unwrap();

        SubscriptionService::update(&mut subs, &id, draft("Spotify Family", 34.90)).unwrap();
        assert_eq!(subs[0].id, id);
        assert_eq!(subs[0].name, "Spotify Family");
        assert_eq!(subs[0].cost, 34.90);
    }

    #[test]
    fn update_and_remove_fail_for_unknown_id() {
        let mut subs = Vec::new();
        let missing = SubscriptionId::new("missing");
        let err = SubscriptionService::update(&mut subs, &missing, draft("X", 1.0))
            .expect_err("update must fail for unknown id");
        assert!(matches!(err, ServiceError::NotFound(ref id) if id == &missing));
        assert!(SubscriptionService::remove(&mut subs, &missing).is_err());
    }

    #[test]
    fn remove_returns_deleted_subscription() {
        let mut subs = Vec::new();
        let id = SubscriptionService::add(&mut subs, draft("Spotify", 21.90)).unwrap();
        let removed = SubscriptionService::remove(&mut subs, &id).unwrap();
        assert_eq!(removed.id, id);
        assert!(SubscriptionService::find(&subs, &id).is_none());
    }
}
