//! The subscription record and its identifier.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BillingCycle, Category};

/// Opaque identifier, unique within a collection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh random identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubscriptionId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// A recurring charge tracked by the user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: SubscriptionId,
    pub name: String,
    pub cost: f64,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,
    pub category: Category,
}

impl Subscription {
    pub fn new(draft: SubscriptionDraft) -> Self {
        Self::with_id(SubscriptionId::generate(), draft)
    }

    pub fn with_id(id: SubscriptionId, draft: SubscriptionDraft) -> Self {
        Self {
            id,
            name: draft.name,
            cost: draft.cost,
            billing_cycle: draft.billing_cycle,
            start_date: draft.start_date,
            category: draft.category,
        }
    }

    /// Replaces every field except the identifier.
    pub fn apply(&mut self, draft: SubscriptionDraft) {
        self.name = draft.name;
        self.cost = draft.cost;
        self.billing_cycle = draft.billing_cycle;
        self.start_date = draft.start_date;
        self.category = draft.category;
    }

    /// Cost normalized to one month.
    pub fn monthly_equivalent(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.cost,
            BillingCycle::Yearly => self.cost / 12.0,
        }
    }

    /// Cost normalized to one year.
    pub fn annualized(&self) -> f64 {
        match self.billing_cycle {
            BillingCycle::Monthly => self.cost * 12.0,
            BillingCycle::Yearly => self.cost,
        }
    }
}

/// Field values of a subscription without its identifier.
///
/// Produced by form validation; the store assigns the id on create.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionDraft {
    pub name: String,
    pub cost: f64,
    pub billing_cycle: BillingCycle,
    pub start_date: NaiveDate,
    pub category: Category,
}

impl SubscriptionDraft {
    pub fn new(
        name: impl Into<String>,
        cost: f64,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
        category: Category,
    ) -> Self {
        Self {
            name: name.into(),
            cost,
            billing_cycle,
            start_date,
            category,
        }
    }
}

impl From<&Subscription> for SubscriptionDraft {
    fn from(subscription: &Subscription) -> Self {
        Self {
            name: subscription.name.clone(),
            cost: subscription.cost,
            billing_cycle: subscription.billing_cycle,
            start_date: subscription.start_date,
            category: subscription.category,
        }
    }
}
