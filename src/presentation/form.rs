//! Create/edit form state and its validation into a [`SubscriptionDraft`].

use chrono::NaiveDate;
use thiserror::Error;

use crate::domain::{BillingCycle, Category, Subscription, SubscriptionDraft};

const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Validation failure shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Por favor, preencha todos os campos com valores válidos.")]
    InvalidFields,
}

/// Raw values as typed into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionForm {
    pub name: String,
    pub cost: String,
    pub billing_cycle: BillingCycle,
    pub start_date: String,
    pub category: Category,
    editing: bool,
}

impl SubscriptionForm {
    /// Empty form for a new subscription, starting today.
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            cost: String::new(),
            billing_cycle: BillingCycle::Monthly,
            start_date: today.format(DATE_INPUT_FORMAT).to_string(),
            category: Category::Other,
            editing: false,
        }
    }

    /// Form pre-filled with an existing subscription for editing.
    pub fn from_subscription(subscription: &Subscription) -> Self {
        Self {
            name: subscription.name.clone(),
            cost: subscription.cost.to_string(),
            billing_cycle: subscription.billing_cycle,
            start_date: subscription.start_date.format(DATE_INPUT_FORMAT).to_string(),
            category: subscription.category,
            editing: true,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn title(&self) -> &'static str {
        if self.editing {
            "Editar Assinatura"
        } else {
            "Nova Assinatura"
        }
    }

    /// Checks every field and produces the values to store.
    pub fn validate(&self) -> Result<SubscriptionDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::InvalidFields);
        }
        let cost = parse_cost(&self.cost).ok_or(FormError::InvalidFields)?;
        let start_date = NaiveDate::parse_from_str(self.start_date.trim(), DATE_INPUT_FORMAT)
            .map_err(|_| FormError::InvalidFields)?;
        Ok(SubscriptionDraft::new(
            name,
            cost,
            self.billing_cycle,
            start_date,
            self.category,
        ))
    }
}

/// Accepts `39.90`, `39,90` and `1.234,56`; rejects non-positive and
/// non-finite values.
///
/// With a comma present it is the only decimal separator and dots may only
/// group thousands before it, so `1,234.56` is rejected rather than misread.
fn parse_cost(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    let normalized = match raw.split_once(',') {
        Some((whole, fraction)) => {
            if fraction.contains(['.', ',']) || !valid_grouping(whole) {
                return None;
            }
            format!("{}.{}", whole.replace('.', ""), fraction)
        }
        None => raw.to_string(),
    };
    normalized
        .parse::<f64>()
        .ok()
        .filter(|cost| cost.is_finite() && *cost > 0.0)
}

/// `1234` or `1.234.567`: dot-separated groups after the first hold three digits.
fn valid_grouping(whole: &str) -> bool {
    if !whole.contains('.') {
        return true;
    }
    let mut groups = whole.split('.');
    let leading_ok = groups
        .next()
        .is_some_and(|first| (1..=3).contains(&first.len()));
    leading_ok && groups.all(|group| group.len() == 3)
}

/// Confirmation question asked before a subscription is deleted.
pub fn delete_prompt(subscription: &Subscription) -> String {
    format!(
        "Você tem certeza que deseja excluir a assinatura \"{}\"?",
        subscription.name
    )
}
