//! Spend totals over a subscription collection.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::{Category, Subscription};

/// Aggregated spend for a collection of subscriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpendSummary {
    pub monthly_total: f64,
    pub yearly_total: f64,
    /// Monthly-equivalent spend per category. Categories without
    /// subscriptions have no entry.
    pub per_category: BTreeMap<Category, f64>,
}

impl SpendSummary {
    pub fn is_empty(&self) -> bool {
        self.per_category.is_empty()
    }

    /// Category subtotals ordered by value, largest first.
    pub fn categories_by_spend(&self) -> Vec<(Category, f64)> {
        let mut rows: Vec<_> = self
            .per_category
            .iter()
            .map(|(category, value)| (*category, *value))
            .collect();
        rows.sort_by(|a, b| b.1.total_cmp(&a.1));
        rows
    }
}

/// Computes monthly and yearly totals plus the per-category breakdown.
pub fn aggregate<'a, I>(subscriptions: I) -> SpendSummary
where
    I: IntoIterator<Item = &'a Subscription>,
{
    subscriptions
        .into_iter()
        .fold(SpendSummary::default(), |mut summary, subscription| {
            let monthly = subscription.monthly_equivalent();
            summary.monthly_total += monthly;
            summary.yearly_total += subscription.annualized();
            *summary
                .per_category
                .entry(subscription.category)
                .or_insert(0.0) += monthly;
            summary
        })
}
