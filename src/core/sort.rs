//! Ordering of subscription collections for display.

use std::{cmp::Ordering, fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::core::billing::next_billing_date_for;
use crate::domain::Subscription;

/// User-selectable list ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "name-asc")]
    NameAsc,
    #[serde(rename = "cost-desc")]
    CostDesc,
    #[serde(rename = "date-asc")]
    NextDateAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::NameAsc, SortKey::CostDesc, SortKey::NextDateAsc];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::NameAsc => "name-asc",
            SortKey::CostDesc => "cost-desc",
            SortKey::NextDateAsc => "date-asc",
        }
    }

    /// Option label shown in the sort selector.
    pub fn label(self) -> &'static str {
        match self {
            SortKey::NameAsc => "Nome (A-Z)",
            SortKey::CostDesc => "Custo (Maior primeiro)",
            SortKey::NextDateAsc => "Próximo Vencimento",
        }
    }

    /// Parses a selector value, treating anything unrecognised as name order.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == value.trim())
            .ok_or_else(|| format!("unknown sort key `{value}`"))
    }
}

/// Returns the collection ordered by `key`; the input is left untouched.
///
/// Equal keys keep their input order.
pub fn sort_subscriptions<'a>(
    subscriptions: &'a [Subscription],
    key: SortKey,
    today: NaiveDate,
) -> Vec<&'a Subscription> {
    let mut sorted: Vec<&Subscription> = subscriptions.iter().collect();
    match key {
        SortKey::NameAsc => sorted.sort_by_cached_key(|sub| CollationKey::new(&sub.name)),
        SortKey::CostDesc => sorted.sort_by(|a, b| b.annualized().total_cmp(&a.annualized())),
        SortKey::NextDateAsc => sorted.sort_by_cached_key(|sub| next_billing_date_for(sub, today)),
    }
    sorted
}

/// Compares two display names the way a person reading the list expects:
/// accents and case are ignored first, then unaccented and lowercase forms
/// sort ahead of their variants.
pub fn collate(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    base: String,
    accented: String,
    uppercase: Vec<bool>,
    raw: String,
}

impl CollationKey {
    fn new(value: &str) -> Self {
        let base = value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .flat_map(char::to_lowercase)
            .collect();
        let accented = value.nfd().flat_map(char::to_lowercase).collect();
        let uppercase = value.chars().map(char::is_uppercase).collect();
        Self {
            base,
            accented,
            uppercase,
            raw: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{BillingCycle, Category, SubscriptionDraft, SubscriptionId};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sub(id: &str, name: &str, cost: f64, cycle: BillingCycle, start: NaiveDate) -> Subscription {
        Subscription::with_id(
            SubscriptionId::new(id),
            SubscriptionDraft::new(name, cost, cycle, start, Category::Other),
        )
    }

    fn ids(sorted: &[&Subscription]) -> Vec<String> {
        sorted.iter().map(|sub| sub.id.to_string()).collect()
    }

    #[test]
    fn name_order_ignores_case_and_accents() {
        let start = date(2024, 1, 1);
        let subs = vec![
            sub("1", "spotify", 1.0, BillingCycle::Monthly, start),
            sub("2", "Órama", 1.0, BillingCycle::Monthly, start),
            sub("3", "Amazon Prime", 1.0, BillingCycle::Monthly, start),
            sub("4", "Netflix", 1.0, BillingCycle::Monthly, start),
        ];
        let sorted = sort_subscriptions(&subs, SortKey::NameAsc, start);
        assert_eq!(ids(&sorted), vec!["3", "4", "2", "1"]);
    }

    #[test]
    fn collate_breaks_ties_by_accent_then_case() {
        assert_eq!(collate("resume", "résumé"), Ordering::Less);
        assert_eq!(collate("a", "A"), Ordering::Less);
        assert_eq!(collate("Éclair", "eclipse"), Ordering::Less);
        assert_eq!(collate("same", "same"), Ordering::Equal);
    }

    #[test]
    fn cost_order_uses_annualized_amount_and_is_stable() {
        let start = date(2024, 1, 1);
        let subs = vec![
            sub("a", "A", 10.0, BillingCycle::Monthly, start),
            sub("b", "B", 200.0, BillingCycle::Yearly, start),
            sub("c", "C", 120.0, BillingCycle::Yearly, start),
            sub("d", "D", 20.0, BillingCycle::Monthly, start),
        ];
        let sorted = sort_subscriptions(&subs, SortKey::CostDesc, start);
        assert_eq!(ids(&sorted), vec!["d", "b", "a", "c"]);
    }

    #[test]
    fn date_order_projects_from_today() {
        let today = date(2023, 3, 1);
        let subs = vec![
            sub("late", "Late", 1.0, BillingCycle::Monthly, date(2023, 1, 20)),
            sub("yearly", "Yearly", 1.0, BillingCycle::Yearly, date(2022, 3, 2)),
            sub("early", "Early", 1.0, BillingCycle::Monthly, date(2022, 11, 5)),
            sub("tie", "Tie", 1.0, BillingCycle::Monthly, date(2023, 2, 5)),
        ];
        let sorted = sort_subscriptions(&subs, SortKey::NextDateAsc, today);
        assert_eq!(ids(&sorted), vec!["yearly", "early", "tie", "late"]);
    }

    #[test]
    fn sorting_leaves_input_untouched() {
        let start = date(2024, 1, 1);
        let subs = vec![
            sub("1", "Zeta", 1.0, BillingCycle::Monthly, start),
            sub("2", "Alpha", 1.0, BillingCycle::Monthly, start),
        ];
        let _ = sort_subscriptions(&subs, SortKey::NameAsc, start);
        assert_eq!(subs[0].name, "Zeta");
    }

    #[test]
    fn unknown_selector_value_falls_back_to_name_order() {
        assert_eq!(SortKey::parse_or_default("cost-desc"), SortKey::CostDesc);
        assert_eq!(SortKey::parse_or_default("bogus"), SortKey::NameAsc);
        assert_eq!(
            serde_json::to_string(&SortKey::NextDateAsc).unwrap(),
            "\"date-asc\""
        );
    }
}
