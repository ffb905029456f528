#![allow(dead_code)]

use chrono::NaiveDate;
use subtrack_core::domain::{
    BillingCycle, Category, Subscription, SubscriptionDraft, SubscriptionId,
};

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

pub fn subscription(
    id: &str,
    name: &str,
    cost: f64,
    cycle: BillingCycle,
    start: NaiveDate,
    category: Category,
) -> Subscription {
    Subscription::with_id(
        SubscriptionId::new(id),
        SubscriptionDraft::new(name, cost, cycle, start, category),
    )
}

pub fn draft(name: &str, cost: f64, cycle: BillingCycle, category: Category) -> SubscriptionDraft {
    SubscriptionDraft::new(name, cost, cycle, date(2023, 1, 15), category)
}
