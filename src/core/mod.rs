//! Billing projection, aggregation, sorting and the owning store.

pub mod aggregate;
pub mod billing;
pub mod services;
pub mod sort;
pub mod store;
pub mod time;
pub mod utils;

pub use aggregate::{aggregate, SpendSummary};
pub use billing::{next_billing_date, next_billing_date_for};
pub use sort::{collate, sort_subscriptions, SortKey};
pub use store::SubscriptionStore;
pub use time::{Clock, FixedClock, SystemClock};
