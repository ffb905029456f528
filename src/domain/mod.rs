//! Subscription domain models: plain data types and their enums.

pub mod category;
pub mod common;
pub mod subscription;

pub use category::Category;
pub use common::{add_months_rollover, BillingCycle};
pub use subscription::{Subscription, SubscriptionDraft, SubscriptionId};
