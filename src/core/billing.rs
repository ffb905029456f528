//! Next-billing-date projection.

use chrono::NaiveDate;

use crate::domain::{BillingCycle, Subscription};

/// Returns the first occurrence of a charge that falls on or after `today`.
///
/// Starting at `start_date`, one cycle unit is added at a time until the
/// date reaches `today`. Each step starts from the previous occurrence, so a
/// day that rolled over (Jan 31 to Mar 3) stays rolled over afterwards. A
/// start date that is already on or after `today` is returned unchanged.
pub fn next_billing_date(
    start_date: NaiveDate,
    cycle: BillingCycle,
    today: NaiveDate,
) -> NaiveDate {
    let mut candidate = start_date;
    while candidate < today {
        candidate = cycle.advance(candidate);
    }
    candidate
}

/// Convenience wrapper over [`next_billing_date`] for a stored record.
pub fn next_billing_date_for(subscription: &Subscription, today: NaiveDate) -> NaiveDate {
    next_billing_date(subscription.start_date, subscription.billing_cycle, today)
}
