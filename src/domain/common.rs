//! Billing cadence of a subscription and its calendar arithmetic.

use std::{fmt, str::FromStr};

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Recurrence period of a subscription charge.
///
/// Serialized with the display literals used by the persisted blob
/// (`"Mensal"` / `"Anual"`).
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub enum BillingCycle {
    #[default]
    #[serde(rename = "Mensal")]
    Monthly,
    #[serde(rename = "Anual")]
    Yearly,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 2] = [BillingCycle::Monthly, BillingCycle::Yearly];

    /// Number of calendar months in one cycle unit.
    pub fn months(self) -> u32 {
        match self {
            BillingCycle::Monthly => 1,
            BillingCycle::Yearly => 12,
        }
    }

    /// Returns `from` advanced by one cycle unit.
    ///
    /// Day-of-month overflow rolls into the following month, so Jan 31 plus
    /// one month lands on Mar 3 (Mar 2 in leap years).
    pub fn advance(self, from: NaiveDate) -> NaiveDate {
        add_months_rollover(from, self.months())
    }

    pub fn label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "Mensal",
            BillingCycle::Yearly => "Anual",
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BillingCycle {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "mensal" | "monthly" => Ok(BillingCycle::Monthly),
            "anual" | "yearly" => Ok(BillingCycle::Yearly),
            other => Err(format!("unknown billing cycle `{other}`")),
        }
    }
}

/// Adds calendar months, letting an out-of-range day spill into the next month.
pub fn add_months_rollover(date: NaiveDate, months: u32) -> NaiveDate {
    let index = date.year() * 12 + date.month0() as i32 + months as i32;
    let year = index.div_euclid(12);
    let month0 = index.rem_euclid(12) as u32;
    let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1).unwrap_or(date);
    first + Duration::days(date.day0() as i64)
}
