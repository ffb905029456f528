use chrono::NaiveDate;

use crate::config::Config;

/// Formats currency amounts for presentation.
pub trait CurrencyFormatter: Send + Sync {
    fn format_amount(&self, amount: f64) -> String;
}

/// Formats dates for presentation.
pub trait DateFormatter: Send + Sync {
    fn format_date(&self, date: NaiveDate) -> String;
}

/// Amount and date conventions picked from a locale tag.
///
/// `pt-*` (and any unrecognised tag) renders `R$ 1.234,56` and `dd/mm/yyyy`;
/// `en-*` renders `US$ 1,234.56` and `mm/dd/yyyy`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    symbol: String,
    grouping: char,
    decimal: char,
    date_pattern: &'static str,
}

impl LocaleFormatter {
    pub fn new(locale: &str, symbol: impl Into<String>) -> Self {
        let symbol = symbol.into();
        if locale.trim().to_lowercase().starts_with("en") {
            Self {
                symbol,
                grouping: ',',
                decimal: '.',
                date_pattern: "%m/%d/%Y",
            }
        } else {
            Self::pt_br(symbol)
        }
    }

    pub fn pt_br(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            grouping: '.',
            decimal: ',',
            date_pattern: "%d/%m/%Y",
        }
    }

    /// Formatter for the locale and currency symbol stored in `config`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.locale, config.currency_symbol.as_str())
    }
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self::pt_br("R$")
    }
}

impl CurrencyFormatter for LocaleFormatter {
    fn format_amount(&self, amount: f64) -> String {
        format!(
            "{} {}",
            self.symbol,
            group_decimal(amount, self.grouping, self.decimal)
        )
    }
}

impl DateFormatter for LocaleFormatter {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format(self.date_pattern).to_string()
    }
}

pub fn format_brl(amount: f64) -> String {
    LocaleFormatter::default().format_amount(amount)
}

pub fn format_date_br(date: NaiveDate) -> String {
    LocaleFormatter::default().format_date(date)
}

/// Renders `amount` with two decimals and thousands grouping.
fn group_decimal(amount: f64, grouping: char, decimal: char) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = (cents / 100).to_string();
    let fraction = cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, digit) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(grouping);
        }
        grouped.push(digit);
    }
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}{grouped}{decimal}{fraction:02}")
}
