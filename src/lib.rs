#![doc(test(attr(deny(warnings))))]

//! Subtrack Core tracks recurring subscriptions: next billing dates, spend
//! totals by month, year and category, sorted listings and local persistence.

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod presentation;
pub mod storage;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Subtrack Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}
