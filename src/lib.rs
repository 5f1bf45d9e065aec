#![doc(test(attr(deny(warnings))))]

//! Spendview is the client core of a budget tracking application. It expands a
//! multi-month budget request into per-month records, aggregates the monthly
//! spend-vs-budget overview served by the backend, and wraps the backend's
//! REST operations behind an async trait.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod expansion;
pub mod overview;
pub mod session;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Spendview tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
