//! Two-sided arbitrage detection over multi-bookmaker odds.
//!
//! Each event runs through two pure stages:
//!
//! 1. [`aggregate`] folds the bookmaker quotes into a [`BestPrice`] table.
//! 2. [`evaluate`] turns that table into an [`ArbitrageResult`].
//!
//! Events are independent of each other; nothing is shared between them.

mod aggregate;
mod config;
mod evaluate;

pub use aggregate::{aggregate, bookmaker_odds, OVER_LABEL, UNDER_LABEL};
pub use config::DetectorConfig;
pub use evaluate::{evaluate, evaluate_market, is_arbitrage, probability_sum};

use tracing::{debug, info, warn};

use crate::domain::{ArbitrageReport, ArbitrageResult, BestPrice, EventOdds};

/// Run aggregation and evaluation for one event.
pub fn detect(odds: &EventOdds) -> (BestPrice, ArbitrageResult) {
    let event = odds.event();
    let best = aggregate(event, odds.quotes());
    let result = evaluate(&best, odds.quotes().len());

    if !result.has_quotes() {
        warn!(event = %event.id(), "Event has no bookmaker quotes");
    }

    if best.totals().lines_differ() {
        debug!(event = %event.id(), "Best totals prices are on different lines");
    }

    if result.head_to_head().is_arbitrage() {
        info!(
            event = %event.id(),
            home = event.home_team(),
            away = event.away_team(),
            prob_sum = %result.head_to_head().prob_sum(),
            "Head-to-head arbitrage found"
        );
    }
    if result.totals().is_arbitrage() {
        info!(
            event = %event.id(),
            home = event.home_team(),
            away = event.away_team(),
            prob_sum = %result.totals().prob_sum(),
            "Totals arbitrage found"
        );
    }

    (best, result)
}

/// Build the output record for one event.
pub fn detect_event(odds: &EventOdds, config: &DetectorConfig) -> ArbitrageReport {
    let (best, result) = detect(odds);
    build_report(odds, &best, &result, config)
}

fn build_report(
    odds: &EventOdds,
    best: &BestPrice,
    result: &ArbitrageResult,
    config: &DetectorConfig,
) -> ArbitrageReport {
    let report = ArbitrageReport::new(odds.event(), result, best.totals().line());

    if config.include_quotes {
        let table = odds
            .quotes()
            .iter()
            .map(|quote| bookmaker_odds(odds.event(), quote))
            .collect();
        report.with_odds(table)
    } else {
        report
    }
}

/// Whether a verdict should be emitted under the given configuration.
pub fn should_report(result: &ArbitrageResult, config: &DetectorConfig) -> bool {
    if !config.opportunities_only {
        return true;
    }
    result
        .best_edge()
        .is_some_and(|edge| edge >= config.min_edge)
}

/// Scan all events and collect the reports that pass the configured filter.
pub fn scan_all(events: &[EventOdds], config: &DetectorConfig) -> Vec<ArbitrageReport> {
    let reports: Vec<ArbitrageReport> = events
        .iter()
        .filter_map(|odds| {
            let (best, result) = detect(odds);
            should_report(&result, config)
                .then(|| build_report(odds, &best, &result, config))
        })
        .collect();

    info!(
        events = events.len(),
        reported = reports.len(),
        "Scan complete"
    );

    reports
}
