use rust_decimal::Decimal;
use serde::Deserialize;

/// Configuration for which arbitrage results get reported.
///
/// None of these settings change the arbitrage test itself; they only decide
/// which events are emitted and how much detail they carry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DetectorConfig {
    /// Emit only events with at least one arbitraged market.
    #[serde(default)]
    pub opportunities_only: bool,

    /// Minimum edge (1 - probability sum) for an opportunity to be emitted
    /// when `opportunities_only` is set. e.g. 0.01 means sum <= 0.99.
    #[serde(default = "default_min_edge")]
    pub min_edge: Decimal,

    /// Attach each bookmaker's recognised prices to the report.
    #[serde(default)]
    pub include_quotes: bool,
}

fn default_min_edge() -> Decimal {
    Decimal::ZERO
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            opportunities_only: false,
            min_edge: default_min_edge(),
            include_quotes: false,
        }
    }
}
