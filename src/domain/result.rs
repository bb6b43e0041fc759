//! Arbitrage verdicts per market and per event.

use rust_decimal::Decimal;
use serde::Serialize;

use super::best_price::{HeadToHeadBest, TotalsBest};
use super::odds::Probability;

/// Outcome of the arbitrage test for one market.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketStatus {
    /// Best prices imply a combined probability below 1.
    Arbitrage,
    /// Both sides quoted, combined probability at or above 1.
    NoArbitrage,
    /// At least one side was never quoted; no verdict is possible.
    InsufficientData,
}

/// Verdict for one two-way market.
///
/// `M` is the best-price table of the market; it is carried as the
/// recommendation only when the market is an arbitrage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketEvaluation<M> {
    status: MarketStatus,
    prob_sum: Probability,
    recommendation: Option<M>,
}

impl<M> MarketEvaluation<M> {
    pub(crate) fn new(
        status: MarketStatus,
        prob_sum: Probability,
        recommendation: Option<M>,
    ) -> Self {
        Self {
            status,
            prob_sum,
            recommendation,
        }
    }

    pub fn status(&self) -> MarketStatus {
        self.status
    }

    pub fn is_arbitrage(&self) -> bool {
        self.status == MarketStatus::Arbitrage
    }

    /// Sum of implied probabilities of the best prices. Absent sides add zero.
    pub fn prob_sum(&self) -> Probability {
        self.prob_sum
    }

    /// Guaranteed return per unit staked across both sides (`1 - prob_sum`).
    ///
    /// Only meaningful for complete markets.
    pub fn edge(&self) -> Decimal {
        Decimal::ONE - self.prob_sum
    }

    /// The bets to place, present only for an arbitrage.
    pub fn recommendation(&self) -> Option<&M> {
        self.recommendation.as_ref()
    }
}

/// Arbitrage verdicts for every supported market of one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArbitrageResult {
    head_to_head: MarketEvaluation<HeadToHeadBest>,
    totals: MarketEvaluation<TotalsBest>,
    bookmaker_count: usize,
}

impl ArbitrageResult {
    pub(crate) fn new(
        head_to_head: MarketEvaluation<HeadToHeadBest>,
        totals: MarketEvaluation<TotalsBest>,
        bookmaker_count: usize,
    ) -> Self {
        Self {
            head_to_head,
            totals,
            bookmaker_count,
        }
    }

    pub fn head_to_head(&self) -> &MarketEvaluation<HeadToHeadBest> {
        &self.head_to_head
    }

    pub fn totals(&self) -> &MarketEvaluation<TotalsBest> {
        &self.totals
    }

    /// Number of bookmaker entries the verdict was computed from.
    pub fn bookmaker_count(&self) -> usize {
        self.bookmaker_count
    }

    /// False for events that arrived without any bookmaker entries.
    pub fn has_quotes(&self) -> bool {
        self.bookmaker_count > 0
    }

    /// True when any market is an arbitrage.
    pub fn has_opportunity(&self) -> bool {
        self.head_to_head.is_arbitrage() || self.totals.is_arbitrage()
    }

    /// Largest edge among arbitraged markets.
    pub fn best_edge(&self) -> Option<Decimal> {
        let h2h = self
            .head_to_head
            .is_arbitrage()
            .then(|| self.head_to_head.edge());
        let totals = self.totals.is_arbitrage().then(|| self.totals.edge());
        h2h.into_iter().chain(totals).max()
    }
}
