//! Arbitrage evaluation over best-price tables.

use rust_decimal::Decimal;
use tracing::debug;

use crate::domain::{
    implied_probability, ArbitrageResult, BestOffer, BestPrice, MarketEvaluation, MarketStatus,
    Probability, TwoWayMarket,
};

/// The arbitrage test: combined implied probability strictly below 1.
///
/// A sum of exactly 1 is a fair book, not an opportunity.
#[must_use]
pub fn is_arbitrage(prob_sum: Probability) -> bool {
    prob_sum < Decimal::ONE
}

/// Sum of implied probabilities of a market's best prices.
///
/// Unquoted sides contribute zero.
pub fn probability_sum<M: TwoWayMarket>(market: &M) -> Probability {
    market
        .sides()
        .into_iter()
        .map(|side| implied_probability(side.map(BestOffer::odds)))
        .sum()
}

/// Evaluate one two-way market.
///
/// A market missing either side is `InsufficientData` rather than an
/// arbitrage, even though its partial sum is below 1. The recommendation is
/// the best-price table itself, copied verbatim.
pub fn evaluate_market<M>(market: &M) -> MarketEvaluation<M>
where
    M: TwoWayMarket + Clone,
{
    let prob_sum = probability_sum(market);

    let status = if !market.is_complete() {
        debug!(market = %M::KIND, %prob_sum, "Market has unquoted side");
        MarketStatus::InsufficientData
    } else if is_arbitrage(prob_sum) {
        MarketStatus::Arbitrage
    } else {
        MarketStatus::NoArbitrage
    };

    let recommendation = (status == MarketStatus::Arbitrage).then(|| market.clone());

    MarketEvaluation::new(status, prob_sum, recommendation)
}

/// Evaluate every market of an event's best-price table.
pub fn evaluate(best: &BestPrice, bookmaker_count: usize) -> ArbitrageResult {
    ArbitrageResult::new(
        evaluate_market(best.head_to_head()),
        evaluate_market(best.totals()),
        bookmaker_count,
    )
}
