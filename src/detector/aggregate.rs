//! Market aggregation: best price per outcome across bookmakers.
//!
//! Quotes are folded in ingestion order. Each outcome keeps a running
//! maximum that only moves on a strictly higher price, so the first
//! bookmaker to offer the top price keeps it.

use tracing::trace;

use crate::domain::{
    BestOffer, BestPrice, BookmakerName, BookmakerOdds, BookmakerQuote, Event, HeadToHeadBest,
    MarketKind, OutcomeQuote, TotalsBest,
};

/// Label of the totals outcome backing the combined score above the line.
pub const OVER_LABEL: &str = "Over";

/// Label of the totals outcome backing the combined score below the line.
pub const UNDER_LABEL: &str = "Under";

/// The outcome an individual quote line refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Home,
    Away,
    Over,
    Under,
}

/// Map an outcome name onto a side of the given market.
///
/// Head-to-head outcomes are matched against the event's team names, totals
/// outcomes against their labels. Matching is exact and case-sensitive.
fn classify(event: &Event, kind: MarketKind, name: &str) -> Option<Side> {
    match kind {
        MarketKind::HeadToHead if name == event.home_team() => Some(Side::Home),
        MarketKind::HeadToHead if name == event.away_team() => Some(Side::Away),
        MarketKind::Totals if name == OVER_LABEL => Some(Side::Over),
        MarketKind::Totals if name == UNDER_LABEL => Some(Side::Under),
        _ => None,
    }
}

/// Running best offers while folding over quotes.
#[derive(Debug, Default)]
struct Accumulator {
    home: Option<BestOffer>,
    away: Option<BestOffer>,
    over: Option<BestOffer>,
    under: Option<BestOffer>,
}

impl Accumulator {
    fn slot(&mut self, side: Side) -> &mut Option<BestOffer> {
        match side {
            Side::Home => &mut self.home,
            Side::Away => &mut self.away,
            Side::Over => &mut self.over,
            Side::Under => &mut self.under,
        }
    }

    fn observe(mut self, event: &Event, quote: &BookmakerQuote) -> Self {
        for market in quote.markets() {
            for outcome in market.outcomes() {
                match classify(event, market.kind(), outcome.name()) {
                    Some(side) => offer(self.slot(side), quote.bookmaker(), outcome),
                    None => trace!(
                        event = %event.id(),
                        bookmaker = %quote.bookmaker(),
                        market = %market.kind(),
                        outcome = outcome.name(),
                        "Ignoring unrecognised outcome"
                    ),
                }
            }
        }
        self
    }

    fn finish(self) -> BestPrice {
        BestPrice::new(
            HeadToHeadBest::new(self.home, self.away),
            TotalsBest::new(self.over, self.under),
        )
    }
}

/// Replace the current best only on a strictly higher price.
fn offer(best: &mut Option<BestOffer>, bookmaker: &BookmakerName, outcome: &OutcomeQuote) {
    let improves = best
        .as_ref()
        .map_or(true, |current| outcome.price() > current.odds());

    if improves {
        *best = Some(BestOffer::new(
            outcome.price(),
            bookmaker.clone(),
            outcome.point(),
        ));
    }
}

/// Best price and offering bookmaker for every outcome of every market.
///
/// Sides nobody quoted stay `None`. Bookmakers missing a market are simply
/// skipped for that market.
pub fn aggregate(event: &Event, quotes: &[BookmakerQuote]) -> BestPrice {
    quotes
        .iter()
        .fold(Accumulator::default(), |acc, quote| {
            acc.observe(event, quote)
        })
        .finish()
}

/// Recognised prices from one bookmaker, for the per-bookmaker odds table.
///
/// When a bookmaker repeats an outcome, the last price wins.
pub fn bookmaker_odds(event: &Event, quote: &BookmakerQuote) -> BookmakerOdds {
    let mut odds = BookmakerOdds::new(quote.bookmaker().clone());

    for market in quote.markets() {
        for outcome in market.outcomes() {
            match classify(event, market.kind(), outcome.name()) {
                Some(Side::Home) => odds.h2h.home_odds = Some(outcome.price()),
                Some(Side::Away) => odds.h2h.away_odds = Some(outcome.price()),
                Some(Side::Over) => {
                    odds.totals.over_odds = Some(outcome.price());
                    odds.totals.total_points = outcome.point().or(odds.totals.total_points);
                }
                Some(Side::Under) => {
                    odds.totals.under_odds = Some(outcome.price());
                    odds.totals.total_points = odds.totals.total_points.or(outcome.point());
                }
                None => {}
            }
        }
    }

    odds
}
