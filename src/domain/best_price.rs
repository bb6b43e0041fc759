//! Best available prices across bookmakers for one event.
//!
//! A [`BestPrice`] is a derived, read-only view produced by the market
//! aggregator. Each side of each market holds the highest price seen and the
//! bookmaker that first offered it, or `None` when no bookmaker quoted that
//! side at all.

use rust_decimal::Decimal;
use serde::Serialize;

use super::ids::BookmakerName;
use super::odds::Odds;
use super::quote::MarketKind;

/// The winning price for one outcome and who offers it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BestOffer {
    odds: Odds,
    bookmaker: BookmakerName,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    point: Option<Decimal>,
}

impl BestOffer {
    pub fn new(odds: Odds, bookmaker: BookmakerName, point: Option<Decimal>) -> Self {
        Self {
            odds,
            bookmaker,
            point,
        }
    }

    pub fn odds(&self) -> Odds {
        self.odds
    }

    pub fn bookmaker(&self) -> &BookmakerName {
        &self.bookmaker
    }

    /// The line this price was quoted against (totals only).
    pub fn point(&self) -> Option<Decimal> {
        self.point
    }
}

/// A market with exactly two complementary outcomes.
pub trait TwoWayMarket {
    /// Which market this table describes.
    const KIND: MarketKind;

    /// Both sides, in canonical order (home/away, over/under).
    fn sides(&self) -> [Option<&BestOffer>; 2];

    /// True when both sides have been quoted by at least one bookmaker.
    fn is_complete(&self) -> bool {
        self.sides().iter().all(Option::is_some)
    }
}

/// Best head-to-head prices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadToHeadBest {
    #[serde(skip_serializing_if = "Option::is_none")]
    home: Option<BestOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    away: Option<BestOffer>,
}

impl HeadToHeadBest {
    pub fn new(home: Option<BestOffer>, away: Option<BestOffer>) -> Self {
        Self { home, away }
    }

    pub fn home(&self) -> Option<&BestOffer> {
        self.home.as_ref()
    }

    pub fn away(&self) -> Option<&BestOffer> {
        self.away.as_ref()
    }
}

impl TwoWayMarket for HeadToHeadBest {
    const KIND: MarketKind = MarketKind::HeadToHead;

    fn sides(&self) -> [Option<&BestOffer>; 2] {
        [self.home(), self.away()]
    }
}

/// Best totals (over/under) prices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TotalsBest {
    #[serde(skip_serializing_if = "Option::is_none")]
    over: Option<BestOffer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    under: Option<BestOffer>,
}

impl TotalsBest {
    pub fn new(over: Option<BestOffer>, under: Option<BestOffer>) -> Self {
        Self { over, under }
    }

    pub fn over(&self) -> Option<&BestOffer> {
        self.over.as_ref()
    }

    pub fn under(&self) -> Option<&BestOffer> {
        self.under.as_ref()
    }

    /// The published line, taken from the best over price when present.
    ///
    /// Informational only: the arbitrage test ignores it.
    pub fn line(&self) -> Option<Decimal> {
        self.over
            .as_ref()
            .and_then(BestOffer::point)
            .or_else(|| self.under.as_ref().and_then(BestOffer::point))
    }

    /// True when the best over and under were quoted against different lines.
    pub fn lines_differ(&self) -> bool {
        match (
            self.over.as_ref().and_then(BestOffer::point),
            self.under.as_ref().and_then(BestOffer::point),
        ) {
            (Some(over), Some(under)) => over != under,
            _ => false,
        }
    }
}

impl TwoWayMarket for TotalsBest {
    const KIND: MarketKind = MarketKind::Totals;

    fn sides(&self) -> [Option<&BestOffer>; 2] {
        [self.over(), self.under()]
    }
}

/// Best prices for every supported market of one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BestPrice {
    head_to_head: HeadToHeadBest,
    totals: TotalsBest,
}

impl BestPrice {
    pub fn new(head_to_head: HeadToHeadBest, totals: TotalsBest) -> Self {
        Self {
            head_to_head,
            totals,
        }
    }

    pub fn head_to_head(&self) -> &HeadToHeadBest {
        &self.head_to_head
    }

    pub fn totals(&self) -> &TotalsBest {
        &self.totals
    }
}
