//! Output records handed to downstream reporting.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::best_price::{HeadToHeadBest, TotalsBest};
use super::event::Event;
use super::ids::{BookmakerName, EventId};
use super::odds::{Odds, Probability};
use super::result::{ArbitrageResult, MarketStatus};

/// Recommended bets, keyed by market. Only arbitraged markets appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ArbitrageBets {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub h2h: Option<HeadToHeadBest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub totals: Option<TotalsBest>,
}

/// Head-to-head prices quoted by a single bookmaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HeadToHeadOdds {
    pub home_odds: Option<Odds>,
    pub away_odds: Option<Odds>,
}

/// Totals prices quoted by a single bookmaker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TotalsOdds {
    pub over_odds: Option<Odds>,
    pub under_odds: Option<Odds>,
    #[serde(with = "rust_decimal::serde::float_option")]
    pub total_points: Option<Decimal>,
}

/// Recognised prices from one bookmaker, flattened per market.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookmakerOdds {
    pub bookmaker: BookmakerName,
    pub h2h: HeadToHeadOdds,
    pub totals: TotalsOdds,
}

impl BookmakerOdds {
    pub fn new(bookmaker: BookmakerName) -> Self {
        Self {
            bookmaker,
            h2h: HeadToHeadOdds::default(),
            totals: TotalsOdds::default(),
        }
    }
}

/// Per-event arbitrage record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArbitrageReport {
    event_id: EventId,
    #[serde(skip_serializing_if = "Option::is_none")]
    sport_key: Option<String>,
    commence_time: DateTime<Utc>,
    home_team: String,
    away_team: String,
    bookmaker_count: usize,
    arbitrage_h2h: bool,
    arbitrage_totals: bool,
    h2h_status: MarketStatus,
    totals_status: MarketStatus,
    #[serde(with = "rust_decimal::serde::float")]
    h2h_prob_sum: Probability,
    #[serde(with = "rust_decimal::serde::float")]
    totals_prob_sum: Probability,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    totals_line: Option<Decimal>,
    arbitrage_bets: ArbitrageBets,
    #[serde(skip_serializing_if = "Option::is_none")]
    odds: Option<Vec<BookmakerOdds>>,
}

impl ArbitrageReport {
    /// Flatten an event and its verdict into an output record.
    ///
    /// `totals_line` is the line of the best prices considered, not a
    /// consensus line.
    pub fn new(event: &Event, result: &ArbitrageResult, totals_line: Option<Decimal>) -> Self {
        let h2h = result.head_to_head();
        let totals = result.totals();

        Self {
            event_id: event.id().clone(),
            sport_key: event.sport().map(str::to_owned),
            commence_time: event.commence_time(),
            home_team: event.home_team().to_owned(),
            away_team: event.away_team().to_owned(),
            bookmaker_count: result.bookmaker_count(),
            arbitrage_h2h: h2h.is_arbitrage(),
            arbitrage_totals: totals.is_arbitrage(),
            h2h_status: h2h.status(),
            totals_status: totals.status(),
            h2h_prob_sum: h2h.prob_sum(),
            totals_prob_sum: totals.prob_sum(),
            totals_line,
            arbitrage_bets: ArbitrageBets {
                h2h: h2h.recommendation().cloned(),
                totals: totals.recommendation().cloned(),
            },
            odds: None,
        }
    }

    /// Attach the per-bookmaker odds table.
    #[must_use]
    pub fn with_odds(mut self, odds: Vec<BookmakerOdds>) -> Self {
        self.odds = Some(odds);
        self
    }

    pub fn event_id(&self) -> &EventId {
        &self.event_id
    }

    pub fn arbitrage_h2h(&self) -> bool {
        self.arbitrage_h2h
    }

    pub fn arbitrage_totals(&self) -> bool {
        self.arbitrage_totals
    }

    pub fn h2h_prob_sum(&self) -> Probability {
        self.h2h_prob_sum
    }

    pub fn totals_prob_sum(&self) -> Probability {
        self.totals_prob_sum
    }

    pub fn arbitrage_bets(&self) -> &ArbitrageBets {
        &self.arbitrage_bets
    }

    pub fn odds(&self) -> Option<&[BookmakerOdds]> {
        self.odds.as_deref()
    }
}
