//! Bookmaker quotes: prices per market and outcome.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::error::DomainError;
use super::ids::BookmakerName;
use super::odds::Odds;

/// The two-outcome markets the detector understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketKind {
    /// Which team wins.
    HeadToHead,
    /// Combined score over or under a published line.
    Totals,
}

impl MarketKind {
    /// The odds provider's market key.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HeadToHead => "h2h",
            Self::Totals => "totals",
        }
    }

    /// Parse a provider market key. Unsupported keys yield `None`.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "h2h" => Some(Self::HeadToHead),
            "totals" => Some(Self::Totals),
            _ => None,
        }
    }
}

impl fmt::Display for MarketKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A single priced outcome within a market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutcomeQuote {
    name: String,
    price: Odds,
    point: Option<Decimal>,
}

impl OutcomeQuote {
    pub fn new(name: impl Into<String>, price: Odds) -> Self {
        Self {
            name: name.into(),
            price,
            point: None,
        }
    }

    /// Attach the line (total points) the outcome is priced against.
    #[must_use]
    pub fn with_point(mut self, point: Decimal) -> Self {
        self.point = Some(point);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Odds {
        self.price
    }

    pub fn point(&self) -> Option<Decimal> {
        self.point
    }
}

/// One bookmaker's outcomes for one market.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarketQuote {
    kind: MarketKind,
    outcomes: Vec<OutcomeQuote>,
}

impl MarketQuote {
    pub fn new(kind: MarketKind, outcomes: Vec<OutcomeQuote>) -> Self {
        Self { kind, outcomes }
    }

    pub fn kind(&self) -> MarketKind {
        self.kind
    }

    pub fn outcomes(&self) -> &[OutcomeQuote] {
        &self.outcomes
    }
}

/// Everything one bookmaker quoted for one event.
///
/// Markets may be missing entirely; that is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmakerQuote {
    bookmaker: BookmakerName,
    markets: Vec<MarketQuote>,
}

impl BookmakerQuote {
    /// Create a quote, rejecting an empty bookmaker name.
    pub fn try_new(
        bookmaker: impl Into<BookmakerName>,
        markets: Vec<MarketQuote>,
    ) -> Result<Self, DomainError> {
        let bookmaker = bookmaker.into();
        if bookmaker.as_str().is_empty() {
            return Err(DomainError::EmptyBookmaker);
        }
        Ok(Self { bookmaker, markets })
    }

    pub fn bookmaker(&self) -> &BookmakerName {
        &self.bookmaker
    }

    pub fn markets(&self) -> &[MarketQuote] {
        &self.markets
    }

    /// Every market block of the given kind, in quoted order.
    pub fn markets_of(&self, kind: MarketKind) -> impl Iterator<Item = &MarketQuote> {
        self.markets.iter().filter(move |m| m.kind == kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn odds(v: Decimal) -> Odds {
        Odds::try_new(v).unwrap()
    }

    #[test]
    fn market_kind_round_trips_provider_keys() {
        assert_eq!(MarketKind::from_key("h2h"), Some(MarketKind::HeadToHead));
        assert_eq!(MarketKind::from_key("totals"), Some(MarketKind::Totals));
        assert_eq!(MarketKind::HeadToHead.key(), "h2h");
        assert_eq!(MarketKind::Totals.to_string(), "totals");
    }

    #[test]
    fn market_kind_ignores_unsupported_keys() {
        assert_eq!(MarketKind::from_key("spreads"), None);
        assert_eq!(MarketKind::from_key("H2H"), None);
        assert_eq!(MarketKind::from_key("h2h_lay"), None);
    }

    #[test]
    fn outcome_point_is_optional() {
        let plain = OutcomeQuote::new("Boston Celtics", odds(dec!(1.9)));
        assert_eq!(plain.point(), None);

        let over = OutcomeQuote::new("Over", odds(dec!(1.91))).with_point(dec!(224.5));
        assert_eq!(over.point(), Some(dec!(224.5)));
        assert_eq!(over.price().value(), dec!(1.91));
    }

    #[test]
    fn bookmaker_quote_rejects_empty_name() {
        assert_eq!(
            BookmakerQuote::try_new("", vec![]),
            Err(DomainError::EmptyBookmaker)
        );
    }

    #[test]
    fn markets_of_filters_by_kind() {
        let quote = BookmakerQuote::try_new(
            "Unibet",
            vec![
                MarketQuote::new(MarketKind::HeadToHead, vec![]),
                MarketQuote::new(MarketKind::Totals, vec![]),
            ],
        )
        .unwrap();

        assert_eq!(quote.markets_of(MarketKind::Totals).count(), 1);
        assert_eq!(quote.markets().len(), 2);
    }

    #[test]
    fn markets_of_is_empty_when_market_missing() {
        let quote = BookmakerQuote::try_new(
            "Unibet",
            vec![MarketQuote::new(MarketKind::HeadToHead, vec![])],
        )
        .unwrap();

        assert_eq!(quote.markets_of(MarketKind::Totals).count(), 0);
    }
}
