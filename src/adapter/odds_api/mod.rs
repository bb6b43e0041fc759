//! Odds provider payload ingestion.
//!
//! Converts the provider's JSON event array into validated domain values.
//! Structural problems (a missing price, odds at or below 1.0, an unparsable
//! start time) fail fast with a [`DataError`]. Sparse data (bookmakers
//! without a market, unsupported market keys) is accepted and skipped.

mod dto;

pub use dto::{OddsApiBookmaker, OddsApiEvent, OddsApiMarket, OddsApiOutcome};

use std::io::Read;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::debug;

use crate::domain::{
    BookmakerQuote, Event, EventId, EventOdds, MarketKind, MarketQuote, Odds, OutcomeQuote,
};
use crate::error::{DataError, Result};

/// Parse a JSON event array into validated events.
pub fn parse_events(json: &str) -> Result<Vec<EventOdds>> {
    let events: Vec<OddsApiEvent> = serde_json::from_str(json)?;
    convert(events)
}

/// Read a JSON event array from any reader.
pub fn read_events<R: Read>(reader: R) -> Result<Vec<EventOdds>> {
    let events: Vec<OddsApiEvent> = serde_json::from_reader(reader)?;
    convert(events)
}

fn convert(events: Vec<OddsApiEvent>) -> Result<Vec<EventOdds>> {
    let events = events
        .into_iter()
        .map(EventOdds::try_from)
        .collect::<std::result::Result<Vec<_>, DataError>>()?;
    debug!(count = events.len(), "Parsed odds events");
    Ok(events)
}

impl OddsApiEvent {
    /// Identifier used in logs and errors; falls back to the fixture name.
    fn label(&self) -> String {
        self.id
            .clone()
            .unwrap_or_else(|| format!("{} vs {}", self.home_team, self.away_team))
    }
}

impl TryFrom<OddsApiEvent> for EventOdds {
    type Error = DataError;

    fn try_from(dto: OddsApiEvent) -> std::result::Result<Self, Self::Error> {
        let label = dto.label();

        let commence_time = DateTime::parse_from_rfc3339(&dto.commence_time)
            .map(|t| t.with_timezone(&Utc))
            .map_err(|source| DataError::InvalidCommenceTime {
                event: label.clone(),
                value: dto.commence_time.clone(),
                source,
            })?;

        let mut event = Event::try_new(
            EventId::new(label.clone()),
            commence_time,
            dto.home_team,
            dto.away_team,
        )
        .map_err(|source| DataError::Invalid {
            event: label.clone(),
            source,
        })?;
        if let Some(sport) = dto.sport_key {
            event = event.with_sport(sport);
        }

        let quotes = dto
            .bookmakers
            .into_iter()
            .map(|bookmaker| convert_bookmaker(&label, bookmaker))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(EventOdds::new(event, quotes))
    }
}

fn convert_bookmaker(
    event: &str,
    dto: OddsApiBookmaker,
) -> std::result::Result<BookmakerQuote, DataError> {
    let name = if dto.title.is_empty() {
        dto.key.unwrap_or_default()
    } else {
        dto.title
    };

    let mut markets = Vec::with_capacity(dto.markets.len());
    for market in dto.markets {
        let Some(kind) = MarketKind::from_key(&market.key) else {
            debug!(event, bookmaker = %name, market = %market.key, "Skipping unsupported market");
            continue;
        };

        let outcomes = market
            .outcomes
            .into_iter()
            .map(|outcome| convert_outcome(event, &name, kind, outcome))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        markets.push(MarketQuote::new(kind, outcomes));
    }

    BookmakerQuote::try_new(name, markets).map_err(|source| DataError::Invalid {
        event: event.to_owned(),
        source,
    })
}

fn convert_outcome(
    event: &str,
    bookmaker: &str,
    kind: MarketKind,
    dto: OddsApiOutcome,
) -> std::result::Result<OutcomeQuote, DataError> {
    let decimal = |field: &'static str, raw: &Value| {
        json_decimal(raw).ok_or_else(|| DataError::NotANumber {
            event: event.to_owned(),
            bookmaker: bookmaker.to_owned(),
            market: kind.key().to_owned(),
            outcome: dto.name.clone(),
            field,
            value: raw.to_string(),
        })
    };

    let Some(raw_price) = &dto.price else {
        return Err(DataError::MissingPrice {
            event: event.to_owned(),
            bookmaker: bookmaker.to_owned(),
            market: kind.key().to_owned(),
            outcome: dto.name,
        });
    };
    let price = decimal("price", raw_price)?;
    let point = dto
        .point
        .as_ref()
        .map(|raw| decimal("point", raw))
        .transpose()?;

    let price = match Odds::try_new(price) {
        Ok(price) => price,
        Err(source) => {
            return Err(DataError::InvalidOdds {
                event: event.to_owned(),
                bookmaker: bookmaker.to_owned(),
                market: kind.key().to_owned(),
                outcome: dto.name,
                source,
            })
        }
    };

    let outcome = OutcomeQuote::new(dto.name, price);
    Ok(match point {
        Some(point) => outcome.with_point(point),
        None => outcome,
    })
}

/// Strict JSON number to decimal. Strings and other types yield `None`.
fn json_decimal(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    if let Some(n) = number.as_i64() {
        return Some(Decimal::from(n));
    }
    if let Some(n) = number.as_u64() {
        return Some(Decimal::from(n));
    }
    let float = number.as_f64()?;
    Decimal::from_str(&float.to_string())
        .ok()
        .or_else(|| Decimal::try_from(float).ok())
}
