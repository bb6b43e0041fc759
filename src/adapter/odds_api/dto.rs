//! Odds provider response types.
//!
//! Mirrors the event array returned by the provider's `/sports/{sport}/odds`
//! endpoint. Only fields the detector needs are required; everything else is
//! optional so sparse payloads still deserialize.

use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiEvent {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub sport_key: Option<String>,
    pub commence_time: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<OddsApiBookmaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiBookmaker {
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub markets: Vec<OddsApiMarket>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiMarket {
    pub key: String,
    #[serde(default)]
    pub outcomes: Vec<OddsApiOutcome>,
}

/// Numeric fields are kept as raw JSON so a wrongly typed value (a quoted
/// string, a bool) is reported against the outcome instead of coerced.
#[derive(Debug, Clone, Deserialize)]
pub struct OddsApiOutcome {
    pub name: String,
    #[serde(default)]
    pub price: Option<Value>,
    #[serde(default)]
    pub point: Option<Value>,
}
