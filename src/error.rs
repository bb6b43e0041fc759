use thiserror::Error;

use crate::domain::error::DomainError;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Odds data that fails validation at the ingestion boundary.
///
/// Every variant names the event (and where relevant the bookmaker, market
/// and outcome) so the offending entry can be found in the input.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("event {event}: {bookmaker} {market} outcome '{outcome}' has no price")]
    MissingPrice {
        event: String,
        bookmaker: String,
        market: String,
        outcome: String,
    },

    #[error("event {event}: {bookmaker} {market} outcome '{outcome}': {field} must be a JSON number, got {value}")]
    NotANumber {
        event: String,
        bookmaker: String,
        market: String,
        outcome: String,
        field: &'static str,
        value: String,
    },

    #[error("event {event}: {bookmaker} {market} outcome '{outcome}': {source}")]
    InvalidOdds {
        event: String,
        bookmaker: String,
        market: String,
        outcome: String,
        #[source]
        source: DomainError,
    },

    #[error("event {event}: invalid commence_time '{value}': {source}")]
    InvalidCommenceTime {
        event: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("event {event}: {source}")]
    Invalid {
        event: String,
        #[source]
        source: DomainError,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Data(#[from] DataError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
