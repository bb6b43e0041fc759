//! Domain validation errors for core domain types.
//!
//! These errors are returned by `try_new` constructors when a value would
//! violate a domain invariant.
//!
//! # Examples
//!
//! ```
//! use oddsarb::domain::{DomainError, Odds};
//! use rust_decimal_macros::dec;
//!
//! // Decimal odds must pay back more than the stake
//! let result = Odds::try_new(dec!(1.00));
//!
//! assert!(matches!(result, Err(DomainError::InvalidOdds { .. })));
//! ```

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Decimal odds must be strictly greater than 1.0.
    #[error("decimal odds must be greater than 1.0, got {odds}")]
    InvalidOdds {
        /// The rejected price.
        odds: rust_decimal::Decimal,
    },

    /// Events need both team names to identify head-to-head outcomes.
    #[error("{side} team name cannot be empty")]
    EmptyTeamName {
        /// Which side was empty ("home" or "away").
        side: &'static str,
    },

    /// Quotes are keyed by bookmaker name, so it must be present.
    #[error("bookmaker name cannot be empty")]
    EmptyBookmaker,
}
