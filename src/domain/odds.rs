//! Decimal odds and implied probabilities.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

use super::error::DomainError;

/// Implied probability represented as a Decimal for precision.
pub type Probability = Decimal;

/// A bookmaker price in decimal format.
///
/// The payout per unit stake, always strictly greater than 1.0. A missing
/// price is modelled as `Option<Odds>::None`, never as a zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Odds(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Odds {
    /// Create odds, rejecting prices that do not exceed 1.0.
    pub fn try_new(value: Decimal) -> Result<Self, DomainError> {
        if value <= Decimal::ONE {
            return Err(DomainError::InvalidOdds { odds: value });
        }
        Ok(Self(value))
    }

    /// The decimal price.
    #[must_use]
    pub const fn value(self) -> Decimal {
        self.0
    }

    /// Break-even probability implied by this price (`1 / odds`).
    #[must_use]
    pub fn implied_probability(self) -> Probability {
        implied_probability_of(self.0)
    }
}

impl fmt::Display for Odds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Implied probability of an optional price.
///
/// Total: an absent price contributes zero probability.
#[must_use]
pub fn implied_probability(odds: Option<Odds>) -> Probability {
    odds.map_or(Decimal::ZERO, Odds::implied_probability)
}

/// Implied probability of a raw decimal price.
///
/// `1 / odds` for positive prices, zero otherwise. Never divides by zero.
#[must_use]
pub fn implied_probability_of(odds: Decimal) -> Probability {
    if odds > Decimal::ZERO {
        Decimal::ONE / odds
    } else {
        Decimal::ZERO
    }
}
