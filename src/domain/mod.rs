//! Exchange-agnostic domain types: events, quotes, best prices and verdicts.

mod best_price;
pub mod error;
mod event;
mod ids;
mod odds;
mod quote;
mod report;
mod result;

pub use best_price::{BestOffer, BestPrice, HeadToHeadBest, TotalsBest, TwoWayMarket};
pub use error::DomainError;
pub use event::{Event, EventOdds};
pub use ids::{BookmakerName, EventId};
pub use odds::{implied_probability, implied_probability_of, Odds, Probability};
pub use quote::{BookmakerQuote, MarketKind, MarketQuote, OutcomeQuote};
pub use report::{ArbitrageBets, ArbitrageReport, BookmakerOdds, HeadToHeadOdds, TotalsOdds};
pub use result::{ArbitrageResult, MarketEvaluation, MarketStatus};
