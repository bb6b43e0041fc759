//! oddsarb - Two-sided betting arbitrage detection across bookmakers.
//!
//! Given an odds snapshot listing, for each sporting event, the prices quoted
//! by several bookmakers, this crate finds the markets where backing the best
//! price on every outcome guarantees a profit whatever the result.
//!
//! # Architecture
//!
//! Detection is a pure, per-event pipeline:
//!
//! - **`detector::aggregate`** - Best price and offering bookmaker per outcome
//!   (head-to-head home/away, totals over/under), first-seen wins ties
//! - **`detector::evaluate`** - Implied probabilities, the `sum < 1` test and
//!   the recommended bets
//!
//! # Modules
//!
//! - [`adapter`] - Odds provider JSON ingestion and validation
//! - [`cli`] - Command-line interface
//! - [`config`] - Configuration loading from TOML files
//! - [`detector`] - Aggregation and evaluation
//! - [`domain`] - Events, quotes, best prices and verdicts
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```
//! use oddsarb::adapter::odds_api::parse_events;
//! use oddsarb::detector::{scan_all, DetectorConfig};
//!
//! let json = r#"[{
//!     "id": "game-1",
//!     "commence_time": "2024-03-01T00:30:00Z",
//!     "home_team": "Home",
//!     "away_team": "Away",
//!     "bookmakers": [
//!         {"title": "X", "markets": [{"key": "h2h", "outcomes": [
//!             {"name": "Home", "price": 2.10}, {"name": "Away", "price": 2.00}]}]},
//!         {"title": "Y", "markets": [{"key": "h2h", "outcomes": [
//!             {"name": "Home", "price": 1.95}, {"name": "Away", "price": 2.20}]}]}
//!     ]
//! }]"#;
//!
//! let events = parse_events(json).unwrap();
//! let reports = scan_all(&events, &DetectorConfig::default());
//!
//! assert!(reports[0].arbitrage_h2h());
//! ```

pub mod adapter;
pub mod cli;
pub mod config;
pub mod detector;
pub mod domain;
pub mod error;
