//! Adapters between external data shapes and the domain.

pub mod odds_api;
