//! Matchup Core - win probabilities for match-ups between teams of rated competitors.
//!
//! Each team's members' Elo ratings are combined into a team strength and
//! the classical Elo expected-score curve is generalized to any number of
//! teams. Python bindings are available with the `python` feature.

pub mod aggregation;
pub mod competitor;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod matchup;
pub mod odds;
pub mod simulation;
pub mod team;

#[cfg(feature = "python")]
mod python;

pub use aggregation::Aggregation;
pub use competitor::{Catalog, CatalogFilter, Competitor, CompetitorRecord};
pub use config::EngineConfig;
pub use constants::{DEFAULT_SLOTS, ELO_BASE, ELO_SCALE};
pub use error::{ConfigError, OddsError};
pub use matchup::{format_probability, MatchUp};
pub use odds::{calculate_odds, expected_score, OddsEngine};
pub use simulation::{sample_winner, simulate_matchups};
pub use team::{Roster, Team};
