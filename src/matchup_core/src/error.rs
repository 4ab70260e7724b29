//! Error types for the odds engine.

use thiserror::Error;

/// Errors raised while computing odds for a roster.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OddsError {
    #[error("rating {value} of member {member} in team {team} is not a finite number")]
    InvalidRating { team: usize, member: usize, value: f64 },

    #[error("roster must contain at least one team")]
    InvalidRoster,

    #[error("combined strength of team {team} overflowed")]
    StrengthOverflow { team: usize },

    #[error("slot {slot} is out of range for a board with {slots} slots")]
    SlotOutOfRange { slot: usize, slots: usize },
}

/// Errors raised while loading or validating an engine configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("scale must be a finite positive number, got {0}")]
    InvalidScale(f64),

    #[error("base must be a finite number greater than 1, got {0}")]
    InvalidBase(f64),
}
