//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::aggregation::Aggregation;
use crate::constants::{ELO_BASE, ELO_SCALE};
use crate::error::ConfigError;

/// Configuration for the odds engine.
///
/// ```toml
/// aggregation = "mean"
/// base = 10.0
/// scale = 400.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// How member ratings combine into team strength
    pub aggregation: Aggregation,

    /// Logistic base (10 for classical Elo)
    pub base: f64,

    /// Rating difference per factor of `base` (400 for classical Elo)
    pub scale: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            aggregation: Aggregation::default(),
            base: ELO_BASE,
            scale: ELO_SCALE,
        }
    }
}

impl EngineConfig {
    pub fn with_aggregation(aggregation: Aggregation) -> Self {
        EngineConfig {
            aggregation,
            ..Default::default()
        }
    }

    /// Parse and validate a TOML configuration. Missing keys take their defaults.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ConfigError::InvalidScale(self.scale));
        }
        if !self.base.is_finite() || self.base <= 1.0 {
            return Err(ConfigError::InvalidBase(self.base));
        }
        Ok(())
    }
}
