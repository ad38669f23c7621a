//! Validation limits for plot dimensions.
//!
//! The conversion table itself is fixed (see `luwang_core::constants`);
//! only the form's sanity ceiling is configurable.

use log::debug;
use luwang_core::{MeasurementError, MeasurementResult};
use serde::{Deserialize, Serialize};

/// Limits applied by the [`DimensionValidator`](crate::validation::DimensionValidator).
///
/// ```toml
/// max_buhol = 1000.0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValidationLimits {
    /// Largest accepted dimension (buhol).
    ///
    /// A sanity ceiling for data entry, not a physical limit.
    /// Default: 1000.0 buhol (100 tali)
    pub max_buhol: f64,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self { max_buhol: 1000.0 }
    }
}

impl ValidationLimits {
    /// Parses limits from a TOML document. Missing keys take their defaults.
    pub fn from_toml_str(input: &str) -> MeasurementResult<Self> {
        let limits: Self =
            toml::from_str(input).map_err(|e| MeasurementError::InvalidConfig(e.to_string()))?;
        limits.check()?;
        debug!("loaded validation limits: max_buhol={}", limits.max_buhol);
        Ok(limits)
    }

    pub fn to_toml_string(&self) -> MeasurementResult<String> {
        toml::to_string(self).map_err(|e| MeasurementError::InvalidConfig(e.to_string()))
    }

    /// Fails unless the ceiling is a positive, finite number.
    pub fn check(&self) -> MeasurementResult<()> {
        if !self.max_buhol.is_finite() || self.max_buhol <= 0.0 {
            return Err(MeasurementError::InvalidConfig(format!(
                "max_buhol must be a positive finite number, got {}",
                self.max_buhol
            )));
        }
        Ok(())
    }
}
