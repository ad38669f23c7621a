//! Conversions between traditional and metric units.
//!
//! The scalar primitives mirror the measurement chain used on plot forms:
//! buhol → meters → tali for lengths, square meters → luwang → hectare for
//! areas. They do no validation: negative or `NaN` input propagates
//! arithmetically, and range checks are left to the caller.
//!
//! [`LengthUnit`] and [`AreaUnit`] wrap the same table behind a typed API.
//!
//! # Example
//!
//! ```
//! use luwang_core::conversion::{buhol_to_meters, sqm_to_luwang, LengthUnit};
//!
//! assert_eq!(buhol_to_meters(3.0), 150.0);
//! assert_eq!(sqm_to_luwang(250_000.0), 1.0);
//! assert_eq!(LengthUnit::Tali.convert(2.0, LengthUnit::Buhol), 20.0);
//! ```

use crate::constants::{
    BUHOL_TO_METERS, LUWANG_PER_HECTARE, LUWANG_TO_SQM, TALI_TO_BUHOL, TALI_TO_METERS,
};
use serde::{Deserialize, Serialize};
use std::fmt;

pub fn buhol_to_meters(buhol: f64) -> f64 {
    buhol * BUHOL_TO_METERS
}

pub fn meters_to_buhol(meters: f64) -> f64 {
    meters / BUHOL_TO_METERS
}

pub fn buhol_to_tali(buhol: f64) -> f64 {
    buhol / TALI_TO_BUHOL
}

pub fn tali_to_buhol(tali: f64) -> f64 {
    tali * TALI_TO_BUHOL
}

pub fn tali_to_meters(tali: f64) -> f64 {
    tali * TALI_TO_METERS
}

pub fn meters_to_tali(meters: f64) -> f64 {
    meters / TALI_TO_METERS
}

pub fn sqm_to_luwang(area_sqm: f64) -> f64 {
    area_sqm / LUWANG_TO_SQM
}

pub fn luwang_to_sqm(luwang: f64) -> f64 {
    luwang * LUWANG_TO_SQM
}

/// Converts luwang to the customary hectare-equivalent (20 luwang each).
pub fn luwang_to_hectare(luwang: f64) -> f64 {
    luwang / LUWANG_PER_HECTARE
}

pub fn hectare_to_luwang(hectare: f64) -> f64 {
    hectare * LUWANG_PER_HECTARE
}

/// A length unit used when pacing out a plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    Meter,
    Buhol,
    Tali,
}

impl LengthUnit {
    /// Multiplier converting a value in this unit to meters.
    #[must_use]
    pub const fn to_si_factor(self) -> f64 {
        match self {
            Self::Meter => 1.0,
            Self::Buhol => BUHOL_TO_METERS,
            Self::Tali => TALI_TO_METERS,
        }
    }

    /// Multiplier converting a value in `self` to a value in `other`.
    #[must_use]
    pub fn conversion_factor(self, other: Self) -> f64 {
        // value_self * factor_self = meters = value_other * factor_other
        self.to_si_factor() / other.to_si_factor()
    }

    #[must_use]
    pub fn convert(self, value: f64, to: Self) -> f64 {
        value * self.conversion_factor(to)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Buhol => "buhol",
            Self::Tali => "tali",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// An area unit stored on plot records.
///
/// The hectare-equivalent is deliberately absent; see [`luwang_to_hectare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AreaUnit {
    #[serde(rename = "sqm")]
    SquareMeter,
    Luwang,
}

impl AreaUnit {
    /// Multiplier converting a value in this unit to square meters.
    #[must_use]
    pub const fn to_si_factor(self) -> f64 {
        match self {
            Self::SquareMeter => 1.0,
            Self::Luwang => LUWANG_TO_SQM,
        }
    }

    #[must_use]
    pub fn conversion_factor(self, other: Self) -> f64 {
        self.to_si_factor() / other.to_si_factor()
    }

    #[must_use]
    pub fn convert(self, value: f64, to: Self) -> f64 {
        value * self.conversion_factor(to)
    }

    pub const fn symbol(self) -> &'static str {
        match self {
            Self::SquareMeter => "sqm",
            Self::Luwang => "luwang",
        }
    }
}

impl fmt::Display for AreaUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_conversion_constants() {
        assert_eq!(buhol_to_meters(1.0), 50.0);
        assert_eq!(buhol_to_tali(10.0), 1.0);
        assert_eq!(sqm_to_luwang(250_000.0), 1.0);
        assert_eq!(luwang_to_hectare(20.0), 1.0);
    }

    #[test]
    fn test_inverse_primitives() {
        assert_eq!(meters_to_buhol(500.0), 10.0);
        assert_eq!(tali_to_buhol(2.5), 25.0);
        assert_eq!(luwang_to_sqm(0.5), 125_000.0);
        assert_eq!(hectare_to_luwang(1.5), 30.0);
        assert_eq!(tali_to_meters(1.0), 500.0);
        assert_eq!(meters_to_tali(1250.0), 2.5);
    }

    #[test]
    fn test_buhol_round_trip() {
        for b in [0.0, 0.1, 1.0, 3.7, 10.0, 123.456, 1000.0, 1e9] {
            let round_trip = meters_to_buhol(buhol_to_meters(b));
            assert!(is_close!(round_trip, b), "{b} came back as {round_trip}");
        }
    }

    #[test]
    fn test_negative_and_nan_propagate() {
        assert_eq!(buhol_to_meters(-2.0), -100.0);
        assert!(buhol_to_meters(f64::NAN).is_nan());
        assert!(sqm_to_luwang(f64::NAN).is_nan());
    }

    #[test]
    fn test_length_unit_factors() {
        assert_eq!(LengthUnit::Tali.convert(1.0, LengthUnit::Meter), 500.0);
        assert!(is_close!(LengthUnit::Meter.convert(150.0, LengthUnit::Buhol), 3.0));
        assert!(is_close!(LengthUnit::Buhol.convert(25.0, LengthUnit::Tali), 2.5));
        assert_eq!(LengthUnit::Buhol.conversion_factor(LengthUnit::Buhol), 1.0);
    }

    #[test]
    fn test_length_unit_matches_primitives() {
        let value = 37.0;
        assert_eq!(
            LengthUnit::Buhol.convert(value, LengthUnit::Meter),
            buhol_to_meters(value)
        );
        assert!(is_close!(
            LengthUnit::Buhol.convert(value, LengthUnit::Tali),
            buhol_to_tali(value)
        ));
    }

    #[test]
    fn test_area_unit_factors() {
        assert_eq!(AreaUnit::Luwang.convert(2.0, AreaUnit::SquareMeter), 500_000.0);
        assert!(is_close!(
            AreaUnit::SquareMeter.convert(125_000.0, AreaUnit::Luwang),
            0.5
        ));
    }

    #[test]
    fn test_unit_display_and_serde() {
        assert_eq!(LengthUnit::Buhol.to_string(), "buhol");
        assert_eq!(AreaUnit::SquareMeter.to_string(), "sqm");
        assert_eq!(
            serde_json::to_string(&AreaUnit::SquareMeter).unwrap(),
            "\"sqm\""
        );
        let unit: LengthUnit = serde_json::from_str("\"tali\"").unwrap();
        assert_eq!(unit, LengthUnit::Tali);
    }
}
