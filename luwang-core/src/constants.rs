//! Fixed conversion table for traditional land measurement.
//!
//! These values never change at runtime. Every conversion in the crate is
//! derived from them.

/// Meters in one buhol.
pub const BUHOL_TO_METERS: f64 = 50.0;

/// Buhol in one tali.
pub const TALI_TO_BUHOL: f64 = 10.0;

/// Meters in one tali (500 m).
pub const TALI_TO_METERS: f64 = BUHOL_TO_METERS * TALI_TO_BUHOL;

/// Square meters in one luwang, i.e. one square tali (250,000 m²).
pub const LUWANG_TO_SQM: f64 = TALI_TO_METERS * TALI_TO_METERS;

/// Luwang per hectare-equivalent.
///
/// This is the customary figure used on plot records, not a physical
/// relation between square meters and hectares.
pub const LUWANG_PER_HECTARE: f64 = 20.0;
