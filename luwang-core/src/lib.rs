//! Core conversions for traditional Philippine land measurement.
//!
//! Plots are paced out in *buhol* (50 m) and *tali* (10 buhol), and their
//! area is recorded in *luwang* (one square tali). This crate provides:
//!
//! - [`constants`]: the fixed conversion table
//! - [`conversion`]: scalar conversion primitives and typed length/area units
//! - [`shapes`]: area calculators for the supported plot shapes
//! - [`errors`]: the crate-wide error type
//!
//! Everything here is a pure function of its arguments.

pub mod constants;
pub mod conversion;
pub mod errors;
pub mod shapes;

pub use conversion::{AreaUnit, LengthUnit};
pub use errors::{FieldErrors, MeasurementError, MeasurementResult};
pub use shapes::{AreaBreakdown, Shape, TriangleDimensions};
