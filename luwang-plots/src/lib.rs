//! Plot form layer for traditional land measurement.
//!
//! This crate sits between the plot form (or any other caller that stores
//! plot areas) and [`luwang_core`]. It turns the form's shape selection and
//! named buhol inputs into a typed [`Shape`](luwang_core::Shape), and offers:
//!
//! - [`calculate`]: lenient and strict area calculation
//! - [`validation`]: per-field messages used to gate submission
//! - [`explain`]: tali/buhol renderings and conversion walkthroughs
//! - [`audit`]: a serializable snapshot for audit-log writers
//! - [`config`]: configurable validation limits
//!
//! Calculation and validation are independent. The lenient calculator
//! computes a preview for any input; validity is only established by
//! [`validate_dimensions`] or by using [`calculate_area_strict`].

pub mod audit;
pub mod calculate;
pub mod config;
pub mod explain;
pub mod inputs;
pub mod kinds;
pub mod validation;

pub use audit::{DimensionBreakdown, MeasurementAudit};
pub use calculate::{calculate_area, calculate_area_lenient, calculate_area_strict, resolve_shape};
pub use config::ValidationLimits;
pub use explain::{conversion_explanation, format_buhol_input};
pub use inputs::{CalculationResult, DimensionInputs};
pub use kinds::{measurement_method, DimensionField, MethodLabel, ShapeKind, TriangleMode};
pub use validation::{validate_dimensions, DimensionValidator};
