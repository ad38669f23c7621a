//! Traditional Philippine land measurement for farm plot records.
//!
//! Re-exports [`luwang_core`] (unit conversions and shape areas) and
//! [`luwang_plots`] (the plot form layer) behind a single dependency.
//!
//! ```
//! use luwang::{calculate_area, DimensionField, DimensionInputs, ShapeKind};
//!
//! let inputs = DimensionInputs::new()
//!     .with(DimensionField::Length, 10.0)
//!     .with(DimensionField::Width, 5.0);
//! let result = calculate_area(ShapeKind::Rectangle, &inputs, None);
//! assert_eq!(result.total_luwang, 0.5);
//! ```

pub use luwang_core::{
    constants, conversion, errors, shapes, AreaBreakdown, AreaUnit, FieldErrors, LengthUnit,
    MeasurementError, MeasurementResult, Shape, TriangleDimensions,
};
pub use luwang_plots::{
    audit, calculate, config, explain, inputs, kinds, validation, calculate_area,
    calculate_area_lenient, calculate_area_strict, conversion_explanation, format_buhol_input,
    measurement_method, resolve_shape, validate_dimensions, CalculationResult, DimensionBreakdown,
    DimensionField, DimensionInputs, DimensionValidator, MeasurementAudit, MethodLabel, ShapeKind,
    TriangleMode, ValidationLimits,
};
