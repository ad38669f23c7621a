//! Area calculation entry points for the plot form.
//!
//! Two policies are offered:
//!
//! - [`calculate_area_lenient`] (also exported as [`calculate_area`]) never
//!   fails. Missing dimensions count as zero and an unset shape yields a zero
//!   result, which suits a form that previews the area while it is edited.
//!   It does **not** imply the inputs are valid; run
//!   [`validate_dimensions`](crate::validation::validate_dimensions) before
//!   persisting.
//! - [`calculate_area_strict`] refuses an unset shape, invalid dimensions and
//!   impossible triangles. Prefer it for call sites that are not live forms.

use crate::inputs::{CalculationResult, DimensionInputs};
use crate::kinds::{DimensionField, ShapeKind, TriangleMode};
use crate::validation::DimensionValidator;
use log::debug;
use luwang_core::{MeasurementResult, Shape, TriangleDimensions};

/// Builds the typed shape for a form selection, or `None` for an unset shape.
///
/// Absent dimensions are read as zero. A triangle without a mode is
/// measured by base and height.
pub fn resolve_shape(
    kind: ShapeKind,
    inputs: &DimensionInputs,
    mode: Option<TriangleMode>,
) -> Option<Shape> {
    let value = |field| inputs.value_or_zero(field);
    let shape = match kind {
        ShapeKind::Square => Shape::Square {
            side: value(DimensionField::Side),
        },
        ShapeKind::Rectangle => Shape::Rectangle {
            length: value(DimensionField::Length),
            width: value(DimensionField::Width),
        },
        ShapeKind::Triangle => Shape::Triangle(match mode.unwrap_or_default() {
            TriangleMode::BaseHeight => TriangleDimensions::BaseHeight {
                base: value(DimensionField::Base),
                height: value(DimensionField::Height),
            },
            TriangleMode::ThreeSides => TriangleDimensions::ThreeSides {
                a: value(DimensionField::SideA),
                b: value(DimensionField::SideB),
                c: value(DimensionField::SideC),
            },
        }),
        ShapeKind::Circle => Shape::Circle {
            radius: value(DimensionField::Radius),
        },
        ShapeKind::Unset => return None,
    };
    Some(shape)
}

/// Computes the plot area, treating anything missing as zero.
///
/// # Example
///
/// ```
/// use luwang_plots::{calculate_area_lenient, DimensionField, DimensionInputs, ShapeKind};
///
/// let inputs = DimensionInputs::new().with(DimensionField::Side, 10.0);
/// let result = calculate_area_lenient(ShapeKind::Square, &inputs, None);
/// assert_eq!(result.area_sqm, 250_000.0);
/// assert_eq!(result.total_luwang, 1.0);
///
/// let nothing = calculate_area_lenient(ShapeKind::Unset, &DimensionInputs::new(), None);
/// assert_eq!(nothing.area_sqm, 0.0);
/// ```
pub fn calculate_area_lenient(
    kind: ShapeKind,
    inputs: &DimensionInputs,
    mode: Option<TriangleMode>,
) -> CalculationResult {
    match resolve_shape(kind, inputs, mode) {
        Some(shape) => shape.area().into(),
        None => {
            debug!("no plot shape selected; returning zero area");
            CalculationResult::default()
        }
    }
}

/// Alias of [`calculate_area_lenient`], the policy used by the plot form.
pub fn calculate_area(
    kind: ShapeKind,
    inputs: &DimensionInputs,
    mode: Option<TriangleMode>,
) -> CalculationResult {
    calculate_area_lenient(kind, inputs, mode)
}

/// Computes the plot area only for a selected shape with valid dimensions.
///
/// Uses the default [`ValidationLimits`](crate::config::ValidationLimits);
/// see [`DimensionValidator::calculate_strict`] for custom limits.
///
/// # Errors
///
/// - [`ShapeNotSelected`](luwang_core::MeasurementError::ShapeNotSelected)
///   for an unset shape
/// - [`Validation`](luwang_core::MeasurementError::Validation) carrying the
///   per-field messages when any dimension is invalid
/// - [`InvalidGeometry`](luwang_core::MeasurementError::InvalidGeometry)
///   when three sides cannot form a triangle
pub fn calculate_area_strict(
    kind: ShapeKind,
    inputs: &DimensionInputs,
    mode: Option<TriangleMode>,
) -> MeasurementResult<CalculationResult> {
    DimensionValidator::default().calculate_strict(kind, inputs, mode)
}
