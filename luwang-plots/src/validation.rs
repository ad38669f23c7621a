//! Dimension checks used to gate plot form submission.
//!
//! Validation is separate from calculation: the lenient calculator will
//! happily compute a preview for input that fails here. Each checked field
//! runs these rules in order, and a later failure replaces the message of an
//! earlier one:
//!
//! 1. missing or not greater than zero: `"<Field> must be greater than 0 buhol"`
//! 2. negative: `"<Field> cannot be negative"`
//! 3. fractional: `"<Field> must be a whole number (buhol)"`
//! 4. above the ceiling: `"<Field> cannot exceed 1000 buhol (100 tali)"`
//!
//! Only the fields of the selected shape (and triangle mode) are checked.

use crate::calculate::resolve_shape;
use crate::config::ValidationLimits;
use crate::inputs::{CalculationResult, DimensionInputs};
use crate::kinds::{DimensionField, ShapeKind, TriangleMode};
use log::debug;
use luwang_core::conversion::buhol_to_tali;
use luwang_core::{FieldErrors, MeasurementError, MeasurementResult};

/// Applies the dimension rules with a given set of limits.
#[derive(Debug, Clone, Default)]
pub struct DimensionValidator {
    limits: ValidationLimits,
}

impl DimensionValidator {
    pub fn new(limits: ValidationLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ValidationLimits {
        &self.limits
    }

    /// Returns one message per invalid field; empty when everything passes.
    pub fn validate(
        &self,
        kind: ShapeKind,
        inputs: &DimensionInputs,
        mode: Option<TriangleMode>,
    ) -> FieldErrors {
        let mut errors = FieldErrors::new();
        for &field in kind.fields(mode.unwrap_or_default()) {
            if let Some(message) = self.check_field(field, inputs.get(field)) {
                errors.insert(field.key(), message);
            }
        }
        if !errors.is_empty() {
            debug!("{kind} dimensions failed validation: {errors}");
        }
        errors
    }

    /// Message for a single field, or `None` when the value is acceptable.
    pub fn check_field(&self, field: DimensionField, value: Option<f64>) -> Option<String> {
        let label = field.label();
        let not_positive = || format!("{label} must be greater than 0 buhol");
        let Some(value) = value else {
            return Some(not_positive());
        };

        let mut message = None;
        if value <= 0.0 || value.is_nan() {
            message = Some(not_positive());
        }
        if value < 0.0 {
            message = Some(format!("{label} cannot be negative"));
        }
        if value.fract() != 0.0 {
            message = Some(format!("{label} must be a whole number (buhol)"));
        }
        if value > self.limits.max_buhol {
            message = Some(format!(
                "{label} cannot exceed {} buhol ({} tali)",
                self.limits.max_buhol,
                buhol_to_tali(self.limits.max_buhol)
            ));
        }
        message
    }

    /// Validates, then computes the area of a selected shape.
    ///
    /// # Errors
    ///
    /// See [`calculate_area_strict`](crate::calculate::calculate_area_strict).
    pub fn calculate_strict(
        &self,
        kind: ShapeKind,
        inputs: &DimensionInputs,
        mode: Option<TriangleMode>,
    ) -> MeasurementResult<CalculationResult> {
        let shape = resolve_shape(kind, inputs, mode).ok_or(MeasurementError::ShapeNotSelected)?;

        let errors = self.validate(kind, inputs, mode);
        if !errors.is_empty() {
            return Err(MeasurementError::Validation(errors));
        }
        shape.check_geometry()?;

        Ok(shape.area().into())
    }
}

/// Validates dimensions against the default limits.
///
/// # Example
///
/// ```
/// use luwang_plots::{validate_dimensions, DimensionField, DimensionInputs, ShapeKind};
///
/// let inputs = DimensionInputs::new().with(DimensionField::Side, 2.5);
/// let errors = validate_dimensions(ShapeKind::Square, &inputs, None);
/// assert_eq!(errors.get("side"), Some("Side must be a whole number (buhol)"));
/// ```
pub fn validate_dimensions(
    kind: ShapeKind,
    inputs: &DimensionInputs,
    mode: Option<TriangleMode>,
) -> FieldErrors {
    DimensionValidator::default().validate(kind, inputs, mode)
}
