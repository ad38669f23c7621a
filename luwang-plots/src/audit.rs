//! Audit snapshot of a plot measurement.
//!
//! The record bundles everything an audit-log writer needs to reproduce a
//! calculation. Nothing here writes the log; callers serialize the record
//! and attach their own metadata (user, timestamp, plot id).

use crate::calculate::calculate_area_lenient;
use crate::explain::format_buhol_input;
use crate::inputs::{CalculationResult, DimensionInputs};
use crate::kinds::{measurement_method, DimensionField, MethodLabel, ShapeKind, TriangleMode};
use luwang_core::conversion::{buhol_to_meters, buhol_to_tali};
use serde::{Deserialize, Serialize};

/// One dimension expressed in every length unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionBreakdown {
    pub field: DimensionField,
    pub buhol: f64,
    pub meters: f64,
    pub tali: f64,
    /// Mixed rendering, e.g. `2 tali 3 buhol`.
    pub display: String,
}

impl DimensionBreakdown {
    pub fn new(field: DimensionField, buhol: f64) -> Self {
        Self {
            field,
            buhol,
            meters: buhol_to_meters(buhol),
            tali: buhol_to_tali(buhol),
            display: format_buhol_input(buhol),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementAudit {
    pub shape_kind: ShapeKind,
    /// Only set for triangles.
    pub triangle_mode: Option<TriangleMode>,
    pub method: MethodLabel,
    pub inputs: DimensionInputs,
    pub dimensions: Vec<DimensionBreakdown>,
    pub result: CalculationResult,
}

impl MeasurementAudit {
    /// Captures the inputs and the lenient calculation result.
    pub fn capture(kind: ShapeKind, inputs: &DimensionInputs, mode: Option<TriangleMode>) -> Self {
        let mode = mode.unwrap_or_default();
        let dimensions = kind
            .fields(mode)
            .iter()
            .map(|&field| DimensionBreakdown::new(field, inputs.value_or_zero(field)))
            .collect();

        Self {
            shape_kind: kind,
            triangle_mode: (kind == ShapeKind::Triangle).then_some(mode),
            method: measurement_method(kind, Some(mode)),
            inputs: inputs.clone(),
            dimensions,
            result: calculate_area_lenient(kind, inputs, Some(mode)),
        }
    }
}
