//! Human-readable renderings of buhol inputs for previews and audit logs.

use crate::inputs::DimensionInputs;
use crate::kinds::{DimensionField, ShapeKind, TriangleMode};
use luwang_core::constants::{BUHOL_TO_METERS, LUWANG_TO_SQM, TALI_TO_BUHOL, TALI_TO_METERS};
use luwang_core::conversion::buhol_to_meters;

/// Renders a buhol count as tali plus leftover buhol.
///
/// ```
/// use luwang_plots::format_buhol_input;
///
/// assert_eq!(format_buhol_input(23.0), "2 tali 3 buhol");
/// assert_eq!(format_buhol_input(10.0), "1 tali");
/// assert_eq!(format_buhol_input(7.0), "7 buhol");
/// assert_eq!(format_buhol_input(0.0), "0 buhol");
/// ```
pub fn format_buhol_input(value: f64) -> String {
    let tali = (value / TALI_TO_BUHOL).floor();
    let remainder = value % TALI_TO_BUHOL;

    if tali == 0.0 {
        format!("{remainder} buhol")
    } else if remainder == 0.0 {
        format!("{tali} tali")
    } else {
        format!("{tali} tali {remainder} buhol")
    }
}

/// Step-by-step breakdown of how the form's inputs convert to meters.
///
/// The first three lines define the units; the rest describe each
/// dimension of the selected shape. Output is identical for identical input.
pub fn conversion_explanation(kind: ShapeKind, inputs: &DimensionInputs) -> Vec<String> {
    let mut lines = vec![
        format!("1 buhol = {BUHOL_TO_METERS} meters"),
        format!("1 tali = {TALI_TO_BUHOL} buhol = {TALI_TO_METERS} meters"),
        format!("1 luwang = 1 tali x 1 tali = {LUWANG_TO_SQM} sqm"),
    ];

    for field in explained_fields(kind, inputs) {
        let buhol = inputs.value_or_zero(field);
        lines.push(format!(
            "{}: {} = {} meters",
            field.label(),
            format_buhol_input(buhol),
            buhol_to_meters(buhol)
        ));
    }
    lines
}

fn explained_fields(kind: ShapeKind, inputs: &DimensionInputs) -> Vec<DimensionField> {
    match kind {
        // The triangle mode is not part of the explanation request, so show
        // whichever triangle dimensions were entered.
        ShapeKind::Triangle => {
            let entered: Vec<DimensionField> = [TriangleMode::BaseHeight, TriangleMode::ThreeSides]
                .into_iter()
                .flat_map(|mode| kind.fields(mode).iter().copied())
                .filter(|field| inputs.contains(*field))
                .collect();
            if entered.is_empty() {
                kind.fields(TriangleMode::BaseHeight).to_vec()
            } else {
                entered
            }
        }
        _ => kind.fields(TriangleMode::default()).to_vec(),
    }
}
