//! Form inputs and the result handed to the persistence layer.

use crate::kinds::DimensionField;
use luwang_core::AreaBreakdown;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Dimension values in buhol, keyed by field.
///
/// Serialized as a plain object, e.g. `{"length": 10, "width": 5}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionInputs(BTreeMap<DimensionField, f64>);

impl DimensionInputs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    #[must_use]
    pub fn with(mut self, field: DimensionField, buhol: f64) -> Self {
        self.set(field, buhol);
        self
    }

    pub fn set(&mut self, field: DimensionField, buhol: f64) {
        self.0.insert(field, buhol);
    }

    pub fn remove(&mut self, field: DimensionField) -> Option<f64> {
        self.0.remove(&field)
    }

    pub fn get(&self, field: DimensionField) -> Option<f64> {
        self.0.get(&field).copied()
    }

    /// Value of `field`, or zero when it was never entered.
    pub fn value_or_zero(&self, field: DimensionField) -> f64 {
        self.get(field).unwrap_or(0.0)
    }

    pub fn contains(&self, field: DimensionField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DimensionField, f64)> + '_ {
        self.0.iter().map(|(field, value)| (*field, *value))
    }
}

impl FromIterator<(DimensionField, f64)> for DimensionInputs {
    fn from_iter<I: IntoIterator<Item = (DimensionField, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(DimensionField, f64); N]> for DimensionInputs {
    fn from(pairs: [(DimensionField, f64); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Area figures stored on a plot record.
///
/// The hectare-equivalent computed by the shape calculators is dropped
/// here; plot records only carry square meters and luwang.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub area_sqm: f64,
    pub total_luwang: f64,
}

impl From<AreaBreakdown> for CalculationResult {
    fn from(area: AreaBreakdown) -> Self {
        Self {
            area_sqm: area.area_sqm,
            total_luwang: area.luwang,
        }
    }
}
