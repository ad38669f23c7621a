use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Error type for measurement operations that refuse invalid input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MeasurementError {
    #[error("No plot shape selected")]
    ShapeNotSelected,
    #[error("Sides {a} m, {b} m and {c} m do not form a triangle")]
    InvalidGeometry { a: f64, b: f64, c: f64 },
    #[error("Invalid dimensions: {0}")]
    Validation(FieldErrors),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience type for `Result<T, MeasurementError>`.
pub type MeasurementResult<T> = Result<T, MeasurementError>;

/// Mapping from a dimension key (e.g. `sideA`) to a user-facing message.
///
/// An empty mapping means every checked field is valid. Keys are kept in
/// sorted order so the rendering is stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, String>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a message for `field`, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.insert(field.into(), message.into());
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{field}: {message}")?;
            first = false;
        }
        Ok(())
    }
}
