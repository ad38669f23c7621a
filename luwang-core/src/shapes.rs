//! Plot shape area calculators.
//!
//! Every calculator follows the same three steps: convert each buhol
//! dimension to meters, apply the planar area formula in meters, then
//! derive luwang and the hectare-equivalent from the square meters.
//!
//! | Shape | Inputs (buhol) | Area |
//! |-------|----------------|------|
//! | Square | side | $s^2$ |
//! | Rectangle | length, width | $l \cdot w$ |
//! | Triangle | base, height | $b \cdot h / 2$ |
//! | Triangle | a, b, c | Heron's formula |
//! | Circle | radius | $\pi r^2$ |
//!
//! # Invalid triangles
//!
//! When three sides violate the triangle inequality the Heron radicand is
//! negative. [`calculate_triangle_three_sides`] clamps it to zero so the
//! area is `0.0` and never `NaN`; use [`check_triangle_inequality`] to
//! reject such input instead.

use crate::conversion::{buhol_to_meters, luwang_to_hectare, sqm_to_luwang};
use crate::errors::{MeasurementError, MeasurementResult};
use log::warn;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Area of a plot in every unit a shape calculator produces.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AreaBreakdown {
    pub area_sqm: f64,
    pub luwang: f64,
    pub hectare: f64,
}

impl AreaBreakdown {
    /// Builds the breakdown from an area already expressed in square meters.
    pub fn from_sqm(area_sqm: f64) -> Self {
        let luwang = sqm_to_luwang(area_sqm);
        Self {
            area_sqm,
            luwang,
            hectare: luwang_to_hectare(luwang),
        }
    }
}

pub fn calculate_square(side: f64) -> AreaBreakdown {
    let side_m = buhol_to_meters(side);
    AreaBreakdown::from_sqm(side_m * side_m)
}

pub fn calculate_rectangle(length: f64, width: f64) -> AreaBreakdown {
    AreaBreakdown::from_sqm(buhol_to_meters(length) * buhol_to_meters(width))
}

pub fn calculate_triangle_base_height(base: f64, height: f64) -> AreaBreakdown {
    AreaBreakdown::from_sqm(buhol_to_meters(base) * buhol_to_meters(height) / 2.0)
}

/// Triangle area from three sides using Heron's formula.
///
/// $$ s = \frac{a + b + c}{2}, \quad A = \sqrt{s(s-a)(s-b)(s-c)} $$
///
/// A negative radicand is clamped to zero and logged.
pub fn calculate_triangle_three_sides(a: f64, b: f64, c: f64) -> AreaBreakdown {
    let (a_m, b_m, c_m) = (buhol_to_meters(a), buhol_to_meters(b), buhol_to_meters(c));
    let radicand = heron_radicand(a_m, b_m, c_m);

    let area_sqm = if radicand > 0.0 {
        radicand.sqrt()
    } else if radicand == 0.0 {
        0.0
    } else {
        // Negative or NaN
        warn!("sides {a_m} m, {b_m} m, {c_m} m do not form a triangle; area clamped to zero");
        0.0
    };
    AreaBreakdown::from_sqm(area_sqm)
}

pub fn calculate_circle(radius: f64) -> AreaBreakdown {
    let radius_m = buhol_to_meters(radius);
    AreaBreakdown::from_sqm(PI * radius_m * radius_m)
}

fn heron_radicand(a: f64, b: f64, c: f64) -> f64 {
    let s = (a + b + c) / 2.0;
    s * (s - a) * (s - b) * (s - c)
}

/// Fails with [`MeasurementError::InvalidGeometry`] when the sides (buhol)
/// strictly violate the triangle inequality.
///
/// Degenerate triangles (one side equal to the sum of the other two) pass
/// and have zero area.
pub fn check_triangle_inequality(a: f64, b: f64, c: f64) -> MeasurementResult<()> {
    let (a_m, b_m, c_m) = (buhol_to_meters(a), buhol_to_meters(b), buhol_to_meters(c));
    if a_m + b_m < c_m || a_m + c_m < b_m || b_m + c_m < a_m {
        return Err(MeasurementError::InvalidGeometry {
            a: a_m,
            b: b_m,
            c: c_m,
        });
    }
    Ok(())
}

/// Dimensions of a triangular plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TriangleDimensions {
    BaseHeight { base: f64, height: f64 },
    ThreeSides { a: f64, b: f64, c: f64 },
}

/// A plot shape with its dimensions in buhol.
///
/// # Example
///
/// ```
/// use luwang_core::Shape;
///
/// let area = Shape::Rectangle { length: 10.0, width: 5.0 }.area();
/// assert_eq!(area.area_sqm, 125_000.0);
/// assert_eq!(area.luwang, 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum Shape {
    Square { side: f64 },
    Rectangle { length: f64, width: f64 },
    Triangle(TriangleDimensions),
    Circle { radius: f64 },
}

impl Shape {
    pub fn area(&self) -> AreaBreakdown {
        match *self {
            Shape::Square { side } => calculate_square(side),
            Shape::Rectangle { length, width } => calculate_rectangle(length, width),
            Shape::Triangle(TriangleDimensions::BaseHeight { base, height }) => {
                calculate_triangle_base_height(base, height)
            }
            Shape::Triangle(TriangleDimensions::ThreeSides { a, b, c }) => {
                calculate_triangle_three_sides(a, b, c)
            }
            Shape::Circle { radius } => calculate_circle(radius),
        }
    }

    /// Dimension keys this shape consumes, in display order.
    pub fn required_fields(&self) -> &'static [&'static str] {
        match self {
            Shape::Square { .. } => &["side"],
            Shape::Rectangle { .. } => &["length", "width"],
            Shape::Triangle(TriangleDimensions::BaseHeight { .. }) => &["base", "height"],
            Shape::Triangle(TriangleDimensions::ThreeSides { .. }) => &["sideA", "sideB", "sideC"],
            Shape::Circle { .. } => &["radius"],
        }
    }

    /// Dimension values in the same order as [`Shape::required_fields`].
    pub fn dimensions(&self) -> Vec<f64> {
        match *self {
            Shape::Square { side } => vec![side],
            Shape::Rectangle { length, width } => vec![length, width],
            Shape::Triangle(TriangleDimensions::BaseHeight { base, height }) => vec![base, height],
            Shape::Triangle(TriangleDimensions::ThreeSides { a, b, c }) => vec![a, b, c],
            Shape::Circle { radius } => vec![radius],
        }
    }

    /// Rejects geometry that has no real area.
    ///
    /// Only three-sided triangles can fail; every other shape accepts any
    /// dimensions.
    pub fn check_geometry(&self) -> MeasurementResult<()> {
        match *self {
            Shape::Triangle(TriangleDimensions::ThreeSides { a, b, c }) => {
                check_triangle_inequality(a, b, c)
            }
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use is_close::is_close;

    #[test]
    fn test_square() {
        let area = calculate_square(10.0);
        assert_eq!(area.area_sqm, 250_000.0);
        assert_eq!(area.luwang, 1.0);
        assert_eq!(area.hectare, 0.05);
    }

    #[test]
    fn test_rectangle() {
        let area = calculate_rectangle(10.0, 5.0);
        assert_eq!(area.area_sqm, 125_000.0);
        assert_eq!(area.luwang, 0.5);
    }

    #[test]
    fn test_square_matches_rectangle() {
        for s in [0.0, 1.0, 2.5, 10.0, 333.0, 1000.0] {
            assert_eq!(
                calculate_square(s).area_sqm,
                calculate_rectangle(s, s).area_sqm
            );
        }
    }

    #[test]
    fn test_triangle_base_height() {
        let area = calculate_triangle_base_height(20.0, 10.0);
        assert_eq!(area.area_sqm, 250_000.0);
        assert_eq!(area.luwang, 1.0);
    }

    #[test]
    fn test_triangle_equilateral() {
        let area = calculate_triangle_three_sides(10.0, 10.0, 10.0);
        let expected = (750.0_f64 * 250.0 * 250.0 * 250.0).sqrt();
        assert!(is_close!(area.area_sqm, expected));
        assert!((area.area_sqm - 108_253.18).abs() < 0.01);
        assert!((area.luwang - 0.4330).abs() < 1e-4);
    }

    #[test]
    fn test_triangle_right_angle_matches_base_height() {
        // 3-4-5 right triangle
        let heron = calculate_triangle_three_sides(3.0, 4.0, 5.0);
        let base_height = calculate_triangle_base_height(3.0, 4.0);
        assert!(is_close!(heron.area_sqm, base_height.area_sqm));
    }

    #[test]
    fn test_invalid_triangle_clamps_to_zero() {
        let area = calculate_triangle_three_sides(1.0, 2.0, 10.0);
        assert_eq!(area.area_sqm, 0.0);
        assert_eq!(area.luwang, 0.0);
        assert!(!area.hectare.is_nan());
    }

    #[test]
    fn test_degenerate_triangle_is_zero() {
        let area = calculate_triangle_three_sides(1.0, 2.0, 3.0);
        assert_eq!(area.area_sqm, 0.0);
        assert!(check_triangle_inequality(1.0, 2.0, 3.0).is_ok());
    }

    #[test]
    fn test_triangle_inequality_error() {
        let err = check_triangle_inequality(1.0, 2.0, 10.0).unwrap_err();
        assert_eq!(
            err,
            MeasurementError::InvalidGeometry {
                a: 50.0,
                b: 100.0,
                c: 500.0
            }
        );
        assert!(check_triangle_inequality(10.0, 1.0, 2.0).is_err());
        assert!(check_triangle_inequality(2.0, 10.0, 1.0).is_err());
    }

    #[test]
    fn test_circle() {
        let area = calculate_circle(10.0);
        assert!(is_close!(area.area_sqm, PI * 250_000.0));
        assert!((area.area_sqm - 785_398.16).abs() < 0.01);
        assert!((area.luwang - 3.1416).abs() < 1e-4);
    }

    #[test]
    fn test_zero_dimensions() {
        assert_eq!(calculate_square(0.0), AreaBreakdown::default());
        assert_eq!(calculate_circle(0.0), AreaBreakdown::default());
        assert_eq!(calculate_rectangle(0.0, 7.0).area_sqm, 0.0);
    }

    #[test]
    fn test_monotonic_in_each_dimension() {
        let steps = [0.5, 1.0, 2.0, 7.0, 10.0, 99.0, 1000.0];
        for pair in steps.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            assert!(calculate_square(lo).area_sqm < calculate_square(hi).area_sqm);
            assert!(calculate_rectangle(lo, 3.0).area_sqm < calculate_rectangle(hi, 3.0).area_sqm);
            assert!(calculate_rectangle(3.0, lo).area_sqm < calculate_rectangle(3.0, hi).area_sqm);
            assert!(
                calculate_triangle_base_height(lo, 4.0).area_sqm
                    < calculate_triangle_base_height(hi, 4.0).area_sqm
            );
            assert!(
                calculate_triangle_base_height(4.0, lo).area_sqm
                    < calculate_triangle_base_height(4.0, hi).area_sqm
            );
            assert!(calculate_circle(lo).area_sqm < calculate_circle(hi).area_sqm);
        }
    }

    #[test]
    fn test_shape_dispatch() {
        let shapes = [
            (Shape::Square { side: 10.0 }, 250_000.0),
            (
                Shape::Rectangle {
                    length: 10.0,
                    width: 5.0,
                },
                125_000.0,
            ),
            (
                Shape::Triangle(TriangleDimensions::BaseHeight {
                    base: 20.0,
                    height: 10.0,
                }),
                250_000.0,
            ),
        ];
        for (shape, expected) in shapes {
            assert_eq!(shape.area().area_sqm, expected, "{shape:?}");
        }
    }

    #[test]
    fn test_required_fields_match_dimensions() {
        let shapes = [
            Shape::Square { side: 1.0 },
            Shape::Rectangle {
                length: 1.0,
                width: 2.0,
            },
            Shape::Triangle(TriangleDimensions::BaseHeight {
                base: 1.0,
                height: 2.0,
            }),
            Shape::Triangle(TriangleDimensions::ThreeSides {
                a: 1.0,
                b: 2.0,
                c: 3.0,
            }),
            Shape::Circle { radius: 1.0 },
        ];
        for shape in shapes {
            assert_eq!(shape.required_fields().len(), shape.dimensions().len());
        }
    }

    #[test]
    fn test_check_geometry() {
        assert!(Shape::Square { side: -1.0 }.check_geometry().is_ok());
        let bad = Shape::Triangle(TriangleDimensions::ThreeSides {
            a: 1.0,
            b: 1.0,
            c: 5.0,
        });
        assert!(matches!(
            bad.check_geometry(),
            Err(MeasurementError::InvalidGeometry { .. })
        ));
    }

    #[test]
    fn test_shape_serialization() {
        let shape = Shape::Triangle(TriangleDimensions::ThreeSides {
            a: 3.0,
            b: 4.0,
            c: 5.0,
        });
        let json = serde_json::to_string(&shape).unwrap();
        let restored: Shape = serde_json::from_str(&json).unwrap();
        assert_eq!(shape, restored);
    }
}
