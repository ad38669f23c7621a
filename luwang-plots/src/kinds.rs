//! Selectors used by the plot form: shape kind, triangle mode, the named
//! dimension fields and the measurement-method label stored on a plot.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Plot shape selected on the form.
///
/// Parsing never fails: anything unrecognized (including an empty string)
/// becomes [`ShapeKind::Unset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ShapeKind {
    Square,
    Rectangle,
    Triangle,
    Circle,
    #[default]
    Unset,
}

impl ShapeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Rectangle => "rectangle",
            Self::Triangle => "triangle",
            Self::Circle => "circle",
            Self::Unset => "unset",
        }
    }

    /// Dimension fields the shape consumes, in display order.
    ///
    /// `mode` only matters for triangles.
    pub const fn fields(self, mode: TriangleMode) -> &'static [DimensionField] {
        use DimensionField::*;
        match (self, mode) {
            (Self::Square, _) => &[Side],
            (Self::Rectangle, _) => &[Length, Width],
            (Self::Triangle, TriangleMode::BaseHeight) => &[Base, Height],
            (Self::Triangle, TriangleMode::ThreeSides) => &[SideA, SideB, SideC],
            (Self::Circle, _) => &[Radius],
            (Self::Unset, _) => &[],
        }
    }
}

impl FromStr for ShapeKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_ascii_lowercase().as_str() {
            "square" => Self::Square,
            "rectangle" => Self::Rectangle,
            "triangle" => Self::Triangle,
            "circle" => Self::Circle,
            _ => Self::Unset,
        })
    }
}

impl From<String> for ShapeKind {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How a triangular plot was measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriangleMode {
    #[default]
    BaseHeight,
    ThreeSides,
}

/// A named dimension on the plot form, always entered in buhol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DimensionField {
    Side,
    Length,
    Width,
    Base,
    Height,
    SideA,
    SideB,
    SideC,
    Radius,
}

impl DimensionField {
    pub const ALL: [DimensionField; 9] = [
        Self::Side,
        Self::Length,
        Self::Width,
        Self::Base,
        Self::Height,
        Self::SideA,
        Self::SideB,
        Self::SideC,
        Self::Radius,
    ];

    /// Wire key, e.g. `sideA`.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Side => "side",
            Self::Length => "length",
            Self::Width => "width",
            Self::Base => "base",
            Self::Height => "height",
            Self::SideA => "sideA",
            Self::SideB => "sideB",
            Self::SideC => "sideC",
            Self::Radius => "radius",
        }
    }

    /// Label used in messages and explanations, e.g. `Side A`.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Side => "Side",
            Self::Length => "Length",
            Self::Width => "Width",
            Self::Base => "Base",
            Self::Height => "Height",
            Self::SideA => "Side A",
            Self::SideB => "Side B",
            Self::SideC => "Side C",
            Self::Radius => "Radius",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }
}

impl fmt::Display for DimensionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Measurement method recorded alongside a plot's area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MethodLabel {
    SquareTali,
    RectangleTali,
    TriangleBaseHeightBuhol,
    TriangleHeronBuhol,
    CircleBuhol,
}

impl MethodLabel {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::SquareTali => "square_tali",
            Self::RectangleTali => "rectangle_tali",
            Self::TriangleBaseHeightBuhol => "triangle_base_height_buhol",
            Self::TriangleHeronBuhol => "triangle_heron_buhol",
            Self::CircleBuhol => "circle_buhol",
        }
    }
}

impl fmt::Display for MethodLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maps a shape selection to its measurement-method label.
///
/// An unset shape falls back to [`MethodLabel::SquareTali`]; a triangle
/// without a mode is treated as base/height.
pub fn measurement_method(kind: ShapeKind, mode: Option<TriangleMode>) -> MethodLabel {
    match kind {
        ShapeKind::Square | ShapeKind::Unset => MethodLabel::SquareTali,
        ShapeKind::Rectangle => MethodLabel::RectangleTali,
        ShapeKind::Triangle => match mode.unwrap_or_default() {
            TriangleMode::BaseHeight => MethodLabel::TriangleBaseHeightBuhol,
            TriangleMode::ThreeSides => MethodLabel::TriangleHeronBuhol,
        },
        ShapeKind::Circle => MethodLabel::CircleBuhol,
    }
}
