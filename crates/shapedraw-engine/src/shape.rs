//! Shape values produced by the factory.
//!
//! The set of kinds is closed: extend it by adding a [`ShapeVariant`], a
//! label, and a factory arm.

use std::fmt;

use shapedraw_format::ShapeKind;

use crate::error::ShapeError;

/// Identity of a constructible shape. Unlike [`ShapeKind`] there is no
/// undefined variant.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeVariant {
    Circle,
    Triangle,
    Square,
}

impl ShapeVariant {
    pub fn label(self) -> &'static str {
        match self {
            ShapeVariant::Circle   => "Circle",
            ShapeVariant::Triangle => "Triangle",
            ShapeVariant::Square   => "Square",
        }
    }

    pub fn kind(self) -> ShapeKind {
        match self {
            ShapeVariant::Circle   => ShapeKind::Circle,
            ShapeVariant::Triangle => ShapeKind::Triangle,
            ShapeVariant::Square   => ShapeKind::Square,
        }
    }
}

impl TryFrom<ShapeKind> for ShapeVariant {
    type Error = ShapeError;

    fn try_from(kind: ShapeKind) -> Result<Self, Self::Error> {
        match kind {
            ShapeKind::Circle    => Ok(ShapeVariant::Circle),
            ShapeKind::Triangle  => Ok(ShapeVariant::Triangle),
            ShapeKind::Square    => Ok(ShapeVariant::Square),
            ShapeKind::Undefined => Err(ShapeError::UnsupportedKind(kind)),
        }
    }
}

/// A constructed shape owning its coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    variant: ShapeVariant,
    coordinates: Vec<f64>,
}

impl Shape {
    #[inline]
    pub(crate) fn new(variant: ShapeVariant, coordinates: Vec<f64>) -> Self {
        Self { variant, coordinates }
    }

    #[inline]
    pub fn variant(&self) -> ShapeVariant {
        self.variant
    }

    #[inline]
    pub fn kind(&self) -> ShapeKind {
        self.variant.kind()
    }

    #[inline]
    pub fn coordinates(&self) -> &[f64] {
        &self.coordinates
    }

    /// Render text: `"<Kind> drawing: [c1 c2 ... cn]"`.
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} drawing: [", self.variant.label())?;
        for (i, c) in self.coordinates.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str("]")
    }
}
