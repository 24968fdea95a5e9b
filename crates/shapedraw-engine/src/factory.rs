use shapedraw_format::{ParameterRecord, ShapeKind};

use crate::error::ShapeError;
use crate::shape::{Shape, ShapeVariant};

/// Stateless kind → shape dispatch.
///
/// Holds no data; pass a copy wherever shapes are built. Coordinates are not
/// validated here.
#[derive(Debug, Default, Copy, Clone)]
pub struct ShapeFactory;

impl ShapeFactory {
    #[inline]
    pub fn new() -> Self {
        Self
    }

    /// Builds a shape of `kind` holding a copy of `coordinates`.
    pub fn construct(&self, kind: ShapeKind, coordinates: &[f64]) -> Result<Shape, ShapeError> {
        let variant = ShapeVariant::try_from(kind)?;
        Ok(Shape::new(variant, coordinates.to_vec()))
    }

    /// Builds a shape from a decoded record, taking its coordinates.
    pub fn construct_record(&self, record: ParameterRecord) -> Result<Shape, ShapeError> {
        let variant = ShapeVariant::try_from(record.kind)?;
        Ok(Shape::new(variant, record.coordinates))
    }
}
