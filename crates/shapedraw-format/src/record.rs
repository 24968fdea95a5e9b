use crate::kind::ShapeKind;
use crate::{COORDINATE_WIDTH, TYPE_WIDTH};

/// One decoded line: a shape kind and its coordinates in encoding order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterRecord {
    pub kind: ShapeKind,
    pub coordinates: Vec<f64>,
}

impl ParameterRecord {
    #[inline]
    pub fn new(kind: ShapeKind, coordinates: Vec<f64>) -> Self {
        Self { kind, coordinates }
    }

    /// Encodes the record back into a fixed-width line.
    ///
    /// Returns `None` for `Undefined` or when a value's shortest text form
    /// does not fit in one coordinate field.
    pub fn encode(&self) -> Option<String> {
        encode(self.kind, &self.coordinates)
    }
}

/// Builds a fixed-width line from a kind and coordinates, right-aligning
/// every value in its field.
pub fn encode(kind: ShapeKind, coordinates: &[f64]) -> Option<String> {
    let code = kind.code()?;
    let mut line = String::with_capacity(TYPE_WIDTH + coordinates.len() * COORDINATE_WIDTH);
    line.push_str(&format!("{:0width$}", code, width = TYPE_WIDTH));
    for value in coordinates {
        let text = value.to_string();
        if text.chars().count() > COORDINATE_WIDTH {
            return None;
        }
        line.push_str(&format!("{:>width$}", text, width = COORDINATE_WIDTH));
    }
    Some(line)
}
