use std::fmt;

/// Why a line could not be decoded into a [`ParameterRecord`](crate::ParameterRecord).
///
/// Widths and columns count characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The line is shorter than one type field plus one coordinate field.
    TooShort { width: usize },
    /// The part after the type field is not a whole number of coordinate fields.
    MisalignedCoordinates { width: usize },
    /// The type field is not an integer.
    NotANumber { field: String },
    /// The type field is an integer but names no known shape.
    UnknownShapeType { code: i64 },
    /// A coordinate field is not a decimal number.
    InvalidCoordinate {
        /// 0-based coordinate index.
        index: usize,
        /// 1-based column where the field starts.
        column: usize,
        field: String,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::TooShort { width } => write!(
                f,
                "line too short ({} chars): must hold a type and at least one point",
                width
            ),
            DecodeError::MisalignedCoordinates { width } => write!(
                f,
                "invalid number of points: {} chars after the type is not a multiple of {}",
                width.saturating_sub(crate::TYPE_WIDTH),
                crate::COORDINATE_WIDTH
            ),
            DecodeError::NotANumber { field } => {
                write!(f, "shape type {:?} is not a number", field)
            }
            DecodeError::UnknownShapeType { code } => write!(f, "invalid shape type {}", code),
            DecodeError::InvalidCoordinate { index, column, field } => write!(
                f,
                "coordinate {} at column {} is not a number: {:?}",
                index, column, field
            ),
        }
    }
}

impl std::error::Error for DecodeError {}
