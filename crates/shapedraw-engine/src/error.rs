use std::fmt;

use shapedraw_format::{DecodeError, ShapeKind};

/// A line-level failure: the line could not become a shape.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeError {
    Decode(DecodeError),
    /// The factory was asked to build a kind it has no constructor for.
    UnsupportedKind(ShapeKind),
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeError::Decode(e) => write!(f, "{}", e),
            ShapeError::UnsupportedKind(kind) => write!(f, "cannot construct shape of kind {}", kind),
        }
    }
}

impl std::error::Error for ShapeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ShapeError::Decode(e) => Some(e),
            ShapeError::UnsupportedKind(_) => None,
        }
    }
}

impl From<DecodeError> for ShapeError {
    fn from(e: DecodeError) -> Self {
        ShapeError::Decode(e)
    }
}
