//! Decoder and record types for the **fixed-width shape line format**.
//!
//! A line is a 4-character decimal type code followed by zero or more
//! 8-character decimal coordinate fields, with no delimiters:
//!
//! ```text
//! 0001     2.5     3.5
//! ^^^^^^^^^^^^^^^^^^^^
//! type|coord 0 |coord 1
//! ```
//!
//! This crate is dependency-free so validators and editor tooling can use it
//! without the engine.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`kind`] | `ShapeKind` and type codes |
//! | [`record`] | `ParameterRecord`, `encode` |
//! | [`error`] | `DecodeError` |
//! | [`decoder`] | `decode` entry point |
//!
//! # Quick start
//!
//! ```rust
//! use shapedraw_format::{decode, ShapeKind};
//!
//! let rec = decode("0001     2.5     3.5").unwrap();
//! assert_eq!(rec.kind, ShapeKind::Circle);
//! assert_eq!(rec.coordinates, vec![2.5, 3.5]);
//! ```

pub mod decoder;
pub mod error;
pub mod kind;
pub mod record;

pub use decoder::decode;
pub use error::DecodeError;
pub use kind::ShapeKind;
pub use record::{encode, ParameterRecord};

/// Width of the type code field.
pub const TYPE_WIDTH: usize = 4;
/// Width of every coordinate field.
pub const COORDINATE_WIDTH: usize = 8;
/// Shortest accepted line: one type field plus one coordinate field.
pub const MIN_LINE_WIDTH: usize = TYPE_WIDTH + COORDINATE_WIDTH;
