//! shapedraw engine crate.
//!
//! Turns decoded shape records into shape values, collects them in input
//! order, and renders them. Line decoding lives in `shapedraw-format`.

pub mod config;
pub mod drawer;
pub mod error;
pub mod factory;
pub mod logging;
pub mod shape;
pub mod source;

pub use drawer::{Diagnostic, IngestReport, ShapeDrawer, ShapeList};
pub use error::ShapeError;
pub use factory::ShapeFactory;
pub use shape::{Shape, ShapeVariant};
pub use shapedraw_format as format;
