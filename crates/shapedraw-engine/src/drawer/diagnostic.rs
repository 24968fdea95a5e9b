use std::fmt;

use crate::error::ShapeError;

/// A rejected input line, reported instead of being collected.
#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    /// 1-based position of the line across everything the drawer has ingested.
    pub line_number: usize,
    pub line: String,
    pub error: ShapeError,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error in reading shape at line {}: {} ({:?})",
            self.line_number, self.error, self.line
        )
    }
}

/// Outcome of one [`ShapeDrawer::ingest`](super::ShapeDrawer::ingest) call.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct IngestReport {
    /// Shapes appended by this call.
    pub accepted: usize,
    pub diagnostics: Vec<Diagnostic>,
}

impl IngestReport {
    #[inline]
    pub fn rejected(&self) -> usize {
        self.diagnostics.len()
    }

    #[inline]
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}
