use crate::error::DecodeError;
use crate::kind::ShapeKind;
use crate::record::ParameterRecord;
use crate::{COORDINATE_WIDTH, MIN_LINE_WIDTH, TYPE_WIDTH};

// ── FieldReader ───────────────────────────────────────────────────────────

/// Cursor that cuts a line into fixed-width fields.
///
/// Widths count `char`s so multi-byte input never splits a code point.
struct FieldReader<'s> {
    src: &'s str,
    pos: usize,
    /// 1-based column of the next field.
    column: usize,
}

impl<'s> FieldReader<'s> {
    fn new(src: &'s str) -> Self {
        Self { src, pos: 0, column: 1 }
    }

    fn is_empty(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Returns the next `width` characters and the column they start at.
    fn take(&mut self, width: usize) -> (&'s str, usize) {
        let rest = &self.src[self.pos..];
        let len = rest
            .char_indices()
            .nth(width)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let column = self.column;
        self.pos += len;
        self.column += width;
        (&rest[..len], column)
    }
}

// ── Decoding ──────────────────────────────────────────────────────────────

/// Validates a raw line and decodes it into a [`ParameterRecord`].
///
/// Checks run in a fixed order so a given line always fails the same way:
/// length, alignment, type field, then each coordinate field left to right.
pub fn decode(line: &str) -> Result<ParameterRecord, DecodeError> {
    let width = line.chars().count();
    if width < MIN_LINE_WIDTH {
        return Err(DecodeError::TooShort { width });
    }
    if (width - TYPE_WIDTH) % COORDINATE_WIDTH != 0 {
        return Err(DecodeError::MisalignedCoordinates { width });
    }

    let mut reader = FieldReader::new(line);

    let (type_field, _) = reader.take(TYPE_WIDTH);
    let kind = parse_kind(type_field)?;

    let mut coordinates = Vec::with_capacity((width - TYPE_WIDTH) / COORDINATE_WIDTH);
    while !reader.is_empty() {
        let (field, column) = reader.take(COORDINATE_WIDTH);
        let value = field.trim().parse::<f64>().map_err(|_| DecodeError::InvalidCoordinate {
            index: coordinates.len(),
            column,
            field: field.to_string(),
        })?;
        coordinates.push(value);
    }

    Ok(ParameterRecord { kind, coordinates })
}

fn parse_kind(field: &str) -> Result<ShapeKind, DecodeError> {
    let code = field
        .trim()
        .parse::<i64>()
        .map_err(|_| DecodeError::NotANumber { field: field.to_string() })?;
    let kind = ShapeKind::from_code(code);
    if !kind.is_defined() {
        return Err(DecodeError::UnknownShapeType { code });
    }
    Ok(kind)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reader_splits_on_char_boundaries() {
        let mut r = FieldReader::new("ab\u{e9}d12345678");
        assert_eq!(r.take(4), ("ab\u{e9}d", 1));
        assert_eq!(r.take(8), ("12345678", 5));
        assert!(r.is_empty());
    }

    #[test]
    fn parse_kind_maps_defined_codes_only() {
        assert_eq!(parse_kind("0001"), Ok(ShapeKind::Circle));
        assert_eq!(parse_kind("   3"), Ok(ShapeKind::Square));
        for code in ["0000", "0004", "-002"] {
            assert!(matches!(parse_kind(code), Err(DecodeError::UnknownShapeType { .. })));
        }
    }

    #[test]
    fn reader_tracks_columns() {
        let mut r = FieldReader::new("0001aaaaaaaabbbbbbbb");
        r.take(4);
        assert_eq!(r.take(8).1, 5);
        assert_eq!(r.take(8).1, 13);
    }
}
