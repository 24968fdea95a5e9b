use std::fmt;

/// Shape kind selected by a line's type code.
///
/// `Undefined` is the sentinel for "no known kind"; it is never turned into
/// a shape.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ShapeKind {
    #[default]
    Undefined,
    Circle,
    Triangle,
    Square,
}

impl ShapeKind {
    /// All kinds that can be constructed, in type-code order.
    pub const CONSTRUCTIBLE: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Triangle, ShapeKind::Square];

    /// Maps a numeric type code to its kind. Unknown codes map to `Undefined`.
    pub fn from_code(code: i64) -> Self {
        match code {
            1 => ShapeKind::Circle,
            2 => ShapeKind::Triangle,
            3 => ShapeKind::Square,
            _ => ShapeKind::Undefined,
        }
    }

    /// Type code written in the first field of a line, `None` for `Undefined`.
    pub fn code(self) -> Option<u16> {
        match self {
            ShapeKind::Undefined => None,
            ShapeKind::Circle    => Some(1),
            ShapeKind::Triangle  => Some(2),
            ShapeKind::Square    => Some(3),
        }
    }

    #[inline]
    pub fn is_defined(self) -> bool {
        self != ShapeKind::Undefined
    }

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Undefined => "Undefined",
            ShapeKind::Circle    => "Circle",
            ShapeKind::Triangle  => "Triangle",
            ShapeKind::Square    => "Square",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
