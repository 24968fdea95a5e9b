use std::io::{self, Write};

use crate::shape::Shape;

/// Append-only collection of shapes in insertion order.
///
/// - `push()` is O(1)
/// - iteration and rendering are read-only and may be repeated
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ShapeList {
    items: Vec<Shape>,
}

impl ShapeList {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn push(&mut self, shape: Shape) {
        self.items.push(shape);
    }

    /// Returns shapes in insertion order.
    #[inline]
    pub fn items(&self) -> &[Shape] {
        &self.items
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Writes one render line per shape, front to back.
    pub fn render_all<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for shape in &self.items {
            writeln!(out, "{}", shape)?;
        }
        Ok(())
    }

    /// The render pass as owned strings.
    pub fn rendered(&self) -> impl Iterator<Item = String> + '_ {
        self.items.iter().map(Shape::render)
    }
}

impl<'a> IntoIterator for &'a ShapeList {
    type Item = &'a Shape;
    type IntoIter = std::slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factory::ShapeFactory;
    use shapedraw_format::ShapeKind;

    fn shape(kind: ShapeKind, coords: &[f64]) -> Shape {
        ShapeFactory::new().construct(kind, coords).unwrap()
    }

    #[test]
    fn iterates_in_insertion_order() {
        let mut list = ShapeList::new();
        list.push(shape(ShapeKind::Square, &[1.0]));
        list.push(shape(ShapeKind::Circle, &[2.0]));
        let kinds: Vec<ShapeKind> = (&list).into_iter().map(Shape::kind).collect();
        assert_eq!(kinds, vec![ShapeKind::Square, ShapeKind::Circle]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn empty_list_renders_nothing() {
        let list = ShapeList::new();
        let mut out = Vec::new();
        list.render_all(&mut out).unwrap();
        assert!(out.is_empty());
        assert!(list.is_empty());
        assert_eq!(list.rendered().count(), 0);
    }
}
