//! Canvas container holding the ordered display list.

use super::shape::Shape;
use std::slice;

/// Ordered list of committed shapes.
///
/// Insertion order is paint order (first = bottom layer, last = top layer).
/// Records are only ever appended or dropped all at once; nothing hands out a
/// mutable reference to an individual shape.
#[derive(Debug, Clone, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
}

impl Canvas {
    /// Creates a new empty canvas with no shapes.
    pub const fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Adds a new shape to the canvas (drawn on top of existing shapes).
    pub fn append(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Removes all shapes from the canvas. Calling it on an empty canvas is a no-op.
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Read-only view of the shapes in paint order.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            shapes: &self.shapes,
        }
    }

    /// Number of committed shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Returns true when nothing has been committed since creation or the last clear.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Borrowed, restartable view over a [`Canvas`].
///
/// `Snapshot` is `Copy`; every call to [`Snapshot::iter`] starts again from the
/// bottom-most shape.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    shapes: &'a [Shape],
}

impl<'a> Snapshot<'a> {
    /// Iterates shapes in paint order.
    pub fn iter(&self) -> slice::Iter<'a, Shape> {
        self.shapes.iter()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shape at paint position `index`, if any.
    pub fn get(&self, index: usize) -> Option<&'a Shape> {
        self.shapes.get(index)
    }

    /// Most recently committed shape.
    pub fn last(&self) -> Option<&'a Shape> {
        self.shapes.last()
    }
}

impl<'a> IntoIterator for Snapshot<'a> {
    type Item = &'a Shape;
    type IntoIter = slice::Iter<'a, Shape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLUE, Geometry, RED};

    fn line(x2: i32, color: crate::draw::Color) -> Shape {
        Shape {
            geometry: Geometry::line(0, 0, x2, 0),
            stroke: Some(color),
            fill: None,
            stroke_width: 2,
        }
    }

    #[test]
    fn append_preserves_paint_order() {
        let mut canvas = Canvas::new();
        canvas.append(line(1, RED));
        canvas.append(line(2, BLUE));

        let snapshot = canvas.snapshot();
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot.get(0).unwrap().stroke, Some(RED));
        assert_eq!(snapshot.last().unwrap().stroke, Some(BLUE));
    }

    #[test]
    fn snapshot_can_be_iterated_repeatedly() {
        let mut canvas = Canvas::new();
        canvas.append(line(1, RED));
        canvas.append(line(2, RED));
        canvas.append(line(3, RED));

        let snapshot = canvas.snapshot();
        let first: Vec<_> = snapshot.iter().collect();
        let second: Vec<_> = snapshot.into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(snapshot.iter().count(), 3);
    }

    #[test]
    fn clear_is_idempotent() {
        let mut canvas = Canvas::new();
        canvas.clear();
        assert!(canvas.is_empty());

        canvas.append(line(1, RED));
        canvas.clear();
        canvas.clear();
        assert!(canvas.snapshot().is_empty());
        assert_eq!(canvas.len(), 0);
    }
}
