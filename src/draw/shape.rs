//! Shape records that make up the retained display list.

use super::color::Color;
use crate::util::{self, Rect};

/// Outline of a committed shape.
///
/// The set of primitives is closed; renderers match on it exhaustively.
/// Boxed variants are always normalized: `(x, y)` is the top-left corner and
/// `w`/`h` are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Geometry {
    /// Straight segment between two points
    Line {
        /// Starting X coordinate
        x1: i32,
        /// Starting Y coordinate
        y1: i32,
        /// Ending X coordinate
        x2: i32,
        /// Ending Y coordinate
        y2: i32,
    },
    /// Axis-aligned rectangle
    Rect {
        /// Top-left X coordinate
        x: i32,
        /// Top-left Y coordinate
        y: i32,
        /// Width in pixels
        w: i32,
        /// Height in pixels
        h: i32,
    },
    /// Ellipse inscribed in the given bounding box
    Ellipse {
        /// Bounding box left X coordinate
        x: i32,
        /// Bounding box top Y coordinate
        y: i32,
        /// Bounding box width in pixels
        w: i32,
        /// Bounding box height in pixels
        h: i32,
    },
}

impl Geometry {
    /// Segment from `(x1, y1)` to `(x2, y2)`, kept in drag order.
    pub fn line(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        Geometry::Line { x1, y1, x2, y2 }
    }

    /// Rectangle spanning two opposite corners, in any order.
    pub fn rect(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x, y, w, h) = util::normalize_corners(x1, y1, x2, y2);
        Geometry::Rect { x, y, w, h }
    }

    /// Ellipse inscribed in the box spanning two opposite corners, in any order.
    pub fn ellipse(x1: i32, y1: i32, x2: i32, y2: i32) -> Self {
        let (x, y, w, h) = util::normalize_corners(x1, y1, x2, y2);
        Geometry::Ellipse { x, y, w, h }
    }
}

/// A single immutable entry of the display list.
///
/// Each record carries its own colors and width, so style changes made after
/// it was committed never affect how it paints.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shape {
    /// Outline to fill and/or stroke
    pub geometry: Geometry,
    /// Outline color; `None` means no outline is drawn
    pub stroke: Option<Color>,
    /// Interior color; `None` means the shape is not filled
    pub fill: Option<Color>,
    /// Outline width in pixels (always positive)
    pub stroke_width: u32,
}

impl Shape {
    /// Returns the axis-aligned bounding box for this shape, expanded to cover stroke width.
    ///
    /// The returned rectangle is suitable for dirty region tracking and damage hints.
    /// Degenerate shapes still get a one pixel box so the damage is never lost.
    pub fn bounding_box(&self) -> Option<Rect> {
        let padding = if self.stroke.is_some() {
            stroke_padding(self.stroke_width)
        } else {
            0
        };

        let (min_x, min_y, max_x, max_y) = match self.geometry {
            Geometry::Line { x1, y1, x2, y2 } => (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2)),
            Geometry::Rect { x, y, w, h } | Geometry::Ellipse { x, y, w, h } => {
                (x, y, x + w, y + h)
            }
        };

        ensure_positive_rect(
            min_x - padding,
            min_y - padding,
            max_x + padding,
            max_y + padding,
        )
    }
}

fn stroke_padding(width: u32) -> i32 {
    let padding = (width as f64 / 2.0).ceil() as i32;
    padding.max(1)
}

fn ensure_positive_rect(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Rect> {
    let max_x = if min_x == max_x { max_x + 1 } else { max_x };
    let max_y = if min_y == max_y { max_y + 1 } else { max_y };
    Rect::from_min_max(min_x, min_y, max_x, max_y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{RED, WHITE};

    fn stroked(geometry: Geometry, stroke_width: u32) -> Shape {
        Shape {
            geometry,
            stroke: Some(RED),
            fill: None,
            stroke_width,
        }
    }

    #[test]
    fn boxed_geometry_is_normalized_for_reversed_drags() {
        assert_eq!(
            Geometry::rect(50, 40, 10, 10),
            Geometry::Rect {
                x: 10,
                y: 10,
                w: 40,
                h: 30
            }
        );
        assert_eq!(
            Geometry::ellipse(0, 30, 20, 0),
            Geometry::Ellipse {
                x: 0,
                y: 0,
                w: 20,
                h: 30
            }
        );
    }

    #[test]
    fn line_keeps_drag_order() {
        assert_eq!(
            Geometry::line(5, 6, 1, 2),
            Geometry::Line {
                x1: 5,
                y1: 6,
                x2: 1,
                y2: 2
            }
        );
    }

    #[test]
    fn line_bounding_box_covers_stroke() {
        let rect = stroked(Geometry::line(50, 40, 70, 90), 4)
            .bounding_box()
            .expect("line should have bounds");
        assert_eq!(rect.x, 48);
        assert_eq!(rect.y, 38);
        assert_eq!(rect.width, 24);
        assert_eq!(rect.height, 54);
    }

    #[test]
    fn point_line_still_has_bounds() {
        let rect = stroked(Geometry::line(3, 3, 3, 3), 2)
            .bounding_box()
            .expect("dot should have bounds");
        assert!(rect.width > 0 && rect.height > 0);
        assert!(rect.x <= 3 && rect.y <= 3);
    }

    #[test]
    fn ellipse_bounding_box_uses_its_box() {
        let rect = stroked(Geometry::ellipse(160, 130, 240, 170), 2)
            .bounding_box()
            .expect("ellipse should have bounds");
        assert_eq!(rect, Rect::new(159, 129, 82, 42).unwrap());
    }

    #[test]
    fn unstroked_fill_has_no_padding() {
        let shape = Shape {
            geometry: Geometry::rect(0, 0, 10, 10),
            stroke: None,
            fill: Some(WHITE),
            stroke_width: 8,
        };
        assert_eq!(shape.bounding_box(), Rect::new(0, 0, 10, 10));
    }
}
