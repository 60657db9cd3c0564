//! Utility functions for colors and geometry.

use crate::draw::color::*;

// ============================================================================
// Color Utilities
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "orange", "yellow", "green", "cyan", "blue",
///   "magenta", "pink"
///
/// # Returns
/// - `Some(Color)` if the name matches a palette color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "green" => Some(GREEN),
        "cyan" => Some(CYAN),
        "blue" => Some(BLUE),
        "magenta" => Some(MAGENTA),
        "pink" => Some(PINK),
        _ => None,
    }
}

/// Maps a Color value to its palette name, or "Custom" for anything else.
///
/// Matching is exact; palette colors are built from 8-bit components so they
/// compare equal after a round trip through the config file.
pub fn color_to_name(color: &Color) -> &'static str {
    const NAMES: [&str; 10] = [
        "Black", "White", "Red", "Orange", "Yellow", "Green", "Cyan", "Blue", "Magenta", "Pink",
    ];

    PALETTE
        .iter()
        .position(|swatch| swatch == color)
        .map(|idx| NAMES[idx])
        .unwrap_or("Custom")
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// Axis-aligned rectangle helper used for dirty region tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Width/height must be positive.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds (inclusive min, exclusive max).
    pub fn from_min_max(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Option<Self> {
        let width = max_x - min_x;
        let height = max_y - min_y;
        Self::new(min_x, min_y, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Normalizes a drag from `(x1, y1)` to `(x2, y2)` into a box.
///
/// The origin is the component-wise minimum of the two corners and the size is
/// the absolute difference, so the result never has a negative extent no matter
/// which direction the pointer travelled.
///
/// # Returns
/// Tuple `(x, y, w, h)`
pub fn normalize_corners(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    (x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_corners_handles_every_drag_direction() {
        assert_eq!(normalize_corners(10, 10, 50, 40), (10, 10, 40, 30));
        assert_eq!(normalize_corners(50, 40, 10, 10), (10, 10, 40, 30));
        assert_eq!(normalize_corners(50, 10, 10, 40), (10, 10, 40, 30));
        assert_eq!(normalize_corners(10, 40, 50, 10), (10, 10, 40, 30));
        assert_eq!(normalize_corners(7, 7, 7, 7), (7, 7, 0, 0));
    }

    #[test]
    fn name_and_color_mappings_round_trip() {
        assert_eq!(name_to_color("Cyan").unwrap(), CYAN);
        assert_eq!(name_to_color(" pink ").unwrap(), PINK);
        assert!(name_to_color("chartreuse").is_none());

        for swatch in PALETTE {
            let name = color_to_name(&swatch);
            assert_eq!(name_to_color(name), Some(swatch));
        }
    }

    #[test]
    fn color_to_name_reports_custom_for_unknown_colors() {
        assert_eq!(color_to_name(&Color::new(0.42, 0.42, 0.42)), "Custom");
    }

    #[test]
    fn rect_rejects_empty_area() {
        assert!(Rect::new(0, 0, 0, 5).is_none());
        assert!(Rect::from_min_max(3, 3, 2, 9).is_none());
        assert!(Rect::new(1, 1, 2, 2).unwrap().is_valid());
    }
}
