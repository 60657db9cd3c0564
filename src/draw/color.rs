//! RGB color type and the predefined palette.

/// Represents an opaque RGB color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sketchpad::draw::Color;
/// let red = Color { r: 1.0, g: 0.0, b: 0.0 };
/// let orange = Color::from_rgb8(255, 200, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
}

impl Color {
    /// Creates a new color from RGB components in the 0.0 to 1.0 range.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a color from 8-bit components (0-255 each).
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }

    /// Makes this color the current Cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgb(self.r, self.g, self.b);
    }
}

// ============================================================================
// Palette
// ============================================================================

pub const BLACK: Color = Color::from_rgb8(0, 0, 0);
pub const WHITE: Color = Color::from_rgb8(255, 255, 255);
pub const RED: Color = Color::from_rgb8(255, 0, 0);
pub const ORANGE: Color = Color::from_rgb8(255, 200, 0);
pub const YELLOW: Color = Color::from_rgb8(255, 255, 0);
pub const GREEN: Color = Color::from_rgb8(0, 255, 0);
pub const CYAN: Color = Color::from_rgb8(0, 255, 255);
pub const BLUE: Color = Color::from_rgb8(0, 0, 255);
pub const MAGENTA: Color = Color::from_rgb8(255, 0, 255);
pub const PINK: Color = Color::from_rgb8(255, 175, 175);

/// Swatches offered by the shell's color bar, in display order.
pub const PALETTE: [Color; 10] = [
    BLACK, WHITE, RED, ORANGE, YELLOW, GREEN, CYAN, BLUE, MAGENTA, PINK,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb8_scales_to_unit_range() {
        let c = Color::from_rgb8(255, 0, 51);
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert!((c.b - 0.2).abs() < 1e-9);
    }

    #[test]
    fn palette_has_no_duplicates() {
        for (i, a) in PALETTE.iter().enumerate() {
            for b in &PALETTE[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
