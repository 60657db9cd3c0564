//! Inbound commands and pointer event types.

use super::tool::Tool;
use crate::draw::Color;

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Primary button (draws with the active tool)
    Primary,
    /// Secondary/alternate button (never draws; the shell uses it to pick fill colors)
    Secondary,
}

/// Everything the host shell can send to a [`DrawingSurface`](super::DrawingSurface).
///
/// Coordinates are integer pixels in surface-local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Select the tool for the next gesture
    SetTool(Tool),
    /// Outline color for shapes committed from now on
    SetStrokeColor(Color),
    /// Interior color for rectangles and ovals committed from now on
    SetFillColor(Color),
    /// Outline width in pixels (must be within `1..=MAX_STROKE_WIDTH`)
    SetStrokeWidth(u32),
    /// Toggle filling of rectangles and ovals
    SetFillEnabled(bool),
    /// Canvas background; also the color later eraser strokes paint with
    SetBackgroundColor(Color),
    /// Palette click: primary picks the stroke color, secondary the fill color
    PickColor { color: Color, button: MouseButton },
    /// Drop every committed shape
    Clear,
    /// Pointer button went down
    PointerPress { x: i32, y: i32, button: MouseButton },
    /// Pointer moved while a button is held
    PointerDrag { x: i32, y: i32 },
    /// Pointer button went up
    PointerRelease { x: i32, y: i32 },
}
