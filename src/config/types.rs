//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::input::Tool;
use crate::input::state::DEFAULT_STROKE_WIDTH;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing-related settings.
///
/// Controls the tool and style the surface starts with. The shell can change
/// all of them at runtime through commands.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Tool selected at startup (freehand-line, rectangle, oval, eraser)
    #[serde(default)]
    pub default_tool: Tool,

    /// Outline color - either a named color (black, white, red, orange, yellow,
    /// green, cyan, blue, magenta, pink) or an RGB array like `[255, 0, 0]`
    #[serde(default = "default_stroke_color")]
    pub stroke_color: ColorSpec,

    /// Interior color for rectangles and ovals
    #[serde(default = "default_fill_color")]
    pub fill_color: ColorSpec,

    /// Outline width in pixels (valid range: 1 - 100)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: u32,

    /// Fill rectangles and ovals with `fill_color`
    #[serde(default = "default_fill_shapes")]
    pub fill_shapes: bool,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_tool: Tool::default(),
            stroke_color: default_stroke_color(),
            fill_color: default_fill_color(),
            stroke_width: default_stroke_width(),
            fill_shapes: default_fill_shapes(),
        }
    }
}

/// Canvas appearance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CanvasConfig {
    /// Background color; the eraser paints with this color
    #[serde(default = "default_background_color")]
    pub background_color: ColorSpec,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            background_color: default_background_color(),
        }
    }
}

fn default_stroke_color() -> ColorSpec {
    ColorSpec::named("black")
}

fn default_fill_color() -> ColorSpec {
    ColorSpec::named("white")
}

fn default_stroke_width() -> u32 {
    DEFAULT_STROKE_WIDTH
}

fn default_fill_shapes() -> bool {
    true
}

fn default_background_color() -> ColorSpec {
    ColorSpec::named("white")
}
