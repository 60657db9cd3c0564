//! Drawing tool selection.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Drawing tool selection.
///
/// The tool in effect when the pointer is pressed decides what the whole
/// gesture produces; switching tools mid-drag only affects the next press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum Tool {
    /// Freehand drawing - a chain of short segments following the pointer
    #[default]
    FreehandLine,
    /// Rectangle from corner to corner, committed on release
    Rectangle,
    /// Ellipse inscribed in the dragged box, committed on release
    Oval,
    /// Freehand strokes painted in the canvas background color
    Eraser,
}

impl Tool {
    /// Whether every drag increment is committed immediately.
    ///
    /// Continuous tools append one segment per pointer event; the others
    /// append a single shape when the pointer is released.
    pub fn commits_continuously(self) -> bool {
        matches!(self, Tool::FreehandLine | Tool::Eraser)
    }

    /// Human-readable name for logs and shell labels.
    pub fn label(self) -> &'static str {
        match self {
            Tool::FreehandLine => "Lines",
            Tool::Rectangle => "Rectangle",
            Tool::Oval => "Circle",
            Tool::Eraser => "Eraser",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_freehand_and_eraser_commit_continuously() {
        assert!(Tool::FreehandLine.commits_continuously());
        assert!(Tool::Eraser.commits_continuously());
        assert!(!Tool::Rectangle.commits_continuously());
        assert!(!Tool::Oval.commits_continuously());
    }

    #[test]
    fn default_tool_is_freehand() {
        assert_eq!(Tool::default(), Tool::FreehandLine);
    }
}
