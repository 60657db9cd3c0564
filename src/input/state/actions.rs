use crate::draw::Color;
use crate::input::{
    error::SurfaceError,
    events::{Command, MouseButton},
    tool::Tool,
};
use crate::util;
use log::debug;

use super::{DrawingSurface, MAX_STROKE_WIDTH};

impl DrawingSurface {
    /// Applies one command from the host shell.
    ///
    /// Only `SetStrokeWidth` can fail; every other command is total.
    pub fn handle(&mut self, command: Command) -> Result<(), SurfaceError> {
        match command {
            Command::SetTool(tool) => self.set_tool(tool),
            Command::SetStrokeColor(color) => self.set_stroke_color(color),
            Command::SetFillColor(color) => self.set_fill_color(color),
            Command::SetStrokeWidth(width) => return self.set_stroke_width(width),
            Command::SetFillEnabled(enabled) => self.set_fill_enabled(enabled),
            Command::SetBackgroundColor(color) => self.set_background_color(color),
            Command::PickColor { color, button } => self.pick_color(color, button),
            Command::Clear => self.clear_canvas(),
            Command::PointerPress { x, y, button } => self.on_pointer_press(button, x, y),
            Command::PointerDrag { x, y } => self.on_pointer_drag(x, y),
            Command::PointerRelease { x, y } => self.on_pointer_release(x, y),
        }
        Ok(())
    }

    /// Selects the tool used by the next press. An active gesture keeps its tool.
    pub fn set_tool(&mut self, tool: Tool) {
        self.interaction_mut().tool = tool;
        debug!("Tool set to {}", tool.label());
    }

    /// Sets the outline color for shapes committed from now on.
    pub fn set_stroke_color(&mut self, color: Color) {
        self.interaction_mut().stroke_color = color;
        debug!("Stroke color set to {}", util::color_to_name(&color));
        self.refresh_preview();
    }

    /// Sets the interior color for rectangles and ovals committed from now on.
    pub fn set_fill_color(&mut self, color: Color) {
        self.interaction_mut().fill_color = color;
        debug!("Fill color set to {}", util::color_to_name(&color));
        self.refresh_preview();
    }

    /// Sets the outline width for shapes committed from now on.
    ///
    /// # Errors
    /// Returns [`SurfaceError::InvalidStrokeWidth`] when `width` is 0 or larger
    /// than [`MAX_STROKE_WIDTH`]; the current width is left unchanged.
    pub fn set_stroke_width(&mut self, width: u32) -> Result<(), SurfaceError> {
        if !(1..=MAX_STROKE_WIDTH).contains(&width) {
            return Err(SurfaceError::InvalidStrokeWidth {
                width,
                max: MAX_STROKE_WIDTH,
            });
        }

        self.interaction_mut().stroke_width = width;
        debug!("Stroke width set to {width}px");
        self.refresh_preview();
        Ok(())
    }

    /// Enables or disables filling of rectangles and ovals.
    pub fn set_fill_enabled(&mut self, enabled: bool) {
        self.interaction_mut().fill_enabled = enabled;
        debug!("Shape fill {}", if enabled { "enabled" } else { "disabled" });
        self.refresh_preview();
    }

    /// Changes the canvas background.
    ///
    /// Committed eraser strokes keep the color they were drawn with.
    pub fn set_background_color(&mut self, color: Color) {
        self.set_background(color);
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        debug!("Background color set to {}", util::color_to_name(&color));
    }

    /// Handles a palette click from the shell.
    ///
    /// The primary button picks the stroke color and the secondary button the fill color.
    pub fn pick_color(&mut self, color: Color, button: MouseButton) {
        match button {
            MouseButton::Primary => self.set_stroke_color(color),
            MouseButton::Secondary => self.set_fill_color(color),
        }
    }

    /// Removes every committed shape and requests a full repaint.
    pub fn clear_canvas(&mut self) {
        self.canvas_mut().clear();
        self.dirty_tracker.mark_full();
        self.needs_redraw = true;
        debug!("Canvas cleared");
    }

    /// Re-damages the live preview after a style change.
    fn refresh_preview(&mut self) {
        if self.last_provisional_bounds.is_some() {
            self.update_provisional_dirty();
        }
    }
}
