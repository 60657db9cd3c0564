use crate::draw::{Shape, render_background, render_canvas, render_shape};

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Returns the shape the current gesture would commit if released now.
    ///
    /// Only rectangle and oval gestures have a preview; continuous tools have
    /// already committed everything they drew. The preview is never stored on
    /// the canvas.
    pub fn provisional_shape(&self) -> Option<Shape> {
        match self.state {
            DrawingState::Drawing {
                tool,
                anchor_x,
                anchor_y,
                current_x,
                current_y,
            } if !tool.commits_continuously() => {
                Some(self.shape_for(tool, anchor_x, anchor_y, current_x, current_y))
            }
            _ => None,
        }
    }

    /// Paints the full surface: background, committed shapes, then the live preview.
    ///
    /// Takes `&self`; rendering never changes the canvas or the gesture state.
    pub fn render(&self, ctx: &cairo::Context) {
        render_background(ctx, self.background_color());
        render_canvas(ctx, self.canvas());

        if let Some(preview) = self.provisional_shape() {
            render_shape(ctx, &preview);
        }
    }
}
