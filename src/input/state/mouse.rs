use crate::input::events::MouseButton;
use log::debug;

use super::{DrawingState, DrawingSurface};

impl DrawingSurface {
    /// Processes a pointer button press.
    ///
    /// # Arguments
    /// * `button` - Which button was pressed
    /// * `x` - Pointer X coordinate
    /// * `y` - Pointer Y coordinate
    ///
    /// # Behavior
    /// - Secondary press: enters `SuppressedDrag`; nothing is drawn until release
    /// - Primary press: starts a gesture with the current tool. Freehand and
    ///   eraser commit a zero-length segment at the press point right away.
    /// - A press while another gesture is active is ignored
    pub fn on_pointer_press(&mut self, button: MouseButton, x: i32, y: i32) {
        if !matches!(self.state, DrawingState::Idle) {
            debug!("Ignoring {button:?} press at ({x}, {y}); a gesture is already active");
            return;
        }

        match button {
            MouseButton::Secondary => {
                self.state = DrawingState::SuppressedDrag;
            }
            MouseButton::Primary => {
                let tool = self.current_tool();
                self.state = DrawingState::Drawing {
                    tool,
                    anchor_x: x,
                    anchor_y: y,
                    current_x: x,
                    current_y: y,
                };

                if tool.commits_continuously() {
                    let shape = self.shape_for(tool, x, y, x, y);
                    self.commit(shape);
                } else {
                    self.update_provisional_dirty();
                }
                debug!("Started {} gesture at ({x}, {y})", tool.label());
            }
        }
    }

    /// Processes pointer motion while a button is held.
    ///
    /// # Behavior
    /// - Freehand/eraser: commits a segment from the previous point to `(x, y)`
    ///   and makes `(x, y)` the new anchor
    /// - Rectangle/oval: only moves the live preview; the anchor stays at the press point
    /// - Idle or suppressed: no effect
    pub fn on_pointer_drag(&mut self, x: i32, y: i32) {
        let DrawingState::Drawing {
            tool,
            anchor_x,
            anchor_y,
            ..
        } = self.state
        else {
            return;
        };

        if tool.commits_continuously() {
            let shape = self.shape_for(tool, anchor_x, anchor_y, x, y);
            self.commit(shape);
            self.state = DrawingState::Drawing {
                tool,
                anchor_x: x,
                anchor_y: y,
                current_x: x,
                current_y: y,
            };
        } else {
            self.state = DrawingState::Drawing {
                tool,
                anchor_x,
                anchor_y,
                current_x: x,
                current_y: y,
            };
            self.update_provisional_dirty();
        }
    }

    /// Processes a pointer button release.
    ///
    /// # Behavior
    /// - Rectangle/oval: commits one shape spanning the press point and `(x, y)`
    /// - Freehand/eraser: nothing left to commit
    /// - Suppressed: nothing is drawn
    ///
    /// The state machine always returns to `Idle`.
    pub fn on_pointer_release(&mut self, x: i32, y: i32) {
        let previous = std::mem::replace(&mut self.state, DrawingState::Idle);

        if let DrawingState::Drawing {
            tool,
            anchor_x,
            anchor_y,
            ..
        } = previous
        {
            if !tool.commits_continuously() {
                self.clear_provisional_dirty();
                let shape = self.shape_for(tool, anchor_x, anchor_y, x, y);
                self.commit(shape);
            }
            debug!(
                "Finished {} gesture at ({x}, {y}); {} shapes on canvas",
                tool.label(),
                self.canvas().len()
            );
        }
    }
}
