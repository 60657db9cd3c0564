//! Drawing state machine and surface state management.

use crate::config::Config;
use crate::draw::{BLACK, Canvas, Color, DirtyTracker, Geometry, Shape, WHITE};
use crate::input::tool::Tool;
use crate::util::Rect;

/// Largest accepted stroke width in pixels.
pub const MAX_STROKE_WIDTH: u32 = 100;

/// Stroke width used when nothing else is configured.
pub const DEFAULT_STROKE_WIDTH: u32 = 2;

/// Gesture state machine.
///
/// Tracks whether the pointer is idle, drawing with a tool, or held down with
/// the secondary button. Every release returns the machine to `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawingState {
    /// No button held - waiting for a press
    Idle,
    /// Primary button held; shapes are being produced
    Drawing {
        /// Tool captured at press time; later tool changes do not affect this gesture
        tool: Tool,
        /// For continuous tools the end of the last committed segment,
        /// otherwise the press position
        anchor_x: i32,
        /// See `anchor_x`
        anchor_y: i32,
        /// Latest pointer X position (used for the live preview)
        current_x: i32,
        /// Latest pointer Y position (used for the live preview)
        current_y: i32,
    },
    /// Secondary button held - nothing is drawn until release
    SuppressedDrag,
}

/// Tool and style parameters used to build new shapes.
///
/// Values change only through explicit commands; committing a shape or
/// clearing the canvas never resets them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionState {
    /// Tool for the next gesture
    pub tool: Tool,
    /// Outline color for new shapes
    pub stroke_color: Color,
    /// Interior color for new rectangles and ovals
    pub fill_color: Color,
    /// Outline width in pixels (1..=MAX_STROKE_WIDTH)
    pub stroke_width: u32,
    /// Whether rectangles and ovals are filled
    pub fill_enabled: bool,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self {
            tool: Tool::FreehandLine,
            stroke_color: BLACK,
            fill_color: WHITE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            fill_enabled: true,
        }
    }
}

/// The drawing surface: committed shapes plus everything needed to add more.
///
/// The host shell forwards pointer events and style commands; the surface
/// appends [`Shape`]s to its [`Canvas`] and raises `needs_redraw` whenever the
/// painted output would change.
pub struct DrawingSurface {
    /// Committed shapes in paint order
    canvas: Canvas,
    /// Current tool and style
    interaction: InteractionState,
    /// Color painted under all shapes (and used by the eraser)
    background_color: Color,
    /// Current gesture state machine
    pub(crate) state: DrawingState,
    /// Whether the display needs to be redrawn
    pub needs_redraw: bool,
    /// Tracks dirty regions between renders
    pub(crate) dirty_tracker: DirtyTracker,
    /// Cached bounds for the current live preview (if any)
    pub(crate) last_provisional_bounds: Option<Rect>,
    /// Surface width in pixels (set by the host after layout)
    screen_width: u32,
    /// Surface height in pixels (set by the host after layout)
    screen_height: u32,
}

impl Default for DrawingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DrawingSurface {
    /// Creates an empty surface with the default tool, black stroke, white fill,
    /// a 2px stroke width and a white background.
    pub fn new() -> Self {
        Self::with_interaction(InteractionState::default(), WHITE)
    }

    /// Creates an empty surface with explicit starting style.
    ///
    /// Screen dimensions default to 0 and should be updated by the host
    /// after layout (see `update_screen_dimensions`).
    pub fn with_interaction(interaction: InteractionState, background_color: Color) -> Self {
        let interaction = InteractionState {
            stroke_width: interaction.stroke_width.clamp(1, MAX_STROKE_WIDTH),
            ..interaction
        };

        Self {
            canvas: Canvas::new(),
            interaction,
            background_color,
            state: DrawingState::Idle,
            needs_redraw: true,
            dirty_tracker: DirtyTracker::new(),
            last_provisional_bounds: None,
            screen_width: 0,
            screen_height: 0,
        }
    }

    /// Creates an empty surface using the defaults from a loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        let drawing = &config.drawing;
        let interaction = InteractionState {
            tool: drawing.default_tool,
            stroke_color: drawing.stroke_color.to_color(),
            fill_color: drawing.fill_color.to_color(),
            stroke_width: drawing.stroke_width,
            fill_enabled: drawing.fill_shapes,
        };

        Self::with_interaction(interaction, config.canvas.background_color.to_color())
    }

    /// Updates surface dimensions after host layout.
    ///
    /// Only used to size full-surface damage rectangles.
    pub fn update_screen_dimensions(&mut self, width: u32, height: u32) {
        self.screen_width = width;
        self.screen_height = height;
    }

    /// Drains pending dirty rectangles for the current surface size.
    pub fn take_dirty_regions(&mut self) -> Vec<Rect> {
        let width = self.screen_width.min(i32::MAX as u32) as i32;
        let height = self.screen_height.min(i32::MAX as u32) as i32;
        self.dirty_tracker.take_regions(width, height)
    }

    /// Returns whether a repaint was requested and clears the request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Committed shapes in paint order.
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Current gesture state.
    pub fn state(&self) -> DrawingState {
        self.state
    }

    /// Current tool and style.
    pub fn interaction(&self) -> &InteractionState {
        &self.interaction
    }

    pub fn current_tool(&self) -> Tool {
        self.interaction.tool
    }

    pub fn current_stroke_color(&self) -> Color {
        self.interaction.stroke_color
    }

    pub fn current_fill_color(&self) -> Color {
        self.interaction.fill_color
    }

    pub fn current_stroke_width(&self) -> u32 {
        self.interaction.stroke_width
    }

    pub fn fill_enabled(&self) -> bool {
        self.interaction.fill_enabled
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub(super) fn interaction_mut(&mut self) -> &mut InteractionState {
        &mut self.interaction
    }

    pub(super) fn set_background(&mut self, color: Color) {
        self.background_color = color;
    }

    pub(super) fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// Builds the shape `tool` produces for a drag from `(x1, y1)` to `(x2, y2)`
    /// using the style in effect right now.
    pub(super) fn shape_for(&self, tool: Tool, x1: i32, y1: i32, x2: i32, y2: i32) -> Shape {
        let style = &self.interaction;
        let fill = style.fill_enabled.then_some(style.fill_color);

        match tool {
            Tool::FreehandLine => Shape {
                geometry: Geometry::line(x1, y1, x2, y2),
                stroke: Some(style.stroke_color),
                fill: None,
                stroke_width: style.stroke_width,
            },
            Tool::Eraser => Shape {
                geometry: Geometry::line(x1, y1, x2, y2),
                stroke: Some(self.background_color),
                fill: None,
                stroke_width: style.stroke_width,
            },
            Tool::Rectangle => Shape {
                geometry: Geometry::rect(x1, y1, x2, y2),
                stroke: Some(style.stroke_color),
                fill,
                stroke_width: style.stroke_width,
            },
            Tool::Oval => Shape {
                geometry: Geometry::ellipse(x1, y1, x2, y2),
                stroke: Some(style.stroke_color),
                fill,
                stroke_width: style.stroke_width,
            },
        }
    }

    /// Appends a finished shape to the canvas and requests a repaint of its area.
    pub(super) fn commit(&mut self, shape: Shape) {
        self.dirty_tracker.mark_shape(&shape);
        self.canvas.append(shape);
        self.needs_redraw = true;
    }

    /// Clears any cached preview bounds and marks their damage region.
    pub(crate) fn clear_provisional_dirty(&mut self) {
        if let Some(prev) = self.last_provisional_bounds.take() {
            self.dirty_tracker.mark_rect(prev);
            self.needs_redraw = true;
        }
    }

    /// Updates tracked preview bounds for dirty-region purposes.
    pub(crate) fn update_provisional_dirty(&mut self) {
        let new_bounds = self.provisional_shape().and_then(|shape| shape.bounding_box());
        let previous = self.last_provisional_bounds;

        if new_bounds != previous {
            if let Some(prev) = previous {
                self.dirty_tracker.mark_rect(prev);
            }
        }

        if let Some(bounds) = new_bounds {
            self.dirty_tracker.mark_rect(bounds);
            self.needs_redraw = true;
        }
        self.last_provisional_bounds = new_bounds;
    }
}
