mod actions;
mod core;
mod mouse;
mod render;

pub use self::core::{
    DEFAULT_STROKE_WIDTH, DrawingState, DrawingSurface, InteractionState, MAX_STROKE_WIDTH,
};
