//! Input handling and tool state machine.
//!
//! This module translates pointer events and style commands from the host
//! shell into canvas mutations. It owns the current tool and style, and the
//! gesture state machine (idle, drawing, suppressed drag).

pub mod error;
pub mod events;
pub mod state;
pub mod tool;

// Re-export commonly used types at module level
pub use error::SurfaceError;
pub use events::{Command, MouseButton};
pub use state::{DrawingState, DrawingSurface, InteractionState, MAX_STROKE_WIDTH};
pub use tool::Tool;
