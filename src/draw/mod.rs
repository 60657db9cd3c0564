//! Rendering primitives and shape definitions (Cairo-based).
//!
//! This module defines the core drawing types:
//! - [`Color`]: RGB color representation with the palette constants
//! - [`Shape`]: One immutable display-list record ([`Geometry`] plus style)
//! - [`Canvas`]: Ordered container for all committed shapes
//! - Rendering functions for Cairo-based output

pub mod canvas;
pub mod color;
pub mod dirty;
pub mod render;
pub mod shape;

// Re-export commonly used types at module level
pub use canvas::{Canvas, Snapshot};
pub use color::Color;
pub use dirty::DirtyTracker;
pub use render::{render_background, render_canvas, render_shape, render_shapes};
pub use shape::{Geometry, Shape};

pub use color::{BLACK, BLUE, CYAN, GREEN, MAGENTA, ORANGE, PALETTE, PINK, RED, WHITE, YELLOW};
