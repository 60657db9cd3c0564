//! Retained-mode drawing surface.
//!
//! A host UI forwards pointer events and style commands to a
//! [`DrawingSurface`]; the surface turns them into an append-only list of
//! shapes that is replayed onto a Cairo context on every repaint.

pub mod config;
pub mod draw;
pub mod input;
pub mod util;

pub use config::Config;
pub use input::{Command, DrawingSurface};
