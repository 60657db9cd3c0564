//! Errors reported by the drawing surface.

use thiserror::Error;

/// Rejected style commands.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceError {
    #[error("stroke width {width} is outside the supported range 1..={max}")]
    InvalidStrokeWidth { width: u32, max: u32 },
}
