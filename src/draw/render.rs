//! Cairo-based rendering functions for shapes.

use super::canvas::Canvas;
use super::color::Color;
use super::shape::{Geometry, Shape};

/// Fills the whole target with the canvas background color.
///
/// Should be called before replaying shapes so that eraser strokes (which are
/// painted in the background color) blend in.
pub fn render_background(ctx: &cairo::Context, color: Color) {
    color.apply(ctx);
    let _ = ctx.paint(); // Ignore errors - a failed paint leaves the target as it was
}

/// Replays every shape on the canvas, bottom layer first.
///
/// Rendering only reads the canvas, so replaying the same canvas twice onto
/// identical targets produces identical pixels.
pub fn render_canvas(ctx: &cairo::Context, canvas: &Canvas) {
    render_shapes(ctx, canvas.snapshot());
}

/// Renders a sequence of shapes in the order given (first shape = bottom layer).
pub fn render_shapes<'a>(ctx: &cairo::Context, shapes: impl IntoIterator<Item = &'a Shape>) {
    for shape in shapes {
        render_shape(ctx, shape);
    }
}

/// Renders a single shape: fill first, then the outline on top of it.
pub fn render_shape(ctx: &cairo::Context, shape: &Shape) {
    if let Some(fill) = shape.fill {
        fill.apply(ctx);
        if trace_geometry(ctx, &shape.geometry) {
            let _ = ctx.fill();
        }
    }

    if let Some(stroke) = shape.stroke {
        stroke.apply(ctx);
        ctx.set_line_width(shape.stroke_width as f64);
        match shape.geometry {
            Geometry::Line { .. } => {
                // Round caps turn a zero-length segment into a dot
                ctx.set_line_cap(cairo::LineCap::Round);
                ctx.set_line_join(cairo::LineJoin::Round);
            }
            Geometry::Rect { .. } | Geometry::Ellipse { .. } => {
                ctx.set_line_cap(cairo::LineCap::Butt);
                ctx.set_line_join(cairo::LineJoin::Miter);
            }
        }
        if trace_geometry(ctx, &shape.geometry) {
            let _ = ctx.stroke();
        }
    }
}

/// Builds the path for `geometry` on a fresh Cairo path.
///
/// Returns `false` when the geometry has no path (an ellipse with a zero
/// dimension), in which case the caller must not fill or stroke.
fn trace_geometry(ctx: &cairo::Context, geometry: &Geometry) -> bool {
    ctx.new_path();
    match *geometry {
        Geometry::Line { x1, y1, x2, y2 } => {
            ctx.move_to(x1 as f64, y1 as f64);
            ctx.line_to(x2 as f64, y2 as f64);
            true
        }
        Geometry::Rect { x, y, w, h } => {
            ctx.rectangle(x as f64, y as f64, w as f64, h as f64);
            true
        }
        Geometry::Ellipse { x, y, w, h } => {
            // Scaling by zero would leave the context with a singular matrix
            if w == 0 || h == 0 {
                return false;
            }

            let rx = w as f64 / 2.0;
            let ry = h as f64 / 2.0;

            ctx.save().ok();
            ctx.translate(x as f64 + rx, y as f64 + ry);
            ctx.scale(rx, ry);
            ctx.arc(0.0, 0.0, 1.0, 0.0, 2.0 * std::f64::consts::PI);
            ctx.restore().ok();
            true
        }
    }
}
