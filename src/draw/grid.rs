//! Fixed-spacing reference grid rendering.

use super::color::Color;

/// Grid appearance derived from the `[grid]` config section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridStyle {
    /// Distance between rules in drawing-space units
    pub spacing: f64,
    /// Rule color
    pub color: Color,
}

/// Renders the reference grid covering the entire canvas.
///
/// Pure function of the canvas size and style; it is always the bottom layer
/// of a repaint, so the compositor must call it before any content.
///
/// # Arguments
/// * `ctx` - Cairo drawing context, already translated to canvas space
/// * `width` - Canvas width in drawing-space units
/// * `height` - Canvas height in drawing-space units
/// * `style` - Grid spacing and color
pub fn render_grid(ctx: &cairo::Context, width: f64, height: f64, style: &GridStyle) {
    if style.spacing <= 0.0 {
        return;
    }

    ctx.set_source_rgba(style.color.r, style.color.g, style.color.b, style.color.a);
    ctx.set_line_width(1.0);

    let mut x = 0.0;
    while x <= width {
        ctx.move_to(x, 0.0);
        ctx.line_to(x, height);
        x += style.spacing;
    }

    let mut y = 0.0;
    while y <= height {
        ctx.move_to(0.0, y);
        ctx.line_to(width, y);
        y += style.spacing;
    }

    let _ = ctx.stroke();
}
