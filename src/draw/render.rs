//! Cairo-based rendering for the canvas scene.
//!
//! `render_scene` is the single repaint entry point: every frame-affecting
//! event leads to a full clear-and-redraw in a fixed layer order, so the
//! pixels are always a pure function of the current session state.

use super::canvas::CanvasGeometry;
use super::color::Color;
use super::font::FontDescriptor;
use super::grid::{GridStyle, render_grid};
use super::point::Point;
use super::segment::{LineSegment, Measurement};
use super::store::SegmentStore;
use crate::util;

/// Vertical gap between a segment midpoint and its label.
const LABEL_OFFSET: f64 = 6.0;

/// Dash pattern for the in-progress stroke preview.
const PREVIEW_DASH: [f64; 2] = [6.0, 4.0];

/// Radius of the start-point indicator dot.
const START_MARKER_RADIUS: f64 = 4.0;

/// Active pen parameters applied to every stroke in a repaint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    /// Stroke color
    pub color: Color,
    /// Line thickness in pixels
    pub thickness: f64,
}

/// Measurement label appearance.
#[derive(Debug, Clone)]
pub struct LabelStyle {
    /// Font size in points
    pub size: f64,
    /// Text color
    pub color: Color,
    /// Font configuration (family, weight, style)
    pub font: FontDescriptor,
    /// Whether to draw a contrast box behind the label
    pub background_enabled: bool,
    /// Unit suffix appended to the formatted length
    pub unit: String,
    /// Decimal places in the formatted length
    pub precision: usize,
}

/// Static scene appearance derived from configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneStyle {
    /// Canvas sheet color (painted first, the scene's "clear")
    pub background: Color,
    /// Reference grid appearance
    pub grid: GridStyle,
}

/// Repaints the whole canvas scene.
///
/// Layer order, later layers occluding earlier ones:
/// 1. canvas background
/// 2. reference grid
/// 3. committed segments with their measurement labels, in commit order
/// 4. in-progress segment as a dashed stroke (only while drawing)
/// 5. live measurement label for the in-progress segment
/// 6. start-point indicator dot
///
/// The context must already be translated so that (0, 0) is the canvas
/// origin (see [`CanvasGeometry`]); all coordinates here are drawing-space.
#[allow(clippy::too_many_arguments)]
pub fn render_scene(
    ctx: &cairo::Context,
    width: f64,
    height: f64,
    style: &SceneStyle,
    stroke: &Stroke,
    label: &LabelStyle,
    store: &SegmentStore,
    preview: Option<&LineSegment>,
) {
    let bg = style.background;
    ctx.set_source_rgba(bg.r, bg.g, bg.b, bg.a);
    ctx.rectangle(0.0, 0.0, width, height);
    let _ = ctx.fill();

    render_grid(ctx, width, height, &style.grid);

    for (segment, measurement) in store.segments().iter().zip(store.measurements()) {
        render_segment(ctx, segment, stroke);
        render_measurement(ctx, measurement, label);
    }

    if let Some(segment) = preview {
        render_preview_segment(ctx, segment, stroke);
        render_measurement(ctx, &Measurement::of(segment), label);
        render_start_marker(ctx, segment.start, stroke.color);
    }
}

/// Renders a committed segment as a solid stroke.
pub fn render_segment(ctx: &cairo::Context, segment: &LineSegment, stroke: &Stroke) {
    ctx.set_source_rgba(
        stroke.color.r,
        stroke.color.g,
        stroke.color.b,
        stroke.color.a,
    );
    ctx.set_line_width(stroke.thickness);
    ctx.set_line_cap(cairo::LineCap::Round);

    ctx.move_to(segment.start.x, segment.start.y);
    ctx.line_to(segment.end.x, segment.end.y);
    let _ = ctx.stroke();
}

/// Renders the in-progress segment as a dashed stroke.
pub fn render_preview_segment(ctx: &cairo::Context, segment: &LineSegment, stroke: &Stroke) {
    ctx.save().ok();
    ctx.set_dash(&PREVIEW_DASH, 0.0);
    render_segment(ctx, segment, stroke);
    ctx.restore().ok();
}

/// Renders a measurement label anchored above the segment midpoint.
///
/// Committed and live labels share this path, so the in-progress readout is
/// computed exactly like the stored ones. Uses Pango for text layout with an
/// optional contrast box whose shade adapts to the label color.
pub fn render_measurement(ctx: &cairo::Context, measurement: &Measurement, label: &LabelStyle) {
    let text = util::format_length(measurement.length(), &label.unit, label.precision);

    ctx.save().ok();
    ctx.set_antialias(cairo::Antialias::Best);

    let layout = pangocairo::functions::create_layout(ctx);
    let font_desc = pango::FontDescription::from_string(&label.font.to_pango_string(label.size));
    layout.set_font_description(Some(&font_desc));
    layout.set_text(&text);

    let (ink_rect, _logical_rect) = layout.extents();
    let scale = pango::SCALE as f64;
    let ink_x = ink_rect.x() as f64 / scale;
    let ink_y = ink_rect.y() as f64 / scale;
    let ink_width = ink_rect.width() as f64 / scale;
    let ink_height = ink_rect.height() as f64 / scale;

    // Center the inked text horizontally on the anchor, bottom edge sitting
    // LABEL_OFFSET above it.
    let anchor = measurement.anchor();
    let origin_x = anchor.x - ink_x - ink_width / 2.0;
    let origin_y = anchor.y - LABEL_OFFSET - ink_y - ink_height;

    if label.background_enabled && ink_width > 0.0 && ink_height > 0.0 {
        // Contrast box shade follows the label color's perceived brightness.
        let brightness =
            label.color.r * 0.299 + label.color.g * 0.587 + label.color.b * 0.114;
        let (bg_r, bg_g, bg_b) = if brightness > 0.5 {
            (0.0, 0.0, 0.0)
        } else {
            (1.0, 1.0, 1.0)
        };

        let padding = label.size * 0.15;
        ctx.rectangle(
            origin_x + ink_x - padding,
            origin_y + ink_y - padding,
            ink_width + padding * 2.0,
            ink_height + padding * 2.0,
        );
        ctx.set_source_rgba(bg_r, bg_g, bg_b, 0.85);
        let _ = ctx.fill();
    }

    ctx.move_to(origin_x, origin_y);
    ctx.set_source_rgba(label.color.r, label.color.g, label.color.b, label.color.a);
    pangocairo::functions::show_layout(ctx, &layout);

    ctx.restore().ok();
}

/// Renders the start-point indicator dot for the in-progress stroke.
pub fn render_start_marker(ctx: &cairo::Context, point: Point, color: Color) {
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.arc(
        point.x,
        point.y,
        START_MARKER_RADIUS,
        0.0,
        std::f64::consts::PI * 2.0,
    );
    let _ = ctx.fill();
}

/// Fills the area outside the canvas with a translucent scrim.
///
/// Operates in surface coordinates; the canvas rectangle itself is left
/// untouched so the opaque sheet painted by [`render_scene`] shows through.
pub fn render_scrim(
    ctx: &cairo::Context,
    surface_width: f64,
    surface_height: f64,
    canvas: &CanvasGeometry,
    color: Color,
) {
    let (ox, oy) = canvas.origin();

    ctx.save().ok();
    ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    ctx.rectangle(0.0, 0.0, surface_width, surface_height);
    ctx.rectangle(ox, oy, canvas.width(), canvas.height());
    ctx.set_fill_rule(cairo::FillRule::EvenOdd);
    let _ = ctx.fill();
    ctx.restore().ok();
}
