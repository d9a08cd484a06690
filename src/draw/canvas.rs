//! Canvas placement and pointer coordinate mapping.

use super::point::Point;

/// Placement of the fixed-size drawing canvas on the overlay surface.
///
/// The backend reports pointer positions in surface coordinates; everything
/// the drawing core stores is in drawing-surface coordinates local to the
/// canvas. This type owns that translation, so mapped points are independent
/// of where the canvas happens to sit on the output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasGeometry {
    origin_x: f64,
    origin_y: f64,
    width: f64,
    height: f64,
}

impl CanvasGeometry {
    /// Creates an unplaced canvas of the given size, origin at (0, 0).
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            width,
            height,
        }
    }

    /// Centers the canvas within a surface of the given dimensions.
    ///
    /// When the surface is smaller than the canvas, the origin clamps to 0
    /// and the overflow is simply cut off by the output edge.
    pub fn place_within(&mut self, surface_width: f64, surface_height: f64) {
        self.origin_x = ((surface_width - self.width) / 2.0).max(0.0);
        self.origin_y = ((surface_height - self.height) / 2.0).max(0.0);
    }

    /// Canvas origin in surface coordinates.
    pub fn origin(&self) -> (f64, f64) {
        (self.origin_x, self.origin_y)
    }

    /// Canvas width in drawing-space units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in drawing-space units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Maps a surface-space pointer position into drawing-surface coordinates.
    ///
    /// Positions outside the canvas map to coordinates outside the
    /// `0..width` / `0..height` range; no clamping is applied.
    pub fn to_canvas(&self, surface_x: f64, surface_y: f64) -> Point {
        Point::new(surface_x - self.origin_x, surface_y - self.origin_y)
    }

    /// Whether a surface-space position falls on the canvas sheet.
    pub fn contains(&self, surface_x: f64, surface_y: f64) -> bool {
        surface_x >= self.origin_x
            && surface_x < self.origin_x + self.width
            && surface_y >= self.origin_y
            && surface_y < self.origin_y + self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_subtracts_the_canvas_origin() {
        let mut canvas = CanvasGeometry::new(1140.0, 700.0);
        canvas.place_within(1920.0, 1080.0);

        let (ox, oy) = canvas.origin();
        assert_eq!(ox, 390.0);
        assert_eq!(oy, 190.0);
        assert_eq!(canvas.to_canvas(400.0, 200.0), Point::new(10.0, 10.0));
    }

    #[test]
    fn mapping_is_translation_invariant() {
        let mut on_small = CanvasGeometry::new(400.0, 300.0);
        on_small.place_within(800.0, 600.0);

        let mut on_large = CanvasGeometry::new(400.0, 300.0);
        on_large.place_within(2560.0, 1440.0);

        // Same canvas-relative pointer position on both outputs.
        let (sx, sy) = on_small.origin();
        let (lx, ly) = on_large.origin();
        let small_point = on_small.to_canvas(sx + 33.0, sy + 47.0);
        let large_point = on_large.to_canvas(lx + 33.0, ly + 47.0);

        assert_eq!(small_point, large_point);
        assert_eq!(small_point, Point::new(33.0, 47.0));
    }

    #[test]
    fn out_of_canvas_positions_map_without_clamping() {
        let mut canvas = CanvasGeometry::new(100.0, 100.0);
        canvas.place_within(300.0, 300.0);

        let point = canvas.to_canvas(0.0, 0.0);
        assert_eq!(point, Point::new(-100.0, -100.0));
    }

    #[test]
    fn contains_matches_the_canvas_rectangle() {
        let mut canvas = CanvasGeometry::new(100.0, 50.0);
        canvas.place_within(300.0, 150.0);

        assert!(canvas.contains(100.0, 50.0));
        assert!(canvas.contains(199.9, 99.9));
        assert!(!canvas.contains(99.9, 50.0));
        assert!(!canvas.contains(200.0, 50.0));
        assert!(!canvas.contains(100.0, 100.0));
    }

    #[test]
    fn placement_clamps_when_surface_is_smaller_than_canvas() {
        let mut canvas = CanvasGeometry::new(1140.0, 700.0);
        canvas.place_within(1024.0, 600.0);
        assert_eq!(canvas.origin(), (0.0, 0.0));
    }
}
