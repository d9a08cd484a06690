//! Committed stroke and measurement definitions.

use super::point::Point;
use serde::{Deserialize, Serialize};

/// A committed straight stroke between two drawing-space points.
///
/// Created only when an in-progress draw is committed (pointer release or the
/// stop key) and never mutated afterwards. A segment carries no styling of its
/// own; the whole store is repainted with the active pen.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Where the draw started
    pub start: Point,
    /// Where the draw was committed
    pub end: Point,
}

impl LineSegment {
    /// Length of the segment in drawing-space units.
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Midpoint of the segment, where its label is anchored.
    pub fn midpoint(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

/// The measurement paired with a committed segment.
///
/// Stores the segment's endpoints rather than a precomputed scalar; the length
/// is recomputed whenever the label is rendered, so measurement and stroke can
/// never disagree.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Measured stroke's start point
    pub start: Point,
    /// Measured stroke's end point
    pub end: Point,
}

impl Measurement {
    /// Derives the measurement for a segment.
    pub fn of(segment: &LineSegment) -> Self {
        Self {
            start: segment.start,
            end: segment.end,
        }
    }

    /// Measured length in drawing-space units.
    pub fn length(&self) -> f64 {
        self.start.distance_to(self.end)
    }

    /// Label anchor point (segment midpoint).
    pub fn anchor(&self) -> Point {
        self.start.midpoint(self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_length_is_euclidean() {
        let segment = LineSegment {
            start: Point::new(10.0, 10.0),
            end: Point::new(50.0, 10.0),
        };
        assert!((segment.length() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn degenerate_segment_has_zero_length() {
        let segment = LineSegment {
            start: Point::new(0.0, 0.0),
            end: Point::new(0.0, 0.0),
        };
        assert_eq!(segment.length(), 0.0);
    }

    #[test]
    fn measurement_mirrors_its_segment() {
        let segment = LineSegment {
            start: Point::new(2.0, 3.0),
            end: Point::new(6.0, 6.0),
        };
        let measurement = Measurement::of(&segment);
        assert_eq!(measurement.start, segment.start);
        assert_eq!(measurement.end, segment.end);
        assert_eq!(measurement.length(), segment.length());
        assert_eq!(measurement.anchor(), segment.midpoint());
    }
}
