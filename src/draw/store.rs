//! Append-only store for committed segments and their measurements.

use super::segment::{LineSegment, Measurement};
use serde::{Deserialize, Serialize};

/// Ordered collection of committed strokes and their paired measurements.
///
/// The store is append-only for the lifetime of a session: no reordering,
/// no in-place edits, no deletion. Every committed segment has exactly one
/// measurement at the same index, so `segments().len() == measurements().len()`
/// holds after every commit.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SegmentStore {
    segments: Vec<LineSegment>,
    measurements: Vec<Measurement>,
}

impl SegmentStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether nothing has been committed yet.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Committed segments in commit order (first = bottom layer).
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// Measurements in commit order, index-aligned with `segments()`.
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// Attempts to commit a segment, enforcing a maximum count when `max` > 0.
    ///
    /// The paired measurement is derived and appended in the same call so the
    /// two sequences can never diverge. Returns `true` if the segment was
    /// committed, `false` if the limit would be exceeded.
    pub fn try_commit(&mut self, segment: LineSegment, max: usize) -> bool {
        if max == 0 || self.segments.len() < max {
            self.measurements.push(Measurement::of(&segment));
            self.segments.push(segment);
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::point::Point;

    fn segment(x1: f64, y1: f64, x2: f64, y2: f64) -> LineSegment {
        LineSegment {
            start: Point::new(x1, y1),
            end: Point::new(x2, y2),
        }
    }

    #[test]
    fn commit_keeps_segments_and_measurements_in_lockstep() {
        let mut store = SegmentStore::new();
        assert!(store.try_commit(segment(0.0, 0.0, 10.0, 0.0), 0));
        assert!(store.try_commit(segment(10.0, 0.0, 10.0, 10.0), 0));

        assert_eq!(store.len(), 2);
        assert_eq!(store.segments().len(), store.measurements().len());
        for (seg, m) in store.segments().iter().zip(store.measurements()) {
            assert_eq!(seg.start, m.start);
            assert_eq!(seg.end, m.end);
        }
    }

    #[test]
    fn commit_order_is_preserved() {
        let mut store = SegmentStore::new();
        store.try_commit(segment(0.0, 0.0, 1.0, 0.0), 0);
        store.try_commit(segment(2.0, 0.0, 3.0, 0.0), 0);

        assert_eq!(store.segments()[0].start, Point::new(0.0, 0.0));
        assert_eq!(store.segments()[1].start, Point::new(2.0, 0.0));
    }

    #[test]
    fn try_commit_respects_limit() {
        let mut store = SegmentStore::new();
        assert!(store.try_commit(segment(0.0, 0.0, 1.0, 1.0), 1));
        assert!(!store.try_commit(segment(1.0, 1.0, 2.0, 2.0), 1));
        assert_eq!(store.len(), 1);
        assert_eq!(store.measurements().len(), 1);
    }

    #[test]
    fn zero_length_segments_are_committed_like_any_other() {
        let mut store = SegmentStore::new();
        assert!(store.try_commit(segment(5.0, 5.0, 5.0, 5.0), 0));
        assert_eq!(store.len(), 1);
        assert_eq!(store.measurements()[0].length(), 0.0);
    }
}
