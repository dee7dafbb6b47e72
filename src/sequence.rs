//! Append-only storage for the points of one plot.
//!
//! A [`PointSequence`] holds every point drawn since the last reset, in
//! increasing X order. Discontinuities are recorded as breaks so the renderer
//! can end one stroke and start the next without ever connecting the two
//! sides.

use crate::error::AppendError;
use crate::geom::Point;

/// Append-only point storage with stroke breaks and a resume position.
#[derive(Debug, Clone, Default)]
pub struct PointSequence {
    points: Vec<Point>,
    /// Indices into `points` where a new stroke starts (never 0).
    breaks: Vec<usize>,
    resume_x: Option<f64>,
    generation: u64,
}

impl PointSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point, extending the current stroke.
    ///
    /// X values must be strictly increasing across the whole sequence.
    pub fn push_point(&mut self, point: Point) -> Result<usize, AppendError> {
        if !point.is_finite() {
            return Err(AppendError::NonFinite);
        }
        if let Some(last) = self.points.last() {
            if point.x <= last.x {
                return Err(AppendError::NonMonotonicX);
            }
        }
        let index = self.points.len();
        self.points.push(point);
        Ok(index)
    }

    /// End the current stroke; the next point starts a new one.
    ///
    /// Consecutive breaks and breaks before the first point collapse.
    pub fn push_break(&mut self) {
        let len = self.points.len();
        if len == 0 || self.breaks.last() == Some(&len) {
            return;
        }
        self.breaks.push(len);
    }

    /// Remove all points and breaks.
    pub fn clear(&mut self) {
        self.points.clear();
        self.breaks.clear();
        self.resume_x = None;
        self.generation = self.generation.wrapping_add(1);
    }

    /// All points in X order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Whether no point has been appended.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Last appended point.
    pub fn last(&self) -> Option<Point> {
        self.points.last().copied()
    }

    /// Stroke start indices after the first stroke.
    pub fn breaks(&self) -> &[usize] {
        &self.breaks
    }

    /// Iterate over the continuous strokes, skipping empty ones.
    pub fn segments(&self) -> Segments<'_> {
        Segments {
            points: &self.points,
            breaks: &self.breaks,
            start: 0,
            next_break: 0,
        }
    }

    /// Number of continuous strokes.
    pub fn segment_count(&self) -> usize {
        self.segments().count()
    }

    /// Next X an interrupted sweep continues from.
    pub fn resume_x(&self) -> Option<f64> {
        self.resume_x
    }

    /// Record where an interrupted sweep continues from.
    pub fn set_resume_x(&mut self, x: f64) {
        self.resume_x = Some(x);
    }

    /// Counter bumped every time the sequence is cleared.
    ///
    /// Caches of projected points compare it to detect resets.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Iterator over the strokes of a [`PointSequence`].
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    points: &'a [Point],
    breaks: &'a [usize],
    start: usize,
    next_break: usize,
}

impl<'a> Iterator for Segments<'a> {
    type Item = &'a [Point];

    fn next(&mut self) -> Option<Self::Item> {
        while self.start < self.points.len() {
            let end = self
                .breaks
                .get(self.next_break)
                .copied()
                .unwrap_or(self.points.len());
            let segment = &self.points[self.start..end];
            self.start = end;
            self.next_break += 1;
            if !segment.is_empty() {
                return Some(segment);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_non_monotonic_and_non_finite_points() {
        let mut seq = PointSequence::new();
        assert_eq!(seq.push_point(Point::new(0.0, 1.0)), Ok(0));
        assert_eq!(
            seq.push_point(Point::new(0.0, 2.0)),
            Err(AppendError::NonMonotonicX)
        );
        assert_eq!(
            seq.push_point(Point::new(1.0, f64::NAN)),
            Err(AppendError::NonFinite)
        );
        assert_eq!(seq.len(), 1);
    }

    #[test]
    fn breaks_split_segments_and_collapse() {
        let mut seq = PointSequence::new();
        seq.push_break();
        seq.push_point(Point::new(0.0, 0.0)).unwrap();
        seq.push_point(Point::new(1.0, 0.0)).unwrap();
        seq.push_break();
        seq.push_break();
        seq.push_point(Point::new(2.0, 0.0)).unwrap();
        seq.push_break();

        assert_eq!(seq.breaks(), &[2, 3]);
        let segments: Vec<_> = seq.segments().map(<[Point]>::len).collect();
        assert_eq!(segments, vec![2, 1]);
    }

    #[test]
    fn clear_resets_points_and_bumps_generation() {
        let mut seq = PointSequence::new();
        seq.push_point(Point::new(0.0, 0.0)).unwrap();
        seq.set_resume_x(0.5);
        let generation = seq.generation();
        seq.clear();
        assert!(seq.is_empty());
        assert_eq!(seq.resume_x(), None);
        assert_eq!(seq.segment_count(), 0);
        assert_ne!(seq.generation(), generation);
    }
}
