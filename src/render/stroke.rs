use std::sync::Arc;

use crate::geom::ScreenPoint;
use crate::sequence::PointSequence;
use crate::transform::Transform;

/// Cache key for projected stroke data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderCacheKey {
    /// Surface size in logical pixels.
    pub size: (f32, f32),
    /// Sequence generation the cache was built from.
    pub generation: u64,
}

/// Screen-space strokes built incrementally from a [`PointSequence`].
///
/// While the key is unchanged, an update only projects points appended since
/// the previous update. A new key (resize or cleared sequence) rebuilds once.
/// Finished strokes are shared, so handing them out never copies them; only
/// the stroke still being extended is re-published after an append.
#[derive(Debug, Clone, Default)]
pub struct StrokeCache {
    key: Option<RenderCacheKey>,
    closed: Vec<Arc<[ScreenPoint]>>,
    open: Vec<ScreenPoint>,
    published: Option<Arc<[ScreenPoint]>>,
    consumed: usize,
    next_break: usize,
}

impl StrokeCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all projected data.
    pub fn invalidate(&mut self) {
        self.key = None;
        self.closed.clear();
        self.open.clear();
        self.published = None;
        self.consumed = 0;
        self.next_break = 0;
    }

    /// Bring the cache up to date with `sequence` under `transform`.
    ///
    /// Returns the number of points projected by this call.
    pub fn update(&mut self, sequence: &PointSequence, transform: &Transform) -> usize {
        let key = RenderCacheKey {
            size: (transform.width(), transform.height()),
            generation: sequence.generation(),
        };
        if self.key != Some(key) || sequence.len() < self.consumed {
            self.invalidate();
            self.key = Some(key);
        }

        let points = sequence.points();
        let breaks = sequence.breaks();
        let start = self.consumed;
        for (index, point) in points.iter().enumerate().skip(start) {
            let mut split = false;
            while let Some(&at) = breaks.get(self.next_break) {
                if at > index {
                    break;
                }
                split |= at == index;
                self.next_break += 1;
            }
            if split && !self.open.is_empty() {
                self.closed.push(Arc::from(std::mem::take(&mut self.open)));
            }
            self.open.push(transform.to_pixel(*point));
        }
        self.consumed = points.len();
        if self.consumed != start || self.published.is_none() {
            self.published = (!self.open.is_empty()).then(|| Arc::from(self.open.as_slice()));
        }
        self.consumed - start
    }

    /// Projected strokes in drawing order.
    pub fn strokes(&self) -> impl Iterator<Item = &Arc<[ScreenPoint]>> {
        self.closed.iter().chain(self.published.as_ref())
    }

    /// Number of projected strokes.
    pub fn stroke_count(&self) -> usize {
        self.closed.len() + usize::from(self.published.is_some())
    }
}
