//! Sampling and validation of a compiled function.

use crate::error::EvalError;
use crate::eval::Evaluator;
use crate::geom::{Point, ScreenPoint};
use crate::sequence::PointSequence;
use crate::transform::Transform;

/// Classification of the function at one X position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// Evaluation failed or produced NaN/infinity.
    Invalid,
    /// A finite value that falls outside the visible window.
    OutOfView,
    /// A finite, visible value.
    Valid {
        /// The sampled data point.
        point: Point,
        /// Its pixel projection.
        screen: ScreenPoint,
    },
}

impl Sample {
    /// Whether the sample can be drawn.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }
}

/// Evaluate the function at `x` and classify the result.
pub fn classify<E>(evaluator: &E, x: f64, transform: &Transform) -> Sample
where
    E: Evaluator + ?Sized,
{
    let y = match evaluator.evaluate(x) {
        Ok(y) if y.is_finite() => y,
        _ => return Sample::Invalid,
    };
    if !transform.viewport().y.contains(y) {
        return Sample::OutOfView;
    }
    let point = Point::new(x, y);
    if !transform.contains(point) {
        return Sample::OutOfView;
    }
    Sample::Valid {
        point,
        screen: transform.to_pixel(point),
    }
}

/// Validate a function once before committing to a draw.
///
/// Succeeds with the probed value when it is a finite number.
pub fn probe<E>(evaluator: &E, x: f64) -> Result<f64, EvalError>
where
    E: Evaluator + ?Sized,
{
    let y = evaluator.evaluate(x)?;
    if y.is_finite() {
        Ok(y)
    } else {
        Err(EvalError::NonFinite { x })
    }
}

/// Sample the full domain into `out` with a fixed X step.
///
/// X positions are computed from an integer index so long sweeps do not
/// drift. Invalid and out-of-view samples end the current stroke. Returns
/// the number of points appended.
pub fn sample_range<E>(
    evaluator: &E,
    transform: &Transform,
    step: f64,
    out: &mut PointSequence,
) -> usize
where
    E: Evaluator + ?Sized,
{
    if !step.is_finite() || step <= 0.0 {
        return 0;
    }
    let range = transform.viewport().x;
    let count = (range.span() / step).floor() as usize;
    let mut appended = 0;
    for index in 0..=count {
        let x = range.min + step * index as f64;
        if x > range.max {
            break;
        }
        match classify(evaluator, x, transform) {
            Sample::Valid { point, .. } => {
                if out.push_point(point).is_ok() {
                    appended += 1;
                }
            }
            Sample::OutOfView | Sample::Invalid => out.push_break(),
        }
    }
    appended
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FULL_DRAW_STEP;
    use crate::eval::FnEvaluator;
    use crate::view::Viewport;

    fn transform() -> Transform {
        Transform::new(Viewport::default(), 800.0, 400.0).expect("valid transform")
    }

    #[test]
    fn classify_distinguishes_all_outcomes() {
        let transform = transform();
        let square = FnEvaluator::new(|x: f64| Ok(x * x));
        assert!(classify(&square, 3.0, &transform).is_valid());
        assert_eq!(classify(&square, 4.0, &transform), Sample::OutOfView);

        let recip = FnEvaluator::new(|x: f64| Ok(1.0 / x));
        assert_eq!(classify(&recip, 0.0, &transform), Sample::Invalid);

        let failing = FnEvaluator::new(|x| Err(EvalError::failed(x, "nope")));
        assert_eq!(classify(&failing, 1.0, &transform), Sample::Invalid);

        let nan = FnEvaluator::new(|x: f64| Ok(x.sqrt()));
        assert_eq!(classify(&nan, -1.0, &transform), Sample::Invalid);
    }

    #[test]
    fn classify_treats_range_edges_uniformly() {
        let transform = transform();
        let top = FnEvaluator::new(|_| Ok(10.0));
        assert!(classify(&top, 0.0, &transform).is_valid());
        let bottom = FnEvaluator::new(|_| Ok(-10.0));
        assert_eq!(classify(&bottom, 0.0, &transform), Sample::OutOfView);
        let zero = FnEvaluator::new(|_| Ok(0.0));
        assert_eq!(classify(&zero, 20.0, &transform), Sample::OutOfView);
    }

    #[test]
    fn probe_rejects_failures_and_non_finite_values() {
        let recip = FnEvaluator::new(|x: f64| Ok(1.0 / x));
        assert_eq!(probe(&recip, 0.0), Err(EvalError::NonFinite { x: 0.0 }));
        let sin = FnEvaluator::new(|x: f64| Ok(x.sin()));
        assert_eq!(probe(&sin, 0.0), Ok(0.0));
    }

    #[test]
    fn sine_full_draw_is_one_unbroken_stroke() {
        let sin = FnEvaluator::new(|x: f64| Ok(x.sin()));
        let mut seq = PointSequence::new();
        let appended = sample_range(&sin, &transform(), FULL_DRAW_STEP, &mut seq);
        // -20.0 ..= 19.9; x = 20.0 lands on the right edge.
        assert_eq!(appended, 400);
        assert_eq!(seq.segment_count(), 1);
    }

    #[test]
    fn tangent_breaks_at_each_asymptote() {
        let tan = FnEvaluator::new(|x: f64| Ok(x.tan()));
        let mut seq = PointSequence::new();
        sample_range(&tan, &transform(), FULL_DRAW_STEP, &mut seq);
        // 12 asymptotes at odd multiples of pi/2 inside [-20, 20].
        assert_eq!(seq.segment_count(), 13);
        for segment in seq.segments() {
            for pair in segment.windows(2) {
                assert!((pair[1].y - pair[0].y).abs() < 10.0);
            }
        }
    }

    #[test]
    fn rejects_degenerate_steps() {
        let sin = FnEvaluator::new(|x: f64| Ok(x.sin()));
        let mut seq = PointSequence::new();
        assert_eq!(sample_range(&sin, &transform(), 0.0, &mut seq), 0);
        assert_eq!(sample_range(&sin, &transform(), f64::NAN, &mut seq), 0);
    }
}
