//! Error types.

use thiserror::Error;

/// The function text could not be compiled into an evaluator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("cannot parse `{source_text}`: {reason}")]
pub struct ParseError {
    /// The rejected function text.
    pub source_text: String,
    /// Human readable reason reported by the compiler.
    pub reason: String,
}

impl ParseError {
    /// Create a parse error for the given input.
    pub fn new(source_text: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            source_text: source_text.into(),
            reason: reason.into(),
        }
    }
}

/// A compiled function failed to produce a usable value.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// The evaluator itself reported a failure.
    #[error("evaluation failed at x = {x}: {reason}")]
    Failed {
        /// Input that failed.
        x: f64,
        /// Reason reported by the evaluator.
        reason: String,
    },
    /// The evaluator returned NaN or an infinity.
    #[error("f({x}) is not a finite number")]
    NonFinite {
        /// Input that produced the value.
        x: f64,
    },
}

impl EvalError {
    /// Create an evaluator failure.
    pub fn failed(x: f64, reason: impl Into<String>) -> Self {
        Self::Failed {
            x,
            reason: reason.into(),
        }
    }
}

/// Terminal failure of a plot attempt, rendered in place of the curve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlotError {
    /// The function text did not compile.
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// The function failed at the validation probe.
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvalError),
}

/// Errors that can occur when appending to a
/// [`PointSequence`](crate::sequence::PointSequence).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppendError {
    /// Appended X values must be strictly increasing.
    #[error("x values must be strictly increasing")]
    NonMonotonicX,
    /// Point had a NaN or infinite coordinate.
    #[error("point is not finite")]
    NonFinite,
}
