//! The seam to the expression evaluator.
//!
//! Parsing function text is the job of an external expression engine. The
//! plotter only needs something that turns text into an [`Evaluator`] and an
//! evaluator that maps `x` to `y`. [`FnEvaluator`] and [`FunctionTable`] cover
//! hosts that build functions from Rust closures.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{EvalError, ParseError};

/// A compiled function of one real variable.
pub trait Evaluator {
    /// Evaluate the function at `x`.
    ///
    /// Returning a non-finite value is allowed; callers treat it as
    /// undefined at `x`.
    fn evaluate(&self, x: f64) -> Result<f64, EvalError>;
}

/// Owned evaluator handle held by a plot session.
pub type BoxedEvaluator = Box<dyn Evaluator + Send + Sync>;

/// Compiles function text into an evaluator.
pub trait Compiler {
    /// Compile `source` or report why it cannot be compiled.
    fn compile(&self, source: &str) -> Result<BoxedEvaluator, ParseError>;
}

/// Evaluator backed by a closure.
pub struct FnEvaluator<F> {
    function: F,
}

impl<F> FnEvaluator<F>
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    /// Wrap a fallible closure.
    pub fn new(function: F) -> Self {
        Self { function }
    }
}

impl<F> Evaluator for FnEvaluator<F>
where
    F: Fn(f64) -> Result<f64, EvalError>,
{
    fn evaluate(&self, x: f64) -> Result<f64, EvalError> {
        (self.function)(x)
    }
}

impl<F> fmt::Debug for FnEvaluator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FnEvaluator(..)")
    }
}

type SharedFunction = Arc<dyn Fn(f64) -> Result<f64, EvalError> + Send + Sync>;

/// A [`Compiler`] over a fixed set of named functions.
///
/// Names are matched after stripping whitespace, so `"sin( x )"` finds
/// `"sin(x)"`.
#[derive(Clone, Default)]
pub struct FunctionTable {
    functions: HashMap<String, SharedFunction>,
}

impl FunctionTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with a handful of common functions.
    pub fn standard() -> Self {
        Self::new()
            .with("sin(x)", f64::sin)
            .with("cos(x)", f64::cos)
            .with("tan(x)", f64::tan)
            .with("x", |x| x)
            .with("x^2", |x| x * x)
            .with("x^3/40", |x| x * x * x / 40.0)
            .with("sqrt(x)", f64::sqrt)
            .with("1/x", |x| 1.0 / x)
            .with("0", |_| 0.0)
    }

    /// Register an infallible function under `name`.
    pub fn with(self, name: &str, function: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        self.with_fallible(name, move |x| Ok(function(x)))
    }

    /// Register a fallible function under `name`.
    pub fn with_fallible(
        mut self,
        name: &str,
        function: impl Fn(f64) -> Result<f64, EvalError> + Send + Sync + 'static,
    ) -> Self {
        self.functions.insert(normalize(name), Arc::new(function));
        self
    }

    /// Registered names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }
}

impl Compiler for FunctionTable {
    fn compile(&self, source: &str) -> Result<BoxedEvaluator, ParseError> {
        let key = normalize(source);
        if key.is_empty() {
            return Err(ParseError::new(source, "empty expression"));
        }
        let function = self
            .functions
            .get(&key)
            .cloned()
            .ok_or_else(|| ParseError::new(source, "unknown function"))?;
        Ok(Box::new(FnEvaluator::new(move |x| function(x))))
    }
}

impl fmt::Debug for FunctionTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("FunctionTable")
            .field("functions", &names)
            .finish()
    }
}

fn normalize(source: &str) -> String {
    source.chars().filter(|c| !c.is_whitespace()).collect()
}
