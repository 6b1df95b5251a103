use log::{debug, trace, warn};

use crate::{
    error::EvalError,
    interpreter::{
        scanner::{Grouping, Shape, scan},
        trace::TraceSink,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Default maximum recursion depth.
pub const DEFAULT_MAX_DEPTH: usize = 1024;

/// Stores the evaluation settings.
///
/// An `Evaluator` carries no state between calls. It is created once and
/// reused for any number of expressions, from any number of threads.
///
/// ## Usage
///
/// ```
/// use mathparse::interpreter::{evaluator::core::Evaluator, scanner::Grouping};
///
/// let evaluator = Evaluator::new().with_grouping(Grouping::LeftToRight);
/// assert_eq!(evaluator.evaluate("8 - 3 - 2", None).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluator {
    /// Deepest recursion allowed before evaluation is abandoned. Every
    /// operator split and every unwrapped parenthesis pair is one level.
    pub max_depth: usize,
    /// Tie rule for operators of equal binding strength.
    pub grouping:  Grouping,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Creates an evaluator with the default depth limit and right-to-left
    /// grouping.
    #[must_use]
    pub const fn new() -> Self {
        Self { max_depth: DEFAULT_MAX_DEPTH,
               grouping:  Grouping::RightToLeft, }
    }

    /// Returns a copy with a different recursion limit.
    #[must_use]
    pub const fn with_max_depth(self, max_depth: usize) -> Self {
        Self { max_depth, ..self }
    }

    /// Returns a copy with a different grouping policy.
    #[must_use]
    pub const fn with_grouping(self, grouping: Grouping) -> Self {
        Self { grouping, ..self }
    }

    /// Evaluates an expression and returns its value.
    ///
    /// This is the main entry point. The expression is scanned; a binary
    /// split evaluates its left operand, then its right operand, then applies
    /// the operator. A parenthesized group is unwrapped and evaluated again.
    /// A literal is returned as is.
    ///
    /// When `trace` is given it receives one line per binary operation, in
    /// the order the operations complete.
    ///
    /// # Errors
    /// - [`EvalError::Syntax`] carrying the first (sub)expression that failed
    ///   to scan, depth-first.
    /// - [`EvalError::NestingTooDeep`] once the recursion exceeds
    ///   [`Evaluator::max_depth`].
    /// - [`EvalError::Trace`] when the sink refuses a line.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::evaluator::core::Evaluator;
    ///
    /// let evaluator = Evaluator::new();
    /// let mut lines: Vec<String> = Vec::new();
    ///
    /// assert_eq!(evaluator.evaluate("1 + 2 * 3", Some(&mut lines)).unwrap(), 7.0);
    /// assert_eq!(lines, ["[2] <*> [3] = [6]", "[1] <+> [6] = [7]"]);
    /// ```
    pub fn evaluate(&self, expression: &str, trace: Option<&mut dyn TraceSink>) -> EvalResult<f64> {
        let mut trace = trace;
        self.eval_nested(expression, 0, &mut trace)
    }

    fn eval_nested(&self,
                   expression: &str,
                   depth: usize,
                   trace: &mut Option<&mut dyn TraceSink>)
                   -> EvalResult<f64> {
        if depth > self.max_depth {
            warn!("nesting limit of {} reached", self.max_depth);
            return Err(EvalError::NestingTooDeep { limit: self.max_depth });
        }

        match scan(expression, self.grouping)? {
            Shape::Binary { lhs, op, rhs } => {
                debug!("splitting '{expression}' at '{op}'");
                let left = self.eval_nested(lhs, depth + 1, trace)?;
                let right = self.eval_nested(rhs, depth + 1, trace)?;
                Self::eval_binary(op, left, right, trace)
            },
            Shape::Literal(value) => {
                trace!("literal '{}' = {value}", expression.trim());
                Ok(value)
            },
            Shape::Group { inner } => {
                debug!("unwrapping group '{inner}'");
                self.eval_nested(inner, depth + 1, trace)
            },
        }
    }
}
