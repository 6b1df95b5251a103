/// Syntax errors.
///
/// Defines the error raised when an expression, or one of the
/// sub-expressions it is split into, does not fit the expression grammar.
/// The error carries the text of the (sub)expression that failed to scan.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the error type returned by the evaluator entry points. Besides
/// wrapping syntax errors it reports exhausted nesting depth and failures of
/// the trace sink.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
