//! # mathparse
//!
//! mathparse evaluates arithmetic expressions written as text: signed decimal
//! numbers, the binary operators `+ - * / ^` and nested parentheses.
//!
//! Evaluation is one recursive scan. Each level passes over its substring
//! once, validating the syntax and locating the weakest top-level operator,
//! then evaluates the two operands on the next level. There is no token list
//! and no syntax tree.
//!
//! Operators of equal binding strength group **right to left** by default:
//! `8 - 3 - 2` is `8 - (3 - 2)`, which is `7`. See
//! [`interpreter::scanner::Grouping`] for the alternative.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    trace::TraceSink,
};

/// Provides the error types for evaluation.
///
/// This module defines the syntax error raised for malformed input and the
/// evaluation error returned by every entry point. Errors carry the text of
/// the (sub)expression that failed so a user can see which operand was at
/// fault.
///
/// # Responsibilities
/// - Defines one type per failure family (syntax, evaluation).
/// - Implements `Display` and `std::error::Error` for reporting.
pub mod error;
/// Scans and evaluates expressions.
///
/// This module ties together the scan-state machine, literal accumulation,
/// operator semantics, trace output and the recursive evaluator.
///
/// # Responsibilities
/// - Validates each expression level in a single character pass.
/// - Chooses the operator that splits an expression.
/// - Evaluates operands depth-first and reports each binary step.
pub mod interpreter;
/// Line-oriented calculator sessions.
///
/// Formats results and errors for users, either one line at a time for an
/// interactive prompt or for a whole script file.
pub mod repl;

/// Evaluates an expression with the default settings.
///
/// Shorthand for [`Evaluator::new`] followed by [`Evaluator::evaluate`].
///
/// # Errors
/// Returns an error if the expression is malformed, nested too deeply, or the
/// trace sink fails.
///
/// # Examples
/// ```
/// use mathparse::evaluate;
///
/// assert_eq!(evaluate("(2 + 3) * 4", None).unwrap(), 20.0);
/// assert_eq!(evaluate("8 - 3 - 2", None).unwrap(), 7.0);
///
/// // Two literals with no operator between them.
/// assert!(evaluate("2 3", None).is_err());
/// ```
pub fn evaluate(expression: &str, trace: Option<&mut dyn TraceSink>) -> EvalResult<f64> {
    Evaluator::new().evaluate(expression, trace)
}
