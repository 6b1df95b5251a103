/// The evaluator module drives the recursive evaluation.
///
/// The evaluator scans an expression, evaluates the operands of the weakest
/// top-level operator depth-first, unwraps parenthesized groups, and returns
/// literals. It owns the evaluation settings.
///
/// # Responsibilities
/// - Recurses over operand and group substrings, `lhs` before `rhs`.
/// - Guards the recursion depth.
/// - Emits one trace line per binary operation.
pub mod evaluator;
/// Signed decimal literal accumulation.
///
/// Tracks the sign, digits and span of a literal during scanning and
/// converts it to an `f64`.
pub mod literal;
/// Binary operators.
///
/// Classifies operator characters, ranks their binding strength and applies
/// them with IEEE-754 semantics.
pub mod operator;
/// The scan-state machine.
///
/// A single pass over one expression level that validates syntax, picks the
/// splitting operator and resolves literals, without producing tokens.
///
/// # Responsibilities
/// - Classifies every character according to the current scan state.
/// - Tracks parenthesis depth so nested operators never split.
/// - Reports the shape of the expression or a syntax error.
pub mod scanner;
/// Trace output.
///
/// Defines the sink that receives a line of text for every binary operation
/// and the implementations shipped with the crate.
pub mod trace;
