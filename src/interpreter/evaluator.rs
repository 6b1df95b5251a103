/// Evaluation entry points and settings.
///
/// Holds the [`core::Evaluator`] with its depth guard and grouping policy,
/// and the recursion that resolves each scanned shape.
pub mod core;

/// Binary operation evaluation.
///
/// Applies a splitting operator to its evaluated operands and reports the
/// step to the trace sink.
pub mod binary;
