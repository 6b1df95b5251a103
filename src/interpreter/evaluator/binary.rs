use crate::interpreter::{
    evaluator::core::{EvalResult, Evaluator},
    operator::Operator,
    trace::{TraceSink, format_step},
};

impl Evaluator {
    /// Evaluates a binary operation between two evaluated operands.
    ///
    /// The operator is applied with IEEE-754 semantics, so no operand
    /// combination fails: division by zero gives an infinity or NaN. If a
    /// trace sink is present, the step is written to it before the result is
    /// returned.
    ///
    /// # Parameters
    /// - `op`: The splitting operator.
    /// - `lhs`: Value of the left operand.
    /// - `rhs`: Value of the right operand.
    /// - `trace`: Optional sink for the step line.
    ///
    /// # Returns
    /// An `EvalResult<f64>` containing `lhs op rhs`.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::{
    ///     evaluator::core::Evaluator, operator::Operator, trace::TraceSink,
    /// };
    ///
    /// let mut lines: Vec<String> = Vec::new();
    /// let mut trace: Option<&mut dyn TraceSink> = Some(&mut lines);
    ///
    /// let result = Evaluator::eval_binary(Operator::Pow, 2.0, 10.0, &mut trace).unwrap();
    /// assert_eq!(result, 1024.0);
    /// assert_eq!(lines, ["[2] <^> [10] = [1024]"]);
    /// ```
    pub fn eval_binary(op: Operator,
                       lhs: f64,
                       rhs: f64,
                       trace: &mut Option<&mut dyn TraceSink>)
                       -> EvalResult<f64> {
        let result = op.apply(lhs, rhs);

        if let Some(sink) = trace.as_mut() {
            sink.write_line(&format_step(lhs, op, rhs, result))?;
        }

        Ok(result)
    }
}
