#[derive(Debug, Clone, PartialEq, Eq)]
/// The expression text does not conform to the grammar.
///
/// `expression` is the exact substring that was being scanned when the
/// failure was detected. For errors found while evaluating an operand this is
/// the operand's text, not the whole input line.
pub struct SyntaxError {
    /// The (sub)expression that failed.
    pub expression: String,
}

impl SyntaxError {
    /// Creates a syntax error for the given (sub)expression.
    ///
    /// # Example
    /// ```
    /// use mathparse::error::SyntaxError;
    ///
    /// let err = SyntaxError::new("2 @ 3");
    /// assert_eq!(err.expression, "2 @ 3");
    /// ```
    #[must_use]
    pub fn new(expression: &str) -> Self {
        Self { expression: expression.to_string() }
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Syntax error in expression '{}'.", self.expression)
    }
}

impl std::error::Error for SyntaxError {}
