use crate::error::SyntaxError;

#[derive(Debug)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The input, or one of its operands, is malformed.
    Syntax(SyntaxError),
    /// Operator or parenthesis nesting went deeper than the evaluator allows.
    NestingTooDeep {
        /// The configured maximum recursion depth.
        limit: usize,
    },
    /// The trace sink refused a line.
    Trace(std::io::Error),
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Syntax(err) => write!(f, "{err}"),
            Self::NestingTooDeep { limit } => {
                write!(f, "Expression is nested too deeply (limit is {limit} levels).")
            },
            Self::Trace(err) => write!(f, "Failed to write trace output: {err}."),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Syntax(err) => Some(err),
            Self::NestingTooDeep { .. } => None,
            Self::Trace(err) => Some(err),
        }
    }
}

impl From<SyntaxError> for EvalError {
    fn from(err: SyntaxError) -> Self {
        Self::Syntax(err)
    }
}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        Self::Trace(err)
    }
}

impl EvalError {
    /// Returns the syntax error carried by this error, if any.
    #[must_use]
    pub const fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(err) => Some(err),
            _ => None,
        }
    }
}
