use crate::error::SyntaxError;

/// Accumulates one signed decimal literal while it is being scanned.
///
/// The scanner feeds the literal its sign, digits and decimal point as they
/// appear. The sign is kept as a flag; for the magnitude only the span of the
/// digit run and the digit count are tracked. [`Literal::value`] converts the
/// digit run with correct rounding and applies the sign, so a literal always
/// evaluates to exactly the `f64` that `str::parse` gives for the same text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal {
    negative: bool,
    start:    usize,
    end:      usize,
    digits:   usize,
}

impl Literal {
    /// Starts a literal at byte offset `start`.
    #[must_use]
    pub const fn new(start: usize) -> Self {
        Self { negative: false,
               start,
               end: start,
               digits: 0 }
    }

    /// Records a leading sign character. The digit run starts after it.
    pub const fn push_sign(&mut self, negative: bool, pos: usize) {
        self.negative = negative;
        self.start = pos + 1;
        self.end = pos + 1;
    }

    /// Records a digit of either the integer or the fractional part.
    pub const fn push_digit(&mut self, pos: usize) {
        self.digits += 1;
        self.end = pos + 1;
    }

    /// Records the decimal point.
    pub const fn push_point(&mut self, pos: usize) {
        self.end = pos + 1;
    }

    /// Whether at least one digit has been seen.
    #[must_use]
    pub const fn has_digits(&self) -> bool {
        self.digits > 0
    }

    /// Returns the signed value of the literal.
    ///
    /// `expression` must be the text the literal was scanned from.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::literal::Literal;
    ///
    /// let text = " -12.5";
    /// let mut literal = Literal::new(1);
    /// literal.push_sign(true, 1);
    /// literal.push_digit(2);
    /// literal.push_digit(3);
    /// literal.push_point(4);
    /// literal.push_digit(5);
    ///
    /// assert_eq!(literal.value(text).unwrap(), -12.5);
    /// ```
    pub fn value(&self, expression: &str) -> Result<f64, SyntaxError> {
        if !self.has_digits() {
            return Err(SyntaxError::new(expression));
        }
        let magnitude = expression.get(self.start..self.end)
                                  .and_then(|digits| digits.parse::<f64>().ok())
                                  .ok_or_else(|| SyntaxError::new(expression))?;
        Ok(if self.negative { -magnitude } else { magnitude })
    }
}
