use std::fmt;

/// A binary operator that may split an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `^`
    Pow,
}

impl Operator {
    /// Classifies a character as an operator.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::from_char('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_char('%'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// The character this operator is written as.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }

    /// Binding strength of the operator.
    ///
    /// The weakest top-level operator splits an expression first, which makes
    /// it the last one applied.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::operator::Operator;
    ///
    /// assert!(Operator::Sub.binding_strength() < Operator::Div.binding_strength());
    /// assert!(Operator::Mul.binding_strength() < Operator::Pow.binding_strength());
    /// ```
    #[must_use]
    pub const fn binding_strength(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 3,
        }
    }

    /// Applies the operator with IEEE-754 double semantics.
    ///
    /// Division by zero is not an error: it yields an infinity or NaN. `^`
    /// uses `powf`, so any real exponent is accepted and a negative base
    /// with a fractional exponent yields NaN.
    ///
    /// # Example
    /// ```
    /// use mathparse::interpreter::operator::Operator;
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, -1.0), 0.5);
    /// assert_eq!(Operator::Div.apply(1.0, 0.0), f64::INFINITY);
    /// assert!(Operator::Pow.apply(-8.0, 1.0 / 3.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            Self::Add => lhs + rhs,
            Self::Sub => lhs - rhs,
            Self::Mul => lhs * rhs,
            Self::Div => lhs / rhs,
            Self::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
