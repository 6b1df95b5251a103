use crate::{
    error::SyntaxError,
    interpreter::{literal::Literal, operator::Operator},
};

/// Tie rule between top-level operators of equal binding strength.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Grouping {
    /// The leftmost of the weakest operators splits, so `8-3-2` groups as
    /// `8-(3-2)` and evaluates to `7`.
    #[default]
    RightToLeft,
    /// The rightmost of the weakest operators splits, so `8-3-2` groups as
    /// `(8-3)-2` and evaluates to `3`, and `2^3^2` evaluates to `64`.
    ///
    /// A later operator replaces the candidate when its binding strength is
    /// lower than or equal to the recorded one.
    LeftToRight,
}

/// What a scanned expression turned out to be.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape<'a> {
    /// Two operands joined by the weakest top-level operator.
    Binary {
        /// Text left of the operator.
        lhs: &'a str,
        /// The splitting operator.
        op:  Operator,
        /// Text right of the operator.
        rhs: &'a str,
    },
    /// A single signed decimal literal.
    Literal(f64),
    /// One parenthesized group, with surrounding whitespace and the outer
    /// parentheses removed.
    Group {
        /// The text between the outer parentheses.
        inner: &'a str,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Start,
    Group,
    NumberStart,
    Integer,
    Fraction,
    Pending,
    Operator,
    Error,
}

#[derive(Debug, Clone, Copy)]
struct Split {
    position: usize,
    op:       Operator,
}

struct Scanner {
    state:    ScanState,
    grouping: Grouping,
    split:    Option<Split>,
    depth:    usize,
    grouped:  bool,
    literal:  Option<Literal>,
}

const fn is_literal_start(c: char) -> bool {
    matches!(c, '+' | '-' | '.' | '0'..='9')
}

impl Scanner {
    const fn new(grouping: Grouping) -> Self {
        Self { state: ScanState::Start,
               grouping,
               split: None,
               depth: 0,
               grouped: false,
               literal: None }
    }

    /// Consumes one character. Returns `true` when the character has to be
    /// fed again because it belongs to the state just entered.
    fn feed(&mut self, pos: usize, c: char) -> bool {
        match self.state {
            ScanState::Start => {
                if c == '(' {
                    self.state = ScanState::Group;
                    return true;
                }
                if is_literal_start(c) {
                    self.state = ScanState::NumberStart;
                    return true;
                }
                if !c.is_whitespace() {
                    self.state = ScanState::Error;
                }
                false
            },
            ScanState::Group => {
                self.grouped = true;
                match c {
                    '(' => self.depth += 1,
                    ')' => {
                        self.depth -= 1;
                        if self.depth == 0 {
                            self.state = ScanState::Pending;
                        }
                    },
                    _ => {},
                }
                false
            },
            ScanState::NumberStart => {
                let mut literal = Literal::new(pos);
                let again = match c {
                    '+' | '-' => {
                        literal.push_sign(c == '-', pos);
                        self.state = ScanState::Integer;
                        false
                    },
                    '.' => {
                        literal.push_point(pos);
                        self.state = ScanState::Fraction;
                        false
                    },
                    _ if c.is_ascii_digit() => {
                        self.state = ScanState::Integer;
                        true
                    },
                    _ => {
                        self.state = ScanState::Error;
                        false
                    },
                };
                self.literal = Some(literal);
                again
            },
            ScanState::Integer => match c {
                '.' => {
                    self.with_literal(|l| l.push_point(pos));
                    self.state = ScanState::Fraction;
                    false
                },
                _ if c.is_ascii_digit() => {
                    self.with_literal(|l| l.push_digit(pos));
                    false
                },
                _ => self.leave_literal(c),
            },
            ScanState::Fraction => {
                if c.is_ascii_digit() {
                    self.with_literal(|l| l.push_digit(pos));
                    false
                } else {
                    self.leave_literal(c)
                }
            },
            ScanState::Pending => {
                if Operator::from_char(c).is_some() {
                    self.state = ScanState::Operator;
                    return true;
                }
                if !c.is_whitespace() {
                    self.state = ScanState::Error;
                }
                false
            },
            ScanState::Operator => {
                match Operator::from_char(c) {
                    Some(op) => {
                        self.offer(pos, op);
                        self.state = ScanState::Start;
                    },
                    None => self.state = ScanState::Error,
                }
                false
            },
            ScanState::Error => false,
        }
    }

    fn with_literal(&mut self, f: impl FnOnce(&mut Literal)) {
        if let Some(literal) = self.literal.as_mut() {
            f(literal);
        }
    }

    fn literal_has_digits(&self) -> bool {
        self.literal.is_some_and(|l| l.has_digits())
    }

    /// A literal ends on whitespace or an operator, and only once it has a
    /// digit.
    fn leave_literal(&mut self, c: char) -> bool {
        let ends_literal = c.is_whitespace() || Operator::from_char(c).is_some();
        if !ends_literal || !self.literal_has_digits() {
            self.state = ScanState::Error;
            return false;
        }
        if c.is_whitespace() {
            self.state = ScanState::Pending;
            false
        } else {
            self.state = ScanState::Operator;
            true
        }
    }

    fn offer(&mut self, position: usize, op: Operator) {
        let replace = match self.split {
            None => true,
            Some(current) => {
                let (new, old) = (op.binding_strength(), current.op.binding_strength());
                match self.grouping {
                    Grouping::RightToLeft => new < old,
                    Grouping::LeftToRight => new <= old,
                }
            },
        };
        if replace {
            self.split = Some(Split { position, op });
        }
    }

    fn finish(self, expression: &str) -> Result<Shape<'_>, SyntaxError> {
        let error = || SyntaxError::new(expression);

        match self.state {
            ScanState::Group | ScanState::Error => return Err(error()),
            ScanState::NumberStart | ScanState::Integer | ScanState::Fraction
                if !self.literal_has_digits() =>
            {
                return Err(error());
            },
            _ => {},
        }

        if let Some(Split { position, op }) = self.split {
            let lhs = expression.get(..position).ok_or_else(error)?;
            let rhs = expression.get(position + op.symbol().len_utf8()..)
                                .ok_or_else(error)?;
            return Ok(Shape::Binary { lhs, op, rhs });
        }

        if let Some(literal) = self.literal {
            return Ok(Shape::Literal(literal.value(expression)?));
        }

        if self.grouped {
            let inner = expression.trim()
                                  .strip_prefix('(')
                                  .and_then(|rest| rest.strip_suffix(')'))
                                  .ok_or_else(error)?;
            return Ok(Shape::Group { inner });
        }

        Err(error())
    }
}

/// Scans one expression level and reports its shape.
///
/// This is a single left-to-right pass of the scan-state machine. It
/// validates the top level of `expression`, finds the weakest top-level
/// operator, and resolves literals. Operands and group interiors are returned
/// unscanned; the evaluator scans them again on the next recursion level.
///
/// # Errors
/// Returns a [`SyntaxError`] carrying `expression` when the text does not fit
/// the grammar at this level.
///
/// # Example
/// ```
/// use mathparse::interpreter::{
///     operator::Operator,
///     scanner::{Grouping, Shape, scan},
/// };
///
/// assert_eq!(scan("1 + 2*3", Grouping::RightToLeft).unwrap(),
///            Shape::Binary { lhs: "1 ", op: Operator::Add, rhs: " 2*3" });
/// assert_eq!(scan(" (4) ", Grouping::RightToLeft).unwrap(), Shape::Group { inner: "4" });
/// assert_eq!(scan("-2.5", Grouping::RightToLeft).unwrap(), Shape::Literal(-2.5));
/// assert!(scan("2 3", Grouping::RightToLeft).is_err());
/// ```
pub fn scan(expression: &str, grouping: Grouping) -> Result<Shape<'_>, SyntaxError> {
    let mut scanner = Scanner::new(grouping);

    for (pos, c) in expression.char_indices() {
        while scanner.feed(pos, c) {}
        if scanner.state == ScanState::Error {
            return Err(SyntaxError::new(expression));
        }
    }

    scanner.finish(expression)
}
