use std::io::{self, Write};

use crate::interpreter::operator::Operator;

/// Receives one line of text per binary operation performed.
///
/// Lines arrive in evaluation order: both operands of an operator are
/// traced before the operator's own line.
pub trait TraceSink {
    /// Accepts one complete line, without a trailing newline.
    ///
    /// # Errors
    /// A sink may refuse the line; the evaluation is then aborted.
    fn write_line(&mut self, line: &str) -> io::Result<()>;
}

/// Collects the lines in memory.
impl TraceSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

impl<T: TraceSink + ?Sized> TraceSink for &mut T {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_line(line)
    }
}

/// Writes every line, newline-terminated, to an [`io::Write`].
///
/// # Example
/// ```
/// use mathparse::interpreter::trace::{TraceSink, WriterSink};
///
/// let mut sink = WriterSink::new(Vec::new());
/// sink.write_line("[1] <+> [2] = [3]").unwrap();
///
/// assert_eq!(sink.into_inner(), b"[1] <+> [2] = [3]\n");
/// ```
#[derive(Debug)]
pub struct WriterSink<W> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    /// Wraps a writer.
    pub const fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TraceSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.writer, "{line}")
    }
}

/// Formats the trace line for one binary operation.
///
/// Values use the default `Display` formatting of `f64`.
///
/// # Example
/// ```
/// use mathparse::interpreter::{operator::Operator, trace::format_step};
///
/// assert_eq!(format_step(2.0, Operator::Mul, 3.5, 7.0), "[2] <*> [3.5] = [7]");
/// assert_eq!(format_step(1.0, Operator::Div, 0.0, f64::INFINITY), "[1] </> [0] = [inf]");
/// ```
#[must_use]
pub fn format_step(lhs: f64, op: Operator, rhs: f64, result: f64) -> String {
    format!("[{lhs}] <{op}> [{rhs}] = [{result}]")
}
