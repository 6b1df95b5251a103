use std::io::{self, Write};

use log::info;

use crate::interpreter::{
    evaluator::core::Evaluator,
    trace::{TraceSink, WriterSink},
};

/// What the caller of [`Session::process_line`] should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read another line.
    Continue,
    /// The line was blank; end the session.
    Stop,
}

/// A line-oriented calculator session.
///
/// Every line is evaluated with the session's [`Evaluator`]. Trace lines,
/// results and error messages all go to the same output, in that order.
pub struct Session<W: Write> {
    evaluator: Evaluator,
    out:       W,
    trace:     bool,
}

impl<W: Write> Session<W> {
    /// Creates a session writing to `out`. With `trace` set, every binary
    /// operation is echoed before the result.
    pub const fn new(evaluator: Evaluator, out: W, trace: bool) -> Self {
        Self { evaluator, out, trace }
    }

    /// Returns the output the session was writing to.
    pub fn into_inner(self) -> W {
        self.out
    }

    /// Evaluates one line of input.
    ///
    /// A blank line ends the session. Otherwise the result is printed as
    /// `<input> = <result>`, or `Error: <message>` when evaluation fails.
    ///
    /// # Errors
    /// Returns an error only when writing to the output fails.
    ///
    /// # Example
    /// ```
    /// use mathparse::{
    ///     interpreter::evaluator::core::Evaluator,
    ///     repl::{Flow, Session},
    /// };
    ///
    /// let mut session = Session::new(Evaluator::new(), Vec::new(), false);
    /// assert_eq!(session.process_line("2 * 21").unwrap(), Flow::Continue);
    /// assert_eq!(session.process_line("   ").unwrap(), Flow::Stop);
    ///
    /// assert_eq!(String::from_utf8(session.into_inner()).unwrap(), "2 * 21 = 42\n");
    /// ```
    pub fn process_line(&mut self, line: &str) -> io::Result<Flow> {
        if line.trim().is_empty() {
            return Ok(Flow::Stop);
        }
        self.report(line)?;
        Ok(Flow::Continue)
    }

    /// Evaluates every line of a script.
    ///
    /// Blank lines and lines starting with `#` are skipped instead of ending
    /// the run. Returns the number of lines that failed to evaluate.
    ///
    /// # Errors
    /// Returns an error only when writing to the output fails.
    ///
    /// # Example
    /// ```
    /// use mathparse::{interpreter::evaluator::core::Evaluator, repl::Session};
    ///
    /// let mut session = Session::new(Evaluator::new(), Vec::new(), false);
    /// let failures = session.run_script("# totals\n1 + 1\n\n2 +\n").unwrap();
    ///
    /// assert_eq!(failures, 1);
    /// ```
    pub fn run_script(&mut self, source: &str) -> io::Result<usize> {
        let mut failures = 0;

        for line in source.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if !self.report(line)? {
                failures += 1;
            }
        }

        info!("script finished with {failures} failed line(s)");
        Ok(failures)
    }

    /// Evaluates and prints one line. Returns whether evaluation succeeded.
    fn report(&mut self, line: &str) -> io::Result<bool> {
        let result = if self.trace {
            let mut sink = WriterSink::new(&mut self.out);
            self.evaluator.evaluate(line, Some(&mut sink as &mut dyn TraceSink))
        } else {
            self.evaluator.evaluate(line, None)
        };

        match result {
            Ok(value) => {
                writeln!(self.out, "{} = {value}", line.trim())?;
                Ok(true)
            },
            Err(e) => {
                writeln!(self.out, "Error: {e}")?;
                Ok(false)
            },
        }
    }
}
