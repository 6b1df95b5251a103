use std::io;

use mathparse::{
    error::EvalError,
    evaluate,
    interpreter::trace::{TraceSink, WriterSink},
};
use pretty_assertions::assert_eq;

fn trace_of(src: &str) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    if let Err(e) = evaluate(src, Some(&mut lines)) {
        panic!("'{src}' failed: {e}");
    }
    lines
}

struct ClosedSink;

impl TraceSink for ClosedSink {
    fn write_line(&mut self, _line: &str) -> io::Result<()> {
        Err(io::Error::other("sink closed"))
    }
}

#[test]
fn one_line_per_operation_in_post_order() {
    assert_eq!(trace_of("1+2*3"), ["[2] <*> [3] = [6]", "[1] <+> [6] = [7]"]);
    assert_eq!(trace_of("(1+2)*(3+4)"),
               ["[1] <+> [2] = [3]", "[3] <+> [4] = [7]", "[3] <*> [7] = [21]"]);
}

#[test]
fn right_to_left_grouping_is_visible_in_the_trace() {
    assert_eq!(trace_of("8-3-2"), ["[3] <-> [2] = [1]", "[8] <-> [1] = [7]"]);
}

#[test]
fn literals_and_groups_produce_no_lines() {
    assert!(trace_of("3.5").is_empty());
    assert!(trace_of("((3.5))").is_empty());
}

#[test]
fn values_use_default_float_formatting() {
    assert_eq!(trace_of("1/0"), ["[1] </> [0] = [inf]"]);
    assert_eq!(trace_of("0/0"), ["[0] </> [0] = [NaN]"]);
    assert_eq!(trace_of("-1.5*2"), ["[-1.5] <*> [2] = [-3]"]);
    assert_eq!(trace_of("0.1+0.2"), ["[0.1] <+> [0.2] = [0.30000000000000004]"]);
}

#[test]
fn completed_steps_are_traced_before_a_failure() {
    let mut lines: Vec<String> = Vec::new();
    let result = evaluate("1*2+(x)", Some(&mut lines));

    match result {
        Err(EvalError::Syntax(e)) => assert_eq!(e.expression, "x"),
        other => panic!("expected a syntax error, got {other:?}"),
    }
    assert_eq!(lines, ["[1] <*> [2] = [2]"]);
}

#[test]
fn top_level_errors_trace_nothing() {
    let mut lines: Vec<String> = Vec::new();

    assert!(evaluate("1*2+x", Some(&mut lines)).is_err());
    assert!(lines.is_empty());
}

#[test]
fn writer_sink_writes_newline_terminated_lines() {
    let mut sink = WriterSink::new(Vec::new());
    evaluate("2^2^0", Some(&mut sink)).unwrap();

    let text = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(text, "[2] <^> [0] = [1]\n[2] <^> [1] = [2]\n");
}

#[test]
fn failing_sink_aborts_evaluation() {
    let mut sink = ClosedSink;
    let result = evaluate("1+1", Some(&mut sink));

    assert!(matches!(result, Err(EvalError::Trace(_))));
}

#[test]
fn no_sink_means_no_output() {
    assert_eq!(evaluate("1+2*3", None).unwrap(), 7.0);
}
