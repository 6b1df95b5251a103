use mathparse::{
    interpreter::evaluator::core::Evaluator,
    repl::{Flow, Session},
};
use pretty_assertions::assert_eq;

fn output(out: Vec<u8>) -> String {
    String::from_utf8(out).unwrap()
}

#[test]
fn prints_trace_then_result() {
    let mut session = Session::new(Evaluator::new(), Vec::new(), true);

    assert_eq!(session.process_line("1+2*3").unwrap(), Flow::Continue);
    assert_eq!(output(session.into_inner()),
               "[2] <*> [3] = [6]\n[1] <+> [6] = [7]\n1+2*3 = 7\n");
}

#[test]
fn prints_errors_and_keeps_going() {
    let mut session = Session::new(Evaluator::new(), Vec::new(), false);

    assert_eq!(session.process_line("2 @ 3").unwrap(), Flow::Continue);
    assert_eq!(session.process_line(" 4 / 2 ").unwrap(), Flow::Continue);
    assert_eq!(output(session.into_inner()),
               "Error: Syntax error in expression '2 @ 3'.\n4 / 2 = 2\n");
}

#[test]
fn blank_line_stops_the_session() {
    let mut session = Session::new(Evaluator::new(), Vec::new(), true);

    assert_eq!(session.process_line("").unwrap(), Flow::Stop);
    assert_eq!(session.process_line(" \t ").unwrap(), Flow::Stop);
    assert!(session.into_inner().is_empty());
}

#[test]
fn script_skips_blank_and_comment_lines() {
    let mut session = Session::new(Evaluator::new(), Vec::new(), false);
    let script = "# grouping\n8-3-2\n\n   \n(2+3)*4\n2 3\n";

    assert_eq!(session.run_script(script).unwrap(), 1);
    assert_eq!(output(session.into_inner()),
               "8-3-2 = 7\n(2+3)*4 = 20\nError: Syntax error in expression '2 3'.\n");
}
