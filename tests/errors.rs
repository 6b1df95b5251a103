use mathparse::{
    error::{EvalError, SyntaxError},
    evaluate,
    interpreter::evaluator::core::{DEFAULT_MAX_DEPTH, Evaluator},
};

fn syntax_error(src: &str) -> SyntaxError {
    match evaluate(src, None) {
        Err(EvalError::Syntax(e)) => e,
        Err(e) => panic!("'{src}' failed with a non-syntax error: {e}"),
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
    }
}

#[test]
fn malformed_inputs_are_syntax_errors() {
    for src in ["(", "2++", "*5", "", "2 3", "2 @ 3", "   ", "(1))", ")", "2(3)", "(2)3", "1e5",
                "-(2)", "2 +", ".", "+", "-", "1..2", "- 5", "2 * * 3", "(1)(2)", "x"]
    {
        syntax_error(src);
    }
}

#[test]
fn top_level_errors_carry_the_whole_input() {
    assert_eq!(syntax_error("2 @ 3").expression, "2 @ 3");
    assert_eq!(syntax_error("(").expression, "(");
    assert_eq!(syntax_error("2++").expression, "2++");
}

#[test]
fn errors_carry_the_level_that_failed_to_scan() {
    // `x` is rejected while scanning the group interior, so the whole
    // interior is reported.
    assert_eq!(syntax_error("1 + (2 * x)").expression, "2 * x");
}

#[test]
fn operand_errors_carry_the_operand() {
    assert_eq!(syntax_error("1 + (2 * (x))").expression, "x");
    assert_eq!(syntax_error("3 * (2 + )").expression, " ");
    assert_eq!(syntax_error("(1)+").expression, "");
}

#[test]
fn first_failure_wins() {
    // The left operand is evaluated, and fails, before the right one.
    assert_eq!(syntax_error("(a) + (b)").expression, "a");
}

#[test]
fn error_messages() {
    let err = evaluate("2 @ 3", None).unwrap_err();
    assert_eq!(err.to_string(), "Syntax error in expression '2 @ 3'.");
    assert!(err.as_syntax().is_some());

    let err = EvalError::NestingTooDeep { limit: 8 };
    assert_eq!(err.to_string(), "Expression is nested too deeply (limit is 8 levels).");
    assert!(err.as_syntax().is_none());
}

#[test]
fn nesting_deeper_than_the_limit_fails() {
    let evaluator = Evaluator::new().with_max_depth(3);

    assert_eq!(evaluator.evaluate("(((1)))", None).unwrap(), 1.0);
    assert!(matches!(evaluator.evaluate("((((1))))", None),
                     Err(EvalError::NestingTooDeep { limit: 3 })));
    assert!(matches!(evaluator.evaluate("1+1+1+1+1", None),
                     Err(EvalError::NestingTooDeep { limit: 3 })));
}

#[test]
fn reasonable_nesting_is_within_the_default_limit() {
    let depth = 200;
    let src = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));

    assert!(depth < DEFAULT_MAX_DEPTH);
    assert_eq!(evaluate(&src, None).unwrap(), 1.0);
}

#[test]
fn limit_applies_to_pathological_input() {
    let evaluator = Evaluator::new().with_max_depth(64);
    let src = format!("{}1{}", "(".repeat(5000), ")".repeat(5000));

    assert!(matches!(evaluator.evaluate(&src, None),
                     Err(EvalError::NestingTooDeep { limit: 64 })));
}
