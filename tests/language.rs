use std::fs::{self};

use mathnote::{
    error::{Error, ErrorKind, ParseError, SimplifyError},
    evaluate,
    interpreter::workspace::{Binding, Workspace},
    run_session,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_session_blocks(&content).into_iter().enumerate() {
            count += 1;
            if let Err(e) = run_session(&code, false) {
                panic!("Session {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No sessions found in book/src");
}

fn extract_session_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```mathnote") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

fn assert_success(src: &str) {
    if let Err(e) = run_session(src, false) {
        panic!("Expected success, got error: {e:?}\nSource:\n{src}");
    }
}

fn assert_failure(src: &str) -> Error {
    match run_session(src, false) {
        Ok(results) => panic!("Expected failure, but got: {results:?}\nSource:\n{src}"),
        Err(e) => e,
    }
}

/// Runs a session and compares the rendering of its last result.
fn assert_renders(src: &str, expected: &str) {
    let results = run_session(src, false).unwrap_or_else(|e| panic!("{src:?} failed: {e:?}"));
    let last = results.last().unwrap_or_else(|| panic!("{src:?} produced nothing"));
    assert_eq!(last.to_string(), expected, "rendering of {src:?}");
}

#[test]
fn precedence() {
    assert_renders("2+3*4", "14");
    assert_renders("2*3+4", "10");
    assert_renders("(2+3)*4", "20");
    assert_renders("2^3*2", "16");
    assert_renders("2*3^2", "18");
}

#[test]
fn operators_associate_left() {
    assert_renders("10-4-3", "3");
    assert_renders("12/4/3", "1");
    assert_renders("2^3^2", "64");
}

#[test]
fn negation() {
    assert_renders("-3+5", "2");
    assert_renders("2*-3", "-6");
    assert_renders("2^-1", "0.5");
    assert_renders("--4", "4");
    assert_renders("5--2", "7");
}

#[test]
fn division_and_remainder() {
    assert_renders("7%3", "1");
    assert_renders("6\\3", "0.5");
    assert_renders("1/4", "0.25");
}

#[test]
fn implicit_multiplication() {
    assert_renders("2(3+1)", "8");
    assert_renders("(1+1)(2+2)", "8");
    assert_renders("x=3\n2x", "6");
    assert_renders("2x", "2*x");
}

#[test]
fn unbalanced_brackets_are_completed() {
    assert_renders("(2+3", "5");
    assert_renders("2+3)*2", "10");
    assert_renders("((1+1", "2");
}

#[test]
fn mismatched_brackets_are_syntax_errors() {
    let error = assert_failure("(2+3]");
    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert!(matches!(error,
                     Error::Parse(ParseError::MismatchedBrackets { expected: ')',
                                                                   found:    ']', })));
}

#[test]
fn malformed_numbers_are_syntax_errors() {
    let error = assert_failure("1.2.3 + 4");
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn complex_numbers() {
    assert_renders("sqrt(-4)", "2i");
    assert_renders("i^2", "-1");
    assert_renders("3+4i", "(3 + 4i)");
    assert_renders("(2+3i)*(2-3i)", "13");
    assert_renders("|3+4i|", "5");
    assert_renders("re(3+4i)", "3");
    assert_renders("im(3+4i)", "4");
}

#[test]
fn builtin_functions() {
    assert_renders("sin(0)", "0");
    assert_renders("cos(0)", "1");
    assert_renders("exp(0)", "1");
    assert_renders("log(100)", "2");
    assert_renders("ln(1)", "0");
    assert_renders("floor(2.7)", "2");
    assert_renders("floor(-2.7)", "-2");
    assert_renders("abs(-3)", "3");
    assert_renders("arg(1)", "0");
}

#[test]
fn symbolic_expressions() {
    assert_renders("x+1", "x + 1");
    assert_renders("x*1", "x");
    assert_renders("x+0", "x");
    assert_renders("0*x", "0");
    assert_renders("x^1", "x");
    assert_renders("x^0", "1");
    assert_renders("--x", "x");
    assert_renders("(x+1)*2", "(x + 1)*2");
    assert_renders("x-(y-z)", "x - (y - z)");
    assert_renders("-(x+1)", "-(x + 1)");
    assert_renders("sin(x)", "sin(x)");
}

#[test]
fn vectors() {
    assert_renders("(1,2)+(3,4)", "(4, 6)");
    assert_renders("2*(1,2,3)", "(2, 4, 6)");
    assert_renders("(2,4)/2", "(1, 2)");
    assert_renders("-(1,2)", "(-1, -2)");
    assert_renders("|(3,4)|", "5");
    assert_renders("(1,0,0)×(0,1,0)", "(0, 0, 1)");
}

#[test]
fn sets() {
    assert_renders("{1,2,2,3}", "{1, 2, 3}");
    assert_renders("{}", "{}");
    assert_renders("{1+1, 2}", "{2}");
    assert_renders("{0.3, 0.1+0.2}", "{0.3}");
}

#[test]
fn set_builders() {
    assert_renders("{x^2 : 0 < x < 5}", "{x^2 : 0 < x < 5}");
    assert_renders("{x | 0 < x < 5}", "{x : 0 < x < 5}");
    assert_renders("{x+y : 0 < x < 1, 2 < y < 3}", "{x + y : 0 < x < 1, 2 < y < 3}");
    assert_renders("a=2\n{a x : 0 < x < a+1}", "{2*x : 0 < x < 3}");
}

#[test]
fn malformed_set_builders_are_syntax_errors() {
    let error = assert_failure("{x : 0 < x}");
    assert!(matches!(error, Error::Parse(ParseError::InvalidCondition { .. })));

    let error = assert_failure("{x : 0 < 2x < 5}");
    assert!(matches!(error, Error::Parse(ParseError::InvalidBoundName { .. })));

    let error = assert_failure("{x : y : z}");
    assert!(matches!(error, Error::Parse(ParseError::TooManyColons { count: 2 })));
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn assignments_round_trip() {
    assert_renders("x=5\nx+1", "6");
    assert_renders("x = 5", "5");
    assert_renders("x=2\ny=x^3\ny-x", "6");
    assert_renders("x=2\nx=x+1\nx", "3");
    assert_renders("x=y+1\nx", "y + 1");
    assert_renders("x=y+1\ny=2\nx+1", "4");
    assert_renders("x=x+1\nx", "x + 1");
}

#[test]
fn values_see_later_bindings() {
    let mut workspace = Workspace::standard();
    evaluate("x=y+1", &mut workspace).unwrap();
    evaluate("y=2", &mut workspace).unwrap();

    let once = evaluate("x", &mut workspace).unwrap();
    assert_eq!(once.to_string(), "3");
    assert_eq!(once.simplified(&mut workspace).unwrap().to_string(), "3");

    evaluate("y=5", &mut workspace).unwrap();
    assert_eq!(evaluate("x", &mut workspace).unwrap().to_string(), "6");
}

#[test]
fn function_definitions() {
    assert_renders("f(x)=x+1\nf(3)", "4");
    assert_renders("f(x)=x+1", "x + 1");
    assert_renders("g(x, y)=x*y\ng(3, 4)", "12");
    assert_renders("f(x)=x^2\nf(f(2))", "16");
    assert_renders("h(2)", "h(2)");
    assert_renders("g(a, b)=a+b\ng((1, 2))", "3");
}

#[test]
fn function_bodies_see_later_definitions() {
    assert_renders("g(x)=x*y\ny=2\ng(3)", "6");
}

#[test]
fn function_calls_do_not_leak_parameters() {
    assert_renders("f(x)=x+1\nx=10\nf(3)\nx", "10");
    assert_renders("x=10\nf(x)=x+1\nf(3)", "4");
    assert_renders("g(x, y)=x-y\ng(y, 1)", "y - 1");
}

#[test]
fn wrong_function_arity_is_error() {
    let error = assert_failure("f(x)=x+1\nf(1, 2)");
    assert_eq!(error.kind(), ErrorKind::Arithmetic);
    assert!(matches!(error,
                     Error::Simplify(SimplifyError::ArityMismatch { expected: 1,
                                                                    found:    2,
                                                                    .. })));
}

#[test]
fn runaway_recursion_is_error() {
    let error = assert_failure("f(x)=g(x)\ng(x)=f(x)\ng(1)");
    assert!(matches!(error, Error::Simplify(SimplifyError::RecursionLimit { .. })));
}

#[test]
fn range_bindings() {
    assert_renders("0<x<5", "{x : 0 < x < 5}");
    assert_renders("5>x>0", "{x : 0 < x < 5}");
    assert_renders("0<x≤5\nx", "{x : 0 < x < 5}");
    assert_renders("a=1\na<x<a+1", "{x : 1 < x < 2}");
}

#[test]
fn decided_comparisons() {
    assert_renders("2 < 3", "true");
    assert_renders("3 < 2", "false");
    assert_renders("1 < 2 < 3", "true");
    assert_renders("1 < 3 < 2", "false");
    assert_renders("2 = 2", "true");
    assert_renders("1+1 = 3", "false");
    assert_renders("2 ≠ 2", "false");
    assert_renders("2 != 3", "true");
    assert_renders("1 <= 1", "true");
    assert_renders("2 >= 3", "false");
    assert_renders("0.1+0.2 = 0.3", "true");
}

#[test]
fn undecidable_comparisons_are_errors() {
    let error = assert_failure("y < 3");
    assert!(matches!(error, Error::Simplify(SimplifyError::Undecidable { .. })));
    assert_eq!(error.kind(), ErrorKind::Arithmetic);

    let error = assert_failure("i < 2");
    assert!(matches!(error, Error::Simplify(SimplifyError::Undecidable { .. })));
}

#[test]
fn division_by_zero_is_error() {
    let error = assert_failure("1/0");
    assert_eq!(error.kind(), ErrorKind::Arithmetic);
    assert!(matches!(error, Error::Simplify(SimplifyError::DivisionByZero { .. })));

    assert_failure("0^-1");
    assert_failure("5%0");
}

#[test]
fn results_beyond_the_finite_range_overflow() {
    let error = assert_failure("10^200*10^200");
    assert!(matches!(error, Error::Simplify(SimplifyError::Overflow { .. })));
    assert_eq!(error.kind(), ErrorKind::Arithmetic);

    let error = assert_failure("10^300/10^-10");
    assert!(matches!(error, Error::Simplify(SimplifyError::Overflow { .. })));
    assert_failure("x=10^308\nx*10");
    assert_success("10^200*10^100");
}

#[test]
fn logarithm_of_zero_is_error() {
    let error = assert_failure("ln(0)");
    assert_eq!(error, Error::Simplify(SimplifyError::LogarithmOfZero));
    assert_failure("log(0)");
}

#[test]
fn lone_operators_are_malformed() {
    let error = assert_failure("+");
    assert_eq!(error.kind(), ErrorKind::Argument);
    assert!(matches!(assert_failure("2*(/)"), Error::Simplify(SimplifyError::Malformed { .. })));
}

#[test]
fn failed_statements_stop_the_session() {
    assert_failure("x=1\n1/0\nx=2");
    assert_success("x=1\n\n   \ny=x");
}

#[test]
fn workspace_records_definitions() {
    let mut workspace = Workspace::new();
    evaluate("f(x, y)=x+y", &mut workspace).unwrap();
    evaluate("a=1", &mut workspace).unwrap();

    assert_eq!(workspace.names().collect::<Vec<_>>(), vec!["a", "f"]);
    assert_eq!(workspace.parameters("f"), Some(&["x".to_string(), "y".to_string()][..]));
    assert!(workspace.get("a").is_some_and(Binding::is_value));
    assert!(workspace.value("f").is_none());
}

#[test]
fn failed_stores_leave_the_workspace_alone() {
    let mut workspace = Workspace::standard();
    evaluate("x=1", &mut workspace).unwrap();

    assert!(evaluate("x=1/0", &mut workspace).is_err());
    assert!(evaluate("f(x)=ln(0)", &mut workspace).is_err());
    assert!(evaluate("x=(2", &mut workspace).is_ok());

    assert_eq!(evaluate("x", &mut workspace).unwrap().to_string(), "2");
    assert!(!workspace.contains("f"));
}

#[test]
fn simplification_is_idempotent() {
    let mut workspace = Workspace::standard();
    evaluate("f(x)=x^2+c", &mut workspace).unwrap();

    for src in ["x+1",
                "2x",
                "(1, 2)",
                "{1, 2}",
                "sqrt(2)",
                "3+4i",
                "1/3",
                "-(x+1)",
                "{x^2 : 0 < x < 5}",
                "f(y)",
                "g(x, 2)",
                "sin(x)*ln(y)"]
    {
        let once = evaluate(src, &mut workspace).unwrap();
        let twice = once.simplified(&mut workspace).unwrap();
        assert_eq!(twice.to_string(), once.to_string(), "re-simplifying {src:?}");
    }
}
