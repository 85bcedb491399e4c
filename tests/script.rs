use tilecalc::{
    error::ScriptError,
    get_result,
    model::{Factor, Operation, OperationKind},
    question::Question,
    script::{
        lexer::{Token, tokenize},
        runner::run,
    },
    sequence::ValidationState,
    session::Session,
};

fn question() -> Question {
    Question::new("How far does light travel in a minute?",
                  vec![Factor::new("Speed of light", "km/s", 300_000.0),
                       Factor::new("Seconds per minute", "s", 60.0),
                       Factor::new("Two", "", 2.0)])
}

fn assert_result(src: &str, expected: f64) {
    match get_result(&question(), src, false) {
        Ok(v) => assert!((v - expected).abs() < 1e-9, "{src}: expected {expected}, got {v}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str) {
    if get_result(&question(), src, false).is_ok() {
        panic!("Script succeeded but was expected to fail: {src}")
    }
}

#[test]
fn ascii_and_bank_symbols() {
    assert_result("#1 * #2", 18_000_000.0);
    assert_result("#1 × #2", 18_000_000.0);
    assert_result("#2 / #3", 30.0);
    assert_result("#2 ÷ #3", 30.0);
    assert_result("#2 + #3", 62.0);
    assert_result("#2 - #3", 58.0);
    assert_result("#2 − #3", 58.0);
}

#[test]
fn left_to_right_without_precedence() {
    assert_result("#3 + #3 × #2", 240.0);
    assert_result("#2 ÷ #3 × #3", 60.0);
}

#[test]
fn value_overrides() {
    assert_result("#3 = 10", 10.0);
    assert_result("#3 = 10 × #3", 20.0);
    assert_result("#3 = -4 + #3", -2.0);
    assert_result("#3 = .5", 0.5);
}

#[test]
fn comments_and_lines() {
    assert_result(
                  r"
        // distance covered
        #1   // km per second
        ×
        #2   // seconds
    ",
                  18_000_000.0,
    );
}

#[test]
fn malformed_sequences_fail() {
    assert_failure("");
    assert_failure("#1 ×");
    assert_failure("× #1");
    assert_failure("#1 #2");
    assert_failure("#1 + × #2");
}

#[test]
fn division_by_zero_override_is_not_an_error() {
    let result = get_result(&question(), "#1 ÷ #3 = 0", false).unwrap();
    assert!(result.is_infinite());
}

#[test]
fn errors_report_lines() {
    let mut session = Session::new(question());
    assert_eq!(run(&mut session, "#1\n+\n#9"),
               Err(ScriptError::UnknownFactor { index:     9,
                                                available: 3,
                                                line:      3, }));
    assert_eq!(run(&mut Session::new(question()), "#0"),
               Err(ScriptError::UnknownFactor { index:     0,
                                                available: 3,
                                                line:      1, }));
    assert_eq!(run(&mut Session::new(question()), "#1\n#2 = +"),
               Err(ScriptError::ExpectedNumber { line: 2 }));
    assert_eq!(run(&mut Session::new(question()), "#1 ^ #2"),
               Err(ScriptError::UnexpectedToken { token: "^".to_string(),
                                                  line:  1, }));
}

#[test]
fn lexing_error_leaves_session_untouched() {
    let mut session = Session::new(question());
    assert!(run(&mut session, "#1 + #2 $").is_err());
    assert!(session.items().is_empty());
    assert_eq!(session.state(), ValidationState::Init);
}

#[test]
fn run_leaves_session_editable() {
    let mut session = Session::new(question());
    run(&mut session, "#2 ×").unwrap();
    assert_eq!(session.state(), ValidationState::Invalid);
    run(&mut session, "#3").unwrap();
    assert_eq!(session.state(), ValidationState::Valid);
    assert_eq!(session.submit().unwrap(), 120.0);
}

#[test]
fn lexer_and_symbol_table_agree() {
    for op in Operation::bank() {
        assert_eq!(tokenize(&op.symbol).unwrap(), vec![(Token::Operator(op.kind), 1)]);
    }
    for symbol in ["+", "-", "*", "/"] {
        let kind = OperationKind::from_symbol(symbol).unwrap();
        assert_eq!(tokenize(symbol).unwrap(), vec![(Token::Operator(kind), 1)]);
    }
}

#[test]
fn comments_run_to_end_of_line() {
    assert_eq!(tokenize("#1 // ÷ #2\r\n+ #3").unwrap(),
               vec![(Token::FactorRef(1), 1),
                    (Token::Operator(OperationKind::Add), 2),
                    (Token::FactorRef(3), 2)]);
    assert_result("#2 //", 60.0);
}

#[test]
fn stray_tokens_are_reported_as_written() {
    assert_eq!(run(&mut Session::new(question()), "#1 5"),
               Err(ScriptError::UnexpectedToken { token: "5".to_string(),
                                                  line:  1, }));
    assert_eq!(run(&mut Session::new(question()), "#1 +\n= 3"),
               Err(ScriptError::UnexpectedToken { token: "=".to_string(),
                                                  line:  2, }));

    let message = get_result(&question(), "#1 2.5", false).unwrap_err().to_string();
    assert_eq!(message, "Error on line 1: Unexpected token: 2.5.");
}
