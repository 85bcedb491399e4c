use tilecalc::{
    error::{SequenceError, StructuralError},
    model::{Factor, Operation, OperationKind, SequenceItem},
    sequence::{ValidationState, diagnose, evaluate, validate},
};

fn f(value: f64) -> SequenceItem {
    SequenceItem::factor(Factor::new("n", "", value))
}

fn op(kind: OperationKind) -> SequenceItem {
    SequenceItem::operation(Operation::standard(kind))
}

fn add() -> SequenceItem {
    op(OperationKind::Add)
}

fn sub() -> SequenceItem {
    op(OperationKind::Subtract)
}

fn mul() -> SequenceItem {
    op(OperationKind::Multiply)
}

fn div() -> SequenceItem {
    op(OperationKind::Divide)
}

fn assert_evaluates(items: &[SequenceItem], expected: f64) {
    match evaluate(items) {
        Ok(v) => assert!((v - expected).abs() < 1e-9, "expected {expected}, got {v}"),
        Err(e) => panic!("evaluation failed: {e}"),
    }
}

#[test]
fn empty_sequence_is_init() {
    assert_eq!(validate(&[]), ValidationState::Init);
    assert_eq!(ValidationState::Init.message(), None);
    assert!(diagnose(&[]).is_ok());
}

#[test]
fn alternating_sequences_are_valid() {
    assert_eq!(validate(&[f(1.0)]), ValidationState::Valid);
    assert_eq!(validate(&[f(1.0), add(), f(2.0)]), ValidationState::Valid);
    assert_eq!(validate(&[f(1.0), mul(), f(2.0), div(), f(3.0), sub(), f(4.0)]),
               ValidationState::Valid);
}

#[test]
fn even_length_sequences_are_invalid() {
    assert_eq!(validate(&[f(1.0), add()]), ValidationState::Invalid);
    assert_eq!(validate(&[f(1.0), f(2.0)]), ValidationState::Invalid);
    assert_eq!(validate(&[f(1.0), add(), f(2.0), mul()]), ValidationState::Invalid);
}

#[test]
fn boundary_operations_are_invalid() {
    assert_eq!(validate(&[add()]), ValidationState::Invalid);
    assert_eq!(validate(&[add(), f(1.0)]), ValidationState::Invalid);
    assert_eq!(validate(&[add(), f(1.0), mul()]), ValidationState::Invalid);
    assert_eq!(diagnose(&[add(), f(1.0)]), Err(StructuralError::LeadingOperation));
    assert_eq!(diagnose(&[f(1.0), add()]), Err(StructuralError::TrailingOperation));
    assert_eq!(ValidationState::Invalid.message(), Some("Not a valid expression"));
}

#[test]
fn broken_alternation_is_invalid() {
    let doubled_factor = [f(1.0), f(2.0), add(), f(3.0)];
    assert_eq!(validate(&doubled_factor), ValidationState::Invalid);
    assert_eq!(diagnose(&doubled_factor), Err(StructuralError::MisplacedFactor { index: 1 }));

    let doubled_op = [f(1.0), add(), mul(), f(3.0)];
    assert_eq!(validate(&doubled_op), ValidationState::Invalid);
    assert_eq!(diagnose(&doubled_op), Err(StructuralError::MisplacedOperation { index: 2 }));
}

#[test]
fn validation_is_idempotent() {
    for items in [vec![], vec![f(1.0)], vec![f(1.0), add()], vec![add(), add(), f(1.0)]] {
        assert_eq!(validate(&items), validate(&items));
    }
}

#[test]
fn single_factor_evaluates_to_its_value() {
    assert_evaluates(&[f(42.0)], 42.0);
    assert_evaluates(&[f(-3.5)], -3.5);
    assert_evaluates(&[f(0.0)], 0.0);
}

#[test]
fn evaluation_is_strictly_left_to_right() {
    assert_evaluates(&[f(2.0), add(), f(3.0)], 5.0);
    assert_evaluates(&[f(10.0), div(), f(2.0), mul(), f(3.0)], 15.0);
    // Precedence would give 2 + 12 = 14.
    assert_evaluates(&[f(2.0), add(), f(3.0), mul(), f(4.0)], 20.0);
    assert_evaluates(&[f(1.0), sub(), f(2.0), sub(), f(3.0)], -4.0);
}

#[test]
fn factor_is_the_right_operand() {
    assert_evaluates(&[f(3.0), sub(), f(10.0)], -7.0);
    assert_evaluates(&[f(1.0), div(), f(4.0)], 0.25);
}

#[test]
fn division_by_zero_is_not_finite() {
    let result = evaluate(&[f(5.0), div(), f(0.0)]).unwrap();
    assert!(result.is_infinite() && result.is_sign_positive());

    let result = evaluate(&[f(0.0), div(), f(0.0)]).unwrap();
    assert!(result.is_nan());

    // A non-finite intermediate keeps flowing through the fold.
    let result = evaluate(&[f(5.0), div(), f(0.0), add(), f(1.0)]).unwrap();
    assert!(result.is_infinite());
}

#[test]
fn display_range_does_not_affect_evaluation() {
    let mut ranged = Factor::ranged("Population", "people", 100.0);
    ranged.randomized_range = Some((50.0, 150.0));
    let items = [SequenceItem::factor(ranged), mul(), f(2.0)];
    assert_evaluates(&items, 200.0);
}

#[test]
fn evaluating_invalid_sequence_is_error() {
    assert_eq!(evaluate(&[]),
               Err(SequenceError::InvalidSequence { state:  ValidationState::Init,
                                                    reason: None, }));
    assert_eq!(evaluate(&[f(1.0), add()]),
               Err(SequenceError::InvalidSequence { state:  ValidationState::Invalid,
                                                    reason: Some(StructuralError::TrailingOperation), }));
    assert!(evaluate(&[f(1.0), f(2.0), add(), f(3.0)]).is_err());
}

#[test]
fn repeated_placements_get_distinct_ids() {
    let factor = Factor::new("n", "", 1.0);
    let a = SequenceItem::factor(factor.clone());
    let b = SequenceItem::factor(factor);
    assert_ne!(a.id(), b.id());

    let plus = Operation::standard(OperationKind::Add);
    assert_ne!(SequenceItem::operation(plus.clone()).id(), SequenceItem::operation(plus).id());
}

#[test]
fn standard_bank_has_four_operations() {
    let bank = Operation::bank();
    let symbols: Vec<&str> = bank.iter().map(|op| op.symbol.as_str()).collect();
    assert_eq!(symbols, ["+", "−", "×", "÷"]);
    assert_eq!(OperationKind::from_symbol("*"), Some(OperationKind::Multiply));
    assert_eq!(OperationKind::from_symbol("−"), Some(OperationKind::Subtract));
    assert_eq!(OperationKind::from_symbol("%"), None);
}
