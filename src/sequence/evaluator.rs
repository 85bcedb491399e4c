use tracing::trace;

use crate::{
    error::SequenceError,
    model::{OperationKind, SequenceItem},
    sequence::validator::{ValidationState, diagnose, validate},
};

/// Result type used by the evaluator.
pub type EvalResult<T> = Result<T, SequenceError>;

/// Starting value of the accumulator.
///
/// Together with [`INITIAL_OPERATION`] this makes the first fold step a pure
/// pass-through: `1 × first = first`.
pub const INITIAL_ACCUMULATOR: f64 = 1.0;
/// Operation applied to the first factor.
pub const INITIAL_OPERATION: OperationKind = OperationKind::Multiply;

/// Folds a well-formed sequence into a single number, strictly left to right.
///
/// Each factor is combined with the accumulator as
/// `accumulator <op> factor.value`, where `<op>` is the most recently seen
/// operation. The factor is always the right-hand operand. There is no
/// operator precedence: `10 ÷ 2 × 3` is `(10 ÷ 2) × 3`.
///
/// Division by a zero-valued factor is not an error. It yields whatever
/// non-finite value floating-point division produces.
///
/// # Errors
/// Returns [`SequenceError::InvalidSequence`] if the validator does not report
/// [`ValidationState::Valid`] for `items`.
///
/// # Example
/// ```
/// use tilecalc::{
///     model::{Factor, Operation, OperationKind, SequenceItem},
///     sequence::evaluate,
/// };
///
/// let f = |v| SequenceItem::factor(Factor::new("n", "", v));
/// let op = |k| SequenceItem::operation(Operation::standard(k));
///
/// let items = [f(10.0), op(OperationKind::Divide), f(2.0), op(OperationKind::Multiply), f(3.0)];
/// assert_eq!(evaluate(&items).unwrap(), 15.0);
///
/// assert!(evaluate(&[]).is_err());
/// ```
pub fn evaluate(items: &[SequenceItem]) -> EvalResult<f64> {
    let state = validate(items);
    if state != ValidationState::Valid {
        return Err(SequenceError::InvalidSequence { state,
                                                    reason: diagnose(items).err() });
    }

    let mut accumulator = INITIAL_ACCUMULATOR;
    let mut current = INITIAL_OPERATION;

    for item in items {
        match item {
            SequenceItem::Factor(id, factor) => {
                let next = current.apply(accumulator, factor.value);
                trace!(%id, %accumulator, op = %current, value = factor.value, result = next, "fold");
                accumulator = next;
            },
            SequenceItem::Operation(_, operation) => current = operation.kind,
        }
    }

    Ok(accumulator)
}
