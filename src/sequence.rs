/// Left-to-right evaluation of well-formed sequences.
///
/// The evaluator folds a valid sequence into a single number without any
/// operator precedence: every factor is combined with the running result
/// using the most recently seen operation.
pub mod evaluator;
/// Structural validation of sequences.
///
/// Decides whether a sequence alternates factor, operation, factor, ... and
/// starts and ends on a factor. The verdict is tri-state so that an empty
/// sequence can be told apart from a broken one.
pub mod validator;

pub use evaluator::evaluate;
pub use validator::{ValidationState, diagnose, validate};
