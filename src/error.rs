/// Question payload errors.
///
/// Raised while reading or checking the question that supplies the factor
/// bank: unreadable files, malformed JSON, and payloads that cannot be used.
pub mod question_error;
/// Tile script errors.
///
/// Raised while turning tile script text into session mutations.
pub mod script_error;
/// Evaluation precondition errors.
///
/// Raised when a sequence that is not well-formed reaches the evaluator.
pub mod sequence_error;
/// Session mutation errors.
///
/// Raised when a mutation names an item that does not exist or asks for
/// something the item cannot do.
pub mod session_error;
/// Structural defects of a sequence.
///
/// These are not failures of the program. They describe why the validator
/// rejected a sequence so the reason can be shown inline.
pub mod structural_error;

pub use question_error::QuestionError;
pub use script_error::ScriptError;
pub use sequence_error::SequenceError;
pub use session_error::SessionError;
pub use structural_error::StructuralError;
