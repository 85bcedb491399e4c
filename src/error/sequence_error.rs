use crate::{error::StructuralError, sequence::validator::ValidationState};

#[derive(Debug, Clone, PartialEq, Eq)]
/// Errors raised when evaluating a sequence.
pub enum SequenceError {
    /// The evaluator was handed a sequence the validator does not accept.
    /// Submission is supposed to be gated on validity, so this points at a
    /// caller bug.
    InvalidSequence {
        /// The verdict the validator gave for the sequence.
        state:  ValidationState,
        /// The structural defect, if the sequence was non-empty.
        reason: Option<StructuralError>,
    },
}

impl std::fmt::Display for SequenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidSequence { reason: Some(reason),
                                    .. } => write!(f, "Cannot evaluate sequence. {reason}"),
            Self::InvalidSequence { state, reason: None } => {
                write!(f, "Cannot evaluate sequence in state '{state}'.")
            },
        }
    }
}

impl std::error::Error for SequenceError {}
