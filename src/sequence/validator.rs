use std::fmt;

use crate::{error::StructuralError, model::SequenceItem};

/// Inline message shown under an invalid sequence.
pub const INVALID_MESSAGE: &str = "Not a valid expression";

/// Verdict of the structural validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidationState {
    /// The sequence is empty. Nothing has been entered, so no error should be
    /// shown yet.
    #[default]
    Init,
    /// The sequence alternates factors and operations and starts and ends on
    /// a factor.
    Valid,
    /// The sequence is non-empty and not well-formed.
    Invalid,
}

impl ValidationState {
    /// Whether submission is allowed.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The inline message to show for this state, if any.
    #[must_use]
    pub const fn message(self) -> Option<&'static str> {
        match self {
            Self::Invalid => Some(INVALID_MESSAGE),
            Self::Init | Self::Valid => None,
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init => write!(f, "init"),
            Self::Valid => write!(f, "valid"),
            Self::Invalid => write!(f, "invalid"),
        }
    }
}

/// Classifies a sequence as empty, well-formed, or malformed.
///
/// A well-formed sequence has odd length, a factor at every even index and an
/// operation at every odd index. This function is pure and total: calling it
/// twice on the same items yields the same verdict.
///
/// # Example
/// ```
/// use tilecalc::{
///     model::{Factor, Operation, OperationKind, SequenceItem},
///     sequence::{ValidationState, validate},
/// };
///
/// assert_eq!(validate(&[]), ValidationState::Init);
///
/// let two = SequenceItem::factor(Factor::new("Two", "", 2.0));
/// let plus = SequenceItem::operation(Operation::standard(OperationKind::Add));
/// assert_eq!(validate(&[two.clone(), plus.clone(), two.clone()]), ValidationState::Valid);
/// assert_eq!(validate(&[two, plus]), ValidationState::Invalid);
/// ```
#[must_use]
pub fn validate(items: &[SequenceItem]) -> ValidationState {
    if items.is_empty() {
        return ValidationState::Init;
    }

    match diagnose(items) {
        Ok(()) => ValidationState::Valid,
        Err(_) => ValidationState::Invalid,
    }
}

/// Reports the first structural defect of a sequence.
///
/// The boundary rule is checked before the alternation rule, so a sequence
/// that starts or ends with an operation always reports
/// [`StructuralError::LeadingOperation`] or
/// [`StructuralError::TrailingOperation`]. An empty sequence has no defect.
///
/// # Errors
/// Returns the first violation found.
pub fn diagnose(items: &[SequenceItem]) -> Result<(), StructuralError> {
    let (Some(first), Some(last)) = (items.first(), items.last()) else {
        return Ok(());
    };

    if first.is_operation() {
        return Err(StructuralError::LeadingOperation);
    }
    if last.is_operation() {
        return Err(StructuralError::TrailingOperation);
    }

    for (index, item) in items.iter().enumerate() {
        let expects_factor = index % 2 == 0;
        match item {
            SequenceItem::Factor(..) if !expects_factor => {
                return Err(StructuralError::MisplacedFactor { index });
            },
            SequenceItem::Operation(..) if expects_factor => {
                return Err(StructuralError::MisplacedOperation { index });
            },
            SequenceItem::Factor(..) | SequenceItem::Operation(..) => {},
        }
    }

    Ok(())
}
