#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Why a non-empty sequence is not a well-formed expression.
pub enum StructuralError {
    /// The sequence starts with an operation.
    LeadingOperation,
    /// The sequence ends with an operation.
    TrailingOperation,
    /// A factor sits at an odd position, directly after another factor.
    MisplacedFactor {
        /// Zero-based position of the offending item.
        index: usize,
    },
    /// An operation sits at an even position, directly after another
    /// operation.
    MisplacedOperation {
        /// Zero-based position of the offending item.
        index: usize,
    },
}

impl std::fmt::Display for StructuralError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LeadingOperation => {
                write!(f, "Not a valid expression: it cannot start with an operation.")
            },
            Self::TrailingOperation => {
                write!(f, "Not a valid expression: it cannot end with an operation.")
            },
            Self::MisplacedFactor { index } => write!(f,
                                                      "Not a valid expression: item {} is a factor but an operation was expected.",
                                                      index + 1),
            Self::MisplacedOperation { index } => write!(f,
                                                         "Not a valid expression: item {} is an operation but a factor was expected.",
                                                         index + 1),
        }
    }
}

impl std::error::Error for StructuralError {}
