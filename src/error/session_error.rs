use crate::model::ItemId;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that a session mutation can report.
pub enum SessionError {
    /// No item with this id is in the sequence.
    UnknownItem {
        /// The id that was looked up.
        id: ItemId,
    },
    /// A reorder request was not a permutation of the current ids.
    ReorderMismatch {
        /// Number of items currently in the sequence.
        expected: usize,
        /// Number of ids in the request.
        found:    usize,
    },
    /// A value change targeted an operation.
    NotAFactor {
        /// The id of the operation.
        id: ItemId,
    },
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownItem { id } => write!(f, "No item with id {id} in the sequence."),
            Self::ReorderMismatch { expected, found } => write!(f,
                                                                "Reorder must list each of the {expected} current items exactly once, but {found} ids were given."),
            Self::NotAFactor { id } => {
                write!(f, "Item {id} is an operation and has no value to change.")
            },
        }
    }
}

impl std::error::Error for SessionError {}
