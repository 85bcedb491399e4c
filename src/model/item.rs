use std::fmt;

use uuid::Uuid;

use crate::model::{factor::Factor, operation::Operation};

/// Identity of one placement in a sequence.
///
/// A fresh id is minted for every insertion, so two placements of the same
/// factor or operation can still be removed or moved independently. Ids carry
/// no meaning for evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(Uuid);

impl ItemId {
    /// Mints a new random (version 4) id.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One element of a learner-assembled sequence.
#[derive(Debug, Clone, PartialEq)]
pub enum SequenceItem {
    /// A quantity tile.
    Factor(ItemId, Factor),
    /// An operator tile.
    Operation(ItemId, Operation),
}

impl SequenceItem {
    /// Wraps `factor` with a freshly minted id.
    #[must_use]
    pub fn factor(factor: Factor) -> Self {
        Self::Factor(ItemId::new(), factor)
    }

    /// Wraps `operation` with a freshly minted id.
    #[must_use]
    pub fn operation(operation: Operation) -> Self {
        Self::Operation(ItemId::new(), operation)
    }

    /// The id minted when this item was placed.
    #[must_use]
    pub const fn id(&self) -> ItemId {
        match self {
            Self::Factor(id, _) | Self::Operation(id, _) => *id,
        }
    }

    /// Whether this item is an operator tile.
    #[must_use]
    pub const fn is_operation(&self) -> bool {
        matches!(self, Self::Operation(..))
    }
}

impl fmt::Display for SequenceItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Factor(_, factor) => write!(f, "{}", factor.value),
            Self::Operation(_, operation) => write!(f, "{}", operation.symbol),
        }
    }
}

/// An ordered, possibly not yet well-formed, list of items.
pub type Sequence = Vec<SequenceItem>;
