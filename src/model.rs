/// Quantity tiles.
///
/// A factor carries the number used for evaluation together with the
/// presentation data (label, unit, optional randomized display range).
pub mod factor;
/// Sequence items and their identities.
///
/// Defines the tagged union placed into a sequence and the process-unique id
/// minted for every placement.
pub mod item;
/// Operator tiles and the standard operation bank.
pub mod operation;

pub use factor::Factor;
pub use item::{ItemId, Sequence, SequenceItem};
pub use operation::{Operation, OperationKind};
