use ethereum_types::Address;
use thiserror::Error;

mod table;
mod transform;

pub use self::{table::*, transform::*};

/// Failure of a remapping run. Any of these aborts the whole transformation;
/// no partial output is produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RemapError {
    #[error("Pinned address {0:?} is not present in the remapping table.")]
    UnknownPinSource(Address),
    #[error("No remapped address for {0:?}.")]
    Unresolved(Address),
    #[error("Too many accounts for the placeholder range: {0}.")]
    PlaceholderSpaceExhausted(usize),
}
