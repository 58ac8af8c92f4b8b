use super::RemapError;
use ethereum_types::Address;
use std::collections::HashMap;

/// Bidirectional address substitution table.
///
/// The two maps are exact inverses of each other after every mutation:
/// `old_to_new` contains `(o, n)` iff `new_to_old` contains `(n, o)`.
#[derive(Clone, Debug, Default)]
pub struct RemapTable {
    old_to_new: HashMap<Address, Address>,
    new_to_old: HashMap<Address, Address>,
}

impl RemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Unconditionally maps `old` to `new` in both directions, overwriting
    /// any prior entries keyed by either address.
    pub fn associate(&mut self, old: Address, new: Address) {
        tracing::debug!(
            "Mapping: {} to {}",
            hex::encode(old.as_bytes()),
            hex::encode(new.as_bytes())
        );
        self.old_to_new.insert(old, new);
        self.new_to_old.insert(new, old);
    }

    /// Pins `old` to `new`. Whichever address currently occupies `new` is
    /// relocated to the target `old` held before, rather than being lost.
    ///
    /// `old` must already be present in the table.
    pub fn associate_existing(&mut self, old: Address, new: Address) -> Result<(), RemapError> {
        tracing::debug!(
            "Associating existing: {} to {}",
            hex::encode(old.as_bytes()),
            hex::encode(new.as_bytes())
        );
        let displaced_new = self
            .old_to_new
            .get(&old)
            .copied()
            .ok_or(RemapError::UnknownPinSource(old))?;
        match self.new_to_old.get(&new).copied() {
            Some(displaced_old) => {
                // Swap the two entries' targets.
                self.associate(displaced_old, displaced_new);
                self.associate(old, new);
            }
            None => {
                // Nobody to relocate; the slot `old` held becomes vacant.
                self.new_to_old.remove(&displaced_new);
                self.associate(old, new);
            }
        }
        Ok(())
    }

    /// Current target for `old`, if one exists.
    pub fn resolve(&self, old: Address) -> Option<Address> {
        self.old_to_new.get(&old).copied()
    }

    /// Current target for `old`, or the zero address.
    pub fn resolve_or_default(&self, old: Address) -> Address {
        self.resolve(old).unwrap_or_default()
    }

    /// Original address currently occupying `new`, if any.
    pub fn original(&self, new: Address) -> Option<Address> {
        self.new_to_old.get(&new).copied()
    }

    pub fn len(&self) -> usize {
        self.old_to_new.len()
    }

    pub fn is_empty(&self) -> bool {
        self.old_to_new.is_empty()
    }
}
