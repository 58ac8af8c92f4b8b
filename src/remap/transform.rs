use super::{RemapError, RemapTable};
use crate::{common::DEAD_ADDRESS_BASE, models::StateDump};
use derive_more::Constructor;
use ethereum_types::{Address, H256};
use std::convert::TryFrom;

/// Requirement that `original` ends up mapped to `target`, displacing any
/// prior occupant of `target`.
#[derive(Clone, Copy, Debug, Constructor, PartialEq, Eq)]
pub struct ReservedPin {
    pub original: Address,
    pub target: Address,
}

/// Placeholder target for the account at position `index` of the sorted
/// address order: the dead base address with its low-order two bytes
/// overwritten by the little-endian encoding of the index.
pub fn placeholder_address(index: u16) -> Address {
    let index_bytes = (index as u64).to_le_bytes();
    let mut address = DEAD_ADDRESS_BASE;
    address.0[19] = index_bytes[0];
    address.0[18] = index_bytes[1];
    address
}

fn address_from_word(word: &H256) -> Option<Address> {
    if word.0[..12].iter().all(|byte| *byte == 0) {
        Some(Address::from_slice(&word.0[12..]))
    } else {
        None
    }
}

fn word_from_address(address: Address) -> H256 {
    let mut word = H256::zero();
    word.0[12..].copy_from_slice(address.as_bytes());
    word
}

/// Rewrites a captured dump so that every account lives at a deterministic
/// placeholder address, honors the supplied reserved pins, and repairs
/// storage words that point at relocated accounts.
///
/// The input dump is left untouched; the result carries a zeroed root, which
/// is meaningless after relocation anyway.
pub fn remap_dump(dump: &StateDump, pins: &[ReservedPin]) -> Result<StateDump, RemapError> {
    let mut table = RemapTable::new();

    for (index, address) in dump.accounts.keys().enumerate() {
        let index = u16::try_from(index)
            .map_err(|_| RemapError::PlaceholderSpaceExhausted(dump.accounts.len()))?;
        table.associate(*address, placeholder_address(index));
    }

    for pin in pins {
        table.associate_existing(pin.original, pin.target)?;
    }

    let mut remapped = StateDump::default();
    for (address, account) in &dump.accounts {
        let new_address = table
            .resolve(*address)
            .ok_or(RemapError::Unresolved(*address))?;

        let mut account = account.clone();
        for (slot, value) in account.storage.iter_mut() {
            if let Some(target) =
                address_from_word(value).and_then(|address| table.resolve(address))
            {
                tracing::debug!(
                    "Replacing storage value {} at {} with {}",
                    hex::encode(value.as_bytes()),
                    hex::encode(slot.as_bytes()),
                    hex::encode(target.as_bytes())
                );
                *value = word_from_address(target);
            }
        }

        remapped.accounts.insert(new_address, account);
    }

    Ok(remapped)
}
