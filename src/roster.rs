//! Multi-signature roster entries
//!
//! Each entry is `position (1 byte) || body`, where body is a public key or
//! a public key hash. Views are borrowed sub-slices: the same transaction
//! buffer may be verified by several scripts at once and is never modified.

use crate::constants::ROSTER_PREFIX_SIZE;
use crate::error::{ConsensusError, Result};

/// A roster entry split into its position prefix and body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RosterEntry<'a> {
    pub position: u8,
    pub body: &'a [u8],
}

/// Split one prefixed entry. `index` is the entry's place in the caller's list.
pub fn parse_entry(index: usize, entry: &[u8]) -> Result<RosterEntry<'_>> {
    match entry.split_first() {
        Some((&position, body)) => Ok(RosterEntry { position, body }),
        None => Err(ConsensusError::EmptyRosterEntry(index)),
    }
}

/// StripIndexPrefix: 𝕊* → 𝕊*
///
/// Drops the leading position byte of every entry, keeping list order.
pub fn strip_index_prefix<E: AsRef<[u8]>>(entries: &[E]) -> Result<Vec<&[u8]>> {
    entries
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let entry = entry.as_ref();
            if entry.len() < ROSTER_PREFIX_SIZE {
                return Err(ConsensusError::EmptyRosterEntry(i));
            }
            Ok(&entry[ROSTER_PREFIX_SIZE..])
        })
        .collect()
}
