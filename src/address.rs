//! Address derivation
//!
//! Addresses commit to the key material allowed to spend an output.
//!
//! - Single key: `HASH160(pk)`
//! - Multi key: `HASH160(n || T || h_0 || … || h_{T-1})`, where `n` is the
//!   threshold, `T` the roster size and `h_i` the HASH160 of the key at
//!   roster position `i`.
//!
//! Because `n` is part of the preimage, an unlock proof has to present
//! exactly `n` signing keys; the remaining `T - n` roster slots are filled
//! with their key hashes.

use crate::constants::*;
use crate::error::{RosterError, Result};
use crate::roster::parse_entry;
use crate::types::*;
use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Derives addresses from public key material.
///
/// Authorization predicates are generic over this so a network can commit
/// to addresses with a different hash construction.
pub trait AddressHasher: Send + Sync {
    /// Address of a single public key
    fn address_of(&self, pubkey: &PublicKey) -> Address;

    /// Address of a multi-signature roster reconstructed from the signing
    /// keys and the hashes of the non-signing members, each prefixed with
    /// its roster position. Malformed rosters are errors.
    fn multi_address_of(&self, prefixed_pubkeys: &[&[u8]], prefixed_hashes: &[&[u8]]) -> Result<Address>;
}

/// HASH160 addresses: RIPEMD160(SHA256(x))
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hash160Addresses;

impl AddressHasher for Hash160Addresses {
    fn address_of(&self, pubkey: &PublicKey) -> Address {
        pubkey_hash(pubkey)
    }

    fn multi_address_of(&self, prefixed_pubkeys: &[&[u8]], prefixed_hashes: &[&[u8]]) -> Result<Address> {
        let threshold = prefixed_pubkeys.len();
        if threshold == 0 {
            return Err(RosterError::NoSigners.into());
        }
        let size = threshold + prefixed_hashes.len();
        if size > MAX_ROSTER_SIZE {
            return Err(RosterError::TooLarge(size).into());
        }

        let mut slots: Vec<Option<Address>> = vec![None; size];

        for (i, raw) in prefixed_pubkeys.iter().enumerate() {
            let entry = parse_entry(i, raw)?;
            if entry.body.len() != PUBLIC_KEY_SIZE {
                return Err(RosterError::EntryLength {
                    index: i,
                    expected: ROSTER_PREFIX_SIZE + PUBLIC_KEY_SIZE,
                    actual: raw.len(),
                }
                .into());
            }
            let pk = PublicKey::from_slice(entry.body)?;
            place(&mut slots, entry.position, pubkey_hash(&pk))?;
        }

        // Hash entries are numbered after the signing keys in error reports
        for (i, raw) in prefixed_hashes.iter().enumerate() {
            let index = threshold + i;
            let entry = parse_entry(index, raw)?;
            if entry.body.len() != ADDRESS_SIZE {
                return Err(RosterError::EntryLength {
                    index,
                    expected: ROSTER_PREFIX_SIZE + ADDRESS_SIZE,
                    actual: raw.len(),
                }
                .into());
            }
            place(&mut slots, entry.position, Address::from_slice(entry.body)?)?;
        }

        // `size` entries with distinct positions below `size` fill every slot
        let hashes: Vec<Address> = slots.into_iter().flatten().collect();
        Ok(commit_roster(threshold, &hashes))
    }
}

fn place(slots: &mut [Option<Address>], position: u8, hash: Address) -> Result<()> {
    let size = slots.len();
    let slot = slots
        .get_mut(position as usize)
        .ok_or(RosterError::PositionOutOfRange { position, size })?;
    if slot.is_some() {
        return Err(RosterError::DuplicatePosition(position).into());
    }
    *slot = Some(hash);
    Ok(())
}

/// HASH160: RIPEMD160(SHA256(x))
pub fn hash160(data: &[u8]) -> Address {
    let sha256_hash = Sha256::digest(data);
    let ripemd160_hash = Ripemd160::digest(sha256_hash);
    let mut out = [0u8; ADDRESS_SIZE];
    out.copy_from_slice(&ripemd160_hash);
    Address(out)
}

/// Public key hash; also the single-key address
pub fn pubkey_hash(pubkey: &PublicKey) -> Address {
    hash160(pubkey.as_bytes())
}

/// Committed address of an n-of-T roster, given every member's key hash in
/// roster order. This is what a wallet publishes as the multi-signature
/// address; [`AddressHasher::multi_address_of`] must reproduce it from an
/// unlock proof.
pub fn multi_address(threshold: usize, roster_hashes: &[Address]) -> Result<Address> {
    let size = roster_hashes.len();
    if threshold == 0 {
        return Err(RosterError::NoSigners.into());
    }
    if size > MAX_ROSTER_SIZE {
        return Err(RosterError::TooLarge(size).into());
    }
    if threshold > size {
        return Err(RosterError::ThresholdExceedsRoster { threshold, size }.into());
    }
    Ok(commit_roster(threshold, roster_hashes))
}

// Callers guarantee 1 <= threshold <= hashes.len() <= MAX_ROSTER_SIZE.
fn commit_roster(threshold: usize, hashes: &[Address]) -> Address {
    let mut preimage = Vec::with_capacity(2 + hashes.len() * ADDRESS_SIZE);
    preimage.push(threshold as u8);
    preimage.push(hashes.len() as u8);
    for h in hashes {
        preimage.extend_from_slice(h.as_bytes());
    }
    hash160(&preimage)
}
