//! Spend authorization predicates
//!
//! Both predicates bind the proof to the claimed address before any
//! signature math: a valid signature from an unrelated key must never unlock
//! an address it does not own.
//!
//! Outcomes:
//! - `Ok(false)`: not authorized (address or signature mismatch)
//! - `Err(_)`: the proof cannot be evaluated (bad lengths, unknown version,
//!   malformed roster)

use crate::address::AddressHasher;
use crate::constants::*;
use crate::error::{ConsensusError, Result};
use crate::roster::strip_index_prefix;
use crate::signature::{check_sigs, SigScheme};
use crate::types::*;

/// SingleCheck: 𝕍 × 𝒫𝒦 × 𝕊 × 𝒮 × 𝒜 → {true, false}
///
/// 1. a' = AddressOf(pubkey)
/// 2. If a' ≠ claimed: return false (signature is not examined)
/// 3. Return CheckSig(version, pubkey, msg, sig)
pub fn single_check<H: AddressHasher + ?Sized>(
    hasher: &H,
    version: Version,
    pubkey: &[u8],
    msg: &[u8],
    sig: &[u8],
    claimed: &[u8],
) -> Result<bool> {
    let scheme = SigScheme::from_version(version)?;
    check_message(msg)?;
    let pubkey = PublicKey::from_slice(pubkey)?;
    let sig = Signature::from_slice(sig)?;
    let claimed = Address::from_slice(claimed)?;

    let computed = hasher.address_of(&pubkey);
    if computed != claimed {
        tracing::debug!(%claimed, %computed, "single-key address mismatch");
        return Ok(false);
    }

    Ok(scheme.verify(&pubkey, msg, &sig))
}

/// MultiCheck: 𝕍 × 𝕊 × 𝒮* × 𝒫𝒦* × 𝒜* × 𝒜 → {true, false}
///
/// `prefixed_pubkeys` are the signing members and `prefixed_hashes` the key
/// hashes of the members who did not sign, all carrying their roster position
/// as a one-byte prefix. `sigs[i]` belongs to `prefixed_pubkeys[i]`.
///
/// 1. a' = MultiAddressOf(prefixed_pubkeys, prefixed_hashes), propagating
///    roster errors
/// 2. If a' ≠ claimed: return false
/// 3. Return CheckSigs(version, strip(prefixed_pubkeys), msg, sigs)
pub fn multi_check<H, S, K, P>(
    hasher: &H,
    version: Version,
    msg: &[u8],
    sigs: &[S],
    prefixed_pubkeys: &[K],
    prefixed_hashes: &[P],
    claimed: &[u8],
) -> Result<bool>
where
    H: AddressHasher + ?Sized,
    S: AsRef<[u8]>,
    K: AsRef<[u8]>,
    P: AsRef<[u8]>,
{
    SigScheme::from_version(version)?;
    check_message(msg)?;
    let claimed = Address::from_slice(claimed)?;

    if sigs.len() != prefixed_pubkeys.len() {
        return Err(ConsensusError::LengthMismatch {
            pubkeys: prefixed_pubkeys.len(),
            signatures: sigs.len(),
        });
    }
    for sig in sigs {
        Signature::from_slice(sig.as_ref())?;
    }

    let pks: Vec<&[u8]> = prefixed_pubkeys.iter().map(AsRef::as_ref).collect();
    let pkhs: Vec<&[u8]> = prefixed_hashes.iter().map(AsRef::as_ref).collect();

    // Threshold and roster size are part of the derived address
    let computed = hasher.multi_address_of(&pks, &pkhs)?;
    if computed != claimed {
        tracing::debug!(
            %claimed,
            %computed,
            signers = pks.len(),
            roster = pks.len() + pkhs.len(),
            "multi-key address mismatch"
        );
        return Ok(false);
    }

    let pubkeys = strip_index_prefix(&pks)?;
    check_sigs(version, &pubkeys, msg, sigs)
}

fn check_message(msg: &[u8]) -> Result<()> {
    if msg.len() != SCRIPT_ID_SIZE {
        return Err(ConsensusError::MessageLength {
            expected: SCRIPT_ID_SIZE,
            actual: msg.len(),
        });
    }
    Ok(())
}
