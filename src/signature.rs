//! Primitive signature checking
//!
//! Every check carries a protocol version. The version selects a [`SigScheme`],
//! so a future scheme is one more variant here and no call site changes.

use crate::constants::*;
use crate::error::{ConsensusError, Result};
use crate::types::*;
use ed25519_dalek::Verifier;

/// Signature scheme selected by a protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SigScheme {
    /// Version 1: Ed25519, 32-byte keys, 64-byte signatures
    Ed25519,
}

impl SigScheme {
    /// Resolve the scheme for a protocol version
    pub fn from_version(version: Version) -> Result<Self> {
        match version {
            SIG_VERSION_ED25519 => Ok(SigScheme::Ed25519),
            other => Err(ConsensusError::UnsupportedVersion(other)),
        }
    }

    /// Protocol version tag of this scheme
    pub fn version(&self) -> Version {
        match self {
            SigScheme::Ed25519 => SIG_VERSION_ED25519,
        }
    }

    /// Verify one signature. Cryptographic mismatches, including a key
    /// that is not a valid curve point, are `false`.
    pub fn verify(&self, pubkey: &PublicKey, msg: &[u8], sig: &Signature) -> bool {
        match self {
            SigScheme::Ed25519 => verify_ed25519(pubkey, msg, sig),
        }
    }
}

fn verify_ed25519(pubkey: &PublicKey, msg: &[u8], sig: &Signature) -> bool {
    let verifying_key = match ed25519_dalek::VerifyingKey::from_bytes(pubkey.as_bytes()) {
        Ok(vk) => vk,
        Err(_) => return false,
    };
    let signature = ed25519_dalek::Signature::from_bytes(sig.as_bytes());
    verifying_key.verify(msg, &signature).is_ok()
}

/// CheckSig: 𝕍 × 𝒫𝒦 × 𝕊 × 𝒮 → {true, false}
///
/// Verifies `sig` over `msg` under `pubkey` with the scheme selected by
/// `version`. Wrong key/signature lengths and unknown versions are errors.
pub fn check_sig(version: Version, pubkey: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool> {
    let scheme = SigScheme::from_version(version)?;
    let pubkey = PublicKey::from_slice(pubkey)?;
    let sig = Signature::from_slice(sig)?;

    tracing::trace!(version, "checking single signature");
    Ok(scheme.verify(&pubkey, msg, &sig))
}

/// CheckSigs: 𝕍 × 𝒫𝒦* × 𝕊 × 𝒮* → {true, false}
///
/// Positional all-or-nothing verification over one shared message:
/// 1. |pubkeys| = |sigs|, otherwise error
/// 2. Every key and signature well-formed, otherwise error
/// 3. ∀i: verify(pubkeys[i], msg, sigs[i]), stopping at the first failure
pub fn check_sigs<K, S>(version: Version, pubkeys: &[K], msg: &[u8], sigs: &[S]) -> Result<bool>
where
    K: AsRef<[u8]>,
    S: AsRef<[u8]>,
{
    let scheme = SigScheme::from_version(version)?;

    if pubkeys.len() != sigs.len() {
        return Err(ConsensusError::LengthMismatch {
            pubkeys: pubkeys.len(),
            signatures: sigs.len(),
        });
    }

    let pairs = pubkeys
        .iter()
        .zip(sigs)
        .map(|(pk, sig)| -> Result<(PublicKey, Signature)> {
            Ok((PublicKey::from_slice(pk.as_ref())?, Signature::from_slice(sig.as_ref())?))
        })
        .collect::<Result<Vec<_>>>()?;

    tracing::trace!(version, count = pairs.len(), "checking signature set");
    for (position, (pk, sig)) in pairs.iter().enumerate() {
        if !scheme.verify(pk, msg, sig) {
            tracing::debug!(position, "signature rejected");
            return Ok(false);
        }
    }
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn key(seed: u8) -> SigningKey {
        SigningKey::from_bytes(&[seed; 32])
    }

    fn pk_bytes(sk: &SigningKey) -> [u8; 32] {
        sk.verifying_key().to_bytes()
    }

    fn sign(sk: &SigningKey, msg: &[u8]) -> [u8; 64] {
        sk.sign(msg).to_bytes()
    }

    #[test]
    fn test_scheme_from_version() {
        assert_eq!(SigScheme::from_version(1).unwrap(), SigScheme::Ed25519);
        assert_eq!(SigScheme::Ed25519.version(), 1);
        assert_eq!(SigScheme::from_version(0), Err(ConsensusError::UnsupportedVersion(0)));
        assert_eq!(SigScheme::from_version(2), Err(ConsensusError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_check_sig_valid() {
        let sk = key(1);
        let msg = b"script";
        assert!(check_sig(1, &pk_bytes(&sk), msg, &sign(&sk, msg)).unwrap());
    }

    #[test]
    fn test_check_sig_altered_message() {
        let sk = key(1);
        let sig = sign(&sk, b"script");
        assert!(!check_sig(1, &pk_bytes(&sk), b"scripu", &sig).unwrap());
    }

    #[test]
    fn test_check_sig_altered_signature() {
        let sk = key(1);
        let mut sig = sign(&sk, b"script");
        sig[10] ^= 0x01;
        assert!(!check_sig(1, &pk_bytes(&sk), b"script", &sig).unwrap());
    }

    #[test]
    fn test_check_sig_wrong_key() {
        let sig = sign(&key(1), b"script");
        assert!(!check_sig(1, &pk_bytes(&key(2)), b"script", &sig).unwrap());
    }

    #[test]
    fn test_check_sig_unsupported_version() {
        let sk = key(1);
        let sig = sign(&sk, b"m");
        let result = check_sig(2, &pk_bytes(&sk), b"m", &sig);
        assert_eq!(result, Err(ConsensusError::UnsupportedVersion(2)));
    }

    #[test]
    fn test_check_sig_length_errors() {
        let sk = key(1);
        let sig = sign(&sk, b"m");
        let pk = pk_bytes(&sk);

        assert_eq!(
            check_sig(1, &pk[..31], b"m", &sig),
            Err(ConsensusError::PublicKeyLength { expected: 32, actual: 31 })
        );
        assert_eq!(
            check_sig(1, &pk, b"m", &sig[..63]),
            Err(ConsensusError::SignatureLength { expected: 64, actual: 63 })
        );
    }

    #[test]
    fn test_check_sigs_all_valid() {
        let keys: Vec<_> = (1..=3).map(key).collect();
        let msg = b"shared";
        let pks: Vec<_> = keys.iter().map(pk_bytes).collect();
        let sigs: Vec<_> = keys.iter().map(|k| sign(k, msg)).collect();
        assert!(check_sigs(1, &pks, msg, &sigs).unwrap());
    }

    #[test]
    fn test_check_sigs_last_pair_wrong() {
        let keys: Vec<_> = (1..=4).map(key).collect();
        let msg = b"shared";
        let pks: Vec<_> = keys.iter().map(pk_bytes).collect();
        let mut sigs: Vec<_> = keys.iter().map(|k| sign(k, msg)).collect();
        sigs[3] = sign(&keys[3], b"other");
        assert!(!check_sigs(1, &pks, msg, &sigs).unwrap());
    }

    #[test]
    fn test_check_sigs_swapped_positions() {
        let a = key(1);
        let b = key(2);
        let msg = b"shared";
        let pks = [pk_bytes(&a), pk_bytes(&b)];
        let sigs = [sign(&b, msg), sign(&a, msg)];
        assert!(!check_sigs(1, &pks, msg, &sigs).unwrap());
    }

    #[test]
    fn test_check_sigs_length_mismatch() {
        let sk = key(1);
        let pks = [pk_bytes(&sk), pk_bytes(&sk)];
        let sigs = [sign(&sk, b"m")];
        assert_eq!(
            check_sigs(1, &pks, b"m", &sigs),
            Err(ConsensusError::LengthMismatch { pubkeys: 2, signatures: 1 })
        );
    }

    #[test]
    fn test_check_sigs_malformed_entry_after_failure_still_errors() {
        // Lengths are validated before any signature is checked
        let sk = key(1);
        let pks: Vec<Vec<u8>> = vec![pk_bytes(&key(2)).to_vec(), vec![0u8; 5]];
        let sigs: Vec<Vec<u8>> = vec![sign(&sk, b"m").to_vec(), sign(&sk, b"m").to_vec()];
        assert_eq!(
            check_sigs(1, &pks, b"m", &sigs),
            Err(ConsensusError::PublicKeyLength { expected: 32, actual: 5 })
        );
    }

    #[test]
    fn test_check_sigs_empty_is_vacuously_true() {
        let pks: [[u8; 32]; 0] = [];
        let sigs: [[u8; 64]; 0] = [];
        assert!(check_sigs(1, &pks, b"m", &sigs).unwrap());
    }
}
