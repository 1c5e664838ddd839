//! # Spend-Auth
//!
//! Authorization verification for spendable script outputs.
//!
//! Given the unlock data of a script, this crate decides whether the claimant
//! may consume the value it guards. Two ownership models are supported, both
//! anchored to a previously committed address:
//!
//! - single key: `HASH160(pk)`
//! - threshold multi key (n-of-T): `HASH160(n || T || roster key hashes)`
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every check is deterministic and side-effect-free,
//!    safe to run in parallel across scripts without coordination
//! 2. **Address First**: The claimed address is verified before any signature
//! 3. **Versioned Schemes**: Every signature check carries a protocol version
//!    that selects the scheme (version 1: Ed25519)
//! 4. **Negatives Are Not Errors**: `Ok(false)` means "not authorized";
//!    `Err` means the proof could not be evaluated
//! 5. **Exact Version Pinning**: Consensus-critical crypto dependencies are
//!    pinned to exact versions
//!
//! ## Usage
//!
//! ```rust
//! use ed25519_dalek::{Signer, SigningKey};
//! use spend_auth::SpendVerifier;
//! use spend_auth::address::pubkey_hash;
//! use spend_auth::types::PublicKey;
//!
//! let verifier = SpendVerifier::new();
//! let signing_key = SigningKey::from_bytes(&[7u8; 32]);
//! let pubkey = PublicKey(signing_key.verifying_key().to_bytes());
//! let address = pubkey_hash(&pubkey);
//!
//! let msg = verifier.script_id(100, 3, 0);
//! let sig = signing_key.sign(msg.as_bytes()).to_bytes();
//!
//! let ok = verifier
//!     .single_check(1, pubkey.as_bytes(), msg.as_bytes(), &sig, address.as_bytes())
//!     .unwrap();
//! assert!(ok);
//! ```

pub mod types;
pub mod constants;
pub mod error;
pub mod script_id;
pub mod signature;
pub mod roster;
pub mod address;
pub mod auth;
pub mod emission;

// Re-export commonly used types
pub use types::*;
pub use constants::*;
pub use error::{ConsensusError, Result, RosterError};
pub use address::{AddressHasher, Hash160Addresses};
pub use signature::SigScheme;
pub use emission::{EmissionReport, EmissionSchedule, EmissionYear};

/// Main spend verification entry point
///
/// Bundles the address scheme with every verification operation. The default
/// address scheme is [`Hash160Addresses`].
///
/// # Examples
///
/// ```
/// use spend_auth::SpendVerifier;
///
/// let verifier = SpendVerifier::new();
/// let id = verifier.script_id(1, 2, 3);
/// assert_eq!(id.as_bytes(), &[0, 0, 0, 1, 0, 0, 0, 2, 0, 3]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SpendVerifier<H: AddressHasher = Hash160Addresses> {
    hasher: H,
}

impl SpendVerifier {
    /// Create a verifier using HASH160 addresses
    pub fn new() -> Self {
        Self { hasher: Hash160Addresses }
    }
}

impl<H: AddressHasher> SpendVerifier<H> {
    /// Create a verifier with a custom address scheme
    pub fn with_hasher(hasher: H) -> Self {
        Self { hasher }
    }

    /// The address scheme in use
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Build the script ID signed by unlock proofs
    pub fn script_id(&self, height: u32, tx_index: u32, script_index: u16) -> ScriptId {
        script_id::script_id(height, tx_index, script_index)
    }

    /// Verify one signature
    ///
    /// # Examples
    ///
    /// ```
    /// use ed25519_dalek::{Signer, SigningKey};
    /// use spend_auth::SpendVerifier;
    ///
    /// let verifier = SpendVerifier::new();
    /// let sk = SigningKey::from_bytes(&[1u8; 32]);
    /// let sig = sk.sign(b"payload").to_bytes();
    ///
    /// let pk = sk.verifying_key().to_bytes();
    /// assert!(verifier.check_sig(1, &pk, b"payload", &sig).unwrap());
    /// assert!(!verifier.check_sig(1, &pk, b"Payload", &sig).unwrap());
    /// assert!(verifier.check_sig(2, &pk, b"payload", &sig).is_err());
    /// ```
    pub fn check_sig(&self, version: Version, pubkey: &[u8], msg: &[u8], sig: &[u8]) -> Result<bool> {
        signature::check_sig(version, pubkey, msg, sig)
    }

    /// Verify positional signatures over one message, all or nothing
    pub fn check_sigs<K, S>(&self, version: Version, pubkeys: &[K], msg: &[u8], sigs: &[S]) -> Result<bool>
    where
        K: AsRef<[u8]>,
        S: AsRef<[u8]>,
    {
        signature::check_sigs(version, pubkeys, msg, sigs)
    }

    /// Single-key authorization against a claimed address
    pub fn single_check(
        &self,
        version: Version,
        pubkey: &[u8],
        msg: &[u8],
        sig: &[u8],
        claimed: &[u8],
    ) -> Result<bool> {
        auth::single_check(&self.hasher, version, pubkey, msg, sig, claimed)
    }

    /// Threshold multi-key authorization against a claimed address
    ///
    /// # Examples
    ///
    /// ```
    /// use ed25519_dalek::{Signer, SigningKey};
    /// use spend_auth::SpendVerifier;
    /// use spend_auth::address::{multi_address, pubkey_hash};
    /// use spend_auth::types::{Address, PublicKey};
    ///
    /// let verifier = SpendVerifier::new();
    /// let keys: Vec<SigningKey> = (1..=3u8).map(|s| SigningKey::from_bytes(&[s; 32])).collect();
    /// let pubkeys: Vec<PublicKey> = keys.iter().map(|k| PublicKey(k.verifying_key().to_bytes())).collect();
    /// let hashes: Vec<Address> = pubkeys.iter().map(pubkey_hash).collect();
    /// let address = multi_address(2, &hashes).unwrap();
    ///
    /// let msg = verifier.script_id(10, 0, 1);
    /// let sigs = vec![keys[0].sign(msg.as_bytes()).to_bytes(), keys[1].sign(msg.as_bytes()).to_bytes()];
    /// let signers = vec![
    ///     [&[0u8][..], pubkeys[0].as_bytes()].concat(),
    ///     [&[1u8][..], pubkeys[1].as_bytes()].concat(),
    /// ];
    /// let absent = vec![[&[2u8][..], hashes[2].as_bytes()].concat()];
    ///
    /// let ok = verifier
    ///     .multi_check(1, msg.as_bytes(), &sigs, &signers, &absent, address.as_bytes())
    ///     .unwrap();
    /// assert!(ok);
    /// ```
    pub fn multi_check<S, K, P>(
        &self,
        version: Version,
        msg: &[u8],
        sigs: &[S],
        prefixed_pubkeys: &[K],
        prefixed_hashes: &[P],
        claimed: &[u8],
    ) -> Result<bool>
    where
        S: AsRef<[u8]>,
        K: AsRef<[u8]>,
        P: AsRef<[u8]>,
    {
        auth::multi_check(&self.hasher, version, msg, sigs, prefixed_pubkeys, prefixed_hashes, claimed)
    }

    /// Year-by-year emission for a base amount and decay rate
    pub fn award_total(&self, base_coins: i64, rate_permille: i64, schedule: &EmissionSchedule) -> Result<EmissionReport> {
        emission::award_total(base_coins, rate_permille, schedule)
    }
}
