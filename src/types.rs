//! Core value types for spend authorization
//!
//! Every value here is transient: rebuilt per call from caller-supplied bytes.

use crate::constants::*;
use crate::error::{ConsensusError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Byte string type
pub type ByteString = Vec<u8>;

/// Signature protocol version tag
pub type Version = u32;

/// Script ID: height (u32 BE) || tx index (u32 BE) || script index (u16 BE)
///
/// Lexicographic byte order equals (height, tx index, script index) order,
/// so the derived `Ord` sorts IDs the way the chain does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ScriptId(pub [u8; SCRIPT_ID_SIZE]);

/// Ed25519 public key bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PublicKey(pub [u8; PUBLIC_KEY_SIZE]);

/// Ed25519 signature bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature(pub [u8; SIGNATURE_SIZE]);

/// Address: opaque hash of the authorized key material
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Address(pub [u8; ADDRESS_SIZE]);

impl ScriptId {
    pub fn as_bytes(&self) -> &[u8; SCRIPT_ID_SIZE] {
        &self.0
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SCRIPT_ID_SIZE] = bytes.try_into().map_err(|_| ConsensusError::MessageLength {
            expected: SCRIPT_ID_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for ScriptId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PublicKey {
    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; PUBLIC_KEY_SIZE] = bytes.try_into().map_err(|_| ConsensusError::PublicKeyLength {
            expected: PUBLIC_KEY_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Signature {
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_SIZE] {
        &self.0
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; SIGNATURE_SIZE] = bytes.try_into().map_err(|_| ConsensusError::SignatureLength {
            expected: SIGNATURE_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Address {
    pub fn as_bytes(&self) -> &[u8; ADDRESS_SIZE] {
        &self.0
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let arr: [u8; ADDRESS_SIZE] = bytes.try_into().map_err(|_| ConsensusError::AddressLength {
            expected: ADDRESS_SIZE,
            actual: bytes.len(),
        })?;
        Ok(Self(arr))
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{b:02x}")?;
        }
        Ok(())
    }
}
