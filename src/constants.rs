//! Verification and emission constants

/// Ed25519 public key length
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Ed25519 signature length
pub const SIGNATURE_SIZE: usize = 64;

/// Address length: RIPEMD160(SHA256(x))
pub const ADDRESS_SIZE: usize = 20;

/// Script ID length: height (4) + tx index (4) + script index (2)
pub const SCRIPT_ID_SIZE: usize = 10;

/// Roster position prefix carried by every multi-signature entry
pub const ROSTER_PREFIX_SIZE: usize = 1;

/// Largest roster a multi-signature address can commit to.
/// Both the threshold and the roster size are encoded in one byte.
pub const MAX_ROSTER_SIZE: usize = 255;

/// Signature protocol version 1: Ed25519
pub const SIG_VERSION_ED25519: u32 = 1;

/// Blocks per sidereal year at one block every 6 minutes
pub const BLOCKS_PER_YEAR: i64 = 87_661;

/// Base units per coin
pub const UNITS_PER_COIN: i64 = 100_000_000;

/// Emission stops once the per-block amount drops below 3 coins
pub const MINT_END_LINE: i64 = 3 * UNITS_PER_COIN;

/// Emission decay rates are expressed in permille
pub const RATE_SCALE: i64 = 1000;
