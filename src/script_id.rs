//! Script identifier construction
//!
//! A script ID is the message every unlock proof signs. Re-deriving it from
//! the same (height, tx index, script index) must always give the same bytes,
//! since historical signatures are re-verified against it.

use crate::types::ScriptId;

/// ScriptID: ℕ₃₂ × ℕ₃₂ × ℕ₁₆ → 𝔹¹⁰
///
/// Big-endian concatenation of:
/// - h: ideal block height (4 bytes)
/// - n: transaction position in the block (4 bytes)
/// - i: script position in the transaction (2 bytes)
pub fn script_id(height: u32, tx_index: u32, script_index: u16) -> ScriptId {
    let mut id = [0u8; 10];
    id[0..4].copy_from_slice(&height.to_be_bytes());
    id[4..8].copy_from_slice(&tx_index.to_be_bytes());
    id[8..10].copy_from_slice(&script_index.to_be_bytes());
    ScriptId(id)
}

impl ScriptId {
    /// Block height component
    pub fn height(&self) -> u32 {
        u32::from_be_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// Transaction index component
    pub fn tx_index(&self) -> u32 {
        u32::from_be_bytes([self.0[4], self.0[5], self.0[6], self.0[7]])
    }

    /// Script index component
    pub fn script_index(&self) -> u16 {
        u16::from_be_bytes([self.0[8], self.0[9]])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_id_layout() {
        let id = script_id(100, 3, 0);
        assert_eq!(id.as_bytes(), &[0, 0, 0, 100, 0, 0, 0, 3, 0, 0]);
    }

    #[test]
    fn test_script_id_max_values() {
        let id = script_id(u32::MAX, u32::MAX, u16::MAX);
        assert_eq!(id.as_bytes(), &[0xff; 10]);
    }

    #[test]
    fn test_script_id_components() {
        let id = script_id(0x0102_0304, 0x0a0b_0c0d, 0xbeef);
        assert_eq!(id.height(), 0x0102_0304);
        assert_eq!(id.tx_index(), 0x0a0b_0c0d);
        assert_eq!(id.script_index(), 0xbeef);
    }

    #[test]
    fn test_script_id_deterministic() {
        assert_eq!(script_id(7, 8, 9), script_id(7, 8, 9));
    }

    #[test]
    fn test_script_id_sorts_by_height_first() {
        // Larger tx/script index must not outrank a higher block
        assert!(script_id(1, u32::MAX, u16::MAX) < script_id(2, 0, 0));
        assert!(script_id(5, 1, u16::MAX) < script_id(5, 2, 0));
        assert!(script_id(5, 2, 0) < script_id(5, 2, 1));
    }
}
