//!
//! The raw unit of input to the decoder: one 16-bit block with its position label and error
//! flags, as produced by an upstream tuner/demodulator.
//!

use crate::result::{Error, Result};

/// A block's position within an RDS group.
///
/// `CPrime` is block C of version-B groups; the assembler treats it identically to `C` when
/// filling the C slot. The numeric values correspond to the V4L2 RDS block-id field ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum BlockLabel {
    A,
    B,
    C,
    D,
    CPrime,
}

impl BlockLabel {
    /// Whether this label should be placed into the C slot of an in-progress group.
    pub fn is_c_slot(self) -> bool {
        matches!(self, BlockLabel::C | BlockLabel::CPrime)
    }
}

impl TryFrom<u8> for BlockLabel {
    type Error = Error;

    /// Converts a raw V4L2-style block-id value (after masking off flag bits) into a
    /// [`BlockLabel`]: 0=A, 1=B, 2=C, 3=D, 4=C'.
    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(BlockLabel::A),
            1 => Ok(BlockLabel::B),
            2 => Ok(BlockLabel::C),
            3 => Ok(BlockLabel::D),
            4 => Ok(BlockLabel::CPrime),
            other => Err(Error::InvalidBlockLabel(other)),
        }
    }
}

/// One received 16-bit RDS block plus the metadata the assembler needs to decide whether to
/// trust and place it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RawBlock {
    /// The 16-bit payload. Meaningless if `uncorrectable` is set.
    pub payload: u16,

    /// The block's claimed position in the group.
    pub label: BlockLabel,

    /// Whether the upstream demodulator applied forward error correction to recover this block.
    pub corrected: bool,

    /// Whether the upstream demodulator could not correct this block. An uncorrectable block's
    /// label is treated as invalid by the assembler, regardless of what label it carries.
    pub uncorrectable: bool,
}

impl RawBlock {
    /// Creates a new raw block with no error flags set.
    pub fn new(payload: u16, label: BlockLabel) -> Self {
        Self {
            payload,
            label,
            corrected: false,
            uncorrectable: false,
        }
    }

    /// Creates a new raw block marked as corrected by upstream FEC.
    pub fn corrected(payload: u16, label: BlockLabel) -> Self {
        Self {
            payload,
            label,
            corrected: true,
            uncorrectable: false,
        }
    }

    /// Creates a raw block marked uncorrectable; its label is ignored by the assembler.
    pub fn uncorrectable(label: BlockLabel) -> Self {
        Self {
            payload: 0,
            label,
            corrected: false,
            uncorrectable: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_from_v4l2_values() {
        assert_eq!(BlockLabel::try_from(0).unwrap(), BlockLabel::A);
        assert_eq!(BlockLabel::try_from(1).unwrap(), BlockLabel::B);
        assert_eq!(BlockLabel::try_from(2).unwrap(), BlockLabel::C);
        assert_eq!(BlockLabel::try_from(3).unwrap(), BlockLabel::D);
        assert_eq!(BlockLabel::try_from(4).unwrap(), BlockLabel::CPrime);
        assert!(BlockLabel::try_from(5).is_err());
    }

    #[test]
    fn test_c_slot() {
        assert!(BlockLabel::C.is_c_slot());
        assert!(BlockLabel::CPrime.is_c_slot());
        assert!(!BlockLabel::A.is_c_slot());
        assert!(!BlockLabel::D.is_c_slot());
    }
}
