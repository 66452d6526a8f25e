//!
//! TMC multi-group optional-field unpacking: a sequence of (4-bit label, variable-length data)
//! records read from the [`super::bitcursor::BitCursor`] stream.
//!

use super::bitcursor::BitCursor;

/// Maximum number of optional-field records retained per message (bounded: the 112-bit stream
/// can hold at most 112/4 = 28 zero-length records).
pub const MAX_OPTIONAL_FIELDS: usize = 28;

/// Data-length in bits for each 4-bit label value, per spec.md §4.8.
const LABEL_LENGTHS: [u8; 16] = [3, 3, 5, 5, 5, 8, 8, 8, 8, 11, 16, 16, 16, 16, 0, 0];

const LABEL_RESERVED: u8 = 15;
const LABEL_NO_DATA: u8 = 14;

/// One decoded optional field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OptionalField {
    pub label: u8,
    pub data: u32,
}

/// The bounded set of optional fields unpacked from a multi-group message.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct OptionalFields {
    pub size: usize,
    pub fields: [OptionalField; MAX_OPTIONAL_FIELDS],
}

impl PartialEq for OptionalFields {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.fields[..self.size] == other.fields[..self.size]
    }
}
impl Eq for OptionalFields {}

impl Default for OptionalFields {
    fn default() -> Self {
        Self {
            size: 0,
            fields: [OptionalField { label: 0, data: 0 }; MAX_OPTIONAL_FIELDS],
        }
    }
}

/// Unpacks all optional-field records from the given windows.
///
/// Stops when a label read or a data read would straddle past the last populated window (spec.md
/// §4.8). Label 15 is reserved and skipped without storing; label 14 carries no data.
pub fn unpack(words: [u32; 4], length: usize) -> OptionalFields {
    let mut cursor = BitCursor::new(words, length);
    let mut out = OptionalFields::default();

    loop {
        if out.size >= MAX_OPTIONAL_FIELDS {
            break;
        }
        let Some(label) = cursor.read_bits(4) else {
            break;
        };
        let label = label as u8;

        if label == LABEL_RESERVED {
            continue;
        }
        if label == LABEL_NO_DATA {
            out.fields[out.size] = OptionalField { label, data: 0 };
            out.size += 1;
            continue;
        }

        let len = LABEL_LENGTHS[label as usize] as usize;
        let Some(data) = cursor.read_bits(len) else {
            break;
        };
        out.fields[out.size] = OptionalField { label, data };
        out.size += 1;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word_with_top_bits(bits: u32, width: u32) -> u32 {
        bits << (32 - width)
    }

    #[test]
    fn test_single_label_14_no_data() {
        let word0 = word_with_top_bits(0b1110, 4);
        let fields = unpack([word0, 0, 0, 0], 1);
        assert_eq!(fields.size, 1);
        assert_eq!(fields.fields[0], OptionalField { label: 14, data: 0 });
    }

    #[test]
    fn test_label_0_reads_3_bits() {
        // label=0 (4 bits), data=0b101 (3 bits) packed at the top of the window.
        let payload: u32 = (0b0000 << 24) | (0b101 << 21);
        let word0 = payload << 4; // shift into bits 31..4
        let fields = unpack([word0, 0, 0, 0], 1);
        assert_eq!(fields.size, 1);
        assert_eq!(fields.fields[0], OptionalField { label: 0, data: 0b101 });
    }

    #[test]
    fn test_reserved_label_skipped() {
        // label=15 then label=14, both 4 bits, fits in one window with room to spare.
        let payload: u32 = (0b1111 << 24) | (0b1110 << 20);
        let word0 = payload << 4;
        let fields = unpack([word0, 0, 0, 0], 1);
        assert_eq!(fields.size, 1);
        assert_eq!(fields.fields[0].label, 14);
    }

    #[test]
    fn test_stops_on_incomplete_trailing_record() {
        // record 1: label=5 (length 8), data=0xFF -> 12 bits.
        // record 2: label=10 (length 16), but only 12 bits remain in the single window.
        let word0 = 0x5FFA0000u32;
        let fields = unpack([word0, 0, 0, 0], 1);
        assert_eq!(fields.size, 1);
        assert_eq!(fields.fields[0], OptionalField { label: 5, data: 0xFF });
    }

    #[test]
    fn test_bounded_output_size() {
        // All zero bits: every label is 0, data length 3, so it packs records of 7 bits each
        // indefinitely; output must still be capped.
        let fields = unpack([0, 0, 0, 0], 4);
        assert!(fields.size <= MAX_OPTIONAL_FIELDS);
    }
}
