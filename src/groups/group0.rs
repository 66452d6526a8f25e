//!
//! Group 0 — Basic Tuning: PS name assembly, TA/MS flags, DI accumulation, AF list (spec.md §4.3).
//!

use crate::decoder::RdsDecoder;
use crate::group::{Group, GroupVersion};
use crate::mask::{UpdateMask, ValidFields};

pub(crate) fn decode(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    let mut mask = UpdateMask::empty();
    let b = group.data_b_lsb;

    let ta = (b & 0x10) != 0;
    let ms = (b & 0x08) != 0;
    if decoder.ta != ta {
        decoder.ta = ta;
        mask |= UpdateMask::TA;
    }
    decoder.valid_fields |= ValidFields::TA;
    if decoder.ms != ms {
        decoder.ms = ms;
        mask |= UpdateMask::MS;
    }
    decoder.valid_fields |= ValidFields::MS;

    let di_bit = (b & 0x04) != 0;
    let segment = (b & 0x03) as usize;
    if decoder.decode_di_segment(segment as u8, di_bit) {
        mask |= UpdateMask::DI;
    }

    if decode_ps(decoder, group, segment) {
        mask |= UpdateMask::PS;
    }

    if group.version == GroupVersion::A {
        if decoder.rds_af.decode_pair(group.data_c_msb, group.data_c_lsb) {
            mask |= UpdateMask::AF;
        }
        if decoder.rds_af.is_valid() {
            decoder.valid_fields |= ValidFields::AF;
        }
    }

    mask
}

/// Assembles the 8-character PS name two characters at a time (spec.md §4.3). A position is only
/// marked valid once the same character arrives twice in a row for it; a position that changes
/// instead of repeating clears every position's validity (PS drift is never partially adopted).
fn decode_ps(decoder: &mut RdsDecoder, group: &Group, segment: usize) -> bool {
    let pos0 = segment * 2;
    let pos1 = pos0 + 1;
    let c0 = group.data_c_msb as char;
    let c1 = group.data_c_lsb as char;

    let mut disagreement = false;
    for (pos, ch) in [(pos0, c0), (pos1, c1)] {
        match decoder.new_ps_staged[pos] {
            Some(prev) if prev == ch => decoder.new_ps_valid[pos] = true,
            Some(_) => {
                disagreement = true;
                decoder.new_ps_staged[pos] = Some(ch);
            }
            None => decoder.new_ps_staged[pos] = Some(ch),
        }
    }
    if disagreement {
        decoder.new_ps_valid = [false; 8];
    }

    if !decoder.new_ps_valid.iter().all(|&v| v) {
        return false;
    }

    let assembled: [char; 8] = core::array::from_fn(|i| decoder.new_ps_staged[i].unwrap_or(' '));
    decoder.valid_fields |= ValidFields::PS;
    if assembled != decoder.ps {
        decoder.ps = assembled;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupVersion;

    fn group(b_lsb: u8, c_msb: u8, c_lsb: u8) -> Group {
        Group {
            pi: 0x1234,
            group_id: 0,
            version: GroupVersion::A,
            tp: false,
            pty: 0,
            data_b_lsb: b_lsb,
            data_c_msb: c_msb,
            data_c_lsb: c_lsb,
            data_d_msb: 0,
            data_d_lsb: 0,
        }
    }

    #[test]
    fn test_ta_ms_accepted_immediately() {
        let mut d = RdsDecoder::new(false);
        let mask = decode(&mut d, &group(0x18, 0, 0));
        assert!(mask.contains(UpdateMask::TA));
        assert!(mask.contains(UpdateMask::MS));
        assert!(d.ta);
        assert!(d.ms);
    }

    #[test]
    fn test_ps_requires_two_matching_bursts() {
        let mut d = RdsDecoder::new(false);
        // Burst 1: segments 0..3 spelling "STATION!".
        let text = *b"STATION!";
        for segment in 0..4u8 {
            let c0 = text[(segment as usize) * 2];
            let c1 = text[(segment as usize) * 2 + 1];
            let mask = decode(&mut d, &group(segment, c0, c1));
            assert!(!mask.contains(UpdateMask::PS));
        }
        assert_eq!(d.ps, [' '; 8]);

        // Burst 2: identical segments.
        let mut last_mask = UpdateMask::empty();
        for segment in 0..4u8 {
            let c0 = text[(segment as usize) * 2];
            let c1 = text[(segment as usize) * 2 + 1];
            last_mask = decode(&mut d, &group(segment, c0, c1));
        }
        assert!(last_mask.contains(UpdateMask::PS));
        assert_eq!(d.ps, ['S', 'T', 'A', 'T', 'I', 'O', 'N', '!']);
    }

    #[test]
    fn test_af_becomes_valid_at_announced_count() {
        let mut d = RdsDecoder::new(false);
        decode(&mut d, &group(0, 0xE3, 0x04)); // announced_af=3, first freq
        assert!(!d.valid_fields.contains(ValidFields::AF));
        decode(&mut d, &group(0, 0x05, 0x06));
        assert!(d.valid_fields.contains(ValidFields::AF));
        assert_eq!(d.rds_af.size, 3);
    }
}
