//!
//! Group 10A — PTYN (spec.md §4.9): two-segment name, each half validated only once the same
//! 4-character payload arrives twice consecutively.
//!

use crate::decoder::RdsDecoder;
use crate::group::{Group, GroupVersion};
use crate::mask::{UpdateMask, ValidFields};

pub(crate) fn decode(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    if group.version != GroupVersion::A {
        return UpdateMask::empty();
    }

    let b = group.data_b_lsb;
    let segment = (b & 0x01) as usize;
    let ab_flag = (b & 0x10) != 0;

    let mut mask = UpdateMask::empty();

    if ab_flag != decoder.ptyn_ab_flag {
        decoder.ptyn_ab_flag = ab_flag;
        decoder.ptyn = [' '; 8];
        decoder.new_ptyn_staged = [None; 2];
        decoder.new_ptyn_valid = [false; 2];
        decoder.valid_fields.remove(ValidFields::PTYN);
        mask |= UpdateMask::PTYN;
    }

    let chars = [
        group.data_c_msb as char,
        group.data_c_lsb as char,
        group.data_d_msb as char,
        group.data_d_lsb as char,
    ];

    match decoder.new_ptyn_staged[segment] {
        Some(prev) if prev == chars => decoder.new_ptyn_valid[segment] = true,
        _ => {
            decoder.new_ptyn_staged[segment] = Some(chars);
            decoder.new_ptyn_valid[segment] = false;
        }
    }

    if !decoder.new_ptyn_valid.iter().all(|&v| v) {
        return mask;
    }

    let assembled: [char; 8] = core::array::from_fn(|i| {
        let half = decoder.new_ptyn_staged[i / 4].unwrap_or([' '; 4]);
        half[i % 4]
    });

    decoder.valid_fields |= ValidFields::PTYN;
    if assembled != decoder.ptyn {
        decoder.ptyn = assembled;
        mask |= UpdateMask::PTYN;
    }

    mask
}
