//!
//! Group 1 — Slow Labeling: ECC and LC, each gated by the "received twice" rule (spec.md §4.4).
//!

use crate::decoder::RdsDecoder;
use crate::group::{Group, GroupVersion};
use crate::mask::{UpdateMask, ValidFields};

pub(crate) fn decode(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    if group.version != GroupVersion::A {
        return UpdateMask::empty();
    }

    let variant = (group.block_c() >> 12) & 0x7;
    let mut mask = UpdateMask::empty();

    match variant {
        0 => {
            if let Some(ecc) = decoder.staged_ecc.observe(group.data_c_lsb) {
                if decoder.ecc != Some(ecc) {
                    decoder.ecc = Some(ecc);
                    mask |= UpdateMask::ECC;
                }
                decoder.valid_fields |= ValidFields::ECC;
            }
        }
        3 => {
            if let Some(lc) = decoder.staged_lc.observe(group.data_c_lsb) {
                if decoder.lc != Some(lc) {
                    decoder.lc = Some(lc);
                    mask |= UpdateMask::LC;
                }
                decoder.valid_fields |= ValidFields::LC;
            }
        }
        _ => {}
    }

    mask
}
