//!
//! Group 4 — Clock-Time (spec.md §4.7): 17-bit MJD reassembly, the "received twice" rule, then
//! UTC hour/minute/offset extraction and conversion via [`crate::time::decode_clock_time`].
//!

use crate::decoder::RdsDecoder;
use crate::group::{Group, GroupVersion};
use crate::mask::UpdateMask;

pub(crate) fn decode(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    if group.version != GroupVersion::A {
        return UpdateMask::empty();
    }

    let b = group.data_b_lsb;
    let c = group.block_c();
    let d = group.block_d();

    let mjd = ((b as u32 & 0x3) << 15) | (c as u32 & 0x7FFF);

    let Some(mjd) = decoder.staged_mjd.observe(mjd) else {
        return UpdateMask::empty();
    };

    let hour = (((c >> 15) & 0x1) << 4) as u8 | (((d >> 12) & 0xF) as u8);
    let minute = ((d >> 6) & 0x3F) as u8;
    let offset_raw = (d & 0x3F) as u8;
    let magnitude = (offset_raw & 0x1F) as i8;
    let offset_half_hours = if offset_raw & 0x20 != 0 {
        -magnitude
    } else {
        magnitude
    };

    if decoder.decode_clock_time(mjd, hour, minute, offset_half_hours) {
        UpdateMask::TIME
    } else {
        UpdateMask::empty()
    }
}
