//!
//! Group 3 — ODA Announcements and TMC System (spec.md §4.6).
//!

use crate::decoder::RdsDecoder;
use crate::group::{Group, GroupVersion};
use crate::mask::{DecodeInformation, UpdateMask};
use crate::oda::{TMC_AID_ALTERNATE, TMC_AID_PRIMARY};
use crate::tmc::SystemOutcome;

pub(crate) fn decode(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    if group.version != GroupVersion::A {
        return UpdateMask::empty();
    }

    let b = group.data_b_lsb;
    let announced_version = if b & 0x01 == 0 {
        GroupVersion::A
    } else {
        GroupVersion::B
    };
    let announced_group_id = (b >> 1) & 0x0F;
    let aid = group.block_d();

    let mut mask = UpdateMask::empty();
    if decoder.rds_oda.announce(announced_group_id, announced_version, aid) {
        mask |= UpdateMask::ODA;
        decoder.decode_information |= DecodeInformation::ODA_PRESENT;
    }

    if aid == TMC_AID_PRIMARY || aid == TMC_AID_ALTERNATE {
        decoder.decode_information |= DecodeInformation::TMC_PRESENT;
        if let SystemOutcome::Updated = decoder.tmc.decode_system(group) {
            mask |= UpdateMask::TMC_SYS;
        }
    }

    mask
}
