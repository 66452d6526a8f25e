//!
//! Group 8A — TMC User Messages (spec.md §4.8): dispatches to the TMC subsystem and reports the
//! single-group vs multi-group validity bits.
//!

use crate::decoder::RdsDecoder;
use crate::group::{Group, GroupVersion};
use crate::mask::{UpdateMask, ValidFields};

pub(crate) fn decode(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    if group.version != GroupVersion::A {
        return UpdateMask::empty();
    }

    let single_group = (group.data_b_lsb & 0x10) != 0;
    let changed = decoder.tmc.decode_user_message(group);

    if !changed {
        return UpdateMask::empty();
    }

    if single_group {
        decoder.valid_fields |= ValidFields::TMC_SG;
        decoder.valid_fields.remove(ValidFields::TMC_MG);
        UpdateMask::TMC_SG
    } else {
        decoder.valid_fields |= ValidFields::TMC_MG;
        decoder.valid_fields.remove(ValidFields::TMC_SG);
        UpdateMask::TMC_MG
    }
}
