//!
//! Group-type dispatch (spec.md §4.3–§4.9): routes a completed [`Group`] to the decoder for its
//! type. Group types with no decoder (or a decoder that only handles one version) fall through
//! silently, per spec.md §7's "malformed group-type payload" handling.
//!

mod group0;
mod group1;
mod group10;
mod group2;
mod group3;
mod group4;
mod group8;

use crate::decoder::RdsDecoder;
use crate::group::Group;
use crate::mask::UpdateMask;

pub(crate) fn dispatch(decoder: &mut RdsDecoder, group: &Group) -> UpdateMask {
    match group.group_id {
        0 => group0::decode(decoder, group),
        1 => group1::decode(decoder, group),
        2 => group2::decode(decoder, group),
        3 => group3::decode(decoder, group),
        4 => group4::decode(decoder, group),
        8 => group8::decode(decoder, group),
        10 => group10::decode(decoder, group),
        _ => UpdateMask::empty(),
    }
}
