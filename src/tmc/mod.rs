//!
//! Traffic Message Channel (ISO 14819) system parameters and user messages — Group 8A's hardest
//! subsystem (spec.md §4.6, §4.8).
//!

mod bitcursor;
mod multigroup;
mod optional;

use crate::group::Group;
use multigroup::{MultigroupAssembler, MultigroupOutcome, PrimaryFields};
pub use optional::{OptionalField, OptionalFields, MAX_OPTIONAL_FIELDS};

/// A snapshot of the raw group fields relevant to a TMC decoder's "same group twice in a row"
/// acceptance rule — distinct from [`crate::staged::Staged`] because once accepted, the *same*
/// physical group must never re-trigger again (it should not re-accept on a third repeat the way
/// PI/PTY/PS do).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct TmcGroupSnapshot {
    data_b_lsb: u8,
    data_c_msb: u8,
    data_c_lsb: u8,
    data_d_msb: u8,
    data_d_lsb: u8,
}

impl From<&Group> for TmcGroupSnapshot {
    fn from(group: &Group) -> Self {
        Self {
            data_b_lsb: group.data_b_lsb,
            data_c_msb: group.data_c_msb,
            data_c_lsb: group.data_c_lsb,
            data_d_msb: group.data_d_msb,
            data_d_lsb: group.data_d_lsb,
        }
    }
}

/// "Receive twice, then never again until it changes" staging, used for TMC system and TMC
/// user-message groups. Unlike [`crate::staged::Staged`], a group that is identical to the one
/// already accepted is not re-accepted: the staged slot is mutated on acceptance so the same
/// physical group cannot re-trigger processing on a subsequent identical call.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct TmcStaged<T> {
    pending: Option<T>,
    last_accepted: Option<T>,
}

impl<T: PartialEq + Copy> TmcStaged<T> {
    pub(crate) fn new() -> Self {
        Self {
            pending: None,
            last_accepted: None,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.pending = None;
        self.last_accepted = None;
    }

    /// Returns `Some(value)` the first time `value` is seen twice consecutively; returns `None`
    /// on the first sighting, on a mismatch, or on any repeat after the value has already been
    /// accepted once.
    pub(crate) fn observe(&mut self, value: T) -> Option<T> {
        if self.pending == Some(value) && self.last_accepted != Some(value) {
            self.last_accepted = Some(value);
            self.pending = Some(value);
            Some(value)
        } else {
            self.pending = Some(value);
            None
        }
    }
}

/// TMC system parameters, decoded from Group 3A variants 0 and 1 (spec.md §4.6).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct TmcSystem {
    pub ltn: Option<u8>,
    pub afi: Option<bool>,
    pub enhanced_mode: Option<bool>,
    pub mgs: Option<u8>,
    pub gap: Option<u8>,
    pub sid: Option<u8>,
    pub t_a: Option<u8>,
    pub t_w: Option<u8>,
    pub t_d: Option<u8>,
}

/// A complete, validated TMC user message (spec.md §4.8), whether it arrived as a single group
/// or was reassembled across a multi-group sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct TmcMessage {
    pub dp: u8,
    pub follow_diversion: bool,
    pub neg_direction: bool,
    pub extent: u8,
    pub event: u16,
    pub location: u16,
    pub additional: OptionalFields,
}

/// Per-decoder TMC state: system parameters, the most recently validated user message, and the
/// private staging needed to reassemble and de-duplicate both.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tmc {
    pub system: TmcSystem,
    pub message: Option<TmcMessage>,

    pub(crate) prev_sys_group: TmcStaged<TmcGroupSnapshot>,
    pub(crate) prev_user_group: TmcStaged<TmcGroupSnapshot>,
    pub(crate) multigroup: MultigroupAssembler,
}

/// Outcome of feeding a Group 3A TMC-system-variant group into [`Tmc::decode_system`].
pub(crate) enum SystemOutcome {
    Unchanged,
    Updated,
}

impl Tmc {
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// Group 3A TMC-system decode (spec.md §4.6): variant code is bits 14..15 of block C.
    pub(crate) fn decode_system(&mut self, group: &Group) -> SystemOutcome {
        let snapshot = TmcGroupSnapshot::from(group);
        let Some(_snapshot) = self.prev_sys_group.observe(snapshot) else {
            return SystemOutcome::Unchanged;
        };

        let c = group.block_c();
        let variant = (c >> 14) & 0x3;
        let mut changed = false;

        match variant {
            0 => {
                let ltn = ((c >> 8) & 0x3F) as u8;
                let afi = (c & 0x0020) != 0;
                let enhanced_mode = (c & 0x0010) != 0;
                let mgs = (c & 0x000F) as u8;
                if self.system.ltn != Some(ltn) {
                    self.system.ltn = Some(ltn);
                    changed = true;
                }
                if self.system.afi != Some(afi) {
                    self.system.afi = Some(afi);
                    changed = true;
                }
                if self.system.enhanced_mode != Some(enhanced_mode) {
                    self.system.enhanced_mode = Some(enhanced_mode);
                    changed = true;
                }
                if self.system.mgs != Some(mgs) {
                    self.system.mgs = Some(mgs);
                    changed = true;
                }
            }
            1 => {
                let gap = ((c >> 12) & 0x3) as u8;
                let sid = ((c >> 6) & 0x3F) as u8;
                if self.system.gap != Some(gap) {
                    self.system.gap = Some(gap);
                    changed = true;
                }
                if self.system.sid != Some(sid) {
                    self.system.sid = Some(sid);
                    changed = true;
                }
                if self.system.enhanced_mode == Some(true) {
                    let t_a = ((c >> 4) & 0x3) as u8;
                    let t_w = ((c >> 2) & 0x3) as u8;
                    let t_d = (c & 0x3) as u8;
                    if self.system.t_a != Some(t_a) {
                        self.system.t_a = Some(t_a);
                        changed = true;
                    }
                    if self.system.t_w != Some(t_w) {
                        self.system.t_w = Some(t_w);
                        changed = true;
                    }
                    if self.system.t_d != Some(t_d) {
                        self.system.t_d = Some(t_d);
                        changed = true;
                    }
                }
            }
            _ => {}
        }

        if changed {
            SystemOutcome::Updated
        } else {
            SystemOutcome::Unchanged
        }
    }

    /// Group 8A user-message decode (spec.md §4.8). Returns `true` if `message` changed.
    pub(crate) fn decode_user_message(&mut self, group: &Group) -> bool {
        let snapshot = TmcGroupSnapshot::from(group);
        if self.prev_user_group.observe(snapshot).is_none() {
            return false;
        }

        let b = group.data_b_lsb;
        let single_group = (b & 0x10) != 0;
        let tuning_info = (b & 0x08) != 0;

        if tuning_info {
            // TI=1, variants 4..9: acknowledged, not decoded (spec.md §4.8 case 3, §9 item 6).
            return false;
        }

        let c = group.block_c();
        let d = group.block_d();

        if single_group {
            let dp = (b & 0x07) as u8;
            let primary = PrimaryFields {
                follow_diversion: (c & 0x8000) != 0,
                neg_direction: (c & 0x4000) != 0,
                extent: ((c >> 11) & 0x7) as u8,
                event: c & 0x07FF,
                location: d,
            };
            let message = TmcMessage {
                dp,
                follow_diversion: primary.follow_diversion,
                neg_direction: primary.neg_direction,
                extent: primary.extent,
                event: primary.event,
                location: primary.location,
                additional: OptionalFields::default(),
            };
            let changed = self.message.as_ref() != Some(&message);
            self.message = Some(message);
            return changed;
        }

        let fgi = (c & 0x8000) != 0;
        let sgi = (c & 0x4000) != 0;
        let continuity_id = (b & 0x07) as u8;

        if fgi {
            let primary = PrimaryFields {
                follow_diversion: (c & 0x8000) != 0,
                neg_direction: (c & 0x4000) != 0,
                extent: ((c >> 11) & 0x7) as u8,
                event: c & 0x07FF,
                location: d,
            };
            self.multigroup.begin(continuity_id, primary);
            return false;
        }

        let grp_seq_id = ((c >> 12) & 0x3) as u8;
        let slab = multigroup::pack_slab(c & 0x0FFF, d);

        let outcome = if sgi {
            self.multigroup.second(continuity_id, grp_seq_id, slab)
        } else {
            self.multigroup.subsequent(continuity_id, grp_seq_id, slab)
        };

        match outcome {
            MultigroupOutcome::InProgress | MultigroupOutcome::Ignored => false,
            MultigroupOutcome::Complete {
                primary,
                optional_words,
                optional_len,
            } => {
                let additional = optional::unpack(optional_words, optional_len);
                let message = TmcMessage {
                    dp: 0,
                    follow_diversion: primary.follow_diversion,
                    neg_direction: primary.neg_direction,
                    extent: primary.extent,
                    event: primary.event,
                    location: primary.location,
                    additional,
                };
                let changed = self.message.as_ref() != Some(&message);
                self.message = Some(message);
                changed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::group::GroupVersion;

    fn group_with(group_id: u8, version: GroupVersion, b_lsb: u8, c: u16, d: u16) -> Group {
        Group {
            pi: 0x1234,
            group_id,
            version,
            tp: false,
            pty: 0,
            data_b_lsb: b_lsb,
            data_c_msb: (c >> 8) as u8,
            data_c_lsb: (c & 0xFF) as u8,
            data_d_msb: (d >> 8) as u8,
            data_d_lsb: (d & 0xFF) as u8,
        }
    }

    #[test]
    fn test_single_group_requires_two_identical_receptions() {
        let mut tmc = Tmc::default();
        // SG=1 (bit4=0x10), TI=0, dp=3.
        let b_lsb = 0x10 | 0x03;
        let c = 0x0064; // event=100, extent=0, flags clear
        let d = 0xABCD;
        let group = group_with(8, GroupVersion::A, b_lsb, c, d);

        assert!(!tmc.decode_user_message(&group));
        assert!(tmc.message.is_none());
        assert!(tmc.decode_user_message(&group));
        let msg = tmc.message.unwrap();
        assert_eq!(msg.dp, 3);
        assert_eq!(msg.event, 100);
        assert_eq!(msg.location, 0xABCD);

        // A third identical reception must not re-trigger (already accepted).
        assert!(!tmc.decode_user_message(&group));
    }

    #[test]
    fn test_tuning_info_is_noop() {
        let mut tmc = Tmc::default();
        let b_lsb = 0x08; // TI=1
        let group = group_with(8, GroupVersion::A, b_lsb, 0, 0);
        assert!(!tmc.decode_user_message(&group));
        assert!(!tmc.decode_user_message(&group));
        assert!(tmc.message.is_none());
    }

    #[test]
    fn test_multigroup_two_part_message() {
        let mut tmc = Tmc::default();
        // FGI group: SG=0 (bit4 clear), TI=0, continuity_id=2, FGI bit (c bit15) set.
        let fgi_b = 0x02;
        let fgi_c = 0x8000 | 0x0064; // FGI set, event=100
        let fgi_d = 0x1111;
        let fgi_group = group_with(8, GroupVersion::A, fgi_b, fgi_c, fgi_d);
        assert!(!tmc.decode_user_message(&fgi_group));
        assert!(!tmc.decode_user_message(&fgi_group)); // second identical FGI: re-begins, no publish

        // SGI group: same continuity, grp_seq_id=0 -> completes immediately.
        let sgi_b = 0x02;
        let sgi_c = 0x4000; // SGI set, grp_seq_id bits zero
        let sgi_d = 0x2222;
        let sgi_group = group_with(8, GroupVersion::A, sgi_b, sgi_c, sgi_d);
        assert!(!tmc.decode_user_message(&sgi_group));
        assert!(tmc.decode_user_message(&sgi_group));

        let msg = tmc.message.unwrap();
        assert_eq!(msg.event, 100);
        assert_eq!(msg.location, 0x1111);
    }
}
