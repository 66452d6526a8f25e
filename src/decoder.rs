//!
//! The top-level decoder: owns all public RDS/RBDS state and the private staging needed to
//! reassemble it, and exposes the single `add` entry point callers feed raw blocks into.
//!

use log::trace;

use crate::af::AfList;
use crate::assembler::{AssembleOutcome, BlockAssembler};
use crate::block::RawBlock;
use crate::group::{Group, GroupVersion};
use crate::mask::{DecodeInformation, UpdateMask, ValidFields};
use crate::oda::OdaTable;
use crate::staged::Staged;
use crate::statistics::RdsStatistics;
use crate::tables;
use crate::groups;
use crate::time;
use crate::tmc::Tmc;

/// A fully stateful RDS/RBDS decoder.
///
/// Feed it raw blocks one at a time via [`RdsDecoder::add`]; observe decoded fields directly on
/// the public members, or via the `get_*` accessors for presentation lookups. See the crate's top
/// level documentation for the overall data flow.
#[derive(Debug, Clone)]
pub struct RdsDecoder {
    is_rbds: bool,

    pub pi: Option<u16>,
    pub pty: Option<u8>,
    pub tp: bool,
    pub ta: bool,
    pub ms: bool,
    pub di: Option<u8>,
    pub lc: Option<u8>,
    pub ecc: Option<u8>,
    pub rt_ab_flag: bool,
    pub ptyn_ab_flag: bool,

    pub ps: [char; 8],
    pub rt: [char; 64],
    pub rt_length: usize,
    pub ptyn: [char; 8],

    pub rds_af: AfList,
    pub rds_oda: OdaTable,
    /// Civil local timestamp decoded from the most recent Clock-Time group, with the local UTC
    /// offset already applied. Zone-less (`NaiveDateTime`, not `DateTime<Utc>`): RDS only ever
    /// reports local time plus an offset-from-UTC, never an IANA zone, so there is no zone to tag
    /// the result with.
    pub time: Option<chrono::NaiveDateTime>,
    pub tmc: Tmc,

    pub rds_statistics: RdsStatistics,
    pub valid_fields: ValidFields,
    pub decode_information: DecodeInformation,

    assembler: BlockAssembler,
    last_group: Option<Group>,

    pub(crate) staged_pi: Staged<u16>,
    pub(crate) staged_pty: Staged<u8>,
    pub(crate) staged_ecc: Staged<u8>,
    pub(crate) staged_lc: Staged<u8>,
    pub(crate) staged_mjd: Staged<u32>,

    pub(crate) new_ps_staged: [Option<char>; 8],
    pub(crate) new_ps_valid: [bool; 8],

    pub(crate) new_ptyn_staged: [Option<[char; 4]>; 2],
    pub(crate) new_ptyn_valid: [bool; 2],

    pub(crate) new_di: u8,
    pub(crate) next_di_segment: u8,

    pub(crate) new_rt: [char; 64],
    pub(crate) next_rt_segment: u8,
}

impl RdsDecoder {
    /// Creates a new, empty decoder. `is_rbds` selects RBDS (North American) PTY names and sets
    /// `decode_information.RBDS_MODE`; it otherwise has no effect on decoding.
    pub fn new(is_rbds: bool) -> Self {
        let mut decoder = Self {
            is_rbds,
            pi: None,
            pty: None,
            tp: false,
            ta: false,
            ms: false,
            di: None,
            lc: None,
            ecc: None,
            rt_ab_flag: false,
            ptyn_ab_flag: false,
            ps: [' '; 8],
            rt: [' '; 64],
            rt_length: 0,
            ptyn: [' '; 8],
            rds_af: AfList::new(),
            rds_oda: OdaTable::new(),
            time: None,
            tmc: Tmc::default(),
            rds_statistics: RdsStatistics::new(),
            valid_fields: ValidFields::empty(),
            decode_information: DecodeInformation::empty(),
            assembler: BlockAssembler::new(),
            last_group: None,
            staged_pi: Staged::new(),
            staged_pty: Staged::new(),
            staged_ecc: Staged::new(),
            staged_lc: Staged::new(),
            staged_mjd: Staged::new(),
            new_ps_staged: [None; 8],
            new_ps_valid: [false; 8],
            new_ptyn_staged: [None; 2],
            new_ptyn_valid: [false; 2],
            new_di: 0,
            next_di_segment: 0,
            new_rt: [' '; 64],
            next_rt_segment: 0,
        };
        if is_rbds {
            decoder.decode_information |= DecodeInformation::RBDS_MODE;
        }
        decoder
    }

    /// Resets all public and staging state to the empty decoder created by `new`, optionally
    /// preserving the statistics counters and always preserving the RBDS/RDS selection.
    pub fn reset(&mut self, preserve_statistics: bool) {
        let is_rbds = self.is_rbds;
        let stats = self.rds_statistics;
        *self = Self::new(is_rbds);
        if preserve_statistics {
            self.rds_statistics = stats;
        }
    }

    /// Feeds one raw block through the assembler and, on group completion, the group-type
    /// decoders. Returns the set of public fields changed by this call.
    pub fn add(&mut self, raw_block: RawBlock) -> UpdateMask {
        self.rds_statistics
            .record_block(raw_block.corrected, raw_block.uncorrectable);

        match self.assembler.add(&raw_block) {
            AssembleOutcome::InProgress => UpdateMask::empty(),
            AssembleOutcome::GroupError => {
                self.rds_statistics.record_group_error();
                UpdateMask::empty()
            }
            AssembleOutcome::Complete(group) => {
                trace!(
                    "assembled group: pi={:#06x} type={}{:?}",
                    group.pi, group.group_id, group.version
                );
                self.rds_statistics.record_group(group.group_id);
                self.last_group = Some(group);
                let mut mask = self.extract_common(&group);
                mask |= groups::dispatch(self, &group);
                mask
            }
        }
    }

    /// The most recently completed group, if any has been assembled since the decoder was
    /// created or last reset.
    pub fn get_group(&self) -> Option<Group> {
        self.last_group
    }

    /// The localized PTY name for the currently decoded `pty`, or `None` if no PTY has been
    /// validated or the value is out of range.
    pub fn get_pty_str(&self) -> Option<&'static str> {
        tables::pty_name(self.pty?, self.is_rbds)
    }

    /// The two-letter country code derived from `ecc` and the top nibble of `pi`.
    pub fn get_country_str(&self) -> Option<&'static str> {
        tables::country_code(self.ecc?, self.pi?)
    }

    /// The language name for the currently decoded `lc`.
    pub fn get_language_str(&self) -> Option<&'static str> {
        tables::language_name(self.lc?)
    }

    /// The coverage-area name derived from bits 8..11 of `pi`.
    pub fn get_coverage_str(&self) -> Option<&'static str> {
        tables::coverage_area(self.pi?)
    }

    /// Common extractors run on every completed group (spec.md §4.2): PI (staged), TP
    /// (immediate), and PTY (staged).
    fn extract_common(&mut self, group: &Group) -> UpdateMask {
        let mut mask = UpdateMask::empty();

        if self.tp != group.tp {
            self.tp = group.tp;
            mask |= UpdateMask::TP;
        }
        self.valid_fields |= ValidFields::TP;

        if let Some(pi) = self.staged_pi.observe(group.pi) {
            if self.pi != Some(pi) {
                self.pi = Some(pi);
                mask |= UpdateMask::PI;
            }
            self.valid_fields |= ValidFields::PI;
        }

        if let Some(pty) = self.staged_pty.observe(group.pty) {
            if self.pty != Some(pty) {
                self.pty = Some(pty);
                mask |= UpdateMask::PTY;
            }
            self.valid_fields |= ValidFields::PTY;
        }

        mask
    }

    /// Accumulates one DI segment (spec.md §4.3). Segment 0 always (re)starts the 4-segment
    /// cycle; any other segment is only accepted immediately after the previous one. Returns
    /// whether the public `di` changed (only possible on completing segment 3).
    pub(crate) fn decode_di_segment(&mut self, segment: u8, bit: bool) -> bool {
        if segment == 0 {
            self.new_di = if bit { 1 } else { 0 };
            self.next_di_segment = 1;
            return false;
        }
        if segment != self.next_di_segment {
            self.next_di_segment = 0;
            return false;
        }
        if bit {
            self.new_di |= 1 << segment;
        }
        self.next_di_segment += 1;
        if self.next_di_segment != 4 {
            return false;
        }
        self.next_di_segment = 0;
        self.valid_fields |= ValidFields::DI;
        if self.di != Some(self.new_di) {
            self.di = Some(self.new_di);
            true
        } else {
            false
        }
    }

    /// Decodes a Clock-Time MJD once staged-accepted twice (spec.md §4.7), using `time::decode_clock_time`.
    pub(crate) fn decode_clock_time(&mut self, mjd: u32, utc_hour: u8, utc_minute: u8, offset_half_hours: i8) -> bool {
        let Some(dt) = time::decode_clock_time(mjd, utc_hour, utc_minute, offset_half_hours) else {
            return false;
        };
        self.valid_fields |= ValidFields::TIME;
        if self.time != Some(dt) {
            self.time = Some(dt);
            true
        } else {
            false
        }
    }
}
