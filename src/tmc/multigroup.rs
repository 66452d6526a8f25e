//!
//! TMC multi-group reassembly: FirstGroupIndicator / SecondGroupIndicator / subsequent-group
//! continuity and sequence-ID tracking (spec.md §4.8, case 2).
//!

/// Packs a 12-bit slice of block C and the 16 bits of block D into a single 28-bit-wide window,
/// left-aligned into bits 31..4 of a 32-bit word (the low 4 bits are always zero), matching the
/// window layout [`super::bitcursor::BitCursor`] expects.
pub(crate) fn pack_slab(c_low12: u16, d: u16) -> u32 {
    (((c_low12 as u32) << 16) | d as u32) << 4
}

/// The primary fields captured from the group carrying FGI, shared with the single-group case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct PrimaryFields {
    pub follow_diversion: bool,
    pub neg_direction: bool,
    pub extent: u8,
    pub event: u16,
    pub location: u16,
}

/// Outcome of feeding one group into the multi-group assembler.
pub(crate) enum MultigroupOutcome {
    /// Group accepted; message still incomplete.
    InProgress,
    /// Group did not fit the in-progress message (continuity mismatch, out-of-order sequence
    /// ID, or no message pending); silently ignored per spec.md §7.
    Ignored,
    /// `grp_seq_id` reached 0: the message is complete.
    Complete {
        primary: PrimaryFields,
        optional_words: [u32; 4],
        optional_len: usize,
    },
}

/// Reassembles a TMC multi-group user message across its FGI/SGI/subsequent groups.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct MultigroupAssembler {
    active: bool,
    continuity_id: u8,
    primary: PrimaryFields,
    pending_seq: Option<u8>,
    optional_words: [u32; 4],
    optional_len: usize,
}

impl MultigroupAssembler {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }

    /// FGI set: begins a new pending message, discarding any message already in progress.
    pub(crate) fn begin(&mut self, continuity_id: u8, primary: PrimaryFields) {
        self.active = true;
        self.continuity_id = continuity_id;
        self.primary = primary;
        self.pending_seq = None;
        self.optional_len = 0;
        self.optional_words = [0; 4];
    }

    /// SGI set: records `grp_seq_id` and the first optional-field slab.
    pub(crate) fn second(&mut self, continuity_id: u8, grp_seq_id: u8, slab: u32) -> MultigroupOutcome {
        if !self.active || continuity_id != self.continuity_id || self.pending_seq.is_some() {
            return MultigroupOutcome::Ignored;
        }
        self.optional_words[0] = slab;
        self.optional_len = 1;
        self.pending_seq = Some(grp_seq_id);
        if grp_seq_id == 0 {
            return self.complete();
        }
        MultigroupOutcome::InProgress
    }

    /// A subsequent (neither FGI nor SGI) group: continuity must match and `grp_seq_id` must be
    /// exactly one less than the last recorded sequence ID.
    pub(crate) fn subsequent(&mut self, continuity_id: u8, grp_seq_id: u8, slab: u32) -> MultigroupOutcome {
        let Some(expected_prev) = self.pending_seq else {
            return MultigroupOutcome::Ignored;
        };
        if !self.active || continuity_id != self.continuity_id {
            return MultigroupOutcome::Ignored;
        }
        if expected_prev == 0 || grp_seq_id != expected_prev - 1 {
            return MultigroupOutcome::Ignored;
        }
        if self.optional_len >= self.optional_words.len() {
            return MultigroupOutcome::Ignored;
        }
        self.optional_words[self.optional_len] = slab;
        self.optional_len += 1;
        self.pending_seq = Some(grp_seq_id);
        if grp_seq_id == 0 {
            return self.complete();
        }
        MultigroupOutcome::InProgress
    }

    fn complete(&mut self) -> MultigroupOutcome {
        let outcome = MultigroupOutcome::Complete {
            primary: self.primary,
            optional_words: self.optional_words,
            optional_len: self.optional_len,
        };
        self.reset();
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> PrimaryFields {
        PrimaryFields {
            follow_diversion: false,
            neg_direction: true,
            extent: 2,
            event: 100,
            location: 0x1234,
        }
    }

    #[test]
    fn test_pack_slab_layout() {
        // c_low12 all ones, d all ones -> bits 31..4 all set, low 4 bits zero.
        let slab = pack_slab(0xFFF, 0xFFFF);
        assert_eq!(slab, 0xFFFF_FFF0);
    }

    #[test]
    fn test_two_group_message_completes_on_zero_seq() {
        let mut asm = MultigroupAssembler::new();
        asm.begin(3, primary());
        match asm.second(3, 0, 0xAAAA_AAA0) {
            MultigroupOutcome::Complete {
                primary: p,
                optional_len,
                optional_words,
            } => {
                assert_eq!(p, primary());
                assert_eq!(optional_len, 1);
                assert_eq!(optional_words[0], 0xAAAA_AAA0);
            }
            _ => panic!("expected completion"),
        }
    }

    #[test]
    fn test_three_group_message_requires_decreasing_sequence() {
        let mut asm = MultigroupAssembler::new();
        asm.begin(1, primary());
        assert!(matches!(asm.second(1, 1, 0x1111_1110), MultigroupOutcome::InProgress));
        match asm.subsequent(1, 0, 0x2222_2220) {
            MultigroupOutcome::Complete { optional_len, .. } => assert_eq!(optional_len, 2),
            _ => panic!("expected completion"),
        }
    }

    #[test]
    fn test_continuity_mismatch_ignored() {
        let mut asm = MultigroupAssembler::new();
        asm.begin(1, primary());
        assert!(matches!(asm.second(2, 0, 0), MultigroupOutcome::Ignored));
    }

    #[test]
    fn test_out_of_order_sequence_ignored() {
        let mut asm = MultigroupAssembler::new();
        asm.begin(1, primary());
        asm.second(1, 2, 0);
        // Sequence must decrease by exactly 1; jumping to 2 again (or skipping to 0) is ignored.
        assert!(matches!(asm.subsequent(1, 2, 0), MultigroupOutcome::Ignored));
        assert!(matches!(asm.subsequent(1, 0, 0), MultigroupOutcome::Ignored));
    }

    #[test]
    fn test_subsequent_without_second_ignored() {
        let mut asm = MultigroupAssembler::new();
        asm.begin(1, primary());
        assert!(matches!(asm.subsequent(1, 0, 0), MultigroupOutcome::Ignored));
    }

    #[test]
    fn test_fgi_restarts_in_progress_message() {
        let mut asm = MultigroupAssembler::new();
        asm.begin(1, primary());
        asm.second(1, 3, 0);
        let mut other = primary();
        other.location = 0x9999;
        asm.begin(5, other);
        match asm.second(5, 0, 0) {
            MultigroupOutcome::Complete { primary: p, optional_len, .. } => {
                assert_eq!(p.location, 0x9999);
                assert_eq!(optional_len, 1);
            }
            _ => panic!("expected completion"),
        }
    }
}
