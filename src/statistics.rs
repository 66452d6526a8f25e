//!
//! Per-decoder statistics: the error taxonomy of spec.md §7 absorbed into plain counters, since
//! the decoder itself never reports an error to its caller.
//!
//! Grounded on `nexrad-decode`'s own per-message-type accounting idiom (the `summarize` module's
//! grouping by message type), folded here directly into live decoder state rather than computed
//! after the fact, since spec.md's invariant 1 requires these counters to be always current.
//!

/// Running counters for one decoder instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
pub struct RdsStatistics {
    /// Total blocks fed via `add`, regardless of outcome.
    pub block_cnt: u64,
    /// Blocks the upstream demodulator flagged as uncorrectable.
    pub block_error_cnt: u64,
    /// Blocks the upstream demodulator corrected via FEC.
    pub block_corrected_cnt: u64,
    /// Blocks that arrived with the wrong label for the assembler's current state.
    pub group_error_cnt: u64,
    /// Completed groups, indexed by group type (0..15).
    pub group_type_cnt: [u64; 16],
}

impl RdsStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record_block(&mut self, corrected: bool, uncorrectable: bool) {
        self.block_cnt += 1;
        if uncorrectable {
            self.block_error_cnt += 1;
        } else if corrected {
            self.block_corrected_cnt += 1;
        }
    }

    pub(crate) fn record_group_error(&mut self) {
        self.group_error_cnt += 1;
    }

    pub(crate) fn record_group(&mut self, group_id: u8) {
        if let Some(count) = self.group_type_cnt.get_mut(group_id as usize) {
            *count += 1;
        }
    }

    /// Total completed groups across all types plus group errors; should equal the number of
    /// candidate groups attempted (spec.md §8 invariant 1).
    pub fn candidate_groups_attempted(&self) -> u64 {
        self.group_type_cnt.iter().sum::<u64>() + self.group_error_cnt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_block_counts() {
        let mut s = RdsStatistics::new();
        s.record_block(false, false);
        s.record_block(true, false);
        s.record_block(false, true);
        assert_eq!(s.block_cnt, 3);
        assert_eq!(s.block_corrected_cnt, 1);
        assert_eq!(s.block_error_cnt, 1);
    }

    #[test]
    fn test_candidate_groups_invariant() {
        let mut s = RdsStatistics::new();
        s.record_group(0);
        s.record_group(0);
        s.record_group(2);
        s.record_group_error();
        assert_eq!(s.candidate_groups_attempted(), 4);
    }
}
