//!
//! Bitmask types reported to and tracked by the decoder: which fields changed on a given `add`
//! call, which fields have ever been validated, and which decoder-level capabilities have been
//! observed on the air.
//!

use bitflags::bitflags;

bitflags! {
    /// The set of public fields mutated by a single `add` call.
    ///
    /// Exactly the fields whose public value changed due to that call are set; see
    /// `RdsDecoder::add`.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
    pub struct UpdateMask: u32 {
        const PI      = 1 << 0;
        const PTY     = 1 << 1;
        const PS      = 1 << 2;
        const RT      = 1 << 3;
        const TP      = 1 << 4;
        const TA      = 1 << 5;
        const MS      = 1 << 6;
        const DI      = 1 << 7;
        const AF      = 1 << 8;
        const ECC     = 1 << 9;
        const LC      = 1 << 10;
        const TIME    = 1 << 11;
        const TMC_SG  = 1 << 12;
        const TMC_MG  = 1 << 13;
        const TMC_SYS = 1 << 14;
        const PTYN    = 1 << 15;
        const ODA     = 1 << 16;
    }
}

bitflags! {
    /// The set of fields that have ever been validated since the last `reset`.
    ///
    /// Monotonically growing, except that an A/B-flag toggle on RT or PTYN clears the
    /// corresponding bit until the field is re-validated (see spec invariant 6).
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
    pub struct ValidFields: u32 {
        const PI      = UpdateMask::PI.bits();
        const PTY     = UpdateMask::PTY.bits();
        const PS      = UpdateMask::PS.bits();
        const RT      = UpdateMask::RT.bits();
        const TP      = UpdateMask::TP.bits();
        const TA      = UpdateMask::TA.bits();
        const MS      = UpdateMask::MS.bits();
        const DI      = UpdateMask::DI.bits();
        const AF      = UpdateMask::AF.bits();
        const ECC     = UpdateMask::ECC.bits();
        const LC      = UpdateMask::LC.bits();
        const TIME    = UpdateMask::TIME.bits();
        const TMC_SG  = UpdateMask::TMC_SG.bits();
        const TMC_MG  = UpdateMask::TMC_MG.bits();
        const TMC_SYS = UpdateMask::TMC_SYS.bits();
        const PTYN    = UpdateMask::PTYN.bits();
        const ODA     = UpdateMask::ODA.bits();
    }
}

bitflags! {
    /// Decoder-level capabilities observed on the air, independent of any one field's value.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
    pub struct DecodeInformation: u32 {
        /// At least one Open Data Application has been announced via a type-3A group.
        const ODA_PRESENT = 1 << 0;
        /// A Traffic Message Channel open data application has been identified.
        const TMC_PRESENT = 1 << 1;
        /// The receiver is decoding in RBDS (North American) mode.
        const RBDS_MODE = 1 << 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_are_disjoint_bits() {
        let all = [
            UpdateMask::PI,
            UpdateMask::PTY,
            UpdateMask::PS,
            UpdateMask::RT,
            UpdateMask::TP,
            UpdateMask::TA,
            UpdateMask::MS,
            UpdateMask::DI,
            UpdateMask::AF,
            UpdateMask::ECC,
            UpdateMask::LC,
            UpdateMask::TIME,
            UpdateMask::TMC_SG,
            UpdateMask::TMC_MG,
            UpdateMask::TMC_SYS,
            UpdateMask::PTYN,
            UpdateMask::ODA,
        ];
        let mut seen = UpdateMask::empty();
        for flag in all {
            assert!(!seen.intersects(flag), "duplicate bit for {flag:?}");
            seen |= flag;
        }
    }

    #[test]
    fn test_update_mask_union() {
        let m = UpdateMask::PI | UpdateMask::PS;
        assert!(m.contains(UpdateMask::PI));
        assert!(m.contains(UpdateMask::PS));
        assert!(!m.contains(UpdateMask::RT));
    }
}
