//!
//! Open Data Application table (group 3A, version A): a fixed-capacity set of
//! (group_id, version) → application-id rows.
//!

use crate::group::GroupVersion;

/// Maximum number of distinct ODA announcements retained.
pub const MAX_ODA: usize = 8;

/// The Traffic Message Channel's two well-known application IDs (ISO 14819).
pub const TMC_AID_PRIMARY: u16 = 0xCD46;
pub const TMC_AID_ALTERNATE: u16 = 0xCD47;

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OdaEntry {
    pub group_id: u8,
    pub version: GroupVersion,
    pub aid: u16,
}

/// The decoded set of Open Data Application announcements.
#[derive(Debug, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct OdaTable {
    pub size: usize,
    pub oda: [OdaEntry; MAX_ODA],
}

impl PartialEq for OdaTable {
    fn eq(&self, other: &Self) -> bool {
        self.size == other.size && self.oda[..self.size] == other.oda[..self.size]
    }
}
impl Eq for OdaTable {}

impl Default for OdaTable {
    fn default() -> Self {
        Self {
            size: 0,
            oda: [OdaEntry {
                group_id: 0,
                version: GroupVersion::A,
                aid: 0,
            }; MAX_ODA],
        }
    }
}

impl OdaTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Records an ODA announcement for `(group_id, version)` carrying `aid`.
    ///
    /// If the pair already exists, its AID is updated in place. Otherwise, if there is room, a
    /// new row is appended. Returns whether the table's contents changed.
    pub fn announce(&mut self, group_id: u8, version: GroupVersion, aid: u16) -> bool {
        for entry in self.oda[..self.size].iter_mut() {
            if entry.group_id == group_id && entry.version == version {
                if entry.aid == aid {
                    return false;
                }
                entry.aid = aid;
                return true;
            }
        }
        if self.size >= MAX_ODA {
            return false;
        }
        self.oda[self.size] = OdaEntry {
            group_id,
            version,
            aid,
        };
        self.size += 1;
        true
    }

    pub fn find(&self, group_id: u8, version: GroupVersion) -> Option<u16> {
        self.oda[..self.size]
            .iter()
            .find(|e| e.group_id == group_id && e.version == version)
            .map(|e| e.aid)
    }
}
