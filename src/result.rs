//!
//! Contains the Result and Error types for RDS decoder boundary operations.
//!
//! The decoder's `add` hot path never fails; corrupted or out-of-sequence input is absorbed into
//! statistics instead (see [`crate::statistics::RdsStatistics`]). These errors only arise at the
//! construction boundary, e.g. turning a raw V4L2-style label byte into a [`crate::BlockLabel`].
//!

use thiserror::Error as ThisError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(ThisError, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid block label value: {0} (expected 0..=4)")]
    InvalidBlockLabel(u8),
}
