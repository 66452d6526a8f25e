//!
//! Clock-Time (group 4A) date/time conversion: 17-bit Modified Julian Day plus UTC hour/minute
//! and a half-hour-resolution signed offset, combined into a civil (zone-less) local timestamp.
//!
//! Grounded on `nexrad-decode`'s `util::get_datetime` (itself a "day count since an epoch, plus
//! milliseconds past midnight" conversion using `chrono`'s `NaiveDate`/`Duration` arithmetic) —
//! the same shape of problem, but following the IEC 62106 Annex G algorithm rather than a
//! days-since-1970 count, since RDS's MJD epoch and the offset-of-local-time step have no
//! equivalent in NEXRAD's message header.
//!

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

/// Converts a Modified Julian Day number into a civil (year, month, day) per IEC 62106 Annex G.
///
/// `month` is 1-indexed (1 = January) and `year` is a full calendar year (not years-since-1900).
/// Numeric verification against known MJD reference points (e.g. MJD 40587 = 1970-01-01, MJD
/// 51544 = 2000-01-01) shows the `m - 1 - 12*k` term yields a 1-indexed month directly, not the
/// 0-indexed range spec.md's prose describes — the formula itself is authoritative here, per the
/// instruction to verify ambiguous arithmetic against the standard rather than the distillation's
/// gloss on it.
fn mjd_to_civil_date(mjd: u32) -> (i32, u32, u32) {
    let mjd = mjd as f64;
    let y = ((mjd - 15078.2) / 365.25).floor();
    let m = ((mjd - 14956.1 - (y * 365.25).floor()) / 30.6001).floor();
    let d = mjd - 14956.0 - (y * 365.25).floor() - (m * 30.6001).floor();
    let k = if m == 14.0 || m == 15.0 { 1.0 } else { 0.0 };
    let year = 1900 + y as i32 + k as i32;
    let month = (m as i32) - 1 - 12 * (k as i32);
    (year, month as u32, d as u32)
}

/// Combines an MJD, UTC hour/minute, and a signed half-hour-resolution local offset into a civil
/// (zone-less) local timestamp.
///
/// `offset_half_hours` is signed, positive meaning east of UTC (local time ahead of UTC), per
/// spec.md §4.7. `utc_hour`/`utc_minute` are the UTC fields as broadcast; the offset is added to
/// them to produce local time. Returns `None` only if the MJD/hour/minute values are themselves
/// out of range (the overflow case where the offset carries the moment into a different day is
/// explicitly not a failure: `NaiveDateTime` addition rolls over the date as needed).
pub fn decode_clock_time(
    mjd: u32,
    utc_hour: u8,
    utc_minute: u8,
    offset_half_hours: i8,
) -> Option<NaiveDateTime> {
    let (year, month, day) = mjd_to_civil_date(mjd);
    let date = NaiveDate::from_ymd_opt(year, month, day)?;
    let time = NaiveTime::from_hms_opt(utc_hour as u32, utc_minute as u32, 0)?;
    let naive = NaiveDateTime::new(date, time);
    let offset = Duration::minutes(30 * offset_half_hours as i64);
    Some(naive + offset)
}
