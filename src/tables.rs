//!
//! Presentation lookup tables: PTY names, coverage area, language, and country.
//!
//! These are external to the core decode pipeline (spec.md §1: "specified here only by shape"),
//! but `get_pty_str`/`get_country_str`/`get_language_str`/`get_coverage_str` are explicit public
//! operations (spec.md §6), so representative, bit-exact tables are provided here rather than
//! left as stubs. Holes return `None`.
//!

/// The 32-entry RDS (European) PTY name table.
const PTY_NAMES_RDS: [&str; 32] = [
    "No programme type",
    "News",
    "Current affairs",
    "Information",
    "Sport",
    "Education",
    "Drama",
    "Culture",
    "Science",
    "Varied",
    "Pop music",
    "Rock music",
    "Easy listening",
    "Light classical",
    "Serious classical",
    "Other music",
    "Weather",
    "Finance",
    "Children's programmes",
    "Social affairs",
    "Religion",
    "Phone-in",
    "Travel",
    "Leisure",
    "Jazz music",
    "Country music",
    "National music",
    "Oldies music",
    "Folk music",
    "Documentary",
    "Alarm test",
    "Alarm",
];

/// The 32-entry RBDS (North American) PTY name table.
const PTY_NAMES_RBDS: [&str; 32] = [
    "No programme type",
    "News",
    "Information",
    "Sports",
    "Talk",
    "Rock",
    "Classic rock",
    "Adult hits",
    "Soft rock",
    "Top 40",
    "Country",
    "Oldies",
    "Soft music",
    "Nostalgia",
    "Jazz",
    "Classical",
    "Rhythm and blues",
    "Soft rhythm and blues",
    "Language",
    "Religious music",
    "Religious talk",
    "Personality",
    "Public",
    "College",
    "Spanish talk",
    "Spanish music",
    "Hip hop",
    "Unassigned",
    "Unassigned",
    "Weather",
    "Emergency test",
    "Emergency",
];

/// The 16-entry coverage-area table (bits 8..11 of PI).
const COVERAGE_AREA: [&str; 16] = [
    "Local",
    "International",
    "National",
    "Supra-regional",
    "Regional 1",
    "Regional 2",
    "Regional 3",
    "Regional 4",
    "Regional 5",
    "Regional 6",
    "Regional 7",
    "Regional 8",
    "Regional 9",
    "Regional 10",
    "Regional 11",
    "Regional 12",
];

/// A representative subset of the 128-entry language table (IEC 62106 Annex J). Indices not
/// present here are holes and map to `None`.
const LANGUAGES: &[(u8, &str)] = &[
    (0, "Unknown"),
    (1, "Albanian"),
    (2, "Breton"),
    (3, "Catalan"),
    (4, "Croatian"),
    (5, "Welsh"),
    (6, "Czech"),
    (7, "Danish"),
    (8, "German"),
    (9, "English"),
    (10, "Spanish"),
    (11, "Esperanto"),
    (12, "Estonian"),
    (13, "Basque"),
    (14, "Faroese"),
    (15, "French"),
    (16, "Frisian"),
    (17, "Irish"),
    (18, "Gaelic"),
    (19, "Galician"),
    (20, "Icelandic"),
    (21, "Italian"),
    (22, "Lappish"),
    (23, "Latin"),
    (24, "Latvian"),
    (25, "Luxembourgian"),
    (26, "Lithuanian"),
    (27, "Hungarian"),
    (28, "Maltese"),
    (29, "Dutch"),
    (30, "Norwegian"),
    (31, "Occitan"),
    (32, "Polish"),
    (33, "Portuguese"),
    (34, "Romanian"),
    (35, "Romansh"),
    (36, "Serbian"),
    (37, "Slovak"),
    (38, "Slovene"),
    (39, "Finnish"),
    (40, "Swedish"),
    (41, "Turkish"),
    (42, "Flemish"),
    (43, "Walloon"),
];

/// European country codes for ECC 0xE0..0xE4, indexed by PI top nibble (1..15, 0 unused).
/// spec.md §6 names this as "at minimum" the required coverage.
const COUNTRY_E0: [&str; 16] = [
    "", "DE", "DZ", "AD", "IL", "IT", "BE", "RU", "PS", "AL", "AT", "HU", "MT", "DE", "EG", "",
];
const COUNTRY_E1: [&str; 16] = [
    "", "GR", "CY", "SM", "CH", "JO", "FI", "LU", "BG", "DK", "GI", "IQ", "GB", "LY", "RO", "FR",
];
const COUNTRY_E2: [&str; 16] = [
    "", "MA", "CZ", "PL", "VA", "SK", "SY", "TN", "", "LI", "IS", "MC", "LT", "RS", "ES", "NO",
];
const COUNTRY_E3: [&str; 16] = [
    "", "ME", "IE", "TR", "MK", "", "", "NL", "LV", "LB", "AZ", "HR", "KZ", "SE", "BY", "MD",
];
const COUNTRY_E4: [&str; 16] = [
    "", "UA", "PT", "SI", "AM", "", "GE", "", "", "", "", "BA", "", "", "EE", "",
];

/// Returns the localized PTY name for `pty` (0..31), or `None` if out of range.
///
/// `is_rbds` selects the RBDS table instead of the RDS table.
pub fn pty_name(pty: u8, is_rbds: bool) -> Option<&'static str> {
    let table = if is_rbds { &PTY_NAMES_RBDS } else { &PTY_NAMES_RDS };
    table.get(pty as usize).copied()
}

/// Returns the coverage-area name for the 4-bit field at bits 8..11 of a PI.
pub fn coverage_area(pi: u16) -> Option<&'static str> {
    let idx = ((pi >> 8) & 0xf) as usize;
    COVERAGE_AREA.get(idx).copied()
}

/// Returns the language name for a Language Code, or `None` for a hole in the table.
pub fn language_name(lc: u8) -> Option<&'static str> {
    LANGUAGES
        .iter()
        .find(|(code, _)| *code == lc)
        .map(|(_, name)| *name)
}

/// Returns the two-letter country code for an (ECC, PI top nibble) pair, or `None` if the ECC is
/// outside the tables this crate carries, the top nibble is reserved, or there is no assignment.
pub fn country_code(ecc: u8, pi: u16) -> Option<&'static str> {
    let idx = ((pi >> 12) & 0xf) as usize;
    let table = match ecc {
        0xE0 => &COUNTRY_E0,
        0xE1 => &COUNTRY_E1,
        0xE2 => &COUNTRY_E2,
        0xE3 => &COUNTRY_E3,
        0xE4 => &COUNTRY_E4,
        _ => return None,
    };
    match table.get(idx).copied() {
        Some("") | None => None,
        Some(code) => Some(code),
    }
}
