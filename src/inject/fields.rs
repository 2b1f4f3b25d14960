//! Field-alias table for hospital form labels.
//!
//! The same logical field is printed under different labels across forms
//! ("UID No", "Reg No", "U.I.D. No" ...). Each canonical field key carries
//! the label spellings to try, in priority order.

use std::sync::LazyLock;

use regex::Regex;

/// Canonical field keys → printed label candidates.
///
/// Labels are matched case-insensitively against the raw template HTML, so
/// entity-encoded variants (`&amp;`) need their own entry but case variants
/// do not.
const FIELD_ALIASES: &[(&str, &[&str])] = &[
    ("uid", &["UID No", "UID", "Reg No", "U.I.D. No"]),
    ("ipd", &["IPD No", "IPD", "Indoor No", "I.P.D. No"]),
    (
        "admissionDate",
        &[
            "Date & Time Of Admission",
            "Date &amp; Time Of Admission",
            "Admission Date",
        ],
    ),
    (
        "name",
        &[
            "Patient's Name",
            "Patient\u{2019}s Name",
            "Name",
            "Patient Name",
            "Name of Patient",
        ],
    ),
    ("age", &["Age/Sex", "Age", "Sex", "Age / Sex"]),
    (
        "consultant",
        &["Consultant", "Doctor", "Consultant Name", "Under Consultant"],
    ),
    (
        "diagnosis",
        &["Diagnosis", "Provisional Diagnosis", "Final Diagnosis"],
    ),
    ("bed", &["Bed No", "Ward/Bed", "Bed"]),
    ("location", &["Location", "Ward", "ICU/Ward/Room"]),
    ("duration", &["Duration"]),
];

/// Patterns for the known field keys, compiled once.
static ALIAS_PATTERNS: LazyLock<Vec<(&'static str, Vec<Regex>)>> = LazyLock::new(|| {
    FIELD_ALIASES
        .iter()
        .map(|(key, labels)| {
            let patterns = labels
                .iter()
                .map(|label| label_pattern(label).unwrap())
                .collect();
            (*key, patterns)
        })
        .collect()
});

/// Precompiled label patterns for a known field key.
pub(crate) fn alias_patterns(key: &str) -> Option<&'static [Regex]> {
    ALIAS_PATTERNS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, patterns)| patterns.as_slice())
}

/// Pattern for an unknown field key, treating the key itself as the label.
pub(crate) fn literal_pattern(label: &str) -> Option<Regex> {
    label_pattern(label).ok()
}

/// Build the placeholder-hunting pattern for one label:
/// the label, a lookahead window of at most 150 characters (tags and
/// newlines included), then a run of underscores or dot-like characters.
/// The window bound keeps a label from capturing a distant field's blank.
fn label_pattern(label: &str) -> Result<Regex, regex::Error> {
    Regex::new(&format!(
        r"(?is)({}.{{0,150}}?)(_{{2,}}|[.\u{{2026}}\u{{00B7}}]{{2,}})",
        regex::escape(label)
    ))
}
