/*!
 * Fixed pattern set for lab report lines
 *
 * Matchers for the three token kinds a result line can carry: the measured
 * value, the unit, and the biological reference range. All lookups use
 * leftmost-match semantics via `Regex::find`.
 */

use once_cell::sync::Lazy;
use regex::{Match, Regex};

/// Decimal number, integer, or qualitative result token.
static VALUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+\.\d+\b|\b\d+\b|\b(?:positive|negative|detected|non reactive|reactive|normal|abnormal)\b",
    )
    .expect("value pattern must compile")
});

/// Whole-word match against the fixed unit vocabulary seen on Indian lab
/// report formats (CBC, LFT, KFT, serology and urinalysis panels).
///
/// The word-boundary anchors mean tokens edged by symbols (`%`, `/HPF`,
/// `H.P.F.`) only match flush against a word character, so `2-4/HPF`
/// carries a unit while `2-4 /HPF` does not.
static UNIT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:%|g/dL|gm/dL|mg/dL|Seconds|U/L|IU/L|fL|cu\.?mm|cells/µL|cells/ul|million/cu\.?mm|mEq/Litre|mmol/L|pg/mL|ng/mL|H\.P\.F\.|/HPF)\b",
    )
    .expect("unit pattern must compile")
});

/// Numeric interval (`A - B`), one-sided bound (`< A`, `> A`, `Up to A`),
/// or qualitative expectation (`negative`, `normal`).
static RANGE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b\d+\.?\d*\s*-\s*\d+\.?\d*\b|<\s*\d+\.?\d*|>\s*\d+\.?\d*|\b\d+-\d+\b|up to \d+\.?\d*|\bnegative\b|\bnormal\b",
    )
    .expect("range pattern must compile")
});

/// Leftmost value token in the line, if any.
pub fn find_value(line: &str) -> Option<Match<'_>> {
    VALUE_RE.find(line)
}

/// Leftmost unit token in the line, if any.
pub fn find_unit(line: &str) -> Option<Match<'_>> {
    UNIT_RE.find(line)
}

/// Leftmost range token in the line, if any. Callers must reject matches
/// that start at or before the value token: a reference range never
/// precedes the value it qualifies.
pub fn find_range(line: &str) -> Option<Match<'_>> {
    RANGE_RE.find(line)
}
