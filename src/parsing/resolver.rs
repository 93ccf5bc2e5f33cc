/*!
 * Per-line field extraction and test-name resolution
 *
 * OCR frequently splits a test's name onto its own line, above the row that
 * carries the numbers. The scan therefore threads one piece of state between
 * lines: a pending name candidate, deferred from a name-only line and
 * consumed by the next result line that cannot name itself.
 *
 * [`scan_line`] is a pure function over `(line, pending_name)` so a single
 * step can be unit tested in isolation and whole scans stay reentrant.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::{classifier, patterns};

/// Trailing punctuation/noise stripped off a name fragment. Word characters,
/// whitespace, parentheses and hyphens survive.
static TRAILING_JUNK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^\w\s()\-]+$").expect("trailing junk pattern must compile"));

/// A plausible name needs at least three consecutive letters; OCR debris
/// like "l|." or "x2" does not qualify.
static ALPHA_RUN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Za-z]{3,}").expect("alpha run pattern must compile"));

/// Name-only lines start with letters, spaces, parentheses, hyphens or `#`.
static NAME_LEAD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z\s()\-#]+").expect("name lead pattern must compile"));

/// Fields pulled from a single result line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedFields {
    pub name: String,
    pub value: String,
    pub unit: Option<String>,
    pub range: Option<String>,
}

/// Processes one line of OCR text.
///
/// Takes the pending name carried from earlier lines and returns the fields
/// extracted from this line (if it qualified as a result line) together with
/// the pending name to carry forward. The pending name survives only when
/// this line defers a fresh candidate; every other outcome resets it.
pub fn scan_line(
    line: &str,
    pending_name: Option<String>,
) -> (Option<ExtractedFields>, Option<String>) {
    let line = line.trim();

    if classifier::is_boilerplate(line) {
        return (None, None);
    }

    let value_match = match patterns::find_value(line) {
        Some(m) => m,
        None => return (None, defer_name_candidate(line)),
    };
    let value_start = value_match.start();

    let unit = patterns::find_unit(line).map(|m| m.as_str().trim().to_string());
    let range = patterns::find_range(line)
        .filter(|m| m.start() > value_start)
        .map(|m| m.as_str().trim().to_string());

    let name_part = clean_name_fragment(&line[..value_start]);

    let name = if name_part.chars().count() > 2 {
        name_part
    } else if let Some(pending) = pending_name {
        pending
    } else {
        return (None, None);
    };

    if !ALPHA_RUN_RE.is_match(&name) {
        return (None, None);
    }

    let fields = ExtractedFields {
        name,
        value: value_match.as_str().trim().to_string(),
        unit,
        range,
    };
    (Some(fields), None)
}

/// Text before the value token, trimmed, with trailing noise stripped.
fn clean_name_fragment(prefix: &str) -> String {
    let trimmed = prefix.trim();
    TRAILING_JUNK_RE.replace(trimmed, "").trim().to_string()
}

/// A value-less line becomes the next pending name when it is long enough,
/// leads with name-like characters and carries neither a unit nor a range
/// token. Anything else clears the carried state.
fn defer_name_candidate(line: &str) -> Option<String> {
    if line.chars().count() > 3
        && NAME_LEAD_RE.is_match(line)
        && patterns::find_unit(line).is_none()
        && patterns::find_range(line).is_none()
    {
        Some(line.to_string())
    } else {
        None
    }
}
