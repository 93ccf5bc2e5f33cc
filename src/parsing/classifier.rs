/*!
 * Boilerplate line detection
 *
 * Decides whether an OCR line is ignorable table furniture (column headers,
 * separator rules, blank lines) rather than a candidate result or name line.
 */

use once_cell::sync::Lazy;
use regex::Regex;

/// Words that suggest a line is report furniture rather than a result.
/// A keyword hit alone is not enough to discard a line; see [`is_boilerplate`].
const BOILERPLATE_KEYWORDS: &[&str] = &[
    "test",
    "investigation",
    "result",
    "unit",
    "range",
    "reference",
    "interval",
    "method",
    "specimen",
    "serum",
    "plasma",
    "blood",
    "urine",
    "report",
    "page",
    "date",
    "patient",
    "doctor",
    "hospital",
    "pathology",
    "signature",
    "-------",
    "======",
    "*******",
    "end of report",
    "authorized",
    "technologist",
];

/// The two canonical table-header layouts lab reports use.
static HEADER_TEMPLATES: Lazy<[Regex; 2]> = Lazy::new(|| {
    [
        Regex::new(r"(?i)^test(?:\s+name)?\s+result\s+unit\s+(?:bio\.\s+)?ref.*range.*$")
            .expect("header template must compile"),
        Regex::new(r"(?i)^investigation\s+result\s+unit\s+range.*$")
            .expect("header template must compile"),
    ]
});

/// Returns true when `line` is ignorable boilerplate.
///
/// Deliberately conservative: a line is only discarded when it is blank,
/// exactly matches one of the canonical column-header templates, or is a
/// short keyword-bearing separator rule. Lines that merely contain a
/// boilerplate keyword (e.g. patient metadata) pass through unflagged, so
/// downstream extraction decides their fate.
pub fn is_boilerplate(line: &str) -> bool {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return true;
    }
    let lower = trimmed.to_lowercase();

    if HEADER_TEMPLATES.iter().any(|re| re.is_match(&lower)) {
        return true;
    }

    let has_keyword = BOILERPLATE_KEYWORDS.iter().any(|kw| lower.contains(kw));
    if has_keyword && lower.split_whitespace().count() < 5 {
        if is_separator_run(&lower) {
            return true;
        }
    }

    false
}

/// A line consisting solely of rule characters and spaces.
fn is_separator_run(line: &str) -> bool {
    line.chars().all(|c| matches!(c, '-' | ' ' | '=' | '_' | '*'))
}
