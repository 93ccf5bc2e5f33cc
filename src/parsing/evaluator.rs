/*!
 * Reference-range evaluation
 *
 * Compares a measured value string against a reference-range string and
 * produces a tri-state verdict. Unparseable or incomparable inputs yield
 * [`RangeVerdict::Indeterminate`]; nothing in here is an error. OCR hands us
 * garbage routinely and an uncertain verdict is the honest answer.
 */

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::RangeVerdict;

static BETWEEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d+\.?\d*)\s*-\s*(\d+\.?\d*)").expect("interval pattern must compile"));
static BELOW_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<\s*(\d+\.?\d*)").expect("upper bound pattern must compile"));
static ABOVE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r">\s*(\d+\.?\d*)").expect("lower bound pattern must compile"));
static UP_TO_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)up to (\d+\.?\d*)").expect("up-to pattern must compile"));

/// Evaluates `value` against `range`.
///
/// Qualitative results are handled first: a positive/detected/reactive value
/// against an expected "negative" is out of range, a negative value against
/// "negative" is in range, and any other pairing with a qualitative range is
/// indeterminate. Numeric values are compared against the first matching
/// range shape, with `A - B` bounds inclusive.
pub fn evaluate(value: Option<&str>, range: Option<&str>) -> RangeVerdict {
    let (value, range) = match (value, range) {
        (Some(v), Some(r)) => (v, r),
        _ => return RangeVerdict::Indeterminate,
    };

    let value_lower = value.trim().to_lowercase();
    let range_lower = range.trim().to_lowercase();

    if matches!(value_lower.as_str(), "positive" | "detected" | "reactive") {
        return if range_lower == "negative" {
            RangeVerdict::OutOfRange
        } else {
            RangeVerdict::Indeterminate
        };
    }
    if value_lower == "negative" {
        return if range_lower == "negative" {
            RangeVerdict::InRange
        } else {
            RangeVerdict::Indeterminate
        };
    }
    if matches!(range_lower.as_str(), "negative" | "normal")
        && !matches!(value_lower.as_str(), "negative" | "normal")
    {
        return RangeVerdict::Indeterminate;
    }

    // OCR output often prefixes sub-sensitivity values with < or >.
    let cleaned_value = value_lower.replace(['<', '>'], "");
    let value_num: f64 = match cleaned_value.trim().parse() {
        Ok(n) => n,
        Err(_) => return RangeVerdict::Indeterminate,
    };

    if let Some(caps) = BETWEEN_RE.captures(&range_lower) {
        return match (parse_bound(&caps[1]), parse_bound(&caps[2])) {
            (Some(lower), Some(upper)) => {
                RangeVerdict::from_out_of_range(!(lower <= value_num && value_num <= upper))
            }
            _ => RangeVerdict::Indeterminate,
        };
    }
    if let Some(caps) = BELOW_RE.captures(&range_lower) {
        return match parse_bound(&caps[1]) {
            Some(upper) => RangeVerdict::from_out_of_range(value_num >= upper),
            None => RangeVerdict::Indeterminate,
        };
    }
    if let Some(caps) = ABOVE_RE.captures(&range_lower) {
        return match parse_bound(&caps[1]) {
            Some(lower) => RangeVerdict::from_out_of_range(value_num <= lower),
            None => RangeVerdict::Indeterminate,
        };
    }
    if let Some(caps) = UP_TO_RE.captures(&range_lower) {
        return match parse_bound(&caps[1]) {
            Some(upper) => RangeVerdict::from_out_of_range(value_num > upper),
            None => RangeVerdict::Indeterminate,
        };
    }

    RangeVerdict::Indeterminate
}

fn parse_bound(text: &str) -> Option<f64> {
    text.parse().ok()
}
