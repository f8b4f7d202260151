//! RFC 3339 `date`, `time` and `date-time` shapes.
//!
//! Field ranges are checked syntactically (month 01-12, day 01-31, hour
//! 00-23, minute 00-59, second 00-60). There is no calendar validation, so
//! `2024-02-30` is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

const FULL_DATE: &str = r"[0-9]{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])";
const PARTIAL_TIME: &str = r"(?:[01][0-9]|2[0-3]):[0-5][0-9]:(?:[0-5][0-9]|60)(?:\.[0-9]+)?";
const TIME_OFFSET: &str = r"(?:Z|[+-](?:[01][0-9]|2[0-3]):[0-5][0-9])";

static DATE_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(&format!("^{FULL_DATE}$")).unwrap());

static TIME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("^{PARTIAL_TIME}{TIME_OFFSET}?$")).unwrap());

static DATE_TIME_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{FULL_DATE}T{PARTIAL_TIME}{TIME_OFFSET}$")).unwrap()
});

/// `YYYY-MM-DDTHH:MM:SS[.frac](Z|±HH:MM)`; the zone is mandatory.
pub fn is_date_time(value: &str) -> bool {
    DATE_TIME_REGEX.is_match(value)
}

/// `YYYY-MM-DD`.
pub fn is_date(value: &str) -> bool {
    DATE_REGEX.is_match(value)
}

/// `HH:MM:SS[.frac][Z|±HH:MM]`; seconds are mandatory, the zone is not.
pub fn is_time(value: &str) -> bool {
    TIME_REGEX.is_match(value)
}
