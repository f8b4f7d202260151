//! Identifier-shaped formats: uuid, email.

use once_cell::sync::Lazy;
use regex::Regex;

static UUID_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$")
        .unwrap()
});

static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// RFC 4122 UUID: version nibble 1-5, variant nibble 8/9/a/b, any hex case.
pub fn is_uuid(value: &str) -> bool {
    UUID_REGEX.is_match(value)
}

/// Conservative email check: `local@domain.tld`, single `@`, no whitespace.
///
/// This is deliberately not RFC 5322; quoted local parts and IP-literal
/// domains are rejected.
pub fn is_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value)
}
