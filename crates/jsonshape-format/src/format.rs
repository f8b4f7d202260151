//! Built-in format names and dispatch.

use std::fmt;

use crate::{datetime, ident, network};

/// A recognized string format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    Uuid,
    Email,
    Uri,
    Hostname,
    Ipv4,
    Ipv6,
    DateTime,
    Date,
    Time,
}

impl Format {
    /// Every built-in format, in registry order.
    pub const ALL: [Format; 9] = [
        Format::Uuid,
        Format::Email,
        Format::Uri,
        Format::Hostname,
        Format::Ipv4,
        Format::Ipv6,
        Format::DateTime,
        Format::Date,
        Format::Time,
    ];

    /// Resolve a schema format name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "uuid" => Some(Format::Uuid),
            "email" => Some(Format::Email),
            "uri" => Some(Format::Uri),
            "hostname" => Some(Format::Hostname),
            "ipv4" => Some(Format::Ipv4),
            "ipv6" => Some(Format::Ipv6),
            "date-time" => Some(Format::DateTime),
            "date" => Some(Format::Date),
            "time" => Some(Format::Time),
            _ => None,
        }
    }

    /// The schema name of this format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Uuid => "uuid",
            Format::Email => "email",
            Format::Uri => "uri",
            Format::Hostname => "hostname",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::DateTime => "date-time",
            Format::Date => "date",
            Format::Time => "time",
        }
    }

    /// Run this format's predicate.
    pub fn check(self, value: &str) -> bool {
        match self {
            Format::Uuid => ident::is_uuid(value),
            Format::Email => ident::is_email(value),
            Format::Uri => network::is_uri(value),
            Format::Hostname => network::is_hostname(value),
            Format::Ipv4 => network::is_ipv4(value),
            Format::Ipv6 => network::is_ipv6(value),
            Format::DateTime => datetime::is_date_time(value),
            Format::Date => datetime::is_date(value),
            Format::Time => datetime::is_time(value),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returns whether `value` matching format `name` equals `expected`.
///
/// Unrecognized names always return `true`, so both `format` and
/// `not.format` on an unknown name are satisfied.
pub fn is_format_valid(name: &str, value: &str, expected: bool) -> bool {
    match Format::from_name(name) {
        Some(format) => format.check(value) == expected,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_both_ways() {
        for format in Format::ALL {
            assert_eq!(Format::from_name(format.name()), Some(format));
            assert_eq!(format.to_string(), format.name());
        }
        assert_eq!(Format::from_name("UUID"), None);
        assert_eq!(Format::from_name("datetime"), None);
    }

    #[test]
    fn dispatch_compares_against_expected() {
        assert!(is_format_valid("ipv4", "10.0.0.1", true));
        assert!(!is_format_valid("ipv4", "10.0.0.1", false));
        assert!(!is_format_valid("ipv4", "10.0.0.256", true));
        assert!(is_format_valid("ipv4", "10.0.0.256", false));
    }

    #[test]
    fn unknown_names_always_pass() {
        assert!(is_format_valid("totally-made-up", "anything", true));
        assert!(is_format_valid("totally-made-up", "anything", false));
        assert!(is_format_valid("", "", true));
    }
}
