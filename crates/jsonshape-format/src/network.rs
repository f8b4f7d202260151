//! Network-shaped formats: uri, hostname, ipv4, ipv6.

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

/// Schemes whose URIs must carry a literal `scheme://` authority with a host.
const AUTHORITY_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

const MAX_HOSTNAME_LEN: usize = 253;

static HOSTNAME_LABEL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?$").unwrap());

static IPV4_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])$")
        .unwrap()
});

/// Absolute URI with a non-empty scheme.
///
/// For `http`, `https` and `ftp` the input must also start with the literal
/// `scheme://` and name a host in its raw authority. The URL parser would
/// otherwise normalize `http:///nohost` into a URL with host `nohost`.
pub fn is_uri(value: &str) -> bool {
    let parsed = match Url::parse(value) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    let scheme = parsed.scheme();
    if scheme.is_empty() {
        return false;
    }
    if !AUTHORITY_SCHEMES.contains(&scheme) {
        return true;
    }

    let prefix = format!("{scheme}://");
    let Some(rest) = value.strip_prefix(prefix.as_str()) else {
        return false;
    };

    raw_authority_has_host(rest) && parsed.host_str().is_some_and(|host| !host.is_empty())
}

fn raw_authority_has_host(rest: &str) -> bool {
    let authority = rest
        .split(['/', '?', '#', '\\'])
        .next()
        .unwrap_or_default();
    let host_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_port)| host_port);

    if host_port.starts_with('[') {
        return host_port.len() > 2;
    }
    host_port
        .split(':')
        .next()
        .is_some_and(|host| !host.is_empty())
}

/// Dot-separated labels of 1-63 alphanumerics/hyphens, no edge hyphens,
/// at most 253 characters overall.
pub fn is_hostname(value: &str) -> bool {
    if value.is_empty() || value.len() > MAX_HOSTNAME_LEN {
        return false;
    }
    value
        .split('.')
        .all(|label| HOSTNAME_LABEL_REGEX.is_match(label))
}

/// Dotted-quad IPv4 with decimal octets 0-255 and no leading zeros.
pub fn is_ipv4(value: &str) -> bool {
    IPV4_REGEX.is_match(value)
}

/// IPv6 in full eight-group form or with a single `::` compression,
/// optionally followed by a `%zone` identifier.
pub fn is_ipv6(value: &str) -> bool {
    let address = match value.split_once('%') {
        Some((address, zone)) => {
            if zone.is_empty() || zone.chars().any(|c| c.is_whitespace() || c == '%') {
                return false;
            }
            address
        }
        None => value,
    };

    match address.split_once("::") {
        Some((head, tail)) => {
            if tail.contains("::") {
                return false;
            }
            match (count_groups(head), count_groups(tail)) {
                (Some(head), Some(tail)) => head + tail <= 7,
                _ => false,
            }
        }
        None => count_groups(address) == Some(8),
    }
}

fn count_groups(part: &str) -> Option<usize> {
    if part.is_empty() {
        return Some(0);
    }

    let mut count = 0;
    for group in part.split(':') {
        if group.is_empty() || group.len() > 4 || !group.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        count += 1;
    }
    Some(count)
}
