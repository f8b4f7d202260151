//! String-format predicates used by `format` and `not.format` constraints.
//!
//! Every checker is a pure `&str -> bool` function with no allocation beyond
//! lazily compiled, process-wide regular expressions. They are exposed
//! individually so callers can reuse them outside schema validation.
//!
//! Format names are an open set: [`is_format_valid`] treats any name it does
//! not recognize as satisfied, whatever the expected outcome.

pub mod datetime;
pub mod format;
pub mod ident;
pub mod network;

pub use datetime::{is_date, is_date_time, is_time};
pub use format::{is_format_valid, Format};
pub use ident::{is_email, is_uuid};
pub use network::{is_hostname, is_ipv4, is_ipv6, is_uri};
