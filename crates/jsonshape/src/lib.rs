//! Structural validation of JSON values with precise first-error locations.
//!
//! # Crate Structure
//!
//! - [`schema`] — Schema compilation and the first-error-wins validation engine
//! - [`format`] — Standalone string-format predicates (uuid, email, uri, ...)

/// Re-export schema types.
pub mod schema {
    pub use jsonshape_schema::*;
}

/// Re-export format predicates.
pub mod format {
    pub use jsonshape_format::*;
}

pub use jsonshape_schema::{compile, ValidationResult, Validator, Violation};
