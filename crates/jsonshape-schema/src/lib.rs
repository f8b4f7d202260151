//! Structural validation of JSON values against a declarative schema.
//!
//! Compile a schema once with [`compile`], then validate any number of
//! values. Validation stops at the first violated constraint and reports it
//! with the path from the root to the offending value.
//!
//! Supported keywords: `type` (single kind or union), `properties`,
//! `required`, `additionalProperties`, `items`, `minItems`, `maxItems`,
//! `minLength`, `maxLength`, `pattern`, `format`, `not.format`, `minimum`,
//! `maximum`, `exclusiveMinimum`, `exclusiveMaximum`, `const` and `enum`.
//! Other keywords are ignored.
//!
//! ```
//! use serde_json::json;
//!
//! let validator = jsonshape_schema::compile(&json!({
//!     "type": "object",
//!     "required": ["id"],
//!     "properties": { "id": { "type": "integer", "minimum": 1 } }
//! }))
//! .unwrap();
//!
//! assert!(validator.validate(&json!({ "id": 7 })).is_ok());
//!
//! let violation = validator.validate(&json!({ "id": 0 })).unwrap_err();
//! assert_eq!(violation.to_string(), "$.id: Must be >= 1");
//! ```

pub mod config;
mod engine;
pub mod error;
pub mod node;
mod parse;
pub mod validator;
pub mod violation;

pub use config::CompileConfig;
pub use error::{Result, SchemaError};
pub use node::{Kind, KindSet, SchemaNode};
pub use validator::{compile, compile_str, compile_with_config, Validator};
pub use violation::{ErrorPath, PathSegment, Received, ValidationResult, Violation};
