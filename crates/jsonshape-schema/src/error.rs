/// Errors raised while compiling a schema.
///
/// These are schema-authoring defects. Data that fails validation is never
/// an error here; it is a [`Violation`](crate::Violation) value.
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// The schema text is not valid JSON.
    #[error("schema is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// A schema node or keyword has the wrong shape.
    #[error("invalid schema at {location}: {reason}")]
    InvalidSchema { location: String, reason: String },

    /// A `pattern` keyword is not a valid regular expression.
    #[error("invalid pattern {pattern:?} at {location}: {source}")]
    InvalidPattern {
        location: String,
        pattern: String,
        source: regress::Error,
    },

    /// The schema nests deeper than the configured maximum.
    #[error("schema nesting exceeds configured max depth ({max}) at {location}")]
    TooDeep { location: String, max: usize },
}

impl SchemaError {
    pub(crate) fn invalid(location: &str, reason: impl Into<String>) -> Self {
        SchemaError::InvalidSchema {
            location: location.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SchemaError>;
