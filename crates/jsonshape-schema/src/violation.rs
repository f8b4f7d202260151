//! Validation outcomes.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

/// Outcome of validating one value: `Ok(())` or the first violation found.
pub type ValidationResult = std::result::Result<(), Violation>;

/// One step from the schema root towards the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<String> for PathSegment {
    fn from(key: String) -> Self {
        PathSegment::Key(key)
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Ordered trail of keys and indices. Empty means the root value.
///
/// Displays as `$`, `$.user.tags[2]`, or `$["odd.key"]` for keys that are
/// not plain identifiers. Serializes as a JSON array such as `["user", 2]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ErrorPath(Vec<PathSegment>);

impl ErrorPath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<PathSegment>> for ErrorPath {
    fn from(segments: Vec<PathSegment>) -> Self {
        Self(segments)
    }
}

impl From<&[PathSegment]> for ErrorPath {
    fn from(segments: &[PathSegment]) -> Self {
        Self(segments.to_vec())
    }
}

impl<'a> IntoIterator for &'a ErrorPath {
    type Item = &'a PathSegment;
    type IntoIter = std::slice::Iter<'a, PathSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("$")?;
        for segment in self {
            match segment {
                PathSegment::Index(index) => write!(f, "[{index}]")?,
                PathSegment::Key(key) if is_plain_key(key) => write!(f, ".{key}")?,
                PathSegment::Key(key) => write!(f, "[{}]", Value::from(key.as_str()))?,
            }
        }
        Ok(())
    }
}

fn is_plain_key(key: &str) -> bool {
    let mut chars = key.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}

/// What was actually found where a violation occurred.
///
/// Serializes tagged, as `{"value": ...}` or `{"length": n}`, so a length
/// is never mistaken for a numeric value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Received {
    /// The offending value itself.
    Value(Value),
    /// The length of an over- or under-sized string or array.
    Length(usize),
}

/// The first constraint a value failed.
#[derive(Debug, Clone, PartialEq, Serialize, thiserror::Error)]
#[error("{path}: {message}")]
pub struct Violation {
    pub path: ErrorPath,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub received: Option<Received>,
}

impl Violation {
    pub fn new(path: impl Into<ErrorPath>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
            received: None,
        }
    }

    /// Echo the offending value.
    pub fn with_value(mut self, value: &Value) -> Self {
        self.received = Some(Received::Value(value.clone()));
        self
    }

    /// Echo a measured length.
    pub fn with_length(mut self, length: usize) -> Self {
        self.received = Some(Received::Length(length));
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn path_display() {
        assert_eq!(ErrorPath::root().to_string(), "$");

        let path = ErrorPath::from(vec![
            PathSegment::from("user"),
            PathSegment::from("tags"),
            PathSegment::from(2),
        ]);
        assert_eq!(path.to_string(), "$.user.tags[2]");

        let odd = ErrorPath::from(vec![PathSegment::from("odd.key"), PathSegment::from("")]);
        assert_eq!(odd.to_string(), r#"$["odd.key"][""]"#);
    }

    #[test]
    fn violation_serializes_without_absent_received() {
        let missing = Violation::new(ErrorPath::root(), "Missing required property 'id'");
        assert_eq!(
            serde_json::to_value(&missing).unwrap(),
            json!({ "path": [], "message": "Missing required property 'id'" })
        );

        let too_long = Violation::new(
            vec![PathSegment::from("tags"), PathSegment::from(0)],
            "String length > 3",
        )
        .with_length(4);
        assert_eq!(
            serde_json::to_value(&too_long).unwrap(),
            json!({
                "path": ["tags", 0],
                "message": "String length > 3",
                "received": { "length": 4 }
            })
        );

        let too_small = Violation::new(vec![PathSegment::from("n")], "Must be >= 5")
            .with_value(&json!(4));
        assert_eq!(
            serde_json::to_value(&too_small).unwrap()["received"],
            json!({ "value": 4 })
        );
    }

    #[test]
    fn path_iterates_segments_in_order() {
        let path = ErrorPath::from(vec![PathSegment::from("items"), PathSegment::from(1)]);
        let collected: Vec<&PathSegment> = (&path).into_iter().collect();
        assert_eq!(collected, [&PathSegment::from("items"), &PathSegment::from(1)]);
    }

    #[test]
    fn violation_display_includes_path() {
        let violation =
            Violation::new(vec![PathSegment::from("id")], "Must be >= 1").with_value(&json!(0));
        assert_eq!(violation.to_string(), "$.id: Must be >= 1");
        assert_eq!(violation.received, Some(Received::Value(json!(0))));
    }
}
