//! Compiled schema tree.
//!
//! Every facet is an explicit `Option`, so `minItems: 0` and an absent
//! `minItems` are different nodes. Nodes are immutable once built.

use std::fmt;

use regress::Regex;
use serde_json::Value;

use crate::config::CompileConfig;
use crate::error::Result;
use crate::parse::SchemaParser;

/// A value kind a schema may permit.
///
/// `Integer` is never the runtime kind of a value; it is satisfied by any
/// finite integral number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl Kind {
    /// Resolve a `type` keyword entry.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "object" => Some(Kind::Object),
            "array" => Some(Kind::Array),
            "string" => Some(Kind::String),
            "number" => Some(Kind::Number),
            "integer" => Some(Kind::Integer),
            "boolean" => Some(Kind::Boolean),
            "null" => Some(Kind::Null),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Object => "object",
            Kind::Array => "array",
            Kind::String => "string",
            Kind::Number => "number",
            Kind::Integer => "integer",
            Kind::Boolean => "boolean",
            Kind::Null => "null",
        }
    }

    /// The runtime kind of a value. Never returns [`Kind::Integer`].
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The permitted kinds of a node, in declaration order, without duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KindSet(Vec<Kind>);

impl KindSet {
    /// Build a set from declared kinds. Returns `None` when `kinds` is empty.
    pub fn new(kinds: impl IntoIterator<Item = Kind>) -> Option<Self> {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        (!unique.is_empty()).then_some(Self(unique))
    }

    pub fn single(kind: Kind) -> Self {
        Self(vec![kind])
    }

    pub fn contains(&self, kind: Kind) -> bool {
        self.0.contains(&kind)
    }

    pub fn kinds(&self) -> &[Kind] {
        &self.0
    }

    /// Pick the permitted kind `value` satisfies.
    ///
    /// The runtime kind wins when it is permitted; otherwise a finite
    /// integral number matches a permitted `integer`. The result does not
    /// depend on declaration order.
    pub fn resolve(&self, value: &Value) -> Option<Kind> {
        let actual = Kind::of(value);
        if self.contains(actual) {
            return Some(actual);
        }
        if actual == Kind::Number && self.contains(Kind::Integer) && is_integral(value) {
            return Some(Kind::Integer);
        }
        None
    }
}

impl fmt::Display for KindSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, kind) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(" or ")?;
            }
            f.write_str(kind.name())?;
        }
        Ok(())
    }
}

pub(crate) fn is_integral(value: &Value) -> bool {
    match value {
        Value::Number(number) if number.is_i64() || number.is_u64() => true,
        Value::Number(number) => number
            .as_f64()
            .is_some_and(|n| n.is_finite() && n.fract() == 0.0),
        _ => false,
    }
}

/// A schema node: kind set, literal constraints and one facet group per kind.
#[derive(Debug, Clone, Default)]
pub struct SchemaNode {
    /// `None` permits every kind.
    pub kinds: Option<KindSet>,
    /// `const`: a primitive literal.
    pub constant: Option<Value>,
    /// `enum`: primitive literals.
    pub enumeration: Option<Vec<Value>>,
    pub object: ObjectFacets,
    pub array: ArrayFacets,
    pub string: StringFacets,
    pub number: NumberFacets,
}

impl SchemaNode {
    /// Build a node from a schema document with the default [`CompileConfig`].
    pub fn from_value(schema: &Value) -> Result<SchemaNode> {
        SchemaParser::new(CompileConfig::default()).parse(schema)
    }
}

#[derive(Debug, Clone, Default)]
pub struct ObjectFacets {
    /// Declared properties in declaration order.
    pub properties: Vec<(String, SchemaNode)>,
    /// Required names in declaration order.
    pub required: Vec<String>,
    pub additional: AdditionalProperties,
}

impl ObjectFacets {
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties
            .iter()
            .find(|(declared, _)| declared == name)
            .map(|(_, node)| node)
    }

    pub fn declares(&self, name: &str) -> bool {
        self.property(name).is_some()
    }
}

/// Policy for object keys not listed in `properties`.
#[derive(Debug, Clone, Default)]
pub enum AdditionalProperties {
    /// Absent or `true`.
    #[default]
    Allowed,
    /// `false`.
    Forbidden,
    /// Every extra value must satisfy this node.
    Schema(Box<SchemaNode>),
}

#[derive(Debug, Clone, Default)]
pub struct ArrayFacets {
    pub items: Option<Box<SchemaNode>>,
    pub min_items: Option<usize>,
    pub max_items: Option<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct StringFacets {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Pattern>,
    pub format: Option<String>,
    pub not_format: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct NumberFacets {
    pub minimum: Option<f64>,
    pub maximum: Option<f64>,
    pub exclusive_minimum: Option<f64>,
    pub exclusive_maximum: Option<f64>,
}

/// A `pattern` compiled to match the whole string.
///
/// Patterns use ECMA-262 syntax: lookahead and backreferences are accepted,
/// and `\d`, `\w`, `\s` and `\b` are ASCII-only.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` anchored at both ends, whatever anchors it already has.
    pub fn new(source: impl Into<String>) -> std::result::Result<Self, regress::Error> {
        let source = source.into();
        let regex = Regex::new(&format!("^(?:{source})$"))?;
        Ok(Self { source, regex })
    }

    /// The pattern as written in the schema.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn is_match(&self, value: &str) -> bool {
        self.regex.find(value).is_some()
    }
}
