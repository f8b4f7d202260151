//! Builds a [`SchemaNode`] tree from a JSON schema document.
//!
//! Only the keywords this crate evaluates are read. Everything else
//! (`$ref`, `oneOf`, `description`, ...) is ignored. Keywords that are read
//! must have the right shape, otherwise compilation fails with the schema
//! location of the offending keyword.

use serde_json::{Map, Value};

use crate::config::CompileConfig;
use crate::error::{Result, SchemaError};
use crate::node::{
    AdditionalProperties, ArrayFacets, Kind, KindSet, NumberFacets, ObjectFacets, Pattern,
    SchemaNode, StringFacets,
};

pub(crate) struct SchemaParser {
    config: CompileConfig,
}

impl SchemaParser {
    pub(crate) fn new(config: CompileConfig) -> Self {
        Self { config }
    }

    pub(crate) fn parse(&self, schema: &Value) -> Result<SchemaNode> {
        self.node(schema, "#", 0)
    }

    fn node(&self, value: &Value, location: &str, depth: usize) -> Result<SchemaNode> {
        if depth > self.config.max_depth {
            return Err(SchemaError::TooDeep {
                location: location.to_string(),
                max: self.config.max_depth,
            });
        }

        let Value::Object(map) = value else {
            return Err(SchemaError::invalid(
                location,
                "schema node must be an object",
            ));
        };

        Ok(SchemaNode {
            kinds: parse_kinds(map, location)?,
            constant: parse_const(map, location)?,
            enumeration: parse_enum(map, location)?,
            object: self.object_facets(map, location, depth)?,
            array: self.array_facets(map, location, depth)?,
            string: string_facets(map, location)?,
            number: number_facets(map, location)?,
        })
    }

    fn object_facets(
        &self,
        map: &Map<String, Value>,
        location: &str,
        depth: usize,
    ) -> Result<ObjectFacets> {
        let mut facets = ObjectFacets::default();

        if let Some(properties) = map.get("properties") {
            let Value::Object(properties) = properties else {
                return Err(SchemaError::invalid(
                    &keyword_location(location, "properties"),
                    "must be an object",
                ));
            };
            let properties_location = keyword_location(location, "properties");
            for (name, child) in properties {
                let child_location = keyword_location(&properties_location, name);
                let node = self.node(child, &child_location, depth + 1)?;
                facets.properties.push((name.clone(), node));
            }
        }

        if let Some(required) = map.get("required") {
            let required_location = keyword_location(location, "required");
            let Value::Array(names) = required else {
                return Err(SchemaError::invalid(
                    &required_location,
                    "must be an array of strings",
                ));
            };
            for name in names {
                let Value::String(name) = name else {
                    return Err(SchemaError::invalid(
                        &required_location,
                        "must be an array of strings",
                    ));
                };
                facets.required.push(name.clone());
            }
        }

        facets.additional = match map.get("additionalProperties") {
            Some(Value::Bool(true)) => AdditionalProperties::Allowed,
            Some(Value::Bool(false)) => AdditionalProperties::Forbidden,
            Some(child @ Value::Object(_)) => {
                let child_location = keyword_location(location, "additionalProperties");
                let node = self.node(child, &child_location, depth + 1)?;
                AdditionalProperties::Schema(Box::new(node))
            }
            Some(_) => {
                return Err(SchemaError::invalid(
                    &keyword_location(location, "additionalProperties"),
                    "must be a boolean or a schema object",
                ));
            }
            None if self.config.strict_mode && is_object_schema(map) => {
                AdditionalProperties::Forbidden
            }
            None => AdditionalProperties::Allowed,
        };

        Ok(facets)
    }

    fn array_facets(
        &self,
        map: &Map<String, Value>,
        location: &str,
        depth: usize,
    ) -> Result<ArrayFacets> {
        let items = match map.get("items") {
            Some(child @ Value::Object(_)) => {
                let child_location = keyword_location(location, "items");
                Some(Box::new(self.node(child, &child_location, depth + 1)?))
            }
            Some(_) => {
                return Err(SchemaError::invalid(
                    &keyword_location(location, "items"),
                    "must be a schema object (tuple form is not supported)",
                ));
            }
            None => None,
        };

        Ok(ArrayFacets {
            items,
            min_items: non_negative_integer(map, location, "minItems")?,
            max_items: non_negative_integer(map, location, "maxItems")?,
        })
    }
}

fn parse_kinds(map: &Map<String, Value>, location: &str) -> Result<Option<KindSet>> {
    let Some(declared) = map.get("type") else {
        return Ok(None);
    };

    let type_location = keyword_location(location, "type");
    let names: Vec<&Value> = match declared {
        Value::String(_) => vec![declared],
        Value::Array(names) => names.iter().collect(),
        _ => {
            return Err(SchemaError::invalid(
                &type_location,
                "must be a kind name or an array of kind names",
            ));
        }
    };

    let mut kinds = Vec::with_capacity(names.len());
    for name in names {
        let kind = name
            .as_str()
            .and_then(Kind::from_name)
            .ok_or_else(|| SchemaError::invalid(&type_location, format!("unknown kind {name}")))?;
        kinds.push(kind);
    }

    KindSet::new(kinds)
        .map(Some)
        .ok_or_else(|| SchemaError::invalid(&type_location, "kind list must not be empty"))
}

fn parse_const(map: &Map<String, Value>, location: &str) -> Result<Option<Value>> {
    match map.get("const") {
        Some(literal) => {
            require_primitive(literal, &keyword_location(location, "const"))?;
            Ok(Some(literal.clone()))
        }
        None => Ok(None),
    }
}

fn parse_enum(map: &Map<String, Value>, location: &str) -> Result<Option<Vec<Value>>> {
    let Some(members) = map.get("enum") else {
        return Ok(None);
    };

    let enum_location = keyword_location(location, "enum");
    let Value::Array(members) = members else {
        return Err(SchemaError::invalid(&enum_location, "must be an array"));
    };
    for member in members {
        require_primitive(member, &enum_location)?;
    }
    Ok(Some(members.clone()))
}

fn require_primitive(literal: &Value, location: &str) -> Result<()> {
    match literal {
        Value::Array(_) | Value::Object(_) => Err(SchemaError::invalid(
            location,
            "literals must be strings, numbers, booleans or null",
        )),
        _ => Ok(()),
    }
}

fn string_facets(map: &Map<String, Value>, location: &str) -> Result<StringFacets> {
    let pattern = match map.get("pattern") {
        Some(Value::String(source)) => {
            let pattern = Pattern::new(source.as_str()).map_err(|source_err| {
                SchemaError::InvalidPattern {
                    location: keyword_location(location, "pattern"),
                    pattern: source.clone(),
                    source: source_err,
                }
            })?;
            Some(pattern)
        }
        Some(_) => {
            return Err(SchemaError::invalid(
                &keyword_location(location, "pattern"),
                "must be a string",
            ));
        }
        None => None,
    };

    let format = format_name(map, location)?;
    let not_format = match map.get("not") {
        Some(Value::Object(negated)) => format_name(negated, &keyword_location(location, "not"))?,
        Some(_) => {
            return Err(SchemaError::invalid(
                &keyword_location(location, "not"),
                "must be an object",
            ));
        }
        None => None,
    };

    Ok(StringFacets {
        min_length: non_negative_integer(map, location, "minLength")?,
        max_length: non_negative_integer(map, location, "maxLength")?,
        pattern,
        format,
        not_format,
    })
}

fn format_name(map: &Map<String, Value>, location: &str) -> Result<Option<String>> {
    match map.get("format") {
        Some(Value::String(name)) => {
            if jsonshape_format::Format::from_name(name).is_none() {
                tracing::warn!(
                    format_name = %name,
                    location = %keyword_location(location, "format"),
                    "unknown format; it will always pass"
                );
            }
            Ok(Some(name.clone()))
        }
        Some(_) => Err(SchemaError::invalid(
            &keyword_location(location, "format"),
            "must be a string",
        )),
        None => Ok(None),
    }
}

fn number_facets(map: &Map<String, Value>, location: &str) -> Result<NumberFacets> {
    Ok(NumberFacets {
        minimum: number(map, location, "minimum")?,
        maximum: number(map, location, "maximum")?,
        exclusive_minimum: number(map, location, "exclusiveMinimum")?,
        exclusive_maximum: number(map, location, "exclusiveMaximum")?,
    })
}

fn number(map: &Map<String, Value>, location: &str, keyword: &str) -> Result<Option<f64>> {
    match map.get(keyword) {
        Some(Value::Number(bound)) => Ok(bound.as_f64()),
        Some(_) => Err(SchemaError::invalid(
            &keyword_location(location, keyword),
            "must be a number",
        )),
        None => Ok(None),
    }
}

fn non_negative_integer(
    map: &Map<String, Value>,
    location: &str,
    keyword: &str,
) -> Result<Option<usize>> {
    let Some(value) = map.get(keyword) else {
        return Ok(None);
    };

    let count = match value {
        Value::Number(number) => number.as_u64().or_else(|| {
            number
                .as_f64()
                .filter(|n| *n >= 0.0 && n.fract() == 0.0)
                .map(|n| n as u64)
        }),
        _ => None,
    };

    count
        .map(|count| Some(usize::try_from(count).unwrap_or(usize::MAX)))
        .ok_or_else(|| {
            SchemaError::invalid(
                &keyword_location(location, keyword),
                "must be a non-negative integer",
            )
        })
}

/// JSON Pointer fragment for a keyword below `location`.
fn keyword_location(location: &str, keyword: &str) -> String {
    format!(
        "{location}/{}",
        keyword.replace('~', "~0").replace('/', "~1")
    )
}

fn is_object_schema(map: &Map<String, Value>) -> bool {
    match map.get("type") {
        Some(Value::String(kind)) => kind == "object",
        Some(Value::Array(items)) => items
            .iter()
            .any(|item| matches!(item, Value::String(kind) if kind == "object")),
        _ => is_object_keyword_schema(map),
    }
}

fn is_object_keyword_schema(map: &Map<String, Value>) -> bool {
    const OBJECT_KEYWORDS: [&str; 3] = ["properties", "additionalProperties", "required"];

    OBJECT_KEYWORDS
        .iter()
        .any(|keyword| map.contains_key(*keyword))
}
