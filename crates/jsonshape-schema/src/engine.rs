//! The recursive, first-error-wins walk over a schema and a value.
//!
//! Check order for one node: kind membership, `const`, `enum`, then the
//! facet group of the resolved kind. Within a facet group checks run in a
//! fixed order and the first failure is returned. Facet groups for other
//! kinds are never consulted.

use jsonshape_format::is_format_valid;
use serde_json::{Map, Number, Value};

use crate::node::{
    AdditionalProperties, ArrayFacets, Kind, NumberFacets, ObjectFacets, SchemaNode, StringFacets,
};
use crate::violation::{PathSegment, ValidationResult, Violation};

/// Validate `data` against `node`. `path` is the location of `data`; it is
/// restored before returning `Ok`.
pub(crate) fn validate_node(
    node: &SchemaNode,
    data: &Value,
    path: &mut Vec<PathSegment>,
) -> ValidationResult {
    let actual = Kind::of(data);
    let resolved = match &node.kinds {
        Some(kinds) => kinds.resolve(data).ok_or_else(|| {
            Violation::new(path.as_slice(), format!("Expected {kinds} but got {actual}"))
                .with_value(data)
        })?,
        None => actual,
    };

    check_literals(node, data, actual, path)?;

    match resolved {
        Kind::Object => validate_object(&node.object, data, path),
        Kind::Array => validate_array(&node.array, data, path),
        Kind::String => validate_string(&node.string, data, path),
        Kind::Number | Kind::Integer => validate_number(&node.number, data, resolved, path),
        Kind::Boolean => validate_boolean(data, path),
        Kind::Null => Ok(()),
    }
}

fn check_literals(
    node: &SchemaNode,
    data: &Value,
    actual: Kind,
    path: &[PathSegment],
) -> ValidationResult {
    if let Some(expected) = &node.constant {
        if !literal_eq(data, expected) {
            return Err(
                Violation::new(path, format!("Expected constant {expected}")).with_value(data),
            );
        }
    }

    if let Some(members) = &node.enumeration {
        let composite = matches!(actual, Kind::Object | Kind::Array);
        if composite || !members.iter().any(|member| literal_eq(data, member)) {
            return Err(Violation::new(path, "Value not in enum").with_value(data));
        }
    }

    Ok(())
}

/// Strict equality without coercion. Numbers compare by value, so `1`
/// equals `1.0`.
fn literal_eq(data: &Value, literal: &Value) -> bool {
    match (data, literal) {
        (Value::Number(a), Value::Number(b)) => numbers_eq(a, b),
        _ => data == literal,
    }
}

fn numbers_eq(a: &Number, b: &Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

fn validate_object(
    facets: &ObjectFacets,
    data: &Value,
    path: &mut Vec<PathSegment>,
) -> ValidationResult {
    let Value::Object(map) = data else {
        return Err(type_mismatch(Kind::Object, data, path));
    };

    for name in &facets.required {
        if !map.contains_key(name) {
            return Err(Violation::new(
                path.as_slice(),
                format!("Missing required property '{name}'"),
            ));
        }
    }

    for (name, child) in &facets.properties {
        if let Some(value) = map.get(name) {
            descend(child, value, PathSegment::Key(name.clone()), path)?;
        }
    }

    validate_additional(facets, map, path)
}

fn validate_additional(
    facets: &ObjectFacets,
    map: &Map<String, Value>,
    path: &mut Vec<PathSegment>,
) -> ValidationResult {
    let mut extras = map.iter().filter(|(key, _)| !facets.declares(key));

    match &facets.additional {
        AdditionalProperties::Allowed => Ok(()),
        AdditionalProperties::Forbidden => match extras.next() {
            Some((key, _)) => Err(Violation::new(
                path.as_slice(),
                format!("Unexpected property '{key}'"),
            )),
            None => Ok(()),
        },
        AdditionalProperties::Schema(child) => {
            for (key, value) in extras {
                descend(child, value, PathSegment::Key(key.clone()), path)?;
            }
            Ok(())
        }
    }
}

fn validate_array(
    facets: &ArrayFacets,
    data: &Value,
    path: &mut Vec<PathSegment>,
) -> ValidationResult {
    let Value::Array(elements) = data else {
        return Err(type_mismatch(Kind::Array, data, path));
    };

    let len = elements.len();
    if let Some(min) = facets.min_items {
        if len < min {
            return Err(Violation::new(
                path.as_slice(),
                format!("Array must have at least {min} items"),
            )
            .with_length(len));
        }
    }
    if let Some(max) = facets.max_items {
        if len > max {
            return Err(Violation::new(
                path.as_slice(),
                format!("Array must have at most {max} items"),
            )
            .with_length(len));
        }
    }

    if let Some(items) = &facets.items {
        for (index, element) in elements.iter().enumerate() {
            descend(items, element, PathSegment::Index(index), path)?;
        }
    }

    Ok(())
}

fn validate_string(facets: &StringFacets, data: &Value, path: &[PathSegment]) -> ValidationResult {
    let Value::String(value) = data else {
        return Err(type_mismatch(Kind::String, data, path));
    };

    let len = value.chars().count();
    if let Some(min) = facets.min_length {
        if len < min {
            return Err(Violation::new(path, format!("String length < {min}")).with_length(len));
        }
    }
    if let Some(max) = facets.max_length {
        if len > max {
            return Err(Violation::new(path, format!("String length > {max}")).with_length(len));
        }
    }

    if let Some(pattern) = &facets.pattern {
        if !pattern.is_match(value) {
            return Err(Violation::new(
                path,
                format!("String does not match pattern '{}'", pattern.as_str()),
            )
            .with_value(data));
        }
    }

    if let Some(format) = &facets.format {
        if !is_format_valid(format, value, true) {
            return Err(Violation::new(
                path,
                format!("String does not match format '{format}'"),
            )
            .with_value(data));
        }
    }
    if let Some(format) = &facets.not_format {
        if !is_format_valid(format, value, false) {
            return Err(Violation::new(
                path,
                format!("String must not match format '{format}'"),
            )
            .with_value(data));
        }
    }

    Ok(())
}

fn validate_number(
    facets: &NumberFacets,
    data: &Value,
    resolved: Kind,
    path: &[PathSegment],
) -> ValidationResult {
    let Some(number) = data.as_f64() else {
        return Err(type_mismatch(resolved, data, path));
    };
    if !number.is_finite() {
        return Err(Violation::new(path, "Expected a finite number").with_value(data));
    }
    if resolved == Kind::Integer && number.fract() != 0.0 {
        return Err(Violation::new(path, "Expected an integer").with_value(data));
    }

    let bounds: [(Option<f64>, &str, fn(f64, f64) -> bool); 4] = [
        (facets.minimum, ">=", |n, bound| n >= bound),
        (facets.maximum, "<=", |n, bound| n <= bound),
        (facets.exclusive_minimum, ">", |n, bound| n > bound),
        (facets.exclusive_maximum, "<", |n, bound| n < bound),
    ];
    for (bound, op, holds) in bounds {
        if let Some(bound) = bound {
            if !holds(number, bound) {
                return Err(Violation::new(path, format!("Must be {op} {bound}")).with_value(data));
            }
        }
    }

    Ok(())
}

fn validate_boolean(data: &Value, path: &[PathSegment]) -> ValidationResult {
    match data {
        Value::Bool(_) => Ok(()),
        _ => Err(type_mismatch(Kind::Boolean, data, path)),
    }
}

fn descend(
    node: &SchemaNode,
    data: &Value,
    segment: PathSegment,
    path: &mut Vec<PathSegment>,
) -> ValidationResult {
    path.push(segment);
    validate_node(node, data, path)?;
    path.pop();
    Ok(())
}

fn type_mismatch(expected: Kind, data: &Value, path: &[PathSegment]) -> Violation {
    Violation::new(path, format!("Expected {expected} but got {}", Kind::of(data))).with_value(data)
}
