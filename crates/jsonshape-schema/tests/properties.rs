//! Property-based checks over arbitrary data.

use jsonshape_schema::{compile, PathSegment, Validator};
use proptest::prelude::*;
use serde_json::{json, Value};

fn json_value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Number(n.into())),
        (-1.0e6f64..1.0e6).prop_map(|n| json!(n)),
        "[a-zA-Z0-9 .@:-]{0,20}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 24, 5, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..5).prop_map(Value::Array),
            proptest::collection::vec(("[a-z]{1,6}", inner), 0..5)
                .prop_map(|entries| Value::Object(entries.into_iter().collect())),
        ]
    })
}

fn kind_names_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    proptest::sample::subsequence(
        vec!["object", "array", "string", "number", "integer", "boolean", "null"],
        1..=7,
    )
    .prop_shuffle()
}

fn faceted_schema(kinds: &[&str]) -> Value {
    json!({
        "type": kinds,
        "required": ["a"],
        "properties": { "a": { "type": ["integer", "string"], "maxLength": 4 } },
        "additionalProperties": { "type": ["string", "null", "boolean"] },
        "items": { "type": ["number", "array"], "maxItems": 2, "minimum": -10 },
        "maxItems": 3,
        "minLength": 1,
        "maxLength": 12,
        "pattern": "[a-z0-9 .@:-]*",
        "minimum": -1000,
        "exclusiveMaximum": 1000
    })
}

fn sample_validator() -> Validator {
    compile(&faceted_schema(&[
        "object", "array", "string", "number", "boolean", "null",
    ]))
    .unwrap()
}

proptest! {
    #[test]
    fn results_are_idempotent(data in json_value_strategy()) {
        let validator = sample_validator();
        prop_assert_eq!(validator.validate(&data), validator.validate(&data));
    }

    #[test]
    fn failures_are_well_formed(data in json_value_strategy()) {
        let validator = sample_validator();
        if let Err(violation) = validator.validate(&data) {
            prop_assert!(!violation.message.is_empty());

            // Every path step must exist in the data.
            let mut cursor = &data;
            for segment in &violation.path {
                cursor = match (segment, cursor) {
                    (PathSegment::Key(key), Value::Object(map)) => &map[key],
                    (PathSegment::Index(index), Value::Array(items)) => &items[*index],
                    _ => return Err(TestCaseError::fail("path does not follow the data")),
                };
            }
        }
    }

    #[test]
    fn kind_order_does_not_change_results(
        kinds in kind_names_strategy(),
        data in json_value_strategy(),
    ) {
        let mut reversed = kinds.clone();
        reversed.reverse();
        let mut sorted = kinds.clone();
        sorted.sort_unstable();

        let forward = compile(&faceted_schema(&kinds)).unwrap().validate(&data);
        let backward = compile(&faceted_schema(&reversed)).unwrap().validate(&data);
        let canonical = compile(&faceted_schema(&sorted)).unwrap().validate(&data);

        // Only the kind list in a type-mismatch message may differ.
        prop_assert_eq!(forward.is_ok(), backward.is_ok());
        prop_assert_eq!(forward.is_ok(), canonical.is_ok());
        if let (Err(a), Err(b)) = (&forward, &backward) {
            prop_assert_eq!(&a.path, &b.path);
            prop_assert_eq!(&a.received, &b.received);
            if !a.message.starts_with("Expected ") || a.message.contains("constant") {
                prop_assert_eq!(&a.message, &b.message);
            }
        }
    }
}
