use serde_json::Value;

use crate::config::CompileConfig;
use crate::engine::validate_node;
use crate::error::Result;
use crate::node::SchemaNode;
use crate::parse::SchemaParser;
use crate::violation::{ValidationResult, Violation};

/// A compiled schema, ready to validate any number of values.
///
/// Validators hold no mutable state; share one behind an `Arc` to validate
/// from several threads at once.
#[derive(Debug, Clone)]
pub struct Validator {
    root: SchemaNode,
}

impl Validator {
    /// Wrap an already-built schema tree.
    pub fn from_node(root: SchemaNode) -> Self {
        Self { root }
    }

    /// Validate `data`, returning the first violation found.
    pub fn validate(&self, data: &Value) -> ValidationResult {
        let mut path = Vec::new();
        let result = validate_node(&self.root, data, &mut path);
        if let Err(violation) = &result {
            log_violation(violation);
        }
        result
    }

    pub fn is_valid(&self, data: &Value) -> bool {
        self.validate(data).is_ok()
    }

    /// The compiled schema tree.
    pub fn root(&self) -> &SchemaNode {
        &self.root
    }

    /// Turn this validator into a plain function of the data.
    pub fn into_fn(self) -> impl Fn(&Value) -> ValidationResult + Send + Sync + 'static {
        move |data: &Value| self.validate(data)
    }
}

fn log_violation(violation: &Violation) {
    tracing::debug!(
        path = %violation.path,
        message = %violation.message,
        "value failed schema validation"
    );
}

/// Compile a schema document with the default config.
pub fn compile(schema: &Value) -> Result<Validator> {
    compile_with_config(schema, CompileConfig::default())
}

/// Compile a schema document with explicit config.
pub fn compile_with_config(schema: &Value, config: CompileConfig) -> Result<Validator> {
    let root = SchemaParser::new(config).parse(schema)?;
    tracing::debug!(
        kinds = ?root.kinds.as_ref().map(|kinds| kinds.to_string()),
        strict_mode = config.strict_mode,
        "compiled schema validator"
    );
    Ok(Validator::from_node(root))
}

/// Compile a schema from JSON text.
pub fn compile_str(schema_json: &str) -> Result<Validator> {
    let schema: Value = serde_json::from_str(schema_json)?;
    compile(&schema)
}
