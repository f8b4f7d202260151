/// Controls how schemas are compiled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompileConfig {
    /// When true, object schemas without `additionalProperties` are compiled
    /// as closed (`additionalProperties: false`), at every nesting level.
    pub strict_mode: bool,
    /// Maximum schema nesting depth accepted by `compile`.
    pub max_depth: usize,
}

impl Default for CompileConfig {
    fn default() -> Self {
        Self {
            strict_mode: false,
            max_depth: 128,
        }
    }
}
