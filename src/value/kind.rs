//! First-class JSON kind probing.

use std::fmt;

use serde_json::Value;

/// The six JSON value kinds as a matchable enum.
///
/// `serde_json::Value` answers "what is this" through six separate `is_*`
/// probes; a single enum makes dispatch tables and diagnostics read
/// better, and keeps arrays distinct from objects.
///
/// ## Example
///
/// ```
/// use emitter_rust::ValueKind;
/// use serde_json::json;
///
/// assert_eq!(ValueKind::of(&json!([1, 2])), ValueKind::Array);
/// assert_eq!(ValueKind::of(&json!({})), ValueKind::Object);
/// assert_eq!(ValueKind::of(&json!(null)).to_string(), "null");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    pub fn of(value: &Value) -> ValueKind {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    /// Lowercase name, the way diagnostics spell it.
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
