//! Scalar helpers over parsed JSON values.

use serde_json::Value;

use crate::dataset::Transaction;

/// Check if a value counts as "present" when collecting list members.
///
/// Null, `false`, zero, and empty strings, arrays and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render a value as an item string.
///
/// Strings yield their content; everything else its compact JSON text.
pub fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Stringify the truthy members of a list, in order.
pub fn stringify_members(members: &[Value]) -> Transaction {
    members
        .iter()
        .filter(|member| is_truthy(member))
        .map(stringify)
        .collect()
}

/// A list becomes its truthy members; anything else a single item.
pub(crate) fn flatten(value: &Value) -> Transaction {
    match value {
        Value::Array(members) => stringify_members(members),
        other => vec![stringify(other)],
    }
}

/// Short name of a value's shape, used in error messages.
pub fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
