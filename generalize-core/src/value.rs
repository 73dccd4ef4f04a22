//! Classification of example values into primitive type tags, plus borrowed
//! iteration helpers so merging never needs to own or mutate an example.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// The primitive type tag of an example value.
///
/// `Undefined` stands for an absent example and never appears in a produced schema.
/// There is no integer tag: every JSON number classifies as `Number`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    Undefined,
    Null,
    Boolean,
    Number,
    String,
    Object,
    Array,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::Undefined => "undefined",
            PrimitiveType::Null => "null",
            PrimitiveType::Boolean => "boolean",
            PrimitiveType::Number => "number",
            PrimitiveType::String => "string",
            PrimitiveType::Object => "object",
            PrimitiveType::Array => "array",
        }
    }
}

impl fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a possibly-absent value.
pub fn primitive_type(value: Option<&Value>) -> PrimitiveType {
    match value {
        None => PrimitiveType::Undefined,
        Some(Value::Null) => PrimitiveType::Null,
        Some(Value::Bool(_)) => PrimitiveType::Boolean,
        Some(Value::Number(_)) => PrimitiveType::Number,
        Some(Value::String(_)) => PrimitiveType::String,
        Some(Value::Array(_)) => PrimitiveType::Array,
        Some(Value::Object(_)) => PrimitiveType::Object,
    }
}

/// Object iteration helper, yielding own keys in document order
pub fn iter_object(v: &Value) -> impl Iterator<Item = (&str, &Value)> {
    v.as_object()
        .map(|obj: &Map<String, Value>| obj.iter())
        .into_iter()
        .flatten()
        .map(|(k, v)| (k.as_str(), v))
}

/// Array iteration helper
pub fn iter_array(v: &Value) -> impl Iterator<Item = &Value> {
    v.as_array().into_iter().flatten()
}
