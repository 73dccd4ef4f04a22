use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::GeneralizeConfig;
use crate::value::{iter_array, iter_object, primitive_type, PrimitiveType};
use crate::{debug, debug_verbose};

/// The `type` attribute of a schema: one tag, or an ordered union of distinct tags
/// in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaType {
    Single(PrimitiveType),
    Union(Vec<PrimitiveType>),
}

impl SchemaType {
    pub fn contains(&self, tag: PrimitiveType) -> bool {
        match self {
            SchemaType::Single(t) => *t == tag,
            SchemaType::Union(tags) => tags.contains(&tag),
        }
    }

    pub fn tags(&self) -> &[PrimitiveType] {
        match self {
            SchemaType::Single(t) => std::slice::from_ref(t),
            SchemaType::Union(tags) => tags,
        }
    }
}

/// A minimal structural schema.
///
/// `properties` is present exactly when the type includes `object`, and `items`
/// exactly when it includes `array`. Nested schemas are owned by their parent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<SchemaType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
}

impl Schema {
    /// True when nothing has been merged in yet.
    pub fn is_empty(&self) -> bool {
        self.schema_type.is_none()
    }

    /// JSON-shaped view of the schema, keys in discovery order.
    pub fn to_value(&self) -> Value {
        // Schema only holds strings, sequences and string-keyed maps
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Whether an instance tag is already accepted by a schema's `type`.
pub fn type_matches(instance_type: PrimitiveType, schema_type: Option<&SchemaType>) -> bool {
    schema_type.is_some_and(|t| t.contains(instance_type))
}

/// Widen `schema_type` with a tag it does not already include.
///
/// Does not deduplicate: callers check [`type_matches`] first.
pub fn add_type(instance_type: PrimitiveType, schema_type: Option<SchemaType>) -> SchemaType {
    match schema_type {
        None => SchemaType::Single(instance_type),
        Some(SchemaType::Single(existing)) => SchemaType::Union(vec![existing, instance_type]),
        Some(SchemaType::Union(mut tags)) => {
            tags.push(instance_type);
            SchemaType::Union(tags)
        }
    }
}

/// Widen `schema` so that it also accepts `value`. An absent value is a no-op.
pub fn merge(schema: Schema, value: Option<&Value>) -> Schema {
    merge_with_config(schema, value, &GeneralizeConfig::default())
}

/// [`merge`], reporting widening decisions through the config's debug output.
pub fn merge_with_config(
    schema: Schema,
    value: Option<&Value>,
    config: &GeneralizeConfig,
) -> Schema {
    merge_at(schema, value, "$", config)
}

fn merge_at(
    mut schema: Schema,
    value: Option<&Value>,
    path: &str,
    config: &GeneralizeConfig,
) -> Schema {
    let kind = primitive_type(value);

    #[cfg(feature = "trace")]
    tracing::trace!(path, kind = %kind, "merging value");

    let Some(value) = value else {
        debug_verbose!(config, "{}: skipping absent value", path);
        return schema;
    };

    if !type_matches(kind, schema.schema_type.as_ref()) {
        debug!(config, "{}: widening {:?} with {}", path, schema.schema_type, kind);
        schema.schema_type = Some(add_type(kind, schema.schema_type.take()));
    }

    match kind {
        PrimitiveType::Object => {
            let properties = schema.properties.get_or_insert_with(IndexMap::new);
            for (key, field) in iter_object(value) {
                let child_path = extend_path(path, key, config);
                match properties.get_mut(key) {
                    Some(slot) => {
                        let existing = std::mem::take(slot);
                        *slot = merge_at(existing, Some(field), &child_path, config);
                    }
                    None => {
                        debug_verbose!(config, "{}: new property", child_path);
                        let fresh = merge_at(Schema::default(), Some(field), &child_path, config);
                        properties.insert(key.to_string(), fresh);
                    }
                }
            }
        }
        PrimitiveType::Array => {
            let mut items = schema.items.take().map(|b| *b).unwrap_or_default();
            let child_path = extend_path(path, "[]", config);
            for element in iter_array(value) {
                items = merge_at(items, Some(element), &child_path, config);
            }
            schema.items = Some(Box::new(items));
        }
        PrimitiveType::Null
        | PrimitiveType::Boolean
        | PrimitiveType::Number
        | PrimitiveType::String
        | PrimitiveType::Undefined => {} // nothing nested to merge
    }

    schema
}

fn extend_path(path: &str, segment: &str, config: &GeneralizeConfig) -> String {
    if !(config.debug || cfg!(feature = "trace")) {
        return String::new();
    }
    if segment == "[]" {
        format!("{}[]", path)
    } else {
        format!("{}.{}", path, segment)
    }
}

/// Fold example values left to right into one schema, starting from the empty schema.
///
/// Accepts anything that converts into `Option<&Value>`, so both `&Value` and
/// explicitly absent (`None`) examples can be supplied.
pub fn generalize<'a, I>(values: I) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Value>>,
{
    generalize_with_config(values, &GeneralizeConfig::default())
}

pub fn generalize_with_config<'a, I>(values: I, config: &GeneralizeConfig) -> Schema
where
    I: IntoIterator,
    I::Item: Into<Option<&'a Value>>,
{
    values
        .into_iter()
        .fold(Schema::default(), |schema, value| {
            merge_with_config(schema, value.into(), config)
        })
}

#[cfg(test)]
#[path = "../tests/generalization.rs"]
mod tests;
