//! Projection of arbitrary serializable values onto the JSON data model.
//!
//! Anything the JSON model cannot hold is dropped or coerced here, before
//! the YAML serializer ever sees it:
//!
//! - skipped fields (`#[serde(skip)]`, `skip_serializing_if`) are absent
//! - `NaN` and infinities become `null`
//! - structs and enum variants lose their type and become maps or scalars
//! - null, boolean and number keys become their JSON text (`~` is `"null"`)
//! - sequence, mapping and tagged keys are an error
//!
//! Mapping order is kept as written.

use serde::Serialize;
use serde_json::{Map, Number, Value};
use serde_yaml::Value as Yaml;
use serde_yaml::value::TaggedValue;

use crate::error::PlainError;

/// Project `data` onto plain maps, sequences and scalars.
pub fn to_plain<T>(data: &T) -> Result<Value, PlainError>
where
    T: Serialize + ?Sized,
{
    project(serde_yaml::to_value(data)?)
}

fn project(value: Yaml) -> Result<Value, PlainError> {
    Ok(match value {
        Yaml::Null => Value::Null,
        Yaml::Bool(b) => Value::Bool(b),
        Yaml::Number(n) => number(&n),
        Yaml::String(s) => Value::String(s),
        Yaml::Sequence(items) => Value::Array(
            items
                .into_iter()
                .map(project)
                .collect::<Result<Vec<_>, _>>()?,
        ),
        Yaml::Mapping(mapping) => {
            let mut map = Map::with_capacity(mapping.len());
            for (k, v) in mapping {
                map.insert(key(k)?, project(v)?);
            }
            Value::Object(map)
        }
        // Enum variants and custom tags become single-key maps.
        Yaml::Tagged(tagged) => {
            let TaggedValue { tag, value } = *tagged;
            let name = tag.to_string().trim_start_matches('!').to_string();
            let mut map = Map::with_capacity(1);
            map.insert(name, project(value)?);
            Value::Object(map)
        }
    })
}

fn number(n: &serde_yaml::Number) -> Value {
    if let Some(u) = n.as_u64() {
        Value::from(u)
    } else if let Some(i) = n.as_i64() {
        Value::from(i)
    } else {
        n.as_f64()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

fn key(key: Yaml) -> Result<String, PlainError> {
    match key {
        Yaml::String(s) => Ok(s),
        Yaml::Null => Ok("null".to_string()),
        Yaml::Bool(b) => Ok(b.to_string()),
        Yaml::Number(n) => Ok(number_key(&n)),
        Yaml::Sequence(_) => Err(PlainError::Key("a sequence")),
        Yaml::Mapping(_) => Err(PlainError::Key("a mapping")),
        Yaml::Tagged(_) => Err(PlainError::Key("a tagged value")),
    }
}

fn number_key(n: &serde_yaml::Number) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let positive = n.as_f64().is_some_and(|f| f > 0.0);
        (if positive { "Infinity" } else { "-Infinity" }).to_string()
    } else {
        number(n).to_string()
    }
}
