use std::collections::BTreeMap;

use crate::{
    ModelError, ModelResult,
    domain::{ConfigValue, FieldKind, NULL_LITERAL, Schema},
};

/// Coerce a raw form value into the type the schema assigns to `name`.
///
/// The literal `"null"` always yields [`ConfigValue::Null`]. Booleans never
/// fail: anything other than a case-insensitive `true` is `false`.
///
/// # Examples
/// ```
/// use wfc_model::{ConfigValue, Schema, coerce};
///
/// let schema = Schema::default();
/// let v = coerce("groupby", "filepath, camera", &schema).unwrap();
/// assert_eq!(v, ConfigValue::List(vec!["filepath".into(), "camera".into()]));
/// ```
pub fn coerce(name: &str, raw: &str, schema: &Schema) -> ModelResult<ConfigValue> {
    if raw == NULL_LITERAL {
        return Ok(ConfigValue::Null);
    }

    let value = match schema.kind_of(name) {
        FieldKind::List => ConfigValue::List(split_list(raw)),
        FieldKind::Map => ConfigValue::Map(split_map(name, raw)?),
        FieldKind::Int => ConfigValue::Int(raw.trim().parse().map_err(|source| {
            ModelError::InvalidInteger {
                field: name.to_string(),
                value: raw.to_string(),
                source,
            }
        })?),
        FieldKind::Bool => ConfigValue::Bool(raw.eq_ignore_ascii_case("true")),
        FieldKind::Str => ConfigValue::Str(raw.to_string()),
    };
    Ok(value)
}

fn split_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

fn split_map(name: &str, raw: &str) -> ModelResult<BTreeMap<String, String>> {
    let mut out = BTreeMap::new();
    if raw.is_empty() {
        return Ok(out);
    }

    for entry in raw.split(',').map(str::trim) {
        let Some((key, value)) = entry.split_once(':') else {
            return Err(ModelError::MalformedMapEntry {
                field: name.to_string(),
                entry: entry.to_string(),
            });
        };
        out.insert(key.to_string(), value.to_string());
    }
    Ok(out)
}
