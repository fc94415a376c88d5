//! Loosely-typed field values and the serde helpers that pin them down.

use serde::de::{DeserializeOwned, Error as _};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A value that is either a number or a string (tag radius, for example).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Number(f64),
    Text(String),
}

/// Boolean that older fixtures may carry as `"true"` / `"false"` strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Flag {
    Bool(bool),
    Text(String),
}

/// Accepts a number, a numeric string, an empty string, or null.
///
/// Empty strings and null become `None`, so numeric fields only ever hold
/// numbers or the empty placeholder once loaded.
pub fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
    }

    match Option::<Raw>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Raw::Number(n)) => Ok(Some(n)),
        Some(Raw::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite())
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("expected a number, found {:?}", s)))
        }
    }
}

/// Replace one key of a serde-backed record, keeping every other field.
///
/// A `null` value removes the key so the field falls back to its default.
pub(crate) fn patch_field<T>(target: &T, key: &str, value: Value) -> Result<T, serde_json::Error>
where
    T: Serialize + DeserializeOwned,
{
    let mut json = serde_json::to_value(target)?;
    if let Some(object) = json.as_object_mut() {
        if value.is_null() {
            object.remove(key);
        } else {
            object.insert(key.to_string(), value);
        }
    }
    serde_json::from_value(json)
}

/// Read one key of a serde-backed record.
pub(crate) fn read_field<T: Serialize>(target: &T, key: &str) -> Option<Value> {
    serde_json::to_value(target)
        .ok()?
        .get(key)
        .cloned()
        .filter(|v| !v.is_null())
}
