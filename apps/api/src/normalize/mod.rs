//! Response normalization. Decodes the loosely-typed JSON returned by the upstream
//! coaching service into typed views and display text.
//!
//! Upstream payloads have changed shape over time (nested vs flat plans, snake_case
//! vs camelCase keys, strings vs objects for list items). Each known shape is an
//! explicit serde type; individual fields decode leniently so one malformed field
//! never discards the rest of the payload. Nothing in this module returns an error.

pub mod coaching;
pub mod gap;
pub mod matches;
pub mod resume;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Field deserializer that falls back to `T::default()` when the value has the
/// wrong shape instead of failing the enclosing struct.
pub(crate) fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Accepts a non-empty string or a number; anything else becomes `None`.
pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

/// Accepts only a non-empty string.
pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

/// Decodes `value` as `T`, or `T::default()` when it is not an object of that shape.
pub(crate) fn decode_or_default<T>(value: &Value) -> T
where
    T: DeserializeOwned + Default,
{
    if !value.is_object() {
        return T::default();
    }
    serde_json::from_value(value.clone()).unwrap_or_default()
}

/// First non-empty list among `candidates`, or an empty slice.
pub(crate) fn first_non_empty<'a, T>(candidates: &[&'a [T]]) -> &'a [T] {
    candidates
        .iter()
        .copied()
        .find(|c| !c.is_empty())
        .unwrap_or(&[])
}
