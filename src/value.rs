use serde::{Deserialize, Deserializer};
use serde_json::{Number, Value};

/// Strings the source data uses in place of a missing value.
pub const SENTINELS: [&str; 3] = ["Not available", "N/A", ""];

/// Returns `true` if `value` is a real value rather than a sentinel.
///
/// The comparison is exact and case-sensitive: `"n/a"` is a value.
pub fn is_present(value: &str) -> bool {
    !SENTINELS.contains(&value)
}

/// Text of a JSON scalar, following the truthiness the site's views used:
/// non-empty strings, non-zero numbers and `true` render, everything else
/// (`null`, `false`, `0`, arrays, objects) does not.
pub(crate) fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number_text(number)),
        Value::Bool(true) => Some(String::from("true")),
        _ => None,
    }
}

/// Whole floats print without a fraction, so `1.0` reads `1`.
fn number_text(number: &Number) -> String {
    match number.as_f64() {
        Some(float) if number.is_f64() && float.fract() == 0.0 && float.abs() < 1e15 => {
            format!("{float:.0}")
        }
        _ => number.to_string(),
    }
}

/// Like [`truthy_text`], with sentinel strings also treated as absent.
pub(crate) fn field_text(value: &Value) -> Option<String> {
    truthy_text(value).filter(|text| is_present(text))
}

pub(crate) fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(|value| truthy_text(&value))
}

/// A JSON array with unreadable elements skipped; anything else is empty.
pub(crate) fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: serde::de::DeserializeOwned,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| T::deserialize(item).ok())
            .collect()),
        _ => Ok(Vec::new()),
    }
}
