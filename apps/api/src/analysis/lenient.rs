//! Tolerant field deserializers for model output.
//!
//! Model JSON is semi-structured: fields go missing, lists arrive as comma
//! separated strings, numbers arrive quoted, enums arrive in any casing. Every
//! helper here accepts whatever shape shows up and falls back to the field's
//! neutral value instead of failing the whole document.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const NOT_SPECIFIED: &str = "not specified";

/// `#[serde(default = "...")]` target for string fields.
pub fn not_specified() -> String {
    NOT_SPECIFIED.to_string()
}

/// False for blank strings and the placeholders models use for "unknown".
pub fn is_specified(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    !matches!(
        v.as_str(),
        "" | NOT_SPECIFIED | "unknown" | "n/a" | "na" | "none" | "null" | "-"
    )
}

pub fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) if !s.trim().is_empty() => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => not_specified(),
    })
}

pub fn string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_string_list(value))
}

fn to_string_list(value: Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) => Some(s.trim().to_string()),
                Value::Number(n) => Some(n.to_string()),
                _ => None,
            })
            .filter(|s| is_specified(s))
            .collect(),
        Value::String(s) => s
            .split([',', ';'])
            .map(|part| part.trim().to_string())
            .filter(|s| is_specified(s))
            .collect(),
        _ => Vec::new(),
    }
}

pub fn number<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_number(&value).unwrap_or(0.0))
}

pub fn optional_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_number(&value))
}

/// Accepts `5`, `5.5`, `"5"` and leading-number strings such as `"3+ years"`.
fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64().filter(|f| f.is_finite()),
        Value::String(s) => {
            let digits: String = s
                .trim()
                .chars()
                .take_while(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            digits.parse::<f64>().ok()
        }
        _ => None,
    }
}

/// Whole non-negative numbers such as ages; fractions are rounded.
pub fn whole_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(to_number(&value)
        .map(|f| f.round().clamp(0.0, u32::MAX as f64) as u32)
        .unwrap_or(0))
}

pub fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "y"),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        _ => false,
    })
}

/// Enum fields: variant names are matched after lowercasing and mapping
/// spaces/hyphens to underscores. Anything unrecognised becomes `T::default()`.
pub fn enumeration<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::String(s) => {
            let normalized = s.trim().to_lowercase().replace([' ', '-'], "_");
            serde_json::from_value(Value::String(normalized)).unwrap_or_default()
        }
        _ => T::default(),
    })
}

/// Lists of objects: non-object items are dropped, each object parsed leniently.
pub fn nested_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .into_iter()
            .filter(Value::is_object)
            .map(|item| serde_json::from_value(item).unwrap_or_default())
            .collect(),
        _ => Vec::new(),
    })
}

/// Nested objects: a wrong shape (string, array, null) yields `T::default()`.
pub fn nested<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Object(_) => serde_json::from_value(value).unwrap_or_default(),
        _ => T::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(rename_all = "snake_case")]
    enum Level {
        Low,
        High,
        #[default]
        #[serde(other)]
        Unknown,
    }

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default = "not_specified", deserialize_with = "string")]
        name: String,
        #[serde(default, deserialize_with = "string_list")]
        items: Vec<String>,
        #[serde(default, deserialize_with = "number")]
        years: f64,
        #[serde(default, deserialize_with = "boolean")]
        flag: bool,
        #[serde(default, deserialize_with = "enumeration")]
        level: Level,
    }

    fn probe(json: &str) -> Probe {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_missing_fields_get_neutral_values() {
        let p = probe("{}");
        assert_eq!(p.name, NOT_SPECIFIED);
        assert!(p.items.is_empty());
        assert_eq!(p.years, 0.0);
        assert!(!p.flag);
        assert_eq!(p.level, Level::Unknown);
    }

    #[test]
    fn test_wrong_shapes_are_coerced() {
        let p = probe(
            r#"{"name": 42, "items": "Rust, SQL ; Docker", "years": "7+ years", "flag": "Yes", "level": "HIGH"}"#,
        );
        assert_eq!(p.name, "42");
        assert_eq!(p.items, vec!["Rust", "SQL", "Docker"]);
        assert_eq!(p.years, 7.0);
        assert!(p.flag);
        assert_eq!(p.level, Level::High);
    }

    #[test]
    fn test_nulls_and_garbage_do_not_fail() {
        let p = probe(
            r#"{"name": null, "items": [null, "", "not specified", "Go", 3], "years": {"a": 1}, "flag": [], "level": 7}"#,
        );
        assert_eq!(p.name, NOT_SPECIFIED);
        assert_eq!(p.items, vec!["Go", "3"]);
        assert_eq!(p.years, 0.0);
        assert!(!p.flag);
        assert_eq!(p.level, Level::Unknown);
    }

    #[test]
    fn test_unknown_enum_variant_falls_back() {
        let p = probe(r#"{"level": "catastrophic"}"#);
        assert_eq!(p.level, Level::Unknown);
    }

    #[test]
    fn test_is_specified() {
        assert!(is_specified("Tel Aviv"));
        assert!(!is_specified("  "));
        assert!(!is_specified("Not Specified"));
        assert!(!is_specified("unknown"));
        assert!(!is_specified("N/A"));
    }
}
