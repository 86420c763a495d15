//! Property accessors that report schema deviations as warnings.
//!
//! Every accessor treats an explicit `null` the same as an absent key.
//! `owner` names the element being parsed (e.g. `FactSet.facts[2]`) and is
//! only used in warning messages.

use serde_json::{Map, Value};

use crate::config::CoercionPolicy;
use crate::error::{CardError, Result};
use crate::types::SchemaEnum;
use crate::warning::{WarningCode, Warnings};

/// Name of a JSON value's kind, for diagnostics.
///
/// # Examples
/// ```
/// use adaptivecards_objectmodel::json::json_kind;
/// use serde_json::json;
///
/// assert_eq!(json_kind(&json!(null)), "null");
/// assert_eq!(json_kind(&json!([1, 2])), "array");
/// ```
#[must_use]
pub fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Require `json` to be an object.
///
/// # Errors
/// Returns `MalformedCard` naming `element_type` for any other JSON kind.
pub fn expect_object<'a>(json: &'a Value, element_type: &str) -> Result<&'a Map<String, Value>> {
    json.as_object().ok_or_else(|| {
        CardError::malformed(
            element_type,
            format!("expected a JSON object, got {}", json_kind(json)),
        )
    })
}

/// The string `type` property of an element or action.
#[must_use]
pub fn get_type_name(obj: &Map<String, Value>) -> Option<&str> {
    obj.get("type").and_then(Value::as_str)
}

fn present<'a>(obj: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    obj.get(key).filter(|value| !value.is_null())
}

/// Optional string property.
///
/// A non-string value is reported as `InvalidValue` and ignored.
pub fn get_string(
    obj: &Map<String, Value>,
    key: &str,
    owner: &str,
    warnings: &mut Warnings,
) -> Option<String> {
    let value = present(obj, key)?;
    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            warnings.add(
                WarningCode::InvalidValue,
                format!("{owner}: '{key}' must be a string, got {}", json_kind(value)),
            );
            None
        }
    }
}

/// Optional boolean property with a default.
pub fn get_bool(
    obj: &Map<String, Value>,
    key: &str,
    default: bool,
    owner: &str,
    warnings: &mut Warnings,
) -> bool {
    let Some(value) = present(obj, key) else {
        return default;
    };
    match value.as_bool() {
        Some(flag) => flag,
        None => {
            warnings.add(
                WarningCode::InvalidValue,
                format!(
                    "{owner}: '{key}' must be a boolean, got {}; using {default}",
                    json_kind(value)
                ),
            );
            default
        }
    }
}

/// Optional non-negative integer property.
pub fn get_u32(
    obj: &Map<String, Value>,
    key: &str,
    owner: &str,
    warnings: &mut Warnings,
) -> Option<u32> {
    let value = present(obj, key)?;
    match value.as_u64().and_then(|n| u32::try_from(n).ok()) {
        Some(n) => Some(n),
        None => {
            warnings.add(
                WarningCode::InvalidValue,
                format!("{owner}: '{key}' must be a non-negative integer, got {value}"),
            );
            None
        }
    }
}

/// Optional enum property.
///
/// Unknown strings are reported as `UnknownEnumValue`, other kinds as
/// `InvalidValue`; both yield `None` so the caller keeps its default.
pub fn get_enum<T: SchemaEnum>(
    obj: &Map<String, Value>,
    key: &str,
    owner: &str,
    warnings: &mut Warnings,
) -> Option<T> {
    let value = present(obj, key)?;
    let Some(text) = value.as_str() else {
        warnings.add(
            WarningCode::InvalidValue,
            format!("{owner}: '{key}' must be a string, got {}", json_kind(value)),
        );
        return None;
    };

    let parsed = T::from_schema(text);
    if parsed.is_none() {
        let known: Vec<&str> = T::VARIANTS.iter().map(SchemaEnum::as_str).collect();
        warnings.add(
            WarningCode::UnknownEnumValue,
            format!(
                "{owner}: unknown value '{text}' for '{key}' (expected one of: {})",
                known.join(", ")
            ),
        );
    }
    parsed
}

/// Whether [`required_text`] would drop the owning entry for `key`.
///
/// Records nothing; callers use it to report only the first unusable key.
#[must_use]
pub fn rejects_text(obj: &Map<String, Value>, key: &str, policy: CoercionPolicy) -> bool {
    match present(obj, key) {
        None | Some(Value::String(_)) => false,
        Some(Value::Number(_) | Value::Bool(_)) => policy == CoercionPolicy::Strict,
        Some(_) => true,
    }
}

/// Required text property, resolved under the coercion policy.
///
/// | value            | result                                   |
/// |------------------|------------------------------------------|
/// | string           | the string                               |
/// | absent / `null`  | `""` + `RequiredPropertyMissing`         |
/// | number / boolean | lenient: JSON text, strict: `None`; both + `InvalidValue` |
/// | array / object   | `None` + `InvalidValue`                  |
///
/// `None` means the owning entry should be dropped.
pub fn required_text(
    obj: &Map<String, Value>,
    key: &str,
    owner: &str,
    policy: CoercionPolicy,
    warnings: &mut Warnings,
) -> Option<String> {
    let Some(value) = present(obj, key) else {
        warnings.add(
            WarningCode::RequiredPropertyMissing,
            format!("{owner}: required property '{key}' is missing; using an empty string"),
        );
        return Some(String::new());
    };

    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(_) | Value::Bool(_) => match policy {
            CoercionPolicy::Lenient => {
                warnings.add(
                    WarningCode::InvalidValue,
                    format!(
                        "{owner}: '{key}' should be a string, got {}; converted to \"{value}\"",
                        json_kind(value)
                    ),
                );
                Some(value.to_string())
            }
            CoercionPolicy::Strict => {
                warnings.add(
                    WarningCode::InvalidValue,
                    format!(
                        "{owner}: '{key}' must be a string, got {}; entry skipped",
                        json_kind(value)
                    ),
                );
                None
            }
        },
        _ => {
            warnings.add(
                WarningCode::InvalidValue,
                format!(
                    "{owner}: '{key}' must be a string, got {}; entry skipped",
                    json_kind(value)
                ),
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Spacing;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("not an object: {other}"),
        }
    }

    #[test]
    fn test_expect_object_rejects_array() {
        let err = expect_object(&json!([]), "FactSet").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Malformed FactSet: expected a JSON object, got array"
        );
    }

    #[test]
    fn test_get_string_wrong_type() {
        let obj = object(json!({ "id": 7 }));
        let mut warnings = Warnings::new();

        assert_eq!(get_string(&obj, "id", "TextBlock", &mut warnings), None);
        assert_eq!(warnings.len(), 1);
        assert_eq!(warnings.as_slice()[0].code, WarningCode::InvalidValue);
    }

    #[test]
    fn test_get_bool_null_is_default_without_warning() {
        let obj = object(json!({ "isVisible": null }));
        let mut warnings = Warnings::new();

        assert!(get_bool(&obj, "isVisible", true, "FactSet", &mut warnings));
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_get_u32_negative() {
        let obj = object(json!({ "maxLines": -1 }));
        let mut warnings = Warnings::new();

        assert_eq!(get_u32(&obj, "maxLines", "TextBlock", &mut warnings), None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_get_enum_unknown_value() {
        let obj = object(json!({ "spacing": "huge" }));
        let mut warnings = Warnings::new();

        let spacing: Option<Spacing> = get_enum(&obj, "spacing", "FactSet", &mut warnings);
        assert_eq!(spacing, None);
        assert_eq!(warnings.as_slice()[0].code, WarningCode::UnknownEnumValue);
        assert!(warnings.as_slice()[0].message.contains("extraLarge"));
    }

    #[test]
    fn test_required_text_missing() {
        let obj = object(json!({}));
        let mut warnings = Warnings::new();

        let text = required_text(&obj, "value", "fact", CoercionPolicy::Lenient, &mut warnings);
        assert_eq!(text, Some(String::new()));
        assert_eq!(warnings.as_slice()[0].code, WarningCode::RequiredPropertyMissing);
    }

    #[test]
    fn test_required_text_number_lenient() {
        let obj = object(json!({ "value": 42 }));
        let mut warnings = Warnings::new();

        let text = required_text(&obj, "value", "fact", CoercionPolicy::Lenient, &mut warnings);
        assert_eq!(text, Some("42".to_string()));
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_required_text_number_strict() {
        let obj = object(json!({ "value": true }));
        let mut warnings = Warnings::new();

        let text = required_text(&obj, "value", "fact", CoercionPolicy::Strict, &mut warnings);
        assert_eq!(text, None);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_rejects_text_matches_required_text() {
        let obj = object(json!({ "a": "x", "b": 1, "c": [1], "d": null }));

        assert!(!rejects_text(&obj, "a", CoercionPolicy::Strict));
        assert!(!rejects_text(&obj, "b", CoercionPolicy::Lenient));
        assert!(rejects_text(&obj, "b", CoercionPolicy::Strict));
        assert!(rejects_text(&obj, "c", CoercionPolicy::Lenient));
        assert!(!rejects_text(&obj, "d", CoercionPolicy::Strict));
        assert!(!rejects_text(&obj, "missing", CoercionPolicy::Strict));
    }

    #[test]
    fn test_required_text_object_always_skipped() {
        let obj = object(json!({ "value": { "nested": 1 } }));
        let mut warnings = Warnings::new();

        let text = required_text(&obj, "value", "fact", CoercionPolicy::Lenient, &mut warnings);
        assert_eq!(text, None);
        assert_eq!(warnings.as_slice()[0].code, WarningCode::InvalidValue);
    }
}
