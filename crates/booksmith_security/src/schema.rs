//! Shape check for incoming design specs.
//!
//! The gate accepts untrusted JSON; this module verifies the required theme
//! shape before any typed check runs. Missing or mistyped required fields
//! are errors and short-circuit the remaining checks; mistyped optional
//! layout/content sub-fields are warnings only.

use serde_json::Value;

const REQUIRED_COLOR_FIELDS: [&str; 3] = ["primary_color", "accent_color", "background_color"];
const LAYOUT_FIELDS: [(&str, &str); 3] = [
    ("page_size", "string"),
    ("margin", "number"),
    ("show_page_numbers", "boolean"),
];
const CONTENT_STRING_FIELDS: [&str; 4] = ["title", "subtitle", "athlete_name", "foreword"];

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Check the required theme shape. Returns `true` when the shape holds.
pub(crate) fn check_shape(
    value: &Value,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) -> bool {
    let Some(root) = value.as_object() else {
        errors.push("design spec must be a JSON object".to_string());
        return false;
    };

    let Some(theme) = root.get("theme") else {
        errors.push("theme is required".to_string());
        return false;
    };
    let Some(theme_obj) = theme.as_object() else {
        errors.push(format!("theme must be an object, got {}", type_name(theme)));
        return false;
    };

    for field in REQUIRED_COLOR_FIELDS {
        match theme_obj.get(field) {
            None => errors.push(format!("theme.{field} is required")),
            Some(v) if !v.is_string() => {
                errors.push(format!("theme.{field} must be a string, got {}", type_name(v)))
            }
            Some(_) => {}
        }
    }

    match theme_obj.get("font_pairing") {
        None => errors.push("theme.font_pairing is required".to_string()),
        Some(pairing) => match pairing.as_object() {
            None => errors.push(format!(
                "theme.font_pairing must be an object, got {}",
                type_name(pairing)
            )),
            Some(pairing_obj) => {
                for field in ["heading", "body"] {
                    match pairing_obj.get(field) {
                        None => errors.push(format!("theme.font_pairing.{field} is required")),
                        Some(v) if !v.is_string() => errors.push(format!(
                            "theme.font_pairing.{field} must be a string, got {}",
                            type_name(v)
                        )),
                        Some(_) => {}
                    }
                }
            }
        },
    }

    if !errors.is_empty() {
        return false;
    }

    check_optional_sections(root, warnings);
    true
}

/// Type-check the optional layout/content sections field by field.
fn check_optional_sections(root: &serde_json::Map<String, Value>, warnings: &mut Vec<String>) {
    if let Some(layout) = root.get("layout") {
        match layout.as_object() {
            None => warnings.push(format!("layout should be an object, got {}", type_name(layout))),
            Some(layout_obj) => {
                for (field, expected) in LAYOUT_FIELDS {
                    if let Some(v) = layout_obj.get(field) {
                        let ok = match expected {
                            "string" => v.is_string(),
                            "number" => v.is_number(),
                            "boolean" => v.is_boolean(),
                            _ => true,
                        };
                        if !ok && !v.is_null() {
                            warnings.push(format!(
                                "layout.{field} should be a {expected}, got {}",
                                type_name(v)
                            ));
                        }
                    }
                }
            }
        }
    }

    if let Some(content) = root.get("content") {
        match content.as_object() {
            None => {
                warnings.push(format!("content should be an object, got {}", type_name(content)))
            }
            Some(content_obj) => {
                for field in CONTENT_STRING_FIELDS {
                    if let Some(v) = content_obj.get(field)
                        && !v.is_string()
                        && !v.is_null()
                    {
                        warnings.push(format!(
                            "content.{field} should be a string, got {}",
                            type_name(v)
                        ));
                    }
                }
                if let Some(captions) = content_obj.get("captions")
                    && !captions.is_array()
                    && !captions.is_null()
                {
                    warnings.push(format!(
                        "content.captions should be an array, got {}",
                        type_name(captions)
                    ));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid_theme() -> Value {
        json!({
            "theme": {
                "primary_color": "#1A1A1A",
                "accent_color": "#C0392B",
                "background_color": "#FAFAF8",
                "font_pairing": { "heading": "Playfair Display", "body": "Inter" }
            }
        })
    }

    #[test]
    fn test_valid_shape_passes() {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        assert!(check_shape(&valid_theme(), &mut errors, &mut warnings));
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_missing_theme_fails() {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        assert!(!check_shape(&json!({}), &mut errors, &mut warnings));
        assert_eq!(errors, vec!["theme is required".to_string()]);
    }

    #[test]
    fn test_mistyped_color_is_error() {
        let mut spec = valid_theme();
        spec["theme"]["primary_color"] = json!(42);
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        assert!(!check_shape(&spec, &mut errors, &mut warnings));
        assert!(errors.iter().any(|e| e.contains("primary_color")));
    }

    #[test]
    fn test_mistyped_optional_field_is_warning() {
        let mut spec = valid_theme();
        spec["layout"] = json!({ "page_size": 17 });
        spec["content"] = json!({ "title": ["not", "a", "string"] });
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        assert!(check_shape(&spec, &mut errors, &mut warnings));
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn test_non_object_root_fails() {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        assert!(!check_shape(&json!("spec"), &mut errors, &mut warnings));
        assert!(!errors.is_empty());
    }
}
