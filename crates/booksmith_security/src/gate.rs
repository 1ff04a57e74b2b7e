//! The combined validation and sanitization gate.

use crate::{
    ContentFields, ContentScanner, DesignSpec, GateConfig, LayoutSettings, ThemeSpec,
    ValidationResult, color, content, fonts, schema,
};
use booksmith_error::{BooksmithResult, GateError, GateErrorKind};
use booksmith_interface::FontRegistry;
use serde_json::Value;
use tracing::{debug, instrument};

/// Validation and sanitization gate for design specs.
///
/// Runs schema, font, color, and content checks in fixed order against a
/// shared accumulator; a failed shape check short-circuits the rest. The
/// gate never drops an error-triggering field silently — rejecting the
/// whole design when `valid` is false is the caller's responsibility.
pub struct DesignGate {
    config: GateConfig,
    scanner: ContentScanner,
    registry: Box<dyn FontRegistry>,
}

impl DesignGate {
    /// Create a gate over the given font registry with default tuning.
    pub fn new(registry: Box<dyn FontRegistry>) -> Self {
        Self::with_config(registry, GateConfig::default())
    }

    /// Create a gate with explicit tuning.
    pub fn with_config(registry: Box<dyn FontRegistry>, config: GateConfig) -> Self {
        Self {
            config,
            scanner: ContentScanner::new(),
            registry,
        }
    }

    /// Get the gate configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Validate a typed spec.
    ///
    /// Sanitization escapes the raw spec only: gating an already-sanitized
    /// spec re-escapes its entities, so validate each spec at most once.
    ///
    /// # Errors
    ///
    /// Returns an error only if the spec cannot be serialized for the shape
    /// check; findings are reported through the result, never thrown.
    pub fn validate(&self, spec: &DesignSpec) -> BooksmithResult<ValidationResult> {
        let value = serde_json::to_value(spec).map_err(|e| {
            GateError::new(GateErrorKind::Serialization(e.to_string()))
        })?;
        Ok(self.validate_value(&value))
    }

    /// Validate an untrusted JSON spec.
    #[instrument(skip(self, value))]
    pub fn validate_value(&self, value: &Value) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        // Check 1: schema shape. Failure short-circuits the typed checks.
        if !schema::check_shape(value, &mut errors, &mut warnings) {
            debug!(errors = errors.len(), "Shape check failed, skipping remaining checks");
            return ValidationResult {
                valid: false,
                errors,
                warnings,
                sanitized_spec: None,
            };
        }

        // Shape check guarantees the theme deserializes
        let theme: ThemeSpec = match serde_json::from_value(value["theme"].clone()) {
            Ok(theme) => theme,
            Err(e) => {
                errors.push(format!("theme could not be decoded: {e}"));
                return ValidationResult {
                    valid: false,
                    errors,
                    warnings,
                    sanitized_spec: None,
                };
            }
        };
        // Mistyped optional sections were already warned about; drop them
        let layout: Option<LayoutSettings> = value
            .get("layout")
            .and_then(|v| serde_json::from_value(v.clone()).ok());
        let content: Option<ContentFields> = value
            .get("content")
            .and_then(|v| serde_json::from_value(v.clone()).ok());

        // Check 2: fonts (warnings only, normalization substitutes)
        fonts::check_fonts(&theme.font_pairing, self.registry.as_ref(), &mut warnings);

        // Check 3: colors and WCAG contrast
        color::check_colors(&theme, &self.config, &mut errors, &mut warnings);

        // Check 4: free-text content scan
        if let Some(fields) = &content {
            self.scan_content(fields, &mut errors, &mut warnings);
        }

        let valid = errors.is_empty();
        let sanitized_spec = valid.then(|| {
            self.sanitize(&DesignSpec {
                theme: theme.clone(),
                layout: layout.clone(),
                content: content.clone(),
            })
        });

        debug!(
            valid,
            errors = errors.len(),
            warnings = warnings.len(),
            "Gate checks complete"
        );

        ValidationResult {
            valid,
            errors,
            warnings,
            sanitized_spec,
        }
    }

    fn scan_content(
        &self,
        fields: &ContentFields,
        errors: &mut Vec<String>,
        warnings: &mut Vec<String>,
    ) {
        let named = [
            ("content.title", &fields.title),
            ("content.subtitle", &fields.subtitle),
            ("content.athlete_name", &fields.athlete_name),
            ("content.foreword", &fields.foreword),
        ];
        for (name, text) in named {
            if let Some(text) = text {
                self.scanner.scan(name, text, &self.config, errors, warnings);
            }
        }
        for (i, caption) in fields.captions.iter().enumerate() {
            let name = format!("content.captions[{i}]");
            self.scanner.scan(&name, caption, &self.config, errors, warnings);
        }
    }

    /// Produce the sanitized copy: fonts substituted, text entity-escaped.
    fn sanitize(&self, spec: &DesignSpec) -> DesignSpec {
        let font_pairing =
            fonts::normalize_pairing(&spec.theme.font_pairing, &self.config, self.registry.as_ref());
        let content = spec.content.as_ref().map(|fields| ContentFields {
            title: fields.title.as_deref().map(content::sanitize_text),
            subtitle: fields.subtitle.as_deref().map(content::sanitize_text),
            athlete_name: fields.athlete_name.as_deref().map(content::sanitize_text),
            foreword: fields.foreword.as_deref().map(content::sanitize_text),
            captions: fields
                .captions
                .iter()
                .map(|c| content::sanitize_text(c))
                .collect(),
        });
        DesignSpec {
            theme: ThemeSpec {
                font_pairing,
                ..spec.theme.clone()
            },
            layout: spec.layout.clone(),
            content,
        }
    }
}

impl std::fmt::Debug for DesignGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DesignGate")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuiltinFontRegistry;
    use booksmith_core::FontPairing;

    fn gate() -> DesignGate {
        DesignGate::new(Box::new(BuiltinFontRegistry::new()))
    }

    fn spec() -> DesignSpec {
        DesignSpec {
            theme: ThemeSpec {
                primary_color: "#1A1A1A".to_string(),
                accent_color: "#C0392B".to_string(),
                background_color: "#FAFAF8".to_string(),
                font_pairing: FontPairing {
                    heading: "Playfair Display".to_string(),
                    body: "Inter".to_string(),
                },
            },
            layout: None,
            content: Some(ContentFields {
                title: Some("A Year in Motion".to_string()),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_clean_spec_is_valid_with_sanitized_copy() {
        let result = gate().validate(&spec()).unwrap();
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.sanitized_spec.is_some());
    }

    #[test]
    fn test_sanitized_present_iff_no_errors() {
        let mut bad = spec();
        bad.theme.primary_color = "#CCCCCC".to_string();
        bad.theme.background_color = "#FFFFFF".to_string();
        let result = gate().validate(&bad).unwrap();
        assert!(!result.valid);
        assert!(result.sanitized_spec.is_none());
    }

    #[test]
    fn test_script_in_title_rejects_and_names_field() {
        let mut bad = spec();
        bad.content.as_mut().unwrap().title = Some("<script>alert(1)</script>".to_string());
        let result = gate().validate(&bad).unwrap();
        assert!(!result.valid);
        assert!(result.errors.iter().any(|e| e.contains("content.title")));
    }

    #[test]
    fn test_unknown_font_warns_but_sanitizes() {
        let mut odd = spec();
        odd.theme.font_pairing.heading = "Comic Sans MS".to_string();
        let result = gate().validate(&odd).unwrap();
        assert!(result.valid);
        assert!(result.warnings.iter().any(|w| w.contains("Comic Sans MS")));
        let sanitized = result.sanitized_spec.unwrap();
        assert_eq!(sanitized.theme.font_pairing.heading, "Playfair Display");
    }

    #[test]
    fn test_escaping_applies_to_sanitized_content() {
        let mut quoted = spec();
        quoted.content.as_mut().unwrap().title = Some("Hills & Valleys".to_string());
        let result = gate().validate(&quoted).unwrap();
        let sanitized = result.sanitized_spec.unwrap();
        assert_eq!(
            sanitized.content.unwrap().title.unwrap(),
            "Hills &amp; Valleys"
        );
    }

    #[test]
    fn test_shape_failure_short_circuits() {
        let result = gate().validate_value(&serde_json::json!({"theme": "minimal"}));
        assert!(!result.valid);
        // Only the shape finding, no font/color/content findings
        assert_eq!(result.errors.len(), 1);
        assert!(result.warnings.is_empty());
    }
}
