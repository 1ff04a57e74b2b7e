//! Free-text scanning and HTML-entity escaping.

use crate::GateConfig;
use booksmith_error::{BooksmithResult, GateError, GateErrorKind};
use regex::Regex;
use tracing::debug;

/// Scanner for dangerous markup in free-text fields.
///
/// The pattern list is fixed: script tags, script-scheme URIs, inline event
/// handlers, embedding tags, and CSS function injection. Any match is an
/// error-level finding; length problems are warnings.
pub struct ContentScanner {
    patterns: Vec<(&'static str, Regex)>,
}

impl ContentScanner {
    /// Compile the fixed dangerous-pattern list.
    pub fn new() -> Self {
        let sources: [(&'static str, &'static str); 8] = [
            ("script tag", r"(?i)<\s*script"),
            ("javascript: URI", r"(?i)javascript\s*:"),
            ("vbscript: URI", r"(?i)vbscript\s*:"),
            ("data: URI", r"(?i)data\s*:"),
            ("inline event handler", r"(?i)\bon[a-z]+\s*="),
            ("embedding tag", r"(?i)<\s*(?:iframe|object|embed|link|style)"),
            ("CSS expression()", r"(?i)expression\s*\("),
            ("CSS url()", r"(?i)url\s*\("),
        ];
        let patterns = sources
            .into_iter()
            .map(|(label, source)| {
                (label, Regex::new(source).expect("Valid dangerous-content regex"))
            })
            .collect();
        Self { patterns }
    }

    /// Extend the fixed list with caller-supplied patterns.
    ///
    /// Each extra pattern is labeled by its own source in findings.
    pub fn with_extra_patterns(mut self, sources: &[String]) -> BooksmithResult<Self> {
        for source in sources {
            let regex = Regex::new(source).map_err(|e| {
                GateError::new(GateErrorKind::InvalidPattern {
                    pattern: source.clone(),
                    message: e.to_string(),
                })
            })?;
            self.patterns.push(("custom pattern", regex));
        }
        Ok(self)
    }

    /// Scan one named field into the accumulator.
    pub fn scan(
        &self,
        field: &str,
        text: &str,
        config: &GateConfig,
        errors: &mut Vec<String>,
        warnings: &mut Vec<String>,
    ) {
        for (label, regex) in &self.patterns {
            if regex.is_match(text) {
                debug!(field, pattern = label, "Field matched dangerous pattern");
                errors.push(format!("{field} contains dangerous content ({label})"));
            }
        }
        if text.len() > config.max_field_length {
            warnings.push(format!(
                "{field} is unusually long ({} chars, limit {})",
                text.len(),
                config.max_field_length
            ));
        }
    }
}

impl Default for ContentScanner {
    fn default() -> Self {
        Self::new()
    }
}

/// HTML-entity-escape a free-text field.
///
/// Applied to raw text only: escaping already-escaped text doubles the
/// entities, so callers must sanitize a spec at most once.
pub fn sanitize_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(text: &str) -> (Vec<String>, Vec<String>) {
        let scanner = ContentScanner::new();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        scanner.scan("title", text, &GateConfig::default(), &mut errors, &mut warnings);
        (errors, warnings)
    }

    #[test]
    fn test_script_tag_is_error() {
        let (errors, _) = scan("<script>alert(1)</script>");
        assert!(errors.iter().any(|e| e.contains("title")));
    }

    #[test]
    fn test_scheme_uris_are_errors() {
        assert!(!scan("javascript:alert(1)").0.is_empty());
        assert!(!scan("VBSCRIPT:msgbox").0.is_empty());
        assert!(!scan("data:text/html;base64,AAAA").0.is_empty());
    }

    #[test]
    fn test_event_handler_is_error() {
        let (errors, _) = scan("<img onerror=alert(1)>");
        assert!(!errors.is_empty());
    }

    #[test]
    fn test_embedding_tags_are_errors() {
        for text in ["<iframe src=x>", "<OBJECT>", "< embed >", "<link rel=x>", "<style>"] {
            assert!(!scan(text).0.is_empty(), "expected error for {text:?}");
        }
    }

    #[test]
    fn test_css_functions_are_errors() {
        assert!(!scan("width: expression(alert(1))").0.is_empty());
        assert!(!scan("background: url(javascript:x)").0.is_empty());
    }

    #[test]
    fn test_clean_text_passes() {
        let (errors, warnings) = scan("A year of miles: January to December");
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_overlong_field_is_warning_only() {
        let (errors, warnings) = scan(&"x".repeat(10_001));
        assert!(errors.is_empty());
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_sanitize_escapes_entities() {
        assert_eq!(
            sanitize_text("<script>alert(1)</script>"),
            "&lt;script&gt;alert(1)&lt;/script&gt;"
        );
        assert_eq!(sanitize_text(r#"Tom & "Jerry"'s"#), "Tom &amp; &quot;Jerry&quot;&#x27;s");
    }

    #[test]
    fn test_sanitize_leaves_plain_text_alone() {
        assert_eq!(sanitize_text("Morning Run 10k"), "Morning Run 10k");
    }

    #[test]
    fn test_extra_patterns_extend_the_scan() {
        let scanner = ContentScanner::new()
            .with_extra_patterns(&[r"(?i)\bforbidden\b".to_string()])
            .unwrap();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        scanner.scan("title", "a forbidden word", &GateConfig::default(), &mut errors, &mut warnings);
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_invalid_extra_pattern_is_rejected() {
        let result = ContentScanner::new().with_extra_patterns(&["(unclosed".to_string()]);
        assert!(result.is_err());
    }
}
