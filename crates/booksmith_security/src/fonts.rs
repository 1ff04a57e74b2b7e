//! Font checks and substitution.

use crate::GateConfig;
use booksmith_core::FontPairing;
use booksmith_interface::FontRegistry;
use tracing::debug;

/// Run the font check against the accumulator.
///
/// Unknown fonts are warnings, not errors: the sanitization step substitutes
/// them. Same-font-for-both and a non-body face in the body slot are also
/// warnings.
pub(crate) fn check_fonts(
    pairing: &FontPairing,
    registry: &dyn FontRegistry,
    warnings: &mut Vec<String>,
) {
    let families = registry.all_families();

    if !families.contains(&pairing.heading) {
        debug!(font = %pairing.heading, "Unknown heading font");
        warnings.push(format!(
            "heading font '{}' is not registered and will be substituted",
            pairing.heading
        ));
    }
    if !families.contains(&pairing.body) {
        debug!(font = %pairing.body, "Unknown body font");
        warnings.push(format!(
            "body font '{}' is not registered and will be substituted",
            pairing.body
        ));
    }

    if pairing.heading == pairing.body {
        warnings.push(format!(
            "heading and body use the same font '{}'",
            pairing.heading
        ));
    }

    // A registered face that isn't in the body set is display or handwritten
    if families.contains(&pairing.body) && !registry.body_fonts().contains(&pairing.body) {
        warnings.push(format!(
            "'{}' is a display or handwritten face, not suited for body text",
            pairing.body
        ));
    }
}

/// Substitute an unregistered font with a safe fallback.
///
/// Prefers the configured substitute when the registry carries it, else the
/// first registered body font (the registry guarantees at least one).
pub(crate) fn substitute_font(
    font: &str,
    preferred: &str,
    registry: &dyn FontRegistry,
) -> String {
    let families = registry.all_families();
    if families.contains(&font.to_string()) {
        return font.to_string();
    }
    if families.contains(&preferred.to_string()) {
        return preferred.to_string();
    }
    registry
        .body_fonts()
        .first()
        .cloned()
        .unwrap_or_else(|| preferred.to_string())
}

/// Produce a pairing with unknown fonts replaced.
pub(crate) fn normalize_pairing(
    pairing: &FontPairing,
    config: &GateConfig,
    registry: &dyn FontRegistry,
) -> FontPairing {
    FontPairing {
        heading: substitute_font(&pairing.heading, &config.fallback_heading, registry),
        body: substitute_font(&pairing.body, &config.fallback_body, registry),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BuiltinFontRegistry;

    fn pairing(heading: &str, body: &str) -> FontPairing {
        FontPairing {
            heading: heading.to_string(),
            body: body.to_string(),
        }
    }

    #[test]
    fn test_known_pairing_is_clean() {
        let registry = BuiltinFontRegistry::new();
        let mut warnings = Vec::new();
        check_fonts(&pairing("Playfair Display", "Inter"), &registry, &mut warnings);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_unknown_font_is_warning() {
        let registry = BuiltinFontRegistry::new();
        let mut warnings = Vec::new();
        check_fonts(&pairing("Comic Sans MS", "Inter"), &registry, &mut warnings);
        assert_eq!(warnings.len(), 1);
        assert!(warnings[0].contains("Comic Sans MS"));
    }

    #[test]
    fn test_same_font_for_both_is_warning() {
        let registry = BuiltinFontRegistry::new();
        let mut warnings = Vec::new();
        check_fonts(&pairing("Inter", "Inter"), &registry, &mut warnings);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_handwritten_body_is_warning() {
        let registry = BuiltinFontRegistry::new();
        let mut warnings = Vec::new();
        check_fonts(&pairing("Playfair Display", "Caveat"), &registry, &mut warnings);
        assert!(warnings.iter().any(|w| w.contains("body text")));
    }

    #[test]
    fn test_substitution_prefers_configured_fallback() {
        let registry = BuiltinFontRegistry::new();
        let normalized = normalize_pairing(
            &pairing("Comic Sans MS", "Papyrus"),
            &GateConfig::default(),
            &registry,
        );
        assert_eq!(normalized.heading, "Playfair Display");
        assert_eq!(normalized.body, "Inter");
    }

    #[test]
    fn test_substitution_keeps_registered_fonts() {
        let registry = BuiltinFontRegistry::new();
        let normalized = normalize_pairing(
            &pairing("Oswald", "Lora"),
            &GateConfig::default(),
            &registry,
        );
        assert_eq!(normalized.heading, "Oswald");
        assert_eq!(normalized.body, "Lora");
    }
}
