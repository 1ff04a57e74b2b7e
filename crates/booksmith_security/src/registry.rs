//! Built-in font registry.

use booksmith_interface::FontRegistry;

/// Curated family table: (name, has_italic, body-suitable).
const FAMILIES: [(&str, bool, bool); 9] = [
    ("Playfair Display", true, false),
    ("Oswald", false, false),
    ("Montserrat", true, true),
    ("Inter", true, true),
    ("Lora", true, true),
    ("Merriweather", true, true),
    ("Open Sans", true, true),
    ("Caveat", false, false),
    ("Permanent Marker", false, false),
];

/// A small curated registry of renderer-bundled fonts.
///
/// Stands in for a real font service; the gate only needs membership,
/// variant, and body-suitability queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFontRegistry;

impl BuiltinFontRegistry {
    /// Create the registry.
    pub fn new() -> Self {
        Self
    }
}

impl FontRegistry for BuiltinFontRegistry {
    fn all_families(&self) -> Vec<String> {
        FAMILIES.iter().map(|(name, _, _)| name.to_string()).collect()
    }

    fn families_with_variants(&self) -> Vec<(String, Vec<String>)> {
        FAMILIES
            .iter()
            .map(|(name, italic, _)| {
                let mut variants = vec!["regular".to_string(), "bold".to_string()];
                if *italic {
                    variants.push("italic".to_string());
                }
                (name.to_string(), variants)
            })
            .collect()
    }

    fn has_italic(&self, family: &str) -> bool {
        FAMILIES
            .iter()
            .any(|(name, italic, _)| *name == family && *italic)
    }

    fn body_fonts(&self) -> Vec<String> {
        FAMILIES
            .iter()
            .filter(|(_, _, body)| *body)
            .map(|(name, _, _)| name.to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_membership() {
        let registry = BuiltinFontRegistry::new();
        assert!(registry.all_families().contains(&"Inter".to_string()));
        assert!(!registry.all_families().contains(&"Comic Sans MS".to_string()));
    }

    #[test]
    fn test_italic_variants() {
        let registry = BuiltinFontRegistry::new();
        assert!(registry.has_italic("Lora"));
        assert!(!registry.has_italic("Oswald"));
        assert!(!registry.has_italic("Unknown"));
    }

    #[test]
    fn test_body_fonts_exclude_display_faces() {
        let registry = BuiltinFontRegistry::new();
        let body = registry.body_fonts();
        assert!(body.contains(&"Inter".to_string()));
        assert!(!body.contains(&"Caveat".to_string()));
        assert!(!body.contains(&"Playfair Display".to_string()));
    }
}
