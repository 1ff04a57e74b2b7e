//! Color parsing and WCAG contrast math.

use crate::{GateConfig, ThemeSpec};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

// Fixed pattern, compiled once; compilation cannot fail
static HEX_COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3}|[0-9a-fA-F]{6})$").expect("Valid hex color regex")
});

/// Whether a string is a 3- or 6-digit hex color.
pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Parse a 3- or 6-digit hex color into RGB channels.
fn parse_hex(value: &str) -> Option<(u8, u8, u8)> {
    let digits = value.strip_prefix('#')?;
    let expanded = match digits.len() {
        3 => digits
            .chars()
            .flat_map(|c| [c, c])
            .collect::<String>(),
        6 => digits.to_string(),
        _ => return None,
    };
    let r = u8::from_str_radix(&expanded[0..2], 16).ok()?;
    let g = u8::from_str_radix(&expanded[2..4], 16).ok()?;
    let b = u8::from_str_radix(&expanded[4..6], 16).ok()?;
    Some((r, g, b))
}

/// WCAG relative luminance of a hex color, 0.0 (black) to 1.0 (white).
///
/// Returns `None` when the string is not a parseable hex color.
pub fn relative_luminance(value: &str) -> Option<f64> {
    let (r, g, b) = parse_hex(value)?;
    let linearize = |channel: u8| {
        let c = channel as f64 / 255.0;
        if c <= 0.03928 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Some(0.2126 * linearize(r) + 0.7152 * linearize(g) + 0.0722 * linearize(b))
}

/// WCAG contrast ratio between two hex colors, 1.0 to 21.0.
///
/// Returns `None` when either string is not a parseable hex color.
pub fn contrast_ratio(a: &str, b: &str) -> Option<f64> {
    let la = relative_luminance(a)?;
    let lb = relative_luminance(b)?;
    let (lighter, darker) = if la >= lb { (la, lb) } else { (lb, la) };
    Some((lighter + 0.05) / (darker + 0.05))
}

/// Run the color check against the accumulator.
///
/// Malformed hex strings are errors. Primary-vs-background contrast below
/// the large-text floor is an error, below the normal-text floor a warning;
/// accent-vs-background below the large-text floor and primary-vs-accent
/// below the similarity floor are warnings.
pub(crate) fn check_colors(
    theme: &ThemeSpec,
    config: &GateConfig,
    errors: &mut Vec<String>,
    warnings: &mut Vec<String>,
) {
    let fields = [
        ("primary_color", &theme.primary_color),
        ("accent_color", &theme.accent_color),
        ("background_color", &theme.background_color),
    ];

    let mut malformed = false;
    for (name, value) in fields {
        if !is_hex_color(value) {
            debug!(field = name, value = %value, "Color is not a valid hex string");
            errors.push(format!("{name} '{value}' is not a 3- or 6-digit hex color"));
            malformed = true;
        }
    }
    if malformed {
        // Contrast math needs parseable colors
        return;
    }

    if let Some(ratio) = contrast_ratio(&theme.primary_color, &theme.background_color) {
        if ratio < config.large_text_contrast {
            errors.push(format!(
                "primary/background contrast {ratio:.2} is below the large-text floor of {:.1}",
                config.large_text_contrast
            ));
        } else if ratio < config.normal_text_contrast {
            warnings.push(format!(
                "primary/background contrast {ratio:.2} is below the WCAG AA normal-text floor of {:.1}",
                config.normal_text_contrast
            ));
        }
    }

    if let Some(ratio) = contrast_ratio(&theme.accent_color, &theme.background_color)
        && ratio < config.large_text_contrast
    {
        warnings.push(format!(
            "accent/background contrast {ratio:.2} is below the large-text floor of {:.1}",
            config.large_text_contrast
        ));
    }

    if let Some(ratio) = contrast_ratio(&theme.primary_color, &theme.accent_color)
        && ratio < config.similarity_floor
    {
        warnings.push(format!(
            "primary and accent colors are too similar (contrast {ratio:.2}, floor {:.1})",
            config.similarity_floor
        ));
    }
}
