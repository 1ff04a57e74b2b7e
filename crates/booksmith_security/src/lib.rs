//! Validation and sanitization gate for Booksmith design specs.
//!
//! Four independent checks run in fixed order against a shared
//! errors/warnings accumulator: schema shape, fonts, colors (WCAG
//! contrast), and free-text content (XSS patterns). A spec is trusted for
//! rendering only when the gate reports no errors, at which point a
//! sanitized copy (fonts substituted, text entity-escaped) is produced.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod color;
mod content;
mod fonts;
mod gate;
mod registry;
mod schema;
mod types;

pub use color::{contrast_ratio, is_hex_color, relative_luminance};
pub use content::{ContentScanner, sanitize_text};
pub use gate::DesignGate;
pub use registry::BuiltinFontRegistry;
pub use types::{ContentFields, DesignSpec, GateConfig, LayoutSettings, ThemeSpec, ValidationResult};
