//! Trait seams for Booksmith's external collaborators.
//!
//! The design pipeline consumes a style guide generator, a curator, a font
//! registry, and a visual judge, and exposes its sessions through a store
//! interface. All four are specified here as traits so implementations can
//! be swapped (model-backed, deterministic, or test doubles) without
//! touching the pipeline.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::{Curator, FontRegistry, SessionStore, StyleGuideGenerator, VisualJudge};
pub use types::{BookEntry, JudgeVerdict, StyleGuideRequest, StyleGuideResponse};
