//! Booksmith - Fitness Year Books, Designed
//!
//! Booksmith turns a year of recorded fitness activities into a validated,
//! page-by-page book layout. A design session moves through three stages:
//! an art director picks a theme and visual direction, a narrator groups
//! the year into month chapters and flags highlights, and a designer lays
//! out every page and refines the important ones through a bounded
//! self-correction loop. The result is gated for color contrast, font
//! availability, and unsafe text before the final artifact is assembled.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use booksmith::{BookDesigner, DesignOptions, SessionInput};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let designer = BookDesigner::deterministic();
//!
//!     let session = designer
//!         .run_design_session(SessionInput {
//!             activities: vec![],
//!             photos: vec![],
//!             options: DesignOptions::default(),
//!         })
//!         .await?;
//!
//!     let artifact = session.output.artifact.expect("completed session");
//!     println!("{} pages designed", artifact.pages.len());
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Booksmith is organized as a workspace with focused crates:
//!
//! - `booksmith_core` - Activity, theme, chapter, page, and session types
//! - `booksmith_interface` - Trait seams for generators, curators, judges,
//!   font registries, and session stores
//! - `booksmith_error` - Error types
//! - `booksmith_security` - The validation and sanitization gate
//! - `booksmith_design` - The stages, the self-correction loop, and the
//!   session orchestrator
//!
//! This crate (`booksmith`) re-exports everything for convenience.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub use booksmith_core::*;
pub use booksmith_design::*;
pub use booksmith_error::*;
pub use booksmith_interface::*;
pub use booksmith_security::*;

mod observability;

pub use observability::{ObservabilityConfig, init_observability, init_observability_with_config};
