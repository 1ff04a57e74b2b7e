//! Multi-stage design orchestration engine for Booksmith.
//!
//! This crate drives a design session through three sequential generation
//! stages (theming, narrative chaptering, page layout), refines important
//! pages through a bounded self-correction loop, gates the result through
//! the validation/sanitization pass, and records progress on the session
//! record after each step.
//!
//! The orchestrator is storage- and generator-agnostic: collaborators come
//! in through the `booksmith_interface` traits, with deterministic default
//! implementations shipped here so the pipeline runs without any model
//! backend.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod art_director;
mod curator;
mod designer;
mod feedback;
mod layout;
mod narrator;
mod orchestrator;
mod store;
mod styleguide;

pub use curator::SmartDraftCurator;
pub use feedback::{FeedbackConfig, FeedbackOutcome, RuleJudge, design_with_feedback};
pub use orchestrator::BookDesigner;
pub use store::InMemorySessionStore;
pub use styleguide::DeterministicStyleGuide;
