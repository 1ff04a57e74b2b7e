//! Error types for the Booksmith design pipeline.
//!
//! This crate provides the foundation error types used throughout the Booksmith workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use booksmith_error::{BooksmithResult, SessionError, SessionErrorKind};
//!
//! fn lookup() -> BooksmithResult<String> {
//!     Err(SessionError::new(SessionErrorKind::NotFound("abc".to_string())))?
//! }
//!
//! match lookup() {
//!     Ok(id) => println!("Got: {}", id),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod design;
mod error;
mod gate;
mod session;

pub use design::{DesignError, DesignErrorKind};
pub use error::{BooksmithError, BooksmithErrorKind, BooksmithResult};
pub use gate::{GateError, GateErrorKind};
pub use session::{SessionError, SessionErrorKind};
