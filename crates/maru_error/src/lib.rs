//! Error types for the Maru navigation core.
//!
//! # Error Hierarchy
//!
//! Every concern follows the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All constructors use `#[track_caller]` for automatic location capture
//!
//! The navigation and tour engines never surface errors at runtime; these
//! types cover loading content and configuration, and the seams where an
//! animation engine or audio backend can report a failure that the core then
//! logs and absorbs.
//!
//! # Examples
//!
//! ```
//! use maru_error::{ContentError, ContentErrorKind, MaruResult};
//!
//! fn load() -> MaruResult<()> {
//!     Err(ContentError::new(ContentErrorKind::NoChapters))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod animation;
mod audio;
mod builder;
mod config;
mod content;
mod error;

pub use animation::{AnimationError, AnimationErrorKind};
pub use audio::AudioError;
pub use builder::{BuilderError, BuilderErrorKind};
pub use config::ConfigError;
pub use content::{ContentError, ContentErrorKind};
pub use error::{MaruError, MaruErrorKind, MaruResult};
