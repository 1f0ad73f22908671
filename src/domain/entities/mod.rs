//! Core domain entities for the subscription write path.
//!
//! # Entity Types
//!
//! - [`ValidatedEmail`] - A candidate string that passed [`validate`]
//! - [`Outcome`] - The tagged success/failure value returned by a subscribe call
//!
//! Candidates themselves are plain `&str` values; they are never stored.

pub mod email;
pub mod outcome;

pub use email::{EMAIL_SHAPE_PATTERN, EmailRejection, ValidatedEmail, validate};
pub use outcome::Outcome;
