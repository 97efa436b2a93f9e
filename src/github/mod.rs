//! Pull request body input.
//!
//! - [`EventPayload`] - The webhook event written by GitHub Actions
//! - [`BodySource`] - Resolves and reads the body from an event, a file or stdin

pub mod payload;
pub mod source;

pub use payload::{EventPayload, PullRequest};
pub use source::BodySource;
