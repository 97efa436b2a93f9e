//! Where the pull request body comes from.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::payload::EventPayload;
use crate::error::{CheckError, Result};

/// A configured source for the pull request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BodySource {
    /// A markdown file holding the body.
    File(PathBuf),
    /// The body is piped on standard input.
    Stdin,
    /// A webhook event payload (`GITHUB_EVENT_PATH`).
    Event(PathBuf),
}

impl BodySource {
    /// Pick a source from the configured options.
    ///
    /// An explicit body file wins over the event payload; `-` means stdin.
    pub fn resolve(body_file: Option<&Path>, event_path: Option<&Path>) -> Result<Self> {
        match (body_file, event_path) {
            (Some(path), _) if path == Path::new("-") => Ok(Self::Stdin),
            (Some(path), _) => Ok(Self::File(path.to_path_buf())),
            (None, Some(path)) => Ok(Self::Event(path.to_path_buf())),
            (None, None) => Err(CheckError::NoBodySource),
        }
    }

    /// Read the body.
    ///
    /// Returns `None` when the source legitimately has no body, such as a
    /// pull request with an empty description or an event that is not about
    /// a pull request.
    pub fn read(&self) -> Result<Option<String>> {
        match self {
            Self::File(path) => {
                let body = fs::read_to_string(path)
                    .with_context(|| format!("Failed to read body file {}", path.display()))?;
                Ok(Some(body))
            }
            Self::Stdin => Ok(Some(io::read_to_string(io::stdin())?)),
            Self::Event(path) => {
                let payload = EventPayload::load(path)?;
                match &payload.pull_request {
                    Some(pr) => {
                        tracing::debug!(
                            number = ?pr.number,
                            url = ?pr.html_url,
                            "Loaded pull request from event payload"
                        );
                    }
                    None => tracing::warn!(
                        "Event payload at {} has no pull request; nothing to check",
                        path.display()
                    ),
                }
                Ok(payload.pull_request_body().map(str::to_string))
            }
        }
    }
}
