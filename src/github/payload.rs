//! Webhook event payloads.
//!
//! Actions writes the event that triggered a workflow to the file named by
//! `GITHUB_EVENT_PATH`. Only the pull request description matters here; all
//! other fields are ignored.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CheckError, Result};

/// The subset of a webhook event payload used for the check.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventPayload {
    /// Present for `pull_request` and `pull_request_target` events.
    #[serde(default)]
    pub pull_request: Option<PullRequest>,
}

/// Pull request fields from an event payload.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    #[serde(default)]
    pub number: Option<u64>,
    /// Description markdown. `null` when the description is empty.
    #[serde(default)]
    pub body: Option<String>,
    /// Link to the pull request on the web.
    #[serde(default)]
    pub html_url: Option<String>,
}

impl EventPayload {
    /// Parse a payload from a JSON string.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load a payload from the given path.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(CheckError::EventNotFound {
                path: path.to_path_buf(),
            });
        }

        let content = fs::read_to_string(path)?;
        Self::from_json(&content).map_err(|e| CheckError::EventParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// The pull request description, if the event has one.
    pub fn pull_request_body(&self) -> Option<&str> {
        self.pull_request.as_ref()?.body.as_deref()
    }
}
