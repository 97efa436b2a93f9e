//! CI environment detection.

/// Check if running inside a GitHub Actions job.
///
/// Workflow commands such as `::error::` are only understood by the
/// Actions runner, so other environments get plain console output.
pub fn is_github_actions() -> bool {
    std::env::var("GITHUB_ACTIONS").is_ok_and(|value| value == "true")
}
