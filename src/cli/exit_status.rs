use std::process::ExitCode;

/// Exit status of the CLI.
///
/// - `Success` (0): Command completed. Skipped literals do not change this.
/// - `Error` (2): Command aborted (unreadable directory, unwritable output, bad config, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed.
    Success,
    /// Command aborted before writing its result.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
