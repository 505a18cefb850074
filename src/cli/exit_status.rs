use std::process::ExitCode;

/// Exit status for CLI commands, following common conventions for
/// source-rewriting tools.
///
/// - `Success` (0): Command completed, no diagnostics of error severity
/// - `Failure` (1): Command completed but produced error diagnostics
/// - `Error` (2): Command failed due to internal error (config error, I/O error, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed, no diagnostics of error severity.
    Success,
    /// Command completed but produced error diagnostics.
    Failure,
    /// Command failed due to internal error (config error, I/O error, etc.).
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
