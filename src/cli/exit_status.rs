use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Command completed and produced its output
/// - `Failure` (1): Command completed but had nothing to do (e.g. config already exists)
/// - `Error` (2): Command failed (invalid config, malformed translation file, bad directive, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Command completed and produced its output.
    Success,
    /// Command completed but had nothing to do.
    Failure,
    /// Command failed due to an error.
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
