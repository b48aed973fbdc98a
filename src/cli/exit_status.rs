use std::process::ExitCode;

/// Exit status for CLI commands.
///
/// - `Success` (0): Files generated (possibly with warnings)
/// - `Failure` (1): The input prevented generation, nothing was written
/// - `Error` (2): Internal error (unreadable config, I/O failure, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Files generated, possibly with warnings.
    Success,
    /// Missing sources, malformed reference document, strict-mode violation.
    Failure,
    /// Internal error (config error, write failure, etc.).
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
