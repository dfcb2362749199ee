use std::process::ExitCode;

/// Process exit status for trmerge commands.
///
/// - `Success` (0): Command completed
/// - `Failure` (1): Command completed but reported a problem (e.g. `coverage --strict`
///   found keys falling back to English)
/// - `Error` (2): Command could not run (config error, unreadable or malformed bundle)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// The command ran and had nothing to report.
    Success,
    /// The command ran but a check it was asked to enforce did not hold.
    Failure,
    /// The command could not run: bad config, missing or malformed bundle.
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
