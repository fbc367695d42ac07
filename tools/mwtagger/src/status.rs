use std::process::ExitCode;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    CommandLine = 1,
    MalformedInput = 2,
    Unhandled = 3,
    MissingFile = 4,
}

impl ExitStatus {
    /// Keeps the first failure seen.
    pub fn or(self, other: ExitStatus) -> ExitStatus {
        match self {
            ExitStatus::Success => other,
            failed => failed,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status as u8)
    }
}
