//! Error types for conversion operations

use std::fmt;

/// Errors that can occur while running a conversion
#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    /// The external converter could not be resolved on the search path
    ExecutableNotFound { executable: String, reason: String },
    /// The external converter ran but exited unsuccessfully.
    ///
    /// `code` is `None` when the process was terminated by a signal.
    ConversionFailed {
        executable: String,
        code: Option<i32>,
    },
    /// The embedded renderer was not available when the process started.
    /// Carries the reason captured by the availability probe.
    DependencyMissing(String),
    /// The backend cannot handle the requested reader/writer pair
    UnsupportedDialect {
        backend: String,
        from: String,
        to: String,
    },
    /// The converter produced output that is not valid UTF-8
    InvalidOutput(String),
    /// I/O failure while talking to the converter process
    Io(String),
    /// Filter not found in registry
    FilterNotFound(String),
}

impl ConvertError {
    /// Exit code reported by the external converter, if any.
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            ConvertError::ConversionFailed { code, .. } => *code,
            _ => None,
        }
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::ExecutableNotFound { executable, reason } => write!(
                f,
                "Converter executable '{executable}' not found ({reason}). \
                 Install pandoc or set MDCONV_PANDOC to its location"
            ),
            ConvertError::ConversionFailed {
                executable,
                code: Some(code),
            } => write!(f, "'{executable}' exited with status {code}"),
            ConvertError::ConversionFailed {
                executable,
                code: None,
            } => write!(f, "'{executable}' was terminated by a signal"),
            ConvertError::DependencyMissing(reason) => {
                write!(f, "markdown_to_html requires comrak: {reason}")
            }
            ConvertError::UnsupportedDialect { backend, from, to } => {
                write!(f, "Backend '{backend}' cannot convert {from} to {to}")
            }
            ConvertError::InvalidOutput(msg) => write!(f, "Invalid converter output: {msg}"),
            ConvertError::Io(msg) => write!(f, "I/O error: {msg}"),
            ConvertError::FilterNotFound(name) => write!(f, "Filter '{name}' not found"),
        }
    }
}

impl std::error::Error for ConvertError {}

impl From<std::io::Error> for ConvertError {
    fn from(err: std::io::Error) -> Self {
        ConvertError::Io(err.to_string())
    }
}
