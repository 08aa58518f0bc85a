//! External converter backend (pandoc)
//!
//! Every conversion spawns one `pandoc` process:
//!
//!     <exe> -f <from> -t <to> <extra arguments...>
//!
//! The source text goes to the child's stdin, the converted text is read back
//! from its stdout, and stderr is inherited so pandoc's diagnostics reach the
//! caller's terminal untouched. The exit status is the only failure signal
//! consulted. There is no retry and no process reuse; a caller that needs a
//! timeout has to bound the wait itself.

use crate::backend::Backend;
use crate::error::ConvertError;
use crate::request::{ConversionRequest, ConversionResult};
use std::env;
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::{Command, ExitStatus, Stdio};
use std::str::FromStr;
use std::thread;
use which::which;

/// Executable used when nothing else is configured.
pub const DEFAULT_EXECUTABLE: &str = "pandoc";

/// Environment variable overriding the executable name or path.
pub const EXECUTABLE_ENV: &str = "MDCONV_PANDOC";

/// Oldest pandoc release whose reader/writer flags we rely on.
pub const MINIMUM_VERSION: &str = "1.12.1";

/// Backend that shells out to pandoc.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PandocBackend {
    executable: String,
}

impl PandocBackend {
    /// Use the given executable name (resolved on `PATH`) or path.
    pub fn new(executable: impl Into<String>) -> Self {
        Self {
            executable: executable.into(),
        }
    }

    /// Honor `MDCONV_PANDOC`, falling back to `pandoc`.
    pub fn from_env() -> Self {
        match env::var(EXECUTABLE_ENV) {
            Ok(exe) if !exe.is_empty() => Self::new(exe),
            _ => Self::new(DEFAULT_EXECUTABLE),
        }
    }

    pub fn executable(&self) -> &str {
        &self.executable
    }

    /// Locate the executable on the search path.
    pub fn resolve(&self) -> Result<PathBuf, ConvertError> {
        which(&self.executable).map_err(|e| ConvertError::ExecutableNotFound {
            executable: self.executable.clone(),
            reason: e.to_string(),
        })
    }

    /// Convert `source` from one dialect to another.
    pub fn generic_convert(
        &self,
        source: &str,
        from: &str,
        to: &str,
        extra_args: &[String],
    ) -> Result<String, ConvertError> {
        let path = self.resolve()?;
        let args = command_args(from, to, extra_args);
        log::debug!("running {} {}", path.display(), args.join(" "));

        let mut child = Command::new(&path)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| self.spawn_error(e))?;

        // Feed stdin from its own thread so a large document cannot fill the
        // stdout pipe while we are still writing.
        let stdin = child.stdin.take();
        let (written, output) = thread::scope(|scope| {
            let writer = scope.spawn(move || -> io::Result<()> {
                if let Some(mut stdin) = stdin {
                    stdin.write_all(source.as_bytes())?;
                }
                Ok(())
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (written, output)
        });

        let output = output?;
        self.check_status(output.status)?;
        match written {
            // The child may legitimately stop reading early.
            Err(e) if e.kind() != io::ErrorKind::BrokenPipe => return Err(e.into()),
            _ => {}
        }

        String::from_utf8(output.stdout).map_err(|e| ConvertError::InvalidOutput(e.to_string()))
    }

    /// Query `<exe> --version`.
    pub fn version(&self) -> Result<PandocVersion, ConvertError> {
        let path = self.resolve()?;
        let output = Command::new(&path)
            .arg("--version")
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| self.spawn_error(e))?;
        self.check_status(output.status)?;

        let banner = String::from_utf8_lossy(&output.stdout);
        parse_version_banner(&banner).ok_or_else(|| {
            ConvertError::InvalidOutput(format!(
                "unrecognized version banner: {}",
                banner.lines().next().unwrap_or_default()
            ))
        })
    }

    /// Like [`PandocBackend::version`], logging a warning when the installed
    /// release is older than [`MINIMUM_VERSION`].
    pub fn check_version(&self) -> Result<PandocVersion, ConvertError> {
        let version = self.version()?;
        if !version.is_supported() {
            log::warn!(
                "pandoc {version} is older than the minimum supported version {MINIMUM_VERSION}; \
                 conversions may fail or produce unexpected output"
            );
        }
        Ok(version)
    }

    fn check_status(&self, status: ExitStatus) -> Result<(), ConvertError> {
        if status.success() {
            Ok(())
        } else {
            Err(ConvertError::ConversionFailed {
                executable: self.executable.clone(),
                code: status.code(),
            })
        }
    }

    fn spawn_error(&self, err: io::Error) -> ConvertError {
        if err.kind() == io::ErrorKind::NotFound {
            ConvertError::ExecutableNotFound {
                executable: self.executable.clone(),
                reason: err.to_string(),
            }
        } else {
            ConvertError::Io(format!("failed to launch '{}': {err}", self.executable))
        }
    }
}

impl Default for PandocBackend {
    fn default() -> Self {
        Self::from_env()
    }
}

impl Backend for PandocBackend {
    fn name(&self) -> &str {
        "pandoc"
    }

    fn description(&self) -> &str {
        "External pandoc process"
    }

    fn convert(&self, request: &ConversionRequest) -> Result<ConversionResult, ConvertError> {
        let output_text = self.generic_convert(
            &request.source_text,
            &request.source_dialect,
            &request.target_dialect,
            &request.extra_arguments,
        )?;
        Ok(ConversionResult { output_text })
    }
}

/// Argument vector for one pandoc run: format selectors first, then the
/// caller's flags untouched.
pub fn command_args(from: &str, to: &str, extra_args: &[String]) -> Vec<String> {
    let mut args = Vec::with_capacity(4 + extra_args.len());
    args.push("-f".to_string());
    args.push(from.to_string());
    args.push("-t".to_string());
    args.push(to.to_string());
    args.extend(extra_args.iter().cloned());
    args
}

/// A dotted pandoc release number, compared component by component.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct PandocVersion(Vec<u32>);

impl PandocVersion {
    pub fn components(&self) -> &[u32] {
        &self.0
    }

    pub fn is_supported(&self) -> bool {
        MINIMUM_VERSION
            .parse::<PandocVersion>()
            .map(|min| *self >= min)
            .unwrap_or(true)
    }
}

impl FromStr for PandocVersion {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = Vec::new();
        for part in s.trim().split('.') {
            let digits: String = part.chars().take_while(|c| c.is_ascii_digit()).collect();
            if digits.is_empty() {
                break;
            }
            let value = digits
                .parse()
                .map_err(|_| ConvertError::InvalidOutput(format!("bad version '{s}'")))?;
            parts.push(value);
            if digits.len() != part.len() {
                break;
            }
        }
        if parts.is_empty() {
            return Err(ConvertError::InvalidOutput(format!("bad version '{s}'")));
        }
        Ok(PandocVersion(parts))
    }
}

impl fmt::Display for PandocVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        f.write_str(&parts.join("."))
    }
}

/// Pull the release number out of the first line of `pandoc --version`.
fn parse_version_banner(banner: &str) -> Option<PandocVersion> {
    banner
        .lines()
        .next()?
        .split_whitespace()
        .find(|token| token.starts_with(|c: char| c.is_ascii_digit()))
        .and_then(|token| token.parse().ok())
}
