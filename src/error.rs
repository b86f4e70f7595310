use std::{
    error::Error,
    fmt, io,
    num::ParseFloatError,
    path::PathBuf,
    str::Utf8Error,
};

/// Failures that abort loading a point file.
#[derive(Debug)]
pub enum LoadErr {
    /// The input could not be opened.
    SourceUnavailable { path: PathBuf, source: io::Error },
    /// An I/O error happened while scanning lines.
    ReadFailure(io::Error),
}

impl fmt::Display for LoadErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadErr::SourceUnavailable { path, source } => {
                write!(f, "could not open {}: {source}", path.display())
            }
            LoadErr::ReadFailure(e) => write!(f, "could not scan: {e}"),
        }
    }
}

impl Error for LoadErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LoadErr::SourceUnavailable { source, .. } => Some(source),
            LoadErr::ReadFailure(e) => Some(e),
        }
    }
}

impl From<io::Error> for LoadErr {
    fn from(value: io::Error) -> Self {
        Self::ReadFailure(value)
    }
}

/// A single line that could not be turned into a point. Recovered by the loader.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordErr {
    MissingSeparator,
    InvalidUtf8(Utf8Error),
    InvalidNumber {
        field: &'static str,
        source: ParseFloatError,
    },
}

impl fmt::Display for RecordErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordErr::MissingSeparator => write!(f, "expected two comma-separated numbers"),
            RecordErr::InvalidUtf8(e) => write!(f, "line is not text: {e}"),
            RecordErr::InvalidNumber { field, source } => {
                write!(f, "invalid {field} coordinate: {source}")
            }
        }
    }
}

impl Error for RecordErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            RecordErr::InvalidNumber { source, .. } => Some(source),
            RecordErr::InvalidUtf8(e) => Some(e),
            RecordErr::MissingSeparator => None,
        }
    }
}

/// Failure of one of the plot rendering stages.
#[derive(Debug)]
pub struct RenderErr {
    stage: &'static str,
    msg: String,
}

impl RenderErr {
    /// Wraps a plotting backend error raised while running `stage`.
    pub fn new(stage: &'static str, cause: impl fmt::Display) -> Self {
        Self {
            stage,
            msg: cause.to_string(),
        }
    }

    pub fn stage(&self) -> &'static str {
        self.stage
    }
}

impl fmt::Display for RenderErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "could not {}: {}", self.stage, self.msg)
    }
}

impl Error for RenderErr {}

/// Invalid run configuration, caught before any data is read.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigErr {
    InvalidVar {
        var: &'static str,
        value: String,
        reason: String,
    },
}

impl fmt::Display for ConfigErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigErr::InvalidVar { var, value, reason } => {
                write!(f, "invalid config: {var}={value:?}: {reason}")
            }
        }
    }
}

impl Error for ConfigErr {}
