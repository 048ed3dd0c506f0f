//! Error types.
use std::path::PathBuf;

/// A mismatch between a profile and the functions declared in its test file.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CheckError {
    #[error("invalid test case type: {0}")]
    InvalidCaseKind(String),
    #[error("there are {in_file} cases in test file, but there are {in_profile} cases in ut profile")]
    CountMismatch { in_file: usize, in_profile: usize },
    #[error("the case {name:?} (position {position}) in ut profile doesn't exist in the test file")]
    MissingCase { name: String, position: usize },
    #[error(
        "the case {actual:?}{} in test file doesn't match the case {expected:?} in profile at position {position}",
        line_suffix(.line)
    )]
    PositionMismatch {
        actual: String,
        expected: String,
        position: usize,
        /// Line of `actual` in the test file, if known.
        line: Option<usize>,
    },
}

fn line_suffix(line: &Option<usize>) -> String {
    line.map(|l| format!(" (line {l})")).unwrap_or_default()
}

/// Any failure while validating profiles.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read profile {path:?}: {source}")]
    ReadProfile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to unmarshal ut profile {path:?}: {source}")]
    ParseProfile {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("the source file {source_file:?} defined in {profile:?} doesn't exist")]
    MissingSource {
        source_file: PathBuf,
        profile: PathBuf,
    },
    #[error("failed to read test file {path:?}: {source}")]
    ReadTestFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse test file {path:?}: {source}")]
    ParseTestFile { path: PathBuf, source: syn::Error },
    #[error("{profile:?}: {source}")]
    Check {
        profile: PathBuf,
        source: CheckError,
    },
    #[error("error walking through the path {dir:?}: {source}")]
    Walk {
        dir: PathBuf,
        source: walkdir::Error,
    },
    #[error("invalid config {path:?}: {message}")]
    Config { path: PathBuf, message: String },
    #[error("invalid profile pattern {pattern:?}: {source}")]
    ProfilePattern {
        pattern: String,
        source: regex::Error,
    },
}

impl Error {
    /// The underlying profile mismatch, if this is one.
    pub fn check_error(&self) -> Option<&CheckError> {
        match self {
            Error::Check { source, .. } => Some(source),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
