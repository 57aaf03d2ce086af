//! Error types surfaced by coverage runs.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that abort a coverage run.
///
/// None of these are retried: a run either produces a full report or stops
/// at the first failure.
#[derive(Error, Debug)]
pub enum CoverageError {
    #[error("Path not found: {}", .0.display())]
    PathNotFound(PathBuf),
    #[error("Not swift file: {}", .0.display())]
    NotSwiftFile(PathBuf),
    #[error("Swift files not found.")]
    FilesNotFound,
    #[error("Swift declarations not found.")]
    DeclarationsNotFound,
    #[error("failed to parse {path}: {message}")]
    Parse { path: String, message: String },
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid pattern {pattern:?}: {message}")]
    InvalidPattern { pattern: String, message: String },
    #[error("invalid config {}: {message}", .path.display())]
    Config { path: PathBuf, message: String },
}

pub type Result<T> = std::result::Result<T, CoverageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(CoverageError::FilesNotFound.to_string(), "Swift files not found.");
        assert_eq!(
            CoverageError::DeclarationsNotFound.to_string(),
            "Swift declarations not found."
        );
        assert_eq!(
            CoverageError::PathNotFound(PathBuf::from("NotFound")).to_string(),
            "Path not found: NotFound"
        );
    }
}
