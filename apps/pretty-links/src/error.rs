//! Error taxonomy for a validation run.
//!
//! Disallowed links are not errors; they are collected as
//! [`Issue`](crate::models::Issue)s. Everything here aborts the run.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("scan root not found: {}", path.display())]
    MissingRoot { path: PathBuf },
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to walk directory tree: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid config file {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
    #[error("invalid exclude pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },
    #[error("unknown output mode '{0}' (expected human|json)")]
    InvalidOutput(String),
}

impl Error {
    /// Process exit status for this error.
    ///
    /// Configuration problems exit 2; failures of the scan itself exit 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::MissingRoot { .. } | Error::Read { .. } | Error::Walk(_) => 1,
            Error::Config { .. } | Error::InvalidPattern { .. } | Error::InvalidOutput(_) => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_split_scan_and_config_errors() {
        let missing = Error::MissingRoot {
            path: PathBuf::from("docs"),
        };
        assert_eq!(missing.exit_code(), 1);
        assert_eq!(missing.to_string(), "scan root not found: docs");
        assert_eq!(Error::InvalidOutput("xml".into()).exit_code(), 2);
        let bad = glob::Pattern::new("[").unwrap_err();
        let err = Error::InvalidPattern {
            pattern: "[".into(),
            source: bad,
        };
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().starts_with("invalid exclude pattern '['"));
    }
}
