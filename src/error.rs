//! Error types for group-export
//!
//! Failures are grouped by [`ErrorKind`], which also decides the process
//! exit code.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for group-export
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Usage Errors
    // ============================================================================
    #[error("{message}")]
    Usage { message: String },

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    /// Error payload returned by the API itself (`{"error": {"message": ..}}`)
    #[error("{message}")]
    Api { message: String, code: Option<i64> },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // Persistence Errors
    // ============================================================================
    #[error("Failed to write '{}': {source}", path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // ============================================================================
    // Output Errors
    // ============================================================================
    /// Writing tables or messages to the terminal failed
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Required parameters absent or mode unresolvable
    Usage,
    /// Fetching or decoding a page failed
    Transport,
    /// Writing the export file failed
    Persistence,
    /// Writing to the terminal failed
    Output,
}

impl Error {
    /// Create a usage error
    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage {
            message: message.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create an API error
    pub fn api(message: impl Into<String>, code: Option<i64>) -> Self {
        Self::Api {
            message: message.into(),
            code,
        }
    }

    /// Create a persistence error for the given path
    pub fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }

    /// Which kind of failure this is
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Usage { .. } => ErrorKind::Usage,
            Error::Http(_)
            | Error::HttpStatus { .. }
            | Error::Api { .. }
            | Error::JsonParse(_)
            | Error::InvalidUrl(_) => ErrorKind::Transport,
            Error::Persistence { .. } => ErrorKind::Persistence,
            Error::Output(_) => ErrorKind::Output,
        }
    }

    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::Usage => 2,
            ErrorKind::Transport => 3,
            ErrorKind::Persistence => 4,
            ErrorKind::Output => 1,
        }
    }
}

/// Result type alias for group-export
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for attaching a file path to I/O failures
pub trait ResultExt<T> {
    /// Turn an I/O error into a persistence error for `path`
    fn persisting(self, path: &std::path::Path) -> Result<T>;
}

impl<T> ResultExt<T> for std::result::Result<T, std::io::Error> {
    fn persisting(self, path: &std::path::Path) -> Result<T> {
        self.map_err(|e| Error::persistence(path, e))
    }
}
