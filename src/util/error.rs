// draftcatch - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation; all errors preserve the causal chain
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all draftcatch operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum DraftcatchError {
    /// No draft URL could be extracted from the log text.
    Extract(ExtractError),

    /// Publishing the extracted URL failed.
    Publish(PublishError),

    /// I/O error reading the log text from stdin.
    Io {
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for DraftcatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Extract(e) => write!(f, "Extraction error: {e}"),
            Self::Publish(e) => write!(f, "Publish error: {e}"),
            Self::Io { operation, source } => {
                write!(f, "I/O error during {operation}: {source}")
            }
        }
    }
}

impl std::error::Error for DraftcatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Extract(e) => Some(e),
            Self::Publish(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Extraction errors
// ---------------------------------------------------------------------------

/// Errors raised while searching the log text for a draft URL.
#[derive(Debug)]
pub enum ExtractError {
    /// No pattern (priority patterns nor the generic fallback) matched.
    /// Carries the complete log text so an operator can diagnose why no URL
    /// was present (e.g. the deploy command failed before printing one).
    NoUrlFound { logs: String },
}

impl fmt::Display for ExtractError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoUrlFound { logs } => {
                write!(f, "no draft URL found in the deploy logs:\n{logs}")
            }
        }
    }
}

impl std::error::Error for ExtractError {}

impl From<ExtractError> for DraftcatchError {
    fn from(e: ExtractError) -> Self {
        Self::Extract(e)
    }
}

// ---------------------------------------------------------------------------
// Publish errors
// ---------------------------------------------------------------------------

/// Errors raised while writing the step output.
#[derive(Debug)]
pub enum PublishError {
    /// Appending to the step-output file failed.
    File { path: PathBuf, source: io::Error },

    /// Writing the legacy marker line to stdout failed.
    Stdout { source: io::Error },
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File { path, source } => {
                write!(
                    f,
                    "cannot append step output to '{}': {source}",
                    path.display()
                )
            }
            Self::Stdout { source } => {
                write!(f, "cannot write step output to stdout: {source}")
            }
        }
    }
}

impl std::error::Error for PublishError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::File { source, .. } => Some(source),
            Self::Stdout { source } => Some(source),
        }
    }
}

impl From<PublishError> for DraftcatchError {
    fn from(e: PublishError) -> Self {
        Self::Publish(e)
    }
}

/// Convenience type alias for draftcatch results.
pub type Result<T> = std::result::Result<T, DraftcatchError>;
