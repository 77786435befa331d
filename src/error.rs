//! Crate-level error type and `Result` alias for the relay pipeline.
//! Each variant is one tagged failure of a pipeline step, and carries the
//! level it is reported at so the outcome can be logged exactly once.
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Insufficient arguments. Expected {expected}, got {got}")]
    InsufficientArguments { expected: usize, got: usize },

    #[error("Alert file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Failed to read alert file {}: {source}", path.display())]
    AlertUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse alert JSON: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    #[error("Webhook request timed out after {timeout:?}")]
    DeliveryTimeout { timeout: Duration },

    #[error("Connection error: {0}")]
    DeliveryConnection(String),

    #[error("Webhook returned unexpected status: {status}")]
    DeliveryRejected { status: u16 },

    #[error("Request failed: {0}")]
    DeliveryFailed(String),

    #[error("Unhandled exception: {0}")]
    Unhandled(String),
}

/// How loudly a failure is reported.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Severity {
    Warning,
    Error,
}

impl Error {
    pub fn unhandled<E: std::fmt::Display>(e: E) -> Self {
        Error::Unhandled(e.to_string())
    }

    /// A reachable webhook that said "no" is a warning; everything else is an error.
    pub fn severity(&self) -> Severity {
        match self {
            Error::DeliveryRejected { .. } => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// True when the failure happened before any network I/O was attempted.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Error::InsufficientArguments { .. }
                | Error::FileNotFound { .. }
                | Error::AlertUnreadable { .. }
                | Error::MalformedPayload(_)
        )
    }
}
