//! CodeCrafter Error Types
//!
//! Typed failures for the action pipeline. Validation outcomes (no active
//! editor, empty selection) are handled as control flow in the orchestrator
//! and never appear here.

use thiserror::Error;

/// Why a remote call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// Transport-level failure: connection refused, timeout, DNS
    Network,
    /// The backend answered with a non-success HTTP status
    ServerError,
    /// Success status, but the body was not the expected shape
    MalformedResponse,
}

/// A failed remote action call
#[derive(Error, Debug)]
#[error("{message}")]
pub struct RemoteFailure {
    pub cause: FailureCause,
    pub message: String,
}

impl RemoteFailure {
    pub fn network(message: impl Into<String>) -> Self {
        Self {
            cause: FailureCause::Network,
            message: message.into(),
        }
    }

    pub fn server_error(message: impl Into<String>) -> Self {
        Self {
            cause: FailureCause::ServerError,
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            cause: FailureCause::MalformedResponse,
            message: message.into(),
        }
    }
}

/// Failure while applying a result to the editor surface
#[derive(Error, Debug)]
#[error("editor apply failed: {0}")]
pub struct ApplyFailure(pub String);
