// SPDX-License-Identifier: MIT

//! Typed error handling for tideflow
//!
//! Absence of session data is never an error here: reads return `None` for
//! anything unwritten. Errors are reserved for failed writes, which must not
//! be silently swallowed, and for callers declaring a piece of state
//! mandatory.

use thiserror::Error;

/// Top-level error type for session store operations
#[derive(Debug, Error)]
pub enum SessionError {
    /// A caller declared a namespace key mandatory and it was absent
    #[error("Required session state missing: {namespace}.{key}")]
    RequiredStateMissing { namespace: String, key: String },

    /// The underlying session transport failed a write or flush
    #[error("Session transport error: {0}")]
    Transport(#[from] TransportError),

    /// Payload serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Generic error wrapper for compatibility
    #[error("{0}")]
    Other(String),
}

/// Errors raised by a `SessionTransport` implementation
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport could not be reached or refused the operation
    #[error("Session transport unavailable during {operation}: {message}")]
    Unavailable { operation: String, message: String },

    /// The transport returned data that does not parse as a namespace payload
    #[error("Malformed payload in namespace '{namespace}': {message}")]
    Malformed { namespace: String, message: String },
}

impl SessionError {
    /// Create a required-state-missing error
    pub fn required_state_missing(namespace: impl Into<String>, key: impl Into<String>) -> Self {
        Self::RequiredStateMissing {
            namespace: namespace.into(),
            key: key.into(),
        }
    }

    /// Create from a generic message
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl TransportError {
    /// Create an unavailable error
    pub fn unavailable(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Unavailable {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a malformed-payload error
    pub fn malformed(namespace: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Malformed {
            namespace: namespace.into(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_state_missing_display() {
        let err = SessionError::required_state_missing("exemption", "projectName");
        assert_eq!(
            err.to_string(),
            "Required session state missing: exemption.projectName"
        );
    }

    #[test]
    fn test_transport_error_wraps_into_session_error() {
        let err: SessionError = TransportError::unavailable("write", "connection reset").into();
        assert!(matches!(err, SessionError::Transport(_)));
        assert!(err.to_string().contains("connection reset"));
    }
}
