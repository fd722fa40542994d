//! Error types for the session flow.
//!
//! None of these are fatal: each one maps onto a rendered state with a way
//! back to the login page.

use thiserror::Error;

/// The request never produced a usable response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Network unreachable, CORS rejection, aborted fetch
    #[error("request failed: {0}")]
    Request(String),

    /// Response arrived but its body could not be read
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Why the session check did not yield a signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFailure {
    /// Backend answered with a non-success status
    #[error("session check rejected with status {status}")]
    Rejected { status: u16 },

    /// Transport failure or a success response we could not parse
    #[error("session check failed: {detail}")]
    Network { detail: String },
}

impl AuthFailure {
    /// Message shown to the user. Never includes backend detail.
    pub fn message(&self) -> &'static str {
        match self {
            Self::Rejected { .. } => "Authentication failed",
            Self::Network { .. } => "Network error. Please try again.",
        }
    }
}

impl From<TransportError> for AuthFailure {
    fn from(err: TransportError) -> Self {
        Self::Network {
            detail: err.to_string(),
        }
    }
}

/// Why the backend did not confirm the logout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogoutError {
    #[error("logout rejected with status {status}")]
    Rejected { status: u16 },

    #[error("logout request failed: {detail}")]
    Network { detail: String },
}

impl LogoutError {
    pub fn message(&self) -> &'static str {
        "Logout failed"
    }
}

impl From<TransportError> for LogoutError {
    fn from(err: TransportError) -> Self {
        Self::Network {
            detail: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_messages_are_distinct() {
        let rejected = AuthFailure::Rejected { status: 401 };
        let network = AuthFailure::from(TransportError::Request("offline".to_string()));
        assert_ne!(rejected.message(), network.message());
        assert_eq!(rejected.message(), "Authentication failed");
        assert_eq!(network.message(), "Network error. Please try again.");
    }

    #[test]
    fn test_failure_message_hides_detail() {
        let failure = AuthFailure::Network {
            detail: "expected value at line 1 column 1".to_string(),
        };
        assert!(!failure.message().contains("line 1"));
        assert!(failure.to_string().contains("line 1"));
    }

    #[test]
    fn test_transport_error_into_logout_error() {
        let err = LogoutError::from(TransportError::Body("truncated".to_string()));
        assert_eq!(
            err,
            LogoutError::Network {
                detail: "failed to read response body: truncated".to_string()
            }
        );
        assert_eq!(err.message(), "Logout failed");
    }
}
