//! # Charge Error Types
//!
//! Typed error handling for the strike-charge invoicing client.
//! All charge operations return `Result<T, ChargeError>`.

use thiserror::Error;

/// Core error type for all charge operations
#[derive(Debug, Error)]
pub enum ChargeError {
    /// Configuration errors (missing keys, invalid host or base path)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data, rejected before any network call
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The server does not know the given charge id (HTTP 404)
    #[error("Charge not found: {charge_id}")]
    ChargeNotFound { charge_id: String },

    /// The server returned a non-success status other than 404
    #[error("API error [{status}]: {message}")]
    Api { status: u16, message: String },

    /// Network/HTTP error communicating with the server
    #[error("Network error: {0}")]
    Network(String),

    /// The server returned a body the client does not understand
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ChargeError {
    /// Returns true if retrying the same call could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            ChargeError::Network(_) => true,
            ChargeError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Returns true if the caller's request was at fault
    pub fn is_client_error(&self) -> bool {
        match self {
            ChargeError::InvalidRequest(_)
            | ChargeError::Configuration(_)
            | ChargeError::ChargeNotFound { .. } => true,
            ChargeError::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}

/// Result type alias for charge operations
pub type ChargeResult<T> = Result<T, ChargeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(ChargeError::Network("timeout".into()).is_retryable());
        assert!(ChargeError::Api {
            status: 503,
            message: "unavailable".into()
        }
        .is_retryable());
        assert!(!ChargeError::Api {
            status: 400,
            message: "bad currency".into()
        }
        .is_retryable());
        assert!(!ChargeError::InvalidRequest("amount".into()).is_retryable());
    }

    #[test]
    fn test_client_errors() {
        assert!(ChargeError::InvalidRequest("amount".into()).is_client_error());
        assert!(ChargeError::ChargeNotFound {
            charge_id: "ch_x".into()
        }
        .is_client_error());
        assert!(ChargeError::Api {
            status: 422,
            message: "unprocessable".into()
        }
        .is_client_error());
        assert!(!ChargeError::Api {
            status: 500,
            message: "boom".into()
        }
        .is_client_error());
        assert!(!ChargeError::Network("reset".into()).is_client_error());
    }

    #[test]
    fn test_display_includes_charge_id() {
        let err = ChargeError::ChargeNotFound {
            charge_id: "ch_madeup".into(),
        };
        assert_eq!(err.to_string(), "Charge not found: ch_madeup");
    }
}
