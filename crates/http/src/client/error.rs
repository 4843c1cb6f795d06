//! Failures of calls to the sneaker order API
//!
//! A non-2xx answer is always an error, whatever its body says. Callers that
//! only care whether the API was reachable at all ask [`ClientError::is_transport`].

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never got an HTTP answer (DNS, refused connection, TLS...)
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Any other non-success status, with the body the API sent back
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// 401: the bearer token is missing, expired or was never valid
    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    /// 404: no such order or endpoint
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// 400: typically a rejected signup (name taken, empty password)
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// 403: token accepted but not allowed to see orders
    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The body was not a shoe listing, token envelope or other expected shape
    #[error("Unexpected response body: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Login or signup succeeded but the response carried no token
    #[error("Response did not contain a session token")]
    MissingToken,

    /// The client could not be built, e.g. no API origin
    #[error("Invalid configuration: {0}")]
    Configuration(String),
}

impl ClientError {
    /// Classify a rejected response by its status code
    pub fn from_status(status: reqwest::StatusCode, message: String) -> Self {
        match status.as_u16() {
            400 => Self::BadRequest(message),
            401 => Self::AuthenticationFailed(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            code => Self::ServerError {
                status: code,
                message,
            },
        }
    }

    /// Session validation logs these loudly; rejections stay quiet
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Request(_))
    }

    /// Status code of a rejected response, `None` when there was no response
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::BadRequest(_) => Some(400),
            Self::AuthenticationFailed(_) => Some(401),
            Self::Forbidden(_) => Some(403),
            Self::NotFound(_) => Some(404),
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::StatusCode;

    #[test]
    fn test_status_codes_round_trip_through_classification() {
        for code in [400, 401, 403, 404, 418, 500, 503] {
            let status = StatusCode::from_u16(code).unwrap();
            let err = ClientError::from_status(status, "nope".into());
            assert_eq!(err.status(), Some(code));
            assert!(!err.is_transport());
        }
    }

    #[test]
    fn test_rejected_token_is_authentication_failure() {
        let err = ClientError::from_status(StatusCode::UNAUTHORIZED, "jwt expired".into());
        assert!(matches!(err, ClientError::AuthenticationFailed(ref m) if m == "jwt expired"));
        assert!(ClientError::MissingToken.status().is_none());
    }
}
