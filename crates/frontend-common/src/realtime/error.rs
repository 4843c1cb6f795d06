//! Push channel errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RealtimeError {
    /// A frame was not valid JSON or did not match its declared action
    #[error("Failed to decode push frame: {0}")]
    Decode(#[from] serde_json::Error),

    /// The API origin cannot be turned into a websocket endpoint
    #[error("Invalid push endpoint: {0}")]
    InvalidEndpoint(String),

    /// The websocket could not be opened
    #[error("Failed to connect to push server: {0}")]
    Connect(String),

    /// The open websocket failed
    #[error("Push connection error: {0}")]
    Transport(String),
}

impl From<url::ParseError> for RealtimeError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidEndpoint(err.to_string())
    }
}
