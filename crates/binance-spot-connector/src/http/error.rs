/*
[INPUT]:  Error sources (validation, transport, API, serialization, configuration)
[OUTPUT]: Structured error types separating malformed calls from rejected calls
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

/// Main error type for the Binance connector
#[derive(Error, Debug)]
pub enum BinanceError {
    /// A parameter the endpoint requires was absent or blank; nothing was sent
    #[error("Required parameter '{name}' is missing or empty")]
    RequiredParameter { name: String },

    /// The request never produced an HTTP response
    #[error("Connection error: {0}")]
    Connection(#[from] reqwest::Error),

    /// The server answered with a non-2xx status
    #[error("API error (status {status}, code {code:?}): {message}")]
    Api {
        status: u16,
        code: Option<i64>,
        message: String,
    },

    /// A 2xx response whose body is not JSON
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Missing credentials or an unusable client setup
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body Binance returns alongside non-2xx statuses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: Option<i64>,
    msg: Option<String>,
}

impl BinanceError {
    /// Build a `RequiredParameter` error for the named parameter
    pub fn required(name: impl Into<String>) -> Self {
        BinanceError::RequiredParameter { name: name.into() }
    }

    /// Create an API error from a status code and the raw response body.
    ///
    /// The server's `code`/`msg` fields are kept verbatim; a body that is not
    /// Binance's error shape becomes the message as-is.
    pub fn api_error(status: StatusCode, body: &str) -> Self {
        let (code, message) = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(ApiErrorBody { code, msg: Some(msg) }) => (code, msg),
            Ok(ApiErrorBody { code, msg: None }) => (code, body.to_string()),
            Err(_) => (None, body.to_string()),
        };

        BinanceError::Api {
            status: status.as_u16(),
            code,
            message,
        }
    }

    /// Check if the error is retryable.
    ///
    /// Only transport failures qualify. This crate never retries on its own;
    /// callers decide, and must not replay non-idempotent transfers blindly.
    pub fn is_retryable(&self) -> bool {
        matches!(self, BinanceError::Connection(_))
    }

    /// The call was malformed and never reached the network
    pub fn is_validation_error(&self) -> bool {
        matches!(self, BinanceError::RequiredParameter { .. })
    }

    /// The server rejected the call
    pub fn is_api_error(&self) -> bool {
        matches!(self, BinanceError::Api { .. })
    }

    /// Name of the missing parameter, for `RequiredParameter` errors
    pub fn missing_parameter(&self) -> Option<&str> {
        match self {
            BinanceError::RequiredParameter { name } => Some(name),
            _ => None,
        }
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, BinanceError>;
