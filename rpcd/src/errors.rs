//! Error types and HTTP reply classification.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Failure of an API call. `Display` yields the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No HTTP exchange took place (connection refused, CORS, mixed content).
    #[error("{}", unreachable_message(.secure_origin))]
    Unreachable { secure_origin: bool },
    /// HTTP 400 with the server-supplied `status` message.
    #[error("{0}")]
    Rejected(String),
    /// Any other non-200 status.
    #[error("{code}: {text}")]
    Unexpected { code: u16, text: String },
    /// The body could not be decoded.
    #[error("{0}")]
    Parse(String),
}

impl ApiError {
    pub fn is_unreachable(&self) -> bool {
        matches!(self, ApiError::Unreachable { .. })
    }
}

fn unreachable_message(secure_origin: &bool) -> &'static str {
    if *secure_origin {
        "The API is not available via HTTPS, please connect via HTTP"
    } else {
        "Failed to access API"
    }
}

/// Argument validation failure. Nothing is sent when this occurs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    #[error("Value not in enum range for argument {argument}.")]
    OutOfRange { argument: String },
    #[error("Command argument has no value: {0}")]
    MalformedPair(String),
}

/// What came back from one HTTP exchange.
///
/// `status` is 0 when the request never reached the server, mirroring what a
/// browser reports.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl RawReply {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn unreachable() -> Self {
        Self::default()
    }
}

#[derive(Deserialize)]
struct Rejection {
    status: String,
}

/// Turn a reply into a decoded value or an [`ApiError`].
///
/// `secure_origin` selects the HTTPS hint for unreachable servers.
pub fn classify<T: DeserializeOwned>(reply: &RawReply, secure_origin: bool) -> Result<T, ApiError> {
    match reply.status {
        200 => serde_json::from_str(&reply.body).map_err(|e| ApiError::Parse(e.to_string())),
        400 => match serde_json::from_str::<Rejection>(&reply.body) {
            Ok(rejection) => Err(ApiError::Rejected(rejection.status)),
            Err(e) => Err(ApiError::Parse(e.to_string())),
        },
        0 => Err(ApiError::Unreachable { secure_origin }),
        code => Err(ApiError::Unexpected {
            code,
            text: reply.status_text.clone(),
        }),
    }
}
