//! Request and response headers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::codes::HeaderErrorCode;

/// Header attached to every authenticated request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestHeader {
    /// Session token, or `None` when not logged in.
    pub session_token: Option<String>,
}

impl RequestHeader {
    /// Creates a header carrying the given token.
    #[must_use]
    pub fn with_token(session_token: Option<String>) -> Self {
        Self { session_token }
    }
}

/// Header returned with every response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseHeader {
    /// Protocol-level status.
    pub error_code: HeaderErrorCode,

    /// Session token issued or refreshed by the server.
    #[serde(default)]
    pub session_token: Option<String>,

    /// Server time of the response.
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl ResponseHeader {
    /// Creates a header with the given status and no token.
    #[must_use]
    pub fn new(error_code: HeaderErrorCode) -> Self {
        Self {
            error_code,
            ..Default::default()
        }
    }

    /// Sets the session token.
    #[must_use]
    pub fn with_session_token(mut self, token: impl Into<String>) -> Self {
        self.session_token = Some(token.into());
        self
    }
}
