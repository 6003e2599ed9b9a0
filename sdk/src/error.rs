//! Gateway error types.
//!
//! [`ApiError`] is raised for every non-OK response, [`RecordDecodeError`]
//! for payloads that arrived but could not be decoded. [`GatewayError`]
//! unifies them with transport failures.

use crate::client::ClientError;
use crate::types::{HeaderErrorCode, OperationErrorCode};

/// A call reached the service and was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("APIError({error_code}, {header_error_code})")]
pub struct ApiError {
    /// Operation-level status.
    pub error_code: OperationErrorCode,

    /// Header-level status returned alongside it.
    pub header_error_code: HeaderErrorCode,
}

impl ApiError {
    /// Creates an API error from a response's two codes.
    #[must_use]
    pub fn new(error_code: impl Into<OperationErrorCode>, header_error_code: HeaderErrorCode) -> Self {
        Self {
            error_code: error_code.into(),
            header_error_code,
        }
    }
}

/// A record was structurally invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordDecodeError {
    /// The record had too few fields.
    #[error("missing field {index}: record has {found} fields")]
    MissingField {
        /// Zero-based index of the first missing field.
        index: usize,
        /// Number of fields present.
        found: usize,
    },

    /// An integer field did not parse.
    #[error("invalid integer in {field}: {value:?}")]
    InvalidInteger {
        /// Field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },

    /// A decimal field did not parse.
    #[error("invalid decimal in {field}: {value:?}")]
    InvalidDecimal {
        /// Field name.
        field: &'static str,
        /// Raw value.
        value: String,
    },

    /// An epoch timestamp was outside the representable range.
    #[error("timestamp out of range in {field}: {value}")]
    InvalidTimestamp {
        /// Field name.
        field: &'static str,
        /// Milliseconds since the epoch.
        value: i64,
    },
}

/// Any failure of a gateway operation.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// The service rejected the call.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The payload could not be decoded.
    #[error("record decode failed: {0}")]
    Decode(#[from] RecordDecodeError),

    /// The transport failed before a response was received.
    #[error("transport failed: {0}")]
    Transport(#[from] ClientError),
}

impl GatewayError {
    /// Returns the API error, if this is one.
    #[must_use]
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(err) => Some(err),
            _ => None,
        }
    }

    /// Returns true if the header reports a missing or expired session.
    #[must_use]
    pub fn is_no_session(&self) -> bool {
        self.as_api()
            .is_some_and(|err| err.header_error_code == HeaderErrorCode::NoSession)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{GetAllMarketsErrorCode, LoginErrorCode};

    #[test]
    fn test_api_error_display() {
        let err = ApiError::new(
            LoginErrorCode::ApiError,
            HeaderErrorCode::ProductRequiresFundedAccount,
        );
        assert_eq!(
            err.to_string(),
            "APIError(API_ERROR, PRODUCT_REQUIRES_FUNDED_ACCOUNT)"
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err = RecordDecodeError::MissingField { index: 15, found: 3 };
        assert_eq!(err.to_string(), "missing field 15: record has 3 fields");

        let err = RecordDecodeError::InvalidInteger {
            field: "marketId",
            value: "x".to_string(),
        };
        assert_eq!(err.to_string(), "invalid integer in marketId: \"x\"");
    }

    #[test]
    fn test_gateway_error_from_api() {
        let err: GatewayError =
            ApiError::new(GetAllMarketsErrorCode::ApiError, HeaderErrorCode::NoSession).into();
        assert!(err.is_no_session());
        assert_eq!(
            err.as_api().map(|e| e.error_code.clone()),
            Some(OperationErrorCode::GetAllMarkets(GetAllMarketsErrorCode::ApiError))
        );
    }

    #[test]
    fn test_gateway_error_decode_is_not_api() {
        let err: GatewayError = RecordDecodeError::MissingField { index: 0, found: 0 }.into();
        assert!(err.as_api().is_none());
        assert!(!err.is_no_session());
    }
}
