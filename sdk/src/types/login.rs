//! Login request and response.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::codes::LoginErrorCode;
use super::header::ResponseHeader;

/// Product identifier sent with every login.
pub const PRODUCT_ID: i32 = 82;

/// Login request sent to the global service.
///
/// Carries no request header: no session exists yet.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReq {
    /// Account username.
    pub username: String,

    /// Account password.
    pub password: String,

    /// Product the session is opened for.
    pub product_id: i32,
}

impl LoginReq {
    /// Creates a login request.
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>, product_id: i32) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            product_id,
        }
    }
}

impl fmt::Debug for LoginReq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginReq")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("product_id", &self.product_id)
            .finish()
    }
}

/// Login response from the global service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResp {
    /// Response header; holds the new session token on success.
    pub header: ResponseHeader,

    /// Operation status.
    pub error_code: LoginErrorCode,

    /// Account currency.
    #[serde(default)]
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_req_debug_redacts_password() {
        let req = LoginReq::new("harold", "s3kr1t", PRODUCT_ID);
        let debug = format!("{:?}", req);
        assert!(debug.contains("harold"));
        assert!(!debug.contains("s3kr1t"));
    }

    #[test]
    fn test_login_req_serde() {
        let req = LoginReq::new("harold", "s3kr1t", PRODUCT_ID);
        let json = serde_json::to_value(&req).expect("serialize");
        assert_eq!(json["productId"], 82);
        assert_eq!(json["username"], "harold");
    }

    #[test]
    fn test_login_resp_deserialize() {
        let json = r#"{
            "header": {"errorCode": "OK", "sessionToken": "tok"},
            "errorCode": "OK",
            "currency": "GBP"
        }"#;
        let resp: LoginResp = serde_json::from_str(json).expect("deserialize");
        assert_eq!(resp.error_code, LoginErrorCode::Ok);
        assert_eq!(resp.header.session_token.as_deref(), Some("tok"));
        assert_eq!(resp.currency.as_deref(), Some("GBP"));
    }

    #[test]
    fn test_login_resp_requires_status() {
        assert!(serde_json::from_str::<LoginResp>("{}").is_err());
        assert!(serde_json::from_str::<LoginResp>(
            r#"{"header": {"errorCode": "OK", "sessionToken": "tok"}}"#
        )
        .is_err());
    }
}
