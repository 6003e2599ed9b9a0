//! Account funds messages.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codes::GetAccountFundsErrorCode;
use super::header::{RequestHeader, ResponseHeader};

/// Request for the account balance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountFundsReq {
    /// Request header.
    pub header: RequestHeader,
}

/// Account funds response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAccountFundsResp {
    /// Response header.
    pub header: ResponseHeader,

    /// Operation status.
    pub error_code: GetAccountFundsErrorCode,

    /// Funds available to bet.
    #[serde(default)]
    pub avail_balance: Decimal,

    /// Total balance.
    #[serde(default)]
    pub balance: Decimal,

    /// Current exposure (negative when at risk).
    #[serde(default)]
    pub exposure: Decimal,

    /// Credit limit.
    #[serde(default)]
    pub credit_limit: Decimal,
}

impl fmt::Display for GetAccountFundsResp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Funds(available: {}, balance: {}, exposure: {})",
            self.avail_balance, self.balance, self.exposure
        )
    }
}
