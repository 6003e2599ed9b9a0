//! Market listing and market detail messages.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::codes::{GetAllMarketsErrorCode, GetMarketErrorCode};
use super::header::{RequestHeader, ResponseHeader};

/// Request for every market on the exchange.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllMarketsReq {
    /// Request header.
    pub header: RequestHeader,
}

/// Market listing response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetAllMarketsResp {
    /// Response header.
    pub header: ResponseHeader,

    /// Operation status.
    pub error_code: GetAllMarketsErrorCode,

    /// `:`-separated market records, each `~`-separated.
    #[serde(default)]
    pub market_data: String,
}

/// Request for a single market.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMarketReq {
    /// Request header.
    pub header: RequestHeader,

    /// Market identifier.
    pub market_id: i64,
}

impl GetMarketReq {
    /// Creates a request for the given market.
    #[must_use]
    pub fn new(market_id: i64) -> Self {
        Self {
            header: RequestHeader::default(),
            market_id,
        }
    }
}

/// Single market response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetMarketResp {
    /// Response header.
    pub header: ResponseHeader,

    /// Operation status.
    pub error_code: GetMarketErrorCode,

    /// Market detail, absent on failure.
    #[serde(default)]
    pub market: Option<MarketDetail>,
}

/// A selection that can be bet on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Runner {
    /// Selection identifier.
    pub selection_id: i64,

    /// Display name.
    pub name: String,
}

/// Structured market returned by the single-market lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketDetail {
    /// Market identifier.
    pub market_id: i64,

    /// Market name.
    pub name: String,

    /// Market type code.
    #[serde(default)]
    pub market_type: String,

    /// Market status.
    #[serde(default)]
    pub market_status: String,

    /// Scheduled start.
    #[serde(default)]
    pub market_time: Option<DateTime<Utc>>,

    /// Menu path.
    #[serde(default)]
    pub menu_path: String,

    /// Country code.
    #[serde(default, rename = "countryISO3")]
    pub country_iso3: String,

    /// Number of winning selections.
    #[serde(default)]
    pub number_of_winners: u32,

    /// Whether the market is in play.
    #[serde(default)]
    pub bsp_market: bool,

    /// Selections.
    #[serde(default)]
    pub runners: Vec<Runner>,
}

impl MarketDetail {
    /// Finds a runner by selection id.
    #[must_use]
    pub fn runner(&self, selection_id: i64) -> Option<&Runner> {
        self.runners.iter().find(|r| r.selection_id == selection_id)
    }
}

impl fmt::Display for MarketDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Market: {}", self.name)
    }
}
