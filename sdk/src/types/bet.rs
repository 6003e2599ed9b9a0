//! Bet placement messages.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::codes::PlaceBetsErrorCode;
use super::header::{RequestHeader, ResponseHeader};

/// Bet direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BetType {
    /// Back the selection to win.
    #[serde(rename = "B")]
    Back,
    /// Lay the selection (bet against it).
    #[serde(rename = "L")]
    Lay,
}

impl fmt::Display for BetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Back => write!(f, "back"),
            Self::Lay => write!(f, "lay"),
        }
    }
}

/// What happens to the unmatched part of a bet when the market turns in play.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BetPersistence {
    /// Cancel unmatched.
    #[default]
    None,
    /// Keep unmatched in play.
    InPlayPersistent,
    /// Convert unmatched to a starting-price bet.
    StartingPrice,
}

/// A single bet instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBet {
    /// Market to bet on.
    pub market_id: i64,

    /// Selection to bet on.
    pub selection_id: i64,

    /// Back or lay.
    pub bet_type: BetType,

    /// Requested odds.
    pub price: Decimal,

    /// Stake.
    pub size: Decimal,

    /// Unmatched-bet handling.
    #[serde(default)]
    pub persistence: BetPersistence,
}

impl PlaceBet {
    /// Creates a back bet.
    #[must_use]
    pub fn back(market_id: i64, selection_id: i64, price: Decimal, size: Decimal) -> Self {
        Self {
            market_id,
            selection_id,
            bet_type: BetType::Back,
            price,
            size,
            persistence: BetPersistence::None,
        }
    }

    /// Creates a lay bet.
    #[must_use]
    pub fn lay(market_id: i64, selection_id: i64, price: Decimal, size: Decimal) -> Self {
        Self {
            bet_type: BetType::Lay,
            ..Self::back(market_id, selection_id, price, size)
        }
    }

    /// Sets the persistence.
    #[must_use]
    pub fn with_persistence(mut self, persistence: BetPersistence) -> Self {
        self.persistence = persistence;
        self
    }
}

/// Outcome of one bet instruction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetResult {
    /// Assigned bet id.
    pub bet_id: i64,

    /// Whether the bet was accepted.
    pub success: bool,

    /// Per-bet result code.
    #[serde(default)]
    pub result_code: String,

    /// Matched stake.
    #[serde(default)]
    pub size_matched: Decimal,

    /// Average matched odds.
    #[serde(default)]
    pub average_price_matched: Decimal,
}

impl PlaceBetResult {
    /// Returns true if any part of the bet matched.
    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.size_matched > Decimal::ZERO
    }
}

/// Request placing a batch of bets.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetsReq {
    /// Request header.
    pub header: RequestHeader,

    /// Bets, in submission order.
    pub bets: Vec<PlaceBet>,
}

impl PlaceBetsReq {
    /// Creates a request for the given bets.
    #[must_use]
    pub fn new(bets: Vec<PlaceBet>) -> Self {
        Self {
            header: RequestHeader::default(),
            bets,
        }
    }
}

/// Bet placement response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaceBetsResp {
    /// Response header.
    pub header: ResponseHeader,

    /// Operation status.
    pub error_code: PlaceBetsErrorCode,

    /// One result per submitted bet, in submission order.
    #[serde(default)]
    pub bet_results: Vec<PlaceBetResult>,
}
