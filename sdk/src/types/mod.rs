//! Wire types for the global and exchange services.
//!
//! Each operation has a request carrying a [`RequestHeader`] (login is the
//! exception: it runs before a session exists) and a response carrying an
//! operation error code plus a [`ResponseHeader`] with its own code.

pub mod bet;
pub mod codes;
pub mod funds;
pub mod header;
pub mod login;
pub mod market;

pub use bet::{BetPersistence, BetType, PlaceBet, PlaceBetResult, PlaceBetsReq, PlaceBetsResp};
pub use codes::{
    GetAccountFundsErrorCode, GetAllMarketsErrorCode, GetMarketErrorCode, HeaderErrorCode,
    LoginErrorCode, OperationErrorCode, PlaceBetsErrorCode,
};
pub use funds::{GetAccountFundsReq, GetAccountFundsResp};
pub use header::{RequestHeader, ResponseHeader};
pub use login::{LoginReq, LoginResp, PRODUCT_ID};
pub use market::{
    GetAllMarketsReq, GetAllMarketsResp, GetMarketReq, GetMarketResp, MarketDetail, Runner,
};
