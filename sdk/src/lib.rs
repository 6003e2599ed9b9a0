//! Betfair-style exchange gateway - session-authenticated client library.
//!
//! This crate logs a user in, attaches the session token to every
//! authenticated call, translates failure codes into one error type, and
//! decodes the exchange's escaped-delimiter market listing into typed
//! records.
//!
//! # Components
//!
//! - [`codec`] — Escaped-delimiter tokenizer and market record decoder
//! - [`session`] — Session token state
//! - [`gateway`] — Request executor and the [`Gateway`] façade
//! - [`service`] — Remote service traits implemented by transports and fakes
//! - [`client`] — Blocking JSON-over-HTTP transport
//! - [`types`] — Wire requests, responses and error codes
//! - [`error`] — [`ApiError`], [`RecordDecodeError`] and [`GatewayError`]
//!
//! # Example
//!
//! ```rust
//! use bfgateway_sdk::codec::{split_on_delimiter, Market};
//!
//! let fields = split_on_delimiter('~', "a~b\\~c");
//! assert_eq!(fields, vec!["a", "b\\~c"]);
//!
//! let market = Market::from_record(
//!     "12~Match Odds~O~ACTIVE~0~\\Football~1/2~0~1~GBR~0~3~1~10.5~N~Y",
//! )
//! .unwrap();
//! assert_eq!(market.market_id, 12);
//! assert!(market.turning_in_play);
//! ```

pub mod client;
pub mod codec;
pub mod error;
pub mod gateway;
pub mod metrics;
pub mod service;
pub mod session;
pub mod types;

pub use client::{ClientConfig, ClientError, HttpTransport};
pub use codec::{Market, MarketRecordDecoder, RecordDecoder};
pub use error::{ApiError, GatewayError, RecordDecodeError};
pub use gateway::{Gateway, RequestExecutor};
pub use metrics::GatewayMetrics;
pub use service::{ApiRequest, ApiResponse, ExchangeService, GlobalService};
pub use session::SessionState;
pub use types::{
    GetAccountFundsResp, HeaderErrorCode, MarketDetail, OperationErrorCode, PlaceBet,
    PlaceBetResult,
};
