//! HTTP transport for the global and exchange services.
//!
//! [`HttpTransport`] implements both [`GlobalService`](crate::service::GlobalService)
//! and [`ExchangeService`](crate::service::ExchangeService), so one transport
//! can back both sides of a [`Gateway`](crate::gateway::Gateway).
//!
//! # Example
//!
//! ```rust,ignore
//! use bfgateway_sdk::client::{ClientConfig, HttpTransport};
//!
//! let config = ClientConfig::new(
//!     "https://api.example.com/global/v3",
//!     "https://api.example.com/exchange/v5",
//! );
//! let transport = HttpTransport::new(config)?;
//! ```

pub mod config;
pub mod error;
pub mod http;

pub use config::ClientConfig;
pub use error::ClientError;
pub use http::HttpTransport;
