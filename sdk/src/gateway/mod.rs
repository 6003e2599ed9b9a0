//! Session-authenticated gateway.
//!
//! # Example
//!
//! ```rust,ignore
//! use bfgateway_sdk::client::{ClientConfig, HttpTransport};
//! use bfgateway_sdk::gateway::Gateway;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let transport = HttpTransport::new(ClientConfig::from_env()?)?;
//!     let mut gateway = Gateway::new(transport.clone(), transport);
//!
//!     gateway.login("username", "password")?;
//!     for market in gateway.get_all_markets()? {
//!         println!("{}", market);
//!     }
//!     println!("available: {}", gateway.get_account_funds()?.avail_balance);
//!
//!     Ok(())
//! }
//! ```

pub mod executor;
pub mod facade;

pub use executor::RequestExecutor;
pub use facade::Gateway;
