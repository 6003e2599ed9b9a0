//! Client configuration.
//!
//! Provides configuration options for the HTTP transport.

use std::env;
use std::time::Duration;

use super::error::ClientError;
use crate::types::PRODUCT_ID;

/// Default base URL of the global (account) service.
pub const DEFAULT_GLOBAL_URL: &str = "https://api.betfair.com/global/v3";

/// Default base URL of the exchange (trading) service.
pub const DEFAULT_EXCHANGE_URL: &str = "https://api.betfair.com/exchange/v5";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Environment variable overriding the global service URL.
pub const ENV_GLOBAL_URL: &str = "BFGATEWAY_GLOBAL_URL";

/// Environment variable overriding the exchange service URL.
pub const ENV_EXCHANGE_URL: &str = "BFGATEWAY_EXCHANGE_URL";

/// Environment variable overriding the request timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "BFGATEWAY_TIMEOUT_SECS";

/// Environment variable overriding the product identifier sent at login.
pub const ENV_PRODUCT_ID: &str = "BFGATEWAY_PRODUCT_ID";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the global service.
    pub global_url: String,

    /// Base URL of the exchange service.
    pub exchange_url: String,

    /// Request timeout.
    pub timeout: Duration,

    /// User agent string.
    pub user_agent: String,

    /// Product identifier sent at login.
    pub product_id: i32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            global_url: DEFAULT_GLOBAL_URL.to_string(),
            exchange_url: DEFAULT_EXCHANGE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: format!("bfgateway-sdk/{}", env!("CARGO_PKG_VERSION")),
            product_id: PRODUCT_ID,
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given service URLs.
    #[must_use]
    pub fn new(global_url: impl Into<String>, exchange_url: impl Into<String>) -> Self {
        Self {
            global_url: global_url.into(),
            exchange_url: exchange_url.into(),
            ..Default::default()
        }
    }

    /// Loads the configuration from the environment, falling back to
    /// defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ClientError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_GLOBAL_URL) {
            config.global_url = url;
        }
        if let Some(url) = lookup(ENV_EXCHANGE_URL) {
            config.exchange_url = url;
        }
        if let Some(secs) = lookup(ENV_TIMEOUT_SECS) {
            let secs: u64 = secs.trim().parse().map_err(|_| {
                ClientError::InvalidConfig(format!("{} must be a number: {:?}", ENV_TIMEOUT_SECS, secs))
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(id) = lookup(ENV_PRODUCT_ID) {
            config.product_id = id.trim().parse().map_err(|_| {
                ClientError::InvalidConfig(format!("{} must be a number: {:?}", ENV_PRODUCT_ID, id))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Sets the request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the product identifier sent at login.
    #[must_use]
    pub fn with_product_id(mut self, product_id: i32) -> Self {
        self.product_id = product_id;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        validate_url("global_url", &self.global_url)?;
        validate_url("exchange_url", &self.exchange_url)?;

        if self.timeout.is_zero() {
            return Err(ClientError::InvalidConfig(
                "timeout must be > 0".to_string(),
            ));
        }

        Ok(())
    }
}

fn validate_url(name: &str, url: &str) -> Result<(), ClientError> {
    if url.is_empty() {
        return Err(ClientError::InvalidConfig(format!(
            "{} cannot be empty",
            name
        )));
    }

    if !url.starts_with("http://") && !url.starts_with("https://") {
        return Err(ClientError::InvalidConfig(format!(
            "{} must start with http:// or https://",
            name
        )));
    }

    Ok(())
}
