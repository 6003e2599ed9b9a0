//! Gateway façade.
//!
//! Provides the named operations of the trading API on top of the executor
//! and the record decoder.

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::executor::RequestExecutor;
use crate::client::{ClientConfig, ClientError, HttpTransport};
use crate::codec::{split_on_delimiter, MarketRecordDecoder, RecordDecoder, RECORD_SEPARATOR};
use crate::error::{ApiError, GatewayError};
use crate::metrics::GatewayMetrics;
use crate::service::{ExchangeService, GlobalService};
use crate::session::SessionState;
use crate::types::{
    GetAccountFundsErrorCode, GetAccountFundsReq, GetAccountFundsResp, GetAllMarketsErrorCode,
    GetAllMarketsReq, GetMarketErrorCode, GetMarketReq, LoginErrorCode, LoginReq, MarketDetail,
    PlaceBet, PlaceBetResult, PlaceBetsErrorCode, PlaceBetsReq, PRODUCT_ID,
};

/// Session-authenticated access to the global and exchange services.
///
/// The gateway is the sole owner of its session token. `login` takes
/// `&mut self`; callers sharing one gateway across threads must serialize
/// access themselves, or give each user its own gateway.
#[derive(Debug)]
pub struct Gateway<G, E, D = MarketRecordDecoder> {
    /// Account service.
    global: G,

    /// Trading service.
    exchange: E,

    /// Decoder for market listing records.
    decoder: D,

    /// Current session.
    session: SessionState,

    /// Product identifier sent at login.
    product_id: i32,

    /// Metrics.
    metrics: Arc<GatewayMetrics>,
}

impl<G, E> Gateway<G, E>
where
    G: GlobalService,
    E: ExchangeService,
{
    /// Creates a logged-out gateway decoding listings into
    /// [`Market`](crate::codec::Market).
    #[must_use]
    pub fn new(global: G, exchange: E) -> Self {
        Self::with_decoder(global, exchange, MarketRecordDecoder)
    }
}

impl Gateway<HttpTransport, HttpTransport> {
    /// Creates a logged-out gateway talking HTTP to both services, sending
    /// the configured product identifier at login.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn from_config(config: ClientConfig) -> Result<Self, ClientError> {
        let product_id = config.product_id;
        let transport = HttpTransport::new(config)?;
        Ok(Self::new(transport.clone(), transport).with_product_id(product_id))
    }
}

impl<G, E, D> Gateway<G, E, D>
where
    G: GlobalService,
    E: ExchangeService,
    D: RecordDecoder,
{
    /// Creates a logged-out gateway with a custom record decoder.
    #[must_use]
    pub fn with_decoder(global: G, exchange: E, decoder: D) -> Self {
        Self {
            global,
            exchange,
            decoder,
            session: SessionState::new(),
            product_id: PRODUCT_ID,
            metrics: Arc::new(GatewayMetrics::new()),
        }
    }

    /// Starts from an existing session token.
    #[must_use]
    pub fn with_session(mut self, token: impl Into<String>) -> Self {
        self.session = SessionState::with_token(token);
        self
    }

    /// Overrides the product identifier sent at login.
    #[must_use]
    pub fn with_product_id(mut self, product_id: i32) -> Self {
        self.product_id = product_id;
        self
    }

    /// Returns the current session token.
    #[must_use]
    pub fn session_token(&self) -> Option<&str> {
        self.session.token()
    }

    /// Returns true if a session token is held.
    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.is_authenticated()
    }

    /// Returns the product identifier sent at login.
    #[must_use]
    pub const fn product_id(&self) -> i32 {
        self.product_id
    }

    /// Returns the metrics.
    #[must_use]
    pub fn metrics(&self) -> Arc<GatewayMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Returns the account service.
    #[must_use]
    pub const fn global_service(&self) -> &G {
        &self.global
    }

    /// Returns the trading service.
    #[must_use]
    pub const fn exchange_service(&self) -> &E {
        &self.exchange
    }

    fn executor(&self) -> RequestExecutor<'_> {
        RequestExecutor::new(&self.session, &self.metrics)
    }

    /// Opens a session.
    ///
    /// On success the token from the response header becomes the session
    /// token. On any failure the session is cleared, whatever it held before.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] if the login is rejected, or
    /// [`GatewayError::Transport`] if no response is received.
    pub fn login(&mut self, username: &str, password: &str) -> Result<(), GatewayError> {
        debug!(username, "logging in");
        let request = LoginReq::new(username, password, self.product_id);

        let response = match self.global.login(request) {
            Ok(response) => response,
            Err(err) => {
                self.session.clear();
                self.metrics.record_login(false);
                self.metrics.record_transport_error();
                warn!("login transport failure: {}", err);
                return Err(err.into());
            }
        };

        if response.error_code != LoginErrorCode::Ok {
            self.session.clear();
            self.metrics.record_login(false);
            let err = ApiError::new(response.error_code, response.header.error_code);
            warn!(
                error_code = %err.error_code,
                header_error_code = %err.header_error_code,
                "login rejected"
            );
            return Err(err.into());
        }

        self.session.set(response.header.session_token);
        self.metrics.record_login(true);
        info!(username, "logged in");
        Ok(())
    }

    /// Lists every market, decoding each record of the payload in order.
    ///
    /// Empty records, left by a leading or trailing separator, are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] if the call is rejected, or
    /// [`GatewayError::Decode`] if any record is malformed.
    pub fn get_all_markets(&self) -> Result<Vec<D::Output>, GatewayError> {
        debug!("getAllMarkets");
        let response = self.executor().execute(
            GetAllMarketsReq::default(),
            |req| self.exchange.get_all_markets(req),
            GetAllMarketsErrorCode::Ok,
        )?;

        let markets = split_on_delimiter(RECORD_SEPARATOR, &response.market_data)
            .iter()
            .filter(|record| !record.is_empty())
            .map(|record| self.decoder.decode(record))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                self.metrics.record_decode_error();
                warn!("market record rejected: {}", err);
                err
            })?;

        self.metrics.record_decoded(markets.len());
        debug!("decoded {} markets", markets.len());
        Ok(markets)
    }

    /// Fetches one market as returned by the service.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] if the call is rejected.
    pub fn get_market(&self, market_id: i64) -> Result<Option<MarketDetail>, GatewayError> {
        debug!(market_id, "getMarket");
        let response = self.executor().execute(
            GetMarketReq::new(market_id),
            |req| self.exchange.get_market(req),
            GetMarketErrorCode::Ok,
        )?;
        Ok(response.market)
    }

    /// Returns the name of a market.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] if the call is rejected.
    pub fn get_market_name(&self, market_id: i64) -> Result<Option<String>, GatewayError> {
        Ok(self.get_market(market_id)?.map(|market| market.name))
    }

    /// Fetches the account funds.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] if the call is rejected.
    pub fn get_account_funds(&self) -> Result<GetAccountFundsResp, GatewayError> {
        debug!("getAccountFunds");
        self.executor().execute(
            GetAccountFundsReq::default(),
            |req| self.exchange.get_account_funds(req),
            GetAccountFundsErrorCode::Ok,
        )
    }

    /// Places bets, returning one result per bet in submission order.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] if the call is rejected.
    pub fn place_bets(&self, bets: Vec<PlaceBet>) -> Result<Vec<PlaceBetResult>, GatewayError> {
        debug!(count = bets.len(), "placeBets");
        let response = self.executor().execute(
            PlaceBetsReq::new(bets),
            |req| self.exchange.place_bets(req),
            PlaceBetsErrorCode::Ok,
        )?;
        Ok(response.bet_results)
    }
}
