//! Remote service boundary.
//!
//! [`GlobalService`] and [`ExchangeService`] are the two endpoints the
//! gateway talks to. Each call is blocking and one-shot. The HTTP transport
//! in [`crate::client`] implements both; tests supply in-memory fakes.
//!
//! [`ApiRequest`] and [`ApiResponse`] expose the header and status fields
//! every authenticated message shares, so one executor can serve them all.

use crate::client::ClientError;
use crate::types::{
    GetAccountFundsErrorCode, GetAccountFundsReq, GetAccountFundsResp, GetAllMarketsErrorCode,
    GetAllMarketsReq, GetAllMarketsResp, GetMarketErrorCode, GetMarketReq, GetMarketResp,
    LoginErrorCode, LoginReq, LoginResp, OperationErrorCode, PlaceBetsErrorCode, PlaceBetsReq,
    PlaceBetsResp, RequestHeader, ResponseHeader,
};

/// A request that carries a session header.
pub trait ApiRequest {
    /// Returns the request header for modification.
    fn header_mut(&mut self) -> &mut RequestHeader;
}

/// A response that carries an operation status and a header status.
pub trait ApiResponse {
    /// Operation-specific status enumeration.
    type ErrorCode: Clone + PartialEq + Into<OperationErrorCode>;

    /// Returns the operation status.
    fn error_code(&self) -> Self::ErrorCode;

    /// Returns the response header.
    fn header(&self) -> &ResponseHeader;
}

macro_rules! impl_api_request {
    ($($req:ty),+ $(,)?) => {
        $(
            impl ApiRequest for $req {
                fn header_mut(&mut self) -> &mut RequestHeader {
                    &mut self.header
                }
            }
        )+
    };
}

macro_rules! impl_api_response {
    ($($resp:ty => $code:ty),+ $(,)?) => {
        $(
            impl ApiResponse for $resp {
                type ErrorCode = $code;

                fn error_code(&self) -> $code {
                    self.error_code.clone()
                }

                fn header(&self) -> &ResponseHeader {
                    &self.header
                }
            }
        )+
    };
}

impl_api_request!(GetAllMarketsReq, GetMarketReq, GetAccountFundsReq, PlaceBetsReq);

impl_api_response!(
    LoginResp => LoginErrorCode,
    GetAllMarketsResp => GetAllMarketsErrorCode,
    GetMarketResp => GetMarketErrorCode,
    GetAccountFundsResp => GetAccountFundsErrorCode,
    PlaceBetsResp => PlaceBetsErrorCode,
);

/// Account service: session management.
pub trait GlobalService {
    /// Opens a session.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn login(&self, request: LoginReq) -> Result<LoginResp, ClientError>;
}

/// Trading service: markets, funds and bets.
pub trait ExchangeService {
    /// Lists every market as a delimited payload.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn get_all_markets(&self, request: GetAllMarketsReq) -> Result<GetAllMarketsResp, ClientError>;

    /// Fetches one market.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn get_market(&self, request: GetMarketReq) -> Result<GetMarketResp, ClientError>;

    /// Fetches the account balance.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn get_account_funds(
        &self,
        request: GetAccountFundsReq,
    ) -> Result<GetAccountFundsResp, ClientError>;

    /// Places a batch of bets.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received.
    fn place_bets(&self, request: PlaceBetsReq) -> Result<PlaceBetsResp, ClientError>;
}
