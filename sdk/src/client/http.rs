//! HTTP transport implementation.
//!
//! Implements both service traits as JSON `POST` calls:
//! `{global_url}/login` and `{exchange_url}/{operation}`.

use reqwest::blocking::Client;
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use super::config::ClientConfig;
use super::error::ClientError;
use crate::service::{ExchangeService, GlobalService};
use crate::types::{
    GetAccountFundsReq, GetAccountFundsResp, GetAllMarketsReq, GetAllMarketsResp, GetMarketReq,
    GetMarketResp, LoginReq, LoginResp, PlaceBetsReq, PlaceBetsResp,
};

/// Blocking JSON transport for the global and exchange services.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    config: ClientConfig,
    http: Client,
}

impl HttpTransport {
    /// Creates a transport with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { config, http })
    }

    /// Creates a transport with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Returns the transport configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn post<Req, Resp>(&self, base_url: &str, operation: &str, request: &Req) -> Result<Resp, ClientError>
    where
        Req: Serialize,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", base_url.trim_end_matches('/'), operation);
        debug!("POST {}", url);

        let response = self.http.post(&url).json(request).send()?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body = response.text()?;
        serde_json::from_str(&body).map_err(|e| ClientError::Deserialization(e.to_string()))
    }
}

impl GlobalService for HttpTransport {
    fn login(&self, request: LoginReq) -> Result<LoginResp, ClientError> {
        self.post(&self.config.global_url, "login", &request)
    }
}

impl ExchangeService for HttpTransport {
    fn get_all_markets(&self, request: GetAllMarketsReq) -> Result<GetAllMarketsResp, ClientError> {
        self.post(&self.config.exchange_url, "getAllMarkets", &request)
    }

    fn get_market(&self, request: GetMarketReq) -> Result<GetMarketResp, ClientError> {
        self.post(&self.config.exchange_url, "getMarket", &request)
    }

    fn get_account_funds(
        &self,
        request: GetAccountFundsReq,
    ) -> Result<GetAccountFundsResp, ClientError> {
        self.post(&self.config.exchange_url, "getAccountFunds", &request)
    }

    fn place_bets(&self, request: PlaceBetsReq) -> Result<PlaceBetsResp, ClientError> {
        self.post(&self.config.exchange_url, "placeBets", &request)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::codec::Market;
    use crate::error::GatewayError;
    use crate::gateway::Gateway;
    use crate::types::{
        GetAccountFundsErrorCode, GetAllMarketsErrorCode, HeaderErrorCode, LoginErrorCode,
        OperationErrorCode,
    };

    const RECORD: &str = "7~Winner~O~ACTIVE~0~\\Racing~1/7~0~1~GBR~0~8~1~250.75~N~Y";

    fn transport_for(uri: &str) -> HttpTransport {
        let config = ClientConfig::new(format!("{}/global", uri), format!("{}/exchange", uri));
        HttpTransport::new(config).expect("transport")
    }

    #[test]
    fn test_transport_new() {
        let config = ClientConfig::new("https://g.example.com", "https://x.example.com");
        assert!(HttpTransport::new(config).is_ok());
    }

    #[test]
    fn test_transport_with_defaults() {
        assert!(HttpTransport::with_defaults().is_ok());
    }

    #[test]
    fn test_transport_invalid_config() {
        let config = ClientConfig::new("", "https://x.example.com");
        assert!(matches!(
            HttpTransport::new(config),
            Err(ClientError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_transport_connection_refused() {
        let transport = transport_for("http://127.0.0.1:1");
        let result = transport.get_account_funds(GetAccountFundsReq::default());
        assert!(matches!(
            result,
            Err(ClientError::Request(_)) | Err(ClientError::Timeout)
        ));
    }

    #[tokio::test]
    async fn test_login_and_list_markets_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/global/login"))
            .and(body_partial_json(json!({
                "username": "harold",
                "password": "s3kr1t",
                "productId": 82
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "OK", "sessionToken": "12345"},
                "errorCode": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/exchange/getAllMarkets"))
            .and(body_partial_json(json!({"header": {"sessionToken": "12345"}})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "OK"},
                "errorCode": "OK",
                "marketData": format!(":{}", RECORD)
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let markets = tokio::task::spawn_blocking(move || -> Result<Vec<Market>, GatewayError> {
            let transport = transport_for(&uri);
            let mut gateway = Gateway::new(transport.clone(), transport);
            gateway.login("harold", "s3kr1t")?;
            gateway.get_all_markets()
        })
        .await
        .expect("join")
        .expect("markets");

        assert_eq!(markets.len(), 1);
        assert_eq!(markets[0].market_id, 7);
        assert_eq!(markets[0].total_amount_matched, Decimal::new(25075, 2));
        assert!(markets[0].turning_in_play);
    }

    #[tokio::test]
    async fn test_rejected_login_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/global/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "PRODUCT_REQUIRES_FUNDED_ACCOUNT"},
                "errorCode": "API_ERROR"
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, logged_in) = tokio::task::spawn_blocking(move || {
            let transport = transport_for(&uri);
            let mut gateway = Gateway::new(transport.clone(), transport).with_session("old");
            let result = gateway.login("harold", "wrong");
            (result, gateway.is_logged_in())
        })
        .await
        .expect("join");

        assert!(!logged_in);
        let err = result.expect_err("should fail");
        let api = err.as_api().expect("api error");
        assert_eq!(api.error_code, OperationErrorCode::Login(LoginErrorCode::ApiError));
        assert_eq!(
            api.header_error_code,
            HeaderErrorCode::ProductRequiresFundedAccount
        );
    }

    #[tokio::test]
    async fn test_api_error_over_http() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/exchange/getAllMarkets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "NO_SESSION"},
                "errorCode": "API_ERROR"
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            let transport = transport_for(&uri);
            Gateway::new(transport.clone(), transport).get_all_markets()
        })
        .await
        .expect("join");

        let err = result.expect_err("should fail");
        assert!(err.is_no_session());
        assert_eq!(
            err.as_api().map(|e| e.error_code.clone()),
            Some(OperationErrorCode::GetAllMarkets(
                GetAllMarketsErrorCode::ApiError
            ))
        );
    }

    #[tokio::test]
    async fn test_unlisted_codes_raise_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/exchange/getAccountFunds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "EXCEEDED_THROTTLE"},
                "errorCode": "ACCOUNT_FUNDS_ERROR"
            })))
            .mount(&server)
            .await;

        Mock::given(method("POST"))
            .and(path("/exchange/getAllMarkets"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "MAINTENANCE_WINDOW"},
                "errorCode": "API_ERROR"
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (funds, markets) = tokio::task::spawn_blocking(move || {
            let transport = transport_for(&uri);
            let gateway = Gateway::new(transport.clone(), transport).with_session("12345");
            (gateway.get_account_funds(), gateway.get_all_markets())
        })
        .await
        .expect("join");

        let err = funds.expect_err("should fail");
        let api = err.as_api().expect("api error");
        assert_eq!(
            api.error_code,
            OperationErrorCode::GetAccountFunds(GetAccountFundsErrorCode::Other(
                "ACCOUNT_FUNDS_ERROR".to_string()
            ))
        );
        assert_eq!(api.header_error_code, HeaderErrorCode::ExceededThrottle);
        assert_eq!(
            err.to_string(),
            "APIError(ACCOUNT_FUNDS_ERROR, EXCEEDED_THROTTLE)"
        );

        let err = markets.expect_err("should fail");
        let api = err.as_api().expect("api error");
        assert_eq!(
            api.header_error_code,
            HeaderErrorCode::Other("MAINTENANCE_WINDOW".to_string())
        );
    }

    #[tokio::test]
    async fn test_login_without_status_fails_and_clears_session() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/global/login"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let uri = server.uri();
        let (result, token) = tokio::task::spawn_blocking(move || {
            let transport = transport_for(&uri);
            let mut gateway = Gateway::new(transport.clone(), transport).with_session("old");
            let result = gateway.login("harold", "s3kr1t");
            (result, gateway.session_token().map(str::to_string))
        })
        .await
        .expect("join");

        assert!(matches!(
            result,
            Err(GatewayError::Transport(ClientError::Deserialization(_)))
        ));
        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_response_without_status_is_not_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/exchange/getAccountFunds"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "OK"},
                "availBalance": 10
            })))
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            let transport = transport_for(&uri);
            Gateway::new(transport.clone(), transport)
                .with_session("12345")
                .get_account_funds()
        })
        .await
        .expect("join");

        assert!(matches!(
            result,
            Err(GatewayError::Transport(ClientError::Deserialization(_)))
        ));
    }

    #[tokio::test]
    async fn test_gateway_from_config_sends_product_id() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/global/login"))
            .and(body_partial_json(json!({"productId": 4})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "header": {"errorCode": "OK", "sessionToken": "abc"},
                "errorCode": "OK"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let uri = server.uri();
        let token = tokio::task::spawn_blocking(move || -> Result<Option<String>, GatewayError> {
            let config = ClientConfig::new(format!("{}/global", uri), format!("{}/exchange", uri))
                .with_product_id(4);
            let mut gateway = Gateway::from_config(config)?;
            assert_eq!(gateway.product_id(), 4);
            gateway.login("harold", "s3kr1t")?;
            Ok(gateway.session_token().map(str::to_string))
        })
        .await
        .expect("join")
        .expect("login");

        assert_eq!(token.as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_http_status_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/exchange/getAccountFunds"))
            .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            let transport = transport_for(&uri);
            Gateway::new(transport.clone(), transport).get_account_funds()
        })
        .await
        .expect("join");

        match result {
            Err(GatewayError::Transport(ClientError::Status { status, body })) => {
                assert_eq!(status, 503);
                assert_eq!(body, "maintenance");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/exchange/placeBets"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let uri = server.uri();
        let result = tokio::task::spawn_blocking(move || {
            transport_for(&uri).place_bets(PlaceBetsReq::default())
        })
        .await
        .expect("join");

        assert!(matches!(result, Err(ClientError::Deserialization(_))));
    }
}
