//! Authenticated request executor.
//!
//! Every authenticated call goes through [`RequestExecutor::execute`] once:
//! the current session token is written into the request header, the remote
//! call is made, and a non-OK status becomes an [`ApiError`]. There is no
//! retry, backoff or caching.

use tracing::{debug, warn};

use crate::client::ClientError;
use crate::error::{ApiError, GatewayError};
use crate::metrics::GatewayMetrics;
use crate::service::{ApiRequest, ApiResponse};
use crate::session::SessionState;
use crate::types::RequestHeader;

/// Executes remote calls on behalf of a session.
#[derive(Debug, Clone, Copy)]
pub struct RequestExecutor<'a> {
    session: &'a SessionState,
    metrics: &'a GatewayMetrics,
}

impl<'a> RequestExecutor<'a> {
    /// Creates an executor bound to a session.
    #[must_use]
    pub const fn new(session: &'a SessionState, metrics: &'a GatewayMetrics) -> Self {
        Self { session, metrics }
    }

    /// Attaches the session token to `request`, invokes `call`, and checks
    /// the response status against `ok_code`.
    ///
    /// An absent token is passed through as-is; whether it is accepted is
    /// for the service to decide.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Api`] carrying the response's operation and
    /// header codes if the status differs from `ok_code`, or
    /// [`GatewayError::Transport`] if `call` fails.
    pub fn execute<Req, Resp, F>(
        &self,
        mut request: Req,
        call: F,
        ok_code: Resp::ErrorCode,
    ) -> Result<Resp, GatewayError>
    where
        Req: ApiRequest,
        Resp: ApiResponse,
        F: FnOnce(Req) -> Result<Resp, ClientError>,
    {
        *request.header_mut() = RequestHeader::with_token(self.session.token().map(str::to_string));
        self.metrics.record_request();

        let response = call(request).map_err(|err| {
            self.metrics.record_transport_error();
            warn!("transport failure: {}", err);
            err
        })?;

        let error_code = response.error_code();
        if error_code != ok_code {
            let err = ApiError::new(error_code, response.header().error_code.clone());
            self.metrics.record_api_error();
            warn!(
                error_code = %err.error_code,
                header_error_code = %err.header_error_code,
                "request rejected"
            );
            return Err(err.into());
        }

        debug!("request succeeded");
        Ok(response)
    }
}
