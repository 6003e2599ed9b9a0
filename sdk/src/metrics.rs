//! Gateway metrics.
//!
//! Provides atomic counters for monitoring gateway operations.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters for one gateway.
#[derive(Debug, Default)]
pub struct GatewayMetrics {
    /// Authenticated requests sent.
    requests: AtomicU64,

    /// Login attempts.
    logins: AtomicU64,

    /// Failed login attempts.
    login_failures: AtomicU64,

    /// Responses rejected with an API error.
    api_errors: AtomicU64,

    /// Calls that failed in the transport.
    transport_errors: AtomicU64,

    /// Records that failed to decode.
    decode_errors: AtomicU64,

    /// Records decoded.
    records_decoded: AtomicU64,
}

impl GatewayMetrics {
    /// Creates zeroed metrics.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an authenticated request.
    pub fn record_request(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a login attempt.
    pub fn record_login(&self, success: bool) {
        self.logins.fetch_add(1, Ordering::Relaxed);
        if !success {
            self.login_failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Records an API error.
    pub fn record_api_error(&self) {
        self.api_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a transport failure.
    pub fn record_transport_error(&self) {
        self.transport_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a decode failure.
    pub fn record_decode_error(&self) {
        self.decode_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Records decoded records.
    pub fn record_decoded(&self, count: usize) {
        self.records_decoded
            .fetch_add(count as u64, Ordering::Relaxed);
    }

    /// Returns authenticated requests sent.
    #[must_use]
    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    /// Returns login attempts.
    #[must_use]
    pub fn logins(&self) -> u64 {
        self.logins.load(Ordering::Relaxed)
    }

    /// Returns failed login attempts.
    #[must_use]
    pub fn login_failures(&self) -> u64 {
        self.login_failures.load(Ordering::Relaxed)
    }

    /// Returns API errors.
    #[must_use]
    pub fn api_errors(&self) -> u64 {
        self.api_errors.load(Ordering::Relaxed)
    }

    /// Returns transport failures.
    #[must_use]
    pub fn transport_errors(&self) -> u64 {
        self.transport_errors.load(Ordering::Relaxed)
    }

    /// Returns decode failures.
    #[must_use]
    pub fn decode_errors(&self) -> u64 {
        self.decode_errors.load(Ordering::Relaxed)
    }

    /// Returns records decoded.
    #[must_use]
    pub fn records_decoded(&self) -> u64 {
        self.records_decoded.load(Ordering::Relaxed)
    }

    /// Resets all counters.
    pub fn reset(&self) {
        self.requests.store(0, Ordering::Relaxed);
        self.logins.store(0, Ordering::Relaxed);
        self.login_failures.store(0, Ordering::Relaxed);
        self.api_errors.store(0, Ordering::Relaxed);
        self.transport_errors.store(0, Ordering::Relaxed);
        self.decode_errors.store(0, Ordering::Relaxed);
        self.records_decoded.store(0, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_new() {
        let metrics = GatewayMetrics::new();
        assert_eq!(metrics.requests(), 0);
        assert_eq!(metrics.logins(), 0);
        assert_eq!(metrics.records_decoded(), 0);
    }

    #[test]
    fn test_record_login() {
        let metrics = GatewayMetrics::new();
        metrics.record_login(true);
        metrics.record_login(false);
        assert_eq!(metrics.logins(), 2);
        assert_eq!(metrics.login_failures(), 1);
    }

    #[test]
    fn test_record_errors() {
        let metrics = GatewayMetrics::new();
        metrics.record_request();
        metrics.record_api_error();
        metrics.record_transport_error();
        metrics.record_decode_error();
        metrics.record_decoded(4);

        assert_eq!(metrics.requests(), 1);
        assert_eq!(metrics.api_errors(), 1);
        assert_eq!(metrics.transport_errors(), 1);
        assert_eq!(metrics.decode_errors(), 1);
        assert_eq!(metrics.records_decoded(), 4);
    }

    #[test]
    fn test_reset() {
        let metrics = GatewayMetrics::new();
        metrics.record_request();
        metrics.record_decoded(3);
        metrics.reset();
        assert_eq!(metrics.requests(), 0);
        assert_eq!(metrics.records_decoded(), 0);
    }
}
