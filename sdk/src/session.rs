//! Session state.
//!
//! Holds the token issued by the last successful login. The state lives
//! only as long as the owning gateway; nothing is persisted.

use std::fmt;

/// Current authentication token, if any.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    token: Option<String>,
}

impl SessionState {
    /// Creates an unauthenticated session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a session that already holds a token.
    #[must_use]
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    /// Returns the token.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns true if a token is held.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Replaces the token.
    pub fn set(&mut self, token: Option<String>) {
        self.token = token;
    }

    /// Drops the token.
    pub fn clear(&mut self) {
        self.token = None;
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = self.token.as_ref().map(|_| "<redacted>");
        f.debug_struct("SessionState").field("token", &token).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_unauthenticated() {
        let session = SessionState::new();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_set_and_clear() {
        let mut session = SessionState::new();
        session.set(Some("12345".to_string()));
        assert_eq!(session.token(), Some("12345"));
        assert!(session.is_authenticated());

        session.clear();
        assert!(session.token().is_none());
    }

    #[test]
    fn test_debug_hides_token() {
        let session = SessionState::with_token("secret-token");
        let debug = format!("{:?}", session);
        assert!(!debug.contains("secret-token"));
        assert!(debug.contains("redacted"));
    }
}
