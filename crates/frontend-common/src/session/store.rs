//! Session token ownership and validation

use super::token_store::TokenStore;
use sneakerdesk_http::SneakerClient;
use std::cell::RefCell;
use std::fmt;

/// Owner of the session token.
///
/// The in-memory copy and the persisted copy always move together: whatever
/// `token()` returns is what the next page load will see.
pub struct Session<S: TokenStore> {
    store: S,
    token: RefCell<Option<String>>,
}

impl<S: TokenStore> Session<S> {
    /// Start a session from whatever token the store kept
    pub fn new(store: S) -> Self {
        let token = store.load();
        Self {
            store,
            token: RefCell::new(token),
        }
    }

    pub fn token(&self) -> Option<String> {
        self.token.borrow().clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.borrow().is_some()
    }

    /// Adopt a freshly issued token
    pub fn set_token(&self, token: impl Into<String>) {
        let token = token.into();
        self.store.save(&token);
        *self.token.borrow_mut() = Some(token);
    }

    /// Drop the token from memory and storage (also used for logout)
    pub fn clear_token(&self) {
        self.store.clear();
        self.token.borrow_mut().take();
    }

    /// Drop the token only if it is still `expected`; a newer token wins
    fn clear_token_if(&self, expected: &str) -> bool {
        if self.token.borrow().as_deref() != Some(expected) {
            return false;
        }
        self.clear_token();
        true
    }

    /// Ask the API whether the current token is still accepted.
    ///
    /// Without a token this answers `false` straight away. Any failure, be it
    /// a rejected token or an unreachable server, clears the token that was
    /// checked. A token adopted while the check was in flight is left alone.
    pub async fn validate_token(&self, client: &SneakerClient) -> bool {
        let Some(token) = self.token() else {
            return false;
        };

        match client.verify_token(&token).await {
            Ok(()) => true,
            Err(err) => {
                if err.is_transport() {
                    tracing::error!(error = %err, "token validation failed");
                }
                if !self.clear_token_if(&token) {
                    tracing::debug!("token replaced during validation, keeping the newer one");
                }
                false
            }
        }
    }
}

impl<S: TokenStore> fmt::Debug for Session<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.is_authenticated())
            .finish_non_exhaustive()
    }
}
