//! Persistence for the bearer token

use crate::config::AppConfig;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys::Storage;

/// Key-value persistence for the session token.
///
/// Implementations store the token verbatim; nothing here looks inside it.
pub trait TokenStore {
    /// Persist `token`, replacing any previous value
    fn save(&self, token: &str);

    /// The last persisted token, if any
    fn load(&self) -> Option<String>;

    /// Forget the persisted token
    fn clear(&self);
}

/// Browser local storage under a fixed key.
///
/// Where local storage is unavailable (disabled, sandboxed frame, no window)
/// every operation degrades to "no token" with a warning.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocalTokenStore {
    key: &'static str,
}

impl LocalTokenStore {
    pub const fn new(key: &'static str) -> Self {
        Self { key }
    }
}

impl Default for LocalTokenStore {
    fn default() -> Self {
        Self::new(AppConfig::TOKEN_KEY)
    }
}

impl TokenStore for LocalTokenStore {
    fn save(&self, token: &str) {
        let Some(storage) = local_storage() else {
            tracing::warn!(key = self.key, "local storage unavailable, token kept in memory only");
            return;
        };
        // Stored raw rather than JSON-encoded so other tabs and tools read it as-is
        if let Err(err) = storage.set_item(self.key, token) {
            tracing::warn!(key = self.key, ?err, "failed to persist token");
        }
    }

    fn load(&self) -> Option<String> {
        let Some(storage) = local_storage() else {
            tracing::warn!(key = self.key, "local storage unavailable, starting without a token");
            return None;
        };
        match storage.get_item(self.key) {
            Ok(token) => token.filter(|token| !token.is_empty()),
            Err(err) => {
                tracing::warn!(key = self.key, ?err, "failed to read persisted token");
                None
            }
        }
    }

    fn clear(&self) {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(err) = storage.remove_item(self.key) {
            tracing::warn!(key = self.key, ?err, "failed to remove persisted token");
        }
    }
}

/// Get localStorage
#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Off the browser there is no window to ask
#[cfg(not(target_arch = "wasm32"))]
fn local_storage() -> Option<Storage> {
    None
}

/// In-process token store; clones share the same slot
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStore {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `token`, as if persisted by an earlier visit
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn save(&self, token: &str) {
        *self.slot.borrow_mut() = Some(token.to_owned());
    }

    fn load(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    fn clear(&self) {
        self.slot.borrow_mut().take();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryTokenStore::new();
        assert_eq!(store.load(), None);

        store.save("abc");
        assert_eq!(store.load().as_deref(), Some("abc"));

        store.save("def");
        assert_eq!(store.load().as_deref(), Some("def"));

        store.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_memory_store_clones_share_state() {
        let store = MemoryTokenStore::with_token("abc");
        let other = store.clone();

        other.clear();
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_local_store_uses_token_key() {
        assert_eq!(LocalTokenStore::default(), LocalTokenStore::new("token"));
    }

    #[test]
    fn test_local_store_without_storage_reads_as_empty() {
        let store = LocalTokenStore::default();

        store.save("abc");
        assert_eq!(store.load(), None);
        store.clear();
        assert_eq!(store.load(), None);
    }
}
