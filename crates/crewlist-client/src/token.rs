//! Bearer-token storage.
//!
//! The backend hands out one opaque credential at login. This module models
//! where that credential lives: a [`TokenStore`] is injected into the client
//! and read by the auth interceptor on every outgoing request. Writing and
//! clearing the token belong to the application's login/logout flow; nothing
//! here validates or refreshes it.

use std::sync::RwLock;

use anyhow::{Context, Result};
use keyring::Entry;
use tracing::warn;

/// Keychain service name for the persistent store
const SERVICE_NAME: &str = "crewlist";

/// Keychain entry key holding the access token
const TOKEN_KEY: &str = "access-token";

/// Where the bearer credential lives.
///
/// `get` runs on every outgoing request and must never fail the request:
/// implementations report "no token" rather than erroring.
pub trait TokenStore: Send + Sync {
    /// Current token, if one has been stored.
    fn get(&self) -> Option<String>;

    /// Store a token, replacing any previous one.
    fn set(&self, token: &str) -> Result<()>;

    /// Remove the stored token.
    fn clear(&self) -> Result<()>;
}

/// Process-wide in-memory token slot. The default store.
#[derive(Default)]
pub struct InMemoryTokenStore {
    token: RwLock<Option<String>>,
}

impl InMemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl TokenStore for InMemoryTokenStore {
    fn get(&self) -> Option<String> {
        self.token.read().ok().and_then(|slot| slot.clone())
    }

    fn set(&self, token: &str) -> Result<()> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| anyhow::anyhow!("token slot poisoned"))?;
        *slot = Some(token.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut slot = self
            .token
            .write()
            .map_err(|_| anyhow::anyhow!("token slot poisoned"))?;
        *slot = None;
        Ok(())
    }
}

/// Token store backed by the OS keychain.
///
/// The credential survives process restarts under a fixed service/key pair,
/// like the web client's persistent local storage. Reads degrade to "absent"
/// on keychain trouble so a locked or missing keychain never fails a request.
pub struct KeyringTokenStore {
    service: String,
}

impl KeyringTokenStore {
    /// Store under the default `crewlist` service name.
    pub fn new() -> Self {
        Self::with_service(SERVICE_NAME)
    }

    /// Store under a custom keychain service name.
    pub fn with_service(service: &str) -> Self {
        Self {
            service: service.to_string(),
        }
    }

    fn entry(&self) -> Result<Entry> {
        Entry::new(&self.service, TOKEN_KEY).context("Failed to create keyring entry")
    }
}

impl Default for KeyringTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TokenStore for KeyringTokenStore {
    fn get(&self) -> Option<String> {
        match self.entry() {
            Ok(entry) => read_token(&entry),
            Err(e) => {
                warn!(error = %e, "Keychain unavailable, treating token as absent");
                None
            }
        }
    }

    fn set(&self, token: &str) -> Result<()> {
        self.entry()?
            .set_password(token)
            .context("Failed to store token in keychain")
    }

    fn clear(&self) -> Result<()> {
        match self.entry()?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => Err(e).context("Failed to delete token from keychain"),
        }
    }
}

/// Interpret a keychain read. A missing entry is the normal signed-out
/// state; any other failure is logged and reported as absent.
fn read_token(entry: &Entry) -> Option<String> {
    match entry.get_password() {
        Ok(token) => Some(token),
        Err(keyring::Error::NoEntry) => None,
        Err(e) => {
            warn!(error = %e, "Failed to read token from keychain");
            None
        }
    }
}
