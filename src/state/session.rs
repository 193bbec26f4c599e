//! Admin session persisted in local storage.
//!
//! SYSTEM CONTEXT
//! ==============
//! Authentication is owned by the API. The client only keeps the opaque
//! bearer token and the user record it was issued with; token presence is the
//! sole validity check.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::config::PortalConfig;
use crate::net::types::{LoginData, UserInfo};
use crate::util::storage::{KeyValueStore, StorageError, load_json, save_json};

pub const TOKEN_KEY: &str = "token";
pub const USER_KEY: &str = "user";

/// Persist a successful login.
///
/// # Errors
///
/// Returns the storage failure when either key was not written. Nothing is
/// left behind in that case, so a half-written session never passes the
/// route guard.
pub fn store_session(store: &impl KeyValueStore, data: &LoginData) -> Result<(), StorageError> {
    let written = store
        .set(TOKEN_KEY, &data.token)
        .and_then(|()| save_json(store, USER_KEY, &data.user));
    if written.is_err() {
        clear_session(store);
    }
    written
}

/// Current bearer token, if one is stored.
pub fn session_token(store: &impl KeyValueStore) -> Option<String> {
    store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
}

pub fn stored_user(store: &impl KeyValueStore) -> Option<UserInfo> {
    load_json(store, USER_KEY)
}

pub fn clear_session(store: &impl KeyValueStore) {
    store.remove(TOKEN_KEY);
    store.remove(USER_KEY);
}

/// Clear the session and return where the browser should go next.
pub fn logout<'a>(store: &impl KeyValueStore, config: &'a PortalConfig) -> &'a str {
    clear_session(store);
    &config.login_path
}

/// Admin pages other than the login page require a stored token.
///
/// Returns the login path when the browser must be sent there.
pub fn guard_redirect<'a>(
    config: &'a PortalConfig,
    path: &str,
    store: &impl KeyValueStore,
) -> Option<&'a str> {
    if !config.is_admin_path(path) || config.is_login_path(path) {
        return None;
    }
    if session_token(store).is_some() {
        return None;
    }
    Some(&config.login_path)
}
