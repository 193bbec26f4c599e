use super::*;
use crate::util::storage::{MemoryStore, RefusingStore};

fn login_data() -> LoginData {
    LoginData {
        token: "tok-123".to_owned(),
        expires_in: Some(3600),
        user: UserInfo {
            id: 1,
            email: "admin@example.com".to_owned(),
            name: "Admin".to_owned(),
            role: "admin".to_owned(),
        },
    }
}

// =============================================================
// Persistence
// =============================================================

#[test]
fn store_session_writes_token_and_user() {
    let store = MemoryStore::default();
    store_session(&store, &login_data()).unwrap();
    assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("tok-123"));
    assert_eq!(stored_user(&store), Some(login_data().user));
}

#[test]
fn refused_write_reports_error() {
    let store = RefusingStore::full();
    assert_eq!(
        store_session(&store, &login_data()),
        Err(StorageError::WriteFailed(TOKEN_KEY.to_owned()))
    );
    assert_eq!(session_token(&store), None);
}

#[test]
fn refused_user_write_drops_token() {
    let store = RefusingStore::refusing(USER_KEY);
    assert!(store_session(&store, &login_data()).is_err());
    assert_eq!(session_token(&store), None);
    let config = PortalConfig::default();
    assert_eq!(guard_redirect(&config, "/admin/", &store), Some("/admin/login"));
}

#[test]
fn blank_token_counts_as_missing() {
    let store = MemoryStore::default();
    store.set(TOKEN_KEY, "  ").unwrap();
    assert_eq!(session_token(&store), None);
}

#[test]
fn logout_clears_both_keys_and_targets_login() {
    let store = MemoryStore::default();
    let config = PortalConfig::default();
    store_session(&store, &login_data()).unwrap();
    assert_eq!(logout(&store, &config), "/admin/login");
    assert_eq!(store.get(TOKEN_KEY), None);
    assert_eq!(store.get(USER_KEY), None);
}

// =============================================================
// Route guard
// =============================================================

#[test]
fn guard_redirects_dashboard_without_token() {
    let store = MemoryStore::default();
    let config = PortalConfig::default();
    assert_eq!(guard_redirect(&config, "/admin/", &store), Some("/admin/login"));
}

#[test]
fn guard_allows_login_page_without_token() {
    let store = MemoryStore::default();
    let config = PortalConfig::default();
    assert_eq!(guard_redirect(&config, "/admin/login", &store), None);
}

#[test]
fn guard_allows_dashboard_with_token() {
    let store = MemoryStore::default();
    let config = PortalConfig::default();
    store_session(&store, &login_data()).unwrap();
    assert_eq!(guard_redirect(&config, "/admin/", &store), None);
}

#[test]
fn guard_ignores_public_pages() {
    let store = MemoryStore::default();
    let config = PortalConfig::default();
    assert_eq!(guard_redirect(&config, "/", &store), None);
    assert_eq!(guard_redirect(&config, "/projects/alpha", &store), None);
}
