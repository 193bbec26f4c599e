//! Admin login page (email + password).
//!
//! SYSTEM CONTEXT
//! ==============
//! Credentials go to `POST /auth/login`. On success the session is stored and
//! the browser does a full load of the dashboard so the route guard and the
//! app mount run against the new token.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::config::PortalConfig;
use crate::net::api::PortalApi;
use crate::net::types::LoginRequest;
use crate::state::session::store_session;
use crate::util::storage::KeyValueStore;

pub const LOGIN_FAILED_MESSAGE: &str = "Login failed";
pub const LOGIN_FAULT_MESSAGE: &str = "An error occurred. Please try again.";

/// What the page does after a submit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Redirect(String),
    ShowError(String),
}

/// Run the login request and persist the session on success.
pub async fn submit_login<A, S>(
    api: &A,
    store: &S,
    config: &PortalConfig,
    email: &str,
    password: &str,
) -> LoginOutcome
where
    A: PortalApi,
    S: KeyValueStore,
{
    let request = LoginRequest {
        email: email.trim().to_owned(),
        password: password.to_owned(),
    };
    match api.login(&request).await {
        Ok(data) => match store_session(store, &data) {
            Ok(()) => {
                log::info!("signed in as {}", data.user.email);
                LoginOutcome::Redirect(config.dashboard_path.clone())
            }
            Err(e) => {
                log::error!("login succeeded but session was not stored: {e}");
                LoginOutcome::ShowError(LOGIN_FAULT_MESSAGE.to_owned())
            }
        },
        Err(e) if e.is_fault() => {
            log::error!("login error: {e}");
            LoginOutcome::ShowError(LOGIN_FAULT_MESSAGE.to_owned())
        }
        Err(e) => {
            log::warn!("login rejected: {e}");
            let message = e.server_message().unwrap_or(LOGIN_FAILED_MESSAGE);
            LoginOutcome::ShowError(message.to_owned())
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(None);

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let email_value = email.get();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::new(&config);
                let store = crate::util::storage::LocalSessionStore;
                match submit_login(&api, &store, &config, &email_value, &password_value).await {
                    LoginOutcome::Redirect(href) => crate::util::dom::navigate(&href),
                    LoginOutcome::ShowError(message) => {
                        error.set(Some(message));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = &config;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Admin Login"</h1>
                <form id="login-form" class="login-form" on:submit=on_submit>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="admin@example.com"
                        required=true
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required=true
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.get().is_some()>
                    <p id="error-message" class="login-message login-message--error">
                        {move || error.get().unwrap_or_default()}
                    </p>
                </Show>
            </div>
        </div>
    }
}
