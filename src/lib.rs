//! # portal-web
//!
//! Leptos + WASM front-end for the portal site. Two surfaces share this crate:
//! the admin dashboard (login, project list, delete) rendered by Leptos, and
//! the public virtual-room page whose server-rendered markup is driven by the
//! imperative controllers in [`controllers`].
//!
//! Every model and flow lives in plain Rust (`state`, `net`, `util`) so it is
//! unit-tested natively. Browser glue is gated behind the `csr` feature.

pub mod app;
pub mod components;
pub mod config;
#[cfg(feature = "csr")]
pub mod controllers;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: logging, route guard, admin mount, room controllers.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(config::log_level());

    let config = config::PortalConfig::load();
    let Some(window) = web_sys::window() else {
        return;
    };
    let path = window.location().pathname().unwrap_or_default();
    let store = util::storage::LocalSessionStore;

    if let Some(target) = state::session::guard_redirect(&config, &path, &store) {
        log::info!("no admin session, redirecting to {target}");
        util::dom::navigate(target);
        return;
    }

    if config.is_admin_path(&path) {
        log::debug!("mounting admin app at {path}");
        leptos::mount::mount_to_body(move || {
            use crate::app::AdminApp;
            use leptos::prelude::*;

            view! { <AdminApp config=config/> }
        });
    }

    controllers::install();
}
