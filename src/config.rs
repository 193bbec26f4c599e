//! Client configuration and timing constants.
//!
//! SYSTEM CONTEXT
//! ==============
//! The front-end owns no runtime environment. The only knob is the API base,
//! which a build may override at compile time; everything else is a fixed
//! constant shared by the controllers and the admin pages.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// API prefix used when no build-time override is present.
pub const DEFAULT_API_BASE: &str = "/api/v1";
pub const ADMIN_PREFIX: &str = "/admin";
pub const LOGIN_PATH: &str = "/admin/login";
pub const DASHBOARD_PATH: &str = "/admin/";

/// Per-item delay between staggered menu item reveals.
pub const STAGGER_STEP_MS: u32 = 50;
/// Lifetime of a toast notification.
pub const NOTIFICATION_TTL_MS: u32 = 3000;
/// Touch hotspots collapse on their own after this long.
pub const HOTSPOT_AUTO_COLLAPSE_MS: u32 = 3000;
/// Quiet period before a resize burst is acted on.
pub const RESIZE_DEBOUNCE_MS: u32 = 100;
/// Viewport widths below this use the mobile room formula.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Resolved configuration, provided to the admin app through context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PortalConfig {
    pub api_base: String,
    pub login_path: String,
    pub dashboard_path: String,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            login_path: LOGIN_PATH.to_owned(),
            dashboard_path: DASHBOARD_PATH.to_owned(),
        }
    }
}

impl PortalConfig {
    /// Build the configuration, honouring a compile-time API base override.
    pub fn load() -> Self {
        let raw = option_env!("PORTAL_API_BASE").or(option_env!("TRUNK_PUBLIC_PORTAL_API_BASE"));
        Self::with_api_base(raw)
    }

    /// Defaults with an optional API base; blank values are ignored.
    pub fn with_api_base(raw: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(base) = raw.map(str::trim).filter(|base| !base.is_empty()) {
            config.api_base = base.trim_end_matches('/').to_owned();
        }
        config
    }

    /// Absolute API URL for `path` (which starts with `/`).
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_base)
    }

    pub fn is_admin_path(&self, path: &str) -> bool {
        path == ADMIN_PREFIX || path.starts_with("/admin/")
    }

    pub fn is_login_path(&self, path: &str) -> bool {
        path.trim_end_matches('/') == self.login_path.trim_end_matches('/')
    }

    /// Edit link target for a project row.
    pub fn project_edit_href(&self, id: i64) -> String {
        format!("{ADMIN_PREFIX}/projects/{id}")
    }
}

/// Console log level: verbose in debug builds only.
pub fn log_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Info
    }
}
