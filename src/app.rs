//! Root admin component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toaster::Toaster;
use crate::config::PortalConfig;
use crate::pages::{dashboard::DashboardPage, login::LoginPage};
use crate::state::notifications::NotificationsState;

/// Root of the admin surface, mounted only on `/admin` paths.
///
/// Provides the configuration and the shared toast state to every page.
#[component]
pub fn AdminApp(config: PortalConfig) -> impl IntoView {
    provide_meta_context();

    provide_context(config);
    provide_context(RwSignal::new(NotificationsState::default()));

    view! {
        <Title text="Portal Admin"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=(StaticSegment("admin"), StaticSegment("login")) view=LoginPage/>
                <Route path=StaticSegment("admin") view=DashboardPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("")) view=DashboardPage/>
            </Routes>
        </Router>
        <Toaster/>
    }
}
