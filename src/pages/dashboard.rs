//! Admin dashboard: project counts, project table, delete and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route. The route guard in the start
//! function has already sent token-less visitors to the login page, so the
//! page loads the project list as soon as it mounts.

use leptos::prelude::*;

use crate::components::project_table::{ProjectStatsCards, ProjectTable};
use crate::config::PortalConfig;
use crate::state::dashboard::DashboardState;
use crate::state::notifications::NotificationsState;
use crate::state::session::stored_user;
use crate::util::storage::LocalSessionStore;

#[cfg(feature = "csr")]
async fn reload(config: PortalConfig, dashboard: RwSignal<DashboardState>) {
    let api = crate::net::api::HttpApi::new(&config);
    match crate::state::dashboard::load_dashboard(&api, &LocalSessionStore).await {
        Ok(page) => dashboard.update(|state| state.apply_page(page)),
        Err(_) => dashboard.update(DashboardState::load_failed),
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<PortalConfig>();
    let notifications = expect_context::<RwSignal<NotificationsState>>();
    let dashboard = RwSignal::new(DashboardState {
        loading: true,
        ..DashboardState::default()
    });
    let user_name = stored_user(&LocalSessionStore)
        .map(|user| if user.name.is_empty() { user.email } else { user.name })
        .unwrap_or_default();

    #[cfg(feature = "csr")]
    leptos::task::spawn_local(reload(config.clone(), dashboard));

    let rows = Signal::derive({
        let config = config.clone();
        move || dashboard.with(|state| state.rows(&config))
    });
    let stats = Signal::derive(move || dashboard.with(|state| state.stats));

    let delete_config = config.clone();
    let on_delete = Callback::new(move |id: i64| {
        #[cfg(feature = "csr")]
        {
            use crate::state::dashboard::{DELETE_CONFIRM_PROMPT, DeleteOutcome, delete_project};

            let confirmed = crate::util::dom::confirm(DELETE_CONFIRM_PROMPT);
            let config = delete_config.clone();
            leptos::task::spawn_local(async move {
                let api = crate::net::api::HttpApi::new(&config);
                let outcome = delete_project(&api, &LocalSessionStore, id, confirmed).await;
                if let DeleteOutcome::Deleted { reloaded: Some(page) } = &outcome {
                    let page = page.clone();
                    dashboard.update(|state| state.apply_page(page));
                }
                if let Some((message, kind)) = outcome.notification() {
                    crate::components::toaster::notify(notifications, message, kind);
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (id, &delete_config, notifications);
        }
    });

    let on_logout = move |_| {
        let target = crate::state::session::logout(&LocalSessionStore, &config).to_owned();
        #[cfg(feature = "csr")]
        crate::util::dom::navigate(&target);
        #[cfg(not(feature = "csr"))]
        let _ = target;
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header toolbar">
                <span class="toolbar__title">"Projects"</span>
                <span class="toolbar__spacer"></span>
                <Show when={
                    let user_name = user_name.clone();
                    move || !user_name.is_empty()
                }>
                    <span class="toolbar__self">{user_name.clone()}</span>
                </Show>
                <button class="btn toolbar__logout" on:click=on_logout title="Logout">
                    "Logout"
                </button>
            </header>

            <ProjectStatsCards stats=stats/>

            <Show when=move || dashboard.with(|state| state.error.is_some())>
                <p class="dashboard-page__error">
                    {move || dashboard.with(|state| state.error.clone().unwrap_or_default())}
                </p>
            </Show>
            <Show
                when=move || !dashboard.with(|state| state.loading)
                fallback=move || view! { <p>"Loading projects..."</p> }
            >
                <ProjectTable rows=rows on_delete=on_delete/>
            </Show>
            <Show when=move || dashboard.with(|state| state.page.is_some())>
                <p class="dashboard-page__pagination">
                    {move || dashboard.with(|state| state.page_label().unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
