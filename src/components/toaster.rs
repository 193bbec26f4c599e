//! Toast stack for the admin app.
//!
//! Toasts live in the `RwSignal<NotificationsState>` context. [`notify`] pushes
//! one and schedules its removal; the [`Toaster`] component only renders.

use leptos::prelude::*;

use crate::state::notifications::{NotificationKind, NotificationsState};

/// Show a toast for [`NOTIFICATION_TTL_MS`](crate::config::NOTIFICATION_TTL_MS).
pub fn notify(notifications: RwSignal<NotificationsState>, message: &str, kind: NotificationKind) {
    let id = notifications.try_update(|state| state.push(message, kind));

    #[cfg(feature = "csr")]
    if let Some(id) = id {
        gloo_timers::callback::Timeout::new(crate::config::NOTIFICATION_TTL_MS, move || {
            let _ = notifications.try_update(|state| state.dismiss(&id));
        })
        .forget();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

#[component]
pub fn Toaster() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationsState>>();

    view! {
        <div class="notifications" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|item| item.id.clone()
                let:item
            >
                <div class=format!("notification {}", item.kind.css_class())>{item.message}</div>
            </For>
        </div>
    }
}
