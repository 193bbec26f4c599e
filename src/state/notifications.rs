//! Toast notifications for the admin dashboard.
//!
//! Toasts are pushed by flows and removed by a timer after
//! [`NOTIFICATION_TTL_MS`](crate::config::NOTIFICATION_TTL_MS).

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[default]
    Info,
}

impl NotificationKind {
    /// Modifier class, e.g. `notification-success`.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Success => "notification-success",
            Self::Error => "notification-error",
            Self::Info => "notification-info",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub message: String,
    pub kind: NotificationKind,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationsState {
    pub items: Vec<Notification>,
}

impl NotificationsState {
    /// Add a toast and return its id for later dismissal.
    pub fn push(&mut self, message: impl Into<String>, kind: NotificationKind) -> String {
        let id = uuid::Uuid::new_v4().to_string();
        self.items.push(Notification {
            id: id.clone(),
            message: message.into(),
            kind,
        });
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: &str) {
        self.items.retain(|item| item.id != id);
    }
}
