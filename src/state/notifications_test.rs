use super::*;

#[test]
fn notifications_default_empty() {
    assert!(NotificationsState::default().items.is_empty());
}

#[test]
fn push_appends_in_order_with_unique_ids() {
    let mut state = NotificationsState::default();
    let first = state.push("Project deleted successfully", NotificationKind::Success);
    let second = state.push("Failed to delete project", NotificationKind::Error);
    assert_ne!(first, second);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Project deleted successfully");
    assert_eq!(state.items[1].kind, NotificationKind::Error);
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = NotificationsState::default();
    let first = state.push("one", NotificationKind::Info);
    let _second = state.push("two", NotificationKind::Info);
    state.dismiss(&first);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].message, "two");
    state.dismiss("missing");
    assert_eq!(state.items.len(), 1);
}

#[test]
fn kind_css_classes() {
    assert_eq!(NotificationKind::Success.css_class(), "notification-success");
    assert_eq!(NotificationKind::Error.css_class(), "notification-error");
    assert_eq!(NotificationKind::default().css_class(), "notification-info");
}
