use futures::executor::block_on;

use super::*;
use crate::net::api::api_mock::{ApiCall, MockApi};
use crate::util::storage::MemoryStore;

fn project(id: i64, status: &str) -> Project {
    Project {
        id,
        name: format!("Project {id}"),
        slug: format!("project-{id}"),
        status: status.to_owned(),
        description: None,
        url: None,
        icon_url: None,
        order: None,
    }
}

fn page(projects: Vec<Project>) -> ProjectPage {
    ProjectPage { projects, page: None }
}

fn signed_in() -> MemoryStore {
    let store = MemoryStore::default();
    store.set("token", "tok-1").unwrap();
    store
}

// =============================================================
// Stats and rows
// =============================================================

#[test]
fn stats_count_active_and_inactive() {
    let projects = vec![
        project(1, "active"),
        project(2, "inactive"),
        project(3, "active"),
        project(4, "maintenance"),
        project(5, "archived"),
    ];
    let stats = ProjectStats::from_projects(&projects);
    assert_eq!(stats, ProjectStats { total: 5, active: 2, inactive: 1 });
}

#[test]
fn stats_empty_list_is_zero() {
    assert_eq!(ProjectStats::from_projects(&[]), ProjectStats::default());
}

#[test]
fn rows_follow_api_order_with_edit_links() {
    let mut state = DashboardState::default();
    state.apply_page(page(vec![project(7, "active"), project(3, "inactive")]));
    let rows = state.rows(&PortalConfig::default());
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].id, 7);
    assert_eq!(rows[0].edit_href, "/admin/projects/7");
    assert_eq!(rows[1].status, "inactive");
}

#[test]
fn edited_row_changes_render_key() {
    let config = PortalConfig::default();
    let mut state = DashboardState::default();
    state.apply_page(page(vec![project(7, "active")]));
    let before = state.rows(&config);

    let mut renamed = project(7, "active");
    renamed.name = "Renamed".to_owned();
    state.apply_page(page(vec![renamed]));
    let after_rename = state.rows(&config);
    assert_eq!(after_rename[0].id, before[0].id);
    assert_ne!(after_rename[0].render_key(), before[0].render_key());

    state.apply_page(page(vec![project(7, "inactive")]));
    let after_status = state.rows(&config);
    assert_ne!(after_status[0].render_key(), before[0].render_key());

    state.apply_page(page(vec![project(7, "active")]));
    assert_eq!(state.rows(&config)[0].render_key(), before[0].render_key());
}

#[test]
fn apply_page_clears_loading_and_error() {
    let mut state = DashboardState {
        loading: true,
        error: Some("old".to_owned()),
        ..DashboardState::default()
    };
    state.apply_page(page(vec![project(1, "active")]));
    assert!(!state.loading);
    assert_eq!(state.error, None);
    assert_eq!(state.stats.total, 1);
}

#[test]
fn load_failure_keeps_previous_rows() {
    let mut state = DashboardState::default();
    state.apply_page(page(vec![project(1, "active"), project(2, "inactive")]));
    state.loading = true;
    state.load_failed();
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some(LOAD_FAILED_MESSAGE));
    assert_eq!(state.projects.len(), 2);
    assert_eq!(state.stats.total, 2);
}

#[test]
fn page_label_only_with_metadata() {
    let mut state = DashboardState::default();
    assert_eq!(state.page_label(), None);
    state.apply_page(ProjectPage {
        projects: vec![project(1, "active")],
        page: Some(PageInfo { total: 48, page: 2, page_size: 10, total_pages: 5 }),
    });
    assert_eq!(state.page_label().as_deref(), Some("Page 2 of 5 (48 projects)"));
}

// =============================================================
// Load flow
// =============================================================

#[test]
fn load_sends_stored_token() {
    let api = MockApi::default().with_list(Ok(page(vec![project(1, "active")])));
    let store = signed_in();
    let loaded = block_on(load_dashboard(&api, &store)).expect("list should load");
    assert_eq!(loaded.projects.len(), 1);
    assert_eq!(api.calls(), vec![ApiCall::ListProjects { token: Some("tok-1".to_owned()) }]);
}

#[test]
fn load_failure_is_returned() {
    let api = MockApi::default().with_list(Err(ApiError::Transport("offline".to_owned())));
    let store = signed_in();
    assert!(block_on(load_dashboard(&api, &store)).is_err());
}

// =============================================================
// Delete flow
// =============================================================

#[test]
fn cancelled_delete_sends_nothing() {
    let api = MockApi::default();
    let store = signed_in();
    let outcome = block_on(delete_project(&api, &store, 4, false));
    assert_eq!(outcome, DeleteOutcome::Cancelled);
    assert_eq!(outcome.notification(), None);
    assert!(api.calls().is_empty());
}

#[test]
fn confirmed_delete_reloads_and_toasts_success() {
    let api = MockApi::default()
        .with_delete(Ok(()))
        .with_list(Ok(page(vec![project(1, "active")])));
    let store = signed_in();
    let outcome = block_on(delete_project(&api, &store, 4, true));
    assert_eq!(
        api.calls(),
        vec![
            ApiCall::DeleteProject { token: Some("tok-1".to_owned()), id: 4 },
            ApiCall::ListProjects { token: Some("tok-1".to_owned()) },
        ]
    );
    assert_eq!(
        outcome,
        DeleteOutcome::Deleted { reloaded: Some(page(vec![project(1, "active")])) }
    );
    assert_eq!(
        outcome.notification(),
        Some((DELETE_SUCCESS_MESSAGE, NotificationKind::Success))
    );
}

#[test]
fn delete_success_survives_failed_reload() {
    let api = MockApi::default().with_delete(Ok(()));
    let store = signed_in();
    let outcome = block_on(delete_project(&api, &store, 4, true));
    assert_eq!(outcome, DeleteOutcome::Deleted { reloaded: None });
    assert_eq!(api.calls().len(), 2);
}

#[test]
fn rejected_delete_toasts_failure_without_reload() {
    let api = MockApi::default().with_delete(Err(ApiError::Rejected {
        status: 404,
        message: Some("Project not found".to_owned()),
    }));
    let store = signed_in();
    let outcome = block_on(delete_project(&api, &store, 9, true));
    assert_eq!(
        outcome.notification(),
        Some((DELETE_REJECTED_MESSAGE, NotificationKind::Error))
    );
    assert_eq!(api.calls().len(), 1);
}

#[test]
fn transport_failure_toasts_generic_error() {
    let api = MockApi::default().with_delete(Err(ApiError::Transport("offline".to_owned())));
    let store = signed_in();
    let outcome = block_on(delete_project(&api, &store, 9, true));
    assert_eq!(outcome.notification(), Some((DELETE_FAULT_MESSAGE, NotificationKind::Error)));
}
