//! Project-list state and flows for the admin dashboard.
//!
//! DESIGN
//! ======
//! The list and delete flows are plain async functions over [`PortalApi`] and
//! [`KeyValueStore`]. The page component only owns signals and the confirm
//! dialog; everything it decides on comes back as data from here.
//!
//! ERROR HANDLING
//! ==============
//! A failed list load keeps whatever was shown before. A failed delete maps to
//! a toast. Neither is retried.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use crate::config::PortalConfig;
use crate::net::api::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::{PageInfo, Project, ProjectPage, ProjectStatus};
use crate::state::notifications::NotificationKind;
use crate::state::session::session_token;
use crate::util::storage::KeyValueStore;

pub const DELETE_CONFIRM_PROMPT: &str = "Are you sure you want to delete this project?";
pub const DELETE_SUCCESS_MESSAGE: &str = "Project deleted successfully";
pub const DELETE_REJECTED_MESSAGE: &str = "Failed to delete project";
pub const DELETE_FAULT_MESSAGE: &str = "An error occurred";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load projects";

/// Header counters. Maintenance and unknown statuses count only toward `total`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub active: usize,
    pub inactive: usize,
}

impl ProjectStats {
    pub fn from_projects(projects: &[Project]) -> Self {
        projects.iter().fold(
            Self {
                total: projects.len(),
                ..Self::default()
            },
            |mut stats, project| {
                match project.status() {
                    ProjectStatus::Active => stats.active += 1,
                    ProjectStatus::Inactive => stats.inactive += 1,
                    ProjectStatus::Maintenance | ProjectStatus::Other => {}
                }
                stats
            },
        )
    }
}

/// One rendered table row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectRow {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub status: String,
    pub edit_href: String,
}

impl ProjectRow {
    /// Identity used when diffing the table: a row whose visible text changed
    /// under the same id is rendered afresh instead of reusing stale cells.
    pub fn render_key(&self) -> (i64, String, String, String) {
        (self.id, self.name.clone(), self.slug.clone(), self.status.clone())
    }
}

#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub projects: Vec<Project>,
    pub stats: ProjectStats,
    pub page: Option<PageInfo>,
    pub loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    /// Replace the list with a freshly loaded page and recount.
    pub fn apply_page(&mut self, page: ProjectPage) {
        self.stats = ProjectStats::from_projects(&page.projects);
        self.projects = page.projects;
        self.page = page.page;
        self.loading = false;
        self.error = None;
    }

    /// A failed reload keeps the current rows and only flags the error.
    pub fn load_failed(&mut self) {
        self.loading = false;
        self.error = Some(LOAD_FAILED_MESSAGE.to_owned());
    }

    /// Rows in API order.
    pub fn rows(&self, config: &PortalConfig) -> Vec<ProjectRow> {
        self.projects
            .iter()
            .map(|project| ProjectRow {
                id: project.id,
                name: project.name.clone(),
                slug: project.slug.clone(),
                status: project.status.clone(),
                edit_href: config.project_edit_href(project.id),
            })
            .collect()
    }

    /// `Page 2 of 5 (48 projects)` when the API sent pagination metadata.
    pub fn page_label(&self) -> Option<String> {
        self.page.map(|info| {
            format!(
                "Page {} of {} ({} projects)",
                info.page,
                info.total_pages.max(1),
                info.total
            )
        })
    }
}

/// Fetch the project list with the stored bearer token.
///
/// # Errors
///
/// Propagates the [`ApiError`]; faults are also logged here.
pub async fn load_dashboard<A, S>(api: &A, store: &S) -> Result<ProjectPage, ApiError>
where
    A: PortalApi,
    S: KeyValueStore,
{
    let token = session_token(store);
    let result = api.list_projects(token.as_deref()).await;
    match &result {
        Ok(page) => log::debug!("loaded {} projects", page.projects.len()),
        Err(e) if e.is_fault() => log::error!("project list failed: {e}"),
        Err(e) => log::warn!("project list rejected: {e}"),
    }
    result
}

/// Result of one delete attempt.
#[derive(Clone, Debug, PartialEq)]
pub enum DeleteOutcome {
    /// The user declined the confirmation; nothing was sent.
    Cancelled,
    /// Deleted. `reloaded` is the refreshed list when the follow-up fetch worked.
    Deleted { reloaded: Option<ProjectPage> },
    Failed(ApiError),
}

impl DeleteOutcome {
    /// Toast to show for this outcome.
    pub fn notification(&self) -> Option<(&'static str, NotificationKind)> {
        match self {
            Self::Cancelled => None,
            Self::Deleted { .. } => Some((DELETE_SUCCESS_MESSAGE, NotificationKind::Success)),
            Self::Failed(e) if e.is_fault() => Some((DELETE_FAULT_MESSAGE, NotificationKind::Error)),
            Self::Failed(_) => Some((DELETE_REJECTED_MESSAGE, NotificationKind::Error)),
        }
    }
}

/// Delete project `id` once the user has answered the confirmation prompt,
/// then reload the list.
pub async fn delete_project<A, S>(api: &A, store: &S, id: i64, confirmed: bool) -> DeleteOutcome
where
    A: PortalApi,
    S: KeyValueStore,
{
    if !confirmed {
        return DeleteOutcome::Cancelled;
    }
    let token = session_token(store);
    match api.delete_project(token.as_deref(), id).await {
        Ok(()) => {
            log::info!("deleted project {id}");
            let reloaded = load_dashboard(api, store).await.ok();
            DeleteOutcome::Deleted { reloaded }
        }
        Err(e) => {
            if e.is_fault() {
                log::error!("delete project {id} failed: {e}");
            } else {
                log::warn!("delete project {id} rejected: {e}");
            }
            DeleteOutcome::Failed(e)
        }
    }
}
