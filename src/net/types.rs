//! JSON envelopes and DTOs for the portal REST API.
//!
//! DESIGN
//! ======
//! Every endpoint wraps its payload in the same `{success, message, data,
//! error}` envelope. The envelope is decoded whatever the HTTP status so a
//! `401` with a JSON body still surfaces its `error` text.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// Standard API response wrapper.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Body of `POST /auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginData {
    /// Opaque bearer token.
    pub token: String,
    /// Token lifetime in seconds as reported by the API. Informational only.
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: UserInfo,
}

/// User record as exposed by the API and kept in local storage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// A portal project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub icon_url: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
}

/// Lifecycle status of a project.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectStatus {
    Active,
    Inactive,
    Maintenance,
    Other,
}

impl ProjectStatus {
    pub fn parse(raw: &str) -> Self {
        match raw {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            "maintenance" => Self::Maintenance,
            _ => Self::Other,
        }
    }
}

impl Project {
    pub fn status(&self) -> ProjectStatus {
        ProjectStatus::parse(&self.status)
    }
}

/// Paginated list wrapper returned by `GET /projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaginatedProjects {
    pub data: Option<Vec<Project>>,
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub page: Option<u64>,
    #[serde(default)]
    pub page_size: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
}

/// The project list arrives either paginated or as a bare array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ProjectListPayload {
    Plain(Vec<Project>),
    Paginated(PaginatedProjects),
}

/// Pagination metadata kept for the dashboard footer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageInfo {
    pub total: u64,
    pub page: u64,
    pub page_size: u64,
    pub total_pages: u64,
}

/// Normalized project list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectPage {
    pub projects: Vec<Project>,
    pub page: Option<PageInfo>,
}

impl From<ProjectListPayload> for ProjectPage {
    fn from(payload: ProjectListPayload) -> Self {
        match payload {
            ProjectListPayload::Plain(projects) => Self { projects, page: None },
            ProjectListPayload::Paginated(paginated) => {
                let projects = paginated.data.unwrap_or_default();
                let page = paginated.page.map(|page| PageInfo {
                    total: paginated.total.unwrap_or(projects.len() as u64),
                    page,
                    page_size: paginated.page_size.unwrap_or(projects.len() as u64),
                    total_pages: paginated.total_pages.unwrap_or(1),
                });
                Self { projects, page }
            }
        }
    }
}

fn parse_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<ApiEnvelope<T>, ApiError> {
    let envelope: ApiEnvelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    if !envelope.success || !(200..300).contains(&status) {
        let message = envelope.error.filter(|message| !message.trim().is_empty());
        return Err(ApiError::Rejected { status, message });
    }
    Ok(envelope)
}

/// Decode an envelope whose `data` is required.
///
/// # Errors
///
/// `Decode` when the body is not an envelope or `data` is missing,
/// `Rejected` when the API reported failure.
pub fn decode_envelope<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    parse_envelope::<T>(status, body)?
        .data
        .ok_or_else(|| ApiError::Decode("missing data".to_owned()))
}

/// Decode an envelope where only `success` matters.
///
/// # Errors
///
/// Same classification as [`decode_envelope`], minus the `data` requirement.
pub fn decode_ack(status: u16, body: &str) -> Result<(), ApiError> {
    parse_envelope::<serde_json::Value>(status, body).map(|_| ())
}
