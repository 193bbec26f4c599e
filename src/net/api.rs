//! REST API helpers for the portal admin endpoints.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: stubs returning `ApiError::Transport` since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. Bodies are decoded regardless of
//! HTTP status so the API's own `error` text reaches the user.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(test)]
#[path = "api_mock.rs"]
pub(crate) mod api_mock;

use super::error::ApiError;
#[cfg(feature = "csr")]
use super::types::{ProjectListPayload, decode_ack, decode_envelope};
use super::types::{LoginData, LoginRequest, ProjectPage};
use crate::config::PortalConfig;

/// The three endpoints the admin dashboard consumes.
///
/// Flows in `state` and `pages` are generic over this trait so they can be
/// exercised against an in-memory double.
#[allow(async_fn_in_trait)]
pub trait PortalApi {
    /// `POST /auth/login`.
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, ApiError>;
    /// `GET /projects` with the bearer token.
    async fn list_projects(&self, token: Option<&str>) -> Result<ProjectPage, ApiError>;
    /// `DELETE /admin/projects/{id}` with the bearer token.
    async fn delete_project(&self, token: Option<&str>, id: i64) -> Result<(), ApiError>;
}

#[cfg(any(test, feature = "csr"))]
fn login_endpoint(config: &PortalConfig) -> String {
    config.endpoint("/auth/login")
}

#[cfg(any(test, feature = "csr"))]
fn projects_endpoint(config: &PortalConfig) -> String {
    config.endpoint("/projects")
}

#[cfg(any(test, feature = "csr"))]
fn delete_project_endpoint(config: &PortalConfig, id: i64) -> String {
    config.endpoint(&format!("/admin/projects/{id}"))
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: Option<&str>) -> Option<String> {
    token
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| format!("Bearer {token}"))
}

/// HTTP verbs used against the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Delete,
}

/// `gloo-net` backed implementation of [`PortalApi`].
#[derive(Clone, Debug)]
pub struct HttpApi {
    config: PortalConfig,
}

impl HttpApi {
    pub fn new(config: &PortalConfig) -> Self {
        Self { config: config.clone() }
    }

    /// Issue a JSON request against the API base and return `(status, body)`.
    ///
    /// The bearer header is attached when a non-empty token is supplied.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Transport` when the request cannot be built or sent,
    /// `ApiError::Decode` when the body cannot be read.
    pub async fn request(
        &self,
        method: ApiMethod,
        url: &str,
        token: Option<&str>,
        body: Option<&serde_json::Value>,
    ) -> Result<(u16, String), ApiError> {
        #[cfg(feature = "csr")]
        {
            use gloo_net::http::RequestBuilder;

            let mut builder = match method {
                ApiMethod::Get => RequestBuilder::new(url).method(gloo_net::http::Method::GET),
                ApiMethod::Post => RequestBuilder::new(url).method(gloo_net::http::Method::POST),
                ApiMethod::Delete => RequestBuilder::new(url).method(gloo_net::http::Method::DELETE),
            };
            if let Some(value) = bearer_header(token) {
                builder = builder.header("Authorization", &value);
            }
            let request = match body {
                Some(body) => builder.json(body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Transport(e.to_string()))?;
            let resp = request
                .send()
                .await
                .map_err(|e| ApiError::Transport(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok((status, text))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (method, url, token, body);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}

impl PortalApi for HttpApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, ApiError> {
        #[cfg(feature = "csr")]
        {
            let body = serde_json::to_value(request).map_err(|e| ApiError::Transport(e.to_string()))?;
            let (status, text) = self
                .request(ApiMethod::Post, &login_endpoint(&self.config), None, Some(&body))
                .await?;
            decode_envelope::<LoginData>(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn list_projects(&self, token: Option<&str>) -> Result<ProjectPage, ApiError> {
        #[cfg(feature = "csr")]
        {
            let (status, text) = self
                .request(ApiMethod::Get, &projects_endpoint(&self.config), token, None)
                .await?;
            decode_envelope::<ProjectListPayload>(status, &text).map(ProjectPage::from)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = token;
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }

    async fn delete_project(&self, token: Option<&str>, id: i64) -> Result<(), ApiError> {
        #[cfg(feature = "csr")]
        {
            let (status, text) = self
                .request(ApiMethod::Delete, &delete_project_endpoint(&self.config, id), token, None)
                .await?;
            decode_ack(status, &text)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (token, id);
            Err(ApiError::Transport("not available outside the browser".to_owned()))
        }
    }
}
