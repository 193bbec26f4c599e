//! In-memory [`PortalApi`] double for flow tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::PortalApi;
use crate::net::error::ApiError;
use crate::net::types::{LoginData, LoginRequest, ProjectPage};

/// One recorded API call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum ApiCall {
    Login { email: String, password: String },
    ListProjects { token: Option<String> },
    DeleteProject { token: Option<String>, id: i64 },
}

/// Scripted responses, consumed in order; calls are recorded.
#[derive(Default)]
pub(crate) struct MockApi {
    pub(crate) login: RefCell<VecDeque<Result<LoginData, ApiError>>>,
    pub(crate) lists: RefCell<VecDeque<Result<ProjectPage, ApiError>>>,
    pub(crate) deletes: RefCell<VecDeque<Result<(), ApiError>>>,
    pub(crate) calls: RefCell<Vec<ApiCall>>,
}

impl MockApi {
    pub(crate) fn with_login(self, result: Result<LoginData, ApiError>) -> Self {
        self.login.borrow_mut().push_back(result);
        self
    }

    pub(crate) fn with_list(self, result: Result<ProjectPage, ApiError>) -> Self {
        self.lists.borrow_mut().push_back(result);
        self
    }

    pub(crate) fn with_delete(self, result: Result<(), ApiError>) -> Self {
        self.deletes.borrow_mut().push_back(result);
        self
    }

    pub(crate) fn calls(&self) -> Vec<ApiCall> {
        self.calls.borrow().clone()
    }
}

fn unscripted<T>() -> Result<T, ApiError> {
    Err(ApiError::Transport("unscripted call".to_owned()))
}

impl PortalApi for MockApi {
    async fn login(&self, request: &LoginRequest) -> Result<LoginData, ApiError> {
        self.calls.borrow_mut().push(ApiCall::Login {
            email: request.email.clone(),
            password: request.password.clone(),
        });
        self.login.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn list_projects(&self, token: Option<&str>) -> Result<ProjectPage, ApiError> {
        self.calls.borrow_mut().push(ApiCall::ListProjects { token: token.map(str::to_owned) });
        self.lists.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }

    async fn delete_project(&self, token: Option<&str>, id: i64) -> Result<(), ApiError> {
        self.calls.borrow_mut().push(ApiCall::DeleteProject { token: token.map(str::to_owned), id });
        self.deletes.borrow_mut().pop_front().unwrap_or_else(unscripted)
    }
}
