//! `GET /`: the users page and its routing decisions

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use std::collections::HashMap;

use super::{
    client::UsersApi,
    control::PaginationControl,
    templates::{HtmlTemplate, IndexTemplate},
};
use crate::{
    config::WebConfig,
    health::{self, DependencyStatus, HealthCheck},
    users::User,
};

/// Raw query string of the page
///
/// `page` stays a string so that a bad value can be redirected instead of
/// rejected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ViewQuery {
    pub page: Option<String>,
}

/// What the `page` parameter asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageParam {
    /// A page number >= 1
    Page(u64),
    /// Below 1 or not a number: send the client back to `/`
    Invalid,
}

impl PageParam {
    /// Absent or blank means page 1
    pub fn parse(raw: Option<&str>) -> Self {
        let raw = match raw.map(str::trim) {
            None | Some("") => return Self::Page(1),
            Some(raw) => raw,
        };

        match raw.parse::<i64>() {
            Ok(page) if page >= 1 => Self::Page(page.unsigned_abs()),
            _ => Self::Invalid,
        }
    }
}

/// Page size and link window used by the view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewSettings {
    pub page_size: u64,
    pub window_size: u64,
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self {
            page_size: 20,
            window_size: 10,
        }
    }
}

impl From<&WebConfig> for ViewSettings {
    fn from(config: &WebConfig) -> Self {
        Self {
            page_size: config.page_size,
            window_size: config.window_size,
        }
    }
}

/// Result of handling one page request, before any HTML is produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    /// Permanent redirect to `/`
    Redirect,
    /// Error banner with the status the fetch ended in
    Failed { status: u16 },
    /// Table of users plus pagination
    Listing {
        users: Vec<User>,
        control: PaginationControl,
    },
}

impl PageOutcome {
    /// Decide what to show for `raw_page`, fetching from `api` at most once
    pub async fn resolve<A: UsersApi>(
        api: &A,
        settings: ViewSettings,
        raw_page: Option<&str>,
    ) -> Self {
        let page = match PageParam::parse(raw_page) {
            PageParam::Page(page) => page,
            PageParam::Invalid => {
                tracing::debug!(page = ?raw_page, "Redirecting invalid page to /");
                return Self::Redirect;
            }
        };

        match api.fetch_page(settings.page_size, page).await {
            Ok(result) => {
                let control = PaginationControl::new(
                    page,
                    result.count,
                    settings.page_size,
                    settings.window_size,
                );
                Self::Listing {
                    users: result.users,
                    control,
                }
            }
            Err(e) => {
                tracing::error!(page, "Failed to load users: {}", e);
                Self::Failed {
                    status: e.status().as_u16(),
                }
            }
        }
    }
}

impl IntoResponse for PageOutcome {
    fn into_response(self) -> Response {
        match self {
            Self::Redirect => Redirect::permanent("/").into_response(),
            Self::Failed { status } => HtmlTemplate::new(IndexTemplate::failed(status)).into_response(),
            Self::Listing { users, control } => {
                HtmlTemplate::new(IndexTemplate::listing(users, control)).into_response()
            }
        }
    }
}

/// Router state for the users page
#[derive(Debug, Clone)]
pub struct WebState<A> {
    api: A,
    settings: ViewSettings,
    service_name: String,
}

impl<A: UsersApi> WebState<A> {
    pub fn new(api: A, settings: ViewSettings, service_name: impl Into<String>) -> Self {
        Self {
            api,
            settings,
            service_name: service_name.into(),
        }
    }
}

impl<A: UsersApi> HealthCheck for WebState<A> {
    fn service_name(&self) -> &str {
        &self.service_name
    }

    async fn dependencies(&self) -> HashMap<String, DependencyStatus> {
        HashMap::new()
    }
}

/// The users page
///
/// A query string that does not deserialize is handled like a bad `page`.
pub async fn index<A: UsersApi>(
    State(state): State<WebState<A>>,
    query: Result<Query<ViewQuery>, QueryRejection>,
) -> PageOutcome {
    match query {
        Ok(Query(query)) => {
            PageOutcome::resolve(&state.api, state.settings, query.page.as_deref()).await
        }
        Err(rejection) => {
            tracing::debug!("Redirecting unreadable query to /: {}", rejection);
            PageOutcome::Redirect
        }
    }
}

/// Routes served by the page server
pub fn web_router<A: UsersApi>(state: WebState<A>) -> Router {
    Router::new()
        .route("/", get(index::<A>))
        .route("/health", get(health::health::<WebState<A>>))
        .with_state(state)
}
