//! `GET /users` and the API router

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use std::collections::HashMap;

use super::{model::UsersPage, pagination::PageRequest, service, store::UserStore};
use crate::{
    error::{Error, Result},
    health::{self, DependencyStatus, HealthCheck},
};

/// Router state for the users API
#[derive(Debug, Clone)]
pub struct ApiState<S> {
    store: S,
    service_name: String,
}

impl<S: UserStore> ApiState<S> {
    pub fn new(store: S, service_name: impl Into<String>) -> Self {
        Self {
            store,
            service_name: service_name.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

impl<S: UserStore> HealthCheck for ApiState<S> {
    fn service_name(&self) -> &str {
        &self.service_name
    }

    async fn dependencies(&self) -> HashMap<String, DependencyStatus> {
        let status = match self.store.ping().await {
            Ok(()) => DependencyStatus::up(),
            Err(e) => {
                tracing::error!("Database health check failed: {}", e);
                DependencyStatus::down(format!("Connection failed: {}", e.kind))
            }
        };
        HashMap::from([("database".to_string(), status)])
    }
}

/// List one page of users
///
/// Non-numeric `limit` or `page` is rejected with 400.
pub async fn list_users<S: UserStore>(
    State(state): State<ApiState<S>>,
    query: std::result::Result<Query<PageRequest>, QueryRejection>,
) -> Result<Json<UsersPage>> {
    let Query(request) = query.map_err(|e| Error::BadRequest(e.body_text()))?;

    let page = service::find(state.store(), request.limit(), request.page).await?;
    Ok(Json(page))
}

/// Routes served by the users API
pub fn api_router<S: UserStore>(state: ApiState<S>) -> Router {
    Router::new()
        .route("/users", get(list_users::<S>))
        .route("/health", get(health::health::<ApiState<S>>))
        .route("/ready", get(health::readiness::<ApiState<S>>))
        .with_state(state)
}
