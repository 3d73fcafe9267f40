//! Health check handlers

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::future::Future;

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status
    pub status: String,

    /// Service name
    pub service: String,

    /// Version
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
}

/// Readiness check response with dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct ReadinessResponse {
    /// Overall readiness status
    pub ready: bool,

    /// Service name
    pub service: String,

    /// Dependency statuses
    pub dependencies: HashMap<String, DependencyStatus>,
}

/// Individual dependency status
#[derive(Debug, Serialize, Deserialize)]
pub struct DependencyStatus {
    /// Dependency is healthy
    pub healthy: bool,

    /// Optional message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DependencyStatus {
    pub fn up() -> Self {
        Self {
            healthy: true,
            message: Some("Connected".to_string()),
        }
    }

    pub fn down(message: impl Into<String>) -> Self {
        Self {
            healthy: false,
            message: Some(message.into()),
        }
    }
}

/// Router state that can report on itself
pub trait HealthCheck: Clone + Send + Sync + 'static {
    /// Name reported in health responses
    fn service_name(&self) -> &str;

    /// Probe every dependency the server needs to answer requests
    fn dependencies(&self) -> impl Future<Output = HashMap<String, DependencyStatus>> + Send;
}

/// Liveness probe
///
/// Always returns 200 OK while the process is serving requests.
pub async fn health<S: HealthCheck>(State(state): State<S>) -> impl IntoResponse {
    let response = HealthResponse {
        status: "healthy".to_string(),
        service: state.service_name().to_string(),
        version: Some(env!("CARGO_PKG_VERSION").to_string()),
    };

    (StatusCode::OK, Json(response))
}

/// Readiness probe
///
/// Returns 503 Service Unavailable if any dependency is unhealthy.
pub async fn readiness<S: HealthCheck>(State(state): State<S>) -> impl IntoResponse {
    let dependencies = state.dependencies().await;
    let ready = dependencies.values().all(|d| d.healthy);

    let status = if ready {
        StatusCode::OK
    } else {
        tracing::warn!("Readiness check failed for {}", state.service_name());
        StatusCode::SERVICE_UNAVAILABLE
    };

    let response = ReadinessResponse {
        ready,
        service: state.service_name().to_string(),
        dependencies,
    };

    (status, Json(response))
}
