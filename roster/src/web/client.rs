//! HTTP client for the users API

use std::future::Future;
use std::time::Duration;

use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::{
    error::{Error, Result},
    users::UsersPage,
};

/// Why a page of users could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    /// The API answered with a non-2xx status
    #[error("users API returned {0}")]
    Status(StatusCode),

    /// Connection refused, timed out, or similar
    #[error("users API unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The API answered 2xx with a body that is not a users page
    #[error("users API sent an unreadable body: {0}")]
    Decode(#[source] reqwest::Error),
}

impl FetchError {
    /// Status code shown in the error banner
    ///
    /// Non-2xx responses keep their own code; anything else is a 500.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Status(status) => *status,
            Self::Transport(_) | Self::Decode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Source of user pages for the view
pub trait UsersApi: Clone + Send + Sync + 'static {
    fn fetch_page(
        &self,
        limit: u64,
        page: u64,
    ) -> impl Future<Output = std::result::Result<UsersPage, FetchError>> + Send;
}

/// Calls `GET {base_url}/users?limit=&page=` over HTTP
#[derive(Debug, Clone)]
pub struct HttpUsersApi {
    client: Client,
    base_url: String,
}

impl HttpUsersApi {
    /// Build a client whose requests give up after `timeout`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn users_url(&self, limit: u64, page: u64) -> String {
        format!("{}/users?limit={}&page={}", self.base_url, limit, page)
    }
}

impl UsersApi for HttpUsersApi {
    async fn fetch_page(&self, limit: u64, page: u64) -> std::result::Result<UsersPage, FetchError> {
        let url = self.users_url(limit, page);
        tracing::debug!("Fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("Users API returned error: {}", status);
            return Err(FetchError::Status(status));
        }

        response.json::<UsersPage>().await.map_err(FetchError::Decode)
    }
}
