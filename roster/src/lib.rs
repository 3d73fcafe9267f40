//! # roster
//!
//! Paginated user listing in two HTTP servers:
//!
//! - **Users API** ([`users`]): `GET /users?limit=&page=` returns one slice of
//!   the `users` table ordered by id, plus the total count.
//! - **Users page** ([`web`]): `GET /?page=` calls the API with a fixed page
//!   size and renders a table with a windowed pagination bar.
//!
//! Both servers share configuration ([`config`]), tracing setup
//! ([`observability`]), the middleware stack ([`server`]), and health probes.
//!
//! ## Example
//!
//! ```rust,no_run
//! use roster::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = Config::load()?;
//!     init_tracing(&config)?;
//!
//!     let store = MemoryUserStore::default();
//!     let app = api_router(ApiState::new(store, config.service.name.clone()));
//!
//!     Server::new(config.clone())
//!         .serve(app, config.api.addr())
//!         .await?;
//!
//!     Ok(())
//! }
//! ```

pub mod app;
pub mod config;
pub mod database;
pub mod error;
pub mod health;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod users;
pub mod web;

/// Common imports for running either server
pub mod prelude {
    pub use crate::app::{run_api, run_web};
    pub use crate::config::{ApiConfig, Config, DatabaseConfig, LogFormat, WebConfig};
    pub use crate::error::{Error, Result, StoreError, StoreErrorKind, StoreOperation};
    pub use crate::health::{health, readiness, HealthCheck};
    pub use crate::observability::init_tracing;
    pub use crate::server::Server;
    pub use crate::users::{
        api_router, ApiState, MemoryUserStore, PageRequest, Pagination, PgUserStore, User,
        UserStore, UsersPage,
    };
    pub use crate::web::{
        web_router, HttpUsersApi, PageOutcome, PaginationControl, UsersApi, ViewSettings,
        WebState,
    };
}
