//! Pagination query service: `GET /users?limit=&page=`
//!
//! - [`UserStore`]: storage seam, with [`PgUserStore`] and [`MemoryUserStore`]
//! - [`service::find`]: slice + count for one page
//! - [`api_router`]: axum routes over a store

pub mod handlers;
pub mod memory;
pub mod model;
pub mod pagination;
pub mod postgres;
pub mod service;
pub mod store;

pub use handlers::{api_router, list_users, ApiState};
pub use memory::MemoryUserStore;
pub use model::{User, UsersPage};
pub use pagination::{PageRequest, Pagination};
pub use postgres::PgUserStore;
pub use service::find;
pub use store::{StoreResult, UserStore};
