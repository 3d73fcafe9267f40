//! Pagination view: the server-rendered users page
//!
//! Fetches one page from the users API, then renders the table and the
//! pagination bar. Page numbers below 1 are redirected to `/`.

pub mod client;
pub mod control;
pub mod page;
pub mod templates;

pub use client::{FetchError, HttpUsersApi, UsersApi};
pub use control::{NavLink, PageLink, PaginationControl};
pub use page::{index, web_router, PageOutcome, PageParam, ViewQuery, ViewSettings, WebState};
pub use templates::{HtmlTemplate, IndexTemplate, UserRow};
