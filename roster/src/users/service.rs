//! Pagination query service

use super::{model::UsersPage, pagination::Pagination, store::UserStore};
use crate::error::Result;
use std::fmt;

/// Load one slice of users together with the total count
///
/// A missing `page` means page 1. `page` is not validated: values below 1
/// just clamp the offset to 0. The slice and count queries run concurrently
/// and fail together.
pub async fn find<S: UserStore>(
    store: &S,
    limit: Option<u64>,
    page: Option<i64>,
) -> Result<UsersPage> {
    let pagination = Pagination::for_page(limit, page.unwrap_or(1));

    tracing::info!(
        offset = pagination.offset,
        "Get users with limit {} on a page {}",
        describe(pagination.limit),
        describe(page)
    );

    let (users, count) = tokio::try_join!(store.find_slice(pagination), store.count())?;

    Ok(UsersPage { users, count })
}

fn describe<T: fmt::Display>(value: Option<T>) -> String {
    value.map_or_else(|| "not defined".to_string(), |v| v.to_string())
}
