//! Storage abstraction for the user collection

use std::future::Future;

use super::{model::User, pagination::Pagination};
use crate::error::StoreError;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Read access to the user collection
///
/// Implementations must return users ordered by `id` ascending so that
/// consecutive pages never overlap or skip records.
pub trait UserStore: Clone + Send + Sync + 'static {
    /// Users in `id` order, skipping `pagination.offset` and taking at most
    /// `pagination.limit`
    fn find_slice(
        &self,
        pagination: Pagination,
    ) -> impl Future<Output = StoreResult<Vec<User>>> + Send;

    /// Total number of users
    fn count(&self) -> impl Future<Output = StoreResult<u64>> + Send;

    /// Cheap round trip used by the readiness probe
    fn ping(&self) -> impl Future<Output = StoreResult<()>> + Send;
}
