//! In-memory user store

use std::sync::Arc;

use super::{
    model::User,
    pagination::Pagination,
    store::{StoreResult, UserStore},
};

/// Fixed user collection held in memory
///
/// Users are sorted by `id` on construction.
#[derive(Debug, Clone, Default)]
pub struct MemoryUserStore {
    users: Arc<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new(mut users: Vec<User>) -> Self {
        users.sort_by_key(|u| u.id);
        Self {
            users: Arc::new(users),
        }
    }
}

impl UserStore for MemoryUserStore {
    async fn find_slice(&self, pagination: Pagination) -> StoreResult<Vec<User>> {
        let offset = usize::try_from(pagination.offset).unwrap_or(usize::MAX);
        let limit = pagination
            .limit
            .map_or(usize::MAX, |l| usize::try_from(l).unwrap_or(usize::MAX));

        Ok(self.users.iter().skip(offset).take(limit).cloned().collect())
    }

    async fn count(&self) -> StoreResult<u64> {
        Ok(self.users.len() as u64)
    }

    async fn ping(&self) -> StoreResult<()> {
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_slices_in_id_order() {
        let mut users = fixtures::users(5);
        users.reverse();
        let store = MemoryUserStore::new(users);

        let slice = store.find_slice(Pagination::for_page(Some(2), 2)).await.unwrap();
        let ids: Vec<i64> = slice.iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[tokio::test]
    async fn test_unbounded_returns_all() {
        let store = fixtures::store(45);
        let slice = store.find_slice(Pagination::unbounded()).await.unwrap();
        assert_eq!(slice.len(), 45);
        assert_eq!(store.count().await.unwrap(), 45);
    }

    #[tokio::test]
    async fn test_offset_past_end_is_empty() {
        let store = fixtures::store(3);
        let slice = store.find_slice(Pagination::for_page(Some(20), 9)).await.unwrap();
        assert!(slice.is_empty());
    }
}
