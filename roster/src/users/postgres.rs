//! PostgreSQL-backed user store

use sqlx::PgPool;

use super::{
    model::User,
    pagination::Pagination,
    store::{StoreResult, UserStore},
};
use crate::error::{StoreError, StoreOperation};

const SELECT_USERS: &str =
    "SELECT id, firstname, lastname, email, phone, updated_at FROM users ORDER BY id";

/// User store over a sqlx connection pool
#[derive(Debug, Clone)]
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Build the slice query; `LIMIT` is omitted entirely when unbounded
fn slice_sql(pagination: &Pagination) -> String {
    match pagination.limit {
        Some(_) => format!("{} LIMIT $1 OFFSET $2", SELECT_USERS),
        None => format!("{} OFFSET $1", SELECT_USERS),
    }
}

/// Postgres binds BIGINT as i64
fn to_bind(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

impl UserStore for PgUserStore {
    async fn find_slice(&self, pagination: Pagination) -> StoreResult<Vec<User>> {
        let sql = slice_sql(&pagination);
        let query = sqlx::query_as::<_, User>(&sql);
        let query = match pagination.limit {
            Some(limit) => query
                .bind(to_bind(limit))
                .bind(to_bind(pagination.offset)),
            None => query.bind(to_bind(pagination.offset)),
        };

        query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::from(e).during(StoreOperation::FindPage))
    }

    async fn count(&self) -> StoreResult<u64> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| StoreError::from(e).during(StoreOperation::Count))?;

        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn ping(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::from(e).during(StoreOperation::Ping))?;
        Ok(())
    }
}
