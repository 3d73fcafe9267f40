//! User record and page response types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A row of the read-only `users` table
///
/// Serialized with camelCase keys, so `updated_at` goes over the wire as
/// `updatedAt` in RFC 3339 form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub phone: String,
    pub updated_at: DateTime<Utc>,
}

/// One slice of users plus the size of the whole collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsersPage {
    /// Users ordered by `id` ascending, at most `limit` of them
    pub users: Vec<User>,
    /// Total number of users in storage, independent of the slice
    pub count: u64,
}
