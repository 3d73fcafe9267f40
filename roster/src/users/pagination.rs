//! Page request parsing and offset arithmetic
//!
//! ```rust
//! use roster::users::Pagination;
//!
//! let third = Pagination::for_page(Some(20), 3);
//! assert_eq!(third.offset, 40);
//! assert_eq!(third.limit, Some(20));
//!
//! // Without a limit the whole collection is returned from the start
//! let all = Pagination::for_page(None, 3);
//! assert_eq!(all.offset, 0);
//! assert_eq!(all.limit, None);
//! ```

use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::str::FromStr;

/// Query parameters accepted by `GET /users`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PageRequest {
    /// Maximum number of users to return; absent or zero means unbounded
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u64>,

    /// 1-based page number; absent means page 1
    #[serde(default, deserialize_with = "empty_as_none")]
    pub page: Option<i64>,
}

impl PageRequest {
    /// Effective limit, with zero folded into "no limit"
    pub fn limit(&self) -> Option<u64> {
        self.limit.filter(|&l| l > 0)
    }
}

/// Concrete slice bounds handed to the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// Number of users to skip
    pub offset: u64,
    /// Maximum number of users to return; `None` is unbounded
    pub limit: Option<u64>,
}

impl Pagination {
    /// Slice for a 1-based page: `offset = (page - 1) * limit`
    ///
    /// A page below 1 would give a negative offset, which is clamped to 0.
    /// With no limit the offset is always 0.
    pub fn for_page(limit: Option<u64>, page: i64) -> Self {
        let limit = limit.filter(|&l| l > 0);
        let offset = match limit {
            Some(limit) => {
                let skipped_pages = u64::try_from(page.saturating_sub(1)).unwrap_or(0);
                skipped_pages.saturating_mul(limit)
            }
            None => 0,
        };
        Self { offset, limit }
    }

    /// Everything, from the first record
    pub fn unbounded() -> Self {
        Self {
            offset: 0,
            limit: None,
        }
    }
}

/// Treat `?page=` the same as a missing `page`
///
/// Anything non-empty must parse as the target number.
pub fn empty_as_none<'de, D, T>(de: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let opt = Option::<String>::deserialize(de)?;
    match opt.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => s.parse::<T>().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use axum::extract::{rejection::QueryRejection, Query};

    fn parse(query: &str) -> Result<PageRequest, QueryRejection> {
        let uri: http::Uri = format!("/users?{}", query).parse().unwrap();
        Query::<PageRequest>::try_from_uri(&uri).map(|Query(req)| req)
    }

    #[test]
    fn test_offset_for_pages() {
        assert_eq!(Pagination::for_page(Some(20), 1).offset, 0);
        assert_eq!(Pagination::for_page(Some(20), 2).offset, 20);
        assert_eq!(Pagination::for_page(Some(20), 3).offset, 40);
        assert_eq!(Pagination::for_page(Some(7), 5).offset, 28);
    }

    #[test]
    fn test_offset_never_negative() {
        assert_eq!(Pagination::for_page(Some(20), 0).offset, 0);
        assert_eq!(Pagination::for_page(Some(20), -4).offset, 0);
        assert_eq!(Pagination::for_page(Some(20), i64::MIN).offset, 0);
    }

    #[test]
    fn test_missing_or_zero_limit_is_unbounded() {
        assert_eq!(Pagination::for_page(None, 4), Pagination::unbounded());
        assert_eq!(Pagination::for_page(Some(0), 4), Pagination::unbounded());
    }

    #[test]
    fn test_huge_page_saturates() {
        let p = Pagination::for_page(Some(u64::MAX), i64::MAX);
        assert_eq!(p.offset, u64::MAX);
    }

    #[test]
    fn test_parse_query() {
        let req = parse("limit=20&page=3").unwrap();
        assert_eq!(req.limit(), Some(20));
        assert_eq!(req.page, Some(3));
    }

    #[test]
    fn test_parse_defaults() {
        let req = parse("").unwrap();
        assert_eq!(req.limit(), None);
        assert_eq!(req.page, None);

        let req = parse("limit=&page=").unwrap();
        assert_eq!(req, PageRequest::default());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse("limit=twenty").is_err());
        assert!(parse("page=1.5").is_err());
        assert!(parse("limit=-5").is_err());
    }

    #[test]
    fn test_parse_keeps_nonpositive_page() {
        let req = parse("page=0").unwrap();
        assert_eq!(req.page, Some(0));
        let req = parse("page=-2&limit=10").unwrap();
        assert_eq!(req.page, Some(-2));
        assert_eq!(req.limit(), Some(10));
    }
}
