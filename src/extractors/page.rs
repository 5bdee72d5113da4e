//! `?page=&limit=&search=` query parameters for paged listings.

use crate::error::AppError;
use async_trait::async_trait;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use std::collections::HashMap;

pub const DEFAULT_PAGE_LIMIT: u64 = 10;
pub const MAX_PAGE_LIMIT: u64 = 100;
pub const MAX_ITEM_ID: u64 = i64::MAX as u64;

/// Page number (1-based), page size, and an optional search term.
/// An empty or blank `search=` becomes `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageParams {
    pub page: u64,
    pub limit: u64,
    pub search: Option<String>,
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            search: None,
        }
    }
}

impl PageParams {
    pub fn from_pairs(params: &HashMap<String, String>) -> Result<Self, AppError> {
        let page = match params.get("page").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(s) => s
                .parse::<u64>()
                .ok()
                .filter(|p| *p >= 1)
                .ok_or_else(|| AppError::BadRequest(format!("page must be a positive integer, got '{}'", s)))?,
            None => 1,
        };
        let limit = match params.get("limit").map(|s| s.trim()).filter(|s| !s.is_empty()) {
            Some(s) => s
                .parse::<u64>()
                .ok()
                .filter(|l| *l >= 1)
                .ok_or_else(|| AppError::BadRequest(format!("limit must be a positive integer, got '{}'", s)))?
                .min(MAX_PAGE_LIMIT),
            None => DEFAULT_PAGE_LIMIT,
        };
        // Item ids share SQLite's signed 64-bit integer range.
        (page - 1)
            .checked_mul(limit)
            .and_then(|skipped| skipped.checked_add(limit))
            .filter(|last| *last <= MAX_ITEM_ID)
            .ok_or_else(|| AppError::BadRequest(format!("page {} is out of range for limit {}", page, limit)))?;
        let search = params
            .get("search")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Ok(PageParams { page, limit, search })
    }

    /// Zero-based index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// One-based index of the last item on this page.
    pub fn last(&self) -> u64 {
        self.offset().saturating_add(self.limit)
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::BadRequest(e.body_text()))?;
        PageParams::from_pairs(&params)
    }
}
