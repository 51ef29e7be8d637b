//! `?page=&size=&sort=` query parameters.

use crate::errors::AppError;
use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use database::pagination::{DEFAULT_PAGE, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use database::{PageRequest, PaginationError, Sort};
use serde::Deserialize;
use utoipa::IntoParams;

/// Raw paging query. Values are kept as strings so that bad input produces a
/// field-specific validation message instead of a generic query rejection.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PageQuery {
    /// Zero-based page index (default 0)
    #[param(example = "0")]
    pub page: Option<String>,
    /// Page size, 1 to 2^63 - 1 (default 5)
    #[param(example = "5")]
    pub size: Option<String>,
    /// `field` or `field,asc|desc` (default `id,asc`)
    #[param(example = "name,asc")]
    pub sort: Option<String>,
}

impl PageQuery {
    /// Validate every parameter, reporting all failures at once.
    pub fn into_page_request(self) -> Result<PageRequest, AppError> {
        let mut errors = Vec::new();

        let page = match non_blank(self.page) {
            None => DEFAULT_PAGE,
            Some(raw) => raw.parse::<u64>().unwrap_or_else(|_| {
                errors.push(format!("page: must be a non-negative integer, got '{}'", raw));
                DEFAULT_PAGE
            }),
        };

        let size = match non_blank(self.size) {
            None => DEFAULT_PAGE_SIZE,
            Some(raw) => match raw.parse::<u64>() {
                Ok(0) => {
                    errors.push(PaginationError::ZeroPageSize.to_string());
                    DEFAULT_PAGE_SIZE
                }
                Ok(size) if size > MAX_PAGE_SIZE => {
                    errors.push(PaginationError::PageSizeTooLarge.to_string());
                    DEFAULT_PAGE_SIZE
                }
                Ok(size) => size,
                Err(_) => {
                    errors.push(format!("size: must be a positive integer, got '{}'", raw));
                    DEFAULT_PAGE_SIZE
                }
            },
        };

        let sort = match non_blank(self.sort) {
            None => Sort::default(),
            Some(raw) => raw.parse::<Sort>().unwrap_or_else(|e| {
                errors.push(e.to_string());
                Sort::default()
            }),
        };

        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }

        Ok(PageRequest::new(page, size)?.with_sort(sort))
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Extracts a validated [`PageRequest`] from the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageParams(pub PageRequest);

impl<S> FromRequestParts<S> for PageParams
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PageQuery>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::Validation(vec![e.body_text()]))?;

        query.into_page_request().map(PageParams)
    }
}
