//! Success envelope.
//!
//! Every successful response has the shape
//!
//! ```json
//! { "status": "OK", "message": "...", "data": [ ... ], "metadata": null }
//! ```
//!
//! `data` is always an array: single results are wrapped in a one-element array,
//! deletions return an empty one. `metadata` is only present for paged results.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use database::Page;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::errors::status_name;

/// Position and size of a page within the full result set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageMetadata {
    /// Zero-based page index, as requested
    pub page_number: u64,
    /// Page size, as requested
    pub page_size: u64,
    /// Items on this page
    pub number_of_elements: u64,
    pub total_pages: u64,
    pub total_elements: u64,
}

impl<T> From<&Page<T>> for PageMetadata {
    fn from(page: &Page<T>) -> Self {
        Self {
            page_number: page.page_number,
            page_size: page.page_size,
            number_of_elements: page.number_of_elements(),
            total_pages: page.total_pages(),
            total_elements: page.total_elements,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    #[serde(skip, default = "default_status")]
    code: StatusCode,
    /// HTTP status name
    #[schema(example = "OK")]
    pub status: String,
    pub message: String,
    pub data: Vec<T>,
    pub metadata: Option<PageMetadata>,
}

fn default_status() -> StatusCode {
    StatusCode::OK
}

impl<T> ApiResponse<T> {
    fn build(
        code: StatusCode,
        message: impl Into<String>,
        data: Vec<T>,
        metadata: Option<PageMetadata>,
    ) -> Self {
        Self {
            code,
            status: status_name(code),
            message: message.into(),
            data,
            metadata,
        }
    }

    /// 200 with a single item.
    pub fn ok(message: impl Into<String>, item: T) -> Self {
        Self::build(StatusCode::OK, message, vec![item], None)
    }

    /// 201 with the created item.
    pub fn created(message: impl Into<String>, item: T) -> Self {
        Self::build(StatusCode::CREATED, message, vec![item], None)
    }

    /// 200 with no data.
    pub fn empty(message: impl Into<String>) -> Self {
        Self::build(StatusCode::OK, message, Vec::new(), None)
    }

    /// 200 with one page of items and its metadata.
    pub fn page(message: impl Into<String>, page: Page<T>) -> Self {
        let metadata = PageMetadata::from(&page);
        Self::build(StatusCode::OK, message, page.items, Some(metadata))
    }

    pub fn status_code(&self) -> StatusCode {
        self.code
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.code, Json(self)).into_response()
    }
}
