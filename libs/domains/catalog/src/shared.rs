//! Pieces shared by the four resources.

use database::Page;
use observability::{CatalogMetrics, Outcome};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::error::{CatalogError, CatalogResult, EntityKind};

/// Reference to a parent row in a request body.
///
/// Only `id` is used; `name` is accepted so clients can echo back a summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
pub struct EntityRef {
    #[validate(range(min = 1, message = "must be a positive id"))]
    #[schema(example = 1)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
}

impl EntityRef {
    pub fn new(id: i64) -> Self {
        Self { id, name: None }
    }
}

pub(crate) fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank").with_message("must not be blank".into()));
    }
    Ok(())
}

/// Blank optional text is stored as NULL.
pub(crate) fn blank_to_none(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// A foreign key that points at nothing; only reachable when rows change under a read.
pub(crate) fn missing_parent(kind: EntityKind, id: i64) -> CatalogError {
    CatalogError::Database(DbErr::RecordNotFound(format!("{kind} with id {id}")))
}

/// Count the outcome of a service call and hand the result back.
pub(crate) fn observe<T>(
    kind: EntityKind,
    operation: &'static str,
    result: CatalogResult<T>,
) -> CatalogResult<T> {
    let outcome = match &result {
        Ok(_) => Outcome::Success,
        Err(e) => e.outcome(),
    };
    CatalogMetrics::record_operation(kind.label(), operation, outcome);
    result
}

/// [`observe`] for paged reads; also records how many rows the page holds.
pub(crate) fn observe_page<T>(
    kind: EntityKind,
    operation: &'static str,
    result: CatalogResult<Page<T>>,
) -> CatalogResult<Page<T>> {
    let page = observe(kind, operation, result)?;
    CatalogMetrics::record_page(kind.label(), page.number_of_elements());
    Ok(page)
}
