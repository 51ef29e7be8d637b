use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::category::CategorySummary;
use crate::product::ProductSummary;
use crate::shared::{EntityRef, not_blank};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryRequest {
    #[validate(
        length(min = 1, max = 50, message = "size must be between 1 and 50"),
        custom(function = "not_blank")
    )]
    #[schema(example = "Tintos")]
    pub name: String,
    #[validate(length(max = 150, message = "size must be at most 150"))]
    #[serde(default)]
    pub description: Option<String>,
    /// Owning category; only its id is used, and only on save
    #[validate(nested)]
    pub category: EntityRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: CategorySummary,
}

/// `get` response: the subcategory, its category and its products.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubcategoryDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub category: CategorySummary,
    pub products: Vec<ProductSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SubcategorySummary {
    pub id: i64,
    pub name: String,
}
