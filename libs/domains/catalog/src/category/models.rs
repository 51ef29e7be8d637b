use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::shared::not_blank;
use crate::subcategory::SubcategorySummary;

/// Body of `save` and `update`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRequest {
    #[validate(
        length(min = 1, max = 50, message = "size must be between 1 and 50"),
        custom(function = "not_blank")
    )]
    #[schema(example = "Vinos")]
    pub name: String,
    #[validate(length(max = 150, message = "size must be at most 150"))]
    #[serde(default)]
    #[schema(example = "Tintos, blancos y rosados")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// `get` response: the category and its subcategories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CategoryDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub subcategories: Vec<SubcategorySummary>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CategorySummary {
    pub id: i64,
    pub name: String,
}
