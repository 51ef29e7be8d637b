use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use super::models::{SubcategoryDetail, SubcategoryRequest, SubcategoryResponse, SubcategorySummary};
use super::repository::{SubcategoryWithCategory, SubcategoryWithRelations};
use crate::category::mapper as category_mapper;
use crate::entity::subcategory;
use crate::product::mapper as product_mapper;
use crate::shared::blank_to_none;

pub fn to_new_entity(request: SubcategoryRequest) -> subcategory::ActiveModel {
    subcategory::ActiveModel {
        id: NotSet,
        name: Set(request.name),
        description: Set(blank_to_none(request.description)),
        category_id: Set(request.category.id),
    }
}

/// Update entity; the category link is left `NotSet` so the stored one is kept.
pub fn to_entity(id: i64, request: SubcategoryRequest) -> subcategory::ActiveModel {
    subcategory::ActiveModel {
        id: Unchanged(id),
        category_id: NotSet,
        ..to_new_entity(request)
    }
}

pub fn to_response(row: SubcategoryWithCategory) -> SubcategoryResponse {
    SubcategoryResponse {
        id: row.subcategory.id,
        name: row.subcategory.name,
        description: row.subcategory.description,
        category: category_mapper::to_summary(&row.category),
    }
}

pub fn to_summary(model: &subcategory::Model) -> SubcategorySummary {
    SubcategorySummary {
        id: model.id,
        name: model.name.clone(),
    }
}

pub fn to_detail(row: SubcategoryWithRelations) -> SubcategoryDetail {
    SubcategoryDetail {
        id: row.subcategory.id,
        name: row.subcategory.name,
        description: row.subcategory.description,
        category: category_mapper::to_summary(&row.category),
        products: row.products.iter().map(product_mapper::to_summary).collect(),
    }
}
