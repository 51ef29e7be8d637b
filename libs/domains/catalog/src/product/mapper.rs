use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use super::models::{ProductDetail, ProductRequest, ProductResponse, ProductSummary};
use super::repository::{ProductWithRelations, ProductWithSubcategory};
use crate::entity::product;
use crate::inventory::mapper as inventory_mapper;
use crate::shared::blank_to_none;
use crate::subcategory::mapper as subcategory_mapper;

pub fn to_new_entity(request: ProductRequest) -> product::ActiveModel {
    product::ActiveModel {
        id: NotSet,
        name: Set(request.name),
        description: Set(blank_to_none(request.description)),
        size: Set(request.size),
        price: Set(request.price),
        barcode: Set(request.barcode),
        subcategory_id: Set(request.subcategory.id),
    }
}

/// Update entity; the subcategory link is left `NotSet` so the stored one is kept.
pub fn to_entity(id: i64, request: ProductRequest) -> product::ActiveModel {
    product::ActiveModel {
        id: Unchanged(id),
        subcategory_id: NotSet,
        ..to_new_entity(request)
    }
}

pub fn to_response(row: ProductWithSubcategory) -> ProductResponse {
    let ProductWithSubcategory {
        product,
        subcategory,
    } = row;

    ProductResponse {
        id: product.id,
        name: product.name,
        description: product.description,
        size: product.size,
        price: product.price,
        barcode: product.barcode,
        subcategory: subcategory_mapper::to_summary(&subcategory),
    }
}

pub fn to_summary(model: &product::Model) -> ProductSummary {
    ProductSummary {
        id: model.id,
        name: model.name.clone(),
        price: model.price,
    }
}

pub fn to_detail(row: ProductWithRelations) -> ProductDetail {
    let ProductWithRelations {
        product,
        subcategory,
        inventory,
    } = row;

    ProductDetail {
        id: product.id,
        name: product.name,
        description: product.description,
        size: product.size,
        price: product.price,
        barcode: product.barcode,
        subcategory: subcategory_mapper::to_summary(&subcategory),
        inventory: inventory.as_ref().map(inventory_mapper::to_summary),
    }
}
