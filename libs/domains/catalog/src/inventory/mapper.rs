use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use super::models::{InventoryRequest, InventoryResponse, InventorySummary};
use super::repository::InventoryWithProduct;
use crate::entity::inventory;
use crate::product::mapper as product_mapper;

pub fn to_new_entity(request: InventoryRequest) -> inventory::ActiveModel {
    inventory::ActiveModel {
        id: NotSet,
        quantity_available: Set(request.quantity_available),
        minimum_stock: Set(request.minimum_stock),
        maximum_stock: Set(request.maximum_stock),
        product_id: Set(request.product.id),
    }
}

pub fn to_entity(id: i64, request: InventoryRequest) -> inventory::ActiveModel {
    inventory::ActiveModel {
        id: Unchanged(id),
        ..to_new_entity(request)
    }
}

pub fn to_response(row: InventoryWithProduct) -> InventoryResponse {
    InventoryResponse {
        id: row.inventory.id,
        quantity_available: row.inventory.quantity_available,
        minimum_stock: row.inventory.minimum_stock,
        maximum_stock: row.inventory.maximum_stock,
        product: product_mapper::to_summary(&row.product),
    }
}

pub fn to_summary(model: &inventory::Model) -> InventorySummary {
    InventorySummary {
        id: model.id,
        quantity_available: model.quantity_available,
        minimum_stock: model.minimum_stock,
        maximum_stock: model.maximum_stock,
    }
}
