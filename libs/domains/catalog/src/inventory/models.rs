use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::product::ProductSummary;
use crate::shared::EntityRef;

/// Stock levels for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[schema(example = 48)]
    pub quantity_available: i16,
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[schema(example = 12)]
    pub minimum_stock: i16,
    #[validate(range(min = 0, message = "must be greater than or equal to 0"))]
    #[schema(example = 100)]
    pub maximum_stock: i16,
    /// Stocked product; only its id is used
    #[validate(nested)]
    pub product: EntityRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventoryResponse {
    pub id: i64,
    pub quantity_available: i16,
    pub minimum_stock: i16,
    pub maximum_stock: i16,
    pub product: ProductSummary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub id: i64,
    pub quantity_available: i16,
    pub minimum_stock: i16,
    pub maximum_stock: i16,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::errors::validation_messages;

    #[test]
    fn test_negative_quantities_are_rejected() {
        let request = InventoryRequest {
            quantity_available: -1,
            minimum_stock: 0,
            maximum_stock: -5,
            product: EntityRef::new(1),
        };
        let errors = request.validate().unwrap_err();
        assert_eq!(
            validation_messages(&errors),
            vec![
                "maximumStock: must be greater than or equal to 0".to_string(),
                "quantityAvailable: must be greater than or equal to 0".to_string(),
            ]
        );
    }

    #[test]
    fn test_json_uses_camel_case() {
        let parsed: InventoryRequest = serde_json::from_str(
            r#"{"quantityAvailable":5,"minimumStock":1,"maximumStock":10,"product":{"id":4}}"#,
        )
        .unwrap();
        assert_eq!(parsed.quantity_available, 5);
        assert_eq!(parsed.product.id, 4);
    }

    #[test]
    fn test_quantity_outside_smallint_fails_to_parse() {
        let parsed = serde_json::from_str::<InventoryRequest>(
            r#"{"quantityAvailable":40000,"minimumStock":1,"maximumStock":10,"product":{"id":4}}"#,
        );
        assert!(parsed.is_err());
    }
}
