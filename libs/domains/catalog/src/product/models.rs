use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use crate::inventory::InventorySummary;
use crate::shared::{EntityRef, not_blank};
use crate::subcategory::SubcategorySummary;

/// EAN-13: exactly thirteen ASCII digits
static BARCODE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{13}$").unwrap());

/// Upper bound (exclusive) of the integer part of a price: six digits.
const PRICE_LIMIT: i64 = 1_000_000;

fn validate_price(price: &Decimal) -> Result<(), ValidationError> {
    if price.is_sign_negative() && !price.is_zero() {
        return Err(ValidationError::new("price_range")
            .with_message("must be greater than or equal to 0.00".into()));
    }
    if price.normalize().scale() > 2 || price.trunc() >= Decimal::from(PRICE_LIMIT) {
        return Err(ValidationError::new("price_digits")
            .with_message("must have at most 6 integer and 2 fraction digits".into()));
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    #[validate(
        length(min = 1, max = 50, message = "size must be between 1 and 50"),
        custom(function = "not_blank")
    )]
    #[schema(example = "Oso Almendrado")]
    pub name: String,
    #[validate(length(max = 150, message = "size must be at most 150"))]
    #[serde(default)]
    pub description: Option<String>,
    #[validate(
        length(min = 1, max = 10, message = "size must be between 1 and 10"),
        custom(function = "not_blank")
    )]
    #[schema(example = "250 g")]
    pub size: String,
    #[validate(custom(function = "validate_price"))]
    #[schema(value_type = f64, example = 64.9)]
    pub price: Decimal,
    #[validate(regex(path = *BARCODE, message = "must be exactly 13 digits"))]
    #[schema(example = "7501000000035")]
    pub barcode: String,
    /// Owning subcategory; only its id is used, and only on save
    #[validate(nested)]
    pub subcategory: EntityRef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub size: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub barcode: String,
    pub subcategory: SubcategorySummary,
}

/// `get` response: the product, its subcategory and its stock record if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductDetail {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub size: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
    pub barcode: String,
    pub subcategory: SubcategorySummary,
    pub inventory: Option<InventorySummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductSummary {
    pub id: i64,
    pub name: String,
    #[schema(value_type = f64)]
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_helpers::errors::validation_messages;
    use std::str::FromStr;

    fn request(price: &str, barcode: &str) -> ProductRequest {
        ProductRequest {
            name: "Oso Almendrado".into(),
            description: None,
            size: "250 g".into(),
            price: Decimal::from_str(price).unwrap(),
            barcode: barcode.into(),
            subcategory: EntityRef::new(3),
        }
    }

    fn messages(request: ProductRequest) -> Vec<String> {
        match request.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => validation_messages(&errors),
        }
    }

    #[test]
    fn test_price_bounds() {
        assert!(messages(request("0.00", "7501000000035")).is_empty());
        assert!(messages(request("999999.99", "7501000000035")).is_empty());
        assert_eq!(
            messages(request("-0.01", "7501000000035")),
            vec!["price: must be greater than or equal to 0.00".to_string()]
        );
        assert_eq!(
            messages(request("1000000.00", "7501000000035")),
            vec!["price: must have at most 6 integer and 2 fraction digits".to_string()]
        );
        assert_eq!(
            messages(request("1.999", "7501000000035")),
            vec!["price: must have at most 6 integer and 2 fraction digits".to_string()]
        );
    }

    #[test]
    fn test_trailing_zeros_do_not_count_as_fraction_digits() {
        assert!(messages(request("12.5000", "7501000000035")).is_empty());
    }

    #[test]
    fn test_barcode_must_be_thirteen_digits() {
        for bad in ["750100000003", "75010000000351", "750100000003A", "７５０１０００００００３５"] {
            assert_eq!(
                messages(request("10", bad)),
                vec!["barcode: must be exactly 13 digits".to_string()],
                "{bad}"
            );
        }
    }

    #[test]
    fn test_price_deserializes_from_json_number() {
        let parsed: ProductRequest = serde_json::from_str(
            r#"{"name":"Ardillas Saladas","size":"90 g","price":18.5,
                "barcode":"7501000000011","subcategory":{"id":1}}"#,
        )
        .unwrap();
        assert_eq!(parsed.price, Decimal::new(185, 1));
        assert_eq!(parsed.description, None);
    }
}
