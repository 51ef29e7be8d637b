//! Category entity and DTO conversions.

use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

use super::models::{CategoryDetail, CategoryRequest, CategoryResponse, CategorySummary};
use super::repository::CategoryWithSubcategories;
use crate::entity::category;
use crate::shared::blank_to_none;
use crate::subcategory::mapper as subcategory_mapper;

/// New row; the id is generated on insert.
pub fn to_new_entity(request: CategoryRequest) -> category::ActiveModel {
    category::ActiveModel {
        id: NotSet,
        name: Set(request.name),
        description: Set(blank_to_none(request.description)),
    }
}

/// Every mutable column overwritten from `request`.
pub fn to_entity(id: i64, request: CategoryRequest) -> category::ActiveModel {
    category::ActiveModel {
        id: Unchanged(id),
        ..to_new_entity(request)
    }
}

pub fn to_response(model: category::Model) -> CategoryResponse {
    CategoryResponse {
        id: model.id,
        name: model.name,
        description: model.description,
    }
}

pub fn to_summary(model: &category::Model) -> CategorySummary {
    CategorySummary {
        id: model.id,
        name: model.name.clone(),
    }
}

pub fn to_detail(row: CategoryWithSubcategories) -> CategoryDetail {
    CategoryDetail {
        id: row.category.id,
        name: row.category.name,
        description: row.category.description,
        subcategories: row
            .subcategories
            .iter()
            .map(subcategory_mapper::to_summary)
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::subcategory;

    #[test]
    fn test_new_entity_leaves_id_unset_and_clears_blank_description() {
        let active = to_new_entity(CategoryRequest {
            name: "Vinos".into(),
            description: Some(" ".into()),
        });
        assert_eq!(active.id, NotSet);
        assert_eq!(active.name, Set("Vinos".to_string()));
        assert_eq!(active.description, Set(None));
    }

    #[test]
    fn test_entity_with_identity() {
        let active = to_entity(
            5,
            CategoryRequest {
                name: "Vinos y Licores".into(),
                description: None,
            },
        );
        assert_eq!(active.id, Unchanged(5));
        assert_eq!(active.name, Set("Vinos y Licores".to_string()));
    }

    #[test]
    fn test_detail_nests_subcategory_summaries() {
        let row = CategoryWithSubcategories {
            category: category::Model {
                id: 2,
                name: "Dulces".into(),
                description: None,
            },
            subcategories: vec![subcategory::Model {
                id: 7,
                name: "Gomitas".into(),
                description: Some("A granel".into()),
                category_id: 2,
            }],
        };

        let detail = to_detail(row);
        assert_eq!(detail.subcategories.len(), 1);
        assert_eq!(detail.subcategories[0].id, 7);
        assert_eq!(detail.subcategories[0].name, "Gomitas");
    }
}
