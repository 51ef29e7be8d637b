//! SeaORM entities for the catalog tables.

pub mod category;
pub mod inventory;
pub mod product;
pub mod subcategory;
