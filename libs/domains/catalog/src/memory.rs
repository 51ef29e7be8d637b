//! In-process catalog store.
//!
//! [`InMemoryCatalog`] implements all four repository traits over shared maps and
//! enforces the same unique keys and foreign keys as the PostgreSQL schema, failing
//! with the storage error the database would raise. Deleting a row that is still
//! referenced is refused.
//!
//! ```rust,no_run
//! use domain_catalog::{InMemoryCatalog, category};
//!
//! let catalog = InMemoryCatalog::with_seed_data();
//! let router = category::handlers::router(category::CategoryService::new(catalog.clone()));
//! ```

use async_trait::async_trait;
use database::pagination::paginate_vec;
use database::{Page, PageRequest, sort_rows};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, DbErr, EntityTrait, Value};
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::category::{CategoryRepository, CategoryWithSubcategories};
use crate::entity::{category, inventory, product, subcategory};
use crate::error::{CatalogError, CatalogResult, EntityKind};
use crate::inventory::{InventoryRepository, InventoryWithProduct};
use crate::product::{ProductRepository, ProductWithRelations, ProductWithSubcategory};
use crate::shared::missing_parent;
use crate::subcategory::{SubcategoryRepository, SubcategoryWithCategory, SubcategoryWithRelations};

struct Table<M> {
    rows: BTreeMap<i64, M>,
    last_id: i64,
}

impl<M> Default for Table<M> {
    fn default() -> Self {
        Self {
            rows: BTreeMap::new(),
            last_id: 0,
        }
    }
}

impl<M: Clone> Table<M> {
    fn get(&self, id: i64) -> Option<&M> {
        self.rows.get(&id)
    }

    fn values(&self) -> impl Iterator<Item = &M> {
        self.rows.values()
    }

    /// Ids come from a sequence and are never reused.
    fn insert_with(&mut self, build: impl FnOnce(i64) -> M) -> M {
        self.last_id += 1;
        let model = build(self.last_id);
        self.rows.insert(self.last_id, model.clone());
        model
    }

    fn replace(&mut self, id: i64, model: M) -> CatalogResult<M> {
        match self.rows.get_mut(&id) {
            Some(slot) => {
                *slot = model.clone();
                Ok(model)
            }
            None => Err(DbErr::RecordNotUpdated.into()),
        }
    }

    fn remove(&mut self, id: i64) -> bool {
        self.rows.remove(&id).is_some()
    }
}

#[derive(Default)]
struct Tables {
    categories: Table<category::Model>,
    subcategories: Table<subcategory::Model>,
    products: Table<product::Model>,
    inventories: Table<inventory::Model>,
}

fn required<V: Into<Value>>(mut value: ActiveValue<V>, column: &str) -> CatalogResult<V> {
    value
        .take()
        .ok_or_else(|| DbErr::Custom(format!("column \"{column}\" is not set")).into())
}

/// A column left `NotSet` on update keeps its stored value.
fn or_stored<V: Into<Value>>(mut value: ActiveValue<V>, stored: V) -> V {
    value.take().unwrap_or(stored)
}

fn unique_violation(table: &str, column: &str) -> CatalogError {
    DbErr::Custom(format!(
        "duplicate key value violates unique constraint \"{table}_{column}_key\""
    ))
    .into()
}

fn foreign_key_violation(table: &str, column: &str) -> CatalogError {
    DbErr::Custom(format!(
        "insert or update on table \"{table}\" violates foreign key constraint \"fk_{table}_{column}\""
    ))
    .into()
}

fn still_referenced(table: &str, child: &str) -> CatalogError {
    DbErr::Custom(format!(
        "update or delete on table \"{table}\" violates foreign key constraint on table \"{child}\""
    ))
    .into()
}

fn contains_ignore_case(haystack: &str, word: &str) -> bool {
    haystack.to_lowercase().contains(&word.to_lowercase())
}

fn sorted_page<E, T, F>(mut rows: Vec<T>, page: &PageRequest, model: F) -> CatalogResult<Page<T>>
where
    E: EntityTrait,
    F: Fn(&T) -> &E::Model,
{
    sort_rows::<E, T, F>(&mut rows, &page.sort, model)?;
    Ok(paginate_vec(rows, page))
}

impl Tables {
    fn seeded() -> Self {
        let mut tables = Self::default();

        for (name, description) in [
            ("Botanas", Some("Frituras, cacahuates y semillas")),
            ("Dulces", Some("Gomitas, chocolates y dulces de leche")),
            ("Bebidas", None),
            ("Panaderia", Some("Pan dulce y galletas")),
        ] {
            tables.categories.insert_with(|id| category::Model {
                id,
                name: name.to_string(),
                description: description.map(str::to_string),
            });
        }

        for (name, description, category_id) in [
            ("Cacahuates", Some("Cacahuates enchilados y salados"), 1),
            ("Gomitas", None, 2),
            ("Chocolates", Some("Chocolates y confitados"), 2),
            ("Dulces de leche", Some("Jamoncillos y obleas"), 2),
            ("Refrescos", None, 3),
        ] {
            tables.subcategories.insert_with(|id| subcategory::Model {
                id,
                name: name.to_string(),
                description: description.map(str::to_string),
                category_id,
            });
        }

        #[rustfmt::skip]
        let products = [
            ("Ardillas Saladas", Some("Cacahuate japones salado"), "90 g", 1850, "7501000000011", 1),
            ("Estrella Marina", Some("Gomita de grenetina azucarada"), "1 kg", 9500, "7501000000028", 2),
            ("Oso Almendrado", Some("Almendra cubierta de chocolate"), "250 g", 6490, "7501000000035", 3),
            ("Vaca Napolitana", None, "30 pz", 4200, "7501000000042", 4),
        ];
        for (name, description, size, cents, barcode, subcategory_id) in products {
            tables.products.insert_with(|id| product::Model {
                id,
                name: name.to_string(),
                description: description.map(str::to_string),
                size: size.to_string(),
                price: Decimal::new(cents, 2),
                barcode: barcode.to_string(),
                subcategory_id,
            });
        }

        for (product_id, (available, minimum, maximum)) in
            (1..).zip([(120, 20, 300), (15, 10, 80), (48, 12, 100), (0, 5, 60)])
        {
            tables.inventories.insert_with(|id| inventory::Model {
                id,
                quantity_available: available,
                minimum_stock: minimum,
                maximum_stock: maximum,
                product_id,
            });
        }

        tables
    }

    fn subcategory_row(
        &self,
        subcategory: subcategory::Model,
    ) -> CatalogResult<SubcategoryWithCategory> {
        let category = self
            .categories
            .get(subcategory.category_id)
            .cloned()
            .ok_or_else(|| missing_parent(EntityKind::Category, subcategory.category_id))?;
        Ok(SubcategoryWithCategory {
            subcategory,
            category,
        })
    }

    fn product_row(&self, product: product::Model) -> CatalogResult<ProductWithSubcategory> {
        let subcategory = self
            .subcategories
            .get(product.subcategory_id)
            .cloned()
            .ok_or_else(|| missing_parent(EntityKind::Subcategory, product.subcategory_id))?;
        Ok(ProductWithSubcategory {
            product,
            subcategory,
        })
    }

    fn inventory_row(&self, inventory: inventory::Model) -> CatalogResult<InventoryWithProduct> {
        let product = self
            .products
            .get(inventory.product_id)
            .cloned()
            .ok_or_else(|| missing_parent(EntityKind::Product, inventory.product_id))?;
        Ok(InventoryWithProduct { inventory, product })
    }

    fn check_category(&self, model: &category::Model) -> CatalogResult<()> {
        let taken = self
            .categories
            .values()
            .any(|other| other.id != model.id && other.name == model.name);
        if taken {
            return Err(unique_violation("categories", "name"));
        }
        Ok(())
    }

    fn check_subcategory(&self, model: &subcategory::Model) -> CatalogResult<()> {
        if self.categories.get(model.category_id).is_none() {
            return Err(foreign_key_violation("subcategories", "category_id"));
        }
        let taken = self
            .subcategories
            .values()
            .any(|other| other.id != model.id && other.name == model.name);
        if taken {
            return Err(unique_violation("subcategories", "name"));
        }
        Ok(())
    }

    fn check_product(&self, model: &product::Model) -> CatalogResult<()> {
        if self.subcategories.get(model.subcategory_id).is_none() {
            return Err(foreign_key_violation("products", "subcategory_id"));
        }
        let taken = self
            .products
            .values()
            .any(|other| other.id != model.id && other.barcode == model.barcode);
        if taken {
            return Err(unique_violation("products", "barcode"));
        }
        Ok(())
    }

    fn check_inventory(&self, model: &inventory::Model) -> CatalogResult<()> {
        if self.products.get(model.product_id).is_none() {
            return Err(foreign_key_violation("inventories", "product_id"));
        }
        let taken = self
            .inventories
            .values()
            .any(|other| other.id != model.id && other.product_id == model.product_id);
        if taken {
            return Err(unique_violation("inventories", "product_id"));
        }
        Ok(())
    }
}

/// Catalog kept in memory. Clones share the same tables.
#[derive(Clone, Default)]
pub struct InMemoryCatalog {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The four categories, five subcategories, four products and their stock
    /// records that the seed migration inserts, with the same ids.
    pub fn with_seed_data() -> Self {
        Self {
            tables: Arc::new(RwLock::new(Tables::seeded())),
        }
    }
}

#[async_trait]
impl CategoryRepository for InMemoryCatalog {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<category::Model>> {
        let tables = self.tables.read().await;
        let rows: Vec<category::Model> = tables.categories.values().cloned().collect();
        sorted_page::<category::Entity, _, _>(rows, page, |row| row)
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<category::Model>> {
        Ok(self.tables.read().await.categories.get(id).cloned())
    }

    async fn find_with_subcategories(
        &self,
        id: i64,
    ) -> CatalogResult<Option<CategoryWithSubcategories>> {
        let tables = self.tables.read().await;
        let Some(category) = tables.categories.get(id).cloned() else {
            return Ok(None);
        };
        let subcategories = tables
            .subcategories
            .values()
            .filter(|s| s.category_id == id)
            .cloned()
            .collect();

        Ok(Some(CategoryWithSubcategories {
            category,
            subcategories,
        }))
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .categories
            .values()
            .any(|c| c.name == name && Some(c.id) != exclude_id))
    }

    async fn insert(&self, category: category::ActiveModel) -> CatalogResult<category::Model> {
        let mut model = category::Model {
            id: 0,
            name: required(category.name, "name")?,
            description: required(category.description, "description")?,
        };

        let mut tables = self.tables.write().await;
        tables.check_category(&model)?;
        let saved = tables.categories.insert_with(|id| {
            model.id = id;
            model
        });
        tracing::info!(category_id = saved.id, "Created category");
        Ok(saved)
    }

    async fn update(&self, category: category::ActiveModel) -> CatalogResult<category::Model> {
        let model = category::Model {
            id: required(category.id, "id")?,
            name: required(category.name, "name")?,
            description: required(category.description, "description")?,
        };

        let mut tables = self.tables.write().await;
        tables.check_category(&model)?;
        tables.categories.replace(model.id, model)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let mut tables = self.tables.write().await;
        if tables.subcategories.values().any(|s| s.category_id == id) {
            return Err(still_referenced("categories", "subcategories"));
        }
        tables.categories.remove(id);
        Ok(())
    }
}

#[async_trait]
impl SubcategoryRepository for InMemoryCatalog {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<SubcategoryWithCategory>> {
        let tables = self.tables.read().await;
        let rows = tables
            .subcategories
            .values()
            .cloned()
            .map(|s| tables.subcategory_row(s))
            .collect::<CatalogResult<Vec<_>>>()?;
        sorted_page::<subcategory::Entity, _, _>(rows, page, |row| &row.subcategory)
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<subcategory::Model>> {
        Ok(self.tables.read().await.subcategories.get(id).cloned())
    }

    async fn find_with_relations(
        &self,
        id: i64,
    ) -> CatalogResult<Option<SubcategoryWithRelations>> {
        let tables = self.tables.read().await;
        let Some(subcategory) = tables.subcategories.get(id).cloned() else {
            return Ok(None);
        };
        let products = tables
            .products
            .values()
            .filter(|p| p.subcategory_id == id)
            .cloned()
            .collect();
        let SubcategoryWithCategory {
            subcategory,
            category,
        } = tables.subcategory_row(subcategory)?;

        Ok(Some(SubcategoryWithRelations {
            subcategory,
            category,
            products,
        }))
    }

    async fn exists_by_name(&self, name: &str, exclude_id: Option<i64>) -> CatalogResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .subcategories
            .values()
            .any(|s| s.name == name && Some(s.id) != exclude_id))
    }

    async fn insert(
        &self,
        subcategory: subcategory::ActiveModel,
    ) -> CatalogResult<SubcategoryWithCategory> {
        let mut model = subcategory::Model {
            id: 0,
            name: required(subcategory.name, "name")?,
            description: required(subcategory.description, "description")?,
            category_id: required(subcategory.category_id, "category_id")?,
        };

        let mut tables = self.tables.write().await;
        tables.check_subcategory(&model)?;
        let saved = tables.subcategories.insert_with(|id| {
            model.id = id;
            model
        });
        tracing::info!(subcategory_id = saved.id, "Created subcategory");
        tables.subcategory_row(saved)
    }

    async fn update(
        &self,
        subcategory: subcategory::ActiveModel,
    ) -> CatalogResult<SubcategoryWithCategory> {
        let id = required(subcategory.id, "id")?;
        let mut tables = self.tables.write().await;
        let stored = tables
            .subcategories
            .get(id)
            .cloned()
            .ok_or(DbErr::RecordNotUpdated)?;

        let model = subcategory::Model {
            id,
            name: required(subcategory.name, "name")?,
            description: required(subcategory.description, "description")?,
            category_id: or_stored(subcategory.category_id, stored.category_id),
        };
        tables.check_subcategory(&model)?;
        let saved = tables.subcategories.replace(model.id, model)?;
        tables.subcategory_row(saved)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let mut tables = self.tables.write().await;
        if tables.products.values().any(|p| p.subcategory_id == id) {
            return Err(still_referenced("subcategories", "products"));
        }
        tables.subcategories.remove(id);
        Ok(())
    }
}

impl InMemoryCatalog {
    async fn products_matching<F>(
        &self,
        page: &PageRequest,
        predicate: F,
    ) -> CatalogResult<Page<ProductWithSubcategory>>
    where
        F: Fn(&product::Model) -> bool,
    {
        let tables = self.tables.read().await;
        let rows = tables
            .products
            .values()
            .filter(|p| predicate(p))
            .cloned()
            .map(|p| tables.product_row(p))
            .collect::<CatalogResult<Vec<_>>>()?;
        sorted_page::<product::Entity, _, _>(rows, page, |row| &row.product)
    }
}

#[async_trait]
impl ProductRepository for InMemoryCatalog {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<ProductWithSubcategory>> {
        self.products_matching(page, |_| true).await
    }

    async fn find_all_by_name(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>> {
        self.products_matching(page, |p| contains_ignore_case(&p.name, word))
            .await
    }

    async fn find_all_by_description(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>> {
        self.products_matching(page, |p| {
            p.description
                .as_deref()
                .is_some_and(|d| contains_ignore_case(d, word))
        })
        .await
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<product::Model>> {
        Ok(self.tables.read().await.products.get(id).cloned())
    }

    async fn find_with_relations(&self, id: i64) -> CatalogResult<Option<ProductWithRelations>> {
        let tables = self.tables.read().await;
        let Some(product) = tables.products.get(id).cloned() else {
            return Ok(None);
        };
        let inventory = tables
            .inventories
            .values()
            .find(|i| i.product_id == id)
            .cloned();
        let ProductWithSubcategory {
            product,
            subcategory,
        } = tables.product_row(product)?;

        Ok(Some(ProductWithRelations {
            product,
            subcategory,
            inventory,
        }))
    }

    async fn exists_by_barcode(
        &self,
        barcode: &str,
        exclude_id: Option<i64>,
    ) -> CatalogResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .products
            .values()
            .any(|p| p.barcode == barcode && Some(p.id) != exclude_id))
    }

    async fn insert(&self, product: product::ActiveModel) -> CatalogResult<ProductWithSubcategory> {
        let mut model = product::Model {
            id: 0,
            name: required(product.name, "name")?,
            description: required(product.description, "description")?,
            size: required(product.size, "size")?,
            price: required(product.price, "price")?,
            barcode: required(product.barcode, "barcode")?,
            subcategory_id: required(product.subcategory_id, "subcategory_id")?,
        };

        let mut tables = self.tables.write().await;
        tables.check_product(&model)?;
        let saved = tables.products.insert_with(|id| {
            model.id = id;
            model
        });
        tracing::info!(product_id = saved.id, barcode = %saved.barcode, "Created product");
        tables.product_row(saved)
    }

    async fn update(&self, product: product::ActiveModel) -> CatalogResult<ProductWithSubcategory> {
        let id = required(product.id, "id")?;
        let mut tables = self.tables.write().await;
        let stored = tables
            .products
            .get(id)
            .cloned()
            .ok_or(DbErr::RecordNotUpdated)?;

        let model = product::Model {
            id,
            name: required(product.name, "name")?,
            description: required(product.description, "description")?,
            size: required(product.size, "size")?,
            price: required(product.price, "price")?,
            barcode: required(product.barcode, "barcode")?,
            subcategory_id: or_stored(product.subcategory_id, stored.subcategory_id),
        };
        tables.check_product(&model)?;
        let saved = tables.products.replace(model.id, model)?;
        tables.product_row(saved)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let mut tables = self.tables.write().await;
        if tables.inventories.values().any(|i| i.product_id == id) {
            return Err(still_referenced("products", "inventories"));
        }
        tables.products.remove(id);
        Ok(())
    }
}

#[async_trait]
impl InventoryRepository for InMemoryCatalog {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<InventoryWithProduct>> {
        let tables = self.tables.read().await;
        let rows = tables
            .inventories
            .values()
            .cloned()
            .map(|i| tables.inventory_row(i))
            .collect::<CatalogResult<Vec<_>>>()?;
        sorted_page::<inventory::Entity, _, _>(rows, page, |row| &row.inventory)
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<inventory::Model>> {
        Ok(self.tables.read().await.inventories.get(id).cloned())
    }

    async fn find_with_product(&self, id: i64) -> CatalogResult<Option<InventoryWithProduct>> {
        let tables = self.tables.read().await;
        match tables.inventories.get(id).cloned() {
            Some(inventory) => tables.inventory_row(inventory).map(Some),
            None => Ok(None),
        }
    }

    async fn exists_by_product_id(
        &self,
        product_id: i64,
        exclude_id: Option<i64>,
    ) -> CatalogResult<bool> {
        let tables = self.tables.read().await;
        Ok(tables
            .inventories
            .values()
            .any(|i| i.product_id == product_id && Some(i.id) != exclude_id))
    }

    async fn insert(
        &self,
        inventory: inventory::ActiveModel,
    ) -> CatalogResult<InventoryWithProduct> {
        let mut model = inventory::Model {
            id: 0,
            quantity_available: required(inventory.quantity_available, "quantity_available")?,
            minimum_stock: required(inventory.minimum_stock, "minimum_stock")?,
            maximum_stock: required(inventory.maximum_stock, "maximum_stock")?,
            product_id: required(inventory.product_id, "product_id")?,
        };

        let mut tables = self.tables.write().await;
        tables.check_inventory(&model)?;
        let saved = tables.inventories.insert_with(|id| {
            model.id = id;
            model
        });
        tracing::info!(
            inventory_id = saved.id,
            product_id = saved.product_id,
            "Created inventory"
        );
        tables.inventory_row(saved)
    }

    async fn update(
        &self,
        inventory: inventory::ActiveModel,
    ) -> CatalogResult<InventoryWithProduct> {
        let model = inventory::Model {
            id: required(inventory.id, "id")?,
            quantity_available: required(inventory.quantity_available, "quantity_available")?,
            minimum_stock: required(inventory.minimum_stock, "minimum_stock")?,
            maximum_stock: required(inventory.maximum_stock, "maximum_stock")?,
            product_id: required(inventory.product_id, "product_id")?,
        };

        let mut tables = self.tables.write().await;
        tables.check_inventory(&model)?;
        let saved = tables.inventories.replace(model.id, model)?;
        tables.inventory_row(saved)
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        self.tables.write().await.inventories.remove(id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use database::Sort;
    use sea_orm::ActiveValue::{NotSet, Set, Unchanged};

    fn vinos() -> category::ActiveModel {
        category::ActiveModel {
            id: NotSet,
            name: Set("Vinos".into()),
            description: Set(Some("Tintos y blancos".into())),
        }
    }

    fn names<T>(page: &Page<T>, name: impl Fn(&T) -> &str) -> Vec<String> {
        page.items.iter().map(|row| name(row).to_string()).collect()
    }

    #[tokio::test]
    async fn test_seed_matches_migration_ids() {
        let catalog = InMemoryCatalog::with_seed_data();

        let bebidas = CategoryRepository::find_by_id(&catalog, 3).await.unwrap().unwrap();
        assert_eq!(bebidas.name, "Bebidas");
        assert_eq!(bebidas.description, None);

        let stock = InventoryRepository::find_with_product(&catalog, 4)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stock.inventory.quantity_available, 0);
        assert_eq!(stock.product.name, "Vaca Napolitana");
    }

    #[tokio::test]
    async fn test_insert_continues_after_seed() {
        let catalog = InMemoryCatalog::with_seed_data();
        let saved = CategoryRepository::insert(&catalog, vinos()).await.unwrap();
        assert_eq!(saved.id, 5);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let catalog = InMemoryCatalog::new();
        let first = CategoryRepository::insert(&catalog, vinos()).await.unwrap();
        CategoryRepository::delete_by_id(&catalog, first.id).await.unwrap();

        let second = CategoryRepository::insert(&catalog, vinos()).await.unwrap();
        assert_eq!(second.id, first.id + 1);
    }

    #[tokio::test]
    async fn test_duplicate_name_is_a_storage_error() {
        let catalog = InMemoryCatalog::new();
        CategoryRepository::insert(&catalog, vinos()).await.unwrap();

        let err = CategoryRepository::insert(&catalog, vinos()).await.unwrap_err();
        assert!(matches!(err, CatalogError::Database(DbErr::Custom(_))));
    }

    #[tokio::test]
    async fn test_update_missing_row() {
        let catalog = InMemoryCatalog::new();
        let err = CategoryRepository::update(
            &catalog,
            category::ActiveModel {
                id: Unchanged(9),
                ..vinos()
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, CatalogError::Database(DbErr::RecordNotUpdated)));
    }

    #[tokio::test]
    async fn test_update_without_parent_keeps_stored_link() {
        let catalog = InMemoryCatalog::with_seed_data();
        let row = SubcategoryRepository::update(
            &catalog,
            subcategory::ActiveModel {
                id: Unchanged(3),
                name: Set("Chocolates finos".into()),
                description: Set(None),
                category_id: NotSet,
            },
        )
        .await
        .unwrap();

        assert_eq!(row.subcategory.category_id, 2);
        assert_eq!(row.category.name, "Dulces");
    }

    #[tokio::test]
    async fn test_subcategory_needs_existing_category() {
        let catalog = InMemoryCatalog::with_seed_data();
        let err = SubcategoryRepository::insert(
            &catalog,
            subcategory::ActiveModel {
                id: NotSet,
                name: Set("Tintos".into()),
                description: Set(None),
                category_id: Set(99),
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("foreign key"));
    }

    #[tokio::test]
    async fn test_delete_referenced_category_is_refused() {
        let catalog = InMemoryCatalog::with_seed_data();
        let err = CategoryRepository::delete_by_id(&catalog, 2).await.unwrap_err();
        assert!(matches!(err, CatalogError::Database(_)));
        assert!(CategoryRepository::find_by_id(&catalog, 2).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_missing_is_ok() {
        let catalog = InMemoryCatalog::with_seed_data();
        assert!(ProductRepository::delete_by_id(&catalog, 999).await.is_ok());
    }

    #[tokio::test]
    async fn test_name_search_ignores_case() {
        let catalog = InMemoryCatalog::with_seed_data();
        let page = ProductRepository::find_all_by_name(&catalog, "NA", &PageRequest::default())
            .await
            .unwrap();
        assert_eq!(
            names(&page, |row| &row.product.name),
            vec!["Estrella Marina", "Vaca Napolitana"]
        );
    }

    #[tokio::test]
    async fn test_description_search_skips_null_descriptions() {
        let catalog = InMemoryCatalog::with_seed_data();
        let page =
            ProductRepository::find_all_by_description(&catalog, "a", &PageRequest::default())
                .await
                .unwrap();
        assert_eq!(page.total_elements, 3);
        assert!(page.items.iter().all(|row| row.product.name != "Vaca Napolitana"));
    }

    #[tokio::test]
    async fn test_find_all_sorts_and_pages() {
        let catalog = InMemoryCatalog::with_seed_data();
        let request = PageRequest::new(1, 2).unwrap().with_sort(Sort::desc("name"));
        let page = CategoryRepository::find_all(&catalog, &request).await.unwrap();

        assert_eq!(names(&page, |row| &row.name), vec!["Botanas", "Bebidas"]);
        assert_eq!(page.total_elements, 4);
        assert_eq!(page.total_pages(), 2);
    }

    #[tokio::test]
    async fn test_find_all_by_camel_case_field() {
        let catalog = InMemoryCatalog::with_seed_data();
        let request = PageRequest::default().with_sort(Sort::asc("quantityAvailable"));
        let page = InventoryRepository::find_all(&catalog, &request).await.unwrap();

        let quantities: Vec<i16> = page
            .items
            .iter()
            .map(|row| row.inventory.quantity_available)
            .collect();
        assert_eq!(quantities, vec![0, 15, 48, 120]);
    }

    #[tokio::test]
    async fn test_unknown_sort_field() {
        let catalog = InMemoryCatalog::with_seed_data();
        let request = PageRequest::default().with_sort(Sort::asc("colour"));
        let err = CategoryRepository::find_all(&catalog, &request).await.unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPage(_)));
    }

    #[tokio::test]
    async fn test_inventory_product_is_unique() {
        let catalog = InMemoryCatalog::with_seed_data();
        let err = InventoryRepository::insert(
            &catalog,
            inventory::ActiveModel {
                id: NotSet,
                quantity_available: Set(1),
                minimum_stock: Set(1),
                maximum_stock: Set(1),
                product_id: Set(1),
            },
        )
        .await
        .unwrap_err();
        assert!(err.to_string().contains("inventories_product_id_key"));
    }
}
