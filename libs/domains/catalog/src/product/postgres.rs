use async_trait::async_trait;
use database::{BaseRepository, Page, PageRequest};
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::sea_query::{Expr, LikeExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, LoaderTrait, ModelTrait, QueryFilter,
};

use super::repository::{ProductRepository, ProductWithRelations, ProductWithSubcategory};
use crate::entity::{inventory, product, subcategory};
use crate::error::{CatalogResult, EntityKind};
use crate::shared::missing_parent;

pub struct PgProductRepository {
    base: BaseRepository<product::Entity>,
}

impl PgProductRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    async fn find_page_where(
        &self,
        condition: Condition,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>> {
        let select = product::Entity::find().filter(condition);
        let mut page = self.base.find_page(select, page).await?;
        let rows = std::mem::take(&mut page.items);

        let subcategories = rows.load_one(subcategory::Entity, self.base.db()).await?;
        let items = rows
            .into_iter()
            .zip(subcategories)
            .map(|(product, subcategory)| match subcategory {
                Some(subcategory) => Ok(ProductWithSubcategory {
                    product,
                    subcategory,
                }),
                None => Err(missing_parent(EntityKind::Subcategory, product.subcategory_id)),
            })
            .collect::<CatalogResult<Vec<_>>>()?;

        Ok(page.replace_items(items))
    }

    async fn with_subcategory(
        &self,
        product: product::Model,
    ) -> CatalogResult<ProductWithSubcategory> {
        let subcategory = product
            .find_related(subcategory::Entity)
            .one(self.base.db())
            .await?
            .ok_or_else(|| missing_parent(EntityKind::Subcategory, product.subcategory_id))?;

        Ok(ProductWithSubcategory {
            product,
            subcategory,
        })
    }
}

/// `column ILIKE '%word%'` with `word` matched literally.
fn contains_ignore_case(column: product::Column, word: &str) -> Condition {
    let pattern = format!("%{}%", escape_like(word));
    let like = LikeExpr::new(pattern).escape('\\');
    Condition::all().add(Expr::col((product::Entity, column)).ilike(like))
}

fn escape_like(word: &str) -> String {
    let mut escaped = String::with_capacity(word.len());
    for ch in word.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn find_all(&self, page: &PageRequest) -> CatalogResult<Page<ProductWithSubcategory>> {
        self.find_page_where(Condition::all(), page).await
    }

    async fn find_all_by_name(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>> {
        self.find_page_where(contains_ignore_case(product::Column::Name, word), page)
            .await
    }

    async fn find_all_by_description(
        &self,
        word: &str,
        page: &PageRequest,
    ) -> CatalogResult<Page<ProductWithSubcategory>> {
        self.find_page_where(contains_ignore_case(product::Column::Description, word), page)
            .await
    }

    async fn find_by_id(&self, id: i64) -> CatalogResult<Option<product::Model>> {
        Ok(self.base.find_by_id(id).await?)
    }

    async fn find_with_relations(&self, id: i64) -> CatalogResult<Option<ProductWithRelations>> {
        let Some(product) = self.base.find_by_id(id).await? else {
            return Ok(None);
        };

        let inventory = product
            .find_related(inventory::Entity)
            .one(self.base.db())
            .await?;
        let ProductWithSubcategory {
            product,
            subcategory,
        } = self.with_subcategory(product).await?;

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
        let mut condition = Condition::all().add(product::Column::Barcode.eq(barcode));
        if let Some(id) = exclude_id {
            condition = condition.add(product::Column::Id.ne(id));
        }
        Ok(self.base.exists(condition).await?)
    }

    async fn insert(&self, product: product::ActiveModel) -> CatalogResult<ProductWithSubcategory> {
        let model = self.base.insert(product).await?;
        tracing::info!(product_id = model.id, barcode = %model.barcode, "Created product");
        self.with_subcategory(model).await
    }

    async fn update(&self, product: product::ActiveModel) -> CatalogResult<ProductWithSubcategory> {
        let model = self.base.update(product).await?;
        tracing::info!(product_id = model.id, "Updated product");
        self.with_subcategory(model).await
    }

    async fn delete_by_id(&self, id: i64) -> CatalogResult<()> {
        let rows = self.base.delete_by_id(id).await?;
        if rows > 0 {
            tracing::info!(product_id = id, "Deleted product");
        }
        Ok(())
    }
}
