use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Categories::Table)
                    .if_not_exists()
                    .col(big_id(Categories::Id))
                    .col(string_len(Categories::Name, 50).unique_key())
                    .col(string_len_null(Categories::Description, 150))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Subcategories::Table)
                    .if_not_exists()
                    .col(big_id(Subcategories::Id))
                    .col(string_len(Subcategories::Name, 50).unique_key())
                    .col(string_len_null(Subcategories::Description, 150))
                    .col(big_integer(Subcategories::CategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_subcategories_category_id")
                            .from(Subcategories::Table, Subcategories::CategoryId)
                            .to(Categories::Table, Categories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Products::Table)
                    .if_not_exists()
                    .col(big_id(Products::Id))
                    .col(string_len(Products::Name, 50))
                    .col(string_len_null(Products::Description, 150))
                    .col(string_len(Products::Size, 10))
                    .col(decimal_len(Products::Price, 8, 2))
                    .col(char_len(Products::Barcode, 13).unique_key())
                    .col(big_integer(Products::SubcategoryId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_products_subcategory_id")
                            .from(Products::Table, Products::SubcategoryId)
                            .to(Subcategories::Table, Subcategories::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Inventories::Table)
                    .if_not_exists()
                    .col(big_id(Inventories::Id))
                    .col(small_integer(Inventories::QuantityAvailable))
                    .col(small_integer(Inventories::MinimumStock))
                    .col(small_integer(Inventories::MaximumStock))
                    .col(big_integer(Inventories::ProductId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_inventories_product_id")
                            .from(Inventories::Table, Inventories::ProductId)
                            .to(Products::Table, Products::Id),
                    )
                    .to_owned(),
            )
            .await?;

        // Lookups by parent
        manager
            .create_index(
                Index::create()
                    .name("idx_subcategories_category_id")
                    .table(Subcategories::Table)
                    .col(Subcategories::CategoryId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_products_subcategory_id")
                    .table(Products::Table)
                    .col(Products::SubcategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Inventories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Products::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subcategories::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Categories::Table).to_owned())
            .await?;

        Ok(())
    }
}

/// `BIGSERIAL`-style primary key.
fn big_id<T: IntoIden>(col: T) -> ColumnDef {
    ColumnDef::new(col)
        .big_integer()
        .not_null()
        .auto_increment()
        .primary_key()
        .to_owned()
}

#[derive(DeriveIden)]
enum Categories {
    Table,
    Id,
    Name,
    Description,
}

#[derive(DeriveIden)]
enum Subcategories {
    Table,
    Id,
    Name,
    Description,
    CategoryId,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
    Name,
    Description,
    Size,
    Price,
    Barcode,
    SubcategoryId,
}

#[derive(DeriveIden)]
enum Inventories {
    Table,
    Id,
    QuantityAvailable,
    MinimumStock,
    MaximumStock,
    ProductId,
}
