use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

// Ids are left to the sequences so that new rows continue after the seed.
#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            r#"
            INSERT INTO categories (name, description)
            VALUES
                ('Botanas', 'Frituras, cacahuates y semillas'),
                ('Dulces', 'Gomitas, chocolates y dulces de leche'),
                ('Bebidas', NULL),
                ('Panaderia', 'Pan dulce y galletas')
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO subcategories (name, description, category_id)
            SELECT v.name, v.description, c.id
            FROM (VALUES
                ('Cacahuates', 'Cacahuates enchilados y salados', 'Botanas'),
                ('Gomitas', NULL, 'Dulces'),
                ('Chocolates', 'Chocolates y confitados', 'Dulces'),
                ('Dulces de leche', 'Jamoncillos y obleas', 'Dulces'),
                ('Refrescos', NULL, 'Bebidas')
            ) AS v(name, description, category)
            JOIN categories c ON c.name = v.category
            ON CONFLICT (name) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO products (name, description, size, price, barcode, subcategory_id)
            SELECT v.name, v.description, v.size, v.price, v.barcode, s.id
            FROM (VALUES
                ('Ardillas Saladas', 'Cacahuate japones salado', '90 g', 18.50, '7501000000011', 'Cacahuates'),
                ('Estrella Marina', 'Gomita de grenetina azucarada', '1 kg', 95.00, '7501000000028', 'Gomitas'),
                ('Oso Almendrado', 'Almendra cubierta de chocolate', '250 g', 64.90, '7501000000035', 'Chocolates'),
                ('Vaca Napolitana', NULL, '30 pz', 42.00, '7501000000042', 'Dulces de leche')
            ) AS v(name, description, size, price, barcode, subcategory)
            JOIN subcategories s ON s.name = v.subcategory
            ON CONFLICT (barcode) DO NOTHING
            "#,
        )
        .await?;

        db.execute_unprepared(
            r#"
            INSERT INTO inventories (quantity_available, minimum_stock, maximum_stock, product_id)
            SELECT v.available, v.minimum, v.maximum, p.id
            FROM (VALUES
                (120, 20, 300, '7501000000011'),
                (15, 10, 80, '7501000000028'),
                (48, 12, 100, '7501000000035'),
                (0, 5, 60, '7501000000042')
            ) AS v(available, minimum, maximum, barcode)
            JOIN products p ON p.barcode = v.barcode
            ON CONFLICT (product_id) DO NOTHING
            "#,
        )
        .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        db.execute_unprepared(
            "DELETE FROM inventories WHERE product_id IN \
             (SELECT id FROM products WHERE barcode IN \
             ('7501000000011', '7501000000028', '7501000000035', '7501000000042'))",
        )
        .await?;
        db.execute_unprepared(
            "DELETE FROM products WHERE barcode IN \
             ('7501000000011', '7501000000028', '7501000000035', '7501000000042')",
        )
        .await?;
        db.execute_unprepared(
            "DELETE FROM subcategories WHERE name IN \
             ('Cacahuates', 'Gomitas', 'Chocolates', 'Dulces de leche', 'Refrescos')",
        )
        .await?;
        db.execute_unprepared(
            "DELETE FROM categories WHERE name IN ('Botanas', 'Dulces', 'Bebidas', 'Panaderia')",
        )
        .await?;

        Ok(())
    }
}
