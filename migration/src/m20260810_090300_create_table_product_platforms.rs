use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create product_platforms join table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(ProductPlatforms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ProductPlatforms::ProductId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductPlatforms::PlatformId)
                            .uuid()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(ProductPlatforms::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    // Composite primary key
                    .primary_key(
                        Index::create()
                            .col(ProductPlatforms::ProductId)
                            .col(ProductPlatforms::PlatformId),
                    )
                    // FK → products
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_platforms_product_id")
                            .from(ProductPlatforms::Table, ProductPlatforms::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // FK → platforms
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_product_platforms_platform_id")
                            .from(ProductPlatforms::Table, ProductPlatforms::PlatformId)
                            .to(Platforms::Table, Platforms::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Fast lookup: all products for a platform
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_product_platforms_platform_id
                ON product_platforms (platform_id);
                "#,
            )
            .await?;

        // Fast lookup: all platforms for a product
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_product_platforms_product_id
                ON product_platforms (product_id);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_product_platforms_platform_id;
                DROP INDEX IF EXISTS idx_product_platforms_product_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ProductPlatforms::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ProductPlatforms {
    Table,
    ProductId,
    PlatformId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Platforms {
    Table,
    Id,
}
