use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create versions table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Versions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Versions::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Versions::ProductId).uuid().not_null())
                    .col(ColumnDef::new(Versions::Name).string_len(255).not_null())
                    .col(ColumnDef::new(Versions::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Versions::MinVersion).double().not_null())
                    .col(ColumnDef::new(Versions::MaxVersion).double().not_null())
                    .col(ColumnDef::new(Versions::Visible).boolean().not_null())
                    .col(
                        ColumnDef::new(Versions::IsDefault)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Versions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Versions::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_versions_product_id")
                            .from(Versions::Table, Versions::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // At most one default version per product. Partial index so that
        // non-default versions coexist freely; this also closes the race
        // between the application-level check and the write.
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_versions_product_default_unique
                ON versions (product_id)
                WHERE is_default;
                "#,
            )
            .await?;

        // Canonical listing order: max_version descending
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_versions_product_max_version
                ON versions (product_id, max_version DESC);
                "#,
            )
            .await?;

        // =====================================================
        // updated_at trigger
        // =====================================================
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE TRIGGER update_versions_updated_at
                BEFORE UPDATE ON versions
                FOR EACH ROW
                EXECUTE FUNCTION update_updated_at_column();
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
                DROP TRIGGER IF EXISTS update_versions_updated_at ON versions;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_versions_product_default_unique;
                DROP INDEX IF EXISTS idx_versions_product_max_version;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Versions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Versions {
    Table,
    Id,
    ProductId,
    Name,
    Slug,
    MinVersion,
    MaxVersion,
    Visible,
    IsDefault,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}
