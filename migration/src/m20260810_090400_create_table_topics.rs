use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // =====================================================
        // Create topics table
        // =====================================================
        manager
            .create_table(
                Table::create()
                    .table(Topics::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Topics::Id)
                            .uuid()
                            .not_null()
                            .primary_key()
                            .default(Expr::cust("gen_random_uuid()")),
                    )
                    .col(ColumnDef::new(Topics::ProductId).uuid().not_null())
                    .col(ColumnDef::new(Topics::ParentId).uuid())
                    .col(ColumnDef::new(Topics::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Topics::Slug).string_len(255).not_null())
                    .col(ColumnDef::new(Topics::Description).text().not_null())
                    .col(ColumnDef::new(Topics::Image).text())
                    .col(ColumnDef::new(Topics::DisplayOrder).integer().not_null())
                    .col(
                        ColumnDef::new(Topics::Visible)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Topics::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(Topics::UpdatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_product_id")
                            .from(Topics::Table, Topics::ProductId)
                            .to(Products::Table, Products::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    // Subtopics go away with their parent
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_topics_parent_id")
                            .from(Topics::Table, Topics::ParentId)
                            .to(Topics::Table, Topics::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // =====================================================
        // Indexes
        // =====================================================

        // Slug is only unique within a product
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE UNIQUE INDEX idx_topics_product_slug_unique
                ON topics (product_id, slug);
                "#,
            )
            .await?;

        // Canonical listing order: product, then display_order
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_product_display_order
                ON topics (product_id, display_order);
                "#,
            )
            .await?;

        // Fast subtopic lookup
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX idx_topics_parent_id
                ON topics (parent_id);
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
                CREATE TRIGGER update_topics_updated_at
                BEFORE UPDATE ON topics
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
                DROP TRIGGER IF EXISTS update_topics_updated_at ON topics;
                "#,
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_topics_product_slug_unique;
                DROP INDEX IF EXISTS idx_topics_product_display_order;
                DROP INDEX IF EXISTS idx_topics_parent_id;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Topics::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Topics {
    Table,
    Id,
    ProductId,
    ParentId,
    Title,
    Slug,
    Description,
    Image,
    DisplayOrder,
    Visible,
    CreatedAt,
    UpdatedAt,
}

#[derive(DeriveIden)]
enum Products {
    Table,
    Id,
}
