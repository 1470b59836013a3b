use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set, SqlErr,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::platform::adapter::outgoing::sea_orm_entity as platforms;
use crate::modules::platform::application::domain::entities::Platform;
use crate::modules::product::application::ports::outgoing::{
    ProductPlatformRepository, ProductPlatformRepositoryError,
};

// SeaORM entity imports
use super::sea_orm_entity::product_platforms::{
    ActiveModel as LinkActiveModel, Column as LinkColumn, Entity as LinkEntity,
};

#[derive(Debug, Clone)]
pub struct ProductPlatformRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProductPlatformRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_err(e: DbErr) -> ProductPlatformRepositoryError {
        // Composite primary key doubles as the uniqueness constraint
        if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
            return ProductPlatformRepositoryError::AlreadyLinked;
        }

        ProductPlatformRepositoryError::DatabaseError(e.to_string())
    }
}

#[async_trait]
impl ProductPlatformRepository for ProductPlatformRepositoryPostgres {
    async fn add_platform(
        &self,
        product_id: Uuid,
        platform_id: Uuid,
    ) -> Result<(), ProductPlatformRepositoryError> {
        let active = LinkActiveModel {
            product_id: Set(product_id),
            platform_id: Set(platform_id),
            ..Default::default()
        };

        active.insert(&*self.db).await.map_err(Self::map_err)?;

        Ok(())
    }

    async fn get_platforms(
        &self,
        product_id: Uuid,
    ) -> Result<Vec<Platform>, ProductPlatformRepositoryError> {
        let models = platforms::Entity::find()
            .join(
                JoinType::InnerJoin,
                platforms::Relation::ProductPlatforms.def(),
            )
            .filter(LinkColumn::ProductId.eq(product_id))
            .order_by_asc(platforms::Column::DisplayOrder)
            .all(&*self.db)
            .await
            .map_err(Self::map_err)?;

        Ok(models.into_iter().map(|m| m.to_domain()).collect())
    }

    async fn clear_platforms(
        &self,
        product_id: Uuid,
    ) -> Result<u64, ProductPlatformRepositoryError> {
        let result = LinkEntity::delete_many()
            .filter(LinkColumn::ProductId.eq(product_id))
            .exec(&*self.db)
            .await
            .map_err(Self::map_err)?;

        Ok(result.rows_affected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    use super::super::sea_orm_entity::product_platforms::Model as LinkModel;

    fn link_model(product_id: Uuid, platform_id: Uuid) -> LinkModel {
        LinkModel {
            product_id,
            platform_id,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn platform_model(name: &str, display_order: i32) -> platforms::Model {
        let now = Utc::now().fixed_offset();

        platforms::Model {
            id: Uuid::new_v4(),
            name: name.to_string(),
            slug: name.to_lowercase(),
            visible: true,
            display_order,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_add_platform_success() {
        let product_id = Uuid::new_v4();
        let platform_id = Uuid::new_v4();

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![link_model(product_id, platform_id)]])
            .into_connection();

        let repo = ProductPlatformRepositoryPostgres::new(Arc::new(db));

        let result = repo.add_platform(product_id, platform_id).await;

        assert!(result.is_ok(), "Expected success, got {:?}", result);
    }

    #[tokio::test]
    async fn test_add_platform_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "insert failed".into(),
            ))])
            .into_connection();

        let repo = ProductPlatformRepositoryPostgres::new(Arc::new(db));

        let result = repo.add_platform(Uuid::new_v4(), Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(ProductPlatformRepositoryError::DatabaseError(_))
        ));
    }

    #[tokio::test]
    async fn test_get_platforms_in_display_order() {
        let product_id = Uuid::new_v4();
        let windows = platform_model("Windows", 1);
        let linux = platform_model("Linux", 2);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![windows.clone(), linux.clone()]])
            .into_connection();

        let repo = ProductPlatformRepositoryPostgres::new(Arc::new(db));

        let result = repo.get_platforms(product_id).await;

        assert!(result.is_ok());
        let platforms = result.unwrap();
        assert_eq!(platforms.len(), 2);
        assert_eq!(platforms[0].name, "Windows");
        assert_eq!(platforms[1].name, "Linux");
    }

    #[tokio::test]
    async fn test_get_platforms_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<platforms::Model>::new()])
            .into_connection();

        let repo = ProductPlatformRepositoryPostgres::new(Arc::new(db));

        let result = repo.get_platforms(Uuid::new_v4()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_clear_platforms_reports_rows_affected() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            .into_connection();

        let repo = ProductPlatformRepositoryPostgres::new(Arc::new(db));

        let result = repo.clear_platforms(Uuid::new_v4()).await;

        assert_eq!(result.unwrap(), 2);
    }
}
