use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::version::application::domain::entities::Version;
use crate::modules::version::application::ports::outgoing::{VersionQuery, VersionQueryError};

use super::sea_orm_entity::{Column, Entity as VersionEntity};

#[derive(Debug, Clone)]
pub struct VersionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl VersionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl VersionQuery for VersionQueryPostgres {
    async fn get_versions(&self, product_id: Uuid) -> Result<Vec<Version>, VersionQueryError> {
        let rows = VersionEntity::find()
            .filter(Column::ProductId.eq(product_id))
            .order_by_desc(Column::MaxVersion)
            .all(&*self.db)
            .await
            .map_err(|e| VersionQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.iter().map(|m| m.to_domain()).collect())
    }

    async fn get_default_version(
        &self,
        product_id: Uuid,
    ) -> Result<Option<Version>, VersionQueryError> {
        let row = VersionEntity::find()
            .filter(Column::ProductId.eq(product_id))
            .filter(Column::IsDefault.eq(true))
            .one(&*self.db)
            .await
            .map_err(|e| VersionQueryError::DatabaseError(e.to_string()))?;

        Ok(row.map(|m| m.to_domain()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    use super::super::sea_orm_entity::Model as VersionModel;

    fn version_model(product_id: Uuid, name: &str, max_version: f64, is_default: bool) -> VersionModel {
        let now = Utc::now().fixed_offset();

        VersionModel {
            id: Uuid::new_v4(),
            product_id,
            name: name.to_string(),
            slug: name.to_lowercase(),
            min_version: max_version - 0.9,
            max_version,
            visible: true,
            is_default,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_get_versions_newest_first() {
        let product_id = Uuid::new_v4();
        let rows = vec![
            version_model(product_id, "116", 116.9, false),
            version_model(product_id, "115", 115.9, true),
        ];

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![rows])
            .into_connection();

        let query = VersionQueryPostgres::new(Arc::new(db));

        let result = query.get_versions(product_id).await;

        assert!(result.is_ok());
        let versions = result.unwrap();
        assert_eq!(versions.len(), 2);
        assert_eq!(versions[0].name, "116");
        assert_eq!(versions[1].name, "115");
    }

    #[tokio::test]
    async fn test_get_versions_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<VersionModel>::new()])
            .into_connection();

        let query = VersionQueryPostgres::new(Arc::new(db));

        let result = query.get_versions(Uuid::new_v4()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_default_version_found() {
        let product_id = Uuid::new_v4();
        let default = version_model(product_id, "115", 115.9, true);

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![default]])
            .into_connection();

        let query = VersionQueryPostgres::new(Arc::new(db));

        let result = query.get_default_version(product_id).await;

        assert!(result.is_ok());
        let version = result.unwrap();
        assert!(version.is_some());
        assert!(version.unwrap().is_default);
    }

    #[tokio::test]
    async fn test_get_default_version_none_marked() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<VersionModel>::new()])
            .into_connection();

        let query = VersionQueryPostgres::new(Arc::new(db));

        let result = query.get_default_version(Uuid::new_v4()).await;

        assert!(result.is_ok());
        assert!(result.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_get_versions_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection closed".into(),
            ))])
            .into_connection();

        let query = VersionQueryPostgres::new(Arc::new(db));

        let result = query.get_versions(Uuid::new_v4()).await;

        assert!(matches!(result, Err(VersionQueryError::DatabaseError(_))));
    }
}
